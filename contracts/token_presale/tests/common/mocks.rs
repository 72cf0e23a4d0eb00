use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

/// Arguments of the most recent `add_liquidity` call.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RouterCall {
    pub amount_a_desired: i128,
    pub amount_b_desired: i128,
    pub amount_a_min: i128,
    pub amount_b_min: i128,
    pub to: Address,
    pub deadline: u64,
}

#[derive(Clone)]
#[contracttype]
enum MockKey {
    LastCall,
    Price,
}

// Pulls both sides from `to` through the allowances it granted.
#[contract]
pub struct MockRouter;

#[contractimpl]
impl MockRouter {
    pub fn add_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128) {
        let this = env.current_contract_address();
        token::Client::new(&env, &token_a).transfer_from(&this, &to, &this, &amount_a_desired);
        token::Client::new(&env, &token_b).transfer_from(&this, &to, &this, &amount_b_desired);

        let call = RouterCall {
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            to,
            deadline,
        };
        env.storage().instance().set(&MockKey::LastCall, &call);
        (
            amount_a_desired,
            amount_b_desired,
            amount_a_desired.min(amount_b_desired),
        )
    }

    pub fn last_call(env: Env) -> Option<RouterCall> {
        env.storage().instance().get(&MockKey::LastCall)
    }
}

#[contract]
pub struct MockOracle;

#[contractimpl]
impl MockOracle {
    pub fn set_price(env: Env, price: i128, timestamp: u64) {
        env.storage()
            .instance()
            .set(&MockKey::Price, &(price, timestamp));
    }

    /// Unset feeds report a zero price.
    pub fn latest_price(env: Env) -> (i128, u64) {
        env.storage()
            .instance()
            .get(&MockKey::Price)
            .unwrap_or((0, 0))
    }
}
