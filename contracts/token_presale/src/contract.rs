use crate::constants::{MAX_MARKETING_PERCENTAGE, MAX_TOKEN_DECIMALS};
use crate::errors::PresaleError;
use crate::events;
use crate::finalize;
use crate::pricing::{native_cost, stable_decimals, to_i128, tokens_for_stable};
use crate::schedule;
use crate::storage::*;
use crate::types::*;
use crate::vesting;
use crate::whitelist;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Multi-presale token sale with whitelisting, vesting and liquidity finalization"
);

#[contract]
pub struct TokenPresaleContract;

/// Shared purchase gating: open window, whitelist, allocation caps.
fn check_purchase(
    env: &Env,
    presale: &Presale,
    record: &PurchaseRecord,
    buyer: &Address,
    amount_tokens: u128,
) -> Result<(), PresaleError> {
    let now = get_ledger_timestamp(env);
    let times = get_times(env, presale.id);
    if !schedule::is_sale_open(presale, times.as_ref(), now) {
        log!(env, "purchase outside sale window", presale.id, now);
        return Err(PresaleError::SaleNotOpen);
    }
    if !whitelist::is_eligible(env, presale, times.as_ref(), buyer, now) {
        log!(env, "purchase by non-whitelisted buyer", presale.id, buyer.clone());
        return Err(PresaleError::NotWhitelisted);
    }
    if amount_tokens > presale.amount_remaining {
        return Err(PresaleError::CapExceeded);
    }
    let purchased = record
        .total_purchased
        .checked_add(amount_tokens)
        .ok_or(PresaleError::MathOverflow)?;
    if purchased > presale.max_per_user {
        return Err(PresaleError::CapExceeded);
    }
    Ok(())
}

/// Books `amount_tokens` against the presale and the buyer's record.
fn record_purchase(presale: &mut Presale, record: &mut PurchaseRecord, amount_tokens: u128) {
    presale.amount_remaining -= amount_tokens;
    presale.total_sold += amount_tokens;
    record.total_purchased += amount_tokens;
}

fn ensure_open_for_changes(presale: &Presale) -> Result<(), PresaleError> {
    if presale.is_finalized() {
        return Err(PresaleError::AlreadyFinalized);
    }
    Ok(())
}

#[contractimpl]
impl TokenPresaleContract {
    /// Bind the owner and the token/AMM collaborators. Callable once.
    pub fn initialize(
        env: Env,
        owner: Address,
        native_token: Address,
        stable_token: Address,
        router: Address,
        marketing_wallet: Address,
    ) -> Result<(), PresaleError> {
        if has_config(&env) {
            return Err(PresaleError::AlreadyInitialized);
        }
        owner.require_auth();

        let config = EngineConfig {
            owner: owner.clone(),
            native_token,
            stable_token,
            router: router.clone(),
            oracle: None,
            marketing_wallet,
        };
        set_config(&env, &config);
        set_presale_count(&env, 0);

        events::initialized(&env, &owner, &router);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), PresaleError> {
        let mut config = require_owner(&env, &caller)?;
        config.owner = new_owner.clone();
        set_config(&env, &config);

        events::ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    pub fn set_marketing_wallet(
        env: Env,
        caller: Address,
        wallet: Address,
    ) -> Result<(), PresaleError> {
        let mut config = require_owner(&env, &caller)?;
        config.marketing_wallet = wallet.clone();
        set_config(&env, &config);

        events::marketing_wallet_set(&env, &wallet);
        Ok(())
    }

    /// Switch native pricing to an oracle feed, or back to fixed with `None`.
    pub fn set_price_oracle(
        env: Env,
        caller: Address,
        oracle: Option<Address>,
    ) -> Result<(), PresaleError> {
        let mut config = require_owner(&env, &caller)?;
        config.oracle = oracle.clone();
        set_config(&env, &config);

        events::oracle_set(&env, &oracle);
        Ok(())
    }

    /// Register a new presale and return its id.
    ///
    /// `initially_finalized` is recorded in the creation event only; both
    /// lifecycle flags always start cleared.
    pub fn create_presale(
        env: Env,
        caller: Address,
        params: PresaleParams,
        initial_whitelist: Vec<Address>,
    ) -> Result<u64, PresaleError> {
        require_owner(&env, &caller)?;

        if params.price == 0
            || params.tokens_to_sell == 0
            || params.marketing_percentage > MAX_MARKETING_PERCENTAGE
            || params.decimals > MAX_TOKEN_DECIMALS
            || params.initial_in_sale > params.tokens_to_sell
        {
            return Err(PresaleError::InvalidConfig);
        }

        let id = get_presale_count(&env)
            .checked_add(1)
            .ok_or(PresaleError::MathOverflow)?;
        let presale = Presale {
            id,
            price_per_token: params.price,
            tokens_to_sell: params.tokens_to_sell,
            max_per_user: params.max_per_user,
            amount_for_liquidity: params.amount_for_liquidity,
            token_decimals: params.decimals,
            amount_remaining: params.initial_in_sale,
            total_sold: 0,
            vesting_cliff: params.vesting_cliff,
            vesting_period: params.vesting_period,
            marketing_percentage: params.marketing_percentage,
            sale_token: None,
            whitelist_phase2: true,
            closed: false,
            flags: PresaleFlags::default(),
        };
        set_presale(&env, &presale);
        set_presale_count(&env, id);
        let seeded = whitelist::add_members(&env, id, &initial_whitelist);

        events::presale_created(
            &env,
            id,
            params.price,
            params.tokens_to_sell,
            seeded,
            params.initially_finalized,
        );
        Ok(id)
    }

    pub fn add_sale_times(
        env: Env,
        caller: Address,
        id: u64,
        phase1_start: u64,
        phase1_end: u64,
        phase2_start: u64,
        phase2_end: u64,
        vesting_start: u64,
    ) -> Result<(), PresaleError> {
        require_owner(&env, &caller)?;
        let presale = get_presale(&env, id)?;
        ensure_open_for_changes(&presale)?;

        let times = PresaleTimes {
            phase1_start,
            phase1_end,
            phase2_start,
            phase2_end,
            vesting_start,
        };
        schedule::validate_times(&times)?;
        set_times(&env, id, &times);

        events::sale_times_set(&env, id, &times);
        Ok(())
    }

    pub fn add_to_whitelist(
        env: Env,
        caller: Address,
        id: u64,
        addresses: Vec<Address>,
    ) -> Result<u32, PresaleError> {
        require_owner(&env, &caller)?;
        let presale = get_presale(&env, id)?;
        ensure_open_for_changes(&presale)?;

        let added = whitelist::add_members(&env, id, &addresses);
        events::whitelist_added(&env, id, added);
        Ok(added)
    }

    /// Choose whether phase 2 purchases also require whitelist membership.
    pub fn set_phase2_whitelist(
        env: Env,
        caller: Address,
        id: u64,
        gated: bool,
    ) -> Result<(), PresaleError> {
        require_owner(&env, &caller)?;
        let mut presale = get_presale(&env, id)?;
        ensure_open_for_changes(&presale)?;

        presale.whitelist_phase2 = gated;
        set_presale(&env, &presale);

        events::phase2_gating_set(&env, id, gated);
        Ok(())
    }

    pub fn change_sale_token_address(
        env: Env,
        caller: Address,
        id: u64,
        token: Address,
    ) -> Result<(), PresaleError> {
        require_owner(&env, &caller)?;
        let mut presale = get_presale(&env, id)?;
        ensure_open_for_changes(&presale)?;

        presale.sale_token = Some(token.clone());
        set_presale(&env, &presale);

        events::sale_token_set(&env, id, &token);
        Ok(())
    }

    /// Stop purchases ahead of schedule so liquidity can be finalized early.
    pub fn close_sale(env: Env, caller: Address, id: u64) -> Result<(), PresaleError> {
        require_owner(&env, &caller)?;
        let mut presale = get_presale(&env, id)?;
        ensure_open_for_changes(&presale)?;

        presale.closed = true;
        set_presale(&env, &presale);

        events::sale_closed(&env, id);
        Ok(())
    }

    /// Buy `amount_tokens` paying exactly the quoted native value.
    pub fn buy_with_native(
        env: Env,
        buyer: Address,
        id: u64,
        amount_tokens: u128,
        value: u128,
    ) -> Result<(), PresaleError> {
        buyer.require_auth();
        if amount_tokens == 0 {
            return Err(PresaleError::InvalidAmount);
        }
        let config = get_config(&env)?;
        let mut presale = get_presale(&env, id)?;
        let mut record = get_purchase(&env, id, &buyer);
        check_purchase(&env, &presale, &record, &buyer, amount_tokens)?;

        let required = native_cost(&env, &config, &presale, amount_tokens)?;
        if required == 0 {
            return Err(PresaleError::InvalidAmount);
        }
        if value != required {
            log!(&env, "native value does not match quote", value, required);
            return Err(PresaleError::InsufficientFunds);
        }
        let native = token::Client::new(&env, &config.native_token);
        let value_i128 = to_i128(value)?;
        if native.balance(&buyer) < value_i128 {
            return Err(PresaleError::InsufficientFunds);
        }

        record_purchase(&mut presale, &mut record, amount_tokens);
        record.native_contributed += value;
        let mut escrow = get_escrow(&env, id);
        escrow.native = escrow
            .native
            .checked_add(value)
            .ok_or(PresaleError::MathOverflow)?;
        set_presale(&env, &presale);
        set_purchase(&env, id, &buyer, &record);
        set_escrow(&env, id, &escrow);

        native.transfer(&buyer, &env.current_contract_address(), &value_i128);

        events::bought_with_native(&env, id, &buyer, amount_tokens, value);
        Ok(())
    }

    /// Buy with `amount_stable` of the stablecoin, pulled through the
    /// allowance the buyer granted this contract. Returns the tokens bought.
    pub fn buy_with_stable(
        env: Env,
        buyer: Address,
        id: u64,
        amount_stable: u128,
    ) -> Result<u128, PresaleError> {
        buyer.require_auth();
        if amount_stable == 0 {
            return Err(PresaleError::InvalidAmount);
        }
        let config = get_config(&env)?;
        let mut presale = get_presale(&env, id)?;
        let mut record = get_purchase(&env, id, &buyer);

        let amount_tokens =
            tokens_for_stable(&presale, amount_stable, stable_decimals(&env, &config))?;
        if amount_tokens == 0 {
            return Err(PresaleError::InsufficientFunds);
        }
        check_purchase(&env, &presale, &record, &buyer, amount_tokens)?;

        let this = env.current_contract_address();
        let stable = token::Client::new(&env, &config.stable_token);
        let amount_i128 = to_i128(amount_stable)?;
        if stable.allowance(&buyer, &this) < amount_i128 || stable.balance(&buyer) < amount_i128 {
            log!(&env, "stable allowance or balance short", amount_stable);
            return Err(PresaleError::InsufficientFunds);
        }

        record_purchase(&mut presale, &mut record, amount_tokens);
        record.stable_contributed += amount_stable;
        let mut escrow = get_escrow(&env, id);
        escrow.stable = escrow
            .stable
            .checked_add(amount_stable)
            .ok_or(PresaleError::MathOverflow)?;
        set_presale(&env, &presale);
        set_purchase(&env, id, &buyer, &record);
        set_escrow(&env, id, &escrow);

        stable.transfer_from(&this, &buyer, &this, &amount_i128);

        events::bought_with_stable(&env, id, &buyer, amount_tokens, amount_stable);
        Ok(amount_tokens)
    }

    pub fn claimable_amount(env: Env, buyer: Address, id: u64) -> Result<u128, PresaleError> {
        let presale = get_presale(&env, id)?;
        let times = get_times(&env, id);
        let record = get_purchase(&env, id, &buyer);
        vesting::claimable(&env, &presale, times.as_ref(), &record, get_ledger_timestamp(&env))
    }

    /// Pay out everything vested for `buyer` so far. Anyone may trigger it;
    /// tokens always go to the buyer.
    pub fn claim(env: Env, buyer: Address, id: u64) -> Result<u128, PresaleError> {
        let presale = get_presale(&env, id)?;
        let times = get_times(&env, id);
        let mut record = get_purchase(&env, id, &buyer);

        let amount = vesting::claimable(
            &env,
            &presale,
            times.as_ref(),
            &record,
            get_ledger_timestamp(&env),
        )?;
        if amount == 0 {
            return Err(PresaleError::NothingToClaim);
        }
        let sale_token = presale.sale_token.ok_or(PresaleError::SaleTokenNotSet)?;
        let amount_i128 = to_i128(amount)?;

        record.total_claimed += amount;
        set_purchase(&env, id, &buyer, &record);

        token::Client::new(&env, &sale_token).transfer(
            &env.current_contract_address(),
            &buyer,
            &amount_i128,
        );

        events::claimed(&env, id, &buyer, amount);
        Ok(amount)
    }

    pub fn finalize_liquidity(
        env: Env,
        caller: Address,
        id: u64,
    ) -> Result<LiquidityPosition, PresaleError> {
        let config = require_owner(&env, &caller)?;
        let presale = get_presale(&env, id)?;
        finalize::finalize_liquidity(&env, &config, presale)
    }

    /// Pay the marketing share and close the presale for good. Returns the
    /// amounts paid out.
    pub fn finalize_presale(env: Env, caller: Address, id: u64) -> Result<Escrow, PresaleError> {
        let config = require_owner(&env, &caller)?;
        let presale = get_presale(&env, id)?;
        finalize::finalize_presale(&env, &config, presale)
    }

    pub fn withdraw_proceeds(env: Env, caller: Address, id: u64) -> Result<Escrow, PresaleError> {
        let config = require_owner(&env, &caller)?;
        let presale = get_presale(&env, id)?;
        finalize::withdraw_proceeds(&env, &config, &presale)
    }

    // View functions
    pub fn get_config(env: Env) -> Result<EngineConfig, PresaleError> {
        get_config(&env)
    }

    pub fn presale_count(env: Env) -> u64 {
        get_presale_count(&env)
    }

    pub fn get_presale(env: Env, id: u64) -> Result<Presale, PresaleError> {
        get_presale(&env, id)
    }

    pub fn get_sale_times(env: Env, id: u64) -> Option<PresaleTimes> {
        get_times(&env, id)
    }

    pub fn get_purchase(env: Env, id: u64, buyer: Address) -> PurchaseRecord {
        get_purchase(&env, id, &buyer)
    }

    pub fn get_escrow(env: Env, id: u64) -> Escrow {
        get_escrow(&env, id)
    }

    pub fn get_liquidity_position(env: Env, id: u64) -> Option<LiquidityPosition> {
        get_liquidity_position(&env, id)
    }

    pub fn is_whitelisted(env: Env, id: u64, who: Address) -> bool {
        is_whitelisted(&env, id, &who)
    }

    pub fn is_eligible(env: Env, id: u64, who: Address) -> Result<bool, PresaleError> {
        let presale = get_presale(&env, id)?;
        let times = get_times(&env, id);
        Ok(whitelist::is_eligible(
            &env,
            &presale,
            times.as_ref(),
            &who,
            get_ledger_timestamp(&env),
        ))
    }

    pub fn is_in_phase1(env: Env, id: u64) -> bool {
        schedule::is_in_phase1(get_times(&env, id).as_ref(), get_ledger_timestamp(&env))
    }

    pub fn is_in_phase2(env: Env, id: u64) -> bool {
        schedule::is_in_phase2(get_times(&env, id).as_ref(), get_ledger_timestamp(&env))
    }

    pub fn is_sale_open(env: Env, id: u64) -> Result<bool, PresaleError> {
        let presale = get_presale(&env, id)?;
        Ok(schedule::is_sale_open(
            &presale,
            get_times(&env, id).as_ref(),
            get_ledger_timestamp(&env),
        ))
    }

    pub fn is_vesting_active(env: Env, id: u64) -> bool {
        schedule::is_vesting_active(get_times(&env, id).as_ref(), get_ledger_timestamp(&env))
    }

    /// Native value `buy_with_native` currently expects for `amount_tokens`.
    pub fn quote_native(env: Env, id: u64, amount_tokens: u128) -> Result<u128, PresaleError> {
        let config = get_config(&env)?;
        let presale = get_presale(&env, id)?;
        native_cost(&env, &config, &presale, amount_tokens)
    }

    /// Tokens `buy_with_stable` would book for `amount_stable`.
    pub fn quote_stable(env: Env, id: u64, amount_stable: u128) -> Result<u128, PresaleError> {
        let config = get_config(&env)?;
        let presale = get_presale(&env, id)?;
        tokens_for_stable(&presale, amount_stable, stable_decimals(&env, &config))
    }
}
