#![allow(dead_code)]

mod mocks;

pub use mocks::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, Vec,
};
use token_presale::{PresaleParams, TokenPresaleContract, TokenPresaleContractClient};

pub const PRICE: u128 = 100_000_000_000_000;
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;
pub const SUPPLY: u128 = 500_000 * ONE_TOKEN;
pub const START: u64 = 1_674_933_300;
pub const END: u64 = START + 600;

pub struct PresaleTest<'a> {
    pub env: &'a Env,
    pub client: TokenPresaleContractClient<'a>,
    pub contract_id: Address,
    pub owner: Address,
    pub marketing: Address,
    pub router: Address,
    pub native: token::Client<'a>,
    pub native_admin: token::StellarAssetClient<'a>,
    pub stable: token::Client<'a>,
    pub stable_admin: token::StellarAssetClient<'a>,
    pub sale_token: token::Client<'a>,
}

fn create_token<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let address = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    (
        token::Client::new(env, &address),
        token::StellarAssetClient::new(env, &address),
    )
}

pub fn setup_presale(env: &Env) -> PresaleTest<'_> {
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let owner = Address::generate(env);
    let marketing = Address::generate(env);
    let token_admin = Address::generate(env);

    let (native, native_admin) = create_token(env, &token_admin);
    let (stable, stable_admin) = create_token(env, &token_admin);
    let (sale_token, sale_admin) = create_token(env, &token_admin);

    let router = env.register_contract(None, MockRouter);
    let contract_id = env.register_contract(None, TokenPresaleContract);
    let client = TokenPresaleContractClient::new(env, &contract_id);
    client.initialize(
        &owner,
        &native.address,
        &stable.address,
        &router,
        &marketing,
    );

    // sale inventory lives with the engine
    sale_admin.mint(&contract_id, &(2 * SUPPLY as i128));

    PresaleTest {
        env,
        client,
        contract_id,
        owner,
        marketing,
        router,
        native,
        native_admin,
        stable,
        stable_admin,
        sale_token,
    }
}

pub fn default_params() -> PresaleParams {
    PresaleParams {
        price: PRICE,
        tokens_to_sell: SUPPLY,
        max_per_user: SUPPLY,
        amount_for_liquidity: SUPPLY,
        decimals: 18,
        initial_in_sale: SUPPLY,
        vesting_cliff: 0,
        vesting_period: 0,
        marketing_percentage: 20,
        initially_finalized: false,
    }
}

impl<'a> PresaleTest<'a> {
    /// Presale with both phases spanning `[START, END]` and vesting at `END`.
    pub fn create(&self, params: &PresaleParams, whitelist: &Vec<Address>) -> u64 {
        let id = self.client.create_presale(&self.owner, params, whitelist);
        self.client
            .add_sale_times(&self.owner, &id, &START, &END, &START, &END, &END);
        self.client
            .change_sale_token_address(&self.owner, &id, &self.sale_token.address);
        id
    }

    pub fn funded_buyer(&self, native: u128) -> Address {
        let buyer = Address::generate(self.env);
        self.native_admin.mint(&buyer, &(native as i128));
        buyer
    }

    pub fn warp(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }
}
