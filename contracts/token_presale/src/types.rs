use soroban_sdk::{contracttype, Address, Env};

/// Engine-wide settings and injected collaborators.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct EngineConfig {
    pub owner: Address,
    pub native_token: Address, // native asset contract used for purchases
    pub stable_token: Address,
    pub router: Address,
    pub oracle: Option<Address>, // when set, native purchases are priced through it
    pub marketing_wallet: Address,
}

/// Configuration accepted by `create_presale`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PresaleParams {
    pub price: u128,
    pub tokens_to_sell: u128,
    pub max_per_user: u128,
    pub amount_for_liquidity: u128,
    pub decimals: u32,
    pub initial_in_sale: u128,
    pub vesting_cliff: u64,
    pub vesting_period: u64,
    pub marketing_percentage: u32,
    pub initially_finalized: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct PresaleFlags {
    pub sale_finalized: bool,
    pub liquidity_finalized: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Presale {
    pub id: u64,
    pub price_per_token: u128, // quote units per base unit of the sale token
    pub tokens_to_sell: u128,
    pub max_per_user: u128,
    pub amount_for_liquidity: u128,
    pub token_decimals: u32,
    pub amount_remaining: u128,
    pub total_sold: u128,
    pub vesting_cliff: u64,  // seconds after vesting start
    pub vesting_period: u64, // linear unlock duration in seconds
    pub marketing_percentage: u32,
    pub sale_token: Option<Address>,
    pub whitelist_phase2: bool,
    pub closed: bool,
    pub flags: PresaleFlags,
}

impl Presale {
    pub fn is_finalized(&self) -> bool {
        self.flags.sale_finalized || self.flags.liquidity_finalized
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PresaleTimes {
    pub phase1_start: u64,
    pub phase1_end: u64,
    pub phase2_start: u64,
    pub phase2_end: u64,
    pub vesting_start: u64,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct PurchaseRecord {
    pub total_purchased: u128,
    pub total_claimed: u128,
    pub native_contributed: u128,
    pub stable_contributed: u128,
}

/// Proceeds held by the engine on behalf of one presale.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Escrow {
    pub native: u128,
    pub stable: u128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LiquidityPosition {
    pub router: Address,
    pub token_amount: u128,
    pub native_amount: u128,
    pub liquidity: u128,
    pub timestamp: u64,
}

#[contracttype]
pub enum DataKey {
    Config,
    PresaleCount,
    Presale(u64),
    Times(u64),
    Purchase(u64, Address),
    Whitelisted(u64, Address),
    WhitelistSize(u64),
    Escrow(u64),
    Liquidity(u64),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
