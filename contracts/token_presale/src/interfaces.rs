use soroban_sdk::{contractclient, Address, Env};

/// AMM router entry point used to seed the post-sale pool.
///
/// The router draws both assets from `to` through the allowances the
/// presale grants it immediately before the call, and credits the LP
/// shares to `to`.
#[contractclient(name = "LiquidityRouterClient")]
pub trait LiquidityRouter {
    fn add_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128);
}

/// Native asset price feed, USD with 8 decimals: `(price, timestamp)`.
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    fn latest_price(env: Env) -> (i128, u64);
}
