use crate::constants::{ORACLE_DECIMALS, ORACLE_MAX_AGE_SECS};
use crate::errors::PresaleError;
use crate::interfaces::PriceOracleClient;
use crate::types::{EngineConfig, Presale};
use soroban_sdk::{token, Address, Env, U256};

pub fn pow10(exp: u32) -> Result<u128, PresaleError> {
    10u128.checked_pow(exp).ok_or(PresaleError::MathOverflow)
}

pub fn to_i128(amount: u128) -> Result<i128, PresaleError> {
    i128::try_from(amount).map_err(|_| PresaleError::MathOverflow)
}

/// `a * b / c` with a 256-bit intermediate product.
pub fn mul_div(env: &Env, a: u128, b: u128, c: u128) -> Result<u128, PresaleError> {
    if c == 0 {
        return Err(PresaleError::MathOverflow);
    }
    U256::from_u128(env, a)
        .mul(&U256::from_u128(env, b))
        .div(&U256::from_u128(env, c))
        .to_u128()
        .ok_or(PresaleError::MathOverflow)
}

/// Base quote for `amount_tokens`, before any oracle conversion.
pub fn base_cost(presale: &Presale, amount_tokens: u128) -> Result<u128, PresaleError> {
    amount_tokens
        .checked_mul(presale.price_per_token)
        .ok_or(PresaleError::MathOverflow)
}

/// Converts a USD-denominated quote into native units using an oracle price
/// with `ORACLE_DECIMALS` decimals.
pub fn usd_to_native(env: &Env, usd_cost: u128, oracle_price: u128) -> Result<u128, PresaleError> {
    if oracle_price == 0 {
        return Err(PresaleError::InvalidOraclePrice);
    }
    mul_div(env, usd_cost, pow10(ORACLE_DECIMALS)?, oracle_price)
}

pub fn fetch_oracle_price(env: &Env, oracle: &Address) -> Result<u128, PresaleError> {
    let (price, updated_at) = PriceOracleClient::new(env, oracle).latest_price();
    let now = env.ledger().timestamp();
    if price <= 0 || updated_at > now || now - updated_at > ORACLE_MAX_AGE_SECS {
        return Err(PresaleError::InvalidOraclePrice);
    }
    Ok(price as u128)
}

/// Native value a buyer must send for `amount_tokens`. Fixed pricing uses
/// the presale price directly; with an oracle configured the presale price
/// is read as USD and converted at the feed rate.
pub fn native_cost(
    env: &Env,
    config: &EngineConfig,
    presale: &Presale,
    amount_tokens: u128,
) -> Result<u128, PresaleError> {
    let cost = base_cost(presale, amount_tokens)?;
    match &config.oracle {
        None => Ok(cost),
        Some(oracle) => usd_to_native(env, cost, fetch_oracle_price(env, oracle)?),
    }
}

/// Rescales a stablecoin amount to the sale token's decimal precision.
pub fn normalize_stable(
    amount_stable: u128,
    stable_decimals: u32,
    token_decimals: u32,
) -> Result<u128, PresaleError> {
    if token_decimals >= stable_decimals {
        amount_stable
            .checked_mul(pow10(token_decimals - stable_decimals)?)
            .ok_or(PresaleError::MathOverflow)
    } else {
        Ok(amount_stable / pow10(stable_decimals - token_decimals)?)
    }
}

pub fn tokens_for_stable(
    presale: &Presale,
    amount_stable: u128,
    stable_decimals: u32,
) -> Result<u128, PresaleError> {
    let normalized = normalize_stable(amount_stable, stable_decimals, presale.token_decimals)?;
    Ok(normalized / presale.price_per_token)
}

pub fn stable_decimals(env: &Env, config: &EngineConfig) -> u32 {
    token::Client::new(env, &config.stable_token).decimals()
}
