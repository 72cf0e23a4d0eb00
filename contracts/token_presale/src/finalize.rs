//! One-way finalization of a presale: seed the pool, then pay marketing.
//!
//! `NOT_FINALIZED -> LIQUIDITY_FINALIZED -> FULLY_FINALIZED`

use crate::constants::*;
use crate::errors::PresaleError;
use crate::events;
use crate::interfaces::LiquidityRouterClient;
use crate::pricing::{mul_div, native_cost, to_i128};
use crate::schedule::has_sale_ended;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{log, token, Env};

/// Token and native amounts committed to the pool.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LiquidityPlan {
    pub tokens: u128,
    pub native: u128,
}

/// Pairs the reserve with the native value that lists it at the sale price.
/// When the escrow holds less than that, the token side shrinks in proportion
/// so the listing price is preserved.
pub fn plan_liquidity(
    env: &Env,
    reserve: u128,
    native_needed: u128,
    native_available: u128,
) -> Result<LiquidityPlan, PresaleError> {
    if reserve == 0 || native_needed == 0 || native_available == 0 {
        return Ok(LiquidityPlan {
            tokens: 0,
            native: 0,
        });
    }
    if native_available >= native_needed {
        return Ok(LiquidityPlan {
            tokens: reserve,
            native: native_needed,
        });
    }
    Ok(LiquidityPlan {
        tokens: mul_div(env, reserve, native_available, native_needed)?,
        native: native_available,
    })
}

fn min_with_slippage(amount: u128) -> Result<u128, PresaleError> {
    amount
        .checked_mul(BPS_DENOMINATOR - LIQUIDITY_SLIPPAGE_BPS)
        .map(|v| v / BPS_DENOMINATOR)
        .ok_or(PresaleError::MathOverflow)
}

fn to_u128(amount: i128) -> Result<u128, PresaleError> {
    u128::try_from(amount).map_err(|_| PresaleError::InvalidAmount)
}

pub fn finalize_liquidity(
    env: &Env,
    config: &EngineConfig,
    mut presale: Presale,
) -> Result<LiquidityPosition, PresaleError> {
    if presale.flags.liquidity_finalized {
        return Err(PresaleError::AlreadyFinalized);
    }
    let now = get_ledger_timestamp(env);
    let times = get_times(env, presale.id);
    if !has_sale_ended(&presale, times.as_ref(), now) {
        log!(env, "liquidity requested while presale still selling", presale.id, now);
        return Err(PresaleError::SaleNotEnded);
    }
    let sale_token = presale
        .sale_token
        .clone()
        .ok_or(PresaleError::SaleTokenNotSet)?;

    let mut escrow = get_escrow(env, presale.id);
    let native_needed = native_cost(env, config, &presale, presale.amount_for_liquidity)?;
    let plan = plan_liquidity(
        env,
        presale.amount_for_liquidity,
        native_needed,
        escrow.native,
    )?;
    let tokens_desired = to_i128(plan.tokens)?;
    let native_desired = to_i128(plan.native)?;
    let tokens_min = to_i128(min_with_slippage(plan.tokens)?)?;
    let native_min = to_i128(min_with_slippage(plan.native)?)?;

    presale.flags.liquidity_finalized = true;
    escrow.native -= plan.native;
    set_presale(env, &presale);
    set_escrow(env, presale.id, &escrow);

    let mut position = LiquidityPosition {
        router: config.router.clone(),
        token_amount: 0,
        native_amount: 0,
        liquidity: 0,
        timestamp: now,
    };

    if plan.tokens > 0 && plan.native > 0 {
        let this = env.current_contract_address();
        let expiration = env.ledger().sequence() + APPROVAL_LEDGER_WINDOW;
        token::Client::new(env, &sale_token).approve(
            &this,
            &config.router,
            &tokens_desired,
            &expiration,
        );
        token::Client::new(env, &config.native_token).approve(
            &this,
            &config.router,
            &native_desired,
            &expiration,
        );

        let (token_used, native_used, liquidity) = LiquidityRouterClient::new(env, &config.router)
            .add_liquidity(
                &sale_token,
                &config.native_token,
                &tokens_desired,
                &native_desired,
                &tokens_min,
                &native_min,
                &this,
                &(now + LIQUIDITY_DEADLINE_SECS),
            );

        position.token_amount = to_u128(token_used)?;
        position.native_amount = to_u128(native_used)?;
        position.liquidity = to_u128(liquidity)?;

        // The host rejects re-entry into this contract, so settling the
        // router's unused native after the call cannot be observed mid-flight.
        if position.native_amount < plan.native {
            escrow.native += plan.native - position.native_amount;
            set_escrow(env, presale.id, &escrow);
        }
    }

    set_liquidity_position(env, presale.id, &position);
    events::liquidity_finalized(env, presale.id, &position);
    Ok(position)
}

/// Marketing share of what the escrow still holds.
pub fn marketing_share(escrow: &Escrow, percentage: u32) -> Result<Escrow, PresaleError> {
    let pct = percentage as u128;
    let native = escrow
        .native
        .checked_mul(pct)
        .ok_or(PresaleError::MathOverflow)?
        / 100;
    let stable = escrow
        .stable
        .checked_mul(pct)
        .ok_or(PresaleError::MathOverflow)?
        / 100;
    Ok(Escrow { native, stable })
}

pub fn finalize_presale(
    env: &Env,
    config: &EngineConfig,
    mut presale: Presale,
) -> Result<Escrow, PresaleError> {
    if presale.flags.sale_finalized {
        return Err(PresaleError::AlreadyFinalized);
    }
    if !presale.flags.liquidity_finalized {
        log!(env, "presale finalization before liquidity", presale.id);
        return Err(PresaleError::LiquidityNotFinalized);
    }

    let mut escrow = get_escrow(env, presale.id);
    let payout = marketing_share(&escrow, presale.marketing_percentage)?;
    let native_payout = to_i128(payout.native)?;
    let stable_payout = to_i128(payout.stable)?;

    escrow.native -= payout.native;
    escrow.stable -= payout.stable;
    presale.flags.sale_finalized = true;
    set_escrow(env, presale.id, &escrow);
    set_presale(env, &presale);

    let this = env.current_contract_address();
    if native_payout > 0 {
        token::Client::new(env, &config.native_token).transfer(
            &this,
            &config.marketing_wallet,
            &native_payout,
        );
    }
    if stable_payout > 0 {
        token::Client::new(env, &config.stable_token).transfer(
            &this,
            &config.marketing_wallet,
            &stable_payout,
        );
    }

    events::presale_finalized(
        env,
        presale.id,
        &config.marketing_wallet,
        payout.native,
        payout.stable,
    );
    Ok(payout)
}

/// Releases whatever proceeds remain after marketing to the owner.
pub fn withdraw_proceeds(
    env: &Env,
    config: &EngineConfig,
    presale: &Presale,
) -> Result<Escrow, PresaleError> {
    if !presale.flags.sale_finalized {
        return Err(PresaleError::NotFinalized);
    }
    let escrow = get_escrow(env, presale.id);
    if escrow.native == 0 && escrow.stable == 0 {
        return Err(PresaleError::InvalidAmount);
    }
    let native = to_i128(escrow.native)?;
    let stable = to_i128(escrow.stable)?;

    set_escrow(env, presale.id, &Escrow::default());

    let this = env.current_contract_address();
    if native > 0 {
        token::Client::new(env, &config.native_token).transfer(&this, &config.owner, &native);
    }
    if stable > 0 {
        token::Client::new(env, &config.stable_token).transfer(&this, &config.owner, &stable);
    }

    events::proceeds_withdrawn(env, presale.id, &config.owner, escrow.native, escrow.stable);
    Ok(escrow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_uses_full_reserve_when_escrow_covers_it() {
        let env = Env::default();
        let plan = plan_liquidity(&env, 1_000, 500, 800).unwrap();
        assert_eq!(plan, LiquidityPlan { tokens: 1_000, native: 500 });
    }

    #[test]
    fn plan_shrinks_reserve_to_available_native() {
        let env = Env::default();
        let plan = plan_liquidity(&env, 1_000, 500, 125).unwrap();
        assert_eq!(plan, LiquidityPlan { tokens: 250, native: 125 });

        let big = 500_000 * 10u128.pow(18);
        let plan = plan_liquidity(&env, big, 50 * 10u128.pow(21), 10u128.pow(20)).unwrap();
        assert_eq!(plan.tokens, big / 500);
    }

    #[test]
    fn plan_is_empty_without_proceeds() {
        let env = Env::default();
        let plan = plan_liquidity(&env, 1_000, 500, 0).unwrap();
        assert_eq!(plan, LiquidityPlan { tokens: 0, native: 0 });
    }

    #[test]
    fn marketing_share_rounds_down() {
        let share = marketing_share(&Escrow { native: 999, stable: 50 }, 20).unwrap();
        assert_eq!(share, Escrow { native: 199, stable: 10 });
        let none = marketing_share(&Escrow { native: 999, stable: 50 }, 0).unwrap();
        assert_eq!(none, Escrow::default());
    }
}
