use crate::errors::PresaleError;
use crate::pricing::mul_div;
use crate::types::{Presale, PresaleTimes, PurchaseRecord};
use soroban_sdk::Env;

/// Amount of `total` unlocked at `now` for a schedule starting at
/// `vesting_start`, with nothing released before the cliff and a linear
/// release over `period` afterwards. A zero period unlocks everything at the
/// cliff.
pub fn vested_amount(
    env: &Env,
    total: u128,
    vesting_start: u64,
    cliff: u64,
    period: u64,
    now: u64,
) -> Result<u128, PresaleError> {
    let cliff_end = vesting_start
        .checked_add(cliff)
        .ok_or(PresaleError::MathOverflow)?;
    if now < cliff_end {
        return Ok(0);
    }
    if period == 0 {
        return Ok(total);
    }

    let elapsed = now - cliff_end;
    if elapsed >= period {
        return Ok(total);
    }
    mul_div(env, total, elapsed as u128, period as u128)
}

/// Vested but not yet claimed tokens for one buyer. No schedule means
/// nothing is claimable.
pub fn claimable(
    env: &Env,
    presale: &Presale,
    times: Option<&PresaleTimes>,
    record: &PurchaseRecord,
    now: u64,
) -> Result<u128, PresaleError> {
    let Some(times) = times else {
        return Ok(0);
    };
    let vested = vested_amount(
        env,
        record.total_purchased,
        times.vesting_start,
        presale.vesting_cliff,
        presale.vesting_period,
        now,
    )?;
    Ok(vested.saturating_sub(record.total_claimed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_before_cliff() {
        let env = Env::default();
        assert_eq!(vested_amount(&env, 1_000, 100, 50, 100, 149), Ok(0));
        assert_eq!(vested_amount(&env, 1_000, 100, 50, 100, 150), Ok(0));
        assert_eq!(vested_amount(&env, 1_000, 100, 50, 100, 151), Ok(10));
    }

    #[test]
    fn zero_period_unlocks_at_cliff() {
        let env = Env::default();
        assert_eq!(vested_amount(&env, 1_000, 100, 0, 0, 99), Ok(0));
        assert_eq!(vested_amount(&env, 1_000, 100, 0, 0, 100), Ok(1_000));
        assert_eq!(vested_amount(&env, 1_000, 100, 30, 0, 130), Ok(1_000));
    }

    #[test]
    fn linear_release_saturates() {
        let env = Env::default();
        assert_eq!(vested_amount(&env, 1_000, 0, 0, 1_000, 250), Ok(250));
        assert_eq!(vested_amount(&env, 1_000, 0, 0, 1_000, 999), Ok(999));
        assert_eq!(vested_amount(&env, 1_000, 0, 0, 1_000, 1_000), Ok(1_000));
        assert_eq!(vested_amount(&env, 1_000, 0, 0, 1_000, u64::MAX), Ok(1_000));
    }

    #[test]
    fn cliff_overflow_is_reported() {
        let env = Env::default();
        assert_eq!(
            vested_amount(&env, 1, u64::MAX, 1, 0, u64::MAX),
            Err(PresaleError::MathOverflow)
        );
    }

    #[test]
    fn large_allocations_vest_without_overflow() {
        let env = Env::default();
        // 10^14 whole tokens over a one-year period
        let total = 10u128.pow(32);
        let year = 31_536_000;
        assert_eq!(
            vested_amount(&env, total, 0, 0, year, 31_000_000),
            Ok(98_300_355_149_670_218_163_368_848_300_355)
        );
        assert_eq!(
            vested_amount(&env, u128::MAX, 0, 0, year, year / 2),
            Ok(u128::MAX / 2)
        );
    }
}
