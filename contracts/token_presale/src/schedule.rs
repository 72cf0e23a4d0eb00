use crate::errors::PresaleError;
use crate::types::{Presale, PresaleTimes};

pub fn validate_times(times: &PresaleTimes) -> Result<(), PresaleError> {
    if times.phase1_start > times.phase1_end || times.phase2_start > times.phase2_end {
        return Err(PresaleError::InvalidConfig);
    }
    if times.vesting_start < times.phase1_end.max(times.phase2_end) {
        return Err(PresaleError::InvalidConfig);
    }
    Ok(())
}

pub fn is_in_phase1(times: Option<&PresaleTimes>, now: u64) -> bool {
    times.map_or(false, |t| now >= t.phase1_start && now <= t.phase1_end)
}

pub fn is_in_phase2(times: Option<&PresaleTimes>, now: u64) -> bool {
    times.map_or(false, |t| now >= t.phase2_start && now <= t.phase2_end)
}

/// Purchases are accepted while either phase is running and the presale has
/// not been closed or finalized.
pub fn is_sale_open(presale: &Presale, times: Option<&PresaleTimes>, now: u64) -> bool {
    if presale.closed || presale.is_finalized() {
        return false;
    }
    is_in_phase1(times, now) || is_in_phase2(times, now)
}

pub fn is_vesting_active(times: Option<&PresaleTimes>, now: u64) -> bool {
    times.map_or(false, |t| now >= t.vesting_start)
}

pub fn has_sale_ended(presale: &Presale, times: Option<&PresaleTimes>, now: u64) -> bool {
    if presale.closed {
        return true;
    }
    times.map_or(false, |t| now > t.phase1_end && now > t.phase2_end)
}
