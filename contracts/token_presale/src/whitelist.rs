use crate::schedule::{is_in_phase1, is_in_phase2};
use crate::storage::{get_whitelist_size, is_whitelisted, set_whitelist_size, set_whitelisted};
use crate::types::{Presale, PresaleTimes};
use soroban_sdk::{Address, Env, Vec};

/// Adds every new address to the presale whitelist and returns how many were
/// not already members.
pub fn add_members(env: &Env, id: u64, addresses: &Vec<Address>) -> u32 {
    let mut size = get_whitelist_size(env, id);
    let mut added = 0u32;
    for addr in addresses.iter() {
        if !is_whitelisted(env, id, &addr) {
            set_whitelisted(env, id, &addr);
            added += 1;
        }
    }
    if added > 0 {
        size = size.saturating_add(added);
        set_whitelist_size(env, id, size);
    }
    added
}

/// A presale whose whitelist was never populated is open to everyone.
/// Phase 1 always requires membership, phase 2 only when the presale gates it.
pub fn is_eligible(
    env: &Env,
    presale: &Presale,
    times: Option<&PresaleTimes>,
    who: &Address,
    now: u64,
) -> bool {
    if get_whitelist_size(env, presale.id) == 0 {
        return true;
    }
    let gated = is_in_phase1(times, now) || (presale.whitelist_phase2 && is_in_phase2(times, now));
    !gated || is_whitelisted(env, presale.id, who)
}
