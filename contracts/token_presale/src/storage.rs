use crate::constants::*;
use crate::errors::PresaleError;
use crate::types::*;
use soroban_sdk::{Address, Env};

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<EngineConfig, PresaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PresaleError::NotInitialized)
}

pub fn set_config(env: &Env, config: &EngineConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Loads the config and checks that `caller` is the owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<EngineConfig, PresaleError> {
    caller.require_auth();
    let config = get_config(env)?;
    if &config.owner != caller {
        return Err(PresaleError::Unauthorized);
    }
    Ok(config)
}

pub fn get_presale_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::PresaleCount)
        .unwrap_or(0)
}

pub fn set_presale_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::PresaleCount, &count);
}

pub fn get_presale(env: &Env, id: u64) -> Result<Presale, PresaleError> {
    env.storage()
        .persistent()
        .get(&DataKey::Presale(id))
        .ok_or(PresaleError::PresaleNotFound)
}

pub fn set_presale(env: &Env, presale: &Presale) {
    let key = DataKey::Presale(presale.id);
    env.storage().persistent().set(&key, presale);
    bump_persistent(env, &key);
}

pub fn get_times(env: &Env, id: u64) -> Option<PresaleTimes> {
    env.storage().persistent().get(&DataKey::Times(id))
}

pub fn set_times(env: &Env, id: u64, times: &PresaleTimes) {
    let key = DataKey::Times(id);
    env.storage().persistent().set(&key, times);
    bump_persistent(env, &key);
}

pub fn get_purchase(env: &Env, id: u64, buyer: &Address) -> PurchaseRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Purchase(id, buyer.clone()))
        .unwrap_or_default()
}

pub fn set_purchase(env: &Env, id: u64, buyer: &Address, record: &PurchaseRecord) {
    let key = DataKey::Purchase(id, buyer.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

pub fn is_whitelisted(env: &Env, id: u64, who: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(id, who.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, id: u64, who: &Address) {
    let key = DataKey::Whitelisted(id, who.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn get_whitelist_size(env: &Env, id: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::WhitelistSize(id))
        .unwrap_or(0)
}

pub fn set_whitelist_size(env: &Env, id: u64, size: u32) {
    let key = DataKey::WhitelistSize(id);
    env.storage().persistent().set(&key, &size);
    bump_persistent(env, &key);
}

pub fn get_escrow(env: &Env, id: u64) -> Escrow {
    env.storage()
        .persistent()
        .get(&DataKey::Escrow(id))
        .unwrap_or_default()
}

pub fn set_escrow(env: &Env, id: u64, escrow: &Escrow) {
    let key = DataKey::Escrow(id);
    env.storage().persistent().set(&key, escrow);
    bump_persistent(env, &key);
}

pub fn get_liquidity_position(env: &Env, id: u64) -> Option<LiquidityPosition> {
    env.storage().persistent().get(&DataKey::Liquidity(id))
}

pub fn set_liquidity_position(env: &Env, id: u64, position: &LiquidityPosition) {
    let key = DataKey::Liquidity(id);
    env.storage().persistent().set(&key, position);
    bump_persistent(env, &key);
}
