use crate::types::{LiquidityPosition, PresaleTimes};
use soroban_sdk::{symbol_short, Address, Env};

pub fn initialized(env: &Env, owner: &Address, router: &Address) {
    env.events()
        .publish((symbol_short!("init"),), (owner.clone(), router.clone()));
}

pub fn ownership_transferred(env: &Env, previous: &Address, owner: &Address) {
    env.events()
        .publish((symbol_short!("owner"),), (previous.clone(), owner.clone()));
}

pub fn marketing_wallet_set(env: &Env, wallet: &Address) {
    env.events()
        .publish((symbol_short!("mkt_set"),), wallet.clone());
}

pub fn oracle_set(env: &Env, oracle: &Option<Address>) {
    env.events()
        .publish((symbol_short!("oracle"),), oracle.clone());
}

pub fn presale_created(
    env: &Env,
    id: u64,
    price: u128,
    tokens_to_sell: u128,
    whitelist_size: u32,
    initially_finalized: bool,
) {
    env.events().publish(
        (symbol_short!("created"), id),
        (price, tokens_to_sell, whitelist_size, initially_finalized),
    );
}

pub fn sale_times_set(env: &Env, id: u64, times: &PresaleTimes) {
    env.events().publish(
        (symbol_short!("times"), id),
        (
            times.phase1_start,
            times.phase1_end,
            times.phase2_start,
            times.phase2_end,
            times.vesting_start,
        ),
    );
}

pub fn whitelist_added(env: &Env, id: u64, added: u32) {
    env.events().publish((symbol_short!("wl_add"), id), added);
}

pub fn phase2_gating_set(env: &Env, id: u64, gated: bool) {
    env.events().publish((symbol_short!("wl_p2"), id), gated);
}

pub fn sale_token_set(env: &Env, id: u64, token: &Address) {
    env.events()
        .publish((symbol_short!("token_set"), id), token.clone());
}

pub fn sale_closed(env: &Env, id: u64) {
    env.events().publish((symbol_short!("closed"), id), ());
}

pub fn bought_with_native(env: &Env, id: u64, buyer: &Address, tokens: u128, value: u128) {
    env.events()
        .publish((symbol_short!("buy_nat"), id), (buyer.clone(), tokens, value));
}

pub fn bought_with_stable(env: &Env, id: u64, buyer: &Address, tokens: u128, amount: u128) {
    env.events()
        .publish((symbol_short!("buy_stb"), id), (buyer.clone(), tokens, amount));
}

pub fn claimed(env: &Env, id: u64, buyer: &Address, amount: u128) {
    env.events()
        .publish((symbol_short!("claimed"), id), (buyer.clone(), amount));
}

pub fn liquidity_finalized(env: &Env, id: u64, position: &LiquidityPosition) {
    env.events().publish(
        (symbol_short!("liq_final"), id),
        (position.token_amount, position.native_amount, position.liquidity),
    );
}

pub fn presale_finalized(env: &Env, id: u64, wallet: &Address, native: u128, stable: u128) {
    env.events().publish(
        (symbol_short!("finalized"), id),
        (wallet.clone(), native, stable),
    );
}

pub fn proceeds_withdrawn(env: &Env, id: u64, to: &Address, native: u128, stable: u128) {
    env.events()
        .publish((symbol_short!("withdrawn"), id), (to.clone(), native, stable));
}
