// Oracle feeds quote the native asset in USD with 8 decimals.
pub const ORACLE_DECIMALS: u32 = 8;
pub const ORACLE_MAX_AGE_SECS: u64 = 3600;

pub const MAX_MARKETING_PERCENTAGE: u32 = 100;
// 10^38 is the largest power of ten that fits in u128.
pub const MAX_TOKEN_DECIMALS: u32 = 38;

// Liquidity provisioning
pub const LIQUIDITY_SLIPPAGE_BPS: u128 = 100;
pub const BPS_DENOMINATOR: u128 = 10_000;
pub const LIQUIDITY_DEADLINE_SECS: u64 = 600;
pub const APPROVAL_LEDGER_WINDOW: u32 = 1000;

// Storage TTL, in ledgers (~5s each)
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_EXTEND: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_EXTEND: u32 = 30 * DAY_IN_LEDGERS;
