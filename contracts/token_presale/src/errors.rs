use soroban_sdk::contracterror;

/// Failure reasons surfaced by every presale entry point.
///
/// A returned error aborts the whole invocation, so no storage write from a
/// failed call survives.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PresaleError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the engine owner.
    Unauthorized = 3,
    /// Malformed presale configuration or schedule.
    InvalidConfig = 4,
    PresaleNotFound = 5,
    /// Purchase outside an open window, or after the sale was closed.
    SaleNotOpen = 6,
    NotWhitelisted = 7,
    /// Per-user or aggregate allocation would be exceeded.
    CapExceeded = 8,
    /// Payment does not match the quote, or balance/allowance is short.
    InsufficientFunds = 9,
    AlreadyFinalized = 10,
    NothingToClaim = 11,
    LiquidityNotFinalized = 12,
    SaleTokenNotSet = 13,
    MathOverflow = 14,
    InvalidOraclePrice = 15,
    InvalidAmount = 16,
    SaleNotEnded = 17,
    NotFinalized = 18,
}
