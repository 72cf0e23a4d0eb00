#![no_std]
#![allow(clippy::too_many_arguments)]

mod constants;
pub mod contract;
mod errors;
mod events;
mod finalize;
mod interfaces;
mod pricing;
mod schedule;
mod storage;
mod types;
mod vesting;
mod whitelist;


pub use contract::{TokenPresaleContract, TokenPresaleContractClient};
pub use errors::PresaleError;
pub use interfaces::{LiquidityRouter, LiquidityRouterClient, PriceOracle, PriceOracleClient};
pub use types::{
    EngineConfig, Escrow, LiquidityPosition, Presale, PresaleFlags, PresaleParams, PresaleTimes,
    PurchaseRecord,
};
pub use vesting::vested_amount;
