#![no_std]

mod contract;
mod errors;
mod events;
mod math;
mod storage;
mod types;

#[cfg(test)]
extern crate std;


pub use contract::{
    TokenSaleContract, TokenSaleContractClient, DEFAULT_MAX_TOKENS_PER_ACCOUNT,
    DEFAULT_TOKENS_PER_K_UNIT,
};
pub use errors::Error;
pub use events::{
    DeployedEvent, InitializedEvent, PolicyUpdatedEvent, SaleStatusEvent, TokensPurchasedEvent,
    TokensReclaimedEvent, ValueUpdatedEvent, WhitelistUpdatedEvent, WindowUpdatedEvent,
};
pub use types::{ConfigPolicy, SalePhase, SaleState, WhitelistTier};
