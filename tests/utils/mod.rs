//! Testing utilities shared by the cross-contract scenarios

pub mod assertions;
pub mod test_fixtures;

pub use test_fixtures::*;

/// Common test constants
pub mod constants {
    /// One whole unit of a 7-decimal Stellar asset.
    pub const UNIT: i128 = 10_000_000;
    pub const SALE_START: u64 = 1_000;
    pub const SALE_END: u64 = 100_000;
    pub const SALE_SUPPLY: i128 = 85_000_000 * UNIT;
    pub const ALLOWANCE_EXPIRATION_LEDGER: u32 = 10_000;
}
