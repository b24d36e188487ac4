use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Input validation ---
    ZeroAmount = 3,
    InvalidAmount = 4,
    InsufficientStake = 5,

    // --- Ledger ---
    ArithmeticOverflow = 6,
    TransferFailed = 7,
}
