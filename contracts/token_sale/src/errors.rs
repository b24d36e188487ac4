use access_control::AccessError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–4) ---
    AlreadyDeployed = 1,
    NotDeployed = 2,
    AlreadyInitialized = 3,
    NotInitialized = 4,

    // --- Authorization (5–7) ---
    Unauthorized = 5,
    InvalidAddress = 6,
    NoPendingTransfer = 7,

    // --- Input validation (8–12) ---
    ZeroAmount = 8,
    InvalidAmount = 9,
    InvalidBonus = 10,
    EmptyBatch = 11,
    UnsupportedDecimals = 12,

    // --- Sale state (13–18) ---
    NotInWindow = 13,
    SaleSuspended = 14,
    AlreadySuspended = 15,
    NotSuspended = 16,
    SaleInProgress = 17,
    AlreadyFinalized = 18,

    // --- Purchase (19–21) ---
    NotWhitelisted = 19,
    BelowMinimumContribution = 20,
    InsufficientQuota = 21,

    // --- Ledger (22–23) ---
    ArithmeticOverflow = 22,
    TransferFailed = 23,
}

impl From<AccessError> for Error {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Unauthorized => Error::Unauthorized,
            AccessError::InvalidAddress => Error::InvalidAddress,
            AccessError::NoPendingTransfer => Error::NoPendingTransfer,
        }
    }
}
