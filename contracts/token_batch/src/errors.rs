use access_control::AccessError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    Unauthorized = 3,
    InvalidAddress = 4,
    NoPendingTransfer = 5,

    EmptyBatch = 6,
    LengthMismatch = 7,
    InvalidAmount = 8,

    TransferFailed = 9,
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
