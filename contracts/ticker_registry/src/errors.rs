use eternal_storage::StoreError;
use soroban_sdk::contracterror;

/// Failures raised by registry logic. Codes start at 100 so that a failure
/// forwarded through the proxy can never be confused with a proxy error.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    // --- Lifecycle ---
    AlreadyInitialized = 100,
    NotInitialized = 101,

    // --- Authorization ---
    Unauthorized = 102,

    // --- Call decoding ---
    UnknownFunction = 103,
    InvalidArguments = 104,

    // --- Tickers ---
    InvalidTicker = 105,
    TickerAlreadyRegistered = 106,
    TickerNotFound = 107,
    NotTickerOwner = 108,
    TickerExpired = 109,
    TokenAlreadyDeployed = 110,

    // --- Configuration ---
    InvalidExpiryLimit = 111,
    FeeOverflow = 112,
    SchemaViolation = 113,
}

impl From<StoreError> for RegistryError {
    fn from(_: StoreError) -> Self {
        RegistryError::SchemaViolation
    }
}
