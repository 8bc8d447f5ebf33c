use soroban_sdk::contracterror;

/// Failures raised by the proxy itself. Errors from forwarded logic keep
/// their own codes (100 and up) and are never mapped onto these.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProxyError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    NullImplementation = 3,
    NullOwner = 4,
    NotAContract = 5,
    ImplementationUnchanged = 6,
    VersionUnchanged = 7,
    InvalidVersion = 8,
    NotInitialized = 9,
    AlreadyAttached = 10,
    IncompatibleSchema = 11,
}
