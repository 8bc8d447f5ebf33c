//! Configuration fields used by the registry, keyed by `sha256(name)`.
//!
//! Names are part of the persisted layout: renaming one orphans every value
//! stored under it, and a name may never be re-declared with another kind.

use eternal_storage::{Field, ValueKind};

// ==================== Registry settings ====================

pub const EXPIRY_LIMIT: Field = Field::new("expiryLimit", ValueKind::Uint);
pub const TICKER_REG_FEE: Field = Field::new("tickerRegFee", ValueKind::Uint);
pub const ST_LAUNCH_FEE: Field = Field::new("stLaunchFee", ValueKind::Uint);
pub const FEE_TOKEN: Field = Field::new("polyToken", ValueKind::Address);
pub const ST_FACTORY: Field = Field::new("STFactory", ValueKind::Address);
pub const OWNER: Field = Field::new("owner", ValueKind::Address);
pub const INITIALISED: Field = Field::new("initialised", ValueKind::Bool);

// ==================== Per-ticker records ====================

pub const TICKER_OWNER: Field = Field::new("registeredTickers_owner", ValueKind::Address);
pub const TICKER_TOKEN_NAME: Field = Field::new("registeredTickers_tokenName", ValueKind::Text);
pub const TICKER_REGISTRATION_DATE: Field =
    Field::new("registeredTickers_registrationDate", ValueKind::Uint);
pub const TICKER_EXPIRY_DATE: Field = Field::new("registeredTickers_expiryDate", ValueKind::Uint);
pub const TICKER_STATUS: Field = Field::new("registeredTickers_status", ValueKind::Bool);
pub const TICKER_TO_TOKEN: Field = Field::new("tickerToSecurityToken", ValueKind::Address);
/// Written by the second revision when a deployed address is corrected.
pub const TICKER_TO_TOKEN_CHANGED_AT: Field =
    Field::new("tickerToSecurityToken_changedAt", ValueKind::Uint);

// ==================== Per-token records ====================

pub const TOKEN_TICKER: Field = Field::new("securityTokens_ticker", ValueKind::Text);
pub const TOKEN_DETAILS: Field = Field::new("securityTokens_tokenDetails", ValueKind::Text);
pub const TOKEN_DEPLOYED_AT: Field = Field::new("securityTokens_deployedAt", ValueKind::Uint);

/// Fields of the first revision.
pub const SCHEMA: &[Field] = &[
    EXPIRY_LIMIT,
    TICKER_REG_FEE,
    ST_LAUNCH_FEE,
    FEE_TOKEN,
    ST_FACTORY,
    OWNER,
    INITIALISED,
    TICKER_OWNER,
    TICKER_TOKEN_NAME,
    TICKER_REGISTRATION_DATE,
    TICKER_EXPIRY_DATE,
    TICKER_STATUS,
    TICKER_TO_TOKEN,
    TOKEN_TICKER,
    TOKEN_DETAILS,
    TOKEN_DEPLOYED_AT,
];

/// The first revision's fields plus those the second revision adds.
pub const SCHEMA_V2: &[Field] = &[
    EXPIRY_LIMIT,
    TICKER_REG_FEE,
    ST_LAUNCH_FEE,
    FEE_TOKEN,
    ST_FACTORY,
    OWNER,
    INITIALISED,
    TICKER_OWNER,
    TICKER_TOKEN_NAME,
    TICKER_REGISTRATION_DATE,
    TICKER_EXPIRY_DATE,
    TICKER_STATUS,
    TICKER_TO_TOKEN,
    TOKEN_TICKER,
    TOKEN_DETAILS,
    TOKEN_DEPLOYED_AT,
    TICKER_TO_TOKEN_CHANGED_AT,
];
