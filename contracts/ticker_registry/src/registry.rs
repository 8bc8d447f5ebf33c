//! Ticker reservation and security-token bookkeeping.
//!
//! Every function operates on the storage of the contract currently
//! executing. Behind the proxy that is the proxy's own storage, which is what
//! lets a later logic revision pick up the records written by an earlier one.

use crate::errors::RegistryError;
use crate::events::{self, DeployedAddressChangedEvent, TickerRegisteredEvent, TokenGeneratedEvent};
use crate::fields::*;
use crate::types::{SecurityTokenData, TickerDetails};
use crate::TokenFactoryClient;
use eternal_storage::{self as store, schema, ConfigValue, Field};
use soroban_sdk::{symbol_short, token, Address, BytesN, Env, IntoVal, String, Val};

/// Reservation length applied by `initialize`.
pub const DEFAULT_EXPIRY_LIMIT: u128 = 15 * 24 * 60 * 60;
/// Shortest reservation an owner may configure.
pub const MIN_EXPIRY_LIMIT: u128 = 24 * 60 * 60;
pub const MAX_TICKER_LEN: u32 = 10;

// ============================================================================
// Lifecycle
// ============================================================================

pub fn initialize(
    env: &Env,
    layout: &[Field],
    st_factory: Address,
    st_launch_fee: u128,
    ticker_reg_fee: u128,
    fee_token: Address,
    owner: Address,
) -> Result<(), RegistryError> {
    if is_initialized(env) {
        return Err(RegistryError::AlreadyInitialized);
    }
    schema::declare(env, layout)?;

    put(env, &EXPIRY_LIMIT, ConfigValue::Uint(DEFAULT_EXPIRY_LIMIT))?;
    put(env, &ST_LAUNCH_FEE, ConfigValue::Uint(st_launch_fee))?;
    put(env, &TICKER_REG_FEE, ConfigValue::Uint(ticker_reg_fee))?;
    put(env, &FEE_TOKEN, ConfigValue::Address(fee_token))?;
    put(env, &ST_FACTORY, ConfigValue::Address(st_factory))?;
    put(env, &OWNER, ConfigValue::Address(owner))?;
    put(env, &INITIALISED, ConfigValue::Bool(true))?;
    Ok(())
}

pub fn is_initialized(env: &Env) -> bool {
    store::get_bool(env, &INITIALISED.key(env)).unwrap_or(false)
}

// ============================================================================
// Tickers
// ============================================================================

pub fn register_ticker(
    env: &Env,
    owner: Address,
    ticker: String,
    token_name: String,
) -> Result<(), RegistryError> {
    require_initialized(env)?;
    owner.require_auth();
    let ticker = normalize_ticker(env, &ticker)?;
    let now = env.ledger().timestamp();

    if read_address(env, &TICKER_OWNER, ticker.clone()).is_some() {
        let deployed = read_bool(env, &TICKER_STATUS, ticker.clone());
        let expiry = read_uint(env, &TICKER_EXPIRY_DATE, ticker.clone());
        if deployed || expiry >= u128::from(now) {
            return Err(RegistryError::TickerAlreadyRegistered);
        }
    }

    let fee = charge(env, &owner, &TICKER_REG_FEE)?;
    let limit = store::get_uint(env, &EXPIRY_LIMIT.key(env)).unwrap_or(DEFAULT_EXPIRY_LIMIT);
    let expiry = u128::from(now).saturating_add(limit);

    put_for(env, &TICKER_OWNER, ticker.clone(), ConfigValue::Address(owner.clone()))?;
    put_for(env, &TICKER_TOKEN_NAME, ticker.clone(), ConfigValue::Text(token_name.clone()))?;
    put_for(env, &TICKER_REGISTRATION_DATE, ticker.clone(), ConfigValue::Uint(u128::from(now)))?;
    put_for(env, &TICKER_EXPIRY_DATE, ticker.clone(), ConfigValue::Uint(expiry))?;
    put_for(env, &TICKER_STATUS, ticker.clone(), ConfigValue::Bool(false))?;

    events::ticker_registered(
        env,
        TickerRegisteredEvent {
            owner,
            ticker,
            token_name,
            registration_date: now,
            expiry_date: to_timestamp(expiry),
            fee,
        },
    );
    Ok(())
}

pub fn get_ticker_details(env: &Env, ticker: String) -> Result<Option<TickerDetails>, RegistryError> {
    let ticker = normalize_ticker(env, &ticker)?;
    let owner = match read_address(env, &TICKER_OWNER, ticker.clone()) {
        Some(owner) => owner,
        None => return Ok(None),
    };
    Ok(Some(TickerDetails {
        owner,
        registration_date: to_timestamp(read_uint(env, &TICKER_REGISTRATION_DATE, ticker.clone())),
        expiry_date: to_timestamp(read_uint(env, &TICKER_EXPIRY_DATE, ticker.clone())),
        token_name: store::get_text(env, &TICKER_TOKEN_NAME.key_for(env, ticker.clone()))
            .unwrap_or_else(|| String::from_str(env, "")),
        status: read_bool(env, &TICKER_STATUS, ticker),
    }))
}

// ============================================================================
// Security tokens
// ============================================================================

pub fn generate_security_token(
    env: &Env,
    issuer: Address,
    name: String,
    ticker: String,
    token_details: String,
    divisible: bool,
) -> Result<Address, RegistryError> {
    require_initialized(env)?;
    issuer.require_auth();
    let ticker = normalize_ticker(env, &ticker)?;

    let owner =
        read_address(env, &TICKER_OWNER, ticker.clone()).ok_or(RegistryError::TickerNotFound)?;
    if owner != issuer {
        return Err(RegistryError::NotTickerOwner);
    }
    if read_bool(env, &TICKER_STATUS, ticker.clone()) {
        return Err(RegistryError::TokenAlreadyDeployed);
    }
    let now = env.ledger().timestamp();
    if read_uint(env, &TICKER_EXPIRY_DATE, ticker.clone()) < u128::from(now) {
        return Err(RegistryError::TickerExpired);
    }

    let fee = charge(env, &issuer, &ST_LAUNCH_FEE)?;
    let factory = store::get_address(env, &ST_FACTORY.key(env)).ok_or(RegistryError::NotInitialized)?;
    let token = TokenFactoryClient::new(env, &factory).deploy_token(
        &name,
        &ticker,
        &token_details,
        &issuer,
        &divisible,
    );

    put_for(env, &TICKER_STATUS, ticker.clone(), ConfigValue::Bool(true))?;
    put_for(env, &TICKER_TOKEN_NAME, ticker.clone(), ConfigValue::Text(name.clone()))?;
    put_for(env, &TICKER_TO_TOKEN, ticker.clone(), ConfigValue::Address(token.clone()))?;
    put_for(env, &TOKEN_TICKER, token.clone(), ConfigValue::Text(ticker.clone()))?;
    put_for(env, &TOKEN_DETAILS, token.clone(), ConfigValue::Text(token_details))?;
    put_for(env, &TOKEN_DEPLOYED_AT, token.clone(), ConfigValue::Uint(u128::from(now)))?;

    events::token_generated(
        env,
        TokenGeneratedEvent {
            ticker,
            name,
            token: token.clone(),
            owner: issuer,
            deployed_at: now,
            fee,
        },
    );
    Ok(token)
}

pub fn get_security_token_address(env: &Env, ticker: String) -> Result<Option<Address>, RegistryError> {
    let ticker = normalize_ticker(env, &ticker)?;
    Ok(read_address(env, &TICKER_TO_TOKEN, ticker))
}

pub fn get_security_token_data(env: &Env, token: Address) -> Option<SecurityTokenData> {
    let ticker = store::get_text(env, &TOKEN_TICKER.key_for(env, token.clone()))?;
    let owner = read_address(env, &TICKER_OWNER, ticker.clone())?;
    Some(SecurityTokenData {
        ticker,
        owner,
        token_details: store::get_text(env, &TOKEN_DETAILS.key_for(env, token.clone()))
            .unwrap_or_else(|| String::from_str(env, "")),
        deployed_at: to_timestamp(read_uint(env, &TOKEN_DEPLOYED_AT, token)),
    })
}

/// Point a ticker at a different token contract. Only available in the
/// second logic revision.
pub fn change_the_deployed_address(
    env: &Env,
    caller: Address,
    ticker: String,
    new_address: Address,
) -> Result<(), RegistryError> {
    require_owner(env, &caller)?;
    let ticker = normalize_ticker(env, &ticker)?;
    let previous = read_address(env, &TICKER_TO_TOKEN, ticker.clone());
    put_for(env, &TICKER_TO_TOKEN, ticker.clone(), ConfigValue::Address(new_address.clone()))?;
    let now = u128::from(env.ledger().timestamp());
    put_for(env, &TICKER_TO_TOKEN_CHANGED_AT, ticker.clone(), ConfigValue::Uint(now))?;

    events::deployed_address_changed(
        env,
        DeployedAddressChangedEvent {
            ticker,
            previous,
            current: new_address,
        },
    );
    Ok(())
}

// ============================================================================
// Administration
// ============================================================================

pub fn change_expiry_limit(env: &Env, caller: Address, new_limit: u128) -> Result<(), RegistryError> {
    require_owner(env, &caller)?;
    if new_limit < MIN_EXPIRY_LIMIT {
        return Err(RegistryError::InvalidExpiryLimit);
    }
    let previous = store::get_uint(env, &EXPIRY_LIMIT.key(env)).unwrap_or(DEFAULT_EXPIRY_LIMIT);
    put(env, &EXPIRY_LIMIT, ConfigValue::Uint(new_limit))?;
    events::setting_changed(env, symbol_short!("exp_limit"), previous, new_limit);
    Ok(())
}

pub fn change_ticker_registration_fee(env: &Env, caller: Address, fee: u128) -> Result<(), RegistryError> {
    require_owner(env, &caller)?;
    let previous = store::get_uint(env, &TICKER_REG_FEE.key(env)).unwrap_or(0);
    put(env, &TICKER_REG_FEE, ConfigValue::Uint(fee))?;
    events::setting_changed(env, symbol_short!("reg_fee"), previous, fee);
    Ok(())
}

pub fn change_security_launch_fee(env: &Env, caller: Address, fee: u128) -> Result<(), RegistryError> {
    require_owner(env, &caller)?;
    let previous = store::get_uint(env, &ST_LAUNCH_FEE.key(env)).unwrap_or(0);
    put(env, &ST_LAUNCH_FEE, ConfigValue::Uint(fee))?;
    events::setting_changed(env, symbol_short!("lnch_fee"), previous, fee);
    Ok(())
}

pub fn transfer_ownership(env: &Env, caller: Address, new_owner: Address) -> Result<(), RegistryError> {
    let previous = require_owner(env, &caller)?;
    put(env, &OWNER, ConfigValue::Address(new_owner.clone()))?;
    events::ownership_transferred(env, previous, new_owner);
    Ok(())
}

// ============================================================================
// Internal helpers
// ============================================================================

fn require_initialized(env: &Env) -> Result<(), RegistryError> {
    if !is_initialized(env) {
        return Err(RegistryError::NotInitialized);
    }
    Ok(())
}

fn require_owner(env: &Env, caller: &Address) -> Result<Address, RegistryError> {
    require_initialized(env)?;
    caller.require_auth();
    let owner = store::get_address(env, &OWNER.key(env)).ok_or(RegistryError::NotInitialized)?;
    if &owner != caller {
        return Err(RegistryError::Unauthorized);
    }
    Ok(owner)
}

/// Collect the fee stored under `fee_field` from `payer` into this contract.
fn charge(env: &Env, payer: &Address, fee_field: &Field) -> Result<u128, RegistryError> {
    let fee = store::get_uint(env, &fee_field.key(env)).unwrap_or(0);
    if fee == 0 {
        return Ok(0);
    }
    let amount = i128::try_from(fee).map_err(|_| RegistryError::FeeOverflow)?;
    let fee_token =
        store::get_address(env, &FEE_TOKEN.key(env)).ok_or(RegistryError::NotInitialized)?;
    token::Client::new(env, &fee_token).transfer(payer, &env.current_contract_address(), &amount);
    Ok(fee)
}

/// Upper-case a ticker, accepting 1..=10 ASCII alphanumerics.
fn normalize_ticker(env: &Env, ticker: &String) -> Result<String, RegistryError> {
    let len = ticker.len();
    if len == 0 || len > MAX_TICKER_LEN {
        return Err(RegistryError::InvalidTicker);
    }
    let mut buf = [0u8; MAX_TICKER_LEN as usize];
    let symbol = &mut buf[..len as usize];
    ticker.copy_into_slice(symbol);
    for byte in symbol.iter_mut() {
        if !byte.is_ascii_alphanumeric() {
            return Err(RegistryError::InvalidTicker);
        }
        byte.make_ascii_uppercase();
    }
    let symbol = core::str::from_utf8(symbol).map_err(|_| RegistryError::InvalidTicker)?;
    Ok(String::from_str(env, symbol))
}

fn put(env: &Env, field: &Field, value: ConfigValue) -> Result<(), RegistryError> {
    store::write(env, field, &field.key(env), value)?;
    Ok(())
}

fn put_for<T: IntoVal<Env, Val>>(
    env: &Env,
    field: &Field,
    sub_key: T,
    value: ConfigValue,
) -> Result<(), RegistryError> {
    let key: BytesN<32> = field.key_for(env, sub_key);
    store::write(env, field, &key, value)?;
    Ok(())
}

fn read_address<T: IntoVal<Env, Val>>(env: &Env, field: &Field, sub_key: T) -> Option<Address> {
    store::get_address(env, &field.key_for(env, sub_key))
}

fn read_uint<T: IntoVal<Env, Val>>(env: &Env, field: &Field, sub_key: T) -> u128 {
    store::get_uint(env, &field.key_for(env, sub_key)).unwrap_or(0)
}

fn read_bool<T: IntoVal<Env, Val>>(env: &Env, field: &Field, sub_key: T) -> bool {
    store::get_bool(env, &field.key_for(env, sub_key)).unwrap_or(false)
}

fn to_timestamp(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
