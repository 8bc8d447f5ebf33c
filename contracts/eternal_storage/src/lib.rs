#![no_std]

//! # Eternal Storage
//!
//! Hash-keyed, typed key/value storage that outlives any single logic
//! revision. Every entry is addressed by `sha256(name)` (or
//! `sha256(name || xdr(sub_key))` for per-record fields) and lives in the
//! persistent storage of whichever contract is executing, so a proxy that runs
//! several logic revisions keeps one keyspace for all of them.
//!
//! Each value kind has its own namespace: a key written as an address is never
//! visible as an integer. Writes that go through [`write`] are additionally
//! checked against the field schema installed with [`schema::declare`].

pub mod schema;

use soroban_sdk::{
    contracterror, contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env, IntoVal, String, Val,
};

#[cfg(test)]
mod test;

// ============================================================================
// Errors
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StoreError {
    TypeMismatch = 50,
    UndeclaredField = 51,
    SchemaConflict = 52,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ValueKind {
    Uint = 0,
    Int = 1,
    Address = 2,
    Bytes = 3,
    Bool = 4,
    Text = 5,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ConfigValue {
    Uint(u128),
    Int(i128),
    Address(Address),
    Bytes(Bytes),
    Bool(bool),
    Text(String),
}

impl ConfigValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfigValue::Uint(_) => ValueKind::Uint,
            ConfigValue::Int(_) => ValueKind::Int,
            ConfigValue::Address(_) => ValueKind::Address,
            ConfigValue::Bytes(_) => ValueKind::Bytes,
            ConfigValue::Bool(_) => ValueKind::Bool,
            ConfigValue::Text(_) => ValueKind::Text,
        }
    }
}

#[derive(Clone)]
#[contracttype]
pub enum StoreKey {
    Entry(ValueKind, BytesN<32>),
    Schema(BytesN<32>),
}

/// A named configuration field with the one value kind it may ever hold.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub kind: ValueKind,
}

impl Field {
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self { name, kind }
    }

    /// Key of the field itself, e.g. `sha256("tickerRegFee")`.
    pub fn key(&self, env: &Env) -> BytesN<32> {
        key(env, self.name)
    }

    /// Key of one record of the field, e.g. the owner of a given ticker.
    pub fn key_for<T: IntoVal<Env, Val>>(&self, env: &Env, sub_key: T) -> BytesN<32> {
        let mut preimage = Bytes::from_slice(env, self.name.as_bytes());
        preimage.append(&sub_key.to_xdr(env));
        env.crypto().sha256(&preimage).into()
    }
}

// ============================================================================
// Lifetime
// ============================================================================

const DAY_IN_LEDGERS: u32 = 17_280;
pub const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

fn bump(env: &Env, slot: &StoreKey) {
    env.storage()
        .persistent()
        .extend_ttl(slot, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

// ============================================================================
// Untyped access
// ============================================================================

/// Hash a human-readable name into a store key.
pub fn key(env: &Env, name: &str) -> BytesN<32> {
    env.crypto()
        .sha256(&Bytes::from_slice(env, name.as_bytes()))
        .into()
}

pub fn get(env: &Env, kind: ValueKind, key: &BytesN<32>) -> Option<ConfigValue> {
    let slot = StoreKey::Entry(kind, key.clone());
    let value: Option<ConfigValue> = env.storage().persistent().get(&slot);
    if value.is_some() {
        bump(env, &slot);
    }
    value
}

/// Unchecked write: the value is filed under its own kind's namespace and the
/// field schema is not consulted. Logic revisions write through [`write`].
pub fn set(env: &Env, key: &BytesN<32>, value: &ConfigValue) {
    let slot = StoreKey::Entry(value.kind(), key.clone());
    env.storage().persistent().set(&slot, value);
    bump(env, &slot);
}

pub fn has(env: &Env, kind: ValueKind, key: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&StoreKey::Entry(kind, key.clone()))
}

/// Schema-checked write: the value must match the field's kind and the field
/// must have been declared with that same kind.
pub fn write(
    env: &Env,
    field: &Field,
    key: &BytesN<32>,
    value: ConfigValue,
) -> Result<(), StoreError> {
    if value.kind() != field.kind {
        return Err(StoreError::TypeMismatch);
    }
    match schema::declared_kind(env, field.name) {
        None => return Err(StoreError::UndeclaredField),
        Some(kind) if kind != field.kind => return Err(StoreError::TypeMismatch),
        Some(_) => {}
    }
    set(env, key, &value);
    Ok(())
}

// ============================================================================
// Typed access
// ============================================================================

pub fn get_uint(env: &Env, key: &BytesN<32>) -> Option<u128> {
    match get(env, ValueKind::Uint, key) {
        Some(ConfigValue::Uint(v)) => Some(v),
        _ => None,
    }
}

pub fn get_int(env: &Env, key: &BytesN<32>) -> Option<i128> {
    match get(env, ValueKind::Int, key) {
        Some(ConfigValue::Int(v)) => Some(v),
        _ => None,
    }
}

pub fn get_address(env: &Env, key: &BytesN<32>) -> Option<Address> {
    match get(env, ValueKind::Address, key) {
        Some(ConfigValue::Address(v)) => Some(v),
        _ => None,
    }
}

pub fn get_bytes(env: &Env, key: &BytesN<32>) -> Option<Bytes> {
    match get(env, ValueKind::Bytes, key) {
        Some(ConfigValue::Bytes(v)) => Some(v),
        _ => None,
    }
}

pub fn get_bool(env: &Env, key: &BytesN<32>) -> Option<bool> {
    match get(env, ValueKind::Bool, key) {
        Some(ConfigValue::Bool(v)) => Some(v),
        _ => None,
    }
}

pub fn get_text(env: &Env, key: &BytesN<32>) -> Option<String> {
    match get(env, ValueKind::Text, key) {
        Some(ConfigValue::Text(v)) => Some(v),
        _ => None,
    }
}

// Unchecked typed setters, same contract as [`set`]. They do not consult the
// field schema and exist for tooling and tests; logic goes through [`write`].

pub fn set_uint(env: &Env, key: &BytesN<32>, value: u128) {
    set(env, key, &ConfigValue::Uint(value));
}

pub fn set_int(env: &Env, key: &BytesN<32>, value: i128) {
    set(env, key, &ConfigValue::Int(value));
}

pub fn set_address(env: &Env, key: &BytesN<32>, value: &Address) {
    set(env, key, &ConfigValue::Address(value.clone()));
}

pub fn set_bytes(env: &Env, key: &BytesN<32>, value: &Bytes) {
    set(env, key, &ConfigValue::Bytes(value.clone()));
}

pub fn set_bool(env: &Env, key: &BytesN<32>, value: bool) {
    set(env, key, &ConfigValue::Bool(value));
}

pub fn set_text(env: &Env, key: &BytesN<32>, value: &String) {
    set(env, key, &ConfigValue::Text(value.clone()));
}
