use super::{key, Field, StoreError, StoreKey, ValueKind, ENTRY_BUMP_AMOUNT, ENTRY_LIFETIME_THRESHOLD};
use soroban_sdk::Env;

/// Kind a field name was declared with, if any revision declared it.
pub fn declared_kind(env: &Env, name: &str) -> Option<ValueKind> {
    let slot = StoreKey::Schema(key(env, name));
    let kind: Option<ValueKind> = env.storage().persistent().get(&slot);
    if kind.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&slot, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
    }
    kind
}

/// Check `fields` against what is already declared, without writing.
pub fn verify(env: &Env, fields: &[Field]) -> Result<(), StoreError> {
    for field in fields {
        if let Some(kind) = declared_kind(env, field.name) {
            if kind != field.kind {
                return Err(StoreError::SchemaConflict);
            }
        }
    }
    Ok(())
}

/// Install `fields`. All-or-nothing: nothing is recorded if any field
/// conflicts with an earlier declaration.
pub fn declare(env: &Env, fields: &[Field]) -> Result<(), StoreError> {
    verify(env, fields)?;
    for field in fields {
        let slot = StoreKey::Schema(key(env, field.name));
        env.storage().persistent().set(&slot, &field.kind);
        env.storage()
            .persistent()
            .extend_ttl(&slot, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
    }
    Ok(())
}
