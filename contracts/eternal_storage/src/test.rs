#![allow(clippy::unwrap_used)]

use super::*;
use soroban_sdk::{contract, contractimpl, symbol_short, testutils::Address as _, Address, Env};

#[contract]
pub struct StoreHarness;

#[contractimpl]
impl StoreHarness {
    pub fn ping(_env: Env) {}
}

const FEE: Field = Field::new("tickerRegFee", ValueKind::Uint);
const TOKEN: Field = Field::new("polyToken", ValueKind::Address);
const PAUSED: Field = Field::new("paused", ValueKind::Bool);

fn harness(env: &Env) -> Address {
    env.register_contract(None, StoreHarness)
}

#[test]
fn keys_are_deterministic_and_distinct() {
    let env = Env::default();
    assert_eq!(key(&env, "tickerRegFee"), key(&env, "tickerRegFee"));
    assert_ne!(key(&env, "tickerRegFee"), key(&env, "stLaunchFee"));
    assert_eq!(FEE.key(&env), key(&env, "tickerRegFee"));
}

#[test]
fn record_keys_depend_on_sub_key() {
    let env = Env::default();
    let owner = Field::new("registeredTickers_owner", ValueKind::Address);
    let sap = owner.key_for(&env, symbol_short!("SAP"));
    let abc = owner.key_for(&env, symbol_short!("ABC"));
    assert_ne!(sap, abc);
    assert_eq!(sap, owner.key_for(&env, symbol_short!("SAP")));
    assert_ne!(sap, owner.key(&env));
}

#[test]
fn typed_values_round_trip() {
    let env = Env::default();
    let id = harness(&env);
    let holder = Address::generate(&env);

    env.as_contract(&id, || {
        let k = key(&env, "anything");
        assert_eq!(get_uint(&env, &k), None);

        set_uint(&env, &k, 250_000_000_000_000_000_000);
        set_address(&env, &k, &holder);
        set_bool(&env, &k, true);
        set_text(&env, &k, &String::from_str(&env, "Team"));

        assert_eq!(get_uint(&env, &k), Some(250_000_000_000_000_000_000));
        assert_eq!(get_address(&env, &k), Some(holder.clone()));
        assert_eq!(get_bool(&env, &k), Some(true));
        assert_eq!(get_text(&env, &k), Some(String::from_str(&env, "Team")));
        assert_eq!(get_int(&env, &k), None);
        assert_eq!(get_bytes(&env, &k), None);
    });
}

#[test]
fn kinds_do_not_alias() {
    let env = Env::default();
    let id = harness(&env);

    env.as_contract(&id, || {
        let k = key(&env, "expiryLimit");
        set_int(&env, &k, -5);
        assert!(has(&env, ValueKind::Int, &k));
        assert!(!has(&env, ValueKind::Uint, &k));
        assert_eq!(get(&env, ValueKind::Uint, &k), None);
        assert_eq!(get(&env, ValueKind::Int, &k), Some(ConfigValue::Int(-5)));
    });
}

#[test]
fn overwrite_replaces_value() {
    let env = Env::default();
    let id = harness(&env);

    env.as_contract(&id, || {
        let k = FEE.key(&env);
        set_uint(&env, &k, 1);
        set_uint(&env, &k, 2);
        assert_eq!(get_uint(&env, &k), Some(2));
    });
}

#[test]
fn checked_write_requires_declaration() {
    let env = Env::default();
    let id = harness(&env);

    env.as_contract(&id, || {
        let k = FEE.key(&env);
        assert_eq!(
            write(&env, &FEE, &k, ConfigValue::Uint(10)),
            Err(StoreError::UndeclaredField)
        );
        assert_eq!(get_uint(&env, &k), None);

        schema::declare(&env, &[FEE, TOKEN]).unwrap();
        write(&env, &FEE, &k, ConfigValue::Uint(10)).unwrap();
        assert_eq!(get_uint(&env, &k), Some(10));
    });
}

#[test]
fn checked_write_rejects_wrong_kind() {
    let env = Env::default();
    let id = harness(&env);

    env.as_contract(&id, || {
        schema::declare(&env, &[FEE]).unwrap();
        let k = FEE.key(&env);
        assert_eq!(
            write(&env, &FEE, &k, ConfigValue::Bool(true)),
            Err(StoreError::TypeMismatch)
        );

        // Same name, different kind than the installed declaration.
        let impostor = Field::new("tickerRegFee", ValueKind::Int);
        assert_eq!(
            write(&env, &impostor, &k, ConfigValue::Int(3)),
            Err(StoreError::TypeMismatch)
        );
        assert!(!has(&env, ValueKind::Int, &k));
    });
}

#[test]
fn conflicting_declaration_is_all_or_nothing() {
    let env = Env::default();
    let id = harness(&env);

    env.as_contract(&id, || {
        schema::declare(&env, &[FEE]).unwrap();
        let conflicting = Field::new("tickerRegFee", ValueKind::Text);

        assert_eq!(
            schema::declare(&env, &[PAUSED, conflicting]),
            Err(StoreError::SchemaConflict)
        );
        assert_eq!(schema::declared_kind(&env, "paused"), None);
        assert_eq!(schema::verify(&env, &[conflicting]), Err(StoreError::SchemaConflict));

        // Re-declaring with the same kind is fine.
        schema::declare(&env, &[FEE, PAUSED]).unwrap();
        assert_eq!(schema::declared_kind(&env, "tickerRegFee"), Some(ValueKind::Uint));
        assert_eq!(schema::declared_kind(&env, "paused"), Some(ValueKind::Bool));
    });
}

#[test]
fn storage_is_per_contract() {
    let env = Env::default();
    let first = harness(&env);
    let second = harness(&env);
    let k = FEE.key(&env);

    env.as_contract(&first, || set_uint(&env, &k, 7));
    env.as_contract(&second, || assert_eq!(get_uint(&env, &k), None));
    env.as_contract(&first, || assert_eq!(get_uint(&env, &k), Some(7)));
}

#[test]
fn unchecked_setters_bypass_the_schema() {
    let env = Env::default();
    let id = harness(&env);

    env.as_contract(&id, || {
        schema::declare(&env, &[FEE]).unwrap();
        let k = FEE.key(&env);

        // The schema says Uint; only the checked path enforces it.
        assert_eq!(
            write(&env, &FEE, &k, ConfigValue::Bool(true)),
            Err(StoreError::TypeMismatch)
        );
        set_bool(&env, &k, true);
        assert_eq!(get_bool(&env, &k), Some(true));
        assert_eq!(schema::declared_kind(&env, FEE.name), Some(ValueKind::Uint));

        let undeclared = key(&env, "neverDeclared");
        set_uint(&env, &undeclared, 9);
        assert_eq!(get_uint(&env, &undeclared), Some(9));
        assert_eq!(schema::declared_kind(&env, "neverDeclared"), None);
    });
}
