#![allow(clippy::unwrap_used)]

use super::*;
use soroban_sdk::{testutils::Address as _, vec, Address, Error, IntoVal, TryFromVal};
use ticker_registry::{Op, RegistryError};

fn setup(env: &Env) -> (Address, RegistryImplementationClient<'_>) {
    env.mock_all_auths();
    let contract_id = env.register_contract(None, RegistryImplementation);
    let client = RegistryImplementationClient::new(env, &contract_id);
    (contract_id, client)
}

#[test]
fn reports_the_logic_it_carries() {
    let env = Env::default();
    let (_, client) = setup(&env);

    client.initialize(&LogicId::TickerRegistryV2);
    assert_eq!(client.logic_id(), LogicId::TickerRegistryV2);
}

#[test]
fn logic_is_set_once() {
    let env = Env::default();
    let (_, client) = setup(&env);

    client.initialize(&LogicId::TickerRegistryV1);
    let res = client.try_initialize(&LogicId::TickerRegistryV2);
    assert!(matches!(res, Err(Ok(ImplementationError::AlreadyInitialized))));
    assert_eq!(client.logic_id(), LogicId::TickerRegistryV1);
}

#[test]
fn uninitialized_implementation_has_no_logic() {
    let env = Env::default();
    let (_, client) = setup(&env);

    let res = client.try_logic_id();
    assert!(matches!(res, Err(Ok(ImplementationError::NotInitialized))));

    let res = client.try_execute(&Op::GetTickerDetails.symbol(&env), &Vec::new(&env));
    assert!(matches!(res, Err(Ok(e)) if e == Error::from(ImplementationError::NotInitialized)));
}

#[test]
fn execute_runs_against_own_storage() {
    let env = Env::default();
    let (contract_id, client) = setup(&env);
    client.initialize(&LogicId::TickerRegistryV1);

    let owner = Address::generate(&env);
    client.execute(
        &Op::Initialize.symbol(&env),
        &vec![
            &env,
            Address::generate(&env).into_val(&env),
            0u128.into_val(&env),
            0u128.into_val(&env),
            Address::generate(&env).into_val(&env),
            owner.into_val(&env),
        ],
    );

    let raw = client.execute(
        &Op::GetAddressValues.symbol(&env),
        &vec![&env, eternal_storage::key(&env, "owner").into_val(&env)],
    );
    assert_eq!(Option::<Address>::try_from_val(&env, &raw).unwrap(), Some(owner));

    env.as_contract(&contract_id, || {
        assert!(ticker_registry::registry::is_initialized(&env));
    });
}

#[test]
fn logic_errors_keep_their_code() {
    let env = Env::default();
    let (_, client) = setup(&env);
    client.initialize(&LogicId::TickerRegistryV1);

    let res = client.try_execute(&Symbol::new(&env, "no_such_function"), &Vec::new(&env));
    assert!(matches!(res, Err(Ok(e)) if e == Error::from(RegistryError::UnknownFunction)));

    let res = client.try_execute(&Op::RegisterTicker.symbol(&env), &Vec::new(&env));
    assert!(matches!(res, Err(Ok(e)) if e == Error::from(RegistryError::InvalidArguments)));
}
