#![no_std]

//! Deployable carrier of one registry logic revision.
//!
//! A proxy never runs this contract's code remotely: it asks `logic_id` which
//! revision is carried here and executes that revision in its own context.
//! Calling `execute` directly runs the same logic against this contract's own
//! storage, which is useful for inspection and is what makes the two storage
//! contexts observably distinct.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short, Env,
    Symbol, Val, Vec,
};
use ticker_registry::LogicId;

#[cfg(test)]
mod test;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ImplementationError {
    AlreadyInitialized = 200,
    NotInitialized = 201,
}

#[contracttype]
pub enum DataKey {
    Logic,
}

const IMPL: Symbol = symbol_short!("IMPL");

#[contract]
pub struct RegistryImplementation;

#[contractimpl]
impl RegistryImplementation {
    /// One-time deploy step selecting the revision this contract carries.
    pub fn initialize(env: Env, logic: LogicId) -> Result<(), ImplementationError> {
        if env.storage().instance().has(&DataKey::Logic) {
            return Err(ImplementationError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Logic, &logic);
        env.events().publish((IMPL, symbol_short!("init")), logic);
        Ok(())
    }

    pub fn logic_id(env: Env) -> Result<LogicId, ImplementationError> {
        env.storage()
            .instance()
            .get(&DataKey::Logic)
            .ok_or(ImplementationError::NotInitialized)
    }

    /// Run `func(args)` against this contract's own storage.
    pub fn execute(env: Env, func: Symbol, args: Vec<Val>) -> Val {
        let logic = match Self::logic_id(env.clone()) {
            Ok(logic) => logic,
            Err(e) => panic_with_error!(&env, e),
        };
        match ticker_registry::dispatch(&env, logic, &func, &args) {
            Ok(value) => value,
            Err(e) => panic_with_error!(&env, e),
        }
    }
}
