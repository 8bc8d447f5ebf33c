#![no_std]

//! # Registry Proxy
//!
//! Long-lived entry point of the security-token registry. The proxy owns all
//! registry state and runs the logic revision carried by the currently
//! attached implementation inside its own contract context, so that
//! replacing the implementation never migrates or loses data.
//!
//! ## Lifecycle
//! `initialize` records the owner (`Uninitialized`), `upgrade_to_and_call`
//! attaches the first implementation and runs its initializer (`Attached`,
//! then `Active`), and every `upgrade_to` re-enters `Active`.
//!
//! ## Upgrade validation
//! Checks run in a fixed order and the first failure is reported:
//! owner, attached, version label well-formed, version changed,
//! implementation present, implementation is a registry contract,
//! implementation changed, storage schema compatible.

mod errors;
mod events;
mod storage;


pub use errors::ProxyError;
pub use storage::{Attachment, ProxyState, ProxyStatus, UpgradeRecord};

use eternal_storage::schema;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, Address, Env, String, Symbol, Val, Vec,
};
use ticker_registry::{LogicClient, LogicId};

/// Longest accepted version label, in bytes.
pub const MAX_VERSION_LEN: u32 = 32;

#[contract]
pub struct RegistryProxy;

#[contractimpl]
impl RegistryProxy {
    // ==================== Administration ====================

    pub fn initialize(env: Env, owner: Address) -> Result<(), ProxyError> {
        if storage::has_state(&env) {
            return Err(ProxyError::AlreadyInitialized);
        }
        owner.require_auth();
        storage::set_state(
            &env,
            &ProxyState {
                owner: owner.clone(),
                attachment: Attachment::Detached,
                status: ProxyStatus::Uninitialized,
            },
        );
        events::ownership_transferred(&env, None, owner);
        Ok(())
    }

    /// Attach the first implementation and run `init_fn(init_args)` through
    /// it against the proxy's storage. Only allowed once.
    pub fn upgrade_to_and_call(
        env: Env,
        caller: Address,
        version: String,
        implementation: Option<Address>,
        init_fn: Symbol,
        init_args: Vec<Val>,
    ) -> Result<(), ProxyError> {
        let mut state = require_owner(&env, &caller)?;
        if state.status != ProxyStatus::Uninitialized {
            return Err(ProxyError::AlreadyAttached);
        }
        let (implementation, logic) = validate_upgrade(&env, &state, &version, implementation)?;
        install(&env, &mut state, version, implementation, logic, ProxyStatus::Attached)?;

        if let Err(e) = ticker_registry::dispatch(&env, logic, &init_fn, &init_args) {
            panic_with_error!(&env, e);
        }

        state.status = ProxyStatus::Active;
        storage::set_state(&env, &state);
        Ok(())
    }

    /// Swap the implementation. No initializer runs and stored configuration
    /// is left as is.
    pub fn upgrade_to(
        env: Env,
        caller: Address,
        version: String,
        implementation: Option<Address>,
    ) -> Result<(), ProxyError> {
        let mut state = require_owner(&env, &caller)?;
        if state.status == ProxyStatus::Uninitialized {
            return Err(ProxyError::NotInitialized);
        }
        let (implementation, logic) = validate_upgrade(&env, &state, &version, implementation)?;
        install(&env, &mut state, version, implementation, logic, ProxyStatus::Active)?;
        Ok(())
    }

    pub fn transfer_proxy_ownership(
        env: Env,
        caller: Address,
        new_owner: Option<Address>,
    ) -> Result<(), ProxyError> {
        let mut state = require_owner(&env, &caller)?;
        let new_owner = new_owner.ok_or(ProxyError::NullOwner)?;

        let previous = core::mem::replace(&mut state.owner, new_owner.clone());
        storage::set_state(&env, &state);
        events::ownership_transferred(&env, Some(previous), new_owner);
        Ok(())
    }

    // ==================== Forwarding ====================

    /// Run `func(args)` with the current logic revision in the proxy's
    /// context and hand back its raw result. Failures raised by the logic
    /// abort the call with the logic's own error code.
    pub fn forward(env: Env, func: Symbol, args: Vec<Val>) -> Result<Val, ProxyError> {
        let state = storage::get_state(&env).ok_or(ProxyError::NotInitialized)?;
        let logic = match (state.status, state.logic()) {
            (ProxyStatus::Active, Some(logic)) => logic,
            _ => return Err(ProxyError::NotInitialized),
        };
        match ticker_registry::dispatch(&env, logic, &func, &args) {
            Ok(value) => Ok(value),
            Err(e) => panic_with_error!(&env, e),
        }
    }

    // ==================== Queries ====================

    pub fn implementation(env: Env) -> Option<Address> {
        storage::get_state(&env).and_then(|s| s.implementation())
    }

    pub fn version(env: Env) -> Option<String> {
        storage::get_state(&env).and_then(|s| s.version())
    }

    pub fn proxy_owner(env: Env) -> Option<Address> {
        storage::get_state(&env).map(|s| s.owner)
    }

    pub fn status(env: Env) -> ProxyStatus {
        storage::get_state(&env)
            .map(|s| s.status)
            .unwrap_or(ProxyStatus::Uninitialized)
    }

    pub fn history(env: Env) -> Vec<UpgradeRecord> {
        storage::get_history(&env)
    }
}

// ============================================================================
// Internal helpers
// ============================================================================

fn require_owner(env: &Env, caller: &Address) -> Result<ProxyState, ProxyError> {
    let state = storage::get_state(env).ok_or(ProxyError::Unauthorized)?;
    caller.require_auth();
    if &state.owner != caller {
        return Err(ProxyError::Unauthorized);
    }
    Ok(state)
}

fn validate_upgrade(
    env: &Env,
    state: &ProxyState,
    version: &String,
    implementation: Option<Address>,
) -> Result<(Address, LogicId), ProxyError> {
    if version.len() == 0 || version.len() > MAX_VERSION_LEN {
        return Err(ProxyError::InvalidVersion);
    }
    if state.version().as_ref() == Some(version) {
        return Err(ProxyError::VersionUnchanged);
    }
    let implementation = implementation.ok_or(ProxyError::NullImplementation)?;
    let logic = probe(env, &implementation)?;
    if state.implementation().as_ref() == Some(&implementation) {
        return Err(ProxyError::ImplementationUnchanged);
    }
    schema::verify(env, ticker_registry::schema_of(logic))
        .map_err(|_| ProxyError::IncompatibleSchema)?;
    Ok((implementation, logic))
}

/// Ask `implementation` which logic revision it carries. Accounts, missing
/// contracts and contracts without a usable `logic_id` all fail here.
fn probe(env: &Env, implementation: &Address) -> Result<LogicId, ProxyError> {
    match LogicClient::new(env, implementation).try_logic_id() {
        Ok(Ok(logic)) => Ok(logic),
        _ => Err(ProxyError::NotAContract),
    }
}

/// Point the proxy at `implementation` and declare the fields of its revision,
/// so that fields added by a later revision become writable.
fn install(
    env: &Env,
    state: &mut ProxyState,
    version: String,
    implementation: Address,
    logic: LogicId,
    status: ProxyStatus,
) -> Result<(), ProxyError> {
    schema::declare(env, ticker_registry::schema_of(logic))
        .map_err(|_| ProxyError::IncompatibleSchema)?;

    let previous_implementation = state.implementation();
    let previous_version = state.version();
    state.attachment = Attachment::Attached(implementation.clone(), logic, version.clone());
    state.status = status;
    storage::set_state(env, state);

    storage::add_history(
        env,
        UpgradeRecord {
            version: version.clone(),
            implementation: implementation.clone(),
            logic,
            upgraded_at: env.ledger().timestamp(),
        },
    );
    events::implementation_changed(env, previous_implementation, implementation, logic);
    events::version_changed(env, previous_version, version);
    Ok(())
}
