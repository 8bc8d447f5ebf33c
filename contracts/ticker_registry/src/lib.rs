#![no_std]

//! # Ticker Registry Logic
//!
//! Business logic of the security-token registry, packaged so that a proxy
//! can execute it against its own storage. Each logic revision is a type
//! implementing [`RegistryLogic`]; [`LogicId`] is the closed table of
//! revisions a proxy knows how to run.
//!
//! Revisions share the configuration keyspace declared in [`fields`]. A later
//! revision may add fields but must never change the kind of an existing one.

pub mod abi;
pub mod errors;
pub mod events;
pub mod fields;
pub mod registry;
pub mod types;


pub use abi::Op;
pub use errors::RegistryError;
pub use types::{SecurityTokenData, TickerDetails};

use eternal_storage::Field;
use soroban_sdk::{contractclient, contracttype, Address, Env, String, Symbol, Val, Vec};

/// Identifier a deployed implementation reports for the logic it carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum LogicId {
    TickerRegistryV1 = 1,
    /// V1 plus administrative correction of deployed token addresses.
    TickerRegistryV2 = 2,
}

pub trait RegistryLogic {
    const ID: LogicId;

    /// Fields this revision reads and writes.
    fn schema() -> &'static [Field];

    fn dispatch(env: &Env, func: &Symbol, args: &Vec<Val>) -> Result<Val, RegistryError>;
}

pub struct TickerRegistryV1;

impl RegistryLogic for TickerRegistryV1 {
    const ID: LogicId = LogicId::TickerRegistryV1;

    fn schema() -> &'static [Field] {
        fields::SCHEMA
    }

    fn dispatch(env: &Env, func: &Symbol, args: &Vec<Val>) -> Result<Val, RegistryError> {
        let op = Op::resolve(env, func).ok_or(RegistryError::UnknownFunction)?;
        abi::call_common(env, Self::schema(), op, args)
    }
}

pub struct TickerRegistryV2;

impl RegistryLogic for TickerRegistryV2 {
    const ID: LogicId = LogicId::TickerRegistryV2;

    fn schema() -> &'static [Field] {
        fields::SCHEMA_V2
    }

    fn dispatch(env: &Env, func: &Symbol, args: &Vec<Val>) -> Result<Val, RegistryError> {
        let op = Op::resolve(env, func).ok_or(RegistryError::UnknownFunction)?;
        abi::call_v2(env, Self::schema(), op, args)
    }
}

/// Run `func(args)` with the logic of revision `logic` against the storage of
/// the contract currently executing.
pub fn dispatch(
    env: &Env,
    logic: LogicId,
    func: &Symbol,
    args: &Vec<Val>,
) -> Result<Val, RegistryError> {
    match logic {
        LogicId::TickerRegistryV1 => TickerRegistryV1::dispatch(env, func, args),
        LogicId::TickerRegistryV2 => TickerRegistryV2::dispatch(env, func, args),
    }
}

pub fn schema_of(logic: LogicId) -> &'static [Field] {
    match logic {
        LogicId::TickerRegistryV1 => TickerRegistryV1::schema(),
        LogicId::TickerRegistryV2 => TickerRegistryV2::schema(),
    }
}

// Interface every deployed implementation exposes; used by the proxy to probe
// an address before attaching it.
#[contractclient(name = "LogicClient")]
pub trait LogicInterface {
    fn logic_id(env: Env) -> LogicId;
}

// Minimal interface of the security-token factory.
#[contractclient(name = "TokenFactoryClient")]
pub trait SecurityTokenFactory {
    fn deploy_token(
        env: Env,
        name: String,
        ticker: String,
        details: String,
        issuer: Address,
        divisible: bool,
    ) -> Address;
}
