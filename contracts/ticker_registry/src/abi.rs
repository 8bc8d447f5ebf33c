//! Call decoding: maps a forwarded `(function, args)` pair onto the registry
//! operations and converts the outcome back into a raw `Val`.

use crate::errors::RegistryError;
use crate::registry;
use eternal_storage::{self as store, Field};
use soroban_sdk::{BytesN, Env, IntoVal, Symbol, TryFromVal, Val, Vec};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Initialize,
    RegisterTicker,
    GenerateSecurityToken,
    GetTickerDetails,
    GetSecurityTokenAddress,
    GetSecurityTokenData,
    GetUintValues,
    GetAddressValues,
    GetBoolValues,
    GetStringValues,
    GetBytesValues,
    ChangeExpiryLimit,
    ChangeTickerRegistrationFee,
    ChangeSecurityLaunchFee,
    TransferOwnership,
    ChangeTheDeployedAddress,
}

impl Op {
    pub const ALL: [Op; 16] = [
        Op::Initialize,
        Op::RegisterTicker,
        Op::GenerateSecurityToken,
        Op::GetTickerDetails,
        Op::GetSecurityTokenAddress,
        Op::GetSecurityTokenData,
        Op::GetUintValues,
        Op::GetAddressValues,
        Op::GetBoolValues,
        Op::GetStringValues,
        Op::GetBytesValues,
        Op::ChangeExpiryLimit,
        Op::ChangeTickerRegistrationFee,
        Op::ChangeSecurityLaunchFee,
        Op::TransferOwnership,
        Op::ChangeTheDeployedAddress,
    ];

    /// Function name callers put in the forwarded call.
    pub const fn name(self) -> &'static str {
        match self {
            Op::Initialize => "initialize",
            Op::RegisterTicker => "register_ticker",
            Op::GenerateSecurityToken => "generate_security_token",
            Op::GetTickerDetails => "get_ticker_details",
            Op::GetSecurityTokenAddress => "get_security_token_address",
            Op::GetSecurityTokenData => "get_security_token_data",
            Op::GetUintValues => "get_uint_values",
            Op::GetAddressValues => "get_address_values",
            Op::GetBoolValues => "get_bool_values",
            Op::GetStringValues => "get_string_values",
            Op::GetBytesValues => "get_bytes_values",
            Op::ChangeExpiryLimit => "change_expiry_limit",
            Op::ChangeTickerRegistrationFee => "change_ticker_registration_fee",
            Op::ChangeSecurityLaunchFee => "change_security_launch_fee",
            Op::TransferOwnership => "transfer_ownership",
            Op::ChangeTheDeployedAddress => "change_the_deployed_address",
        }
    }

    pub fn symbol(self, env: &Env) -> Symbol {
        Symbol::new(env, self.name())
    }

    pub fn resolve(env: &Env, func: &Symbol) -> Option<Op> {
        Op::ALL.iter().copied().find(|op| op.symbol(env) == *func)
    }
}

/// Positional arguments of one call, checked for arity up front.
pub struct Args<'a> {
    env: &'a Env,
    values: &'a Vec<Val>,
}

impl<'a> Args<'a> {
    pub fn expect(env: &'a Env, values: &'a Vec<Val>, arity: u32) -> Result<Self, RegistryError> {
        if values.len() != arity {
            return Err(RegistryError::InvalidArguments);
        }
        Ok(Self { env, values })
    }

    pub fn get<T: TryFromVal<Env, Val>>(&self, index: u32) -> Result<T, RegistryError> {
        let raw = self
            .values
            .get(index)
            .ok_or(RegistryError::InvalidArguments)?;
        T::try_from_val(self.env, &raw).map_err(|_| RegistryError::InvalidArguments)
    }
}

fn ret<T: IntoVal<Env, Val>>(env: &Env, value: T) -> Val {
    value.into_val(env)
}

/// Operations shared by every logic revision. `layout` is the field set of
/// the revision running the call; `initialize` declares it.
pub fn call_common(
    env: &Env,
    layout: &[Field],
    op: Op,
    values: &Vec<Val>,
) -> Result<Val, RegistryError> {
    match op {
        Op::Initialize => {
            let a = Args::expect(env, values, 5)?;
            registry::initialize(
                env,
                layout,
                a.get(0)?,
                a.get(1)?,
                a.get(2)?,
                a.get(3)?,
                a.get(4)?,
            )?;
            Ok(ret(env, ()))
        }
        Op::RegisterTicker => {
            let a = Args::expect(env, values, 3)?;
            registry::register_ticker(env, a.get(0)?, a.get(1)?, a.get(2)?)?;
            Ok(ret(env, ()))
        }
        Op::GenerateSecurityToken => {
            let a = Args::expect(env, values, 5)?;
            let token = registry::generate_security_token(
                env,
                a.get(0)?,
                a.get(1)?,
                a.get(2)?,
                a.get(3)?,
                a.get(4)?,
            )?;
            Ok(ret(env, token))
        }
        Op::GetTickerDetails => {
            let a = Args::expect(env, values, 1)?;
            Ok(ret(env, registry::get_ticker_details(env, a.get(0)?)?))
        }
        Op::GetSecurityTokenAddress => {
            let a = Args::expect(env, values, 1)?;
            Ok(ret(env, registry::get_security_token_address(env, a.get(0)?)?))
        }
        Op::GetSecurityTokenData => {
            let a = Args::expect(env, values, 1)?;
            Ok(ret(env, registry::get_security_token_data(env, a.get(0)?)))
        }
        Op::GetUintValues => {
            let key: BytesN<32> = Args::expect(env, values, 1)?.get(0)?;
            Ok(ret(env, store::get_uint(env, &key)))
        }
        Op::GetAddressValues => {
            let key: BytesN<32> = Args::expect(env, values, 1)?.get(0)?;
            Ok(ret(env, store::get_address(env, &key)))
        }
        Op::GetBoolValues => {
            let key: BytesN<32> = Args::expect(env, values, 1)?.get(0)?;
            Ok(ret(env, store::get_bool(env, &key)))
        }
        Op::GetStringValues => {
            let key: BytesN<32> = Args::expect(env, values, 1)?.get(0)?;
            Ok(ret(env, store::get_text(env, &key)))
        }
        Op::GetBytesValues => {
            let key: BytesN<32> = Args::expect(env, values, 1)?.get(0)?;
            Ok(ret(env, store::get_bytes(env, &key)))
        }
        Op::ChangeExpiryLimit => {
            let a = Args::expect(env, values, 2)?;
            registry::change_expiry_limit(env, a.get(0)?, a.get(1)?)?;
            Ok(ret(env, ()))
        }
        Op::ChangeTickerRegistrationFee => {
            let a = Args::expect(env, values, 2)?;
            registry::change_ticker_registration_fee(env, a.get(0)?, a.get(1)?)?;
            Ok(ret(env, ()))
        }
        Op::ChangeSecurityLaunchFee => {
            let a = Args::expect(env, values, 2)?;
            registry::change_security_launch_fee(env, a.get(0)?, a.get(1)?)?;
            Ok(ret(env, ()))
        }
        Op::TransferOwnership => {
            let a = Args::expect(env, values, 2)?;
            registry::transfer_ownership(env, a.get(0)?, a.get(1)?)?;
            Ok(ret(env, ()))
        }
        Op::ChangeTheDeployedAddress => Err(RegistryError::UnknownFunction),
    }
}

/// Operations added by the second revision.
pub fn call_v2(
    env: &Env,
    layout: &[Field],
    op: Op,
    values: &Vec<Val>,
) -> Result<Val, RegistryError> {
    match op {
        Op::ChangeTheDeployedAddress => {
            let a = Args::expect(env, values, 3)?;
            registry::change_the_deployed_address(env, a.get(0)?, a.get(1)?, a.get(2)?)?;
            Ok(ret(env, ()))
        }
        other => call_common(env, layout, other, values),
    }
}
