use soroban_sdk::{symbol_short, Address, Env, String, Symbol};
use ticker_registry::LogicId;

const PROXY: Symbol = symbol_short!("PROXY");

pub fn implementation_changed(
    env: &Env,
    previous: Option<Address>,
    current: Address,
    logic: LogicId,
) {
    env.events()
        .publish((PROXY, symbol_short!("impl")), (previous, current, logic));
}

pub fn version_changed(env: &Env, previous: Option<String>, current: String) {
    env.events()
        .publish((PROXY, symbol_short!("version")), (previous, current));
}

pub fn ownership_transferred(env: &Env, previous: Option<Address>, current: Address) {
    env.events()
        .publish((PROXY, symbol_short!("owner")), (previous, current));
}
