use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// ==================== Event Payload Structs ====================
// Published under ("REGISTRY", action). When the logic runs behind the
// proxy, the events are emitted by the proxy's address.

const REGISTRY: Symbol = symbol_short!("REGISTRY");

#[derive(Clone)]
#[contracttype]
pub struct TickerRegisteredEvent {
    pub owner: Address,
    pub ticker: String,
    pub token_name: String,
    pub registration_date: u64,
    pub expiry_date: u64,
    pub fee: u128,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenGeneratedEvent {
    pub ticker: String,
    pub name: String,
    pub token: Address,
    pub owner: Address,
    pub deployed_at: u64,
    pub fee: u128,
}

#[derive(Clone)]
#[contracttype]
pub struct DeployedAddressChangedEvent {
    pub ticker: String,
    pub previous: Option<Address>,
    pub current: Address,
}

pub fn ticker_registered(env: &Env, event: TickerRegisteredEvent) {
    env.events()
        .publish((REGISTRY, symbol_short!("reg_tick")), event);
}

pub fn token_generated(env: &Env, event: TokenGeneratedEvent) {
    env.events()
        .publish((REGISTRY, symbol_short!("new_token")), event);
}

pub fn deployed_address_changed(env: &Env, event: DeployedAddressChangedEvent) {
    env.events()
        .publish((REGISTRY, symbol_short!("tok_addr")), event);
}

/// A numeric setting changed; `action` names which one.
pub fn setting_changed(env: &Env, action: Symbol, previous: u128, current: u128) {
    env.events().publish((REGISTRY, action), (previous, current));
}

pub fn ownership_transferred(env: &Env, previous: Address, current: Address) {
    env.events()
        .publish((REGISTRY, symbol_short!("own_xfer")), (previous, current));
}
