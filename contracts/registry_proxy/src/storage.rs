use soroban_sdk::{contracttype, Address, Env, String, Vec};
use ticker_registry::LogicId;

const DAY_IN_LEDGERS: u32 = 17_280;
const HISTORY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const HISTORY_LIFETIME_THRESHOLD: u32 = HISTORY_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ProxyStatus {
    Uninitialized = 0,
    Attached = 1,
    Active = 2,
}

/// What the proxy currently runs. Implementation, revision and version label
/// are set together on attach and replaced together on upgrade.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Attachment {
    Detached,
    Attached(Address, LogicId, String),
}

/// Root record of the proxy.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ProxyState {
    pub owner: Address,
    pub attachment: Attachment,
    pub status: ProxyStatus,
}

impl ProxyState {
    pub fn implementation(&self) -> Option<Address> {
        match &self.attachment {
            Attachment::Attached(implementation, _, _) => Some(implementation.clone()),
            Attachment::Detached => None,
        }
    }

    pub fn logic(&self) -> Option<LogicId> {
        match &self.attachment {
            Attachment::Attached(_, logic, _) => Some(*logic),
            Attachment::Detached => None,
        }
    }

    pub fn version(&self) -> Option<String> {
        match &self.attachment {
            Attachment::Attached(_, _, version) => Some(version.clone()),
            Attachment::Detached => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UpgradeRecord {
    pub version: String,
    pub implementation: Address,
    pub logic: LogicId,
    pub upgraded_at: u64,
}

#[contracttype]
pub enum DataKey {
    State,
    History,
}

pub fn get_state(env: &Env) -> Option<ProxyState> {
    env.storage().instance().get(&DataKey::State)
}

pub fn set_state(env: &Env, state: &ProxyState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn has_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::State)
}

pub fn add_history(env: &Env, record: UpgradeRecord) {
    let mut list = get_history(env);
    list.push_back(record);
    env.storage().persistent().set(&DataKey::History, &list);
    env.storage().persistent().extend_ttl(
        &DataKey::History,
        HISTORY_LIFETIME_THRESHOLD,
        HISTORY_BUMP_AMOUNT,
    );
}

pub fn get_history(env: &Env) -> Vec<UpgradeRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::History)
        .unwrap_or(Vec::new(env))
}
