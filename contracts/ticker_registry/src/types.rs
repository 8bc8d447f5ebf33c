use soroban_sdk::{contracttype, Address, String};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TickerDetails {
    pub owner: Address,
    pub registration_date: u64,
    pub expiry_date: u64,
    pub token_name: String,
    /// True once a security token has been generated for the ticker.
    pub status: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SecurityTokenData {
    pub ticker: String,
    pub owner: Address,
    pub token_details: String,
    pub deployed_at: u64,
}
