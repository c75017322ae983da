use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for factory contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Config,
    AuctionCounter,
    ParticipantCounter,
    Participant(Address),
}

/// Code the factory instantiates
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FactoryConfig {
    pub auction_wasm_hash: BytesN<32>,
    pub participant_wasm_hash: BytesN<32>,
}
