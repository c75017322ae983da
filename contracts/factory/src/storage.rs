use auction_common::{PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};
use soroban_sdk::{Address, Env};
use crate::types::{FactoryConfig, StorageKey};

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Admin ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
    extend_instance_ttl(env);
}

// ========== Config ==========

pub fn get_config(env: &Env) -> Option<FactoryConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &FactoryConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
    extend_instance_ttl(env);
}

// ========== Counters ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::AuctionCounter).unwrap_or(0)
}

pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage().instance().set(&StorageKey::AuctionCounter, &counter);
    extend_instance_ttl(env);
    counter
}

pub fn get_participant_counter(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::ParticipantCounter).unwrap_or(0)
}

pub fn increment_participant_counter(env: &Env) -> u64 {
    let counter = get_participant_counter(env) + 1;
    env.storage().instance().set(&StorageKey::ParticipantCounter, &counter);
    extend_instance_ttl(env);
    counter
}

// ========== Deployed participants ==========

pub fn is_participant(env: &Env, participant: &Address) -> bool {
    let key = StorageKey::Participant(participant.clone());
    let known = env.storage().persistent().has(&key);
    if known {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    known
}

pub fn record_participant(env: &Env, participant: &Address) {
    let key = StorageKey::Participant(participant.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
