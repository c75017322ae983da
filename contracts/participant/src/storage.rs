use auction_common::{AssetRef, BidVault, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};
use soroban_sdk::{Address, Env};

use crate::types::DataKey;

/// Every write to this account's instance keeps the whole instance alive;
/// engines resolving a capability depend on it.
fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Owner ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance_ttl(env);
}

pub fn is_destroyed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Destroyed)
        .unwrap_or(false)
}

pub fn set_destroyed(env: &Env) {
    env.storage().instance().set(&DataKey::Destroyed, &true);
    extend_instance_ttl(env);
}

// ========== Custody slots ==========

pub fn get_bid(env: &Env) -> Option<BidVault> {
    env.storage().instance().get(&DataKey::Bid)
}

pub fn set_bid(env: &Env, vault: &BidVault) {
    env.storage().instance().set(&DataKey::Bid, vault);
    extend_instance_ttl(env);
}

pub fn remove_bid(env: &Env) {
    env.storage().instance().remove(&DataKey::Bid);
    extend_instance_ttl(env);
}

pub fn get_reward(env: &Env) -> Option<AssetRef> {
    env.storage().instance().get(&DataKey::Reward)
}

pub fn set_reward(env: &Env, asset: &AssetRef) {
    env.storage().instance().set(&DataKey::Reward, asset);
    extend_instance_ttl(env);
}

pub fn remove_reward(env: &Env) {
    env.storage().instance().remove(&DataKey::Reward);
    extend_instance_ttl(env);
}

// ========== Withdrawal deadline ==========

pub fn get_end_time(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::EndTime)
        .unwrap_or(0)
}

pub fn set_end_time(env: &Env, end_time: u64) {
    env.storage().instance().set(&DataKey::EndTime, &end_time);
    extend_instance_ttl(env);
}

// ========== Capability grants ==========

pub fn is_granted(env: &Env, engine: &Address) -> bool {
    let key = DataKey::Grant(engine.clone());
    let granted = env.storage().persistent().has(&key);
    if granted {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
        extend_instance_ttl(env);
    }
    granted
}

pub fn set_grant(env: &Env, engine: &Address) {
    let key = DataKey::Grant(engine.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    extend_instance_ttl(env);
}

pub fn remove_grant(env: &Env, engine: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Grant(engine.clone()));
    extend_instance_ttl(env);
}
