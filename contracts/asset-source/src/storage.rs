use auction_common::{PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};
use soroban_sdk::{Address, Env};

use crate::types::DataKey;

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

pub fn get_supply(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::Supply).unwrap_or(0)
}

pub fn increment_supply(env: &Env) -> u64 {
    let supply = get_supply(env) + 1;
    env.storage().instance().set(&DataKey::Supply, &supply);
    extend_instance_ttl(env);
    supply
}

pub fn get_owner(env: &Env, token_id: u64) -> Option<Address> {
    let key = DataKey::Owner(token_id);
    let owner = env.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    owner
}

pub fn set_owner(env: &Env, token_id: u64, owner: &Address) {
    let key = DataKey::Owner(token_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    extend_instance_ttl(env);
}

pub fn remove_owner(env: &Env, token_id: u64) {
    env.storage().persistent().remove(&DataKey::Owner(token_id));
    extend_instance_ttl(env);
}
