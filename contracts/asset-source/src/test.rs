#![cfg(test)]

use auction_common::{DAY_IN_LEDGERS, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};
use soroban_sdk::{
    testutils::{storage::Instance as _, Address as _, Ledger},
    Address, Env,
};

use crate::{AssetSource, AssetSourceClient, Error};

fn setup_test() -> (Env, Address, AssetSourceClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AssetSource, ());
    let client = AssetSourceClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, admin, client)
}

#[test]
fn test_double_initialization() {
    let (_env, admin, client) = setup_test();
    assert_eq!(client.try_initialize(&admin), Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let (env, _admin, client) = setup_test();
    let alice = Address::generate(&env);

    assert_eq!(client.mint_asset(&alice), 1);
    assert_eq!(client.mint_asset(&alice), 2);
    assert_eq!(client.total_supply(), 2);
    assert_eq!(client.owner_of(&1), Some(alice.clone()));
    assert_eq!(client.owner_of(&2), Some(alice));
}

#[test]
fn test_mint_requires_initialization() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(AssetSource, ());
    let client = AssetSourceClient::new(&env, &contract_id);

    let alice = Address::generate(&env);
    assert_eq!(client.try_mint_asset(&alice), Err(Ok(Error::NotInitialized)));
}

#[test]
fn test_transfer_moves_ownership() {
    let (env, _admin, client) = setup_test();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let id = client.mint_asset(&alice);
    client.transfer(&alice, &bob, &id);

    assert_eq!(client.owner_of(&id), Some(bob));
}

#[test]
fn test_transfer_by_non_owner_fails() {
    let (env, _admin, client) = setup_test();
    let alice = Address::generate(&env);
    let mallory = Address::generate(&env);

    let id = client.mint_asset(&alice);
    let result = client.try_transfer(&mallory, &mallory, &id);

    assert_eq!(result, Err(Ok(Error::NotAssetOwner)));
    assert_eq!(client.owner_of(&id), Some(alice));
}

#[test]
fn test_burn_removes_asset_but_keeps_supply() {
    let (env, _admin, client) = setup_test();
    let alice = Address::generate(&env);

    let id = client.mint_asset(&alice);
    client.burn(&alice, &id);

    assert!(!client.exists(&id));
    assert_eq!(client.owner_of(&id), None);
    assert_eq!(client.total_supply(), 1);
    assert_eq!(client.try_burn(&alice, &id), Err(Ok(Error::AssetNotFound)));
}

#[test]
fn test_minting_keeps_instance_alive() {
    let (env, _admin, client) = setup_test();
    let instance_ttl = || env.as_contract(&client.address, || env.storage().instance().get_ttl());
    assert_eq!(instance_ttl(), PERSISTENT_TTL_AMOUNT);

    env.ledger()
        .with_mut(|li| li.sequence_number += DAY_IN_LEDGERS + 1);
    assert!(instance_ttl() < PERSISTENT_TTL_THRESHOLD);

    client.mint_asset(&Address::generate(&env));
    assert_eq!(instance_ttl(), PERSISTENT_TTL_AMOUNT);
}
