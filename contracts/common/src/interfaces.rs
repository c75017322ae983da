use soroban_sdk::{contractclient, Address, Env};

use crate::types::{AccountView, AssetRef, AuctionParams};

/// Capability surface of a participant account, as seen by an auction engine.
///
/// Every call names the engine so the account can check its grant; engines
/// call these through `try_*` so a dangling capability never traps.
#[contractclient(name = "ParticipantClient")]
pub trait ParticipantInterface {
    fn resolve(env: Env, engine: Address) -> AccountView;
    fn set_end_time(env: Env, engine: Address, end_time: u64);
    fn deposit_reward(env: Env, engine: Address, asset: AssetRef);
    fn claim_bid(env: Env, engine: Address, currency: Address, amount: i128) -> i128;
}

/// Non-fungible asset contract operations used for custody moves.
#[contractclient(name = "AssetClient")]
pub trait AssetInterface {
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
    fn burn(env: Env, from: Address, token_id: u64);
    fn owner_of(env: Env, token_id: u64) -> Option<Address>;
}

/// Initializer of a freshly deployed auction engine.
#[contractclient(name = "AuctionInitClient")]
pub trait AuctionInitInterface {
    fn create_auction(
        env: Env,
        owner: Address,
        registry: Address,
        asset: AssetRef,
        currency: Address,
        params: AuctionParams,
    );
}

/// Record of genuine participant accounts, kept by whoever deploys them.
/// Engines only admit bids from accounts this answers `true` for.
#[contractclient(name = "RegistryClient")]
pub trait RegistryInterface {
    fn is_participant(env: Env, participant: Address) -> bool;
}

/// Initializer of a freshly deployed participant account.
#[contractclient(name = "ParticipantInitClient")]
pub trait ParticipantInitInterface {
    fn initialize(env: Env, owner: Address);
}
