#![no_std]

use auction_common::{AssetRef, AuctionInitClient, AuctionParams, ParticipantInitClient};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

mod errors;
mod events;
mod storage;
mod types;

use errors::Error;
use types::FactoryConfig;

#[contract]
pub struct AuctionFactory;

#[contractimpl]
impl AuctionFactory {
    // ========== INITIALIZATION ==========

    /// Initialize the factory with the code it deploys
    pub fn initialize(
        env: Env,
        admin: Address,
        auction_wasm_hash: BytesN<32>,
        participant_wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_config(
            &env,
            &FactoryConfig {
                auction_wasm_hash,
                participant_wasm_hash,
            },
        );

        events::emit_factory_initialized(&env, admin);

        Ok(())
    }

    /// Point the factory at new engine/participant code (admin only).
    /// Instances already deployed keep their code.
    pub fn set_wasm_hashes(
        env: Env,
        admin: Address,
        auction_wasm_hash: BytesN<32>,
        participant_wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        storage::set_config(
            &env,
            &FactoryConfig {
                auction_wasm_hash,
                participant_wasm_hash,
            },
        );

        events::emit_config_updated(&env, admin);

        Ok(())
    }

    // ========== DEPLOYMENT ==========

    /// Deploy a new auction engine holding `asset`. Parameters are passed
    /// through unchecked; the engine admits only participants this factory
    /// deployed.
    pub fn create_auction(
        env: Env,
        owner: Address,
        salt: BytesN<32>,
        asset: AssetRef,
        currency: Address,
        params: AuctionParams,
    ) -> Result<Address, Error> {
        let config = Self::require_config(&env)?;
        owner.require_auth();

        let auction = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(config.auction_wasm_hash, ());
        AuctionInitClient::new(&env, &auction).create_auction(
            &owner,
            &env.current_contract_address(),
            &asset,
            &currency,
            &params,
        );

        let deployment_id = storage::increment_auction_counter(&env);
        events::emit_auction_deployed(&env, auction.clone(), owner, deployment_id);

        Ok(auction)
    }

    /// Deploy a participant account for `owner`.
    pub fn create_auction_participant(
        env: Env,
        owner: Address,
        salt: BytesN<32>,
    ) -> Result<Address, Error> {
        let config = Self::require_config(&env)?;
        owner.require_auth();

        let participant = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(config.participant_wasm_hash, ());
        ParticipantInitClient::new(&env, &participant).initialize(&owner);
        storage::record_participant(&env, &participant);

        let deployment_id = storage::increment_participant_counter(&env);
        events::emit_participant_deployed(&env, participant.clone(), owner, deployment_id);

        Ok(participant)
    }

    // ========== VIEWS ==========

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    pub fn get_config(env: Env) -> Result<FactoryConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    /// Whether `participant` is an account this factory deployed. Engines
    /// consult this before admitting a bid.
    pub fn is_participant(env: Env, participant: Address) -> bool {
        storage::is_participant(&env, &participant)
    }

    pub fn get_auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    pub fn get_participant_count(env: Env) -> u64 {
        storage::get_participant_counter(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_config(env: &Env) -> Result<FactoryConfig, Error> {
        storage::get_config(env).ok_or(Error::NotInitialized)
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        admin.require_auth();
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
