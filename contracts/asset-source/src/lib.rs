#![no_std]

//! Minimal non-fungible asset contract: mints uniquely owned assets on demand
//! and moves or burns them on the owner's authority.

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;

use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct AssetSource;

#[contractimpl]
impl AssetSource {
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        Ok(())
    }

    /// Mint a fresh asset to `to`. Ids come from the running supply counter.
    pub fn mint_asset(env: Env, to: Address) -> Result<u64, Error> {
        let admin = storage::get_admin(&env).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        let token_id = storage::increment_supply(&env);
        storage::set_owner(&env, token_id, &to);

        events::emit_minted(&env, token_id, to);
        Ok(token_id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();
        Self::require_owner(&env, &from, token_id)?;

        storage::set_owner(&env, token_id, &to);

        events::emit_transferred(&env, token_id, from, to);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();
        Self::require_owner(&env, &from, token_id)?;

        storage::remove_owner(&env, token_id);

        events::emit_burned(&env, token_id, from);
        Ok(())
    }

    pub fn owner_of(env: Env, token_id: u64) -> Option<Address> {
        storage::get_owner(&env, token_id)
    }

    pub fn exists(env: Env, token_id: u64) -> bool {
        storage::get_owner(&env, token_id).is_some()
    }

    /// Number of assets ever minted; burning does not decrease it.
    pub fn total_supply(env: Env) -> u64 {
        storage::get_supply(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    fn require_owner(env: &Env, from: &Address, token_id: u64) -> Result<(), Error> {
        let owner = storage::get_owner(env, token_id).ok_or(Error::AssetNotFound)?;
        if owner != *from {
            return Err(Error::NotAssetOwner);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test;
