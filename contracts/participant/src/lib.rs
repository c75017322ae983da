#![no_std]

//! Per-bidder custody account.
//!
//! Holds at most one escrowed bid and at most one won reward. Auction engines
//! never own the account; they act on it through a capability the owner grants
//! to one engine address at a time and may revoke at any point.

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;

use auction_common::{AccountView, AssetClient, AssetRef, BidVault};
use soroban_sdk::{contract, contractimpl, token, Address, Env};

#[contract]
pub struct ParticipantContract;

#[contractimpl]
impl ParticipantContract {
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        storage::set_owner(&env, &owner);
        storage::set_end_time(&env, 0);
        Ok(())
    }

    // ========== OWNER OPERATIONS ==========

    /// Escrow `amount` of `currency` as this account's bid.
    ///
    /// Deposits in the held currency are merged. A deposit in another currency
    /// replaces the held vault; the displaced balance is sent back to the
    /// owner and returned.
    pub fn deposit_bid(
        env: Env,
        currency: Address,
        amount: i128,
    ) -> Result<Option<BidVault>, Error> {
        let owner = Self::require_owner(&env)?;

        if storage::get_reward(&env).is_some() {
            return Err(Error::RewardNotWithdrawn);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let this = env.current_contract_address();
        token::TokenClient::new(&env, &currency).transfer(&owner, &this, &amount);

        let (held, displaced) = match storage::get_bid(&env) {
            Some(mut vault) if vault.accepts(&currency) => {
                vault.amount = vault
                    .amount
                    .checked_add(amount)
                    .ok_or(Error::InvalidAmount)?;
                (vault, None)
            }
            Some(old) => {
                if !old.is_empty() {
                    token::TokenClient::new(&env, &old.currency).transfer(
                        &this,
                        &owner,
                        &old.amount,
                    );
                }
                (BidVault::new(currency, amount), Some(old))
            }
            None => (BidVault::new(currency, amount), None),
        };
        storage::set_bid(&env, &held);

        events::emit_bid_deposited(&env, owner, held.currency, amount, held.amount);
        Ok(displaced)
    }

    /// Withdraw exactly `amount` from the held bid back to the owner.
    pub fn withdraw_bid(env: Env, amount: i128) -> Result<i128, Error> {
        let owner = Self::require_owner(&env)?;

        let currency = Self::take_from_bid(&env, amount)?;
        token::TokenClient::new(&env, &currency).transfer(
            &env.current_contract_address(),
            &owner,
            &amount,
        );

        events::emit_bid_withdrawn(&env, owner, currency, amount);
        Ok(amount)
    }

    /// Move the won reward out to the owner, leaving the slot empty.
    pub fn withdraw_reward(env: Env) -> Result<AssetRef, Error> {
        let owner = Self::require_owner(&env)?;
        Self::require_deadline_passed(&env)?;

        let reward = storage::get_reward(&env).ok_or(Error::NoRewardHeld)?;
        storage::remove_reward(&env);
        AssetClient::new(&env, &reward.contract).transfer(
            &env.current_contract_address(),
            &owner,
            &reward.token_id,
        );

        events::emit_reward_withdrawn(&env, owner, reward.clone());
        Ok(reward)
    }

    pub fn grant_capability(env: Env, engine: Address) -> Result<(), Error> {
        Self::require_owner(&env)?;
        storage::set_grant(&env, &engine);
        events::emit_capability_granted(&env, engine);
        Ok(())
    }

    /// Revoke an engine's capability. Engines holding it see it as dangling.
    pub fn revoke_capability(env: Env, engine: Address) -> Result<(), Error> {
        Self::require_owner(&env)?;
        storage::remove_grant(&env, &engine);
        events::emit_capability_revoked(&env, engine);
        Ok(())
    }

    /// Permanently retire the account. Both custody slots must be empty.
    pub fn destroy(env: Env) -> Result<(), Error> {
        let owner = Self::require_owner(&env)?;

        let bid_held = storage::get_bid(&env).map_or(false, |vault| !vault.is_empty());
        if bid_held || storage::get_reward(&env).is_some() {
            return Err(Error::SlotsNotEmpty);
        }

        storage::remove_bid(&env);
        storage::set_destroyed(&env);

        events::emit_destroyed(&env, owner);
        Ok(())
    }

    // ========== ENGINE OPERATIONS ==========

    /// Resolve this account for `engine`. Fails when the account is gone or
    /// the engine's capability was never granted or has been revoked.
    pub fn resolve(env: Env, engine: Address) -> Result<AccountView, Error> {
        let owner = Self::require_live(&env)?;
        if !storage::is_granted(&env, &engine) {
            return Err(Error::NotGranted);
        }

        Ok(AccountView {
            owner,
            bid: storage::get_bid(&env),
        })
    }

    pub fn set_end_time(env: Env, engine: Address, end_time: u64) -> Result<(), Error> {
        Self::require_engine(&env, &engine)?;
        storage::set_end_time(&env, end_time);
        events::emit_deadline_set(&env, engine, end_time);
        Ok(())
    }

    /// Record a won asset that the engine has already moved to this account.
    ///
    /// An unclaimed reward still in the slot is overwritten and burned.
    pub fn deposit_reward(env: Env, engine: Address, asset: AssetRef) -> Result<(), Error> {
        Self::require_engine(&env, &engine)?;

        let this = env.current_contract_address();
        let asset_client = AssetClient::new(&env, &asset.contract);
        if asset_client.owner_of(&asset.token_id) != Some(this.clone()) {
            return Err(Error::RewardNotHeld);
        }

        if let Some(previous) = storage::get_reward(&env) {
            if previous != asset {
                AssetClient::new(&env, &previous.contract).burn(&this, &previous.token_id);
                events::emit_reward_discarded(&env, engine.clone(), previous);
            }
        }
        storage::set_reward(&env, &asset);

        events::emit_reward_deposited(&env, engine, asset);
        Ok(())
    }

    /// Engine-side withdrawal of a winning bid. Pays `amount` of `currency`
    /// to the engine; fails if the held bid is in another currency.
    pub fn claim_bid(
        env: Env,
        engine: Address,
        currency: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        Self::require_engine(&env, &engine)?;

        let held = storage::get_bid(&env).ok_or(Error::NoBidHeld)?;
        if !held.accepts(&currency) {
            return Err(Error::WrongCurrency);
        }
        Self::take_from_bid(&env, amount)?;
        token::TokenClient::new(&env, &currency).transfer(
            &env.current_contract_address(),
            &engine,
            &amount,
        );

        events::emit_bid_claimed(&env, engine, currency, amount);
        Ok(amount)
    }

    // ========== VIEWS ==========

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env).ok_or(Error::NotInitialized)
    }

    pub fn get_bid(env: Env) -> Option<BidVault> {
        storage::get_bid(&env)
    }

    pub fn get_reward(env: Env) -> Option<AssetRef> {
        storage::get_reward(&env)
    }

    pub fn get_end_time(env: Env) -> u64 {
        storage::get_end_time(&env)
    }

    pub fn is_granted(env: Env, engine: Address) -> bool {
        storage::is_granted(&env, &engine)
    }

    pub fn is_destroyed(env: Env) -> bool {
        storage::is_destroyed(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_live(env: &Env) -> Result<Address, Error> {
        let owner = storage::get_owner(env).ok_or(Error::NotInitialized)?;
        if storage::is_destroyed(env) {
            return Err(Error::AccountDestroyed);
        }
        Ok(owner)
    }

    fn require_owner(env: &Env) -> Result<Address, Error> {
        let owner = Self::require_live(env)?;
        owner.require_auth();
        Ok(owner)
    }

    fn require_engine(env: &Env, engine: &Address) -> Result<(), Error> {
        Self::require_live(env)?;
        engine.require_auth();
        if !storage::is_granted(env, engine) {
            return Err(Error::NotGranted);
        }
        Ok(())
    }

    fn require_deadline_passed(env: &Env) -> Result<(), Error> {
        if env.ledger().timestamp() < storage::get_end_time(env) {
            return Err(Error::WithdrawalLocked);
        }
        Ok(())
    }

    /// Debit `amount` from the held bid and return its currency. The caller
    /// moves the tokens.
    fn take_from_bid(env: &Env, amount: i128) -> Result<Address, Error> {
        Self::require_deadline_passed(env)?;

        let mut vault = storage::get_bid(env).ok_or(Error::NoBidHeld)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if amount > vault.amount {
            return Err(Error::InsufficientBalance);
        }
        vault.amount -= amount;
        storage::set_bid(env, &vault);

        Ok(vault.currency)
    }
}
