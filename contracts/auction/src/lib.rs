#![no_std]

mod admin;
mod events;
mod storage;
mod types;

use auction_common::{
    AccountView, AssetClient, AssetRef, AuctionParams, ParticipantClient, RegistryClient,
};
use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, Vec};
pub use types::{Auction, AuctionStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AuctionNotActive = 3,
    AuctionNotExpired = 4,
    AlreadySettled = 5,
    CapabilityUnresolvable = 6,
    WrongCurrency = 7,
    NoBidHeld = 8,
    BelowReserve = 9,
    IncrementNotMet = 10,
    AuctionPaused = 11,
    PrizeDeliveryFailed = 12,
    ProceedsUnavailable = 13,
    UnknownParticipant = 14,
}

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    /// Set up this engine instance: take custody of `asset` from `owner` and
    /// fix the auction parameters. Only accounts known to `registry` may bid.
    pub fn create_auction(
        env: Env,
        owner: Address,
        registry: Address,
        asset: AssetRef,
        currency: Address,
        params: AuctionParams,
    ) -> Result<(), Error> {
        if storage::has_auction(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        AssetClient::new(&env, &asset.contract).transfer(
            &owner,
            &env.current_contract_address(),
            &asset.token_id,
        );

        let auction = Auction {
            owner: owner.clone(),
            registry,
            escrowed_asset: Some(asset.clone()),
            currency: currency.clone(),
            winning_id: None,
            winning_amount: 0,
            time_buffer: params.time_buffer,
            reserve_price: params.reserve_price,
            min_increment_bps: params.min_increment_bps,
            start_time: params.start_time,
            end_time: params.end_time,
            paused: false,
            enforce_pause: params.enforce_pause,
        };
        storage::save_auction(&env, &auction);

        events::emit_auction_created(
            &env,
            owner,
            asset,
            currency,
            params.reserve_price,
            params.start_time,
            params.end_time,
        );
        Ok(())
    }

    /// Bid the whole live balance of the participant behind `participant`.
    ///
    /// The participant must have granted this engine a capability; the bid is
    /// read through it and never moved until settlement.
    pub fn create_bid(env: Env, participant: Address) -> Result<(), Error> {
        let mut auction = load_auction(&env)?;
        let now = env.ledger().timestamp();

        if auction.status(now) != AuctionStatus::Active {
            return Err(Error::AuctionNotActive);
        }
        if auction.enforce_pause && auction.paused {
            return Err(Error::AuctionPaused);
        }

        if !RegistryClient::new(&env, &auction.registry).is_participant(&participant) {
            return Err(Error::UnknownParticipant);
        }

        let engine = env.current_contract_address();
        let view = resolve_capability(&env, &participant, &engine)
            .ok_or(Error::CapabilityUnresolvable)?;
        view.owner.require_auth();

        let vault = view.bid.ok_or(Error::NoBidHeld)?;
        if !vault.accepts(&auction.currency) {
            return Err(Error::WrongCurrency);
        }
        auction.check_bid(vault.amount)?;

        let old_end_time = auction.end_time;
        let extended = auction.extend_for_bid(now);

        let client = ParticipantClient::new(&env, &participant);
        if ok_value(client.try_set_end_time(&engine, &auction.end_time)).is_none() {
            return Err(Error::CapabilityUnresolvable);
        }

        storage::record_bidder(&env, &participant);
        auction.winning_id = Some(participant.clone());
        auction.winning_amount = vault.amount;
        storage::save_auction(&env, &auction);

        if extended {
            events::emit_auction_extended(&env, old_end_time, auction.end_time);
        }
        events::emit_bid_placed(&env, participant, vault.amount, auction.end_time);
        Ok(())
    }

    /// Close the auction. Callable by anyone once the deadline is reached.
    ///
    /// Returns the proceeds forwarded to the owner, or `None` when no bidder
    /// was reachable and the prize was burned.
    pub fn settle_auction(env: Env) -> Result<Option<i128>, Error> {
        let mut auction = load_auction(&env)?;
        if env.ledger().timestamp() < auction.end_time {
            return Err(Error::AuctionNotExpired);
        }
        let prize = auction
            .escrowed_asset
            .take()
            .ok_or(Error::AlreadySettled)?;
        storage::save_auction(&env, &auction);

        let engine = env.current_contract_address();
        let recorded = auction
            .winning_id
            .clone()
            .filter(|id| resolve_capability(&env, id, &engine).is_some());
        let fallback = recorded.is_none();
        let recipient = match recorded {
            Some(id) => Some(id),
            None => scan_bid_ledger(&env, &auction, &engine),
        };

        let Some(recipient) = recipient else {
            AssetClient::new(&env, &prize.contract).burn(&engine, &prize.token_id);
            events::emit_prize_destroyed(&env, prize);
            events::emit_auction_settled(&env, None, 0, fallback);
            return Ok(None);
        };

        deliver_prize(&env, &engine, &recipient, &prize)?;
        let proceeds = collect_proceeds(&env, &engine, &recipient, &auction)?;

        events::emit_auction_settled(&env, Some(recipient), proceeds, fallback);
        Ok(Some(proceeds))
    }

    /// Owner-only. Whether the flag blocks bids depends on `enforce_pause`.
    pub fn toggle_pause(env: Env) -> Result<bool, Error> {
        let mut auction = load_auction(&env)?;
        let paused = admin::toggle_pause(&env, &mut auction);
        storage::save_auction(&env, &auction);
        Ok(paused)
    }

    pub fn get_auction(env: Env) -> Result<Auction, Error> {
        load_auction(&env)
    }

    pub fn get_status(env: Env) -> Result<AuctionStatus, Error> {
        let auction = load_auction(&env)?;
        Ok(auction.status(env.ledger().timestamp()))
    }

    pub fn get_bid_ledger(env: Env) -> Vec<Address> {
        storage::get_bid_ledger(&env)
    }

    pub fn get_winning_bid(env: Env) -> Result<(Option<Address>, i128), Error> {
        let auction = load_auction(&env)?;
        Ok((auction.winning_id, auction.winning_amount))
    }

    pub fn min_next_bid(env: Env) -> Result<i128, Error> {
        Ok(load_auction(&env)?.min_next_bid())
    }
}

fn load_auction(env: &Env) -> Result<Auction, Error> {
    storage::get_auction(env).ok_or(Error::NotInitialized)
}

/// Unwrap a `try_*` client call, treating any failure of the callee as absent.
fn ok_value<T, C, E>(result: Result<Result<T, C>, E>) -> Option<T> {
    match result {
        Ok(Ok(value)) => Some(value),
        _ => None,
    }
}

fn resolve_capability(env: &Env, participant: &Address, engine: &Address) -> Option<AccountView> {
    ok_value(ParticipantClient::new(env, participant).try_resolve(engine))
}

/// Fallback when the recorded winner is unreachable: the reachable bidder
/// holding the largest live balance in the auction currency. Ties keep the
/// earliest bidder. O(number of distinct bidders).
fn scan_bid_ledger(env: &Env, auction: &Auction, engine: &Address) -> Option<Address> {
    let mut best: Option<(Address, i128)> = None;
    for participant in storage::get_bid_ledger(env).iter() {
        let Some(view) = resolve_capability(env, &participant, engine) else {
            continue;
        };
        let Some(balance) = view.balance_in(&auction.currency) else {
            continue;
        };
        if best.as_ref().map_or(true, |(_, top)| balance > *top) {
            best = Some((participant, balance));
        }
    }
    best.map(|(participant, _)| participant)
}

fn deliver_prize(
    env: &Env,
    engine: &Address,
    recipient: &Address,
    prize: &AssetRef,
) -> Result<(), Error> {
    AssetClient::new(env, &prize.contract).transfer(engine, recipient, &prize.token_id);
    let client = ParticipantClient::new(env, recipient);
    ok_value(client.try_deposit_reward(engine, prize)).ok_or(Error::PrizeDeliveryFailed)
}

/// Claim the recorded winning amount from `recipient` and forward it to the
/// auction owner. The amount is always `winning_amount`, even when the
/// recipient was picked by the fallback scan.
///
/// Only what actually arrived in the engine's balance counts as paid.
fn collect_proceeds(
    env: &Env,
    engine: &Address,
    recipient: &Address,
    auction: &Auction,
) -> Result<i128, Error> {
    let token = token::TokenClient::new(env, &auction.currency);
    let before = token.balance(engine);

    let client = ParticipantClient::new(env, recipient);
    ok_value(client.try_claim_bid(
        engine,
        &auction.currency,
        &auction.winning_amount,
    ))
    .ok_or(Error::ProceedsUnavailable)?;

    let received = token.balance(engine).saturating_sub(before);
    if received < auction.winning_amount {
        return Err(Error::ProceedsUnavailable);
    }

    token.transfer(engine, &auction.owner, &received);
    Ok(received)
}

#[cfg(test)]
mod test;
