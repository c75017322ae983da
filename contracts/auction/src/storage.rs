use auction_common::{PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};
use soroban_sdk::{Address, Env, Vec};

use crate::types::{Auction, DataKey};

pub fn has_auction(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Auction)
}

pub fn get_auction(env: &Env) -> Option<Auction> {
    env.storage().instance().get(&DataKey::Auction)
}

pub fn save_auction(env: &Env, auction: &Auction) {
    env.storage().instance().set(&DataKey::Auction, auction);
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Every participant that ever had a bid accepted, in first-bid order.
pub fn get_bid_ledger(env: &Env) -> Vec<Address> {
    let key = DataKey::BidLedger;
    let ledger = env.storage().persistent().get::<_, Vec<Address>>(&key);
    match ledger {
        Some(ledger) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
            ledger
        }
        None => Vec::new(env),
    }
}

/// Add `participant` to the ledger unless it is already recorded.
pub fn record_bidder(env: &Env, participant: &Address) {
    let key = DataKey::BidLedger;
    let mut ledger = get_bid_ledger(env);
    if ledger.contains(participant) {
        return;
    }
    ledger.push_back(participant.clone());
    env.storage().persistent().set(&key, &ledger);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
