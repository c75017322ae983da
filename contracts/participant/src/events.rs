use auction_common::AssetRef;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const TOPIC_BID_DEPOSITED: Symbol = symbol_short!("BID_DEP");
pub const TOPIC_BID_WITHDRAWN: Symbol = symbol_short!("BID_WDR");
pub const TOPIC_BID_CLAIMED: Symbol = symbol_short!("BID_CLM");
pub const TOPIC_REWARD_DEPOSITED: Symbol = symbol_short!("RWD_DEP");
pub const TOPIC_REWARD_DISCARDED: Symbol = symbol_short!("RWD_DSC");
pub const TOPIC_REWARD_WITHDRAWN: Symbol = symbol_short!("RWD_WDR");
pub const TOPIC_CAP_GRANTED: Symbol = symbol_short!("CAP_GRT");
pub const TOPIC_CAP_REVOKED: Symbol = symbol_short!("CAP_RVK");
pub const TOPIC_DEADLINE: Symbol = symbol_short!("DEADLINE");
pub const TOPIC_DESTROYED: Symbol = symbol_short!("DESTROYED");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidDepositedEvent {
    pub owner: Address,
    pub currency: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidMovedEvent {
    pub recipient: Address,
    pub currency: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardEvent {
    pub counterparty: Address,
    pub asset: AssetRef,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeadlineSetEvent {
    pub engine: Address,
    pub end_time: u64,
}

#[allow(deprecated)]
pub fn emit_bid_deposited(env: &Env, owner: Address, currency: Address, amount: i128, balance: i128) {
    let event = BidDepositedEvent {
        owner: owner.clone(),
        currency,
        amount,
        balance,
    };
    env.events().publish((TOPIC_BID_DEPOSITED, owner), event);
}

#[allow(deprecated)]
pub fn emit_bid_withdrawn(env: &Env, recipient: Address, currency: Address, amount: i128) {
    let event = BidMovedEvent {
        recipient: recipient.clone(),
        currency,
        amount,
    };
    env.events().publish((TOPIC_BID_WITHDRAWN, recipient), event);
}

#[allow(deprecated)]
pub fn emit_bid_claimed(env: &Env, engine: Address, currency: Address, amount: i128) {
    let event = BidMovedEvent {
        recipient: engine.clone(),
        currency,
        amount,
    };
    env.events().publish((TOPIC_BID_CLAIMED, engine), event);
}

#[allow(deprecated)]
pub fn emit_reward_deposited(env: &Env, engine: Address, asset: AssetRef) {
    let event = RewardEvent {
        counterparty: engine.clone(),
        asset,
    };
    env.events().publish((TOPIC_REWARD_DEPOSITED, engine), event);
}

/// A reward still held when a new one arrived was burned.
#[allow(deprecated)]
pub fn emit_reward_discarded(env: &Env, engine: Address, asset: AssetRef) {
    let event = RewardEvent {
        counterparty: engine.clone(),
        asset,
    };
    env.events().publish((TOPIC_REWARD_DISCARDED, engine), event);
}

#[allow(deprecated)]
pub fn emit_reward_withdrawn(env: &Env, owner: Address, asset: AssetRef) {
    let event = RewardEvent {
        counterparty: owner.clone(),
        asset,
    };
    env.events().publish((TOPIC_REWARD_WITHDRAWN, owner), event);
}

#[allow(deprecated)]
pub fn emit_deadline_set(env: &Env, engine: Address, end_time: u64) {
    let event = DeadlineSetEvent {
        engine: engine.clone(),
        end_time,
    };
    env.events().publish((TOPIC_DEADLINE, engine), event);
}

#[allow(deprecated)]
pub fn emit_capability_granted(env: &Env, engine: Address) {
    env.events().publish((TOPIC_CAP_GRANTED,), engine);
}

#[allow(deprecated)]
pub fn emit_capability_revoked(env: &Env, engine: Address) {
    env.events().publish((TOPIC_CAP_REVOKED,), engine);
}

#[allow(deprecated)]
pub fn emit_destroyed(env: &Env, owner: Address) {
    env.events().publish((TOPIC_DESTROYED,), owner);
}
