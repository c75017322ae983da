use auction_common::AssetRef;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const TOPIC_AUCTION_CREATED: Symbol = symbol_short!("AUC_CRT");
pub const TOPIC_BID_PLACED: Symbol = symbol_short!("BID");
pub const TOPIC_AUCTION_EXTENDED: Symbol = symbol_short!("AUC_EXT");
pub const TOPIC_AUCTION_SETTLED: Symbol = symbol_short!("AUC_STL");
pub const TOPIC_PRIZE_DESTROYED: Symbol = symbol_short!("PRZ_DST");
pub const TOPIC_PAUSE_TOGGLED: Symbol = symbol_short!("PAUSE");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEvent {
    pub owner: Address,
    pub asset: AssetRef,
    pub currency: Address,
    pub reserve_price: i128,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEvent {
    pub participant: Address,
    pub amount: i128,
    pub end_time: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionExtendedEvent {
    pub old_end_time: u64,
    pub new_end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEvent {
    pub winner: Option<Address>,
    pub amount: i128,
    /// The recorded winner was unreachable and the ledger was scanned
    pub fallback: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggledEvent {
    pub owner: Address,
    pub paused: bool,
}

#[allow(deprecated)]
pub fn emit_auction_created(
    env: &Env,
    owner: Address,
    asset: AssetRef,
    currency: Address,
    reserve_price: i128,
    start_time: u64,
    end_time: u64,
) {
    let event = AuctionCreatedEvent {
        owner: owner.clone(),
        asset,
        currency,
        reserve_price,
        start_time,
        end_time,
    };
    env.events().publish((TOPIC_AUCTION_CREATED, owner), event);
}

#[allow(deprecated)]
pub fn emit_bid_placed(env: &Env, participant: Address, amount: i128, end_time: u64) {
    let event = BidPlacedEvent {
        participant: participant.clone(),
        amount,
        end_time,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((TOPIC_BID_PLACED, participant), event);
}

#[allow(deprecated)]
pub fn emit_auction_extended(env: &Env, old_end_time: u64, new_end_time: u64) {
    let event = AuctionExtendedEvent {
        old_end_time,
        new_end_time,
    };
    env.events().publish((TOPIC_AUCTION_EXTENDED,), event);
}

#[allow(deprecated)]
pub fn emit_auction_settled(env: &Env, winner: Option<Address>, amount: i128, fallback: bool) {
    let event = AuctionSettledEvent {
        winner,
        amount,
        fallback,
    };
    env.events().publish((TOPIC_AUCTION_SETTLED,), event);
}

/// No reachable bidder remained; the prize was burned.
#[allow(deprecated)]
pub fn emit_prize_destroyed(env: &Env, asset: AssetRef) {
    env.events().publish((TOPIC_PRIZE_DESTROYED,), asset);
}

#[allow(deprecated)]
pub fn emit_pause_toggled(env: &Env, owner: Address, paused: bool) {
    let event = PauseToggledEvent {
        owner: owner.clone(),
        paused,
    };
    env.events().publish((TOPIC_PAUSE_TOGGLED, owner), event);
}
