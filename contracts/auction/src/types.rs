use auction_common::{AssetRef, BPS_DENOMINATOR};
use soroban_sdk::{contracttype, Address};

use crate::Error;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Pending = 0,
    Active = 1,
    Expired = 2,
    Settled = 3,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub owner: Address,
    /// Contract vouching for participant accounts; bids from anything it does
    /// not know are refused.
    pub registry: Address,
    /// Present until settlement, empty afterwards.
    pub escrowed_asset: Option<AssetRef>,
    pub currency: Address,
    pub winning_id: Option<Address>,
    pub winning_amount: i128,
    pub time_buffer: u64,
    pub reserve_price: i128,
    pub min_increment_bps: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub paused: bool,
    pub enforce_pause: bool,
}

impl Auction {
    pub fn status(&self, now: u64) -> AuctionStatus {
        if self.escrowed_asset.is_none() {
            AuctionStatus::Settled
        } else if now < self.start_time {
            AuctionStatus::Pending
        } else if now <= self.end_time {
            AuctionStatus::Active
        } else {
            AuctionStatus::Expired
        }
    }

    /// Amount a new bid must strictly exceed.
    pub fn increment_threshold(&self) -> i128 {
        let increment = self
            .winning_amount
            .saturating_mul(self.min_increment_bps as i128)
            / BPS_DENOMINATOR;
        self.winning_amount.saturating_add(increment)
    }

    pub fn min_next_bid(&self) -> i128 {
        self.reserve_price
            .max(self.increment_threshold().saturating_add(1))
    }

    pub fn check_bid(&self, amount: i128) -> Result<(), Error> {
        if amount < self.reserve_price {
            return Err(Error::BelowReserve);
        }
        if amount <= self.increment_threshold() {
            return Err(Error::IncrementNotMet);
        }
        Ok(())
    }

    /// Anti-snipe rule: a bid inside the last `time_buffer` seconds pushes the
    /// deadline to `now + time_buffer`. Returns whether it moved.
    pub fn extend_for_bid(&mut self, now: u64) -> bool {
        if now > self.end_time.saturating_sub(self.time_buffer) {
            self.end_time = now.saturating_add(self.time_buffer);
            return true;
        }
        false
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Auction,
    BidLedger,
}
