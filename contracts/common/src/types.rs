use soroban_sdk::{contracttype, Address};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const PERSISTENT_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Denominator for ratios expressed in basis points.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// A single non-fungible asset: the asset contract and the token id inside it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub contract: Address,
    pub token_id: u64,
}

/// Fungible balance escrowed by a participant account, in one currency.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidVault {
    pub currency: Address,
    pub amount: i128,
}

impl BidVault {
    pub fn new(currency: Address, amount: i128) -> Self {
        BidVault { currency, amount }
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }

    pub fn accepts(&self, currency: &Address) -> bool {
        self.currency == *currency
    }
}

/// What a resolved capability exposes to an engine: the owner and the live
/// bid balance of a participant account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountView {
    pub owner: Address,
    pub bid: Option<BidVault>,
}

impl AccountView {
    /// Live balance in `currency`, or `None` when no bid in that currency is held.
    pub fn balance_in(&self, currency: &Address) -> Option<i128> {
        match &self.bid {
            Some(vault) if vault.accepts(currency) => Some(vault.amount),
            _ => None,
        }
    }
}

/// Parameters fixed when an auction engine is created.
///
/// `enforce_pause` selects whether `create_bid` honours the paused flag. With
/// `false` the flag is stored and toggled but bids are still admitted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionParams {
    pub time_buffer: u64,
    pub reserve_price: i128,
    pub min_increment_bps: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub enforce_pause: bool,
}
