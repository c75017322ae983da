#![no_std]

//! Values and client interfaces shared by the auction engine, participant
//! accounts, the factory and asset contracts.

mod interfaces;
mod types;

pub use interfaces::{
    AssetClient, AssetInterface, AuctionInitClient, AuctionInitInterface, ParticipantClient,
    ParticipantInitClient, ParticipantInitInterface, ParticipantInterface, RegistryClient,
    RegistryInterface,
};
pub use types::{
    AccountView, AssetRef, AuctionParams, BidVault, BPS_DENOMINATOR, DAY_IN_LEDGERS,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

#[cfg(test)]
mod test;
