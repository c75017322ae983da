use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Bid,
    Reward,
    EndTime,
    Destroyed,
    Grant(Address),
}
