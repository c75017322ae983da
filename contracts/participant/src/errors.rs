use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AccountDestroyed = 3,
    /// The calling engine holds no capability on this account
    NotGranted = 4,
    /// A won reward must be withdrawn before a new bid is deposited
    RewardNotWithdrawn = 5,
    /// The deadline of the last auction bid into has not passed yet
    WithdrawalLocked = 6,
    NoBidHeld = 7,
    InsufficientBalance = 8,
    NoRewardHeld = 9,
    /// The asset handed in as a reward is not owned by this account
    RewardNotHeld = 10,
    InvalidAmount = 11,
    SlotsNotEmpty = 12,
    WrongCurrency = 13,
}
