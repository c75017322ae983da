use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const TOPIC_MINTED: Symbol = symbol_short!("MINTED");
pub const TOPIC_TRANSFERRED: Symbol = symbol_short!("XFER");
pub const TOPIC_BURNED: Symbol = symbol_short!("BURNED");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetMintedEvent {
    pub token_id: u64,
    pub to: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetTransferredEvent {
    pub token_id: u64,
    pub from: Address,
    pub to: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetBurnedEvent {
    pub token_id: u64,
    pub from: Address,
}

#[allow(deprecated)]
pub fn emit_minted(env: &Env, token_id: u64, to: Address) {
    let event = AssetMintedEvent { token_id, to: to.clone() };
    env.events().publish((TOPIC_MINTED, token_id, to), event);
}

#[allow(deprecated)]
pub fn emit_transferred(env: &Env, token_id: u64, from: Address, to: Address) {
    let event = AssetTransferredEvent {
        token_id,
        from: from.clone(),
        to: to.clone(),
    };
    env.events().publish((TOPIC_TRANSFERRED, token_id, from, to), event);
}

#[allow(deprecated)]
pub fn emit_burned(env: &Env, token_id: u64, from: Address) {
    let event = AssetBurnedEvent { token_id, from: from.clone() };
    env.events().publish((TOPIC_BURNED, token_id, from), event);
}
