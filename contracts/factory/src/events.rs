use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryInitializedEvent {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionDeployedEvent {
    pub auction: Address,
    pub owner: Address,
    pub deployment_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantDeployedEvent {
    pub participant: Address,
    pub owner: Address,
    pub deployment_id: u64,
}

#[allow(deprecated)]
pub fn emit_factory_initialized(env: &Env, admin: Address) {
    let event = FactoryInitializedEvent { admin: admin.clone() };
    env.events().publish((symbol_short!("init"), admin), event);
}

#[allow(deprecated)]
pub fn emit_config_updated(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("config"),), admin);
}

#[allow(deprecated)]
pub fn emit_auction_deployed(env: &Env, auction: Address, owner: Address, deployment_id: u64) {
    let event = AuctionDeployedEvent {
        auction: auction.clone(),
        owner: owner.clone(),
        deployment_id,
    };
    env.events().publish((symbol_short!("auction"), auction, owner), event);
}

#[allow(deprecated)]
pub fn emit_participant_deployed(env: &Env, participant: Address, owner: Address, deployment_id: u64) {
    let event = ParticipantDeployedEvent {
        participant: participant.clone(),
        owner: owner.clone(),
        deployment_id,
    };
    env.events().publish((symbol_short!("bidder"), participant, owner), event);
}
