
use crate::{AuctionContract, AuctionContractClient};
use asset_source::{AssetSource, AssetSourceClient};
use auction_common::{AccountView, AssetRef, AuctionParams, BidVault};
use auction_participant::{ParticipantContract, ParticipantContractClient};
use soroban_sdk::{
    contract, contractimpl, symbol_short,
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

pub const START: u64 = 1_000;
pub const DURATION: u64 = 86_400;
pub const END: u64 = START + DURATION;
pub const TIME_BUFFER: u64 = 300;
pub const RESERVE: i128 = 50;
pub const INCREMENT_BPS: u32 = 1_000;

/// Stands in for the factory's record of the accounts it deployed.
#[contract]
pub struct TestRegistry;

#[contractimpl]
impl TestRegistry {
    pub fn admit(env: Env, participant: Address) {
        env.storage().persistent().set(&participant, &true);
    }

    pub fn is_participant(env: Env, participant: Address) -> bool {
        env.storage().persistent().has(&participant)
    }
}

/// Answers the participant calls like a real account would, but reports a
/// balance it does not hold and pays nothing when claimed.
#[contract]
pub struct ForgedParticipant;

#[contractimpl]
impl ForgedParticipant {
    pub fn set_view(env: Env, view: AccountView) {
        env.storage().instance().set(&symbol_short!("view"), &view);
    }

    pub fn resolve(env: Env, _engine: Address) -> AccountView {
        env.storage()
            .instance()
            .get(&symbol_short!("view"))
            .unwrap()
    }

    pub fn set_end_time(_env: Env, _engine: Address, _end_time: u64) {}

    pub fn deposit_reward(_env: Env, _engine: Address, _asset: AssetRef) {}

    pub fn claim_bid(_env: Env, _engine: Address, _currency: Address, amount: i128) -> i128 {
        amount
    }
}

pub struct Setup {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub registry: TestRegistryClient<'static>,
    pub owner: Address,
    pub currency: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub assets: AssetSourceClient<'static>,
    pub prize: AssetRef,
}

pub fn default_params() -> AuctionParams {
    AuctionParams {
        time_buffer: TIME_BUFFER,
        reserve_price: RESERVE,
        min_increment_bps: INCREMENT_BPS,
        start_time: START,
        end_time: END,
        enforce_pause: false,
    }
}

pub fn setup_test() -> Setup {
    setup_with(default_params())
}

pub fn setup_with(params: AuctionParams) -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let owner = Address::generate(&env);

    let token_contract = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let currency = token_contract.address();
    let token = token::TokenClient::new(&env, &currency);
    let token_admin = token::StellarAssetClient::new(&env, &currency);

    let assets_id = env.register(AssetSource, ());
    let assets = AssetSourceClient::new(&env, &assets_id);
    assets.initialize(&Address::generate(&env));
    let prize = AssetRef {
        contract: assets_id,
        token_id: assets.mint_asset(&owner),
    };

    let registry = TestRegistryClient::new(&env, &env.register(TestRegistry, ()));

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);
    client.create_auction(&owner, &registry.address, &prize, &currency, &params);

    Setup {
        env,
        client,
        registry,
        owner,
        currency,
        token,
        token_admin,
        assets,
        prize,
    }
}

/// A participant account with `deposit` escrowed and a capability granted to
/// the auction under test.
pub fn new_bidder(s: &Setup, deposit: i128) -> ParticipantContractClient<'static> {
    let bidder = Address::generate(&s.env);
    s.token_admin.mint(&bidder, &1_000_000);

    let account_id = s.env.register(ParticipantContract, ());
    let account = ParticipantContractClient::new(&s.env, &account_id);
    account.initialize(&bidder);
    s.registry.admit(&account_id);
    account.grant_capability(&s.client.address);
    if deposit > 0 {
        account.deposit_bid(&s.currency, &deposit);
    }
    account
}

/// A forged account claiming `reported` in the auction currency, holding no
/// tokens at all.
pub fn forged_bidder(s: &Setup, reported: i128) -> ForgedParticipantClient<'static> {
    let forged = ForgedParticipantClient::new(&s.env, &s.env.register(ForgedParticipant, ()));
    forged.set_view(&AccountView {
        owner: Address::generate(&s.env),
        bid: Some(BidVault::new(s.currency.clone(), reported)),
    });
    forged
}

/// A second engine in the same environment, sharing currency, asset source
/// and registry with `s`, auctioning a freshly minted asset.
pub fn second_auction(s: &Setup, params: &AuctionParams) -> AuctionContractClient<'static> {
    let prize = AssetRef {
        contract: s.assets.address.clone(),
        token_id: s.assets.mint_asset(&s.owner),
    };
    let client = AuctionContractClient::new(&s.env, &s.env.register(AuctionContract, ()));
    client.create_auction(&s.owner, &s.registry.address, &prize, &s.currency, params);
    client
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().set_timestamp(timestamp);
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set_timestamp(env.ledger().timestamp() + seconds);
}
