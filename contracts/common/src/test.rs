use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::{AccountView, BidVault};

#[test]
fn test_vault_accepts_only_its_currency() {
    let env = Env::default();
    let usdc = Address::generate(&env);
    let xlm = Address::generate(&env);

    let vault = BidVault::new(usdc.clone(), 100);
    assert!(vault.accepts(&usdc));
    assert!(!vault.accepts(&xlm));
    assert!(!vault.is_empty());
    assert!(BidVault::new(usdc, 0).is_empty());
}

#[test]
fn test_balance_in_currency() {
    let env = Env::default();
    let usdc = Address::generate(&env);
    let xlm = Address::generate(&env);
    let owner = Address::generate(&env);

    let view = AccountView {
        owner: owner.clone(),
        bid: Some(BidVault::new(usdc.clone(), 75)),
    };
    assert_eq!(view.balance_in(&usdc), Some(75));
    assert_eq!(view.balance_in(&xlm), None);

    let empty = AccountView { owner, bid: None };
    assert_eq!(empty.balance_in(&usdc), None);
}
