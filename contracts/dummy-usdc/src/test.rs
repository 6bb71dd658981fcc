extern crate std;

use soroban_sdk::{testutils::{Address as _, Events as _, Ledger as _}, map, vec, Address, Env, IntoVal, Map, String, Symbol, Val, Vec};
use crate::{DummyUsdc, DummyUsdcClient, DummyUsdcError, DECIMALS};

const INITIAL_SUPPLY: i128 = 1_000_000_000_000;

fn create_client<'a>(e: &Env, owner: &Address) -> DummyUsdcClient<'a> {
    let address = e.register(DummyUsdc, (owner, &INITIAL_SUPPLY));
    DummyUsdcClient::new(e, &address)
}

#[test]
fn test_metadata() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    let client = create_client(&e, &owner);

    assert_eq!(client.name(), String::from_str(&e, "Dummy USDC"));
    assert_eq!(client.symbol(), String::from_str(&e, "USDC"));
    assert_eq!(client.decimals(), DECIMALS);
    assert_eq!(client.owner(), owner);
}

#[test]
fn test_initial_supply_goes_to_owner() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    let other = Address::generate(&e);
    let client = create_client(&e, &owner);

    assert_eq!(client.balance(&owner), INITIAL_SUPPLY);
    assert_eq!(client.balance(&other), 0);
}

#[test]
fn test_mint() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    let user = Address::generate(&e);
    let client = create_client(&e, &owner);

    client.mint(&user, &150_000_000);

    let data: Map<Symbol, i128> = map![&e, (Symbol::new(&e, "amount"), 150_000_000)];
    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &e,
        (
            client.address.clone(),
            (Symbol::new(&e, "mint"), user.clone()).into_val(&e),
            data.into_val(&e),
        ),
    ];
    assert_eq!(e.events().all(), expected);
    assert_eq!(client.balance(&user), 150_000_000);
}

#[test]
#[should_panic]
fn test_mint_requires_owner_auth() {
    let e = Env::default();

    let owner = Address::generate(&e);
    let user = Address::generate(&e);
    let address = e.register(DummyUsdc, (&owner, &INITIAL_SUPPLY));
    let client = DummyUsdcClient::new(&e, &address);

    client.mint(&user, &1);
}

#[test]
fn test_transfer() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    let user = Address::generate(&e);
    let client = create_client(&e, &owner);

    client.transfer(&owner, &user, &40);

    assert_eq!(client.balance(&owner), INITIAL_SUPPLY - 40);
    assert_eq!(client.balance(&user), 40);

    let res = client.try_transfer(&user, &owner, &41);
    assert_eq!(res, Err(Ok(DummyUsdcError::InsufficientBalance.into())));
    assert_eq!(client.balance(&user), 40);
}

#[test]
fn test_negative_amounts_rejected() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    let user = Address::generate(&e);
    let client = create_client(&e, &owner);

    assert_eq!(client.try_transfer(&owner, &user, &-1), Err(Ok(DummyUsdcError::NegativeAmount.into())));
    assert_eq!(client.try_mint(&user, &-1), Err(Ok(DummyUsdcError::NegativeAmount.into())));
    assert_eq!(
        client.try_approve(&owner, &user, &-1, &100),
        Err(Ok(DummyUsdcError::NegativeAmount.into()))
    );
}

#[test]
fn test_transfer_from_consumes_allowance() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    let spender = Address::generate(&e);
    let receiver = Address::generate(&e);
    let client = create_client(&e, &owner);

    let expiration_ledger = e.ledger().sequence() + 1_000;
    client.approve(&owner, &spender, &500, &expiration_ledger);
    assert_eq!(client.allowance(&owner, &spender), 500);

    client.transfer_from(&spender, &owner, &receiver, &200);

    assert_eq!(client.allowance(&owner, &spender), 300);
    assert_eq!(client.balance(&receiver), 200);
    assert_eq!(client.balance(&owner), INITIAL_SUPPLY - 200);

    let res = client.try_transfer_from(&spender, &owner, &receiver, &301);
    assert_eq!(res, Err(Ok(DummyUsdcError::InsufficientAllowance.into())));
    assert_eq!(client.allowance(&owner, &spender), 300);
}

#[test]
fn test_transfer_from_checks_balance() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    let user = Address::generate(&e);
    let spender = Address::generate(&e);
    let client = create_client(&e, &owner);

    client.mint(&user, &10);
    client.approve(&user, &spender, &1_000, &(e.ledger().sequence() + 1_000));

    let res = client.try_transfer_from(&spender, &user, &spender, &11);
    assert_eq!(res, Err(Ok(DummyUsdcError::InsufficientBalance.into())));
    assert_eq!(client.balance(&user), 10);
    assert_eq!(client.allowance(&user, &spender), 1_000);
}

#[test]
fn test_approve_replaces_previous_allowance() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    let spender = Address::generate(&e);
    let client = create_client(&e, &owner);

    let expiration_ledger = e.ledger().sequence() + 1_000;
    client.approve(&owner, &spender, &500, &expiration_ledger);
    client.approve(&owner, &spender, &15, &expiration_ledger);

    let data: Map<Symbol, Val> = map![
        &e,
        (Symbol::new(&e, "amount"), 15_i128.into_val(&e)),
        (Symbol::new(&e, "expiration_ledger"), expiration_ledger.into_val(&e)),
    ];
    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &e,
        (
            client.address.clone(),
            (Symbol::new(&e, "approve"), owner.clone(), spender.clone()).into_val(&e),
            data.into_val(&e),
        ),
    ];
    assert_eq!(e.events().all(), expected);
    assert_eq!(client.allowance(&owner, &spender), 15);
}

#[test]
fn test_approve_with_past_expiration() {
    let e = Env::default();
    e.mock_all_auths();
    e.ledger().with_mut(|li| li.sequence_number = 100);

    let owner = Address::generate(&e);
    let spender = Address::generate(&e);
    let client = create_client(&e, &owner);

    let res = client.try_approve(&owner, &spender, &1, &99);
    assert_eq!(res, Err(Ok(DummyUsdcError::InvalidExpirationLedger.into())));

    // Revoking with a stale ledger is fine.
    client.approve(&owner, &spender, &0, &99);
    assert_eq!(client.allowance(&owner, &spender), 0);
}

#[test]
fn test_burn() {
    let e = Env::default();
    e.mock_all_auths();

    let owner = Address::generate(&e);
    let spender = Address::generate(&e);
    let client = create_client(&e, &owner);

    client.burn(&owner, &1_000);
    assert_eq!(client.balance(&owner), INITIAL_SUPPLY - 1_000);

    client.approve(&owner, &spender, &500, &(e.ledger().sequence() + 1_000));
    client.burn_from(&spender, &owner, &500);

    assert_eq!(client.balance(&owner), INITIAL_SUPPLY - 1_500);
    assert_eq!(client.allowance(&owner, &spender), 0);
}
