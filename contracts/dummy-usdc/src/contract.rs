//! Mintable SEP-41 token

use soroban_sdk::{contractimpl, contracttype, log, panic_with_error, Address, Env, String};
use crate::{errors::DummyUsdcError, events, DummyUsdc, DummyUsdcArgs, DummyUsdcClient, DummyUsdcToken, DECIMALS, NAME, SYMBOL};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Balance(Address),
    Allowance(AllowanceKey),
}

fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, DummyUsdcError::NegativeAmount);
    }
}

fn read_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(e, DummyUsdcError::NotInitialized))
}

fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn read_balance(e: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match e.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

fn write_balance(e: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

fn receive_balance(e: &Env, id: &Address, amount: i128) {
    let balance = read_balance(e, id)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(e, DummyUsdcError::MathOverflow));
    write_balance(e, id, balance);
}

fn spend_balance(e: &Env, id: &Address, amount: i128) {
    let balance = read_balance(e, id);
    if balance < amount {
        panic_with_error!(e, DummyUsdcError::InsufficientBalance);
    }
    write_balance(e, id, balance - amount);
}

fn read_allowance(e: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey { from: from.clone(), spender: spender.clone() });
    match e.storage().temporary().get::<DataKey, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= e.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue { amount: 0, expiration_ledger: allowance.expiration_ledger },
        None => AllowanceValue { amount: 0, expiration_ledger: 0 },
    }
}

fn write_allowance(e: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    let sequence = e.ledger().sequence();
    if amount > 0 && expiration_ledger < sequence {
        panic_with_error!(e, DummyUsdcError::InvalidExpirationLedger);
    }

    let key = DataKey::Allowance(AllowanceKey { from: from.clone(), spender: spender.clone() });
    e.storage()
        .temporary()
        .set(&key, &AllowanceValue { amount, expiration_ledger });

    if amount > 0 {
        let live_for = expiration_ledger - sequence;
        e.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

fn spend_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = read_allowance(e, from, spender);
    if allowance.amount < amount {
        panic_with_error!(e, DummyUsdcError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(e, from, spender, allowance.amount - amount, allowance.expiration_ledger);
    }
}


#[contractimpl]
impl DummyUsdcToken for DummyUsdc {

    fn __constructor(e: &Env, owner: Address, initial_supply: i128) {
        check_nonnegative_amount(e, initial_supply);

        e.storage().instance().set(&DataKey::Owner, &owner);
        extend_instance_ttl(e);

        receive_balance(e, &owner, initial_supply);
        events::Mint { to: owner, amount: initial_supply }.publish(e);
    }

    fn mint(e: &Env, to: Address, amount: i128) {
        check_nonnegative_amount(e, amount);
        read_owner(e).require_auth();
        extend_instance_ttl(e);

        receive_balance(e, &to, amount);

        events::Mint { to: to.clone(), amount }.publish(e);
        log!(e, "minted", to, amount);
    }

    fn allowance(e: &Env, from: Address, spender: Address) -> i128 {
        read_allowance(e, &from, &spender).amount
    }

    fn approve(e: &Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(e, amount);
        extend_instance_ttl(e);

        write_allowance(e, &from, &spender, amount, expiration_ledger);

        events::Approve { from, spender, amount, expiration_ledger }.publish(e);
    }

    fn balance(e: &Env, id: Address) -> i128 {
        read_balance(e, &id)
    }

    fn transfer(e: &Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(e, amount);
        extend_instance_ttl(e);

        spend_balance(e, &from, amount);
        receive_balance(e, &to, amount);

        events::Transfer { from, to, amount }.publish(e);
    }

    fn transfer_from(e: &Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(e, amount);
        extend_instance_ttl(e);

        spend_allowance(e, &from, &spender, amount);
        spend_balance(e, &from, amount);
        receive_balance(e, &to, amount);

        events::Transfer { from, to, amount }.publish(e);
    }

    fn burn(e: &Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(e, amount);
        extend_instance_ttl(e);

        spend_balance(e, &from, amount);

        events::Burn { from, amount }.publish(e);
    }

    fn burn_from(e: &Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(e, amount);
        extend_instance_ttl(e);

        spend_allowance(e, &from, &spender, amount);
        spend_balance(e, &from, amount);

        events::Burn { from, amount }.publish(e);
    }

    fn decimals(_e: &Env) -> u32 {
        DECIMALS
    }

    fn name(e: &Env) -> String {
        String::from_str(e, NAME)
    }

    fn symbol(e: &Env) -> String {
        String::from_str(e, SYMBOL)
    }

    fn owner(e: &Env) -> Address {
        read_owner(e)
    }

}
