//! Fee-gated viniapp creation

use soroban_sdk::{contractimpl, contracttype, log, panic_with_error, token, Address, Env};
use crate::{errors::ViniappError, events, ViniApp, ViniAppArgs, ViniAppClient, ViniappContract, DEFAULT_VINIAPP_COST};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
pub enum DataKey {
    Owner,
    PaymentToken,
    ViniappCost,
}

fn read_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(e, ViniappError::NotInitialized))
}

fn read_payment_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .unwrap_or_else(|| panic_with_error!(e, ViniappError::NotInitialized))
}

fn read_cost(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::ViniappCost)
        .unwrap_or_else(|| panic_with_error!(e, ViniappError::NotInitialized))
}

fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}


#[contractimpl]
impl ViniappContract for ViniApp {

    fn __constructor(e: &Env, owner: Address, payment_token: Address) {
        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::PaymentToken, &payment_token);
        e.storage().instance().set(&DataKey::ViniappCost, &DEFAULT_VINIAPP_COST);
        extend_instance_ttl(e);

        log!(e, "viniapp gate deployed", owner, payment_token, DEFAULT_VINIAPP_COST);
    }

    fn set_viniapp_cost(e: &Env, caller: Address, new_cost: i128) {
        caller.require_auth();

        if caller != read_owner(e) {
            panic_with_error!(e, ViniappError::NotTheOwner);
        }
        if new_cost < 0 {
            panic_with_error!(e, ViniappError::InvalidCost);
        }

        let old_cost = read_cost(e);
        e.storage().instance().set(&DataKey::ViniappCost, &new_cost);
        extend_instance_ttl(e);

        log!(e, "viniapp cost updated", old_cost, new_cost);
        events::ViniappCostUpdated { old_cost, new_cost }.publish(e);
    }

    fn start_viniapp_creation(e: &Env, caller: Address) -> i128 {
        caller.require_auth();

        // Charged amount is fixed here; the event carries the same value.
        let cost = read_cost(e);
        let custody = e.current_contract_address();

        token::TokenClient::new(e, &read_payment_token(e))
            .transfer_from(&custody, &caller, &custody, &cost);
        extend_instance_ttl(e);

        events::ViniappCreated { payer: caller.clone(), cost }.publish(e);
        log!(e, "viniapp creation paid", caller, cost);

        cost
    }

    fn viniapp_cost(e: &Env) -> i128 {
        read_cost(e)
    }

    fn payment_token(e: &Env) -> Address {
        read_payment_token(e)
    }

    fn owner(e: &Env) -> Address {
        read_owner(e)
    }

    fn is_approved(e: &Env, account: Address) -> bool {
        let allowance = token::TokenClient::new(e, &read_payment_token(e))
            .allowance(&account, &e.current_contract_address());
        allowance >= read_cost(e)
    }

}
