#![no_std]

use soroban_sdk::{contract, contractmeta, Address, Env};

contractmeta!(key = "Description", val = "Viniapp creation payment gate");

mod contract;

mod errors;
mod events;

pub use errors::ViniappError;
pub use events::{ViniappCostUpdated, ViniappCreated};

/// Fee charged per creation until the owner changes it: 20 units of a
/// 6-decimal stablecoin.
pub const DEFAULT_VINIAPP_COST: i128 = 20_000_000;

#[contract]
pub struct ViniApp;

/// Owner-priced, token-paid gate in front of viniapp creation.
///
/// Collected fees stay in the contract's own token balance.
pub trait ViniappContract {

    /// Stores the owner and the accepted payment token, and sets the
    /// creation fee to [`DEFAULT_VINIAPP_COST`].
    ///
    /// Neither address is validated.
    fn __constructor(e: &Env, owner: Address, payment_token: Address);

    /// Replace the creation fee.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - Account requesting the change. Must authorize the call
    ///   and be the owner.
    /// * `new_cost` - New fee in the payment token's smallest unit. Zero is
    ///   allowed, there is no upper bound.
    ///
    /// # Errors
    ///
    /// * [`ViniappError::NotTheOwner`] - `caller` is not the owner.
    /// * [`ViniappError::InvalidCost`] - `new_cost` is negative.
    ///
    /// # Events
    ///
    /// * topics - `["viniapp_cost_updated"]`
    /// * data - `{old_cost: i128, new_cost: i128}`
    fn set_viniapp_cost(e: &Env, caller: Address, new_cost: i128);

    /// Pull the current fee from `caller` into the contract's custody.
    ///
    /// The caller must have approved this contract for at least
    /// [`ViniappContract::viniapp_cost`] on the payment token beforehand. If
    /// the token refuses the transfer the whole invocation is reverted.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - Account paying for the creation.
    ///
    /// # Returns
    ///
    /// The fee that was charged.
    ///
    /// # Events
    ///
    /// * topics - `["viniapp_created", payer: Address]`
    /// * data - `{cost: i128}`
    fn start_viniapp_creation(e: &Env, caller: Address) -> i128;

    /// Returns the current creation fee.
    fn viniapp_cost(e: &Env) -> i128;

    /// Returns the token accepted as payment.
    fn payment_token(e: &Env) -> Address;

    /// Returns the account allowed to change the fee.
    fn owner(e: &Env) -> Address;

    /// Whether `account` has approved this contract for at least the current
    /// fee on the payment token.
    ///
    /// Only the allowance is consulted; the balance is not.
    fn is_approved(e: &Env, account: Address) -> bool;
}
