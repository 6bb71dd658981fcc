#![no_std]

use soroban_sdk::{contract, contractmeta, Address, Env, String};

contractmeta!(key = "Description", val = "Dummy USDC");

mod contract;

#[cfg(test)]
mod test;
mod errors;
mod events;

pub use errors::DummyUsdcError;

pub const DECIMALS: u32 = 6;
pub const NAME: &str = "Dummy USDC";
pub const SYMBOL: &str = "USDC";

#[contract]
pub struct DummyUsdc;

/// SEP-41 token surface plus an owner-only `mint`.
///
/// Stands in for USDC on networks where no real stablecoin contract is
/// available.
pub trait DummyUsdcToken {

    /// Mints `initial_supply` to `owner`, who also becomes the only account
    /// allowed to mint later on.
    fn __constructor(e: &Env, owner: Address, initial_supply: i128);

    /// Creates `amount` new tokens for `to`. Requires the owner's
    /// authorization.
    ///
    /// # Events
    ///
    /// * topics - `["mint", to: Address]`
    /// * data - `{amount: i128}`
    fn mint(e: &Env, to: Address, amount: i128);

    /// Returns the allowance `spender` may still draw from `from`.
    ///
    /// Expired allowances read as zero.
    fn allowance(e: &Env, from: Address, spender: Address) -> i128;

    /// Lets `spender` draw up to `amount` from `from` until
    /// `expiration_ledger`, replacing any previous allowance.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `from` - Account whose balance is drawn. Must authorize the call.
    /// * `spender` - Account allowed to draw.
    /// * `amount` - Maximum amount drawable.
    /// * `expiration_ledger` - Last ledger the allowance is valid for. May
    ///   only be in the past when `amount` is zero.
    ///
    /// # Events
    ///
    /// * topics - `["approve", from: Address, spender: Address]`
    /// * data - `{amount: i128, expiration_ledger: u32}`
    fn approve(e: &Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    /// Returns the balance of `id`.
    fn balance(e: &Env, id: Address) -> i128;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Events
    ///
    /// * topics - `["transfer", from: Address, to: Address]`
    /// * data - `{amount: i128}`
    fn transfer(e: &Env, from: Address, to: Address, amount: i128);

    /// Moves `amount` from `from` to `to`, consuming `spender`'s allowance.
    ///
    /// # Events
    ///
    /// * topics - `["transfer", from: Address, to: Address]`
    /// * data - `{amount: i128}`
    fn transfer_from(e: &Env, spender: Address, from: Address, to: Address, amount: i128);

    /// Destroys `amount` from `from`.
    fn burn(e: &Env, from: Address, amount: i128);

    /// Destroys `amount` from `from`, consuming `spender`'s allowance.
    fn burn_from(e: &Env, spender: Address, from: Address, amount: i128);

    /// Returns the number of decimals, always [`DECIMALS`].
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    fn decimals(e: &Env) -> u32;

    /// Returns the token name.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    fn name(e: &Env) -> String;

    /// Returns the token symbol.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    fn symbol(e: &Env) -> String;

    /// Returns the account allowed to mint.
    fn owner(e: &Env) -> Address;
}
