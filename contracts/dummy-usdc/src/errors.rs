use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DummyUsdcError {
    /// Indicates a negative amount was passed.
    NegativeAmount = 100,
    /// Indicates the account holds less than the requested amount.
    InsufficientBalance = 101,
    /// Indicates the spender's allowance is below the requested amount.
    InsufficientAllowance = 102,
    /// Indicates a non-zero allowance whose expiration ledger already passed.
    InvalidExpirationLedger = 103,
    /// Indicates overflow when adding two values
    MathOverflow = 104,
    /// Indicates the owner was read before the constructor ran.
    NotInitialized = 105,
}
