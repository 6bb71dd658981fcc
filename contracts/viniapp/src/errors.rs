use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ViniappError {
    /// Not the Owner
    NotTheOwner = 1,
    /// Indicates a negative creation fee.
    InvalidCost = 2,
    /// Indicates instance storage was read before the constructor ran.
    NotInitialized = 3,
}
