use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the one-buck token contract. Common errors are codes that match up with the
/// built-in contracts error reporting. Token specific errors start at 1300.
pub enum TokenError {
    // Common Errors
    InternalError = 1,

    /// "Access is denied." The caller is not the owner or minter the call requires
    AccessDenied = 4,

    NegativeAmountError = 8,
    AllowanceError = 9,
    BalanceError = 10,
    OverflowError = 12,

    // Token Errors (start at 1300)
    InvalidExpiration = 1300,

    // Permit Errors
    PermitSignerNotSet = 1301,
    PermitExpired = 1302,
}
