use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the minter contract. Common errors are codes that match up with the built-in
/// contracts error reporting. Minter specific errors start at 1400.
pub enum MinterError {
    // Common Errors
    InternalError = 1,
    NegativeAmountError = 8,
    OverflowError = 12,

    // Config Errors (start at 1400)
    InvalidCollateralPct = 1400,

    // Oracle Errors
    InvalidPrice = 1401,
    StalePrice = 1402,

    // Loan Errors
    NoOpenLoan = 1403,
    LoanHealthy = 1404,
    MintAmountTooSmall = 1405,
}
