use soroban_sdk::contracterror;

/// Error codes for the price feed contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PriceFeedError {
    /// Price must be strictly positive
    InvalidPrice = 3,

    /// Assets and prices were supplied with different lengths
    InvalidInput = 4,

    /// Decimals must fit an 18 decimal fixed point number
    InvalidDecimals = 7,
}
