/********** Numbers **********/

/// Fixed-point scalar for 18 decimal numbers
pub const SCALAR_18: i128 = 1_000_000_000_000_000_000;

/// Share of the entry price the collateral price can fall to before a loan can be liquidated
/// (18 decimals)
pub const LIQUIDATION_RATIO: i128 = 800_000_000_000_000_000;

/// Decimals `price_usd` is reported in
pub const PRICE_DECIMALS: u32 = 18;
