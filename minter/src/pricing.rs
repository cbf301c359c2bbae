use sep_40_oracle::{Asset, PriceFeedClient};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env};

use crate::{
    constants::{PRICE_DECIMALS, SCALAR_18},
    errors::MinterError,
    storage::MinterConfig,
};

/// Load the collateral price from the price feed, in 18 decimals
///
/// ### Panics
/// If no price was published, the price is not positive, or it is older than `max_price_age`
pub fn load_price(e: &Env, config: &MinterConfig) -> i128 {
    let oracle = PriceFeedClient::new(e, &config.oracle);
    let decimals = oracle.decimals();
    let price_data = match oracle.lastprice(&Asset::Stellar(config.collateral.clone())) {
        Some(price_data) => price_data,
        None => panic_with_error!(e, MinterError::InvalidPrice),
    };
    if price_data.timestamp.saturating_add(config.max_price_age) < e.ledger().timestamp() {
        panic_with_error!(e, MinterError::StalePrice);
    }
    normalize_price(e, price_data.price, decimals)
}

/// Scale a price with `decimals` decimals to 18 decimals
///
/// ### Panics
/// If the price is not positive or has more than 18 decimals
pub fn normalize_price(e: &Env, price: i128, decimals: u32) -> i128 {
    if price <= 0 || decimals > PRICE_DECIMALS {
        panic_with_error!(e, MinterError::InvalidPrice);
    }
    price
        .checked_mul(10i128.pow(PRICE_DECIMALS - decimals))
        .unwrap_or_else(|| panic_with_error!(e, MinterError::OverflowError))
}

/// The one-buck minted for `quantity` collateral, rounded down
///
/// ### Arguments
/// * `quantity` - The collateral deposited
/// * `collateral_pct` - The share of the deposit minted (18 decimals)
pub fn get_dy(e: &Env, quantity: i128, collateral_pct: i128) -> i128 {
    quantity.fixed_mul_floor(e, &collateral_pct, &SCALAR_18)
}
