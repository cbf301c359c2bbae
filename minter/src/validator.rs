use soroban_sdk::{panic_with_error, Env};

use crate::{constants::SCALAR_18, errors::MinterError};

/// Require that an incoming amount is not negative
///
/// ### Panics
/// If the number is negative
pub fn require_nonnegative(e: &Env, amount: i128) {
    if amount.is_negative() {
        panic_with_error!(e, MinterError::NegativeAmountError);
    }
}

/// Require that a collateral ratio is in (0, 1] as an 18 decimal number
///
/// ### Panics
/// If the ratio is out of bounds
pub fn require_valid_collateral_pct(e: &Env, collateral_pct: i128) {
    if collateral_pct <= 0 || collateral_pct > SCALAR_18 {
        panic_with_error!(e, MinterError::InvalidCollateralPct);
    }
}
