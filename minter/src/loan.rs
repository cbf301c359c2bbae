use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contracttype, panic_with_error, Env};

use crate::{
    constants::{LIQUIDATION_RATIO, SCALAR_18},
    errors::MinterError,
};

/// A borrower's open position. A borrower has at most one loan; minting again extends it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Loan {
    /// The collateral held by the minter for the borrower
    pub deposit: i128,
    /// The one-buck that must be burned to close the loan
    pub debt: i128,
    /// The deposit weighted average collateral price at mint (18 decimals)
    pub entry_price: i128,
}

impl Loan {
    /// Add a deposit minted at `price` to the loan
    ///
    /// ### Arguments
    /// * `deposit` - The collateral deposited
    /// * `debt` - The one-buck minted against it
    /// * `price` - The collateral price at mint (18 decimals)
    pub fn add(&mut self, e: &Env, deposit: i128, debt: i128, price: i128) {
        let total_deposit = self
            .deposit
            .checked_add(deposit)
            .unwrap_or_else(|| panic_with_error!(e, MinterError::OverflowError));
        if total_deposit == 0 {
            return;
        }
        self.entry_price = self
            .entry_price
            .fixed_mul_floor(e, &self.deposit, &total_deposit)
            + price.fixed_mul_floor(e, &deposit, &total_deposit);
        self.deposit = total_deposit;
        self.debt = self
            .debt
            .checked_add(debt)
            .unwrap_or_else(|| panic_with_error!(e, MinterError::OverflowError));
    }

    /// The collateral price below which the loan can be liquidated (18 decimals)
    pub fn liquidation_price(&self, e: &Env) -> i128 {
        self.entry_price
            .fixed_mul_floor(e, &LIQUIDATION_RATIO, &SCALAR_18)
    }

    /// The value of the deposit at the liquidation price, in one-buck
    pub fn repay_amount(&self, e: &Env) -> i128 {
        self.deposit
            .fixed_mul_floor(e, &self.liquidation_price(e), &SCALAR_18)
    }

    /// Check if the loan can be liquidated at `price`
    pub fn is_liquidatable(&self, e: &Env, price: i128) -> bool {
        price < self.liquidation_price(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_empty_loan() {
        let e = Env::default();
        let mut loan = Loan::default();
        loan.add(&e, 1_0000000, 0_0920000, 115_000_000_000_000_000);

        assert_eq!(loan.deposit, 1_0000000);
        assert_eq!(loan.debt, 0_0920000);
        assert_eq!(loan.entry_price, 115_000_000_000_000_000);
        assert_eq!(loan.liquidation_price(&e), 92_000_000_000_000_000);
        assert_eq!(loan.repay_amount(&e), 0_0920000);
    }

    #[test]
    fn test_add_weights_entry_price_by_deposit() {
        let e = Env::default();
        let mut loan = Loan::default();
        loan.add(&e, 3_0000000, 3_0000000, SCALAR_18);
        loan.add(&e, 1_0000000, 2_0000000, 2 * SCALAR_18);

        assert_eq!(loan.deposit, 4_0000000);
        assert_eq!(loan.debt, 5_0000000);
        assert_eq!(loan.entry_price, 1_250_000_000_000_000_000);
        assert_eq!(loan.liquidation_price(&e), SCALAR_18);
        assert_eq!(loan.repay_amount(&e), 4_0000000);
    }

    #[test]
    fn test_is_liquidatable() {
        let e = Env::default();
        let loan = Loan {
            deposit: 1_0000000,
            debt: 0_5000000,
            entry_price: SCALAR_18,
        };

        assert!(!loan.is_liquidatable(&e, SCALAR_18));
        assert!(!loan.is_liquidatable(&e, 800_000_000_000_000_000));
        assert!(loan.is_liquidatable(&e, 799_999_999_999_999_999));
    }
}
