use soroban_sdk::{Address, Env, Symbol};

pub struct MinterEvents {}

impl MinterEvents {
    /// Emitted when collateral is deposited and one-buck is minted
    ///
    /// - topics - `["mint", from: Address]`
    /// - data - `[collateral_in: i128, minted: i128]`
    ///
    /// ### Arguments
    /// * from - The borrower
    /// * collateral_in - The collateral deposited
    /// * minted - The one-buck minted to the borrower
    pub fn mint(e: &Env, from: Address, collateral_in: i128, minted: i128) {
        let topics = (Symbol::new(e, "mint"), from);
        e.events().publish(topics, (collateral_in, minted));
    }

    /// Emitted when a loan is repaid in full
    ///
    /// - topics - `["repay", from: Address]`
    /// - data - `[burned: i128, collateral_out: i128]`
    pub fn repay(e: &Env, from: Address, burned: i128, collateral_out: i128) {
        let topics = (Symbol::new(e, "repay"), from);
        e.events().publish(topics, (burned, collateral_out));
    }

    /// Emitted when a loan is liquidated
    ///
    /// - topics - `["liquidate", borrower: Address, liquidator: Address]`
    /// - data - `[burned: i128, collateral_out: i128, price: i128]`
    ///
    /// ### Arguments
    /// * borrower - The owner of the liquidated loan
    /// * liquidator - The address repaying the debt and receiving the collateral
    /// * burned - The one-buck burned from the liquidator
    /// * collateral_out - The collateral sent to the liquidator
    /// * price - The collateral price the loan was liquidated at
    pub fn liquidate(
        e: &Env,
        borrower: Address,
        liquidator: Address,
        burned: i128,
        collateral_out: i128,
        price: i128,
    ) {
        let topics = (Symbol::new(e, "liquidate"), borrower, liquidator);
        e.events().publish(topics, (burned, collateral_out, price));
    }

    /// Emitted when the admin changes the collateral ratio
    ///
    /// - topics - `["set_collateral_pct", admin: Address]`
    /// - data - `collateral_pct: i128`
    pub fn set_collateral_pct(e: &Env, admin: Address, collateral_pct: i128) {
        let topics = (Symbol::new(e, "set_collateral_pct"), admin);
        e.events().publish(topics, collateral_pct);
    }
}
