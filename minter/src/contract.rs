use crate::{
    actions,
    events::MinterEvents,
    pricing,
    storage::{self, MinterConfig},
    validator::{require_nonnegative, require_valid_collateral_pct},
};
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};

/// ### Minter
///
/// Mints one-buck against collateral deposits. Each borrower has a single open loan that is
/// closed in full by `repay` or, once the collateral price falls below its liquidation price,
/// by anyone through `liquidate`.
#[contract]
pub struct MinterContract;

#[contractclient(name = "MinterClient")]
pub trait Minter {
    /********** Config **********/

    /// Fetch the admin address of the minter
    fn admin(e: Env) -> Address;

    /// Fetch the one-buck token address
    fn token(e: Env) -> Address;

    /// Fetch the collateral asset address
    fn collateral(e: Env) -> Address;

    /// Fetch the price feed address
    fn oracle(e: Env) -> Address;

    /// Fetch the share of deposited collateral minted as one-buck (18 decimals)
    fn collateral_pct(e: Env) -> i128;

    /// (Admin only) Set the share of deposited collateral minted as one-buck. Only applies
    /// to future mints.
    ///
    /// ### Arguments
    /// * `collateral_pct` - The new ratio (18 decimals), in (0, 1]
    ///
    /// ### Panics
    /// If the caller is not the admin or the ratio is out of bounds
    fn set_collateral_pct(e: Env, collateral_pct: i128);

    /********** Pricing **********/

    /// Fetch the collateral price in USD (18 decimals)
    ///
    /// ### Panics
    /// If the price feed has no price for the collateral or the price is stale
    fn price_usd(e: Env) -> i128;

    /// Fetch the amount of one-buck minted for depositing `quantity` collateral
    ///
    /// ### Arguments
    /// * `quantity` - The collateral to deposit
    fn get_dy(e: Env, quantity: i128) -> i128;

    /********** Loans **********/

    /// Deposit `quantity` collateral from `from` and mint one-buck to `from`. `from` must have
    /// approved the minter to transfer the collateral.
    ///
    /// Returns the amount of one-buck minted
    ///
    /// ### Arguments
    /// * `from` - The borrower
    /// * `quantity` - The collateral to deposit
    ///
    /// ### Panics
    /// If `quantity` is zero, the price is unusable, or the collateral transfer fails
    fn mint(e: Env, from: Address, quantity: i128) -> i128;

    /// Fetch the loan of `user` as `(liquidation_price, deposit_amount)`. Returns `(0, 0)` if
    /// `user` has no open loan.
    ///
    /// ### Arguments
    /// * `user` - The borrower
    fn open_loans(e: Env, user: Address) -> (i128, i128);

    /// Fetch the value of the deposit of `user` at its liquidation price, in one-buck. Returns 0
    /// if `user` has no open loan.
    ///
    /// ### Arguments
    /// * `user` - The borrower
    fn repay_amount(e: Env, user: Address) -> i128;

    /// Burn the full debt of `from` and return their deposit. `from` must have approved the
    /// minter to burn the debt.
    ///
    /// Returns the amount of collateral returned
    ///
    /// ### Panics
    /// If `from` has no open loan
    fn repay(e: Env, from: Address) -> i128;

    /// Liquidate the loan of `borrower`. The liquidator burns the debt and receives the deposit.
    ///
    /// Returns the amount of collateral sent to the liquidator
    ///
    /// ### Arguments
    /// * `liquidator` - The address repaying the debt
    /// * `borrower` - The owner of the loan
    ///
    /// ### Panics
    /// If `borrower` has no open loan or the collateral price is not below the liquidation price
    fn liquidate(e: Env, liquidator: Address, borrower: Address) -> i128;
}

#[contractimpl]
impl MinterContract {
    /// Construct the minter
    ///
    /// ### Arguments
    /// * `admin` - The admin of the minter
    /// * `token` - The one-buck token. The minter must be made its minter before `mint` works.
    /// * `collateral` - The asset accepted as collateral
    /// * `oracle` - A SEP-40 price feed quoting `collateral`
    /// * `collateral_pct` - The share of deposited collateral minted (18 decimals)
    /// * `max_price_age` - The oldest price, in seconds, the minter accepts
    ///
    /// ### Panics
    /// If `collateral_pct` is not in (0, 1]
    pub fn __constructor(
        e: Env,
        admin: Address,
        token: Address,
        collateral: Address,
        oracle: Address,
        collateral_pct: i128,
        max_price_age: u64,
    ) {
        require_valid_collateral_pct(&e, collateral_pct);
        storage::set_admin(&e, &admin);
        storage::set_config(
            &e,
            &MinterConfig {
                token,
                collateral,
                oracle,
                collateral_pct,
                max_price_age,
            },
        );
    }
}

#[contractimpl]
impl Minter for MinterContract {
    fn admin(e: Env) -> Address {
        storage::get_admin(&e)
    }

    fn token(e: Env) -> Address {
        storage::get_config(&e).token
    }

    fn collateral(e: Env) -> Address {
        storage::get_config(&e).collateral
    }

    fn oracle(e: Env) -> Address {
        storage::get_config(&e).oracle
    }

    fn collateral_pct(e: Env) -> i128 {
        storage::get_config(&e).collateral_pct
    }

    fn set_collateral_pct(e: Env, collateral_pct: i128) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();
        require_valid_collateral_pct(&e, collateral_pct);

        let mut config = storage::get_config(&e);
        config.collateral_pct = collateral_pct;
        storage::set_config(&e, &config);
        MinterEvents::set_collateral_pct(&e, admin, collateral_pct);
    }

    fn price_usd(e: Env) -> i128 {
        let config = storage::get_config(&e);
        pricing::load_price(&e, &config)
    }

    fn get_dy(e: Env, quantity: i128) -> i128 {
        require_nonnegative(&e, quantity);
        let config = storage::get_config(&e);
        pricing::get_dy(&e, quantity, config.collateral_pct)
    }

    fn mint(e: Env, from: Address, quantity: i128) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();

        actions::execute_mint(&e, &from, quantity)
    }

    fn open_loans(e: Env, user: Address) -> (i128, i128) {
        match storage::get_loan(&e, &user) {
            Some(loan) => (loan.liquidation_price(&e), loan.deposit),
            None => (0, 0),
        }
    }

    fn repay_amount(e: Env, user: Address) -> i128 {
        storage::get_loan(&e, &user).map_or(0, |loan| loan.repay_amount(&e))
    }

    fn repay(e: Env, from: Address) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();

        actions::execute_repay(&e, &from)
    }

    fn liquidate(e: Env, liquidator: Address, borrower: Address) -> i128 {
        storage::extend_instance(&e);
        liquidator.require_auth();

        actions::execute_liquidate(&e, &liquidator, &borrower)
    }
}
