use sep_41_token::TokenClient;
use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::{
    dependencies::OneBuckMintClient, errors::MinterError, events::MinterEvents, loan::Loan,
    pricing, storage, validator::require_nonnegative,
};

/// Deposit `quantity` collateral from `from` and mint one-buck against it
///
/// Returns the amount of one-buck minted
///
/// ### Panics
/// If `quantity` is zero, `from` has not approved the minter for `quantity` collateral, or the
/// price is unusable
pub fn execute_mint(e: &Env, from: &Address, quantity: i128) -> i128 {
    require_nonnegative(e, quantity);
    if quantity == 0 {
        panic_with_error!(e, MinterError::MintAmountTooSmall);
    }
    let config = storage::get_config(e);
    // the price only sets the loan's entry price
    let price = pricing::load_price(e, &config);
    let minted = pricing::get_dy(e, quantity, config.collateral_pct);

    let minter = e.current_contract_address();
    TokenClient::new(e, &config.collateral).transfer_from(&minter, from, &minter, &quantity);
    OneBuckMintClient::new(e, &config.token).mint(&minter, from, &minted);

    let mut loan = storage::get_loan(e, from).unwrap_or_default();
    loan.add(e, quantity, minted, price);
    storage::set_loan(e, from, &loan);

    log!(e, "mint {} against {} collateral", minted, quantity);
    MinterEvents::mint(e, from.clone(), quantity, minted);
    minted
}

/// Burn `from`s full debt and return their deposit
///
/// Returns the amount of collateral returned
///
/// ### Panics
/// If `from` has no open loan or has not approved the minter to burn the debt
pub fn execute_repay(e: &Env, from: &Address) -> i128 {
    let config = storage::get_config(e);
    let loan = load_loan(e, from);

    let minter = e.current_contract_address();
    TokenClient::new(e, &config.token).burn_from(&minter, from, &loan.debt);
    TokenClient::new(e, &config.collateral).transfer(&minter, from, &loan.deposit);
    storage::del_loan(e, from);

    log!(e, "repay {} returning {} collateral", loan.debt, loan.deposit);
    MinterEvents::repay(e, from.clone(), loan.debt, loan.deposit);
    loan.deposit
}

/// Close `borrower`s loan on behalf of `liquidator`, who burns the debt and receives the deposit
///
/// Returns the amount of collateral sent to the liquidator
///
/// ### Panics
/// If `borrower` has no open loan, the collateral price is at or above the loan's liquidation
/// price, or the liquidator has not approved the minter to burn the debt
pub fn execute_liquidate(e: &Env, liquidator: &Address, borrower: &Address) -> i128 {
    let config = storage::get_config(e);
    let loan = load_loan(e, borrower);
    let price = pricing::load_price(e, &config);
    if !loan.is_liquidatable(e, price) {
        panic_with_error!(e, MinterError::LoanHealthy);
    }

    let minter = e.current_contract_address();
    TokenClient::new(e, &config.token).burn_from(&minter, liquidator, &loan.debt);
    TokenClient::new(e, &config.collateral).transfer(&minter, liquidator, &loan.deposit);
    storage::del_loan(e, borrower);

    log!(e, "liquidate at price {}", price);
    MinterEvents::liquidate(
        e,
        borrower.clone(),
        liquidator.clone(),
        loan.debt,
        loan.deposit,
        price,
    );
    loan.deposit
}

fn load_loan(e: &Env, user: &Address) -> Loan {
    match storage::get_loan(e, user) {
        Some(loan) => loan,
        None => panic_with_error!(e, MinterError::NoOpenLoan),
    }
}
