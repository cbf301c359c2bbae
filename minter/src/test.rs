#![cfg(test)]

use crate::{
    constants::SCALAR_18,
    testutils::{create_minter, MAX_PRICE_AGE},
    MinterClient, MinterContract, MinterError,
};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    Address, Env, Error, FromVal, Symbol, Val, Vec,
};

fn minter_error(error: MinterError) -> Error {
    Error::from_contract_error(error as u32)
}

#[test]
fn test_constructor() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);

    assert_eq!(env.minter.admin(), env.admin);
    assert_eq!(env.minter.token(), env.token.address);
    assert_eq!(env.minter.collateral(), env.collateral.address);
    assert_eq!(env.minter.oracle(), env.oracle.address);
    assert_eq!(env.minter.collateral_pct(), SCALAR_18 / 2);
    assert_eq!(env.minter.price_usd(), SCALAR_18);
    assert_eq!(env.token.minter(), env.minter.address);
}

#[test]
#[should_panic(expected = "Error(Contract, #1400)")]
fn test_constructor_invalid_collateral_pct() {
    let e = Env::default();
    e.register(
        MinterContract {},
        (
            Address::generate(&e),
            Address::generate(&e),
            Address::generate(&e),
            Address::generate(&e),
            SCALAR_18 + 1,
            MAX_PRICE_AGE,
        ),
    );
}

#[test]
fn test_mint_opens_loan() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);
    env.fund(&e, &samwise, 10_0000000);

    assert_eq!(env.minter.get_dy(&10_0000000), 5_0000000);
    let minted = env.minter.mint(&samwise, &10_0000000);
    assert_eq!(minted, 5_0000000);

    let (addr, topics, data) = e.events().all().last().unwrap();
    assert_eq!(addr, env.minter.address);
    assert_eq!(topics.len(), 2);
    assert_eq!(
        Symbol::from_val(&e, &topics.get_unchecked(0)),
        Symbol::new(&e, "mint")
    );
    assert_eq!(Address::from_val(&e, &topics.get_unchecked(1)), samwise);
    let data = Vec::<Val>::from_val(&e, &data);
    assert_eq!(i128::from_val(&e, &data.get_unchecked(0)), 10_0000000);
    assert_eq!(i128::from_val(&e, &data.get_unchecked(1)), 5_0000000);

    assert_eq!(env.token.balance(&samwise), 5_0000000);
    assert_eq!(env.token.total_supply(), 5_0000000);
    assert_eq!(env.collateral.balance(&samwise), 0);
    assert_eq!(env.collateral.balance(&env.minter.address), 10_0000000);
    assert_eq!(
        env.minter.open_loans(&samwise),
        (800_000_000_000_000_000, 10_0000000)
    );
    // the deposit valued at the $0.80 liquidation price
    assert_eq!(env.minter.repay_amount(&samwise), 8_0000000);
}

#[test]
fn test_mint_twice_extends_loan() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);

    env.fund(&e, &samwise, 10_0000000);
    env.minter.mint(&samwise, &10_0000000);

    env.set_price(2_0000000);
    env.fund(&e, &samwise, 10_0000000);
    let minted = env.minter.mint(&samwise, &10_0000000);
    assert_eq!(minted, 5_0000000);
    assert_eq!(env.token.balance(&samwise), 10_0000000);

    // entry price is the deposit weighted average of $1 and $2
    assert_eq!(
        env.minter.open_loans(&samwise),
        (1_200_000_000_000_000_000, 20_0000000)
    );
    assert_eq!(env.minter.repay_amount(&samwise), 24_0000000);
}

#[test]
fn test_mint_amount_ignores_price() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);
    env.set_price(0_1150000);
    env.fund(&e, &samwise, 10_0000000);

    assert_eq!(env.minter.get_dy(&10_0000000), 5_0000000);
    assert_eq!(env.minter.mint(&samwise, &10_0000000), 5_0000000);
    assert_eq!(env.token.balance(&samwise), 5_0000000);

    assert_eq!(
        env.minter.open_loans(&samwise),
        (92_000_000_000_000_000, 10_0000000)
    );
    assert_eq!(env.minter.repay_amount(&samwise), 0_9200000);
}

#[test]
fn test_mint_rounds_down_to_zero() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);
    env.fund(&e, &samwise, 1);

    assert_eq!(env.minter.mint(&samwise, &1), 0);
    assert_eq!(env.token.balance(&samwise), 0);
    assert_eq!(env.collateral.balance(&env.minter.address), 1);
    let (_, deposit) = env.minter.open_loans(&samwise);
    assert_eq!(deposit, 1);
}

#[test]
fn test_mint_zero_or_negative() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);
    env.fund(&e, &samwise, 1);

    let result = env.minter.try_mint(&samwise, &0);
    assert_eq!(
        result.err(),
        Some(Ok(minter_error(MinterError::MintAmountTooSmall)))
    );

    let result = env.minter.try_mint(&samwise, &-1);
    assert_eq!(
        result.err(),
        Some(Ok(minter_error(MinterError::NegativeAmountError)))
    );
}

#[test]
fn test_mint_without_collateral_approval() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);
    env.collateral_admin.mint(&samwise, &10_0000000);

    let result = env.minter.try_mint(&samwise, &10_0000000);
    assert!(result.is_err());
    assert_eq!(env.token.total_supply(), 0);
    assert_eq!(env.minter.open_loans(&samwise), (0, 0));
}

#[test]
fn test_repay_closes_loan() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);
    env.fund(&e, &samwise, 10_0000000);
    let debt = env.minter.mint(&samwise, &10_0000000);

    env.approve_burn(&e, &samwise, debt);
    let returned = env.minter.repay(&samwise);

    assert_eq!(returned, 10_0000000);
    assert_eq!(env.collateral.balance(&samwise), 10_0000000);
    assert_eq!(env.collateral.balance(&env.minter.address), 0);
    assert_eq!(env.token.balance(&samwise), 0);
    assert_eq!(env.token.total_supply(), 0);
    assert_eq!(env.minter.open_loans(&samwise), (0, 0));
    assert_eq!(env.minter.repay_amount(&samwise), 0);
}

#[test]
fn test_repay_without_loan() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);

    let result = env.minter.try_repay(&samwise);
    assert_eq!(result.err(), Some(Ok(minter_error(MinterError::NoOpenLoan))));
}

#[test]
fn test_repay_without_burn_approval() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);
    env.fund(&e, &samwise, 10_0000000);
    env.minter.mint(&samwise, &10_0000000);

    let result = env.minter.try_repay(&samwise);
    assert!(result.is_err());
    assert_eq!(env.token.balance(&samwise), 5_0000000);
    assert_eq!(
        env.minter.open_loans(&samwise),
        (800_000_000_000_000_000, 10_0000000)
    );
}

#[test]
fn test_liquidate() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);
    let frodo = Address::generate(&e);
    env.fund(&e, &samwise, 10_0000000);
    env.minter.mint(&samwise, &10_0000000);
    env.token.transfer(&samwise, &frodo, &5_0000000);
    env.approve_burn(&e, &frodo, 5_0000000);

    // at the liquidation price the loan is still healthy
    env.set_price(0_8000000);
    let result = env.minter.try_liquidate(&frodo, &samwise);
    assert_eq!(result.err(), Some(Ok(minter_error(MinterError::LoanHealthy))));

    env.set_price(0_7000000);
    let seized = env.minter.liquidate(&frodo, &samwise);
    assert_eq!(seized, 10_0000000);

    let (addr, topics, data) = e.events().all().last().unwrap();
    assert_eq!(addr, env.minter.address);
    assert_eq!(topics.len(), 3);
    assert_eq!(
        Symbol::from_val(&e, &topics.get_unchecked(0)),
        Symbol::new(&e, "liquidate")
    );
    assert_eq!(Address::from_val(&e, &topics.get_unchecked(1)), samwise);
    assert_eq!(Address::from_val(&e, &topics.get_unchecked(2)), frodo);
    let data = Vec::<Val>::from_val(&e, &data);
    assert_eq!(i128::from_val(&e, &data.get_unchecked(0)), 5_0000000);
    assert_eq!(i128::from_val(&e, &data.get_unchecked(1)), 10_0000000);
    assert_eq!(
        i128::from_val(&e, &data.get_unchecked(2)),
        700_000_000_000_000_000
    );

    assert_eq!(env.collateral.balance(&frodo), 10_0000000);
    assert_eq!(env.token.balance(&frodo), 0);
    assert_eq!(env.token.total_supply(), 0);
    assert_eq!(env.minter.open_loans(&samwise), (0, 0));
}

#[test]
fn test_liquidate_without_loan() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);
    let frodo = Address::generate(&e);

    let result = env.minter.try_liquidate(&frodo, &samwise);
    assert_eq!(result.err(), Some(Ok(minter_error(MinterError::NoOpenLoan))));
}

#[test]
fn test_stale_price() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);

    e.ledger()
        .set_timestamp(e.ledger().timestamp() + MAX_PRICE_AGE);
    assert_eq!(env.minter.price_usd(), SCALAR_18);

    e.ledger().set_timestamp(e.ledger().timestamp() + 1);
    let result = env.minter.try_price_usd();
    assert_eq!(result.err(), Some(Ok(minter_error(MinterError::StalePrice))));

    env.set_price(0_5000000);
    assert_eq!(env.minter.price_usd(), SCALAR_18 / 2);
}

#[test]
fn test_missing_price() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);

    // a minter for an asset the price feed does not quote
    let unpriced = e.register(
        MinterContract {},
        (
            env.admin.clone(),
            env.token.address.clone(),
            Address::generate(&e),
            env.oracle.address.clone(),
            SCALAR_18 / 2,
            MAX_PRICE_AGE,
        ),
    );
    let unpriced = MinterClient::new(&e, &unpriced);

    let result = unpriced.try_price_usd();
    assert_eq!(result.err(), Some(Ok(minter_error(MinterError::InvalidPrice))));
}

#[test]
fn test_set_collateral_pct() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);
    let samwise = Address::generate(&e);

    env.minter.set_collateral_pct(&(SCALAR_18 * 8 / 10));
    assert_eq!(env.minter.collateral_pct(), 800_000_000_000_000_000);
    assert_eq!(env.minter.get_dy(&10_0000000), 8_0000000);

    let result = env.minter.try_set_collateral_pct(&0);
    assert_eq!(
        result.err(),
        Some(Ok(minter_error(MinterError::InvalidCollateralPct)))
    );
    let result = env.minter.try_set_collateral_pct(&(SCALAR_18 + 1));
    assert_eq!(
        result.err(),
        Some(Ok(minter_error(MinterError::InvalidCollateralPct)))
    );

    env.fund(&e, &samwise, 10_0000000);
    assert_eq!(env.minter.mint(&samwise, &10_0000000), 8_0000000);
}

#[test]
fn test_set_collateral_pct_requires_auth() {
    let e = Env::default();
    e.mock_all_auths();
    let env = create_minter(&e);

    e.mock_auths(&[]);
    let result = env.minter.try_set_collateral_pct(&SCALAR_18);
    assert!(result.is_err());
    assert_eq!(env.minter.collateral_pct(), SCALAR_18 / 2);
}
