//! Checks run against a `TestFixture` on either network. Checks marked forked only return early
//! on a local network.

use minter::{MinterError, SCALAR_18};
use one_buck_token::TokenError;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{testutils::Events, Address, Error, FromVal, Symbol, Val, Vec};

use crate::{
    assertions::assert_rounded_eq,
    permit,
    test_fixture::{TestFixture, FORKED_COLLATERAL_PCT, MAX_PRICE_AGE, SCALAR_7},
};

// 18 decimal prices to the 7 decimals the price feed publishes with
const PRICE_TO_7_DECIMALS: i128 = 100_000_000_000;

fn access_denied() -> Error {
    Error::from_contract_error(TokenError::AccessDenied as u32)
}

pub fn minter_deployed(fixture: &TestFixture) {
    assert_eq!(fixture.minter.token(), fixture.token.address);
    assert_eq!(fixture.minter.collateral(), fixture.collateral.address);
    assert_eq!(fixture.minter.oracle(), fixture.oracle.address);
    assert_eq!(fixture.minter.admin(), fixture.owner);
    assert_eq!(fixture.token.minter(), fixture.minter.address);
    assert_eq!(fixture.token.owner(), fixture.owner);
    assert_eq!(fixture.token.decimals(), fixture.collateral.decimals());

    assert_eq!(fixture.minter.collateral_pct(), fixture.collateral_pct());
}

pub fn token_balance_update_on_mint(fixture: &TestFixture) {
    let quantity = 10 * SCALAR_7;
    let expected = fixture.expected_dy(quantity);
    let balance_before = fixture.token.balance(&fixture.owner);

    let minted = fixture.minter.mint(&fixture.owner, &quantity);

    assert_eq!(minted, expected);
    assert_eq!(fixture.token.balance(&fixture.owner) - balance_before, expected);
    if fixture.is_forked() {
        assert_eq!(minted, 8 * SCALAR_7);
    } else {
        assert_eq!(minted, 5 * SCALAR_7);
    }
}

pub fn total_token_supply_update_on_mint(fixture: &TestFixture) {
    let quantity = 10 * SCALAR_7;
    let expected = fixture.expected_dy(quantity);
    let supply_before = fixture.token.total_supply();

    let minted = fixture.minter.mint(&fixture.owner, &quantity);

    assert_eq!(minted, expected);
    assert_eq!(fixture.token.total_supply() - supply_before, expected);
}

pub fn owner_can_set_minter(fixture: &TestFixture) {
    fixture
        .token
        .set_minter(&fixture.owner, &fixture.receiver);
    assert_eq!(fixture.token.minter(), fixture.receiver);

    // the old minter can no longer mint
    let result = fixture.minter.try_mint(&fixture.owner, &SCALAR_7);
    assert!(result.is_err());

    fixture.token.mint(&fixture.receiver, &fixture.alice, &SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.alice), SCALAR_7);
}

pub fn nonowner_cannot_set_minter(fixture: &TestFixture) {
    let result = fixture
        .token
        .try_set_minter(&fixture.alice, &fixture.alice);
    assert_eq!(result.err(), Some(Ok(access_denied())));
    assert_eq!(fixture.token.minter(), fixture.minter.address);
}

pub fn nonminter_cannot_mint(fixture: &TestFixture) {
    let result = fixture
        .token
        .try_mint(&fixture.alice, &fixture.alice, &SCALAR_7);
    assert_eq!(result.err(), Some(Ok(access_denied())));

    let result = fixture
        .token
        .try_mint(&fixture.owner, &fixture.owner, &SCALAR_7);
    assert_eq!(result.err(), Some(Ok(access_denied())));
    assert_eq!(fixture.token.total_supply(), 0);
}

pub fn collateral_transfers_on_mint(fixture: &TestFixture) {
    let quantity = 10 * SCALAR_7;
    let owner_before = fixture.collateral.balance(&fixture.owner);
    let minter_before = fixture.collateral.balance(&fixture.minter.address);

    fixture.minter.mint(&fixture.owner, &quantity);

    assert_eq!(
        owner_before - fixture.collateral.balance(&fixture.owner),
        quantity
    );
    assert_eq!(
        fixture.collateral.balance(&fixture.minter.address) - minter_before,
        quantity
    );
}

pub fn repay_exists(fixture: &TestFixture) {
    assert_eq!(fixture.minter.repay_amount(&fixture.receiver), 0);
    assert_eq!(fixture.minter.repay_amount(&fixture.owner), 0);
}

pub fn open_loan_exists(fixture: &TestFixture) {
    assert_eq!(fixture.minter.open_loans(&fixture.receiver), (0, 0));
    assert_eq!(fixture.minter.open_loans(&fixture.owner), (0, 0));
}

/// Forked only
pub fn repay_amount_works(fixture: &TestFixture) {
    if !fixture.is_forked() {
        return;
    }
    fixture.minter.mint(&fixture.owner, &SCALAR_7);

    let expected = fixture
        .minter
        .price_usd()
        .fixed_mul_floor(FORKED_COLLATERAL_PCT, SCALAR_18)
        .unwrap();
    assert_rounded_eq(
        fixture.minter.repay_amount(&fixture.owner),
        7,
        expected,
        18,
        10,
    );
}

/// Forked only
pub fn open_loan_works(fixture: &TestFixture) {
    if !fixture.is_forked() {
        return;
    }
    let quantity = 10 * SCALAR_7;
    fixture.minter.mint(&fixture.owner, &quantity);

    let (liquidation_price, deposit) = fixture.minter.open_loans(&fixture.owner);
    let expected = fixture
        .minter
        .price_usd()
        .fixed_mul_floor(FORKED_COLLATERAL_PCT, SCALAR_18)
        .unwrap();
    assert_rounded_eq(liquidation_price, 18, expected, 18, 5);
    assert_eq!(deposit, quantity);
}

/// Forked only
pub fn repay_works(fixture: &TestFixture) {
    if !fixture.is_forked() {
        return;
    }
    let quantity = 10 * SCALAR_7;
    let token_before = fixture.token.balance(&fixture.owner);
    let collateral_before = fixture.collateral.balance(&fixture.owner);

    let minted = fixture.minter.mint(&fixture.owner, &quantity);
    assert_eq!(minted, fixture.expected_dy(quantity));

    fixture.approve_burn(&fixture.owner, minted);
    let returned = fixture.minter.repay(&fixture.owner);

    assert_eq!(returned, quantity);
    assert_eq!(fixture.token.balance(&fixture.owner), token_before);
    assert_eq!(fixture.collateral.balance(&fixture.owner), collateral_before);
    assert_eq!(fixture.minter.open_loans(&fixture.owner), (0, 0));
    assert_eq!(fixture.minter.repay_amount(&fixture.owner), 0);
}

/// Forked only
pub fn liquidate_event(fixture: &TestFixture) {
    if !fixture.is_forked() {
        return;
    }
    let e = &fixture.env;
    let quantity = 10 * SCALAR_7;
    let debt = fixture.minter.mint(&fixture.owner, &quantity);
    fixture.token.transfer(&fixture.owner, &fixture.alice, &debt);
    fixture.approve_burn(&fixture.alice, debt);

    // drop the price 30%, below the 80% liquidation price
    let price = fixture.minter.price_usd();
    let (liquidation_price, _) = fixture.minter.open_loans(&fixture.owner);
    let new_price = price.fixed_mul_floor(7, 10).unwrap() / PRICE_TO_7_DECIMALS;
    fixture.set_collateral_price(new_price);
    assert!(fixture.minter.price_usd() < liquidation_price);

    let alice_token_before = fixture.token.balance(&fixture.alice);
    let alice_collateral_before = fixture.collateral.balance(&fixture.alice);

    fixture.minter.liquidate(&fixture.alice, &fixture.owner);

    let (addr, topics, data) = e.events().all().last().unwrap();
    assert_eq!(addr, fixture.minter.address);
    assert_eq!(topics.len(), 3);
    assert_eq!(
        Symbol::from_val(e, &topics.get_unchecked(0)),
        Symbol::new(e, "liquidate")
    );
    assert_eq!(Address::from_val(e, &topics.get_unchecked(1)), fixture.owner);
    assert_eq!(Address::from_val(e, &topics.get_unchecked(2)), fixture.alice);
    let data = Vec::<Val>::from_val(e, &data);
    assert_eq!(i128::from_val(e, &data.get_unchecked(0)), debt);
    assert_eq!(i128::from_val(e, &data.get_unchecked(1)), quantity);

    assert_eq!(
        alice_token_before - fixture.token.balance(&fixture.alice),
        debt
    );
    assert_eq!(
        fixture.collateral.balance(&fixture.alice) - alice_collateral_before,
        quantity
    );
    assert_eq!(fixture.minter.open_loans(&fixture.owner), (0, 0));
}

pub fn permit_sets_allowance(fixture: &TestFixture) {
    let e = &fixture.env;
    let signer = permit::generate_signer();
    fixture
        .token
        .set_permit_signer(&fixture.owner, &permit::public_key(e, &signer));

    let value = 25 * SCALAR_7;
    let deadline = e.ledger().timestamp() + 60 * 60;
    let message = fixture.permit(&fixture.owner, &fixture.receiver, value, deadline);
    let digest = fixture.permit_digest(&message);
    assert_eq!(
        digest,
        fixture
            .token
            .permit_digest(&fixture.owner, &fixture.receiver, &value, &deadline)
    );

    fixture.token.permit(
        &fixture.owner,
        &fixture.receiver,
        &value,
        &deadline,
        &permit::sign(e, &signer, &digest),
    );

    assert_eq!(
        fixture.token.allowance(&fixture.owner, &fixture.receiver),
        value
    );
    assert_eq!(fixture.token.nonce(&fixture.owner), message.nonce + 1);
}

/// Prices older than the minter's max age block minting until a new price is published
pub fn stale_price_blocks_mint(fixture: &TestFixture) {
    let quantity = 10 * SCALAR_7;
    fixture.jump(MAX_PRICE_AGE + 1);

    let result = fixture.minter.try_mint(&fixture.owner, &quantity);
    assert_eq!(
        result.err(),
        Some(Ok(Error::from_contract_error(MinterError::StalePrice as u32)))
    );

    let price = fixture.minter.try_price_usd();
    assert!(price.is_err());

    fixture.set_collateral_price(fixture.collateral_price);
    assert_eq!(
        fixture.minter.mint(&fixture.owner, &quantity),
        fixture.expected_dy(quantity)
    );
}
