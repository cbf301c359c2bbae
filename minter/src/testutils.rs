#![cfg(test)]

use crate::{constants::SCALAR_18, MinterClient, MinterContract};
use one_buck_token::{OneBuckClient, OneBuckContract};
use price_feed::{PriceFeedClient, PriceFeedContract};
use sep_40_oracle::Asset;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env, String, Symbol,
};

pub(crate) const MAX_PRICE_AGE: u64 = 24 * 60 * 60;

/// The contracts a minter needs, wired together
pub(crate) struct MinterTestEnv<'a> {
    pub admin: Address,
    pub minter: MinterClient<'a>,
    pub token: OneBuckClient<'a>,
    pub collateral: TokenClient<'a>,
    pub collateral_admin: StellarAssetClient<'a>,
    pub oracle: PriceFeedClient<'a>,
}

impl MinterTestEnv<'_> {
    /// Publish a collateral price with 7 decimals
    pub fn set_price(&self, price: i128) {
        self.oracle
            .set_price(&Asset::Stellar(self.collateral.address.clone()), &price);
    }

    /// Mint `amount` collateral to `user` and approve the minter to take it
    pub fn fund(&self, e: &Env, user: &Address, amount: i128) {
        self.collateral_admin.mint(user, &amount);
        self.collateral.approve(
            user,
            &self.minter.address,
            &amount,
            &(e.ledger().sequence() + 1000),
        );
    }

    /// Approve the minter to burn `amount` one-buck from `user`
    pub fn approve_burn(&self, e: &Env, user: &Address, amount: i128) {
        self.token.approve(
            user,
            &self.minter.address,
            &amount,
            &(e.ledger().sequence() + 1000),
        );
    }
}

/// Create a minter with a 50% collateral ratio, a one-buck token it can mint, a collateral SAC,
/// and a price feed quoting the collateral at $1
pub(crate) fn create_minter<'a>(e: &Env) -> MinterTestEnv<'a> {
    e.ledger().set_timestamp(1_700_000_000);
    let admin = Address::generate(e);

    let collateral_sac = e.register_stellar_asset_contract_v2(admin.clone());
    let collateral_id = collateral_sac.address();

    let oracle_id = e.register(
        PriceFeedContract {},
        (
            admin.clone(),
            Asset::Other(Symbol::new(e, "USD")),
            7u32,
            300u32,
        ),
    );
    let token_id = e.register(
        OneBuckContract {},
        (
            admin.clone(),
            7u32,
            String::from_str(e, "one-buck"),
            String::from_str(e, "BUCK"),
        ),
    );
    let minter_id = e.register(
        MinterContract {},
        (
            admin.clone(),
            token_id.clone(),
            collateral_id.clone(),
            oracle_id.clone(),
            SCALAR_18 / 2,
            MAX_PRICE_AGE,
        ),
    );

    let env = MinterTestEnv {
        admin: admin.clone(),
        minter: MinterClient::new(e, &minter_id),
        token: OneBuckClient::new(e, &token_id),
        collateral: TokenClient::new(e, &collateral_id),
        collateral_admin: StellarAssetClient::new(e, &collateral_id),
        oracle: PriceFeedClient::new(e, &oracle_id),
    };
    env.token.set_minter(&admin, &minter_id);
    env.set_price(1_0000000);
    env
}
