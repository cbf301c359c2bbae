#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

use sep_40_oracle::{Asset, PriceData};
use soroban_sdk::{contract, contractclient, contractimpl, log, panic_with_error, Address, Env, Vec};

mod errors;
mod events;
mod storage;

pub use errors::PriceFeedError;
pub use events::PriceFeedEvents;

/// ### PriceFeed
///
/// An admin published price feed. Exposes the subset of the SEP-40 oracle interface
/// the minter reads from (`base`, `decimals`, `resolution`, `lastprice`).
#[contract]
pub struct PriceFeedContract;

#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Fetch the asset prices are quoted in
    fn base(e: Env) -> Asset;

    /// Fetch the number of decimals prices are published with
    fn decimals(e: Env) -> u32;

    /// Fetch the expected interval between price updates, in seconds
    fn resolution(e: Env) -> u32;

    /// Fetch the most recent price for an asset, if one was ever published
    ///
    /// ### Arguments
    /// * `asset` - The asset to fetch a price for
    fn lastprice(e: Env, asset: Asset) -> Option<PriceData>;

    /// Fetch the admin address
    fn admin(e: Env) -> Address;

    /// (Admin only) Publish a price for an asset at the current ledger timestamp
    ///
    /// ### Arguments
    /// * `asset` - The asset to publish a price for
    /// * `price` - The price, with `decimals` decimals
    ///
    /// ### Panics
    /// If the price is not positive
    fn set_price(e: Env, asset: Asset, price: i128);

    /// (Admin only) Publish prices for several assets at the current ledger timestamp
    ///
    /// ### Panics
    /// If the vectors differ in length or any price is not positive
    fn set_prices(e: Env, assets: Vec<Asset>, prices: Vec<i128>);

    /// (Admin only) Transfer the admin role
    fn set_admin(e: Env, new_admin: Address);
}

#[contractimpl]
impl PriceFeedContract {
    /// Construct the price feed
    ///
    /// ### Arguments
    /// * `admin` - The address allowed to publish prices
    /// * `base` - The asset prices are quoted in
    /// * `decimals` - The number of decimals prices are published with (at most 18)
    /// * `resolution` - The expected interval between price updates, in seconds
    pub fn __constructor(e: Env, admin: Address, base: Asset, decimals: u32, resolution: u32) {
        if decimals > 18 {
            panic_with_error!(&e, PriceFeedError::InvalidDecimals);
        }
        storage::set_admin(&e, &admin);
        storage::set_base(&e, &base);
        storage::set_decimals(&e, decimals);
        storage::set_resolution(&e, resolution);
    }
}

#[contractimpl]
impl PriceFeed for PriceFeedContract {
    fn base(e: Env) -> Asset {
        storage::get_base(&e)
    }

    fn decimals(e: Env) -> u32 {
        storage::get_decimals(&e)
    }

    fn resolution(e: Env) -> u32 {
        storage::get_resolution(&e)
    }

    fn lastprice(e: Env, asset: Asset) -> Option<PriceData> {
        storage::get_price(&e, &asset)
    }

    fn admin(e: Env) -> Address {
        storage::get_admin(&e)
    }

    fn set_price(e: Env, asset: Asset, price: i128) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        publish(&e, asset, price);
    }

    fn set_prices(e: Env, assets: Vec<Asset>, prices: Vec<i128>) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        if assets.len() != prices.len() {
            panic_with_error!(&e, PriceFeedError::InvalidInput);
        }
        for (asset, price) in assets.iter().zip(prices.iter()) {
            publish(&e, asset, price);
        }
    }

    fn set_admin(e: Env, new_admin: Address) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        storage::set_admin(&e, &new_admin);
        PriceFeedEvents::set_admin(&e, admin, new_admin);
    }
}

fn publish(e: &Env, asset: Asset, price: i128) {
    if price <= 0 {
        panic_with_error!(e, PriceFeedError::InvalidPrice);
    }
    let timestamp = e.ledger().timestamp();
    storage::set_price(e, &asset, &PriceData { price, timestamp });
    log!(e, "price published {} at {}", price, timestamp);
    PriceFeedEvents::set_price(e, asset, price, timestamp);
}
