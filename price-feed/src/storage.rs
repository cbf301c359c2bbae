use sep_40_oracle::{Asset, PriceData};
use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger

const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const LEDGER_THRESHOLD_PRICE: u32 = ONE_DAY_LEDGERS * 90; // ~ 90 days
const LEDGER_BUMP_PRICE: u32 = LEDGER_THRESHOLD_PRICE + 10 * ONE_DAY_LEDGERS; // ~ 100 days

/********** Storage Keys **********/

const ADMIN_KEY: &str = "Admin";
const BASE_KEY: &str = "Base";
const DECIMALS_KEY: &str = "Decimals";
const RESOLUTION_KEY: &str = "Res";

#[derive(Clone)]
#[contracttype]
pub enum PriceFeedDataKey {
    Price(Asset),
}

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/********** Instance Storage **********/

pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), admin);
}

pub fn get_base(e: &Env) -> Asset {
    e.storage()
        .instance()
        .get::<Symbol, Asset>(&Symbol::new(e, BASE_KEY))
        .unwrap_optimized()
}

pub fn set_base(e: &Env, base: &Asset) {
    e.storage()
        .instance()
        .set::<Symbol, Asset>(&Symbol::new(e, BASE_KEY), base);
}

pub fn get_decimals(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, DECIMALS_KEY))
        .unwrap_optimized()
}

pub fn set_decimals(e: &Env, decimals: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, DECIMALS_KEY), &decimals);
}

pub fn get_resolution(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, RESOLUTION_KEY))
        .unwrap_optimized()
}

pub fn set_resolution(e: &Env, resolution: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, RESOLUTION_KEY), &resolution);
}

/********** Persistent Storage **********/

/// Fetch the last published price for an asset, if any
pub fn get_price(e: &Env, asset: &Asset) -> Option<PriceData> {
    let key = PriceFeedDataKey::Price(asset.clone());
    let result = e.storage().persistent().get::<PriceFeedDataKey, PriceData>(&key);
    if result.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_PRICE, LEDGER_BUMP_PRICE);
    }
    result
}

pub fn set_price(e: &Env, asset: &Asset, price_data: &PriceData) {
    let key = PriceFeedDataKey::Price(asset.clone());
    e.storage()
        .persistent()
        .set::<PriceFeedDataKey, PriceData>(&key, price_data);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_PRICE, LEDGER_BUMP_PRICE);
}
