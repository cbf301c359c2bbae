use sep_40_oracle::Asset;
use soroban_sdk::{Address, Env, Symbol};

pub struct PriceFeedEvents {}

impl PriceFeedEvents {
    /// Emitted when a price is published
    ///
    /// - topics - `["set_price", asset: Asset]`
    /// - data - `[price: i128, timestamp: u64]`
    pub fn set_price(e: &Env, asset: Asset, price: i128, timestamp: u64) {
        let topics = (Symbol::new(e, "set_price"), asset);
        e.events().publish(topics, (price, timestamp));
    }

    /// Emitted when the admin is changed
    ///
    /// - topics - `["set_admin", admin: Address]`
    /// - data - `new_admin: Address`
    pub fn set_admin(e: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(e, "set_admin"), admin);
        e.events().publish(topics, new_admin);
    }
}
