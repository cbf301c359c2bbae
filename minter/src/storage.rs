use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

use crate::loan::Loan;

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger

const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

/// The minter configuration
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MinterConfig {
    /// The one-buck token minted against collateral
    pub token: Address,
    /// The asset accepted as collateral
    pub collateral: Address,
    /// The SEP-40 price feed quoting the collateral
    pub oracle: Address,
    /// The share of the deposited collateral's value minted (18 decimals)
    pub collateral_pct: i128,
    /// The oldest price, in seconds, the minter accepts
    pub max_price_age: u64,
}

/********** Storage Key Types **********/

const ADMIN_KEY: &str = "Admin";
const CONFIG_KEY: &str = "Config";

#[derive(Clone)]
#[contracttype]
pub enum MinterDataKey {
    Loan(Address),
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

pub fn get_config(e: &Env) -> MinterConfig {
    e.storage()
        .instance()
        .get::<Symbol, MinterConfig>(&Symbol::new(e, CONFIG_KEY))
        .unwrap_optimized()
}

pub fn set_config(e: &Env, config: &MinterConfig) {
    e.storage()
        .instance()
        .set::<Symbol, MinterConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

/********** Persistent Storage **********/

/// Fetch the open loan for `user`, if any
pub fn get_loan(e: &Env, user: &Address) -> Option<Loan> {
    let key = MinterDataKey::Loan(user.clone());
    let result = e.storage().persistent().get::<MinterDataKey, Loan>(&key);
    if result.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
    }
    result
}

pub fn set_loan(e: &Env, user: &Address, loan: &Loan) {
    let key = MinterDataKey::Loan(user.clone());
    e.storage()
        .persistent()
        .set::<MinterDataKey, Loan>(&key, loan);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

pub fn del_loan(e: &Env, user: &Address) {
    let key = MinterDataKey::Loan(user.clone());
    e.storage().persistent().remove(&key);
}
