use soroban_sdk::{
    contracttype, panic_with_error, unwrap::UnwrapOptimized, Address, BytesN, Env, Symbol,
};

use crate::errors::TokenError;

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger

const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/// Number of ledgers an allowance created through `permit` stays live for
pub const PERMIT_ALLOWANCE_LEDGERS: u32 = ONE_DAY_LEDGERS * 30;

/********** Storage Types **********/

#[derive(Clone)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

/********** Storage Key Types **********/

const OWNER_KEY: &str = "Owner";
const MINTER_KEY: &str = "Minter";
const SUPPLY_KEY: &str = "Supply";

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum TokenDataKey {
    Allowance(AllowanceDataKey),
    Balance(Address),
    Nonce(Address),
    Signer(Address),
}

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/********** Instance Storage **********/

/// Fetch the owner of the token
pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, OWNER_KEY))
        .unwrap_optimized()
}

/// Set the owner of the token
pub fn set_owner(e: &Env, owner: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, OWNER_KEY), owner);
}

/// Fetch the only address allowed to mint
pub fn get_minter(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, MINTER_KEY))
        .unwrap_optimized()
}

/// Set the only address allowed to mint
pub fn set_minter(e: &Env, minter: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, MINTER_KEY), minter);
}

pub fn get_total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, SUPPLY_KEY))
        .unwrap_or(0)
}

pub fn set_total_supply(e: &Env, supply: i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, SUPPLY_KEY), &supply);
}

/********** Persistent Storage **********/

pub fn get_balance(e: &Env, id: &Address) -> i128 {
    let key = TokenDataKey::Balance(id.clone());
    if let Some(balance) = e.storage().persistent().get::<TokenDataKey, i128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
        balance
    } else {
        0
    }
}

pub fn set_balance(e: &Env, id: &Address, balance: i128) {
    let key = TokenDataKey::Balance(id.clone());
    e.storage()
        .persistent()
        .set::<TokenDataKey, i128>(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Fetch the next permit nonce for `owner`
pub fn get_nonce(e: &Env, owner: &Address) -> u64 {
    let key = TokenDataKey::Nonce(owner.clone());
    e.storage()
        .persistent()
        .get::<TokenDataKey, u64>(&key)
        .unwrap_or(0)
}

pub fn set_nonce(e: &Env, owner: &Address, nonce: u64) {
    let key = TokenDataKey::Nonce(owner.clone());
    e.storage().persistent().set::<TokenDataKey, u64>(&key, &nonce);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Fetch the ed25519 key allowed to sign permits for `owner`
pub fn get_permit_signer(e: &Env, owner: &Address) -> Option<BytesN<32>> {
    let key = TokenDataKey::Signer(owner.clone());
    e.storage()
        .persistent()
        .get::<TokenDataKey, BytesN<32>>(&key)
}

pub fn set_permit_signer(e: &Env, owner: &Address, public_key: &BytesN<32>) {
    let key = TokenDataKey::Signer(owner.clone());
    e.storage()
        .persistent()
        .set::<TokenDataKey, BytesN<32>>(&key, public_key);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/********** Temporary Storage **********/

/// Fetch the allowance `spender` has over `from`s tokens. Expired allowances read as zero.
pub fn get_allowance(e: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = TokenDataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match e
        .storage()
        .temporary()
        .get::<TokenDataKey, AllowanceValue>(&key)
    {
        Some(allowance) if allowance.expiration_ledger >= e.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

/// Set the allowance `spender` has over `from`s tokens
///
/// ### Panics
/// If a non-zero allowance is set with an expiration ledger in the past
pub fn set_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    if amount > 0 && expiration_ledger < e.ledger().sequence() {
        panic_with_error!(e, TokenError::InvalidExpiration);
    }
    let key = TokenDataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    e.storage().temporary().set::<TokenDataKey, AllowanceValue>(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );
    if amount > 0 {
        let live_for = expiration_ledger - e.ledger().sequence();
        e.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}
