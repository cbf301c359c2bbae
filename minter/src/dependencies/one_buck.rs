use soroban_sdk::{contractclient, Address, Env};

/// The part of the one-buck token interface beyond SEP-41 the minter calls into
#[allow(dead_code)]
#[contractclient(name = "OneBuckMintClient")]
pub trait OneBuckMint {
    fn mint(e: Env, caller: Address, to: Address, amount: i128);
}
