use soroban_sdk::{Address, BytesN, Env, Symbol};

pub struct TokenEvents {}

impl TokenEvents {
    /// Emitted when the owner hands minting rights to a new address
    ///
    /// - topics - `["set_minter", owner: Address]`
    /// - data - `new_minter: Address`
    ///
    /// ### Arguments
    /// * owner - The owner of the token
    /// * new_minter - The new minter of the token
    pub fn set_minter(e: &Env, owner: Address, new_minter: Address) {
        let topics = (Symbol::new(e, "set_minter"), owner);
        e.events().publish(topics, new_minter);
    }

    /// Emitted when an account registers the key it signs permits with
    ///
    /// - topics - `["set_permit_signer", owner: Address]`
    /// - data - `public_key: BytesN<32>`
    pub fn set_permit_signer(e: &Env, owner: Address, public_key: BytesN<32>) {
        let topics = (Symbol::new(e, "set_permit_signer"), owner);
        e.events().publish(topics, public_key);
    }

    /// Emitted when a signed permit is consumed
    ///
    /// - topics - `["permit", owner: Address, spender: Address]`
    /// - data - `[value: i128, nonce: u64]`
    ///
    /// ### Arguments
    /// * owner - The account whose tokens can now be spent
    /// * spender - The account allowed to spend them
    /// * value - The allowance granted
    /// * nonce - The nonce consumed by the permit
    pub fn permit(e: &Env, owner: Address, spender: Address, value: i128, nonce: u64) {
        let topics = (Symbol::new(e, "permit"), owner, spender);
        e.events().publish(topics, (value, nonce));
    }
}
