use crate::{
    errors::TokenError,
    events::TokenEvents,
    permit::{self, PermitMessage},
    storage,
    validator::require_nonnegative,
};
use soroban_sdk::{
    contract, contractclient, contractimpl, log, panic_with_error, Address, BytesN, Env, String,
};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

/// ### OneBuck
///
/// A SEP-41 token whose supply can only be created by a single minter. The owner of the token
/// chooses the minter.
#[contract]
pub struct OneBuckContract;

#[contractclient(name = "OneBuckClient")]
pub trait OneBuck {
    /********** SEP-41 **********/

    /// Returns the allowance for `spender` to transfer from `from`
    fn allowance(e: Env, from: Address, spender: Address) -> i128;

    /// Set the allowance by `amount` for `spender` to transfer/burn from `from`
    ///
    /// ### Arguments
    /// * `from` - The address holding the balance of tokens to be drawn from
    /// * `spender` - The address being authorized to spend the tokens held by `from`
    /// * `amount` - The tokens to be made available to `spender`
    /// * `expiration_ledger` - The ledger number where this allowance expires
    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    /// Returns the balance of `id`
    fn balance(e: Env, id: Address) -> i128;

    /// Transfer `amount` from `from` to `to`
    fn transfer(e: Env, from: Address, to: Address, amount: i128);

    /// Transfer `amount` from `from` to `to`, consuming the allowance of `spender`
    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128);

    /// Burn `amount` from `from`
    fn burn(e: Env, from: Address, amount: i128);

    /// Burn `amount` from `from`, consuming the allowance of `spender`
    fn burn_from(e: Env, spender: Address, from: Address, amount: i128);

    /// Returns the number of decimals used to represent amounts of this token
    fn decimals(e: Env) -> u32;

    /// Returns the name for this token
    fn name(e: Env) -> String;

    /// Returns the symbol for this token
    fn symbol(e: Env) -> String;

    /********** Supply **********/

    /// Returns the total amount of tokens in circulation
    fn total_supply(e: Env) -> i128;

    /// Returns the owner of the token
    fn owner(e: Env) -> Address;

    /// Returns the only address allowed to mint
    fn minter(e: Env) -> Address;

    /// (Owner only) Hand minting rights to `new_minter`
    ///
    /// ### Arguments
    /// * `caller` - The address requesting the change, must be the owner
    /// * `new_minter` - The new minter
    ///
    /// ### Panics
    /// With `AccessDenied` if `caller` is not the owner
    fn set_minter(e: Env, caller: Address, new_minter: Address);

    /// (Minter only) Mint `amount` tokens to `to`
    ///
    /// ### Arguments
    /// * `caller` - The address minting, must be the minter
    /// * `to` - The address receiving the tokens
    /// * `amount` - The amount of tokens to mint
    ///
    /// ### Panics
    /// With `AccessDenied` if `caller` is not the minter
    fn mint(e: Env, caller: Address, to: Address, amount: i128);

    /********** Permit **********/

    /// Register the ed25519 key that signs permits on behalf of `owner`
    fn set_permit_signer(e: Env, owner: Address, public_key: BytesN<32>);

    /// Returns the nonce the next permit for `owner` must be signed with
    fn nonce(e: Env, owner: Address) -> u64;

    /// Returns the hash a permit signer signs for the given permit at `owner`s current nonce
    fn permit_digest(e: Env, owner: Address, spender: Address, value: i128, deadline: u64)
        -> BytesN<32>;

    /// Set the allowance for `spender` over `owner`s tokens from a signed permit. Can be
    /// submitted by anyone.
    ///
    /// ### Arguments
    /// * `owner` - The address whose tokens can be spent
    /// * `spender` - The address allowed to spend them
    /// * `value` - The allowance
    /// * `deadline` - The last ledger timestamp the permit can be used at
    /// * `signature` - The ed25519 signature of `permit_digest` by `owner`s permit signer
    ///
    /// ### Panics
    /// If the permit is expired, no signer is registered, or the signature is invalid
    fn permit(
        e: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
        signature: BytesN<64>,
    );
}

#[contractimpl]
impl OneBuckContract {
    /// Construct the token. The owner starts out as the minter.
    ///
    /// ### Arguments
    /// * `owner` - The owner of the token
    /// * `decimal` - The decimals of the token
    /// * `name` - The name of the token
    /// * `symbol` - The symbol of the token
    pub fn __constructor(e: Env, owner: Address, decimal: u32, name: String, symbol: String) {
        storage::set_owner(&e, &owner);
        storage::set_minter(&e, &owner);
        storage::set_total_supply(&e, 0);
        TokenUtils::new(&e).metadata().set_metadata(&TokenMetadata {
            decimal,
            name,
            symbol,
        });
    }
}

#[contractimpl]
impl OneBuck for OneBuckContract {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_allowance(&e, &from, &spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        require_nonnegative(&e, amount);
        storage::extend_instance(&e);

        storage::set_allowance(&e, &from, &spender, amount, expiration_ledger);
        TokenUtils::new(&e)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_balance(&e, &id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        require_nonnegative(&e, amount);
        storage::extend_instance(&e);

        spend_balance(&e, &from, amount);
        receive_balance(&e, &to, amount);
        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        require_nonnegative(&e, amount);
        storage::extend_instance(&e);

        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, &from, amount);
        receive_balance(&e, &to, amount);
        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();
        require_nonnegative(&e, amount);
        storage::extend_instance(&e);

        spend_balance(&e, &from, amount);
        reduce_supply(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        require_nonnegative(&e, amount);
        storage::extend_instance(&e);

        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, &from, amount);
        reduce_supply(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn decimals(e: Env) -> u32 {
        TokenUtils::new(&e).metadata().get_metadata().decimal
    }

    fn name(e: Env) -> String {
        TokenUtils::new(&e).metadata().get_metadata().name
    }

    fn symbol(e: Env) -> String {
        TokenUtils::new(&e).metadata().get_metadata().symbol
    }

    fn total_supply(e: Env) -> i128 {
        storage::get_total_supply(&e)
    }

    fn owner(e: Env) -> Address {
        storage::get_owner(&e)
    }

    fn minter(e: Env) -> Address {
        storage::get_minter(&e)
    }

    fn set_minter(e: Env, caller: Address, new_minter: Address) {
        caller.require_auth();
        storage::extend_instance(&e);
        let owner = storage::get_owner(&e);
        if caller != owner {
            log!(&e, "Access is denied.");
            panic_with_error!(&e, TokenError::AccessDenied);
        }

        storage::set_minter(&e, &new_minter);
        TokenEvents::set_minter(&e, owner, new_minter);
    }

    fn mint(e: Env, caller: Address, to: Address, amount: i128) {
        caller.require_auth();
        require_nonnegative(&e, amount);
        storage::extend_instance(&e);
        if caller != storage::get_minter(&e) {
            log!(&e, "Access is denied.");
            panic_with_error!(&e, TokenError::AccessDenied);
        }

        receive_balance(&e, &to, amount);
        let supply = storage::get_total_supply(&e)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&e, TokenError::OverflowError));
        storage::set_total_supply(&e, supply);
        log!(&e, "minted {} total supply {}", amount, supply);
        TokenUtils::new(&e).events().mint(caller, to, amount);
    }

    fn set_permit_signer(e: Env, owner: Address, public_key: BytesN<32>) {
        owner.require_auth();
        storage::extend_instance(&e);

        storage::set_permit_signer(&e, &owner, &public_key);
        TokenEvents::set_permit_signer(&e, owner, public_key);
    }

    fn nonce(e: Env, owner: Address) -> u64 {
        storage::get_nonce(&e, &owner)
    }

    fn permit_digest(
        e: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
    ) -> BytesN<32> {
        let nonce = storage::get_nonce(&e, &owner);
        PermitMessage::new(
            &e,
            &e.current_contract_address(),
            &owner,
            &spender,
            value,
            nonce,
            deadline,
        )
        .digest(&e)
    }

    fn permit(
        e: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
        signature: BytesN<64>,
    ) {
        storage::extend_instance(&e);
        permit::execute_permit(&e, &owner, &spender, value, deadline, &signature);
    }
}

/********** Balance Helpers **********/

fn spend_balance(e: &Env, from: &Address, amount: i128) {
    let balance = storage::get_balance(e, from);
    if balance < amount {
        panic_with_error!(e, TokenError::BalanceError);
    }
    storage::set_balance(e, from, balance - amount);
}

fn receive_balance(e: &Env, to: &Address, amount: i128) {
    let balance = storage::get_balance(e, to)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(e, TokenError::OverflowError));
    storage::set_balance(e, to, balance);
}

fn spend_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = storage::get_allowance(e, from, spender);
    if allowance.amount < amount {
        panic_with_error!(e, TokenError::AllowanceError);
    }
    if amount > 0 {
        storage::set_allowance(
            e,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}

fn reduce_supply(e: &Env, amount: i128) {
    let supply = storage::get_total_supply(e);
    storage::set_total_supply(e, supply - amount);
}
