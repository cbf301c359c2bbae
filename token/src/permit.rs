use soroban_sdk::{
    contracttype, log, panic_with_error, xdr::ToXdr, Address, Bytes, BytesN, Env, String,
};
use soroban_token_sdk::TokenUtils;

use crate::{errors::TokenError, events::TokenEvents, storage, validator::require_nonnegative};

/// Domain name permits are signed under
pub const PERMIT_NAME: &str = "one-buck";

/// Domain version permits are signed under
pub const PERMIT_VERSION: &str = "1.0";

/// A typed authorization allowing `spender` to spend `value` of `owner`s tokens, signed off-chain
/// by the key `owner` registered with `set_permit_signer`.
///
/// The signed payload is the sha256 hash of the XDR encoding of this struct.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PermitMessage {
    pub name: String,
    pub version: String,
    pub chain_id: BytesN<32>,
    pub verifying_contract: Address,
    pub owner: Address,
    pub spender: Address,
    pub value: i128,
    pub nonce: u64,
    pub deadline: u64,
}

impl PermitMessage {
    /// Build a permit bound to the current network and the token at `verifying_contract`
    pub fn new(
        e: &Env,
        verifying_contract: &Address,
        owner: &Address,
        spender: &Address,
        value: i128,
        nonce: u64,
        deadline: u64,
    ) -> Self {
        PermitMessage {
            name: String::from_str(e, PERMIT_NAME),
            version: String::from_str(e, PERMIT_VERSION),
            chain_id: e.ledger().network_id(),
            verifying_contract: verifying_contract.clone(),
            owner: owner.clone(),
            spender: spender.clone(),
            value,
            nonce,
            deadline,
        }
    }

    /// The hash a permit signer signs
    pub fn digest(&self, e: &Env) -> BytesN<32> {
        e.crypto().sha256(&self.clone().to_xdr(e)).to_bytes()
    }
}

/// Consume a signed permit, setting the allowance `spender` has over `owner`s tokens
///
/// ### Panics
/// If no signer is registered for `owner`, the deadline has passed, or the signature does not
/// match the permit for `owner`s current nonce
pub fn execute_permit(
    e: &Env,
    owner: &Address,
    spender: &Address,
    value: i128,
    deadline: u64,
    signature: &BytesN<64>,
) {
    require_nonnegative(e, value);
    if e.ledger().timestamp() > deadline {
        panic_with_error!(e, TokenError::PermitExpired);
    }
    let public_key = match storage::get_permit_signer(e, owner) {
        Some(key) => key,
        None => panic_with_error!(e, TokenError::PermitSignerNotSet),
    };

    let nonce = storage::get_nonce(e, owner);
    let message = PermitMessage::new(
        e,
        &e.current_contract_address(),
        owner,
        spender,
        value,
        nonce,
        deadline,
    );
    let digest = Bytes::from_array(e, &message.digest(e).to_array());
    e.crypto().ed25519_verify(&public_key, &digest, signature);

    storage::set_nonce(e, owner, nonce + 1);
    let expiration_ledger = e.ledger().sequence() + storage::PERMIT_ALLOWANCE_LEDGERS;
    storage::set_allowance(e, owner, spender, value, expiration_ledger);

    log!(e, "permit consumed nonce {}", nonce);
    TokenUtils::new(e)
        .events()
        .approve(owner.clone(), spender.clone(), value, expiration_ledger);
    TokenEvents::permit(e, owner.clone(), spender.clone(), value, nonce);
}
