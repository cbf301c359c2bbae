use ed25519_dalek::{Signer, SigningKey};
use soroban_sdk::{BytesN, Env};

/// Generate a random permit signing key
pub fn generate_signer() -> SigningKey {
    SigningKey::from_bytes(&rand::random::<[u8; 32]>())
}

/// The public key to register with `set_permit_signer`
pub fn public_key(e: &Env, signer: &SigningKey) -> BytesN<32> {
    BytesN::from_array(e, &signer.verifying_key().to_bytes())
}

/// Sign a permit digest
pub fn sign(e: &Env, signer: &SigningKey, digest: &BytesN<32>) -> BytesN<64> {
    BytesN::from_array(e, &signer.sign(&digest.to_array()).to_bytes())
}
