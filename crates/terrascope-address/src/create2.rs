use crate::hash::keccak256_concat;
use crate::types::{Address, CodeHash, Salt};

/// Deterministic deployment address:
/// `keccak256(0xff ++ deployer ++ salt ++ init_code_hash)[12..]`.
pub fn create2_address(deployer: &Address, salt: &Salt, init_code_hash: &CodeHash) -> Address {
    let hash = keccak256_concat(&[
        &[0xff],
        deployer.as_bytes(),
        salt.as_bytes(),
        init_code_hash.as_bytes(),
    ]);
    Address::from_hash_tail(&hash)
}
