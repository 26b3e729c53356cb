use crate::hash::keccak256;
use crate::types::Address;

/// Nonce of the proxy's one and only deployment.
pub const PROXY_DEPLOY_NONCE: u64 = 1;

/// Contract-creation address: `keccak256(rlp([sender, nonce]))[12..]`.
pub fn create_address(sender: &Address, nonce: u64) -> Address {
    let hash = keccak256(&rlp_sender_nonce(sender, nonce));
    Address::from_hash_tail(&hash)
}

/// RLP encoding of the two-item list `[sender, nonce]`.
///
/// Only what contract creation needs: a 20-byte string and an unsigned
/// integer. The payload never exceeds 55 bytes, so the short list form applies.
fn rlp_sender_nonce(sender: &Address, nonce: u64) -> Vec<u8> {
    let mut payload = Vec::with_capacity(30);
    payload.push(0x80 + 20);
    payload.extend_from_slice(sender.as_bytes());
    rlp_append_uint(&mut payload, nonce);

    let mut out = Vec::with_capacity(payload.len() + 1);
    out.push(0xc0 + payload.len() as u8);
    out.extend_from_slice(&payload);
    out
}

fn rlp_append_uint(out: &mut Vec<u8>, value: u64) {
    match value {
        0 => out.push(0x80),
        1..=0x7f => out.push(value as u8),
        _ => {
            let bytes = value.to_be_bytes();
            let skip = bytes.iter().take_while(|b| **b == 0).count();
            out.push(0x80 + (8 - skip) as u8);
            out.extend_from_slice(&bytes[skip..]);
        }
    }
}
