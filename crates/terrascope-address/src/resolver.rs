use serde::Serialize;
use terrascope_core::types::ChunkCoord;

use crate::create2::create2_address;
use crate::create3::{create_address, PROXY_DEPLOY_NONCE};
use crate::salt::chunk_salt;
use crate::types::{Address, CodeHash, Salt};

/// Init-code hash of the minimal CREATE3 proxy the world deploys chunks through.
pub const DEFAULT_PROXY_INIT_CODE_HASH: CodeHash = CodeHash([
    0x21, 0xc3, 0x5d, 0xbe, 0x1b, 0x34, 0x4a, 0x24, 0x88, 0xcf, 0x33, 0x21, 0xd6, 0xce, 0x54, 0x2f,
    0x8e, 0x9f, 0x30, 0x55, 0x44, 0xff, 0x09, 0xe4, 0x99, 0x3a, 0x62, 0x31, 0x9a, 0x49, 0x7c, 0x1f,
]);

/// Every intermediate of a chunk address derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkAddress {
    pub salt: Salt,
    /// CREATE2 proxy deployed by the world.
    pub proxy: Address,
    /// CREATE3 address holding the chunk's terrain bytecode.
    pub address: Address,
}

/// Derive the storage address of a chunk's terrain.
///
/// salt = pack(chunk); proxy = CREATE2(deployer, salt, proxy hash);
/// address = CREATE(proxy, nonce 1). No chain state is consulted.
pub fn resolve_chunk_address(
    deployer: &Address,
    chunk: ChunkCoord,
    init_code_hash: Option<&CodeHash>,
) -> ChunkAddress {
    let salt = chunk_salt(chunk);
    let proxy = create2_address(
        deployer,
        &salt,
        init_code_hash.unwrap_or(&DEFAULT_PROXY_INIT_CODE_HASH),
    );
    let address = create_address(&proxy, PROXY_DEPLOY_NONCE);
    log::debug!("chunk {chunk} -> proxy {proxy} -> {address}");
    ChunkAddress {
        salt,
        proxy,
        address,
    }
}
