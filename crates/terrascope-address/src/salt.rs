use terrascope_core::types::ChunkCoord;

use crate::types::Salt;

/// Pack a chunk coordinate into its 32-byte deployment salt.
///
/// Layout: 20 zero bytes, then x, y, z as big-endian u32 (each axis keeps its
/// low 32 bits, two's complement).
pub fn chunk_salt(chunk: ChunkCoord) -> Salt {
    let mut salt = [0u8; 32];
    salt[20..24].copy_from_slice(&(chunk.x as u32).to_be_bytes());
    salt[24..28].copy_from_slice(&(chunk.y as u32).to_be_bytes());
    salt[28..32].copy_from_slice(&(chunk.z as u32).to_be_bytes());
    Salt(salt)
}
