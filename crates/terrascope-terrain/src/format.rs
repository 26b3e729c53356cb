use serde::Serialize;
use terrascope_core::constants::VOXELS_PER_CHUNK;

/// The only defined terrain format version.
pub const FORMAT_VERSION: u16 = 0;

/// Size of the payload header in bytes.
pub const HEADER_SIZE: usize = 4;

/// Size of a complete payload: header plus one byte per voxel.
pub const FULL_PAYLOAD_SIZE: usize = HEADER_SIZE + VOXELS_PER_CHUNK;

/// Header bytes as they appear on the wire. 4 bytes, no padding.
///
/// version is big-endian; biome and surface are opaque ids.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RawHeader {
    pub version: [u8; 2],
    pub biome: u8,
    pub surface: u8,
}

/// Decoded terrain header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerrainHeader {
    pub version: u16,
    pub biome: u8,
    pub surface: u8,
}

impl From<&RawHeader> for TerrainHeader {
    fn from(raw: &RawHeader) -> Self {
        Self {
            version: u16::from_be_bytes(raw.version),
            biome: raw.biome,
            surface: raw.surface,
        }
    }
}

/// Serialize a header and grid bytes into the wire layout.
///
/// `cells` may be shorter than a full chunk; the output is then a partial payload.
pub fn encode_payload(header: TerrainHeader, cells: &[u8]) -> Vec<u8> {
    let raw = RawHeader {
        version: header.version.to_be_bytes(),
        biome: header.biome,
        surface: header.surface,
    };
    let cells = &cells[..cells.len().min(VOXELS_PER_CHUNK)];
    let mut output = Vec::with_capacity(HEADER_SIZE + cells.len());
    output.extend_from_slice(bytemuck::bytes_of(&raw));
    output.extend_from_slice(cells);
    output
}
