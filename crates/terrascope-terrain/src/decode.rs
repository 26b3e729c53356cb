use terrascope_core::constants::VOXELS_PER_CHUNK;

use crate::compat;
use crate::error::TerrainError;
use crate::format::*;
use crate::grid::TerrainGrid;

/// Parsed terrain payload.
#[derive(Debug, Clone)]
pub struct DecodedChunk {
    pub header: TerrainHeader,
    pub grid: TerrainGrid,
    /// Grid cells actually covered by the payload (<= 4096).
    pub present_cells: usize,
}

impl DecodedChunk {
    /// Whether the payload carried every cell of the chunk.
    pub fn is_complete(&self) -> bool {
        self.present_cells == VOXELS_PER_CHUNK
    }
}

/// Read and validate the 4-byte header.
pub fn decode_header(payload: &[u8]) -> Result<TerrainHeader, TerrainError> {
    if payload.len() < HEADER_SIZE {
        return Err(TerrainError::MalformedPayload { len: payload.len() });
    }
    let raw: &RawHeader = bytemuck::from_bytes(&payload[..HEADER_SIZE]);
    compat::validate_header(raw)
}

/// Read the block grid following the header.
///
/// Never fails: cells past the end of the payload decode as 0 (no data).
pub fn decode_grid(payload: &[u8]) -> TerrainGrid {
    TerrainGrid::from_cells(payload.get(HEADER_SIZE..).unwrap_or(&[]))
}

/// Decode a raw payload into header and grid.
pub fn decode(payload: &[u8]) -> Result<DecodedChunk, TerrainError> {
    let header = decode_header(payload)?;
    let grid = decode_grid(payload);
    let present_cells = (payload.len() - HEADER_SIZE).min(VOXELS_PER_CHUNK);

    if present_cells < VOXELS_PER_CHUNK {
        log::warn!(
            "partial terrain payload: {present_cells} of {VOXELS_PER_CHUNK} cells present"
        );
    }
    if payload.len() > FULL_PAYLOAD_SIZE {
        log::debug!(
            "ignoring {} trailing bytes after terrain grid",
            payload.len() - FULL_PAYLOAD_SIZE
        );
    }

    Ok(DecodedChunk {
        header,
        grid,
        present_cells,
    })
}

/// Decode a hex payload as returned by the chain, with or without `0x`.
///
/// `0x` alone means the address holds no bytecode.
pub fn decode_hex(text: &str) -> Result<DecodedChunk, TerrainError> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err(TerrainError::ChunkNotExplored);
    }
    let bytes = hex::decode(digits).map_err(|e| TerrainError::InvalidHex(e.to_string()))?;
    decode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes() -> Vec<u8> {
        vec![0x00, 0x00, 0x05, 0x15]
    }

    fn x_pattern_payload() -> Vec<u8> {
        let mut payload = header_bytes();
        for x in 0..16u8 {
            payload.extend(std::iter::repeat(x).take(256));
        }
        payload
    }

    #[test]
    fn test_decode_header_fields() {
        let header = decode_header(&header_bytes()).expect("valid header");
        assert_eq!(
            header,
            TerrainHeader {
                version: 0,
                biome: 5,
                surface: 0x15
            }
        );
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let result = decode(&[0x00, 0x01, 0, 0, 1, 1, 1]);
        assert!(matches!(result, Err(TerrainError::UnsupportedVersion(1))));
    }

    #[test]
    fn test_short_payload_rejected() {
        assert_eq!(
            decode_header(&[0, 0, 1]),
            Err(TerrainError::MalformedPayload { len: 3 })
        );
        assert!(matches!(
            decode(&[]),
            Err(TerrainError::MalformedPayload { len: 0 })
        ));
    }

    #[test]
    fn test_grid_indexing() {
        let chunk = decode(&x_pattern_payload()).expect("valid payload");
        assert!(chunk.is_complete());
        for x in 0..16 {
            for y in 0..16 {
                for z in 0..16 {
                    assert_eq!(chunk.grid.get(x, y, z), x as u8, "({x},{y},{z})");
                }
            }
        }
    }

    #[test]
    fn test_grid_axis_order() {
        let mut payload = header_bytes();
        payload.extend(vec![0u8; VOXELS_PER_CHUNK]);
        payload[4 + 2 * 256 + 3 * 16 + 4] = 99;
        let grid = decode_grid(&payload);
        assert_eq!(grid.get(2, 3, 4), 99);
        assert_eq!(grid.get(4, 3, 2), 0);
    }

    #[test]
    fn test_partial_payload_pads_with_no_data() {
        let mut payload = header_bytes();
        payload.extend(vec![1u8; 300]);
        let chunk = decode(&payload).expect("partial payload decodes");
        assert_eq!(chunk.present_cells, 300);
        assert!(!chunk.is_complete());
        assert_eq!(chunk.grid.get(0, 15, 15), 1);
        assert_eq!(chunk.grid.get(1, 2, 11), 1);
        assert_eq!(chunk.grid.get(1, 2, 12), 0);
        assert_eq!(chunk.grid.get(15, 15, 15), 0);
    }

    #[test]
    fn test_header_only_payload_is_all_no_data() {
        let chunk = decode(&header_bytes()).expect("header-only payload decodes");
        assert_eq!(chunk.present_cells, 0);
        assert_eq!(chunk.grid, TerrainGrid::empty());
    }

    #[test]
    fn test_decode_grid_never_fails_on_short_input() {
        assert_eq!(decode_grid(&[0, 1]), TerrainGrid::empty());
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut payload = x_pattern_payload();
        payload.extend_from_slice(&[0xaa; 8]);
        let chunk = decode(&payload).expect("valid payload");
        assert_eq!(chunk.present_cells, VOXELS_PER_CHUNK);
        assert_eq!(chunk.grid.get(15, 15, 15), 15);
    }

    #[test]
    fn test_decode_hex_with_prefix() {
        let chunk = decode_hex("0x0000020301040520").expect("valid hex");
        assert_eq!(chunk.header.biome, 2);
        assert_eq!(chunk.header.surface, 3);
        assert_eq!(chunk.grid.get(0, 0, 0), 1);
        assert_eq!(chunk.grid.get(0, 0, 3), 0x20);
        assert_eq!(chunk.present_cells, 4);
    }

    #[test]
    fn test_decode_hex_prefix_case_insensitive() {
        let upper = decode_hex("0X0000020301040520").expect("uppercase prefix");
        let bare = decode_hex("0000020301040520").expect("no prefix");
        assert_eq!(upper.header, bare.header);
        assert_eq!(upper.grid.get(0, 0, 3), 0x20);
        assert_eq!(upper.present_cells, 4);
    }

    #[test]
    fn test_decode_hex_not_explored() {
        assert!(matches!(decode_hex("0x"), Err(TerrainError::ChunkNotExplored)));
        assert!(matches!(decode_hex("0X"), Err(TerrainError::ChunkNotExplored)));
        assert!(matches!(decode_hex(""), Err(TerrainError::ChunkNotExplored)));
    }

    #[test]
    fn test_decode_hex_invalid_digits() {
        assert!(matches!(
            decode_hex("0x00zz"),
            Err(TerrainError::InvalidHex(_))
        ));
    }
}
