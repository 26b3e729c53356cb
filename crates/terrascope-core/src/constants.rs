//! Single source of truth for shared constants.
//! The chunk layout values are fixed by the on-chain terrain format.

/// Side length of a chunk in voxels.
pub const CHUNK_WIDTH: i32 = 16;

/// Total voxels per chunk (16^3).
pub const VOXELS_PER_CHUNK: usize = (CHUNK_WIDTH * CHUNK_WIDTH * CHUNK_WIDTH) as usize;

/// Block type 0: the payload did not cover this cell. Distinct from air.
pub const BLOCK_NO_DATA: u8 = 0;

/// Block type 1: explicitly explored air.
pub const BLOCK_AIR: u8 = 1;

/// Object type used by blueprints to outline the chunk envelope.
pub const BLUEPRINT_BOUNDARY_MARKER: u16 = 110;

/// Object type used by blueprints to clear an occupied cell.
pub const BLUEPRINT_CLEAR_TO_AIR: u16 = BLOCK_AIR as u16;
