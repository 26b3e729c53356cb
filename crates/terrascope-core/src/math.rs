use std::ops::RangeInclusive;

use crate::constants::CHUNK_WIDTH;
use crate::types::{ChunkCoord, VoxelCoord};
use glam::IVec3;

/// Convert a voxel coordinate to its containing chunk coordinate.
///
/// Uses floor division, so voxel -1 lands in chunk -1 rather than chunk 0.
pub fn voxel_to_chunk(voxel: VoxelCoord) -> ChunkCoord {
    IVec3::new(
        voxel.x.div_euclid(CHUNK_WIDTH),
        voxel.y.div_euclid(CHUNK_WIDTH),
        voxel.z.div_euclid(CHUNK_WIDTH),
    )
}

/// Convert a chunk coordinate to the voxel at its minimum corner.
///
/// Wraps on i32 overflow; chunk coordinates beyond ±i32::MAX / 16 have no
/// representable origin.
pub fn chunk_to_voxel(chunk: ChunkCoord) -> VoxelCoord {
    IVec3::new(
        chunk.x.wrapping_mul(CHUNK_WIDTH),
        chunk.y.wrapping_mul(CHUNK_WIDTH),
        chunk.z.wrapping_mul(CHUNK_WIDTH),
    )
}

/// Convert a voxel coordinate to its offset within the containing chunk.
/// Every component is in [0, CHUNK_WIDTH).
pub fn voxel_to_local(voxel: VoxelCoord) -> IVec3 {
    IVec3::new(
        voxel.x.rem_euclid(CHUNK_WIDTH),
        voxel.y.rem_euclid(CHUNK_WIDTH),
        voxel.z.rem_euclid(CHUNK_WIDTH),
    )
}

/// Convert a chunk origin plus local offset back to voxel-space.
pub fn local_to_voxel(origin: VoxelCoord, local: IVec3) -> VoxelCoord {
    IVec3::new(
        origin.x.wrapping_add(local.x),
        origin.y.wrapping_add(local.y),
        origin.z.wrapping_add(local.z),
    )
}

/// World Y values covered by the chunk containing `y`.
pub fn chunk_y_range(y: i32) -> RangeInclusive<i32> {
    let min = y.div_euclid(CHUNK_WIDTH).wrapping_mul(CHUNK_WIDTH);
    min..=min.wrapping_add(CHUNK_WIDTH - 1)
}

/// Flat index of a local cell in the X-major, then Y, then Z grid layout.
#[inline]
pub fn grid_index(x: usize, y: usize, z: usize) -> usize {
    let w = CHUNK_WIDTH as usize;
    x * w * w + y * w + z
}

/// Whether a local cell lies on the outer shell of its chunk.
#[inline]
pub fn is_boundary(x: usize, y: usize, z: usize) -> bool {
    let last = CHUNK_WIDTH as usize - 1;
    x == 0 || x == last || y == 0 || y == last || z == 0 || z == last
}
