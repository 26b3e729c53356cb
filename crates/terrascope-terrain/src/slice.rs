use glam::IVec3;
use terrascope_core::constants::CHUNK_WIDTH;
use terrascope_core::math::local_to_voxel;
use terrascope_core::types::{BlockType, VoxelCoord};

use crate::grid::TerrainGrid;
use crate::overrides::{LiveOverrides, NoOverrides};

const W: usize = CHUNK_WIDTH as usize;

/// Horizontal cross-section of a chunk, indexed `[x][z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSlice {
    /// Chunk-relative Y of this cross-section, in [0, 16).
    pub relative_y: usize,
    pub cells: [[BlockType; W]; W],
}

impl ChunkSlice {
    #[inline]
    pub fn get(&self, x: usize, z: usize) -> BlockType {
        self.cells[x][z]
    }
}

/// Chunk-relative Y for any world (or relative) Y, always in [0, 16).
pub fn relative_y(y: i32) -> usize {
    y.rem_euclid(CHUNK_WIDTH) as usize
}

/// Y cross-section of the decoded grid. `y` wraps modulo 16.
pub fn slice(grid: &TerrainGrid, y: i32) -> ChunkSlice {
    slice_with_overrides(grid, IVec3::ZERO, y, &NoOverrides)
}

/// Y cross-section with live overrides applied.
///
/// `origin` is the chunk's minimum-corner voxel, used to key override lookups.
pub fn slice_with_overrides<O: LiveOverrides + ?Sized>(
    grid: &TerrainGrid,
    origin: VoxelCoord,
    y: i32,
    overrides: &O,
) -> ChunkSlice {
    let ry = relative_y(y);
    let mut cells = [[0; W]; W];
    for (x, column) in cells.iter_mut().enumerate() {
        for (z, cell) in column.iter_mut().enumerate() {
            let voxel = local_to_voxel(origin, IVec3::new(x as i32, ry as i32, z as i32));
            *cell = overrides
                .block_override(voxel)
                .unwrap_or_else(|| grid.get(x, ry, z));
        }
    }
    ChunkSlice {
        relative_y: ry,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::OverrideMap;

    /// Each cell holds its own y, plus x in the high nibble for uniqueness.
    fn layered_grid() -> TerrainGrid {
        let mut grid = TerrainGrid::empty();
        for x in 0..W {
            for y in 0..W {
                for z in 0..W {
                    grid.set(x, y, z, ((x << 4) | y) as u8);
                }
            }
        }
        grid
    }

    #[test]
    fn test_slice_reads_requested_layer() {
        let s = slice(&layered_grid(), 5);
        assert_eq!(s.relative_y, 5);
        assert_eq!(s.get(0, 0), 5);
        assert_eq!(s.get(3, 9), 0x35);
    }

    #[test]
    fn test_slice_wraparound() {
        let grid = layered_grid();
        assert_eq!(slice(&grid, 31), slice(&grid, 15));
        assert_eq!(slice(&grid, -1), slice(&grid, 15));
        assert_eq!(slice(&grid, -16), slice(&grid, 0));
        assert_eq!(slice(&grid, 1_000_000).relative_y, 1_000_000 % 16);
    }

    #[test]
    fn test_relative_y_non_negative() {
        assert_eq!(relative_y(-17), 15);
        assert_eq!(relative_y(i32::MIN), 0);
        assert_eq!(relative_y(16), 0);
    }

    #[test]
    fn test_overrides_supersede_grid() {
        let grid = layered_grid();
        let origin = IVec3::new(-16, 32, 16);
        let overrides: OverrideMap = [(IVec3::new(-14, 39, 20), 200u8), (IVec3::new(-14, 40, 20), 201)]
            .into_iter()
            .collect();

        let s = slice_with_overrides(&grid, origin, 39, &overrides);
        assert_eq!(s.relative_y, 7);
        assert_eq!(s.get(2, 4), 200);
        assert_eq!(s.get(2, 5), 0x27);
        // Override on another layer does not leak into this one.
        assert!(s.cells.iter().flatten().all(|&c| c != 201));
    }

    #[test]
    fn test_slice_does_not_mutate_grid() {
        let grid = layered_grid();
        let before = grid.clone();
        let overrides: OverrideMap = [(IVec3::new(0, 0, 0), 9u8)].into_iter().collect();
        let _ = slice_with_overrides(&grid, IVec3::ZERO, 0, &overrides);
        assert_eq!(grid, before);
    }
}
