use terrascope_core::constants::{CHUNK_WIDTH, VOXELS_PER_CHUNK};
use terrascope_core::math::grid_index;
use terrascope_core::types::BlockType;

/// Dense 16x16x16 block grid in X-major, then Y, then Z order.
#[derive(Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    cells: Box<[BlockType; VOXELS_PER_CHUNK]>,
}

impl Default for TerrainGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for TerrainGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerrainGrid")
            .field("non_empty", &self.cells.iter().filter(|c| **c != 0).count())
            .finish()
    }
}

impl TerrainGrid {
    /// A grid with every cell set to "no data".
    pub fn empty() -> Self {
        Self::filled(0)
    }

    /// A grid with every cell set to `block`.
    pub fn filled(block: BlockType) -> Self {
        Self {
            cells: Box::new([block; VOXELS_PER_CHUNK]),
        }
    }

    /// Copy up to one chunk's worth of cells; missing cells stay 0.
    pub fn from_cells(cells: &[BlockType]) -> Self {
        let mut grid = Self::empty();
        let n = cells.len().min(VOXELS_PER_CHUNK);
        grid.cells[..n].copy_from_slice(&cells[..n]);
        grid
    }

    /// Block at local (x, y, z). Panics if any axis is >= 16.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.cells[grid_index(x, y, z)]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, block: BlockType) {
        self.cells[grid_index(x, y, z)] = block;
    }

    pub fn as_bytes(&self) -> &[BlockType] {
        &self.cells[..]
    }

    /// All cells as (x, y, z, block), in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize, BlockType)> + '_ {
        let w = CHUNK_WIDTH as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &block)| (i / (w * w), (i / w) % w, i % w, block))
    }
}
