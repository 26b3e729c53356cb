use std::collections::HashMap;

use terrascope_core::types::{BlockType, VoxelCoord};

/// Per-voxel block values from a live synchronization feed.
///
/// When a voxel has an override, it supersedes the decoded grid value
/// during slicing and blueprint generation.
pub trait LiveOverrides {
    fn block_override(&self, voxel: VoxelCoord) -> Option<BlockType>;
}

/// No live feed: the decoded grid is authoritative.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl LiveOverrides for NoOverrides {
    fn block_override(&self, _voxel: VoxelCoord) -> Option<BlockType> {
        None
    }
}

/// A snapshot of overrides keyed by world voxel coordinate.
#[derive(Debug, Clone, Default)]
pub struct OverrideMap {
    blocks: HashMap<VoxelCoord, BlockType>,
}

impl OverrideMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an override. Returns the value it replaced, if any.
    pub fn insert(&mut self, voxel: VoxelCoord, block: BlockType) -> Option<BlockType> {
        self.blocks.insert(voxel, block)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl FromIterator<(VoxelCoord, BlockType)> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = (VoxelCoord, BlockType)>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl LiveOverrides for OverrideMap {
    fn block_override(&self, voxel: VoxelCoord) -> Option<BlockType> {
        self.blocks.get(&voxel).copied()
    }
}

impl<T: LiveOverrides + ?Sized> LiveOverrides for &T {
    fn block_override(&self, voxel: VoxelCoord) -> Option<BlockType> {
        (**self).block_override(voxel)
    }
}
