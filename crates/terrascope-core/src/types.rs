use glam::IVec3;

/// Chunk coordinate in chunk-space (each unit = CHUNK_WIDTH voxels).
pub type ChunkCoord = IVec3;

/// World coordinate in voxel-space.
pub type VoxelCoord = IVec3;

/// Raw block-type code as stored in the terrain payload.
/// 0 = no data, 1 = air, anything else is an occupied block.
pub type BlockType = u8;
