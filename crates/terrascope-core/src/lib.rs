pub mod constants;
pub mod math;
pub mod types;

pub use types::{BlockType, ChunkCoord, VoxelCoord};
