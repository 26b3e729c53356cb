pub mod blueprint;
pub mod compat;
pub mod decode;
pub mod error;
pub mod format;
pub mod grid;
pub mod overrides;
pub mod palette;
pub mod slice;

pub use blueprint::{blueprint_diff, blueprint_diff_with_overrides, BlueprintBlock, BlueprintRequest};
pub use decode::{decode, decode_grid, decode_header, decode_hex, DecodedChunk};
pub use error::TerrainError;
pub use format::TerrainHeader;
pub use grid::TerrainGrid;
pub use overrides::{LiveOverrides, NoOverrides, OverrideMap};
pub use palette::{BlockPalette, PaletteError};
pub use slice::{slice, slice_with_overrides, ChunkSlice};
