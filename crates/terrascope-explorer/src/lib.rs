pub mod config;
pub mod error;
pub mod input;
pub mod service;
pub mod source;
pub mod trace;

pub use config::ExplorerConfig;
pub use error::{ExplorerError, SourceError};
pub use input::parse_voxel_input;
pub use service::{ChunkAddressService, ChunkReport, ResolvedChunk};
pub use source::{BytecodeSource, DirSource, MemorySource};
pub use trace::Trace;
