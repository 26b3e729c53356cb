use terrascope_address::{Address, AddressError};
use terrascope_terrain::TerrainError;

/// Failures reported by a bytecode source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read bytecode for {address}: {message}")]
    Io { address: Address, message: String },

    #[error("invalid bytecode for {address}: {message}")]
    InvalidData { address: Address, message: String },
}

/// Errors surfaced by the chunk address service.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("invalid {axis} coordinate: {value:?}")]
    InvalidCoordinateInput { axis: char, value: String },

    #[error("chunk at {address} not explored or contract has no bytecode")]
    ChunkNotExplored { address: Address },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("invalid explorer config: {0}")]
    Config(String),
}
