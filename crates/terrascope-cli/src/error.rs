use std::path::PathBuf;

use terrascope_explorer::ExplorerError;
use terrascope_terrain::{PaletteError, TerrainError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("provide a payload with --hex or --file")]
    MissingPayload,

    #[error("no data directory: pass --data-dir or set data_dir in the config")]
    MissingDataDir,

    #[error(transparent)]
    Explorer(#[from] ExplorerError),

    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
