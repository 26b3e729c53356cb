/// Errors that can occur while decoding a terrain payload.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TerrainError {
    #[error("unsupported terrain format version {0}")]
    UnsupportedVersion(u16),

    #[error("malformed payload: {len} bytes, header needs 4")]
    MalformedPayload { len: usize },

    #[error("chunk not explored (no bytecode)")]
    ChunkNotExplored,

    #[error("invalid hex payload: {0}")]
    InvalidHex(String),
}
