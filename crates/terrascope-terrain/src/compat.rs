use crate::error::TerrainError;
use crate::format::{RawHeader, TerrainHeader, FORMAT_VERSION};

/// Validate a raw header and convert it.
///
/// Any version other than FORMAT_VERSION is fatal.
pub fn validate_header(raw: &RawHeader) -> Result<TerrainHeader, TerrainError> {
    let header = TerrainHeader::from(raw);
    if header.version != FORMAT_VERSION {
        return Err(TerrainError::UnsupportedVersion(header.version));
    }
    Ok(header)
}
