use serde::{Deserialize, Serialize};
use terrascope_core::types::BlockType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Failed to parse palette RON: {0}")]
    ParseError(String),
}

/// Display name and color for one block type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub id: BlockType,
    pub name: String,
    /// CSS-style `#rrggbb`.
    pub color: String,
}

/// Block types known to the viewer. Passed explicitly to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPalette {
    pub entries: Vec<PaletteEntry>,
}

impl Default for BlockPalette {
    fn default() -> Self {
        let entry = |id, name: &str, color: &str| PaletteEntry {
            id,
            name: name.into(),
            color: color.into(),
        };
        Self {
            entries: vec![
                entry(1, "Air", "#c8fffc"),
                entry(4, "Stone", "#888888"),
                entry(2, "Water", "#4d94ff"),
                entry(32, "Sand", "#f0e68c"),
                entry(21, "Grass", "#7cce6d"),
                entry(22, "Dirt", "#8b4513"),
            ],
        }
    }
}

impl BlockPalette {
    /// Parse a palette from RON. The top level is the struct, e.g.
    /// `(entries: [(id: 1, name: "Air", color: "#c8fffc")])`.
    pub fn from_ron(ron_str: &str) -> Result<Self, PaletteError> {
        ron::Options::default()
            .from_str(ron_str)
            .map_err(|e| PaletteError::ParseError(e.to_string()))
    }

    pub fn get(&self, id: BlockType) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// None means "transparent": the block type has no assigned color.
    pub fn color(&self, id: BlockType) -> Option<&str> {
        self.get(id).map(|e| e.color.as_str())
    }

    pub fn name(&self, id: BlockType) -> Option<&str> {
        self.get(id).map(|e| e.name.as_str())
    }
}
