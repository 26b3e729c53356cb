use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use terrascope_address::{Address, CodeHash, DEFAULT_PROXY_INIT_CODE_HASH};

use crate::error::ExplorerError;

/// World contract that deploys every terrain chunk.
pub const DEFAULT_WORLD_ADDRESS: Address = Address([
    0x25, 0x3e, 0xb8, 0x5b, 0x3c, 0x95, 0x3b, 0xfe, 0x38, 0x27, 0xcc, 0x14, 0xa1, 0x51, 0x26, 0x24,
    0x82, 0xe7, 0x18, 0x9c,
]);

/// Explorer settings, loadable from RON. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Deployer of the chunk proxies.
    pub world_address: Address,
    /// Init-code hash of the CREATE3 proxy.
    pub proxy_init_code_hash: CodeHash,
    /// Directory of `<address>.hex` bytecode dumps.
    pub data_dir: Option<PathBuf>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            world_address: DEFAULT_WORLD_ADDRESS,
            proxy_init_code_hash: DEFAULT_PROXY_INIT_CODE_HASH,
            data_dir: None,
        }
    }
}

impl ExplorerConfig {
    pub fn from_ron(ron_str: &str) -> Result<Self, ExplorerError> {
        ron::Options::default()
            .from_str(ron_str)
            .map_err(|e| ExplorerError::Config(e.to_string()))
    }
}
