use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use terrascope_address::Address;

use crate::error::SourceError;

/// Supplies the deployed bytecode stored at an address.
///
/// `Ok(None)` and `Ok(Some(empty))` both mean nothing is deployed there.
pub trait BytecodeSource {
    fn fetch_bytecode(&self, address: &Address) -> Result<Option<Vec<u8>>, SourceError>;
}

impl<T: BytecodeSource + ?Sized> BytecodeSource for &T {
    fn fetch_bytecode(&self, address: &Address) -> Result<Option<Vec<u8>>, SourceError> {
        (**self).fetch_bytecode(address)
    }
}

/// In-memory bytecode, keyed by address.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    code: HashMap<Address, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: Address, bytecode: Vec<u8>) {
        self.code.insert(address, bytecode);
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl BytecodeSource for MemorySource {
    fn fetch_bytecode(&self, address: &Address) -> Result<Option<Vec<u8>>, SourceError> {
        Ok(self.code.get(address).cloned())
    }
}

/// Bytecode dumped to disk, one `<address>.hex` file per contract.
///
/// File names use the lowercase `0x…` form of the address. Contents are hex,
/// with or without a `0x` prefix; surrounding whitespace is ignored.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, address: &Address) -> PathBuf {
        self.root.join(format!("{address}.hex"))
    }
}

impl BytecodeSource for DirSource {
    fn fetch_bytecode(&self, address: &Address) -> Result<Option<Vec<u8>>, SourceError> {
        let path = self.path_for(address);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no bytecode file at {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(SourceError::Io {
                    address: *address,
                    message: e.to_string(),
                })
            }
        };

        let text = contents.trim();
        let digits = text.strip_prefix("0x").unwrap_or(text);
        let bytes = hex::decode(digits).map_err(|e| SourceError::InvalidData {
            address: *address,
            message: e.to_string(),
        })?;
        Ok(Some(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("terrascope-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn test_memory_source_lookup() {
        let mut source = MemorySource::new();
        let addr = Address([7; 20]);
        source.insert(addr, vec![0, 0, 1, 2]);
        assert_eq!(source.fetch_bytecode(&addr).expect("ok"), Some(vec![0, 0, 1, 2]));
        assert_eq!(source.fetch_bytecode(&Address([8; 20])).expect("ok"), None);
    }

    #[test]
    fn test_dir_source_reads_hex_file() {
        let dir = scratch_dir("read");
        let source = DirSource::new(&dir);
        let addr = Address([0xab; 20]);
        std::fs::write(source.path_for(&addr), "0x00000102ff\n").expect("write fixture");

        let bytes = source.fetch_bytecode(&addr).expect("ok");
        assert_eq!(bytes, Some(vec![0, 0, 1, 2, 0xff]));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_dir_source_missing_file_is_none() {
        let dir = scratch_dir("missing");
        let source = DirSource::new(&dir);
        assert_eq!(source.fetch_bytecode(&Address([1; 20])).expect("ok"), None);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_dir_source_rejects_bad_hex() {
        let dir = scratch_dir("bad");
        let source = DirSource::new(&dir);
        let addr = Address([2; 20]);
        std::fs::write(source.path_for(&addr), "0xnothex").expect("write fixture");
        assert!(matches!(
            source.fetch_bytecode(&addr),
            Err(SourceError::InvalidData { .. })
        ));
        std::fs::remove_dir_all(&dir).ok();
    }
}
