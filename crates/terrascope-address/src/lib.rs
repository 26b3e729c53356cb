pub mod create2;
pub mod create3;
pub mod error;
pub mod hash;
pub mod resolver;
pub mod salt;
pub mod types;

pub use error::AddressError;
pub use resolver::{resolve_chunk_address, ChunkAddress, DEFAULT_PROXY_INIT_CODE_HASH};
pub use types::{Address, CodeHash, Salt};
