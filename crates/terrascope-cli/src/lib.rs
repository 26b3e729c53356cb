pub mod error;
pub mod report;

pub use error::CliError;
