pub mod error;
mod http;
pub mod ledger;
pub mod processor;
pub mod traits;

// Re-export commonly used types
pub use error::ClientError;
pub use ledger::LedgerClient;
pub use processor::{BatchResult, ProcessorClient};
pub use traits::{LedgerApi, ProcessorApi};
