pub mod csv_writer;
pub mod error;
pub mod parse;

// Re-export commonly used types
pub use csv_writer::{
    write_accounts, write_batch_results, write_dashboard, write_health, write_json,
    write_transactions,
};
pub use error::{InputError, RenderError};
pub use parse::{RawAccountRequest, RawSubmission};
