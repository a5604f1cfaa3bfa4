pub mod cli;
pub mod error;

// Re-export commonly used types
pub use cli::{CliApp, Stdout};
pub use error::AppError;
