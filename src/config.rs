use clap::Args;

/// Ledger service location used for local development
pub const DEFAULT_LEDGER_BASE_URL: &str = "http://localhost:8080";

/// Processor service location used for local development
pub const DEFAULT_PROCESSOR_BASE_URL: &str = "http://localhost:5000";

/// Locations of the two backend services, passed to client constructors
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL of the ledger (accounts and transactions) service.
    #[arg(
        long = "ledger-url",
        env = "API_BASE_URL",
        default_value = DEFAULT_LEDGER_BASE_URL
    )]
    pub ledger_base_url: String,

    /// Base URL of the transaction-processor service.
    #[arg(
        long = "processor-url",
        env = "PROCESSOR_BASE_URL",
        default_value = DEFAULT_PROCESSOR_BASE_URL
    )]
    pub processor_base_url: String,
}

impl ServiceConfig {
    pub fn new(ledger_base_url: impl Into<String>, processor_base_url: impl Into<String>) -> Self {
        Self {
            ledger_base_url: ledger_base_url.into(),
            processor_base_url: processor_base_url.into(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_BASE_URL, DEFAULT_PROCESSOR_BASE_URL)
    }
}
