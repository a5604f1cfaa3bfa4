pub mod aggregation;
pub mod error;
pub mod policy;
pub mod submission;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use aggregation::{Dashboard, ServiceHealth};
pub use error::{AggregationError, DashboardRead, ErrorKind, OrchestratorError, ReadFailure};
pub use policy::{AnalyticsPolicy, BestEffortAnalytics, RequireAnalytics};
pub use submission::{Submission, SubmissionOrchestrator, SubmissionOutcome, SubmissionState};
