use tracing::warn;

use crate::client::ClientError;

/// Policy for a failed analytics read during dashboard aggregation
pub trait AnalyticsPolicy: Send + Sync {
    /// Return true to render the dashboard without analytics, false to fail it
    fn tolerates(&self, error: &ClientError) -> bool;
}

/// Report the analytics failure inside the dashboard and keep going (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct BestEffortAnalytics;

impl AnalyticsPolicy for BestEffortAnalytics {
    fn tolerates(&self, error: &ClientError) -> bool {
        warn!(%error, "Analytics unavailable, rendering dashboard without it");
        true
    }
}

/// Any failed read fails the whole dashboard
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireAnalytics;

impl AnalyticsPolicy for RequireAnalytics {
    fn tolerates(&self, _error: &ClientError) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_effort_tolerates_any_failure() {
        let policy = BestEffortAnalytics;
        assert!(policy.tolerates(&ClientError::Transport("reset".to_string())));
        assert!(policy.tolerates(&ClientError::Decode("not json".to_string())));
    }

    #[test]
    fn require_rejects_any_failure() {
        let policy = RequireAnalytics;
        assert!(!policy.tolerates(&ClientError::Service {
            status: 503,
            message: "Service Unavailable".to_string()
        }));
    }
}
