use std::fmt;

use tracing::{debug, info, warn};

use super::error::OrchestratorError;
use super::policy::{AnalyticsPolicy, BestEffortAnalytics};
use crate::client::{ClientError, LedgerApi, ProcessorApi};
use crate::domain::{Account, Transaction};
use crate::io::{RawAccountRequest, RawSubmission};

/// States of the transaction submission workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionState {
    Idle,
    Validating,
    Creating,
    Processing,
    Done,
    Failed,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Creating => "creating",
            Self::Processing => "processing",
            Self::Done => "done",
            Self::Failed => "failed",
        })
    }
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Created by the ledger and acknowledged by the processor
    Done(Transaction),

    /// `created` is set when the ledger record exists despite the failure
    Failed {
        error: OrchestratorError,
        created: Option<Transaction>,
    },
}

/// Result of one run of the submission workflow, with the states it passed through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    transitions: Vec<SubmissionState>,
    outcome: SubmissionOutcome,
}

impl Submission {
    /// Terminal state: `Done` or `Failed`
    pub fn state(&self) -> SubmissionState {
        match self.outcome {
            SubmissionOutcome::Done(_) => SubmissionState::Done,
            SubmissionOutcome::Failed { .. } => SubmissionState::Failed,
        }
    }

    /// Every state visited, starting at `Idle` and ending at the terminal state
    pub fn transitions(&self) -> &[SubmissionState] {
        &self.transitions
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    /// The ledger-side transaction, if one was created
    pub fn transaction(&self) -> Option<&Transaction> {
        match &self.outcome {
            SubmissionOutcome::Done(tx) => Some(tx),
            SubmissionOutcome::Failed { created, .. } => created.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&OrchestratorError> {
        match &self.outcome {
            SubmissionOutcome::Done(_) => None,
            SubmissionOutcome::Failed { error, .. } => Some(error),
        }
    }

    pub fn into_result(self) -> Result<Transaction, OrchestratorError> {
        match self.outcome {
            SubmissionOutcome::Done(tx) => Ok(tx),
            SubmissionOutcome::Failed { error, .. } => Err(error),
        }
    }
}

/// Records and logs state transitions for a single submission
struct Tracker {
    transitions: Vec<SubmissionState>,
}

impl Tracker {
    fn new() -> Self {
        Self {
            transitions: vec![SubmissionState::Idle],
        }
    }

    fn current(&self) -> SubmissionState {
        self.transitions
            .last()
            .copied()
            .unwrap_or(SubmissionState::Idle)
    }

    fn enter(&mut self, next: SubmissionState) {
        // Done and Failed have no outgoing transitions
        debug_assert!(
            !self.current().is_terminal(),
            "transition from terminal state {}",
            self.current()
        );
        debug!(from = %self.current(), to = %next, "Submission state transition");
        self.transitions.push(next);
    }

    fn done(mut self, transaction: Transaction) -> Submission {
        self.enter(SubmissionState::Done);
        Submission {
            transitions: self.transitions,
            outcome: SubmissionOutcome::Done(transaction),
        }
    }

    fn fail(mut self, error: OrchestratorError, created: Option<Transaction>) -> Submission {
        warn!(state = %self.current(), %error, "Submission failed");
        self.enter(SubmissionState::Failed);
        Submission {
            transitions: self.transitions,
            outcome: SubmissionOutcome::Failed { error, created },
        }
    }
}

/// Coordinates the ledger and processor services
///
/// Submission runs create then process, strictly in sequence. Dashboard reads
/// fan out concurrently and are reconciled under the analytics policy `P`.
/// Nothing is cached and nothing is retried.
pub struct SubmissionOrchestrator<L, R, P = BestEffortAnalytics> {
    ledger: L,
    processor: R,
    analytics_policy: P,
}

impl<L, R> SubmissionOrchestrator<L, R>
where
    L: LedgerApi,
    R: ProcessorApi,
{
    pub fn new(ledger: L, processor: R) -> Self {
        Self {
            ledger,
            processor,
            analytics_policy: BestEffortAnalytics,
        }
    }
}

impl<L, R, P> SubmissionOrchestrator<L, R, P>
where
    L: LedgerApi,
    R: ProcessorApi,
    P: AnalyticsPolicy,
{
    /// Replace the policy applied when the analytics read fails
    pub fn with_analytics_policy<Q: AnalyticsPolicy>(
        self,
        analytics_policy: Q,
    ) -> SubmissionOrchestrator<L, R, Q> {
        SubmissionOrchestrator {
            ledger: self.ledger,
            processor: self.processor,
            analytics_policy,
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn processor(&self) -> &R {
        &self.processor
    }

    pub(crate) fn analytics_policy(&self) -> &P {
        &self.analytics_policy
    }

    /// Run the submission workflow for one raw form entry
    ///
    /// The processor is only called once the ledger has returned the created
    /// transaction. A processing failure leaves that record in place and is
    /// reported as `OrchestratorError::Processing` with its id.
    pub async fn submit(&self, raw: &RawSubmission) -> Submission {
        let mut tracker = Tracker::new();

        tracker.enter(SubmissionState::Validating);
        let request = match raw.parse() {
            Ok(request) => request,
            Err(error) => return tracker.fail(error.into(), None),
        };
        if let Err(error) = request.validate() {
            return tracker.fail(ClientError::from(error).into(), None);
        }

        tracker.enter(SubmissionState::Creating);
        let created = match self.ledger.create_transaction(request).await {
            Ok(created) => created,
            Err(error) => return tracker.fail(error.into(), None),
        };
        info!(
            transaction_id = %created.id,
            account_id = %created.account_id,
            kind = %created.kind,
            "Transaction created"
        );

        tracker.enter(SubmissionState::Processing);
        match self.processor.process(&created).await {
            Ok(()) => {
                info!(transaction_id = %created.id, "Transaction handed to processor");
                tracker.done(created)
            }
            Err(source) => tracker.fail(
                OrchestratorError::Processing {
                    transaction_id: created.id,
                    source,
                },
                Some(created),
            ),
        }
    }

    /// Validate and open a new account
    pub async fn open_account(&self, raw: &RawAccountRequest) -> Result<Account, OrchestratorError> {
        let request = raw.parse()?;
        let account = self.ledger.create_account(request).await?;
        info!(account_id = %account.id, owner = %account.owner, "Account opened");
        Ok(account)
    }
}
