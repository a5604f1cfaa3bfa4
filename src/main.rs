use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use teller::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "teller",
    version,
    about = "Accounts, transactions and dashboards over the ledger and processor services"
)]
struct Cli {
    #[command(flatten)]
    services: ServiceConfig,

    /// Fail the dashboard when analytics cannot be fetched.
    #[arg(long, global = true)]
    require_analytics: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List accounts in service order.
    Accounts,
    /// List every transaction, most recent first.
    Transactions,
    /// Total balance, recent activity and analytics.
    Dashboard,
    /// Open a new account.
    OpenAccount {
        #[arg(long)]
        owner: String,
        #[arg(long, default_value = "0")]
        balance: String,
    },
    /// Record a deposit and hand it to the processor.
    Deposit(SubmitArgs),
    /// Record a withdrawal and hand it to the processor.
    Withdraw(SubmitArgs),
    /// Read one account from the ledger.
    ShowAccount { id: String },
    /// Re-read one transaction from the ledger.
    ShowTransaction { id: TransactionId },
    /// Settle every transaction the processor has queued.
    ProcessBatch,
    /// Print the processor's analytics payload.
    Analytics {
        /// Restrict analytics to one account.
        #[arg(long)]
        account: Option<String>,
    },
    /// Check both services.
    Health,
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long)]
    account: String,
    #[arg(long)]
    amount: String,
    #[arg(long)]
    description: String,
}

impl SubmitArgs {
    fn into_raw(self, kind: TransactionKind) -> RawSubmission {
        RawSubmission::new(self.account, self.amount, self.description, kind.as_str())
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    CliApp::new("teller").run(|stdout| run(cli, stdout)).await
}

/// Log to stderr so stdout stays machine-readable
fn init_tracing(verbose: bool) {
    let (filter, env_err) = if verbose {
        (EnvFilter::new("teller=debug"), None)
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(f) => (f, None),
            Err(e) => (EnvFilter::new("teller=info"), Some(e)),
        }
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
    if let Some(e) = env_err
        && std::env::var_os("RUST_LOG").is_some()
    {
        tracing::warn!(error = %e, "invalid RUST_LOG filter, using default");
    }
}

async fn run(cli: Cli, mut stdout: Stdout) -> Result<(), AppError> {
    let orchestrator = SubmissionOrchestrator::new(
        LedgerClient::new(&cli.services)?,
        ProcessorClient::new(&cli.services)?,
    );

    if cli.require_analytics {
        let orchestrator = orchestrator.with_analytics_policy(RequireAnalytics);
        execute(cli.command, &orchestrator, &mut stdout).await
    } else {
        execute(cli.command, &orchestrator, &mut stdout).await
    }
}

async fn execute<P: AnalyticsPolicy>(
    command: Command,
    orchestrator: &SubmissionOrchestrator<LedgerClient, ProcessorClient, P>,
    stdout: &mut Stdout,
) -> Result<(), AppError> {
    match command {
        Command::Accounts => write_accounts(&orchestrator.account_choices().await?, stdout).await?,
        Command::Transactions => {
            write_transactions(&orchestrator.transaction_history().await?, stdout).await?
        }
        Command::Dashboard => write_dashboard(&orchestrator.dashboard().await?, stdout).await?,
        Command::OpenAccount { owner, balance } => {
            let account = orchestrator
                .open_account(&RawAccountRequest::new(owner, balance))
                .await?;
            write_accounts(std::slice::from_ref(&account), stdout).await?
        }
        Command::Deposit(args) => {
            submit(orchestrator, args.into_raw(TransactionKind::Deposit), stdout).await?
        }
        Command::Withdraw(args) => {
            submit(orchestrator, args.into_raw(TransactionKind::Withdrawal), stdout).await?
        }
        Command::ShowAccount { id } => {
            let account = orchestrator.account(&AccountId::new(id)).await?;
            write_accounts(std::slice::from_ref(&account), stdout).await?
        }
        Command::ShowTransaction { id } => {
            let transaction = orchestrator.transaction(id).await?;
            write_transactions(std::slice::from_ref(&transaction), stdout).await?
        }
        Command::ProcessBatch => {
            write_batch_results(&orchestrator.settle_pending().await?, stdout).await?
        }
        Command::Analytics { account } => {
            let account = account.map(AccountId::new);
            write_json(&orchestrator.analytics(account.as_ref()).await?, stdout).await?
        }
        Command::Health => {
            let health = orchestrator.service_health().await;
            write_health(&health, &mut *stdout).await?;
            if !health.is_healthy() {
                return Err(AppError::Unhealthy(unhealthy_services(&health)));
            }
        }
    }
    Ok(())
}

/// Print whatever the ledger created, then surface the submission outcome
async fn submit<P: AnalyticsPolicy>(
    orchestrator: &SubmissionOrchestrator<LedgerClient, ProcessorClient, P>,
    raw: RawSubmission,
    stdout: &mut Stdout,
) -> Result<(), AppError> {
    let submission = orchestrator.submit(&raw).await;
    if let Some(transaction) = submission.transaction() {
        write_transactions(std::slice::from_ref(transaction), &mut *stdout).await?;
    }
    submission.into_result()?;
    Ok(())
}

fn unhealthy_services(health: &ServiceHealth) -> String {
    [("ledger", &health.ledger), ("processor", &health.processor)]
        .into_iter()
        .filter_map(|(service, result)| {
            result
                .as_ref()
                .err()
                .map(|error| format!("{service} ({error})"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
