use std::future::Future;

use tracing::warn;

use super::error::AppError;

/// Buffered stdout handed to the command body
pub type Stdout = tokio::io::BufWriter<tokio::io::Stdout>;

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM, 129 = SIGHUP)
///
/// There is no timeout: a hung service call only ends on a signal.
pub struct CliApp {
    name: String,
}

impl CliApp {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the command body, racing it against termination signals
    ///
    /// Errors are printed to stderr prefixed with the application name.
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(Stdout) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writer = tokio::io::BufWriter::new(tokio::io::stdout());

        tokio::select! {
            result = main_fn(writer) => {
                match result {
                    // The command flushes its own output
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("{}: {}", self.name, e);
                        std::process::exit(1);
                    }
                }
            }
            signal_code = wait_for_signal() => {
                std::process::exit(signal_code);
            }
        }
    }
}

/// Wait for SIGINT, SIGTERM or SIGHUP (Ctrl+C elsewhere) and map it to an exit code
///
/// If handlers cannot be installed this never resolves and the command runs to completion.
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (Ok(mut sigterm), Ok(mut sigint), Ok(mut sighup)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        ) else {
            warn!("Failed to install signal handlers");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigterm.recv() => {
                warn!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                warn!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                warn!("Received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "Failed to install Ctrl+C handler");
            return std::future::pending().await;
        }
        warn!("Received Ctrl+C");
        130
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_app_new() {
        let app = CliApp::new("teller");
        assert_eq!(app.name(), "teller");
    }
}
