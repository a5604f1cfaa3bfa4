use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::RenderError;
use crate::client::BatchResult;
use crate::domain::{Account, Transaction};
use crate::orchestrator::{Dashboard, ServiceHealth};

const TRANSACTION_HEADER: [&str; 6] = ["id", "account_id", "type", "amount", "status", "description"];

fn csv_buffer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new())
}

fn write_transaction_rows(
    csv: &mut csv::Writer<Vec<u8>>,
    transactions: &[Transaction],
) -> Result<(), RenderError> {
    csv.write_record(TRANSACTION_HEADER)?;
    for tx in transactions {
        csv.write_record([
            tx.id.to_string(),
            tx.account_id.to_string(),
            tx.kind.to_string(),
            tx.amount.to_string(),
            tx.status.to_string(),
            tx.description.clone(),
        ])?;
    }
    Ok(())
}

fn finish(csv: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, RenderError> {
    Ok(csv.into_inner().map_err(|e| e.into_error())?)
}

async fn write_bytes<W>(bytes: &[u8], mut writer: W) -> Result<(), RenderError>
where
    W: AsyncWrite + Unpin + Send,
{
    writer.write_all(bytes).await?;
    writer.flush().await?;
    Ok(())
}

async fn flush_to<W>(csv: csv::Writer<Vec<u8>>, writer: W) -> Result<(), RenderError>
where
    W: AsyncWrite + Unpin + Send,
{
    write_bytes(&finish(csv)?, writer).await
}

/// Write accounts as CSV, one row per account in service order
pub async fn write_accounts<W>(accounts: &[Account], writer: W) -> Result<(), RenderError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut csv = csv_buffer();
    csv.write_record(["id", "owner", "balance", "label"])?;
    for account in accounts {
        csv.write_record([
            account.id.to_string(),
            account.owner.clone(),
            account.balance.to_string(),
            account.label(),
        ])?;
    }
    flush_to(csv, writer).await
}

/// Write transactions as CSV in the order given
pub async fn write_transactions<W>(transactions: &[Transaction], writer: W) -> Result<(), RenderError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut csv = csv_buffer();
    write_transaction_rows(&mut csv, transactions)?;
    flush_to(csv, writer).await
}

/// Write the dashboard: summary metrics, a blank line, then recent activity
pub async fn write_dashboard<W>(dashboard: &Dashboard, writer: W) -> Result<(), RenderError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut summary = csv_buffer();
    summary.write_record(["metric", "value"])?;
    summary.write_record(["total_balance".to_string(), dashboard.total_balance.to_string()])?;
    summary.write_record(["accounts".to_string(), dashboard.account_count.to_string()])?;
    summary.write_record(["transactions".to_string(), dashboard.transaction_count.to_string()])?;
    match &dashboard.analytics {
        Ok(analytics) => {
            summary.write_record(["analytics".to_string(), serde_json::to_string(analytics)?])?
        }
        Err(error) => summary.write_record(["analytics_error".to_string(), error.to_string()])?,
    }

    let mut activity = csv_buffer();
    write_transaction_rows(&mut activity, &dashboard.recent_transactions)?;

    let mut bytes = finish(summary)?;
    bytes.push(b'\n');
    bytes.extend(finish(activity)?);
    write_bytes(&bytes, writer).await
}

/// Write per-transaction results of a batch processing run
pub async fn write_batch_results<W>(results: &[BatchResult], writer: W) -> Result<(), RenderError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut csv = csv_buffer();
    csv.write_record(["transaction_id", "status", "message"])?;
    for result in results {
        csv.write_record([&result.transaction_id, &result.status, &result.message])?;
    }
    flush_to(csv, writer).await
}

/// Write one row per service with its reported status or the failure
pub async fn write_health<W>(health: &ServiceHealth, writer: W) -> Result<(), RenderError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut csv = csv_buffer();
    csv.write_record(["service", "status"])?;
    for (service, result) in [("ledger", &health.ledger), ("processor", &health.processor)] {
        let status = match result {
            Ok(status) => status.clone(),
            Err(error) => error.to_string(),
        };
        csv.write_record([service, status.as_str()])?;
    }
    flush_to(csv, writer).await
}

/// Write an opaque JSON payload, pretty-printed
pub async fn write_json<W>(value: &Value, writer: W) -> Result<(), RenderError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    write_bytes(&bytes, writer).await
}
