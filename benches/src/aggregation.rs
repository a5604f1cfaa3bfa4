use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;
use teller::domain::{RECENT_TRANSACTION_LIMIT, recent_transactions, total_balance};
use teller::prelude::*;

fn accounts(count: usize) -> Vec<Account> {
    (0..count)
        .map(|i| {
            Account::new(
                i.to_string(),
                format!("owner {i}"),
                Amount::from_raw((i as i64 % 1_000) * 12_345 - 500_000),
            )
        })
        .collect()
}

// Ids interleaved so sorting has real work to do
fn transactions(count: usize) -> Vec<Transaction> {
    (0..count as u64)
        .map(|i| Transaction {
            id: TransactionId::new((i * 7_919) % (count as u64 * 2 + 1)),
            account_id: AccountId::new((i % 50).to_string()),
            amount: Amount::from_raw(10_000 + i as i64),
            kind: if i % 3 == 0 {
                TransactionKind::Withdrawal
            } else {
                TransactionKind::Deposit
            },
            description: String::new(),
            status: TransactionStatus::Pending,
        })
        .collect()
}

/// Benchmark summing balances across account list sizes
fn bench_total_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_balance");

    for count in [100, 1_000, 10_000] {
        let accounts = accounts(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &accounts, |b, accounts| {
            b.iter(|| black_box(total_balance(black_box(accounts)).ok()));
        });
    }

    group.finish();
}

/// Benchmark selecting the most recent transactions
fn bench_recent_transactions(c: &mut Criterion) {
    let mut group = c.benchmark_group("recent_transactions");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || transactions(count),
                |transactions| black_box(recent_transactions(transactions, RECENT_TRANSACTION_LIMIT)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark full dashboard assembly from already-fetched reads
fn bench_dashboard_assembly(c: &mut Criterion) {
    let accounts = accounts(1_000);

    c.bench_function("dashboard_assembly_1000", |b| {
        b.iter_batched(
            || transactions(1_000),
            |transactions| {
                black_box(Dashboard::assemble(&accounts, transactions, Ok(json!({}))).ok())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_total_balance,
    bench_recent_transactions,
    bench_dashboard_assembly
);
criterion_main!(benches);
