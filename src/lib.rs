//! Client-side orchestration over a ledger service and a transaction processor.
//!
//! Submissions create a transaction in the ledger and then hand it to the
//! processor; dashboards join account, transaction and analytics reads.

pub mod app;
pub mod client;
pub mod config;
pub mod domain;
pub mod io;
pub mod orchestrator;
pub mod prelude;
