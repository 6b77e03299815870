//! Demo host: wires the RocksDB backend to the example contract, performs
//! one invoke and one query, and prints both response envelopes.

use score_host::{telemetry, BackendConfig, RocksDbBackend};
use score_shell::{Block, ContractShell, ScoreApi, StateStore, Transaction};
use scoreex::ScoreEx;
use serde_json::json;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/scoreex".to_string());
    info!(path = %path, "opening backend");

    let backend = Arc::new(RocksDbBackend::open(BackendConfig {
        path,
        ..Default::default()
    })?);

    let store = StateStore::open(backend, "scoreex_db")?;
    let mut shell = ContractShell::new(ScoreEx::new(store), None)?;
    info!(contract = %shell.info().name, version = %shell.info().version, "contract ready");

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let block = Block::new(1, timestamp, [0u8; 32]);

    let transaction = Transaction::new(
        "hx_demo",
        json!({ "method": "mint", "params": { "to": "hx_demo", "amount": 10 } }).to_string(),
        block.hash,
    );
    println!("{}", shell.invoke(&transaction, &block));

    println!(
        "{}",
        shell.query(r#"{"method": "balance", "params": {"address": "hx_demo"}}"#)
    );

    Ok(())
}
