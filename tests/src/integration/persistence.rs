//! # Persistence Flows
//!
//! State written through one shell must be there when a new shell is
//! constructed over the same engine, and contract namespaces must stay
//! apart even inside a single RocksDB instance.

#[cfg(test)]
mod tests {
    use score_host::{BackendConfig, RocksDbBackend};
    use score_shell::{
        codes, Block, ContractShell, KeyValueBackend, ScoreApi, StateStore, Transaction,
    };
    use scoreex::ScoreEx;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn open_backend(dir: &TempDir) -> Arc<dyn KeyValueBackend> {
        let config = BackendConfig::for_testing(dir.path().to_string_lossy().to_string());
        Arc::new(RocksDbBackend::open(config).unwrap())
    }

    fn shell_on(backend: Arc<dyn KeyValueBackend>, contract_id: &str) -> ContractShell<ScoreEx> {
        let store = StateStore::open(backend, contract_id).unwrap();
        ContractShell::new(ScoreEx::new(store), None).unwrap()
    }

    fn tx(sender: &str, payload: &str) -> Transaction {
        Transaction::new(sender, payload, [0u8; 32])
    }

    fn block(height: u64) -> Block {
        Block::new(height, 1_700_000_000 + height, [height as u8; 32])
    }

    fn parse(response: &str) -> Value {
        serde_json::from_str(response).unwrap()
    }

    #[test]
    fn test_state_survives_shell_reconstruction() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);

        {
            let mut shell = shell_on(Arc::clone(&backend), "scoreex_db");
            let wire = parse(&shell.invoke(
                &tx("hx_admin", r#"{"method":"mint","params":{"to":"hx1","amount":25}}"#),
                &block(1),
            ));
            assert_eq!(wire["result"]["ok"], true);
        }

        // A fresh shell over the same engine and identifier sees the ledger
        let shell = shell_on(backend, "scoreex_db");
        let wire = parse(&shell.query(r#"{"method":"balance","params":{"address":"hx1"}}"#));
        assert_eq!(wire["result"]["balance"], 25);
        let wire = parse(&shell.query(r#"{"method":"supply","params":{}}"#));
        assert_eq!(wire["result"]["supply"], 25);
    }

    #[test]
    fn test_state_survives_database_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_string_lossy().to_string();

        {
            let backend: Arc<dyn KeyValueBackend> = Arc::new(
                RocksDbBackend::open(BackendConfig::for_testing(path.clone())).unwrap(),
            );
            let mut shell = shell_on(backend, "scoreex_db");
            shell.invoke(
                &tx("hx_admin", r#"{"method":"mint","params":{"to":"hx1","amount":7}}"#),
                &block(1),
            );
        }

        let backend: Arc<dyn KeyValueBackend> =
            Arc::new(RocksDbBackend::open(BackendConfig::for_testing(path)).unwrap());
        let shell = shell_on(backend, "scoreex_db");
        let wire = parse(&shell.query(r#"{"method":"balance","params":{"address":"hx1"}}"#));
        assert_eq!(wire["result"]["balance"], 7);
    }

    #[test]
    fn test_namespaces_stay_apart_in_one_database() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);

        let mut a = shell_on(Arc::clone(&backend), "ledger_a");
        let mut b = shell_on(Arc::clone(&backend), "ledger_b");

        a.invoke(
            &tx("hx_admin", r#"{"method":"mint","params":{"to":"hx1","amount":11}}"#),
            &block(1),
        );
        b.invoke(
            &tx("hx_admin", r#"{"method":"mint","params":{"to":"hx1","amount":22}}"#),
            &block(1),
        );

        let wire = parse(&a.query(r#"{"method":"balance","params":{"address":"hx1"}}"#));
        assert_eq!(wire["result"]["balance"], 11);
        let wire = parse(&b.query(r#"{"method":"balance","params":{"address":"hx1"}}"#));
        assert_eq!(wire["result"]["balance"], 22);
    }

    #[test]
    fn test_failed_calls_write_nothing_durable() {
        let temp_dir = TempDir::new().unwrap();
        let backend = open_backend(&temp_dir);

        {
            let mut shell = shell_on(Arc::clone(&backend), "scoreex_db");
            let wire = parse(&shell.invoke(&tx("hx1", r#"{"method":"nope","params":{}}"#), &block(1)));
            assert_eq!(wire["error"]["code"], json!(codes::METHOD_NOT_FOUND));
            let wire = parse(&shell.invoke(&tx("hx1", "{broken"), &block(1)));
            assert_eq!(wire["error"]["code"], json!(codes::INVALID_REQUEST));
        }

        let shell = shell_on(backend, "scoreex_db");
        assert!(shell.contract().store().keys().unwrap().is_empty());
    }
}
