//! # End-to-End Dispatch Flows
//!
//! Drives the example contract through the full host-facing surface: raw
//! payload in, serialized envelope out. Everything here observes only what
//! a host could observe.

#[cfg(test)]
mod tests {
    use score_shell::{
        codes, Block, ContractShell, KeyValueBackend, MemoryBackend, ScoreApi, StateStore,
        Transaction,
    };
    use scoreex::ScoreEx;
    use serde_json::{json, Value};
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn shell_on(backend: Arc<dyn KeyValueBackend>, contract_id: &str) -> ContractShell<ScoreEx> {
        let store = StateStore::open(backend, contract_id).unwrap();
        ContractShell::new(ScoreEx::new(store), None).unwrap()
    }

    fn shell() -> ContractShell<ScoreEx> {
        shell_on(Arc::new(MemoryBackend::new()), "scoreex_db")
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

    // =============================================================================
    // DISPATCH
    // =============================================================================

    #[test]
    fn test_invoke_returns_exact_envelope_shape() {
        let mut shell = shell();
        shell.invoke(
            &tx("hx_admin", r#"{"method":"mint","params":{"to":"hx1","amount":5}}"#),
            &block(1),
        );

        let response = shell.invoke(
            &tx("hx1", r#"{"method":"transfer","params":{"to":"hx2","amount":5}}"#),
            &block(2),
        );
        assert_eq!(response, r#"{"jsonrpc":"2.0","id":null,"result":{"ok":true}}"#);
    }

    #[test]
    fn test_unknown_method_is_32601_regardless_of_params() {
        let mut shell = shell();

        for payload in [
            r#"{"method":"burn","params":{}}"#,
            r#"{"method":"burn","params":{"amount":1,"anything":"goes"}}"#,
        ] {
            let wire = parse(&shell.invoke(&tx("hx1", payload), &block(1)));
            assert_eq!(wire["error"]["code"], json!(codes::METHOD_NOT_FOUND));
        }

        // Query set is its own namespace: invoke-only methods are absent
        let wire = parse(&shell.query(r#"{"method":"transfer","params":{}}"#));
        assert_eq!(wire["error"]["code"], json!(codes::METHOD_NOT_FOUND));
    }

    #[test]
    fn test_malformed_payload_is_32600_and_touches_nothing() {
        let backend = Arc::new(MemoryBackend::new());
        let mut shell = shell_on(Arc::clone(&backend) as Arc<dyn KeyValueBackend>, "scoreex_db");

        for payload in [
            "{broken",
            "[1,2,3]",
            r#"{"params":{}}"#,
            r#"{"method":42,"params":{}}"#,
            r#"{"method":"mint"}"#,
            r#"{"method":"mint","params":[1]}"#,
        ] {
            let wire = parse(&shell.invoke(&tx("hx1", payload), &block(1)));
            assert_eq!(wire["error"]["code"], json!(codes::INVALID_REQUEST));
        }

        // No handler ran, so the engine holds no entries at all
        assert!(backend.is_empty());
    }

    #[test]
    fn test_handler_failure_is_32000_and_info_survives() {
        let mut shell = shell();
        let before = shell.info().clone();

        let wire = parse(&shell.invoke(
            &tx("hx_poor", r#"{"method":"transfer","params":{"to":"hx2","amount":7}}"#),
            &block(1),
        ));
        assert_eq!(wire["error"]["code"], json!(codes::HANDLER_ERROR));
        assert_eq!(wire["error"]["data"]["method"], "transfer");

        assert_eq!(shell.info(), &before);
        assert_eq!(shell.info(), &before);
    }

    #[test]
    fn test_codes_discriminate_failure_kinds() {
        let mut shell = shell();

        let not_found = parse(&shell.invoke(&tx("hx1", r#"{"method":"nope","params":{}}"#), &block(1)));
        let failed = parse(&shell.invoke(
            &tx("hx1", r#"{"method":"transfer","params":{"to":"x","amount":1}}"#),
            &block(1),
        ));

        // Same outcome family, distinct codes: never discriminate on message
        assert_ne!(not_found["error"]["code"], failed["error"]["code"]);
        assert_eq!(not_found["error"]["code"], json!(codes::METHOD_NOT_FOUND));
        assert_eq!(failed["error"]["code"], json!(codes::HANDLER_ERROR));
    }

    #[test]
    fn test_query_reads_what_invoke_wrote() {
        let mut shell = shell();
        shell.invoke(
            &tx("hx_admin", r#"{"method":"mint","params":{"to":"hx1","amount":42}}"#),
            &block(1),
        );

        let wire = parse(&shell.query(r#"{"id":"q1","method":"balance","params":{"address":"hx1"}}"#));
        assert_eq!(wire["id"], "q1");
        assert_eq!(wire["result"]["balance"], 42);

        // Unknown accounts read as zero, not as an error
        let wire = parse(&shell.query(r#"{"method":"balance","params":{"address":"hx_ghost"}}"#));
        assert_eq!(wire["result"]["balance"], 0);
    }

    // =============================================================================
    // ISOLATION
    // =============================================================================

    #[test]
    fn test_contract_instances_never_share_state() {
        let backend: Arc<dyn KeyValueBackend> = Arc::new(MemoryBackend::new());
        let mut a = shell_on(Arc::clone(&backend), "a");
        let b = shell_on(Arc::clone(&backend), "b");

        a.invoke(
            &tx("hx_admin", r#"{"method":"mint","params":{"to":"hx1","amount":9}}"#),
            &block(1),
        );

        let wire = parse(&a.query(r#"{"method":"balance","params":{"address":"hx1"}}"#));
        assert_eq!(wire["result"]["balance"], 9);

        let wire = parse(&b.query(r#"{"method":"balance","params":{"address":"hx1"}}"#));
        assert_eq!(wire["result"]["balance"], 0);
        let wire = parse(&b.query(r#"{"method":"supply","params":{}}"#));
        assert_eq!(wire["result"]["supply"], 0);
    }

    // =============================================================================
    // ORDERING
    // =============================================================================

    #[test]
    fn test_sequential_invokes_observe_prior_writes() {
        let mut shell = shell();

        shell.invoke(
            &tx("hx_admin", r#"{"method":"mint","params":{"to":"hx1","amount":10}}"#),
            &block(1),
        );
        shell.invoke(
            &tx("hx1", r#"{"method":"transfer","params":{"to":"hx2","amount":4}}"#),
            &block(2),
        );
        shell.invoke(
            &tx("hx2", r#"{"method":"transfer","params":{"to":"hx3","amount":1}}"#),
            &block(3),
        );

        let wire = parse(&shell.query(r#"{"method":"balance","params":{"address":"hx1"}}"#));
        assert_eq!(wire["result"]["balance"], 6);
        let wire = parse(&shell.query(r#"{"method":"balance","params":{"address":"hx2"}}"#));
        assert_eq!(wire["result"]["balance"], 3);
        let wire = parse(&shell.query(r#"{"method":"balance","params":{"address":"hx3"}}"#));
        assert_eq!(wire["result"]["balance"], 1);
    }
}
