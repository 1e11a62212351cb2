//! End-to-end loader tests over JSON documents.

use node_config::config::{ConfigHandle, LoadPolicy, SelfReferencePolicy};
use node_config::{load_str, load_str_with, LoadError, ViolationKind};

fn node_key(seed: u8) -> String {
    format!("node:public:ed25519:{}", hex_bytes(seed, 32))
}

fn validator_key(seed: u8) -> String {
    format!("validator:public:bn254:{}", hex_bytes(seed, 64))
}

fn hex_bytes(seed: u8, len: usize) -> String {
    format!("{seed:02x}").repeat(len)
}

fn full_document() -> String {
    format!(
        r#"{{
            "executor": {{
                "serverAddr": "0.0.0.0:3054",
                "gossip": {{
                    "key": "{own}",
                    "dynamicInboundLimit": 100,
                    "staticInbound": ["{inbound}"],
                    "staticOutbound": [
                        {{ "key": "{outbound}", "addr": "10.0.0.3:3054" }}
                    ]
                }},
                "genesisBlock": "00112233",
                "validators": ["{v1}", "{v2}"]
            }},
            "metricsServerAddr": "127.0.0.1:3312",
            "consensus": {{
                "key": "{v1}",
                "publicAddr": "[2001:db8::1]:3055"
            }}
        }}"#,
        own = node_key(0x01),
        inbound = node_key(0x02),
        outbound = node_key(0x03),
        v1 = validator_key(0x0a),
        v2 = validator_key(0x0b),
    )
}

#[test]
fn full_document_loads_and_mirrors_input() {
    let config = load_str(&full_document()).unwrap();

    let executor = config.executor();
    let gossip = executor.gossip();
    assert_eq!(executor.server_addr().to_string(), "0.0.0.0:3054");
    assert_eq!(gossip.key().to_string(), node_key(0x01));
    assert_eq!(gossip.dynamic_inbound_limit(), 100);
    assert_eq!(
        gossip
            .static_inbound()
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>(),
        vec![node_key(0x02)]
    );
    assert_eq!(gossip.static_outbound().len(), 1);
    assert_eq!(
        gossip.static_outbound()[0].addr().to_string(),
        "10.0.0.3:3054"
    );
    assert_eq!(
        gossip.static_outbound()[0].key().to_string(),
        node_key(0x03)
    );
    assert_eq!(executor.genesis_block().to_string(), "00112233");
    assert_eq!(executor.validators().len(), 2);
    assert_eq!(executor.validators()[0].to_string(), validator_key(0x0a));
    assert!(config.is_validator());

    let consensus = config.consensus().unwrap();
    assert_eq!(consensus.key().to_string(), validator_key(0x0a));
    assert_eq!(consensus.public_addr().to_string(), "[2001:db8::1]:3055");
    assert_eq!(
        config.metrics_server_addr().unwrap().to_string(),
        "127.0.0.1:3312"
    );
}

#[test]
fn consensus_and_metrics_are_genuinely_optional() {
    let doc = full_document();
    let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
    let mut obj = value.as_object().unwrap().clone();
    obj.remove("consensus");
    obj.remove("metricsServerAddr");
    let doc = serde_json::to_string(&obj).unwrap();

    let config = load_str(&doc).unwrap();
    assert!(!config.is_validator());
    assert!(config.consensus().is_none());
    assert!(config.metrics_server_addr().is_none());
}

#[test]
fn two_missing_required_fields_yield_exactly_two_violations() {
    let doc = format!(
        r#"{{
            "executor": {{
                "gossip": {{
                    "dynamicInboundLimit": 100
                }},
                "genesisBlock": "00112233",
                "validators": ["{v}"]
            }}
        }}"#,
        v = validator_key(0x0a),
    );
    let Err(LoadError::Invalid(violations)) = load_str(&doc) else {
        panic!("expected validation failure");
    };
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].path, "executor.serverAddr");
    assert_eq!(violations[1].path, "executor.gossip.key");
    assert!(violations
        .iter()
        .all(|v| v.kind == ViolationKind::MissingRequiredField));
}

#[test]
fn every_problem_is_reported_in_one_pass() {
    let doc = format!(
        r#"{{
            "executor": {{
                "serverAddr": "::1:3054",
                "gossip": {{
                    "key": "{own}",
                    "dynamicInboundLimit": 100
                }},
                "genesisBlock": "abc",
                "validators": ["validator:public:secp256k1:{hex}"]
            }},
            "metricsServerAddr": "127.0.0.1:70000"
        }}"#,
        own = node_key(0x01),
        hex = hex_bytes(0x0a, 64),
    );
    let Err(LoadError::Invalid(violations)) = load_str(&doc) else {
        panic!("expected validation failure");
    };
    let kinds: Vec<_> = violations.iter().map(|v| v.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ViolationKind::InvalidNetworkAddressFormat,
            ViolationKind::InvalidHexEncoding,
            ViolationKind::UnsupportedSignatureScheme,
            ViolationKind::InvalidPortRange,
        ]
    );
}

#[test]
fn malformed_json_is_a_parse_error_not_a_violation() {
    let err = load_str("{ not json").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn wrong_json_type_fails_the_decode_not_the_validation() {
    // A type-level mismatch is a decode failure; violation aggregation
    // only covers presence and string-format problems.
    let doc = full_document().replace(
        r#""dynamicInboundLimit": 100"#,
        r#""dynamicInboundLimit": -1"#,
    );
    assert!(matches!(load_str(&doc).unwrap_err(), LoadError::Parse(_)));

    let mut value: serde_json::Value = serde_json::from_str(&full_document()).unwrap();
    value["executor"]["validators"] = serde_json::json!("x");
    let doc = serde_json::to_string(&value).unwrap();
    assert!(matches!(load_str(&doc).unwrap_err(), LoadError::Parse(_)));
}

#[test]
fn unknown_fields_are_ignored_for_forward_compatibility() {
    let doc = full_document().replacen(
        r#""serverAddr""#,
        r#""introducedLater": {"deep": [1, 2]}, "serverAddr""#,
        1,
    );
    assert!(load_str(&doc).is_ok());
}

#[test]
fn warn_policy_accepts_self_referencing_peers() {
    let doc = full_document().replace(&node_key(0x02), &node_key(0x01));

    let Err(LoadError::Invalid(violations)) = load_str(&doc) else {
        panic!("default policy should reject");
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::SelfReferencePeerConflict);

    let policy = LoadPolicy {
        self_reference_peer: SelfReferencePolicy::Warn,
    };
    assert!(load_str_with(&doc, policy).is_ok());
}

#[test]
fn reload_swaps_the_whole_config() {
    let first = load_str(&full_document()).unwrap();
    let handle = ConfigHandle::new(first);
    assert!(handle.current().is_validator());

    let doc = full_document();
    let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
    let mut obj = value.as_object().unwrap().clone();
    obj.remove("consensus");
    let second = load_str(&serde_json::to_string(&obj).unwrap()).unwrap();

    let before = handle.current();
    handle.install(second);
    // The old snapshot is untouched; the new one is visible to new readers.
    assert!(before.is_validator());
    assert!(!handle.current().is_validator());
}
