//! Required-field validation.
//!
//! # Responsibilities
//! - Check presence of every required-by-convention path in one pass
//! - Report all missing fields, never just the first
//! - Leave genuinely optional fields alone (absent stays `None`)
//!
//! # Design Decisions
//! - Required paths live in a declarative table, not scattered through the
//!   loader, so the table can be diffed against the schema annotations
//! - A child rule does not fire when its parent subtree is absent: the
//!   parent's own violation already tells the user what to add

use crate::config::schema::RawNodeConfig;
use crate::config::violation::{Violation, ViolationKind};

/// Presence probe result for one required path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Set,
    Unset,
    /// An enclosing section is absent; its own rule reports the gap.
    ParentUnset,
}

struct RequiredRule {
    /// Dotted canonical path.
    path: &'static str,
    /// Human-readable field name used in the violation message.
    name: &'static str,
    probe: fn(&RawNodeConfig) -> Probe,
}

fn presence(set: bool) -> Probe {
    if set {
        Probe::Set
    } else {
        Probe::Unset
    }
}

static REQUIRED: &[RequiredRule] = &[
    RequiredRule {
        path: "executor",
        name: "executor section",
        probe: |raw| presence(raw.executor.is_some()),
    },
    RequiredRule {
        path: "executor.serverAddr",
        name: "gossip listen address",
        probe: |raw| match &raw.executor {
            None => Probe::ParentUnset,
            Some(e) => presence(e.server_addr.is_some()),
        },
    },
    RequiredRule {
        path: "executor.gossip",
        name: "gossip section",
        probe: |raw| match &raw.executor {
            None => Probe::ParentUnset,
            Some(e) => presence(e.gossip.is_some()),
        },
    },
    RequiredRule {
        path: "executor.gossip.key",
        name: "gossip node key",
        probe: |raw| match raw.executor.as_ref().and_then(|e| e.gossip.as_ref()) {
            None => Probe::ParentUnset,
            Some(g) => presence(g.key.is_some()),
        },
    },
    RequiredRule {
        path: "executor.gossip.dynamicInboundLimit",
        name: "dynamic inbound connection limit",
        probe: |raw| match raw.executor.as_ref().and_then(|e| e.gossip.as_ref()) {
            None => Probe::ParentUnset,
            Some(g) => presence(g.dynamic_inbound_limit.is_some()),
        },
    },
    RequiredRule {
        path: "executor.genesisBlock",
        name: "genesis block",
        probe: |raw| match &raw.executor {
            None => Probe::ParentUnset,
            Some(e) => presence(e.genesis_block.is_some()),
        },
    },
    RequiredRule {
        path: "executor.validators",
        name: "validator set",
        probe: |raw| match &raw.executor {
            None => Probe::ParentUnset,
            Some(e) => presence(e.validators.is_some()),
        },
    },
    // The consensus section itself is optional; its fields are required
    // only once the section exists.
    RequiredRule {
        path: "consensus.key",
        name: "consensus validator key",
        probe: |raw| match &raw.consensus {
            None => Probe::ParentUnset,
            Some(c) => presence(c.key.is_some()),
        },
    },
    RequiredRule {
        path: "consensus.publicAddr",
        name: "consensus public address",
        probe: |raw| match &raw.consensus {
            None => Probe::ParentUnset,
            Some(c) => presence(c.public_addr.is_some()),
        },
    },
];

/// Collects every missing-required violation in one pass over the raw tree.
pub fn check_required(raw: &RawNodeConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    for rule in REQUIRED {
        if (rule.probe)(raw) == Probe::Unset {
            violations.push(Violation::new(
                rule.path,
                ViolationKind::MissingRequiredField,
                format!("{} is required but unset", rule.name),
            ));
        }
    }

    // Static-outbound entries carry two required sub-fields each; their
    // paths are indexed, so they cannot live in the static table.
    if let Some(entries) = raw
        .executor
        .as_ref()
        .and_then(|e| e.gossip.as_ref())
        .and_then(|g| g.static_outbound.as_ref())
    {
        for (i, entry) in entries.iter().enumerate() {
            if entry.key.is_none() {
                violations.push(Violation::new(
                    format!("executor.gossip.staticOutbound[{i}].key"),
                    ViolationKind::MissingRequiredField,
                    "peer node key is required but unset",
                ));
            }
            if entry.addr.is_none() {
                violations.push(Violation::new(
                    format!("executor.gossip.staticOutbound[{i}].addr"),
                    ViolationKind::MissingRequiredField,
                    "peer dial address is required but unset",
                ));
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{RawExecutorConfig, RawGossipConfig, RawNodeAddr};

    fn paths(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.path.as_str()).collect()
    }

    #[test]
    fn empty_document_reports_only_the_root_section() {
        let violations = check_required(&RawNodeConfig::default());
        assert_eq!(paths(&violations), vec!["executor"]);
    }

    #[test]
    fn absent_gossip_does_not_cascade_into_its_fields() {
        let raw = RawNodeConfig {
            executor: Some(RawExecutorConfig::default()),
            ..Default::default()
        };
        let violations = check_required(&raw);
        assert_eq!(
            paths(&violations),
            vec![
                "executor.serverAddr",
                "executor.gossip",
                "executor.genesisBlock",
                "executor.validators",
            ]
        );
    }

    #[test]
    fn collects_all_missing_fields_in_one_pass() {
        let raw = RawNodeConfig {
            executor: Some(RawExecutorConfig {
                server_addr: None,
                gossip: Some(RawGossipConfig {
                    key: None,
                    dynamic_inbound_limit: Some(10),
                    ..Default::default()
                }),
                genesis_block: Some("aa".into()),
                validators: Some(vec![]),
            }),
            ..Default::default()
        };
        let violations = check_required(&raw);
        assert_eq!(
            paths(&violations),
            vec!["executor.serverAddr", "executor.gossip.key"]
        );
        assert!(violations
            .iter()
            .all(|v| v.kind == ViolationKind::MissingRequiredField));
    }

    #[test]
    fn consensus_fields_required_only_when_section_present() {
        let raw = RawNodeConfig {
            consensus: Some(Default::default()),
            ..Default::default()
        };
        let violations = check_required(&raw);
        assert!(paths(&violations).contains(&"consensus.key"));
        assert!(paths(&violations).contains(&"consensus.publicAddr"));

        let violations = check_required(&RawNodeConfig::default());
        assert!(!paths(&violations).iter().any(|p| p.starts_with("consensus")));
    }

    #[test]
    fn static_outbound_entries_are_checked_with_indexed_paths() {
        let raw = RawNodeConfig {
            executor: Some(RawExecutorConfig {
                gossip: Some(RawGossipConfig {
                    static_outbound: Some(vec![
                        RawNodeAddr {
                            key: Some("k".into()),
                            addr: Some("a".into()),
                        },
                        RawNodeAddr::default(),
                    ]),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let violations = check_required(&raw);
        let p = paths(&violations);
        assert!(p.contains(&"executor.gossip.staticOutbound[1].key"));
        assert!(p.contains(&"executor.gossip.staticOutbound[1].addr"));
        assert!(!p.iter().any(|s| s.contains("staticOutbound[0]")));
    }
}
