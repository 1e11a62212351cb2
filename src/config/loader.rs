//! Config loading pipeline.
//!
//! # Data Flow
//! ```text
//! JSON document (&str)
//!     → serde_json decode into RawNodeConfig (all fields optional)
//!     → required.rs (collect missing-required violations)
//!     → formats/* parsers per present string field (collect violations)
//!     → cross-field check (own key not listed as its own peer)
//!     → NodeConfig, or LoadError::Invalid with the full violation list
//! ```
//!
//! # Design Decisions
//! - Never stop at the first violation; the caller sees every problem in
//!   one pass
//! - Pure and idempotent: same document in, same result or same error set
//!   out; the only side effects are tracing events
//! - Assembly adds no validation of its own beyond the self-reference
//!   cross-check; everything else happened in the two phases above
//! - Aggregation starts after decode: a field whose JSON *type* is wrong
//!   (say a number where a list belongs) fails the document as a single
//!   `LoadError::Parse` before any violation is collected. Presence and
//!   string-format problems — the ones a user actually edits their way
//!   through — are the ones reported together

use std::collections::BTreeSet;
use std::str::FromStr;

use thiserror::Error;

use crate::config::model::{
    ConsensusConfig, ExecutorConfig, GossipConfig, NodeAddr, NodeConfig,
};
use crate::config::required::check_required;
use crate::config::schema::{
    RawConsensusConfig, RawExecutorConfig, RawGossipConfig, RawNodeConfig,
};
use crate::config::violation::{Violation, ViolationKind};
use crate::formats::{FormatError, GenesisBlock, NetworkAddress, NodeKey, ValidatorKey};

/// Error returned by a load attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document is not syntactically valid JSON; it never reached the
    /// violation machinery.
    #[error("failed to decode config document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document decoded but failed validation. The list is non-empty.
    #[error("config validation failed with {} violation(s)", .0.len())]
    Invalid(Vec<Violation>),
}

/// What to do when the gossip key shows up in its own peer lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfReferencePolicy {
    /// Report a `SelfReferencePeerConflict` violation.
    #[default]
    Reject,
    /// Log a warning and accept the config as-is.
    Warn,
}

/// Tunable load behavior for checks that are policy rather than schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadPolicy {
    pub self_reference_peer: SelfReferencePolicy,
}

/// Decodes and validates a JSON config document with the default policy.
pub fn load_str(doc: &str) -> Result<NodeConfig, LoadError> {
    load_str_with(doc, LoadPolicy::default())
}

/// Decodes and validates a JSON config document.
pub fn load_str_with(doc: &str, policy: LoadPolicy) -> Result<NodeConfig, LoadError> {
    let raw: RawNodeConfig = serde_json::from_str(doc)?;
    load_with(&raw, policy)
}

/// Validates an already-decoded raw tree with the default policy.
pub fn load(raw: &RawNodeConfig) -> Result<NodeConfig, LoadError> {
    load_with(raw, LoadPolicy::default())
}

/// Validates an already-decoded raw tree.
pub fn load_with(raw: &RawNodeConfig, policy: LoadPolicy) -> Result<NodeConfig, LoadError> {
    let mut violations = check_required(raw);

    let executor = raw
        .executor
        .as_ref()
        .and_then(|e| parse_executor(e, policy, &mut violations));
    let metrics_server_addr = parse_field::<NetworkAddress>(
        raw.metrics_server_addr.as_deref(),
        "metricsServerAddr",
        &mut violations,
    );
    let consensus = raw
        .consensus
        .as_ref()
        .and_then(|c| parse_consensus(c, &mut violations));

    if !violations.is_empty() {
        return Err(LoadError::Invalid(violations));
    }
    let Some(executor) = executor else {
        // check_required reports an absent executor section, so reaching
        // this arm with an empty violation list would be a loader bug.
        return Err(LoadError::Invalid(vec![Violation::new(
            "executor",
            ViolationKind::MissingRequiredField,
            "executor section is required but unset",
        )]));
    };

    tracing::debug!(
        validators = executor.validators.len(),
        static_inbound = executor.gossip.static_inbound.len(),
        static_outbound = executor.gossip.static_outbound.len(),
        is_validator = consensus.is_some(),
        "config validated"
    );

    Ok(NodeConfig {
        executor,
        metrics_server_addr,
        consensus,
    })
}

/// Parses one present string field; absent fields pass through as `None`
/// (presence is `required.rs`'s business, not ours).
fn parse_field<T>(value: Option<&str>, path: &str, violations: &mut Vec<Violation>) -> Option<T>
where
    T: FromStr<Err = FormatError>,
{
    let s = value?;
    match s.parse() {
        Ok(v) => Some(v),
        Err(err) => {
            violations.push(Violation::from_format_error(path, &err));
            None
        }
    }
}

fn parse_executor(
    raw: &RawExecutorConfig,
    policy: LoadPolicy,
    violations: &mut Vec<Violation>,
) -> Option<ExecutorConfig> {
    let server_addr = parse_field::<NetworkAddress>(
        raw.server_addr.as_deref(),
        "executor.serverAddr",
        violations,
    );
    let gossip = raw
        .gossip
        .as_ref()
        .and_then(|g| parse_gossip(g, policy, violations));
    let genesis_block = parse_field::<GenesisBlock>(
        raw.genesis_block.as_deref(),
        "executor.genesisBlock",
        violations,
    );

    let mut validators = None;
    if let Some(list) = &raw.validators {
        if list.is_empty() {
            violations.push(Violation::new(
                "executor.validators",
                ViolationKind::MissingRequiredField,
                "validator set must not be empty",
            ));
        } else {
            let mut parsed = Vec::with_capacity(list.len());
            for (i, s) in list.iter().enumerate() {
                match s.parse::<ValidatorKey>() {
                    Ok(key) => parsed.push(key),
                    Err(err) => violations.push(Violation::from_format_error(
                        format!("executor.validators[{i}]"),
                        &err,
                    )),
                }
            }
            if parsed.len() == list.len() {
                validators = Some(parsed);
            }
        }
    }

    match (server_addr, gossip, genesis_block, validators) {
        (Some(server_addr), Some(gossip), Some(genesis_block), Some(validators)) => {
            Some(ExecutorConfig {
                server_addr,
                gossip,
                genesis_block,
                validators,
            })
        }
        _ => None,
    }
}

fn parse_gossip(
    raw: &RawGossipConfig,
    policy: LoadPolicy,
    violations: &mut Vec<Violation>,
) -> Option<GossipConfig> {
    let key = parse_field::<NodeKey>(raw.key.as_deref(), "executor.gossip.key", violations);

    let mut inbound_complete = true;
    let mut static_inbound = BTreeSet::new();
    if let Some(list) = &raw.static_inbound {
        for (i, s) in list.iter().enumerate() {
            match s.parse::<NodeKey>() {
                Ok(peer) => {
                    static_inbound.insert(peer);
                }
                Err(err) => {
                    inbound_complete = false;
                    violations.push(Violation::from_format_error(
                        format!("executor.gossip.staticInbound[{i}]"),
                        &err,
                    ));
                }
            }
        }
    }

    let mut outbound_complete = true;
    let mut static_outbound = Vec::new();
    if let Some(entries) = &raw.static_outbound {
        for (i, entry) in entries.iter().enumerate() {
            // Missing sub-fields were already reported by required.rs;
            // here we only parse what is present.
            let peer_key = parse_field::<NodeKey>(
                entry.key.as_deref(),
                &format!("executor.gossip.staticOutbound[{i}].key"),
                violations,
            );
            let peer_addr = parse_field::<NetworkAddress>(
                entry.addr.as_deref(),
                &format!("executor.gossip.staticOutbound[{i}].addr"),
                violations,
            );
            match (peer_key, peer_addr) {
                (Some(key), Some(addr)) => static_outbound.push(NodeAddr { key, addr }),
                _ => outbound_complete = false,
            }
        }
    }

    // Cross-field consistency: a node must not list itself as a peer.
    // Runs even when other gossip fields failed, so the conflict is part
    // of the same aggregated report.
    if let Some(own) = &key {
        check_self_reference(own, &static_inbound, &static_outbound, policy, violations);
    }

    match (key, raw.dynamic_inbound_limit) {
        (Some(key), Some(dynamic_inbound_limit)) if inbound_complete && outbound_complete => {
            Some(GossipConfig {
                key,
                dynamic_inbound_limit,
                static_inbound,
                static_outbound,
            })
        }
        _ => None,
    }
}

fn check_self_reference(
    own: &NodeKey,
    static_inbound: &BTreeSet<NodeKey>,
    static_outbound: &[NodeAddr],
    policy: LoadPolicy,
    violations: &mut Vec<Violation>,
) {
    let mut conflicts = Vec::new();
    if static_inbound.contains(own) {
        conflicts.push("executor.gossip.staticInbound".to_string());
    }
    for (i, entry) in static_outbound.iter().enumerate() {
        if &entry.key == own {
            conflicts.push(format!("executor.gossip.staticOutbound[{i}].key"));
        }
    }
    for path in conflicts {
        match policy.self_reference_peer {
            SelfReferencePolicy::Reject => violations.push(Violation::new(
                path,
                ViolationKind::SelfReferencePeerConflict,
                "own gossip key is listed as a peer of itself",
            )),
            SelfReferencePolicy::Warn => {
                tracing::warn!(%path, "own gossip key is listed as a peer of itself");
            }
        }
    }
}

fn parse_consensus(
    raw: &RawConsensusConfig,
    violations: &mut Vec<Violation>,
) -> Option<ConsensusConfig> {
    let key = parse_field::<ValidatorKey>(raw.key.as_deref(), "consensus.key", violations);
    let public_addr = parse_field::<NetworkAddress>(
        raw.public_addr.as_deref(),
        "consensus.publicAddr",
        violations,
    );
    match (key, public_addr) {
        (Some(key), Some(public_addr)) => Some(ConsensusConfig { key, public_addr }),
        _ => None,
    }
}
