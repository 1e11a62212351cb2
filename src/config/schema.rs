//! Raw document schema.
//!
//! Every field is optional at this layer, mirroring the wire format's
//! backward-compatibility rule: old documents must keep decoding as the
//! schema grows, so "required" lives in `required.rs` as an application
//! convention, never in the wire types themselves. Unknown keys are
//! ignored on decode (forward compatibility).
//!
//! Field names follow the canonical camelCase text mapping, e.g.
//! `metricsServerAddr`, `executor.serverAddr`, `gossip.dynamicInboundLimit`.

use serde::{Deserialize, Serialize};

/// Top-level raw document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawNodeConfig {
    /// Executor section (gossip participant + validator set).
    pub executor: Option<RawExecutorConfig>,

    /// Address the metrics endpoint binds to, e.g. "127.0.0.1:3312".
    pub metrics_server_addr: Option<String>,

    /// Consensus validator section; absent on non-validator nodes.
    pub consensus: Option<RawConsensusConfig>,
}

/// Raw executor section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawExecutorConfig {
    /// Gossip listen address, e.g. "0.0.0.0:3054".
    pub server_addr: Option<String>,

    /// Gossip network section.
    pub gossip: Option<RawGossipConfig>,

    /// Hex-encoded serialized genesis block.
    pub genesis_block: Option<String>,

    /// Validator set, as `validator:public:<scheme>:<hex>` strings.
    pub validators: Option<Vec<String>>,
}

/// Raw gossip section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGossipConfig {
    /// This node's own key, as `node:public:<scheme>:<hex>`.
    pub key: Option<String>,

    /// Cap on inbound connections accepted beyond the static set.
    pub dynamic_inbound_limit: Option<u64>,

    /// Node keys pre-authorized for unconditional inbound acceptance.
    pub static_inbound: Option<Vec<String>>,

    /// Peers this node actively dials.
    pub static_outbound: Option<Vec<RawNodeAddr>>,
}

/// Raw gossip peer entry: a node key plus the address to dial it at.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawNodeAddr {
    pub key: Option<String>,
    pub addr: Option<String>,
}

/// Raw consensus section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConsensusConfig {
    /// Validator key, as `validator:public:<scheme>:<hex>`.
    pub key: Option<String>,

    /// Address this validator advertises for consensus traffic.
    pub public_addr: Option<String>,
}
