//! Validated configuration model.
//!
//! Everything here is produced by `loader.rs` and is treated as read-only
//! for the rest of the process lifetime. Fields are crate-private and
//! exposed through accessors only, so an instance that bypassed parsing
//! cannot be built outside this crate; a reload builds a brand-new
//! `NodeConfig` and swaps it in atomically (see `handle.rs`).

use std::collections::BTreeSet;

use crate::formats::{GenesisBlock, NetworkAddress, NodeKey, ValidatorKey};

/// Fully-validated node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub(crate) executor: ExecutorConfig,
    pub(crate) metrics_server_addr: Option<NetworkAddress>,
    pub(crate) consensus: Option<ConsensusConfig>,
}

/// Executor: the gossip participant plus the validator set it trusts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    pub(crate) server_addr: NetworkAddress,
    pub(crate) gossip: GossipConfig,
    pub(crate) genesis_block: GenesisBlock,
    pub(crate) validators: Vec<ValidatorKey>,
}

/// Gossip network membership for this node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GossipConfig {
    pub(crate) key: NodeKey,
    pub(crate) dynamic_inbound_limit: u64,
    pub(crate) static_inbound: BTreeSet<NodeKey>,
    pub(crate) static_outbound: Vec<NodeAddr>,
}

/// One gossip peer: who to expect and where to dial them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAddr {
    pub(crate) key: NodeKey,
    pub(crate) addr: NetworkAddress,
}

/// Consensus validator identity and advertised endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsensusConfig {
    pub(crate) key: ValidatorKey,
    pub(crate) public_addr: NetworkAddress,
}

impl NodeConfig {
    pub fn executor(&self) -> &ExecutorConfig {
        &self.executor
    }

    /// Bind address for metrics scraping; `None` disables the endpoint.
    pub fn metrics_server_addr(&self) -> Option<NetworkAddress> {
        self.metrics_server_addr
    }

    /// Present only when this node runs as a consensus validator.
    pub fn consensus(&self) -> Option<&ConsensusConfig> {
        self.consensus.as_ref()
    }

    /// Whether this node participates in consensus.
    pub fn is_validator(&self) -> bool {
        self.consensus.is_some()
    }
}

impl ExecutorConfig {
    /// Address the gossip server listens on.
    pub fn server_addr(&self) -> NetworkAddress {
        self.server_addr
    }

    pub fn gossip(&self) -> &GossipConfig {
        &self.gossip
    }

    pub fn genesis_block(&self) -> &GenesisBlock {
        &self.genesis_block
    }

    /// Validator set; guaranteed non-empty by the loader.
    pub fn validators(&self) -> &[ValidatorKey] {
        &self.validators
    }
}

impl GossipConfig {
    /// This node's own key.
    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    /// Cap on inbound connections beyond the static set.
    pub fn dynamic_inbound_limit(&self) -> u64 {
        self.dynamic_inbound_limit
    }

    /// Keys accepted unconditionally for inbound connections.
    pub fn static_inbound(&self) -> &BTreeSet<NodeKey> {
        &self.static_inbound
    }

    /// Peers this node actively dials, in document order.
    pub fn static_outbound(&self) -> &[NodeAddr] {
        &self.static_outbound
    }
}

impl NodeAddr {
    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    pub fn addr(&self) -> NetworkAddress {
        self.addr
    }
}

impl ConsensusConfig {
    pub fn key(&self) -> &ValidatorKey {
        &self.key
    }

    /// Address advertised to other validators for consensus traffic.
    pub fn public_addr(&self) -> NetworkAddress {
        self.public_addr
    }
}
