//! Typed configuration validation for a gossip/consensus node.
//!
//! Sits between a loosely-typed config document — every field optional on
//! the wire, for schema-evolution compatibility — and the strongly-typed,
//! fully-validated `NodeConfig` that bootstraps the node.
//!
//! # Architecture Overview
//!
//! ```text
//!   config document (JSON)          schema snapshots (JSON, checked in)
//!           │                                    │
//!           ▼                                    ▼
//!   ┌──────────────┐                     ┌──────────────┐
//!   │   config::   │                     │   compat::   │
//!   │    schema    │  raw optional tree  │    check     │  CI-only pass
//!   └──────┬───────┘                     └──────┬───────┘
//!          │                                    │
//!          ▼                                    ▼
//!   ┌──────────────┐   ┌──────────────┐   Vec<Violation>
//!   │   config::   │──▶│   formats::  │
//!   │   required   │   │ addr/key/... │
//!   └──────┬───────┘   └──────┬───────┘
//!          └────────┬─────────┘
//!                   ▼
//!          ┌──────────────┐
//!          │   config::   │  all violations aggregated,
//!          │    loader    │  or a validated NodeConfig
//!          └──────────────┘
//! ```
//!
//! No network calls, no key verification, no file watching: this layer only
//! guarantees that values are well-formed and structurally complete. The
//! compatibility checker runs offline against schema snapshots and never
//! touches a live document.

pub mod compat;
pub mod config;
pub mod formats;

pub use config::loader::{load_str, load_str_with, LoadError, LoadPolicy, SelfReferencePolicy};
pub use config::model::NodeConfig;
pub use config::violation::{Violation, ViolationKind};
pub use config::ConfigHandle;
