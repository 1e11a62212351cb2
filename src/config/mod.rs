//! Configuration validation subsystem.
//!
//! # Data Flow
//! ```text
//! config document (JSON, every field optional on the wire)
//!     → schema.rs (decode into the raw optional-field tree)
//!     → required.rs (missing-required violations, all at once)
//!     → formats/* (string grammars → typed values)
//!     → loader.rs (aggregate violations or assemble NodeConfig)
//!     → NodeConfig (validated, immutable)
//!     → shared via ConfigHandle (atomic swap on reload)
//! ```
//!
//! # Design Decisions
//! - Two-phase model: the wire keeps every field optional so old and new
//!   schema versions stay compatible; "required" is an application-level
//!   table checked after decode
//! - Absent optional fields stay `None`; no silent defaulting
//! - All violations from one load are reported together

pub mod handle;
pub mod loader;
pub mod model;
pub mod required;
pub mod schema;
pub mod violation;

pub use handle::ConfigHandle;
pub use loader::{load_str, load_str_with, LoadError, LoadPolicy, SelfReferencePolicy};
pub use model::{ConsensusConfig, ExecutorConfig, GossipConfig, NodeAddr, NodeConfig};
pub use schema::RawNodeConfig;
pub use violation::{Violation, ViolationKind};
