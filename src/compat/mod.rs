//! Schema-compatibility checking.
//!
//! # Data Flow
//! ```text
//! old snapshot (JSON)  new snapshot (JSON)
//!         └──────┬───────────┘
//!            check.rs (evolution rules)
//!                → Vec<Violation> (empty = compatible)
//! ```
//!
//! # Design Decisions
//! - Operates on schema snapshots only, never on live documents, so it can
//!   run in CI against checked-in files
//! - Decoupled from the runtime loader: renumbering a field breaks wire
//!   compatibility long before any document fails to load, which is exactly
//!   why this pass exists
//! - Shares the `Violation` vocabulary with the loader

pub mod check;
pub mod snapshot;

pub use check::{check_compat, check_compat_with, CompatPolicy};
pub use snapshot::{FieldDescriptor, FieldType, SchemaSnapshot};
