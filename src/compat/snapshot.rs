//! Schema snapshots.
//!
//! A snapshot is a versioned description of the field layout: path, field
//! number, scalar type and the required-by-convention flag. Snapshots are
//! checked in as JSON files and compared offline; no live document is
//! involved.

use serde::{Deserialize, Serialize};

/// One versioned schema layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSnapshot {
    /// Major version; bumping it relaxes the required-field-removal rule.
    pub major_version: u32,

    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

/// One field in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Dotted canonical path, e.g. `gossip.dynamicInboundLimit`.
    pub path: String,

    /// Wire field number.
    pub number: u32,

    pub field_type: FieldType,

    /// Required by application convention (the wire always allows absence).
    #[serde(default)]
    pub required: bool,
}

/// Scalar type of a field, as declared in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Bool,
    String,
    Bytes,
    Message,
}

impl FieldType {
    /// Whether a field can change from `self` to `new` without breaking
    /// wire compatibility.
    ///
    /// Plain varint ints and bool share an encoding and may be widened
    /// freely; zigzag ints only among themselves; string and bytes are
    /// interchangeable length-delimited payloads. Message fields must stay
    /// the same type.
    pub fn compatible_with(self, new: FieldType) -> bool {
        use FieldType::*;
        if self == new {
            return true;
        }
        matches!(
            (self, new),
            (Uint32 | Uint64 | Bool, Uint32 | Uint64 | Bool)
                | (Sint32 | Sint64, Sint32 | Sint64)
                | (String | Bytes, String | Bytes)
        )
    }
}
