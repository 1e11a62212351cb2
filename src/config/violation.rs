//! Violation reporting.
//!
//! A load attempt never stops at the first problem: every violation found
//! in one pass is aggregated so a user can fix the whole document in one
//! edit cycle. The same shape is reused by the schema-compatibility
//! checker, which shares the dotted-path + kind + message vocabulary.

use std::fmt;

use crate::formats::FormatError;

/// Classification of a single violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    // Loader / validator kinds.
    MissingRequiredField,
    InvalidNetworkAddressFormat,
    InvalidPortRange,
    UnrecognizedKeyPrefix,
    UnsupportedSignatureScheme,
    WrongKeyLength,
    InvalidHexEncoding,
    EmptyGenesisBlock,
    SelfReferencePeerConflict,

    // Schema-compatibility kinds.
    FieldNumberChanged,
    RequiredFieldRemovedWithoutVersionBump,
    IncompatibleWireTypeChange,
    NewFieldMarkedRequired,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViolationKind::MissingRequiredField => "missing required field",
            ViolationKind::InvalidNetworkAddressFormat => "invalid network address format",
            ViolationKind::InvalidPortRange => "port out of range",
            ViolationKind::UnrecognizedKeyPrefix => "unrecognized key prefix",
            ViolationKind::UnsupportedSignatureScheme => "unsupported signature scheme",
            ViolationKind::WrongKeyLength => "wrong key length",
            ViolationKind::InvalidHexEncoding => "invalid hex encoding",
            ViolationKind::EmptyGenesisBlock => "empty genesis block",
            ViolationKind::SelfReferencePeerConflict => "self-referencing peer entry",
            ViolationKind::FieldNumberChanged => "field number changed",
            ViolationKind::RequiredFieldRemovedWithoutVersionBump => {
                "required field removed without version bump"
            }
            ViolationKind::IncompatibleWireTypeChange => "incompatible wire type change",
            ViolationKind::NewFieldMarkedRequired => "new field marked required",
        };
        f.write_str(s)
    }
}

/// One problem found in a document or schema snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted field path in canonical camelCase, list entries indexed,
    /// e.g. `executor.gossip.staticOutbound[2].addr`.
    pub path: String,
    pub kind: ViolationKind,
    /// Human-readable description, suitable for direct display.
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Violation {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }

    /// Wraps a format-parser failure, pinning it to the field it came from.
    pub fn from_format_error(path: impl Into<String>, err: &FormatError) -> Self {
        let kind = match err {
            FormatError::InvalidAddress(_) => ViolationKind::InvalidNetworkAddressFormat,
            FormatError::PortOutOfRange(_) => ViolationKind::InvalidPortRange,
            FormatError::UnrecognizedPrefix { .. } => ViolationKind::UnrecognizedKeyPrefix,
            FormatError::UnsupportedScheme { .. } => ViolationKind::UnsupportedSignatureScheme,
            FormatError::WrongKeyLength { .. } => ViolationKind::WrongKeyLength,
            FormatError::InvalidHex(_) => ViolationKind::InvalidHexEncoding,
            FormatError::EmptyBlock => ViolationKind::EmptyGenesisBlock,
        };
        Violation::new(path, kind, err.to_string())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.path, self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_map_to_distinct_kinds() {
        let cases = [
            (
                FormatError::InvalidAddress("x".into()),
                ViolationKind::InvalidNetworkAddressFormat,
            ),
            (FormatError::PortOutOfRange(70000), ViolationKind::InvalidPortRange),
            (
                FormatError::UnrecognizedPrefix { expected: "node:public" },
                ViolationKind::UnrecognizedKeyPrefix,
            ),
            (FormatError::EmptyBlock, ViolationKind::EmptyGenesisBlock),
        ];
        for (err, kind) in cases {
            assert_eq!(Violation::from_format_error("p", &err).kind, kind);
        }
    }

    #[test]
    fn display_includes_path_and_kind() {
        let v = Violation::new(
            "executor.serverAddr",
            ViolationKind::MissingRequiredField,
            "gossip listen address is required but unset",
        );
        let s = v.to_string();
        assert!(s.starts_with("executor.serverAddr: missing required field"));
    }
}
