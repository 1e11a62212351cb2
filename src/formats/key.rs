//! Public-key string formats.
//!
//! Keys travel through config documents as tagged strings:
//! `validator:public:bn254:<hex>` for consensus validator keys and
//! `node:public:ed25519:<hex>` for gossip node keys. The role prefix, the
//! `public` marker, the scheme tag and the key length are all checked here;
//! no cryptographic validation happens at this layer.

use std::fmt;
use std::str::FromStr;

use crate::formats::FormatError;

const VALIDATOR_PREFIX: &str = "validator:public";
const NODE_PREFIX: &str = "node:public";

/// Signature-scheme tag carried inside a key string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignatureScheme {
    /// Pairing-friendly curve used by validator (consensus) keys.
    Bn254,
    /// Edwards curve used by node (gossip) keys.
    Ed25519,
}

impl SignatureScheme {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bn254" => Some(SignatureScheme::Bn254),
            "ed25519" => Some(SignatureScheme::Ed25519),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            SignatureScheme::Bn254 => "bn254",
            SignatureScheme::Ed25519 => "ed25519",
        }
    }

    /// Expected public-key length in bytes.
    pub fn key_len(&self) -> usize {
        match self {
            SignatureScheme::Bn254 => 64,
            SignatureScheme::Ed25519 => 32,
        }
    }
}

/// Consensus validator public key. Allow-list: bn254.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatorKey {
    scheme: SignatureScheme,
    bytes: Vec<u8>,
}

/// Gossip node public key. Allow-list: ed25519.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    scheme: SignatureScheme,
    bytes: Vec<u8>,
}

impl ValidatorKey {
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl NodeKey {
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl FromStr for ValidatorKey {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, bytes) =
            parse_tagged_key(s, "validator", VALIDATOR_PREFIX, &[SignatureScheme::Bn254])?;
        Ok(ValidatorKey { scheme, bytes })
    }
}

impl FromStr for NodeKey {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, bytes) =
            parse_tagged_key(s, "node", NODE_PREFIX, &[SignatureScheme::Ed25519])?;
        Ok(NodeKey { scheme, bytes })
    }
}

impl fmt::Display for ValidatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            VALIDATOR_PREFIX,
            self.scheme.tag(),
            hex::encode(&self.bytes)
        )
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            NODE_PREFIX,
            self.scheme.tag(),
            hex::encode(&self.bytes)
        )
    }
}

/// Shared grammar: `<role>:public:<scheme>:<hex>`.
///
/// The scheme allow-list is checked before the hex so an unknown tag is
/// reported as `UnsupportedScheme` even when the hex would decode to a
/// plausible length for some other scheme.
fn parse_tagged_key(
    s: &str,
    role: &'static str,
    prefix: &'static str,
    allowed: &[SignatureScheme],
) -> Result<(SignatureScheme, Vec<u8>), FormatError> {
    let mut parts = s.splitn(4, ':');
    let (got_role, got_vis, tag, hex_part) =
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(r), Some(v), Some(t), Some(h)) => (r, v, t, h),
            _ => return Err(FormatError::UnrecognizedPrefix { expected: prefix }),
        };
    if got_role != role || got_vis != "public" {
        return Err(FormatError::UnrecognizedPrefix { expected: prefix });
    }
    let scheme = SignatureScheme::from_tag(tag)
        .filter(|s| allowed.contains(s))
        .ok_or_else(|| FormatError::UnsupportedScheme {
            role,
            got: tag.to_string(),
        })?;
    let bytes = hex::decode(hex_part).map_err(|e| FormatError::InvalidHex(e.to_string()))?;
    if bytes.len() != scheme.key_len() {
        return Err(FormatError::WrongKeyLength {
            scheme: scheme.tag(),
            expected: scheme.key_len(),
            got: bytes.len(),
        });
    }
    Ok((scheme, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator_str() -> String {
        format!("validator:public:bn254:{}", "ab".repeat(64))
    }

    fn node_str() -> String {
        format!("node:public:ed25519:{}", "cd".repeat(32))
    }

    #[test]
    fn parses_validator_key() {
        let key: ValidatorKey = validator_str().parse().unwrap();
        assert_eq!(key.scheme(), SignatureScheme::Bn254);
        assert_eq!(key.as_bytes().len(), 64);
        assert_eq!(key.to_string(), validator_str());
    }

    #[test]
    fn parses_node_key() {
        let key: NodeKey = node_str().parse().unwrap();
        assert_eq!(key.scheme(), SignatureScheme::Ed25519);
        assert_eq!(key.as_bytes().len(), 32);
        assert_eq!(key.to_string(), node_str());
    }

    #[test]
    fn rejects_wrong_role_prefix() {
        // A node key string is not a validator key, and vice versa.
        let err = node_str().parse::<ValidatorKey>().unwrap_err();
        assert!(matches!(err, FormatError::UnrecognizedPrefix { .. }));
        let err = validator_str().parse::<NodeKey>().unwrap_err();
        assert!(matches!(err, FormatError::UnrecognizedPrefix { .. }));
    }

    #[test]
    fn rejects_missing_public_marker() {
        let s = format!("validator:secret:bn254:{}", "ab".repeat(64));
        let err = s.parse::<ValidatorKey>().unwrap_err();
        assert!(matches!(err, FormatError::UnrecognizedPrefix { .. }));
    }

    #[test]
    fn unknown_scheme_beats_plausible_hex() {
        // 32 bytes of valid hex, but the tag is outside the validator
        // allow-list: must be UnsupportedScheme, not WrongKeyLength.
        let s = format!("validator:public:ed25519:{}", "ab".repeat(32));
        let err = s.parse::<ValidatorKey>().unwrap_err();
        assert_eq!(
            err,
            FormatError::UnsupportedScheme {
                role: "validator",
                got: "ed25519".into()
            }
        );
    }

    #[test]
    fn rejects_wrong_length() {
        let s = format!("node:public:ed25519:{}", "cd".repeat(31));
        let err = s.parse::<NodeKey>().unwrap_err();
        assert_eq!(
            err,
            FormatError::WrongKeyLength {
                scheme: "ed25519",
                expected: 32,
                got: 31
            }
        );
    }

    #[test]
    fn rejects_bad_hex() {
        let s = format!("node:public:ed25519:zz{}", "cd".repeat(31));
        let err = s.parse::<NodeKey>().unwrap_err();
        assert!(matches!(err, FormatError::InvalidHex(_)));
    }

    #[test]
    fn rejects_truncated_string() {
        let err = "validator:public".parse::<ValidatorKey>().unwrap_err();
        assert!(matches!(err, FormatError::UnrecognizedPrefix { .. }));
    }
}
