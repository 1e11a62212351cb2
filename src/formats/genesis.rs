//! Genesis block encoding.

use std::fmt;
use std::str::FromStr;

use crate::formats::FormatError;

/// Raw bytes of a serialized genesis block record.
///
/// At this layer the payload is opaque: the hex must decode cleanly and be
/// non-empty, structural validation of the decoded block belongs to the
/// consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBlock {
    bytes: Vec<u8>,
}

impl GenesisBlock {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl FromStr for GenesisBlock {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FormatError::EmptyBlock);
        }
        let bytes = hex::decode(s).map_err(|e| FormatError::InvalidHex(e.to_string()))?;
        Ok(GenesisBlock { bytes })
    }
}

impl fmt::Display for GenesisBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hex() {
        let block: GenesisBlock = "00ff10".parse().unwrap();
        assert_eq!(block.as_bytes(), &[0x00, 0xff, 0x10]);
        assert_eq!(block.to_string(), "00ff10");
    }

    #[test]
    fn tolerates_uppercase() {
        let block: GenesisBlock = "DEADBEEF".parse().unwrap();
        assert_eq!(block.len(), 4);
        // Display canonicalizes to lowercase.
        assert_eq!(block.to_string(), "deadbeef");
    }

    #[test]
    fn rejects_odd_length() {
        let err = "abc".parse::<GenesisBlock>().unwrap_err();
        assert!(matches!(err, FormatError::InvalidHex(_)));
    }

    #[test]
    fn rejects_non_hex() {
        let err = "xy12".parse::<GenesisBlock>().unwrap_err();
        assert!(matches!(err, FormatError::InvalidHex(_)));
    }

    #[test]
    fn rejects_empty() {
        let err = "".parse::<GenesisBlock>().unwrap_err();
        assert_eq!(err, FormatError::EmptyBlock);
    }
}
