//! # Multibase/Multicodec Transcoding
//!
//! Converts between raw public key bytes and the self-describing, prefixed,
//! base-encoded string used inside a `did:key` identifier.
//!
//! See:
//!
//! - <https://github.com/multiformats/multibase>
//! - <https://github.com/multiformats/multicodec>

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use multibase::Base;

use crate::error::{Error, Result};

/// Multicodec prefix for an Ed25519 public key (unsigned varint `0xed`).
pub const ED25519_CODEC: [u8; 2] = [0xed, 0x01];

/// Multibase indicator character for base58-btc, the only multibase
/// `did:key` uses in its canonical form.
const BASE58_BTC: char = 'z';

/// Key types supported by this crate.
///
/// Each variant pairs a multicodec prefix with an expected raw key length.
/// Adding a key type means adding one variant and its prefix/length entries,
/// never changing call sites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyType {
    /// Ed25519 signing key.
    #[default]
    Ed25519,
}

impl KeyType {
    /// The 2-byte multicodec prefix identifying the key type.
    #[must_use]
    pub const fn codec(self) -> [u8; 2] {
        match self {
            Self::Ed25519 => ED25519_CODEC,
        }
    }

    /// Expected raw public key length in bytes.
    #[must_use]
    pub const fn key_length(self) -> usize {
        match self {
            Self::Ed25519 => 32,
        }
    }

    /// Look up a key type by its multicodec prefix.
    #[must_use]
    pub fn from_codec(prefix: &[u8]) -> Option<Self> {
        match prefix {
            p if p == ED25519_CODEC => Some(Self::Ed25519),
            _ => None,
        }
    }
}

impl FromStr for KeyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Ed25519" => Ok(Self::Ed25519),
            _ => Err(Error::UnsupportedKeyType(format!("key type not supported: {s}"))),
        }
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => write!(f, "Ed25519"),
        }
    }
}

/// Encode raw public key bytes as a multibase string: multicodec prefix,
/// then base58-btc, then the leading `z` indicator.
#[must_use]
pub fn encode(key_type: KeyType, raw: &[u8]) -> String {
    let mut multi_bytes = key_type.codec().to_vec();
    multi_bytes.extend_from_slice(raw);
    multibase::encode(Base::Base58Btc, &multi_bytes)
}

/// Decode a multibase string back into a key type and raw public key bytes.
///
/// # Errors
///
/// - [`Error::UnsupportedMultibase`] if the leading character is not `z`.
/// - [`Error::InvalidEncoding`] if the remainder is not valid base58-btc.
/// - [`Error::UnsupportedKeyType`] if the multicodec prefix is unknown.
/// - [`Error::InvalidKeyLength`] if the remaining bytes are not exactly the
///   expected raw key length for the declared type.
pub fn decode(multikey: &str) -> Result<(KeyType, Vec<u8>)> {
    let Some(first) = multikey.chars().next() else {
        return Err(Error::UnsupportedMultibase("empty multibase string".into()));
    };
    if first != BASE58_BTC {
        return Err(Error::UnsupportedMultibase(format!(
            "expected base58-btc indicator '{BASE58_BTC}', found '{first}'"
        )));
    }
    let (_, multi_bytes) = multibase::decode(multikey)
        .map_err(|e| Error::InvalidEncoding(format!("issue decoding base58-btc: {e}")))?;

    if multi_bytes.len() < 2 {
        return Err(Error::InvalidKeyLength(
            "decoded data too short to contain a multicodec prefix".into(),
        ));
    }
    let Some(key_type) = KeyType::from_codec(&multi_bytes[..2]) else {
        return Err(Error::UnsupportedKeyType(format!(
            "unknown multicodec prefix: 0x{:02x}{:02x}",
            multi_bytes[0], multi_bytes[1]
        )));
    };

    let raw = &multi_bytes[2..];
    if raw.len() != key_type.key_length() {
        return Err(Error::InvalidKeyLength(format!(
            "expected {} key bytes for {key_type}, found {}",
            key_type.key_length(),
            raw.len()
        )));
    }

    Ok((key_type, raw.to_vec()))
}
