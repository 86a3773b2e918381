//! # Identifier Codec
//!
//! Composes and decomposes the full `did:key:<multibase>` identifier string.
//!
//! A `did:key` identifier is of the form `did:key:z<base58-btc>`, where the
//! method-specific id is the multibase encoding of the multicodec-prefixed
//! public key. The identifier is self-certifying: everything in the resolved
//! document derives from it.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::multicodec::{self, KeyType};

// W3C DID Core §3 ABNF: method-specific-id uses only characters in
// [A-Za-z0-9._:%-], must be non-empty, and must not end with a colon.
static DID_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^did:key:(?<identifier>[A-Za-z0-9._%:-]*[A-Za-z0-9._%-])$")
        .expect("should compile")
});

/// Construct a `did:key` identifier from raw public key bytes.
#[must_use]
pub fn to_did(key_type: KeyType, public: &[u8]) -> String {
    format!("did:key:{}", multicodec::encode(key_type, public))
}

/// Extract the method-specific id (the multibase key string) from a
/// `did:key` identifier.
///
/// # Errors
///
/// Returns [`Error::InvalidDidSyntax`] if the string does not match the
/// `did:key` ABNF.
pub fn method_specific_id(did: &str) -> Result<&str> {
    let Some(caps) = DID_KEY_REGEX.captures(did) else {
        return Err(Error::InvalidDidSyntax(format!("not a valid did:key identifier: {did}")));
    };
    Ok(caps.name("identifier").map_or("", |m| m.as_str()))
}

/// Decompose a `did:key` identifier into a key type and raw public key
/// bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidDidSyntax`] if the string does not match the
/// `did:key` ABNF; transcoding errors pass through unchanged.
pub fn from_did(did: &str) -> Result<(KeyType, Vec<u8>)> {
    multicodec::decode(method_specific_id(did)?)
}

/// Check a `did:key` identifier decodes to valid key material, without
/// surfacing the error detail.
#[must_use]
pub fn validate_syntax(did: &str) -> bool {
    from_did(did).is_ok()
}

#[cfg(test)]
mod test {
    use super::*;

    const DID: &str = "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";

    #[test]
    fn round_trip() {
        let (key_type, public) = from_did(DID).expect("should decode");
        assert_eq!(key_type, KeyType::Ed25519);
        assert_eq!(public.len(), 32);
        assert_eq!(to_did(key_type, &public), DID);
    }

    #[test]
    fn rejects_empty_id() {
        let err = from_did("did:key:").expect_err("should fail");
        assert!(matches!(err, Error::InvalidDidSyntax(_)));
        assert!(!validate_syntax("did:key:"));
    }

    #[test]
    fn rejects_wrong_method() {
        let err = from_did("did:web:example.com").expect_err("should fail");
        assert!(matches!(err, Error::InvalidDidSyntax(_)));
        assert!(!validate_syntax("did:web:example.com"));
    }

    #[test]
    fn rejects_trailing_colon() {
        assert!(!validate_syntax("did:key:z6Mkh:"));
    }

    #[test]
    fn rejects_wrong_multibase() {
        // syntactically valid but not base58-btc
        let err = from_did("did:key:mAQID").expect_err("should fail");
        assert!(matches!(err, Error::UnsupportedMultibase(_)));
    }

    #[test]
    fn validates_canonical_vector() {
        assert!(validate_syntax(DID));
    }
}
