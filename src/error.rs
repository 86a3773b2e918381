//! # Errors
//!
//! Every fallible operation in this crate returns exactly one of the error
//! kinds below. All failures are local validation failures: deterministic
//! given the input, never retried, never partial.

use thiserror::Error;

/// Result type for `did:key` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed errors for `did:key` encoding, decoding, and document construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The string does not match the `did:key` ABNF. Also reported when a
    /// verification relationship name is not one of the five the DID Core
    /// grammar defines (rejected at configuration parse time).
    #[error("invalidDidSyntax: {0}")]
    InvalidDidSyntax(String),

    /// The method-specific id does not use the base58-btc multibase (`z`).
    #[error("unsupportedMultibase: {0}")]
    UnsupportedMultibase(String),

    /// The method-specific id is not valid base58-btc. Also reported when
    /// correctly sized public key bytes are not a valid encoding of a curve
    /// point.
    #[error("invalidEncoding: {0}")]
    InvalidEncoding(String),

    /// The multicodec prefix is not in the known enumeration of key types.
    #[error("unsupportedKeyType: {0}")]
    UnsupportedKeyType(String),

    /// The decoded key bytes do not match the expected length for the
    /// declared key type.
    #[error("invalidKeyLength: {0}")]
    InvalidKeyLength(String),

    /// Two service entries share an `id` within one document.
    #[error("duplicateServiceId: {0}")]
    DuplicateServiceId(String),
}

impl Error {
    /// Returns the error detail message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidDidSyntax(msg)
            | Self::UnsupportedMultibase(msg)
            | Self::InvalidEncoding(msg)
            | Self::UnsupportedKeyType(msg)
            | Self::InvalidKeyLength(msg)
            | Self::DuplicateServiceId(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_code() {
        let err = Error::UnsupportedKeyType("unknown multicodec prefix".into());
        assert_eq!(err.message(), "unknown multicodec prefix");
        assert_eq!(err.to_string(), "unsupportedKeyType: unknown multicodec prefix");
    }
}
