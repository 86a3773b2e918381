//! # Key Provider
//!
//! Thin wrapper over `ed25519-dalek` for generating and validating raw
//! Ed25519 key material. Key generation is the only place randomness enters
//! the crate; every other operation is deterministic.

use std::fmt::{self, Debug, Formatter};

use ed25519_dalek::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::multicodec::KeyType;

/// Raw Ed25519 secret key bytes.
///
/// The buffer is zeroized on drop. The crate never persists or logs secret
/// bytes; any longer-lived storage and its secure disposal are the caller's
/// obligation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SECRET_KEY_LENGTH]);

impl SecretKey {
    /// Borrow the raw secret bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.0
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(..)")
    }
}

/// A key pair for a supported key type.
///
/// The inner `SigningKey` scrubs its own buffer on drop (`ed25519-dalek`'s
/// `zeroize` feature); copies handed out via [`KeyPair::secret_key`] are
/// wrapped in [`SecretKey`] and scrubbed the same way.
pub struct KeyPair {
    key_type: KeyType,
    signing_key: SigningKey,
}

impl KeyPair {
    /// Generate a new random key pair using the operating system's secure
    /// random source.
    #[must_use]
    pub fn generate(key_type: KeyType) -> Self {
        match key_type {
            KeyType::Ed25519 => Self {
                key_type,
                signing_key: SigningKey::generate(&mut OsRng),
            },
        }
    }

    /// Reconstruct a key pair from raw secret key bytes.
    ///
    /// Public key derivation is pure: the same secret bytes always produce
    /// the same public key.
    #[must_use]
    pub fn from_secret_bytes(secret: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            key_type: KeyType::Ed25519,
            signing_key: SigningKey::from_bytes(secret),
        }
    }

    /// The key type of the pair.
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// The raw public key bytes.
    #[must_use]
    pub fn public_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// The secret key bytes, wrapped so they are zeroized on drop.
    #[must_use]
    pub fn secret_key(&self) -> SecretKey {
        SecretKey(self.signing_key.to_bytes())
    }
}

/// Validate raw public key bytes for the given key type.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyLength`] if the byte count is wrong for the
/// key type, or [`Error::InvalidEncoding`] if the bytes are not a valid
/// curve point.
pub fn validate_public_bytes(key_type: KeyType, public: &[u8]) -> Result<()> {
    if public.len() != key_type.key_length() {
        return Err(Error::InvalidKeyLength(format!(
            "expected {} key bytes for {key_type}, found {}",
            key_type.key_length(),
            public.len()
        )));
    }
    match key_type {
        KeyType::Ed25519 => {
            let bytes: [u8; PUBLIC_KEY_LENGTH] =
                public.try_into().map_err(|_| {
                    Error::InvalidKeyLength(format!(
                        "public key is not {PUBLIC_KEY_LENGTH} bytes"
                    ))
                })?;
            VerifyingKey::from_bytes(&bytes).map_err(|e| {
                Error::InvalidEncoding(format!("public key is not a valid curve point: {e}"))
            })?;
        }
    }
    Ok(())
}
