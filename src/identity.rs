//! # Agent Identity
//!
//! The primary API for working with agent identities: a DID, its document,
//! and the key material behind it.
//!
//! An [`Identity`] is constructed once, by generation or resolution, and is
//! immutable thereafter. Only the generation path produces a secret key; the
//! document-construction and resolution paths can never observe one.

use tracing::debug;

use crate::document::Document;
use crate::document::builder::{CreateOptions, build_document};
use crate::error::Result;
use crate::identifier;
use crate::keys::{KeyPair, SecretKey, validate_public_bytes};
use crate::multicodec::KeyType;

/// An agent identity: a `did:key` DID, its derived document, and the public
/// key both are derived from.
///
/// The secret key is present only when the identity was created by
/// [`Identity::create`]. Its buffer is zeroized on drop; any copies the
/// caller takes are the caller's to dispose of securely.
#[derive(Debug)]
pub struct Identity {
    did: String,
    key_type: KeyType,
    document: Document,
    public_key: Vec<u8>,
    secret_key: Option<SecretKey>,
}

impl Identity {
    /// Create a new identity with a freshly generated key pair.
    ///
    /// This is the only operation in the crate that consumes randomness.
    ///
    /// # Errors
    ///
    /// Returns the document builder's error if the configuration is
    /// invalid.
    pub fn create(key_type: KeyType, options: &CreateOptions) -> Result<Self> {
        let pair = KeyPair::generate(key_type);
        let public = pair.public_bytes().to_vec();
        let did = identifier::to_did(key_type, &public);
        let document = build_document(&did, key_type, &public, options)?;
        debug!("created identity {did}");

        Ok(Self {
            did,
            key_type,
            document,
            public_key: public,
            secret_key: Some(pair.secret_key()),
        })
    }

    /// Create an identity from an existing public key.
    ///
    /// Useful when keys already exist and only the DID and document are
    /// needed. The resulting identity has no secret key.
    ///
    /// # Errors
    ///
    /// Returns an error if the public bytes are not valid key material for
    /// the key type, or if the configuration is invalid.
    pub fn from_public_key(
        key_type: KeyType, public: &[u8], options: &CreateOptions,
    ) -> Result<Self> {
        validate_public_bytes(key_type, public)?;
        let did = identifier::to_did(key_type, public);
        let document = build_document(&did, key_type, public, options)?;

        Ok(Self {
            did,
            key_type,
            document,
            public_key: public.to_vec(),
            secret_key: None,
        })
    }

    /// Resolve an existing DID into an identity.
    ///
    /// Resolution uses the default document configuration; the secret key is
    /// never recoverable from the identifier.
    ///
    /// # Errors
    ///
    /// Fails with the identifier codec's error if the DID is malformed or
    /// uses an unsupported key type.
    pub fn resolve(did: &str) -> Result<Self> {
        let (key_type, public) = identifier::from_did(did)?;
        let document = build_document(did, key_type, &public, &CreateOptions::default())?;
        debug!("resolved identity {did}");

        Ok(Self {
            did: did.to_string(),
            key_type,
            document,
            public_key: public,
            secret_key: None,
        })
    }

    /// The DID identifier.
    #[must_use]
    pub fn did(&self) -> &str {
        &self.did
    }

    /// The key type.
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// The DID document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The raw public key bytes.
    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// The secret key, if this identity was created by [`Identity::create`].
    #[must_use]
    pub const fn secret_key(&self) -> Option<&SecretKey> {
        self.secret_key.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::document::{Service, VerificationRelationship};

    #[test]
    fn create_carries_secret() {
        let identity =
            Identity::create(KeyType::Ed25519, &CreateOptions::default()).expect("should create");

        assert!(identity.did().starts_with("did:key:z"));
        assert_eq!(identity.key_type(), KeyType::Ed25519);
        assert_eq!(identity.public_key().len(), 32);
        assert!(identity.secret_key().is_some());
        assert_eq!(identity.document().id, identity.did());
    }

    #[test]
    fn resolve_has_no_secret() {
        let created =
            Identity::create(KeyType::Ed25519, &CreateOptions::default()).expect("should create");
        let resolved = Identity::resolve(created.did()).expect("should resolve");

        assert_eq!(resolved.did(), created.did());
        assert_eq!(resolved.public_key(), created.public_key());
        assert!(resolved.secret_key().is_none());
    }

    #[test]
    fn from_public_key_round_trip() {
        let created =
            Identity::create(KeyType::Ed25519, &CreateOptions::default()).expect("should create");
        let options = CreateOptions {
            verification_relationships: vec![VerificationRelationship::Authentication],
            services: vec![Service::new("#inbox", "MessagingService", "https://a.example/in")],
            ..CreateOptions::default()
        };
        let identity = Identity::from_public_key(KeyType::Ed25519, created.public_key(), &options)
            .expect("should build");

        assert_eq!(identity.did(), created.did());
        assert!(identity.secret_key().is_none());
        assert_eq!(identity.document().authentication.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn from_public_key_rejects_garbage() {
        let err = Identity::from_public_key(
            KeyType::Ed25519,
            &[0u8; 16],
            &CreateOptions::default(),
        )
        .expect_err("should fail");
        assert!(matches!(err, crate::Error::InvalidKeyLength(_)));
    }
}
