//! # Agent DID
//!
//! Self-certifying Decentralized Identifiers (DIDs) for software agents
//! using the [`did:key`](https://w3c-ccg.github.io/did-method-key) method.
//!
//! The identifier and its full DID document are derived deterministically
//! from a public key: there is no registry, ledger, or network lookup.
//! This crate covers the codec and document-derivation core:
//!
//! - encoding a public key into a `did:key` identifier and back
//!   ([`identifier`], [`multicodec`]),
//! - deterministic construction of the DID document from the decoded key
//!   and a request configuration ([`document`]),
//! - resolution of a bare DID string into a fully materialized document as
//!   a pure function of the string ([`resolve`]),
//! - the [`Identity`] composite tying a DID, its document, and key
//!   material together.
//!
//! All operations are synchronous and side-effect-free except key
//! generation's read of a secure random source. Every failure is one of the
//! closed set of kinds in [`Error`].

pub mod core;
pub mod document;
mod error;
pub mod identifier;
mod identity;
pub mod keys;
pub mod multicodec;
pub mod resolve;

pub use self::document::builder::{CreateOptions, DocumentBuilder, build_document};
pub use self::document::{
    DID_CONTEXT, Document, MULTIKEY_CONTEXT, MethodType, Service, VerificationMethod,
    VerificationRelationship,
};
pub use self::error::{Error, Result};
pub use self::identifier::{from_did, to_did, validate_syntax};
pub use self::identity::Identity;
pub use self::keys::{KeyPair, SecretKey};
pub use self::multicodec::{ED25519_CODEC, KeyType};
pub use self::resolve::{Resolved, resolve, resolve_representation, resolve_with};
