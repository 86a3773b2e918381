//! # DID Resolution
//!
//! For `did:key`, resolution is purely computational: the identifier is
//! decoded into a public key and the document is expanded from it. No
//! network or disk I/O is ever performed.
//!
//! See:
//!
//! - <https://w3c-ccg.github.io/did-method-key>
//! - <https://w3c.github.io/did-resolution>

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::document::Document;
use crate::document::builder::{CreateOptions, build_document};
use crate::error::Result;
use crate::identifier;

/// Resolve a `did:key` identifier into a DID document.
///
/// The identifier carries no generation-time configuration, so resolution
/// always builds the document with the default configuration: no
/// verification relationships, no services, no alternate identifiers. Use
/// [`resolve_with`] to override.
///
/// # Errors
///
/// Fails with the identifier codec's error if the DID is malformed or uses
/// an unsupported key type.
pub fn resolve(did: &str) -> Result<Document> {
    resolve_with(did, &CreateOptions::default())
}

/// Resolve a `did:key` identifier with an explicit configuration override.
///
/// The override is a caller decision: nothing about the requested
/// relationships or services is recoverable from the identifier itself.
///
/// # Errors
///
/// Fails with the identifier codec's error if the DID is malformed, or with
/// the document builder's error if the configuration is invalid.
pub fn resolve_with(did: &str, options: &CreateOptions) -> Result<Document> {
    let (key_type, public) = identifier::from_did(did)?;
    debug!("resolving {did} as a {key_type} key");
    build_document(did, key_type, &public, options)
}

/// Resolve a `did:key` identifier into a document plus resolution metadata.
///
/// # Errors
///
/// Fails with the identifier codec's error if the DID is malformed or uses
/// an unsupported key type.
pub fn resolve_representation(did: &str) -> Result<Resolved> {
    let document = resolve(did)?;
    Ok(Resolved {
        context: "https://w3id.org/did-resolution/v1".into(),
        metadata: Metadata {
            content_type: ContentType::DidLdJson,
            additional: Some(json!({
                "did": {
                    "didString": did,
                    "methodSpecificId": identifier::method_specific_id(did)?,
                    "method": "key"
                }
            })),
        },
        document,
    })
}

/// Returned by [`resolve_representation`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    /// The DID resolution context.
    #[serde(rename = "@context")]
    pub context: String,

    /// Resolution metadata.
    pub metadata: Metadata,

    /// The resolved DID document.
    pub document: Document,
}

/// Resolution metadata.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// The Media Type of the returned resource.
    pub content_type: ContentType,

    /// Additional information about the resolution process.
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<Value>,
}

/// The Media Type of the returned resource.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum ContentType {
    /// JSON-LD representation of a DID document.
    #[default]
    #[serde(rename = "application/did+ld+json")]
    DidLdJson,
}
