//! # DID Document
//!
//! Data model for DID documents produced by this crate, following
//! [DID Core v1.0](https://www.w3.org/TR/did-core/) §4-§6.
//!
//! Field declaration order is the JSON emission order. That order is part of
//! the contract: identical inputs serialize to byte-identical text, so
//! documents can be hashed or signed.

pub mod builder;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Kind, OneMany};
use crate::error::Error;

/// The DID Core v1.0 JSON-LD context.
pub const DID_CONTEXT: &str = "https://www.w3.org/ns/did/v1";

/// The Multikey verification method JSON-LD context.
pub const MULTIKEY_CONTEXT: &str = "https://w3id.org/security/multikey/v1";

/// DID Document.
///
/// Structurally identical whether rendered as plain JSON or JSON-LD: the
/// `@context` framing is always present and never changes field values.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The context of the DID document: the DID Core context followed by the
    /// Multikey context, in that order.
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// The DID for the subject described by this document. For `did:key`
    /// the subject is self-certifying: the document derives from the id.
    pub id: String,

    /// A set of URIs that are other identifiers for the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub also_known_as: Option<Vec<String>>,

    /// Verification methods for the DID subject. A `did:key` document has
    /// exactly one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<Vec<VerificationMethod>>,

    /// How the DID subject is expected to be authenticated, for purposes
    /// such as challenge-response protocols.
    ///
    /// <https://www.w3.org/TR/did-core/#authentication>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Vec<Kind<VerificationMethod>>>,

    /// How the DID subject is expected to express claims, such as issuing
    /// verifiable credentials.
    ///
    /// <https://www.w3.org/TR/did-core/#assertion>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_method: Option<Vec<Kind<VerificationMethod>>>,

    /// How an entity can generate encryption material to transmit
    /// confidential information to the DID subject.
    ///
    /// <https://www.w3.org/TR/did-core/#key-agreement>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_agreement: Option<Vec<Kind<VerificationMethod>>>,

    /// A verification method the DID subject may use to invoke a
    /// cryptographic capability.
    ///
    /// <https://www.w3.org/TR/did-core/#capability-invocation>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_invocation: Option<Vec<Kind<VerificationMethod>>>,

    /// A mechanism the DID subject may use to delegate a cryptographic
    /// capability to another party.
    ///
    /// <https://www.w3.org/TR/did-core/#capability-delegation>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_delegation: Option<Vec<Kind<VerificationMethod>>>,

    /// Services express ways of communicating with the DID subject or
    /// related entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<Service>>,
}

impl Document {
    /// Find a verification method by id.
    #[must_use]
    pub fn get_verification_method(&self, id: &str) -> Option<&VerificationMethod> {
        self.verification_method.as_ref()?.iter().find(|vm| vm.id == id)
    }

    /// Find a service by id.
    #[must_use]
    pub fn get_service(&self, id: &str) -> Option<&Service> {
        self.service.as_ref()?.iter().find(|svc| svc.id == id)
    }
}

/// A cryptographic public key that can be used to authenticate or authorize
/// interactions with the DID subject.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    /// A DID URL that identifies the verification method. For `did:key`
    /// this is `<did>#<multibase-key-string>`.
    pub id: String,

    /// The type of verification method, registered in the
    /// [DID Specification Registries](https://www.w3.org/TR/did-spec-registries).
    #[serde(rename = "type")]
    pub type_: MethodType,

    /// The DID of the controller of the verification method. Equals the
    /// document id itself: `did:key` is self-certifying.
    pub controller: String,

    /// The public key encoded as a multibase string.
    pub public_key_multibase: String,
}

/// Verification method types emitted or accepted by this crate. A closed
/// registry: `Multikey` is the only type `did:key` documents built here
/// carry.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum MethodType {
    /// Generic multikey format.
    #[default]
    Multikey,
}

impl Display for MethodType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multikey => write!(f, "Multikey"),
        }
    }
}

/// A service expresses a way of communicating with the DID subject, such as
/// an agent's messaging inbox.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// A URI unique within the document, typically a document-relative
    /// fragment such as `#inbox`.
    pub id: String,

    /// The service type. SHOULD be registered in the DID Specification
    /// Registries.
    #[serde(rename = "type")]
    pub type_: String,

    /// One or more endpoints for the service: a URI string or a richer
    /// object, or a set of either.
    #[allow(clippy::struct_field_names)]
    pub service_endpoint: OneMany<Kind<Value>>,
}

impl Service {
    /// Convenience constructor for the common single-URI case.
    #[must_use]
    pub fn new(id: &str, type_: &str, endpoint: &str) -> Self {
        Self {
            id: id.to_string(),
            type_: type_.to_string(),
            service_endpoint: OneMany::One(Kind::String(endpoint.to_string())),
        }
    }
}

/// Verification relationships.
///
/// A closed set: unknown relationship names are rejected when parsed, not at
/// document-build time.
///
/// <https://www.w3.org/TR/did-core/#verification-relationships>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationRelationship {
    /// <https://www.w3.org/TR/did-core/#authentication>
    Authentication,

    /// <https://www.w3.org/TR/did-core/#assertion>
    AssertionMethod,

    /// <https://www.w3.org/TR/did-core/#key-agreement>
    KeyAgreement,

    /// <https://www.w3.org/TR/did-core/#capability-invocation>
    CapabilityInvocation,

    /// <https://www.w3.org/TR/did-core/#capability-delegation>
    CapabilityDelegation,
}

impl VerificationRelationship {
    /// All relationships, in document emission order.
    pub const ALL: [Self; 5] = [
        Self::Authentication,
        Self::AssertionMethod,
        Self::KeyAgreement,
        Self::CapabilityInvocation,
        Self::CapabilityDelegation,
    ];
}

impl FromStr for VerificationRelationship {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authentication" => Ok(Self::Authentication),
            "assertionMethod" => Ok(Self::AssertionMethod),
            "keyAgreement" => Ok(Self::KeyAgreement),
            "capabilityInvocation" => Ok(Self::CapabilityInvocation),
            "capabilityDelegation" => Ok(Self::CapabilityDelegation),
            _ => Err(Error::InvalidDidSyntax(format!("unknown verification relationship: {s}"))),
        }
    }
}

impl Display for VerificationRelationship {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication => write!(f, "authentication"),
            Self::AssertionMethod => write!(f, "assertionMethod"),
            Self::KeyAgreement => write!(f, "keyAgreement"),
            Self::CapabilityInvocation => write!(f, "capabilityInvocation"),
            Self::CapabilityDelegation => write!(f, "capabilityDelegation"),
        }
    }
}
