//! # Document Builder
//!
//! Deterministic construction of a DID document from a decoded public key
//! and a request configuration. Building is a pure function: identical
//! inputs always yield a structurally identical document.

use tracing::debug;

use super::{
    DID_CONTEXT, Document, MULTIKEY_CONTEXT, MethodType, Service, VerificationMethod,
    VerificationRelationship,
};
use crate::core::Kind;
use crate::error::{Error, Result};
use crate::multicodec::{self, KeyType};

/// Configuration for document creation.
///
/// A single immutable value with all recognized options enumerated. The
/// default requests nothing: no relationships, no services, no alternate
/// identifiers. A `did:key` document is valid with zero relationships.
#[derive(Clone, Debug, Default)]
pub struct CreateOptions {
    /// Verification relationships to declare for the document's single
    /// verification method. Treated as a set: duplicates collapse and
    /// emission order is fixed regardless of request order.
    pub verification_relationships: Vec<VerificationRelationship>,

    /// Service endpoints to attach. Each must have a non-empty id unique
    /// within the document.
    pub services: Vec<Service>,

    /// Alternate identifiers for the subject, attached verbatim.
    pub also_known_as: Vec<String>,
}

/// Build a DID document from an identifier, its decoded public key, and a
/// request configuration.
///
/// The document carries exactly one `Multikey` verification method whose
/// fragment is the multibase key string, with `controller` equal to the DID
/// itself. Each requested relationship references that method by id.
///
/// # Errors
///
/// Returns [`Error::DuplicateServiceId`] if a service id is empty or shared
/// by two entries.
pub fn build_document(
    did: &str, key_type: KeyType, public: &[u8], options: &CreateOptions,
) -> Result<Document> {
    let multikey = multicodec::encode(key_type, public);
    let kid = format!("{did}#{multikey}");

    let vm = VerificationMethod {
        id: kid.clone(),
        type_: MethodType::Multikey,
        controller: did.to_string(),
        public_key_multibase: multikey,
    };

    let mut builder = DocumentBuilder::new(did)
        .context(DID_CONTEXT)
        .context(MULTIKEY_CONTEXT)
        .verification_method(&vm);

    for relationship in VerificationRelationship::ALL {
        if options.verification_relationships.contains(&relationship) {
            builder = builder.verification_relationship(relationship, Kind::String(kid.clone()));
        }
    }
    for aka in &options.also_known_as {
        builder = builder.also_known_as(aka);
    }
    for service in &options.services {
        builder = builder.service(service)?;
    }

    let document = builder.build();
    debug!("built document for {did}");
    Ok(document)
}

/// A builder for assembling a DID document field by field.
///
/// [`build_document`] drives this for the `did:key` shape; it can also be
/// used directly for custom document shapes.
#[derive(Default)]
pub struct DocumentBuilder {
    // Document under construction
    doc: Document,
}

impl DocumentBuilder {
    /// Creates a new `DocumentBuilder` with the given DID.
    #[must_use]
    pub fn new(did: &str) -> Self {
        let doc = Document {
            id: did.to_string(),
            ..Document::default()
        };
        Self { doc }
    }

    /// Add a context.
    ///
    /// Chain to add multiple contexts. Order is preserved: JSON-LD
    /// processors are sensitive to it.
    #[must_use]
    pub fn context(mut self, context: &str) -> Self {
        self.doc.context.push(context.to_string());
        self
    }

    /// Add an also-known-as identifier.
    #[must_use]
    pub fn also_known_as(mut self, aka: &str) -> Self {
        self.doc.also_known_as.get_or_insert(vec![]).push(aka.to_string());
        self
    }

    /// Add a verification method.
    #[must_use]
    pub fn verification_method(mut self, vm: &VerificationMethod) -> Self {
        self.doc.verification_method.get_or_insert(vec![]).push(vm.clone());
        self
    }

    /// Add a verification relationship.
    ///
    /// Pass the id of the verification method to reference, or a complete
    /// `VerificationMethod` to embed a standalone method.
    #[must_use]
    pub fn verification_relationship(
        mut self, relationship: VerificationRelationship, vm: Kind<VerificationMethod>,
    ) -> Self {
        let entries = match relationship {
            VerificationRelationship::Authentication => &mut self.doc.authentication,
            VerificationRelationship::AssertionMethod => &mut self.doc.assertion_method,
            VerificationRelationship::KeyAgreement => &mut self.doc.key_agreement,
            VerificationRelationship::CapabilityInvocation => &mut self.doc.capability_invocation,
            VerificationRelationship::CapabilityDelegation => &mut self.doc.capability_delegation,
        };
        entries.get_or_insert(vec![]).push(vm);
        self
    }

    /// Add a service endpoint.
    ///
    /// Chain to add multiple service endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateServiceId`] if the service id is empty or
    /// already present in the document.
    pub fn service(mut self, service: &Service) -> Result<Self> {
        if service.id.is_empty() {
            return Err(Error::DuplicateServiceId("service id must not be empty".into()));
        }
        if self.doc.get_service(&service.id).is_some() {
            return Err(Error::DuplicateServiceId(format!(
                "service id already in document: {}",
                service.id
            )));
        }
        self.doc.service.get_or_insert(vec![]).push(service.clone());
        Ok(self)
    }

    /// Build the DID document.
    #[must_use]
    pub fn build(self) -> Document {
        self.doc
    }
}
