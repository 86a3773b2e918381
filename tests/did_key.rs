//! End-to-end tests for `did:key` generation, resolution, and validation.

use agent_did::{
    CreateOptions, Error, Identity, KeyPair, KeyType, Service, VerificationRelationship, from_did,
    resolve, to_did, validate_syntax,
};
use serde_json::json;

// Test vector from <https://w3c-ccg.github.io/did-method-key>.
const DID: &str = "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";

// Round-trip: for generated key pairs, decoding the encoded DID recovers the
// public key exactly.
#[test]
fn generated_key_round_trip() {
    for _ in 0..8 {
        let pair = KeyPair::generate(KeyType::Ed25519);
        let public = pair.public_bytes();

        let did = to_did(KeyType::Ed25519, &public);
        let (key_type, decoded) = from_did(&did).expect("should decode");
        assert_eq!(key_type, KeyType::Ed25519);
        assert_eq!(decoded, public.to_vec());
    }
}

// Generate with two relationships and one service: the document carries
// exactly one verification method, both relationship arrays reference it,
// and the service array has one entry.
#[test]
fn generate_with_relationships_and_service() {
    let options = CreateOptions {
        verification_relationships: vec![
            VerificationRelationship::Authentication,
            VerificationRelationship::AssertionMethod,
        ],
        services: vec![Service::new(
            "#inbox",
            "MessagingService",
            "https://agent.example.com/inbox",
        )],
        also_known_as: vec![],
    };
    let identity = Identity::create(KeyType::Ed25519, &options).expect("should create");
    let doc = identity.document();

    let methods = doc.verification_method.as_ref().expect("should have methods");
    assert_eq!(methods.len(), 1);
    let kid = methods[0].id.clone();

    let authentication = doc.authentication.as_ref().expect("should have authentication");
    assert_eq!(authentication.len(), 1);
    assert_eq!(authentication[0].as_str(), Some(kid.as_str()));

    let assertion = doc.assertion_method.as_ref().expect("should have assertionMethod");
    assert_eq!(assertion.len(), 1);
    assert_eq!(assertion[0].as_str(), Some(kid.as_str()));

    assert_eq!(doc.service.as_ref().map(Vec::len), Some(1));
    assert!(doc.get_service("#inbox").is_some());
}

// Resolving the canonical test vector succeeds, decodes to a 32-byte
// Ed25519 key, and re-encoding that key reproduces the identifier exactly.
#[test]
fn resolve_canonical_vector() {
    let doc = resolve(DID).expect("should resolve");
    assert_eq!(doc.id, DID);

    let (key_type, public) = from_did(DID).expect("should decode");
    assert_eq!(key_type, KeyType::Ed25519);
    assert_eq!(public.len(), 32);
    assert_eq!(to_did(key_type, &public), DID);

    let multikey = &DID["did:key:".len()..];
    assert_eq!(
        serde_json::to_value(&doc).expect("should serialize"),
        json!({
            "@context": [
                "https://www.w3.org/ns/did/v1",
                "https://w3id.org/security/multikey/v1"
            ],
            "id": DID,
            "verificationMethod": [{
                "id": format!("{DID}#{multikey}"),
                "type": "Multikey",
                "controller": DID,
                "publicKeyMultibase": multikey,
            }],
        })
    );
}

// Validation is the decode path with the error discarded.
#[test]
fn validate_syntax_cases() {
    assert!(validate_syntax(DID));
    assert!(!validate_syntax("did:key:"));
    assert!(!validate_syntax("did:web:example.com"));
    assert!(!validate_syntax("did:key:aNotMultibase"));
    assert!(!validate_syntax("not a did at all"));
}

// Duplicate service ids fail document construction.
#[test]
fn duplicate_service_ids_rejected() {
    let options = CreateOptions {
        services: vec![
            Service::new("#inbox", "MessagingService", "https://agent.example.com/inbox"),
            Service::new("#inbox", "CredentialService", "https://agent.example.com/creds"),
        ],
        ..CreateOptions::default()
    };
    let err = Identity::create(KeyType::Ed25519, &options).expect_err("should fail");
    assert!(matches!(err, Error::DuplicateServiceId(_)));
}

// A created identity resolves back to the same DID and public key, with the
// secret key absent on the resolution path.
#[test]
fn create_then_resolve() {
    let created =
        Identity::create(KeyType::Ed25519, &CreateOptions::default()).expect("should create");
    assert!(created.secret_key().is_some());

    let resolved = Identity::resolve(created.did()).expect("should resolve");
    assert_eq!(resolved.did(), created.did());
    assert_eq!(resolved.public_key(), created.public_key());
    assert_eq!(resolved.document(), created.document());
    assert!(resolved.secret_key().is_none());
}
