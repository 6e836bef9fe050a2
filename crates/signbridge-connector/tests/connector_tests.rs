//! Connector pipeline integration tests

use signbridge_backends::BackendRegistry;
use signbridge_connector::{ConnectorRequestPipeline, ConnectorService, MemoryKeyStore};
use signbridge_core::{
    verify, AccountId, ConnectorError, ConnectorRequest, ConnectorResponse, Digest, MessageKind,
    NetworkId, PublicKey, Sig, TransferFields,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

/// Set up a pipeline with a funded signing account on Nova
fn setup() -> (ConnectorRequestPipeline, MemoryKeyStore, AccountId, PublicKey) {
    init_tracing();
    let pipeline = ConnectorRequestPipeline::new(BackendRegistry::with_defaults());
    let mut store = MemoryKeyStore::new();
    let account = AccountId::from("alice");
    let public = store.generate(NetworkId::Nova, account.clone());
    (pipeline, store, account, public)
}

fn sample_fields() -> TransferFields {
    TransferFields::from_pairs(&[
        ("to", &signbridge_core::KeyPair::generate().public.to_hex()),
        ("amount", "1000"),
        ("nonce", "1"),
        ("fee", "10"),
    ])
    .unwrap()
}

fn digest_of(pipeline: &ConnectorRequestPipeline, store: &MemoryKeyStore, payload: &[u8]) -> Digest {
    let request =
        ConnectorRequest::digest(NetworkId::Nova, MessageKind::Transaction, payload.to_vec());
    match pipeline.handle(&request, store).unwrap() {
        ConnectorResponse::Digest(digest) => digest,
        other => panic!("expected digest response, got {:?}", other),
    }
}

#[test]
fn test_digest_is_deterministic_through_pipeline() {
    let (pipeline, store, _, _) = setup();
    let one = digest_of(&pipeline, &store, b"session payload");
    let two = digest_of(&pipeline, &store, b"session payload");
    assert_eq!(one, two);
}

#[test]
fn test_personal_sign_digest_differs_from_transaction_digest() {
    let (pipeline, store, _, _) = setup();
    let tx = digest_of(&pipeline, &store, b"payload");

    let request = ConnectorRequest::digest(
        NetworkId::Nova,
        MessageKind::PersonalSign,
        b"payload".to_vec(),
    );
    let personal = match pipeline.handle(&request, &store).unwrap() {
        ConnectorResponse::Digest(digest) => digest,
        other => panic!("expected digest response, got {:?}", other),
    };
    assert_ne!(tx, personal);
}

#[test]
fn test_sign_on_unsupported_network_fails_fast() {
    let (pipeline, store, account, _) = setup();
    let digest = digest_of(&pipeline, &store, b"payload");

    let request = ConnectorRequest::sign(NetworkId::Ledgerline, account, &digest);
    assert_eq!(
        pipeline.handle(&request, &store).unwrap_err(),
        ConnectorError::UnsupportedConnector
    );
}

#[test]
fn test_full_sign_flow_produces_verifiable_signature() {
    let (pipeline, store, account, public) = setup();
    let digest = digest_of(&pipeline, &store, b"transfer to sign");

    let request = ConnectorRequest::sign(NetworkId::Nova, account, &digest);
    let sig = match pipeline.handle(&request, &store).unwrap() {
        ConnectorResponse::Signature(sig) => sig,
        other => panic!("expected signature response, got {:?}", other),
    };

    // The signature must independently verify against the digest and the
    // account's public key.
    assert!(verify(&public, digest.as_bytes(), &sig).is_ok());
}

#[test]
fn test_sign_with_wrong_length_digest() {
    let (pipeline, store, account, _) = setup();

    let mut request = ConnectorRequest::sign(
        NetworkId::Nova,
        account,
        &Digest::ZERO,
    );
    request.payload = vec![0u8; 16];
    assert_eq!(
        pipeline.handle(&request, &store).unwrap_err(),
        ConnectorError::InvalidSignature
    );
}

#[test]
fn test_serialize_validate_round_trip_law() {
    let (pipeline, store, _, _) = setup();
    let fields = sample_fields();

    let request = ConnectorRequest::serialize(NetworkId::Nova, fields.clone(), None);
    let bytes = match pipeline.handle(&request, &store).unwrap() {
        ConnectorResponse::Serialized(bytes) => bytes,
        other => panic!("expected serialized response, got {:?}", other),
    };

    let request = ConnectorRequest::validate(NetworkId::Nova, bytes);
    match pipeline.handle(&request, &store).unwrap() {
        ConnectorResponse::Validated {
            fields: decoded,
            is_signed,
        } => {
            assert_eq!(decoded, fields);
            assert!(!is_signed);
        }
        other => panic!("expected validated response, got {:?}", other),
    }
}

#[test]
fn test_countersign_review_flow() {
    // A dApp returns a pre-built signed transaction; the wallet validates it
    // and reviews the embedded signature.
    let (pipeline, store, account, public) = setup();
    let fields = sample_fields();

    let digest = digest_of(&pipeline, &store, &fields.signing_bytes().unwrap());
    let request = ConnectorRequest::sign(NetworkId::Nova, account, &digest);
    let sig = match pipeline.handle(&request, &store).unwrap() {
        ConnectorResponse::Signature(sig) => sig,
        other => panic!("expected signature response, got {:?}", other),
    };

    let request = ConnectorRequest::serialize(NetworkId::Nova, fields.clone(), Some(sig));
    let bytes = match pipeline.handle(&request, &store).unwrap() {
        ConnectorResponse::Serialized(bytes) => bytes,
        other => panic!("expected serialized response, got {:?}", other),
    };

    let request = ConnectorRequest::validate(NetworkId::Nova, bytes);
    match pipeline.handle(&request, &store).unwrap() {
        ConnectorResponse::Validated {
            fields: decoded,
            is_signed,
        } => {
            assert_eq!(decoded, fields);
            assert!(is_signed);
            let review_digest =
                digest_of(&pipeline, &store, &decoded.signing_bytes().unwrap());
            assert!(verify(&public, review_digest.as_bytes(), &sig).is_ok());
        }
        other => panic!("expected validated response, got {:?}", other),
    }
}

#[test]
fn test_validate_truncated_serialization() {
    let (pipeline, store, _, _) = setup();

    let request = ConnectorRequest::serialize(NetworkId::Nova, sample_fields(), None);
    let mut bytes = match pipeline.handle(&request, &store).unwrap() {
        ConnectorResponse::Serialized(bytes) => bytes,
        other => panic!("expected serialized response, got {:?}", other),
    };
    bytes.pop();

    let request = ConnectorRequest::validate(NetworkId::Nova, bytes);
    assert_eq!(
        pipeline.handle(&request, &store).unwrap_err(),
        ConnectorError::InvalidSerialization
    );
}

#[test]
fn test_validate_never_decodes_corrupted_fields_silently() {
    let (pipeline, store, _, _) = setup();
    let fields = sample_fields();

    let request = ConnectorRequest::serialize(NetworkId::Nova, fields.clone(), None);
    let bytes = match pipeline.handle(&request, &store).unwrap() {
        ConnectorResponse::Serialized(bytes) => bytes,
        other => panic!("expected serialized response, got {:?}", other),
    };

    // Flip a byte anywhere in the encoding: validate must either reject it or
    // decode to a self-consistent field set, never return the original fields
    // under a different encoding.
    for index in 0..bytes.len() {
        let mut corrupted = bytes.clone();
        corrupted[index] ^= 0x01;
        let request = ConnectorRequest::validate(NetworkId::Nova, corrupted);
        if let Ok(ConnectorResponse::Validated { fields: decoded, .. }) =
            pipeline.handle(&request, &store)
        {
            assert_ne!(decoded, fields, "corrupted byte {} decoded silently", index);
        }
    }
}

#[test]
fn test_missing_signature_flag_does_not_affect_fields() {
    let (pipeline, store, _, _) = setup();
    let fields = sample_fields();
    let kp = signbridge_core::KeyPair::generate();
    let sig: Sig = signbridge_core::sign(&kp.secret, b"arbitrary");

    let unsigned = ConnectorRequest::serialize(NetworkId::Nova, fields.clone(), None);
    let signed = ConnectorRequest::serialize(NetworkId::Nova, fields, Some(sig));

    let unsigned_bytes = match pipeline.handle(&unsigned, &store).unwrap() {
        ConnectorResponse::Serialized(bytes) => bytes,
        other => panic!("expected serialized response, got {:?}", other),
    };
    let signed_bytes = match pipeline.handle(&signed, &store).unwrap() {
        ConnectorResponse::Serialized(bytes) => bytes,
        other => panic!("expected serialized response, got {:?}", other),
    };
    assert_ne!(unsigned_bytes, signed_bytes);
}

#[tokio::test]
async fn test_service_end_to_end() {
    init_tracing();
    let mut store = MemoryKeyStore::new();
    let account = AccountId::from("bob");
    let public = store.generate(NetworkId::Nova, account.clone());
    let service = ConnectorService::new(
        ConnectorRequestPipeline::new(BackendRegistry::with_defaults()),
        store,
        4,
    );

    let request = ConnectorRequest::digest(
        NetworkId::Nova,
        MessageKind::Transaction,
        b"service payload".to_vec(),
    );
    let digest = match service.submit(request).await.unwrap() {
        ConnectorResponse::Digest(digest) => digest,
        other => panic!("expected digest response, got {:?}", other),
    };

    let request = ConnectorRequest::sign(NetworkId::Nova, account, &digest);
    let sig = match service.submit(request).await.unwrap() {
        ConnectorResponse::Signature(sig) => sig,
        other => panic!("expected signature response, got {:?}", other),
    };
    assert!(verify(&public, digest.as_bytes(), &sig).is_ok());
}
