use serde::{Deserialize, Serialize};
use tracing::warn;

use signbridge_core::{
    serialize, sign as ed25519_sign, verify as ed25519_verify, ConnectorError, MessageKind,
    PublicKey, SecretKey, Sig, TransferFields, DIGEST_LEN,
};

use crate::outcome::BackendOutcome;
use crate::NetworkBackend;

/// Canonical Nova transaction envelope: the semantic fields plus an optional
/// embedded signature. bincode encoding of this struct is the network's
/// on-wire transaction format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEnvelope {
    pub fields: TransferFields,
    pub signature: Option<Sig>,
}

/// Nova-family backend: blake3 digests with chain-tag domain separation,
/// ed25519 signatures, bincode transaction envelopes.
pub struct NovaBackend {
    chain_tag: &'static [u8],
}

impl NovaBackend {
    pub fn new(chain_tag: &'static [u8]) -> Self {
        NovaBackend { chain_tag }
    }

    fn zero_destination(fields: &TransferFields) -> bool {
        fields.to.as_bytes() == &[0u8; 32]
    }
}

impl NetworkBackend for NovaBackend {
    fn hash(&self, kind: MessageKind, payload: &[u8]) -> BackendOutcome {
        if payload.is_empty() {
            return BackendOutcome::err(ConnectorError::InvalidDigest);
        }

        let mut hasher = blake3::Hasher::new();
        hasher.update(self.chain_tag);
        if let MessageKind::PersonalSign = kind {
            // Length-prefixed personal-sign framing keeps signed messages
            // from ever colliding with signed transactions.
            let prefix = format!("\x19Nova Signed Message:\n{}", payload.len());
            hasher.update(prefix.as_bytes());
        }
        hasher.update(payload);

        BackendOutcome::ok(hasher.finalize().as_bytes().to_vec())
    }

    fn sign(&self, digest: &[u8], key: &SecretKey) -> BackendOutcome {
        if digest.len() != DIGEST_LEN {
            warn!(len = digest.len(), "sign called with wrong digest length");
            return BackendOutcome::err(ConnectorError::InvalidSignature);
        }
        let sig = ed25519_sign(key, digest);
        BackendOutcome::ok(sig.to_vec())
    }

    fn verify(&self, digest: &[u8], signature: &Sig, key: &PublicKey) -> BackendOutcome {
        if digest.len() != DIGEST_LEN {
            return BackendOutcome::err(ConnectorError::InvalidSignature);
        }
        match ed25519_verify(key, digest, signature) {
            Ok(()) => BackendOutcome::ok_empty(),
            Err(_) => BackendOutcome::err(ConnectorError::InvalidSignature),
        }
    }

    fn encode(&self, fields: &TransferFields, signature: Option<&Sig>) -> BackendOutcome {
        if Self::zero_destination(fields) {
            return BackendOutcome::err(ConnectorError::InvalidSerialization);
        }

        let envelope = TxEnvelope {
            fields: fields.clone(),
            signature: signature.copied(),
        };
        match serialize::to_bytes(&envelope) {
            Ok(bytes) => BackendOutcome::ok(bytes),
            Err(_) => BackendOutcome::err(ConnectorError::InvalidSerialization),
        }
    }

    fn decode(&self, bytes: &[u8]) -> BackendOutcome {
        let envelope: TxEnvelope = match serialize::from_bytes(bytes) {
            Ok(envelope) => envelope,
            Err(_) => return BackendOutcome::err(ConnectorError::InvalidSerialization),
        };

        // bincode tolerates trailing bytes, so a decode that "partially
        // succeeds" is re-encoded and byte-compared against the input:
        // anything short of a lossless round-trip is rejected.
        let canonical = match serialize::to_bytes(&envelope) {
            Ok(canonical) => canonical,
            Err(_) => return BackendOutcome::err(ConnectorError::InvalidSerialization),
        };
        if canonical != bytes {
            return BackendOutcome::err(ConnectorError::InvalidSerialization);
        }

        if Self::zero_destination(&envelope.fields) {
            return BackendOutcome::err(ConnectorError::InvalidSerialization);
        }

        BackendOutcome::ok(canonical)
    }
}
