use signbridge_backends::BackendRegistry;
use signbridge_core::{
    classify, ConnectorError, NetworkId, PublicKey, Sig, SigScheme, DIGEST_LEN,
};

use crate::keystore::KeyCapability;

/// Produces signatures over digests with borrowed key material.
pub struct SigningEngine<'a> {
    registry: &'a BackendRegistry,
}

impl<'a> SigningEngine<'a> {
    pub fn new(registry: &'a BackendRegistry) -> Self {
        SigningEngine { registry }
    }

    /// Sign digest bytes with a borrowed key capability.
    ///
    /// The capability is released on every exit path; the engine never copies
    /// or retains the key past this call.
    pub fn sign(
        &self,
        network: NetworkId,
        digest: &[u8],
        key: &KeyCapability<'_>,
    ) -> Result<Sig, ConnectorError> {
        let backend = self
            .registry
            .for_network(network)
            .ok_or(ConnectorError::UnsupportedConnector)?;

        if digest.len() != DIGEST_LEN {
            return Err(ConnectorError::InvalidSignature);
        }
        // Single-scheme today; a key bound to another curve is a parameter
        // mismatch, not an unsupported network.
        match key.scheme() {
            SigScheme::Ed25519 => {}
        }

        let outcome = backend.sign(digest, key.secret());
        if let Some(err) = classify(outcome.status) {
            return Err(err);
        }
        let bytes = outcome.bytes.ok_or(ConnectorError::InvalidSignature)?;
        Sig::from_slice(key.scheme(), &bytes).ok_or(ConnectorError::InvalidSignature)
    }

    /// Verify a signature over digest bytes against a public key. Used for
    /// countersign review of externally produced signatures and by tests.
    pub fn verify(
        &self,
        network: NetworkId,
        digest: &[u8],
        signature: &Sig,
        public: &PublicKey,
    ) -> Result<(), ConnectorError> {
        let backend = self
            .registry
            .for_network(network)
            .ok_or(ConnectorError::UnsupportedConnector)?;

        let outcome = backend.verify(digest, signature, public);
        match classify(outcome.status) {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}
