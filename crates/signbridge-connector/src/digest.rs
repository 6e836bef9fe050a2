use signbridge_backends::BackendRegistry;
use signbridge_core::{classify, ConnectorError, Digest, MessageKind, NetworkId};

/// Computes deterministic digests over session payloads.
pub struct DigestEngine<'a> {
    registry: &'a BackendRegistry,
}

impl<'a> DigestEngine<'a> {
    pub fn new(registry: &'a BackendRegistry) -> Self {
        DigestEngine { registry }
    }

    /// Digest a payload under the network's hashing rule for `kind`.
    ///
    /// The connector-support check runs before any hashing work; the backend
    /// outcome is classified, and the output must be exactly digest-sized.
    pub fn digest(
        &self,
        network: NetworkId,
        kind: MessageKind,
        payload: &[u8],
    ) -> Result<Digest, ConnectorError> {
        if !network.supports_connector() {
            return Err(ConnectorError::UnsupportedConnector);
        }
        let backend = self
            .registry
            .for_network(network)
            .ok_or(ConnectorError::UnsupportedConnector)?;

        if payload.is_empty() {
            return Err(ConnectorError::InvalidDigest);
        }

        let outcome = backend.hash(kind, payload);
        if let Some(err) = classify(outcome.status) {
            return Err(err);
        }
        let bytes = outcome.bytes.ok_or(ConnectorError::InvalidDigest)?;
        Digest::from_slice(&bytes).ok_or(ConnectorError::InvalidDigest)
    }
}
