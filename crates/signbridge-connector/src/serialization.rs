use signbridge_backends::{BackendRegistry, TxEnvelope};
use signbridge_core::{classify, serialize, ConnectorError, NetworkId, Sig, TransferFields};

/// Encodes transfers into canonical transaction bytes and validates
/// externally supplied serializations.
pub struct SerializationEngine<'a> {
    registry: &'a BackendRegistry,
}

impl<'a> SerializationEngine<'a> {
    pub fn new(registry: &'a BackendRegistry) -> Self {
        SerializationEngine { registry }
    }

    /// Encode transfer fields (and an optional signature) into the network's
    /// canonical transaction bytes.
    pub fn serialize(
        &self,
        network: NetworkId,
        fields: &TransferFields,
        signature: Option<&Sig>,
    ) -> Result<Vec<u8>, ConnectorError> {
        let backend = self
            .registry
            .for_network(network)
            .ok_or(ConnectorError::UnsupportedConnector)?;

        let outcome = backend.encode(fields, signature);
        if let Some(err) = classify(outcome.status) {
            return Err(err);
        }
        outcome.bytes.ok_or(ConnectorError::InvalidSerialization)
    }

    /// Decode transaction bytes, rejecting anything that does not round-trip
    /// losslessly. Returns the semantic fields and whether a signature was
    /// embedded.
    pub fn validate(
        &self,
        network: NetworkId,
        bytes: &[u8],
    ) -> Result<(TransferFields, bool), ConnectorError> {
        let backend = self
            .registry
            .for_network(network)
            .ok_or(ConnectorError::UnsupportedConnector)?;

        let outcome = backend.decode(bytes);
        if let Some(err) = classify(outcome.status) {
            return Err(err);
        }
        let canonical = outcome.bytes.ok_or(ConnectorError::InvalidSerialization)?;
        let envelope: TxEnvelope = serialize::from_bytes(&canonical)?;
        Ok((envelope.fields, envelope.signature.is_some()))
    }
}
