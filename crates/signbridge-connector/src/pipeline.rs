use tracing::{debug, warn};

use signbridge_backends::BackendRegistry;
use signbridge_core::{ConnectorError, ConnectorRequest, ConnectorResponse, Operation};

use crate::digest::DigestEngine;
use crate::keystore::KeyStore;
use crate::serialization::SerializationEngine;
use crate::signing::SigningEngine;

/// Per-request lifecycle; terminal states are Completed and Failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestState {
    Received,
    Dispatched,
    Completed,
    Failed,
}

/// The orchestrator: accepts a connector request, dispatches it to exactly
/// one engine, and returns either the engine's result or a taxonomy error.
/// Raw backend status codes never cross this boundary, and nothing is
/// retried here; retry policy belongs to the session layer.
pub struct ConnectorRequestPipeline {
    registry: BackendRegistry,
}

impl ConnectorRequestPipeline {
    pub fn new(registry: BackendRegistry) -> Self {
        ConnectorRequestPipeline { registry }
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    /// Process one request to completion.
    pub fn handle(
        &self,
        request: &ConnectorRequest,
        keys: &dyn KeyStore,
    ) -> Result<ConnectorResponse, ConnectorError> {
        let mut state = RequestState::Received;
        debug!(
            ?state,
            network = %request.network,
            operation = ?request.operation,
            "connector request"
        );

        // Connector capability is checked before anything else; every other
        // check belongs to the specific engine.
        if !request.network.supports_connector()
            || self.registry.for_network(request.network).is_none()
        {
            state = RequestState::Failed;
            warn!(?state, network = %request.network, "network has no connector capability");
            return Err(ConnectorError::UnsupportedConnector);
        }

        state = RequestState::Dispatched;
        debug!(?state, operation = ?request.operation, "dispatching to engine");

        let result = match request.operation {
            Operation::Digest => DigestEngine::new(&self.registry)
                .digest(request.network, request.message_kind, &request.payload)
                .map(ConnectorResponse::Digest),
            Operation::Sign => self.dispatch_sign(request, keys),
            Operation::Serialize => match request.fields.as_ref() {
                Some(fields) => SerializationEngine::new(&self.registry)
                    .serialize(request.network, fields, request.signature.as_ref())
                    .map(ConnectorResponse::Serialized),
                None => Err(ConnectorError::InvalidSerialization),
            },
            Operation::Validate => match request.serialized.as_deref() {
                Some(bytes) => SerializationEngine::new(&self.registry)
                    .validate(request.network, bytes)
                    .map(|(fields, is_signed)| ConnectorResponse::Validated { fields, is_signed }),
                None => Err(ConnectorError::InvalidSerialization),
            },
        };

        match &result {
            Ok(_) => {
                state = RequestState::Completed;
                debug!(?state, operation = ?request.operation, "request completed");
            }
            Err(err) => {
                state = RequestState::Failed;
                warn!(?state, error = %err, "request failed");
            }
        }
        result
    }

    fn dispatch_sign(
        &self,
        request: &ConnectorRequest,
        keys: &dyn KeyStore,
    ) -> Result<ConnectorResponse, ConnectorError> {
        // A missing or unusable key capability is a signing-parameter
        // failure, not a separate taxonomy member.
        let account = request
            .account
            .as_ref()
            .ok_or(ConnectorError::InvalidSignature)?;
        let capability = keys
            .signing_capability(request.network, account)
            .ok_or(ConnectorError::InvalidSignature)?;

        SigningEngine::new(&self.registry)
            .sign(request.network, &request.payload, &capability)
            .map(ConnectorResponse::Signature)
    }
}
