use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use signbridge_core::{ConnectorError, ConnectorRequest, ConnectorResponse};

use crate::keystore::KeyStore;
use crate::pipeline::ConnectorRequestPipeline;

struct ServiceInner<K> {
    pipeline: ConnectorRequestPipeline,
    keys: K,
    permits: Semaphore,
}

/// Bounded async front for the synchronous pipeline.
///
/// Each in-flight request holds one permit for its whole duration, so at most
/// `max_in_flight` requests execute at once. A request runs to completion
/// inside one future: dropping the future before it resolves discards the
/// whole computation, never a partial signature or serialization.
pub struct ConnectorService<K: KeyStore> {
    inner: Arc<ServiceInner<K>>,
}

impl<K: KeyStore> Clone for ConnectorService<K> {
    fn clone(&self) -> Self {
        ConnectorService {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: KeyStore> ConnectorService<K> {
    pub fn new(pipeline: ConnectorRequestPipeline, keys: K, max_in_flight: usize) -> Self {
        ConnectorService {
            inner: Arc::new(ServiceInner {
                pipeline,
                keys,
                permits: Semaphore::new(max_in_flight),
            }),
        }
    }

    /// Submit one request; resolves once the pipeline has produced either a
    /// response or a taxonomy error.
    pub async fn submit(
        &self,
        request: ConnectorRequest,
    ) -> Result<ConnectorResponse, ConnectorError> {
        let _permit = self
            .inner
            .permits
            .acquire()
            .await
            .expect("connector semaphore is never closed");
        debug!(network = %request.network, operation = ?request.operation, "permit acquired");
        self.inner.pipeline.handle(&request, &self.inner.keys)
    }

    /// Permits currently available, i.e. remaining request capacity.
    pub fn available_permits(&self) -> usize {
        self.inner.permits.available_permits()
    }
}
