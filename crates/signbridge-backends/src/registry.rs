use std::collections::HashMap;

use signbridge_core::NetworkId;

use crate::nova::NovaBackend;
use crate::NetworkBackend;

/// Maps networks to their backend capability. A network with no entry has no
/// connector support.
pub struct BackendRegistry {
    backends: HashMap<NetworkId, Box<dyn NetworkBackend>>,
}

impl BackendRegistry {
    /// Empty registry; backends are added with `register`.
    pub fn new() -> Self {
        BackendRegistry {
            backends: HashMap::new(),
        }
    }

    /// Registry with the built-in connector-capable networks.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            NetworkId::Nova,
            Box::new(NovaBackend::new(NetworkId::Nova.chain_tag())),
        );
        registry.register(
            NetworkId::NovaTestnet,
            Box::new(NovaBackend::new(NetworkId::NovaTestnet.chain_tag())),
        );
        registry
    }

    pub fn register(&mut self, network: NetworkId, backend: Box<dyn NetworkBackend>) {
        self.backends.insert(network, backend);
    }

    pub fn for_network(&self, network: NetworkId) -> Option<&dyn NetworkBackend> {
        self.backends.get(&network).map(|backend| backend.as_ref())
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
