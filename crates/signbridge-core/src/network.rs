use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a target network.
///
/// The caller resolves network and account before submitting a connector
/// request; this core only checks connector capability and routes to the
/// matching backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkId {
    /// Nova mainnet, connector-capable.
    Nova,
    /// Nova testnet, connector-capable with its own digest domain.
    NovaTestnet,
    /// Legacy ledger network with no connector support.
    Ledgerline,
}

impl NetworkId {
    /// Whether the network has a connector capability at all.
    /// Checked first on every request, before any engine work.
    pub fn supports_connector(self) -> bool {
        !matches!(self, NetworkId::Ledgerline)
    }

    /// Domain-separation tag mixed into every digest for this network, so a
    /// digest produced for one chain never verifies on another.
    pub fn chain_tag(self) -> &'static [u8] {
        match self {
            NetworkId::Nova => b"nova:mainnet",
            NetworkId::NovaTestnet => b"nova:testnet",
            NetworkId::Ledgerline => b"ledgerline",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NetworkId::Nova => "nova",
            NetworkId::NovaTestnet => "nova-testnet",
            NetworkId::Ledgerline => "ledgerline",
        };
        write!(f, "{}", name)
    }
}
