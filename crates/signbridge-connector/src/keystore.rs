use std::collections::HashMap;
use std::fmt;

use signbridge_core::{AccountId, KeyPair, NetworkId, PublicKey, SecretKey, SigScheme};

/// A borrow-scoped signing capability.
///
/// The secret key stays owned by the key store; a capability only borrows it
/// for one operation's call frame and cannot be cloned or cached, so every
/// exit path releases it by construction.
pub struct KeyCapability<'a> {
    secret: &'a SecretKey,
    public: PublicKey,
    scheme: SigScheme,
}

impl<'a> KeyCapability<'a> {
    pub fn new(secret: &'a SecretKey) -> Self {
        KeyCapability {
            public: secret.public_key(),
            scheme: SigScheme::Ed25519,
            secret,
        }
    }

    pub fn secret(&self) -> &SecretKey {
        self.secret
    }

    pub fn public(&self) -> PublicKey {
        self.public
    }

    pub fn scheme(&self) -> SigScheme {
        self.scheme
    }
}

impl fmt::Debug for KeyCapability<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyCapability")
            .field("public", &self.public)
            .field("scheme", &self.scheme)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// External key-management collaborator: hands out borrow-scoped signing
/// capabilities bound to (network, account). The connector never selects or
/// derives keys itself.
pub trait KeyStore: Send + Sync {
    fn signing_capability(&self, network: NetworkId, account: &AccountId)
        -> Option<KeyCapability<'_>>;
}

/// In-memory key store for tests and demos.
#[derive(Default)]
pub struct MemoryKeyStore {
    keys: HashMap<NetworkId, HashMap<AccountId, KeyPair>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate and store a keypair for an account, returning its public key.
    pub fn generate(&mut self, network: NetworkId, account: AccountId) -> PublicKey {
        let keypair = KeyPair::generate();
        let public = keypair.public;
        self.keys.entry(network).or_default().insert(account, keypair);
        public
    }

    pub fn insert(&mut self, network: NetworkId, account: AccountId, keypair: KeyPair) {
        self.keys.entry(network).or_default().insert(account, keypair);
    }
}

impl KeyStore for MemoryKeyStore {
    fn signing_capability(
        &self,
        network: NetworkId,
        account: &AccountId,
    ) -> Option<KeyCapability<'_>> {
        self.keys
            .get(&network)?
            .get(account)
            .map(|keypair| KeyCapability::new(&keypair.secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_for_known_account() {
        let mut store = MemoryKeyStore::new();
        let account = AccountId::from("alice");
        let public = store.generate(NetworkId::Nova, account.clone());

        let capability = store
            .signing_capability(NetworkId::Nova, &account)
            .unwrap();
        assert_eq!(capability.public(), public);
        assert_eq!(capability.scheme(), SigScheme::Ed25519);
    }

    #[test]
    fn test_no_capability_for_unknown_account() {
        let store = MemoryKeyStore::new();
        let account = AccountId::from("nobody");
        assert!(store.signing_capability(NetworkId::Nova, &account).is_none());
    }

    #[test]
    fn test_capability_is_network_scoped() {
        let mut store = MemoryKeyStore::new();
        let account = AccountId::from("alice");
        store.generate(NetworkId::Nova, account.clone());
        assert!(store
            .signing_capability(NetworkId::NovaTestnet, &account)
            .is_none());
    }

    #[test]
    fn test_capability_debug_redacted() {
        let mut store = MemoryKeyStore::new();
        let account = AccountId::from("alice");
        store.generate(NetworkId::Nova, account.clone());
        let capability = store.signing_capability(NetworkId::Nova, &account).unwrap();
        assert!(format!("{:?}", capability).contains("REDACTED"));
    }
}
