use ed25519_dalek::{Signature as DalekSignature, Signer, Verifier};
use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;
use std::fmt;

use crate::crypto::keys::{PublicKey, SecretKey};
use crate::error::ConnectorError;

/// Length of a signature in bytes.
pub const SIG_LEN: usize = 64;

/// Curve/algorithm tag carried with every signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SigScheme {
    Ed25519,
}

/// A signature: 64 bytes plus the scheme that produced them.
///
/// Bound to exactly one digest and one key; the connector never persists it,
/// ownership returns to the caller immediately.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sig {
    scheme: SigScheme,
    #[serde(with = "BigArray")]
    bytes: [u8; SIG_LEN],
}

impl Sig {
    pub fn new(scheme: SigScheme, bytes: [u8; SIG_LEN]) -> Self {
        Sig { scheme, bytes }
    }

    pub fn scheme(&self) -> SigScheme {
        self.scheme
    }

    pub fn as_bytes(&self) -> &[u8; SIG_LEN] {
        &self.bytes
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    pub fn from_slice(scheme: SigScheme, slice: &[u8]) -> Option<Self> {
        if slice.len() != SIG_LEN {
            return None;
        }
        let mut bytes = [0u8; SIG_LEN];
        bytes.copy_from_slice(slice);
        Some(Sig { scheme, bytes })
    }

    pub fn from_hex(scheme: SigScheme, s: &str) -> Result<Self, ConnectorError> {
        let bytes = hex::decode(s).map_err(|_| ConnectorError::InvalidSignature)?;
        Self::from_slice(scheme, &bytes).ok_or(ConnectorError::InvalidSignature)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Debug for Sig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sig({:?}, {}...)", self.scheme, &self.to_hex()[..16])
    }
}

impl fmt::Display for Sig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Sign a message with a secret key
pub fn sign(secret_key: &SecretKey, message: &[u8]) -> Sig {
    let signature = secret_key.signing_key().sign(message);
    Sig::new(SigScheme::Ed25519, signature.to_bytes())
}

/// Verify a signature against a public key and message
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &Sig) -> Result<(), ConnectorError> {
    match signature.scheme() {
        SigScheme::Ed25519 => {
            let verifying_key = public_key.to_verifying_key()?;
            let dalek_sig = DalekSignature::from_bytes(signature.as_bytes());
            verifying_key
                .verify(message, &dalek_sig)
                .map_err(|_| ConnectorError::InvalidSignature)
        }
    }
}
