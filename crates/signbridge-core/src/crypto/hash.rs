use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConnectorError;

/// Length of a connector digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte message digest, the input to signing.
///
/// A digest has no identity beyond its bytes: it is a pure, deterministic
/// function of (network, message kind, payload).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    pub const ZERO: Digest = Digest([0u8; DIGEST_LEN]);

    pub fn new(data: [u8; DIGEST_LEN]) -> Self {
        Digest(data)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != DIGEST_LEN {
            return None;
        }
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(slice);
        Some(Digest(bytes))
    }

    pub fn from_hex(s: &str) -> Result<Self, ConnectorError> {
        let bytes = hex::decode(s).map_err(|_| ConnectorError::InvalidDigest)?;
        Self::from_slice(&bytes).ok_or(ConnectorError::InvalidDigest)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Compute the Blake3 digest of data.
pub fn blake3_digest(data: &[u8]) -> Digest {
    let hash = blake3::hash(data);
    Digest(*hash.as_bytes())
}
