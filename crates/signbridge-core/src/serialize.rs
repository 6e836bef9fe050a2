use serde::{Deserialize, Serialize};

use crate::error::ConnectorError;

/// Serialize to deterministic bincode bytes
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, ConnectorError> {
    bincode::serialize(value).map_err(|_| ConnectorError::InvalidSerialization)
}

/// Deserialize from bincode bytes
pub fn from_bytes<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T, ConnectorError> {
    bincode::deserialize(bytes).map_err(|_| ConnectorError::InvalidSerialization)
}

/// Serialize to JSON string (for the session-facing boundary)
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ConnectorError> {
    serde_json::to_string(value).map_err(|_| ConnectorError::InvalidSerialization)
}

/// Deserialize from JSON string
pub fn from_json<'a, T: Deserialize<'a>>(json: &'a str) -> Result<T, ConnectorError> {
    serde_json::from_str(json).map_err(|_| ConnectorError::InvalidSerialization)
}
