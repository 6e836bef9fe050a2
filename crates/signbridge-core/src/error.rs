use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed error taxonomy crossing the connector boundary.
///
/// Every failure inside the connector core is translated into exactly one of
/// these kinds before it reaches session code; raw backend status codes never
/// escape.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorError {
    /// The target network has no connector capability at all.
    #[error("network has no connector support")]
    UnsupportedConnector,

    /// The payload was malformed or the hashing primitive failed.
    #[error("digest is invalid or failed to be produced")]
    InvalidDigest,

    /// The signing primitive failed or signature parameters mismatched.
    #[error("signature is invalid or failed to be completed")]
    InvalidSignature,

    /// Encoding failed, or decoding did not round-trip losslessly.
    #[error("serialization is invalid or failed to process")]
    InvalidSerialization,

    /// A backend reported a status code outside the known table.
    #[error("unrecognized backend status code: {0}")]
    UnrecognizedBackendStatus(i32),
}

/// Sentinel status meaning "not an error". Reserved: it is never a member of
/// the error table, so the absence of an error and an unrecognized code can
/// never be conflated.
pub const STATUS_OK: i32 = -1;

/// The named taxonomy members, in wire-code order. `classify` is driven by
/// this table together with `to_status`, keeping the two directions bijective.
const STATUS_TABLE: [ConnectorError; 4] = [
    ConnectorError::UnsupportedConnector,
    ConnectorError::InvalidDigest,
    ConnectorError::InvalidSignature,
    ConnectorError::InvalidSerialization,
];

impl ConnectorError {
    /// Wire-level status code for this error kind.
    ///
    /// `UnrecognizedBackendStatus` echoes the code it carries, so the mapping
    /// stays total in both directions.
    pub const fn to_status(self) -> i32 {
        match self {
            ConnectorError::UnsupportedConnector => 1,
            ConnectorError::InvalidDigest => 2,
            ConnectorError::InvalidSignature => 3,
            ConnectorError::InvalidSerialization => 4,
            ConnectorError::UnrecognizedBackendStatus(code) => code,
        }
    }
}

/// Classify a raw backend status code.
///
/// Total and pure: `STATUS_OK` maps to `None`, table members map to their
/// variant, and every other value maps to `UnrecognizedBackendStatus` rather
/// than failing the classification itself.
pub fn classify(status: i32) -> Option<ConnectorError> {
    if status == STATUS_OK {
        return None;
    }
    for kind in STATUS_TABLE {
        if kind.to_status() == status {
            return Some(kind);
        }
    }
    Some(ConnectorError::UnrecognizedBackendStatus(status))
}
