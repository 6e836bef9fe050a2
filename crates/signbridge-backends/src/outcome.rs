use signbridge_core::{ConnectorError, STATUS_OK};

/// Raw result of one backend primitive call: an integer status plus optional
/// byte output, mirroring a native-bound handler signature.
///
/// Consumers must classify `status` before using `bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOutcome {
    pub status: i32,
    pub bytes: Option<Vec<u8>>,
}

impl BackendOutcome {
    /// Successful outcome with byte output.
    pub fn ok(bytes: Vec<u8>) -> Self {
        BackendOutcome {
            status: STATUS_OK,
            bytes: Some(bytes),
        }
    }

    /// Successful outcome with no byte output (e.g. verification).
    pub fn ok_empty() -> Self {
        BackendOutcome {
            status: STATUS_OK,
            bytes: None,
        }
    }

    /// Failed outcome carrying the status code for an error kind.
    pub fn err(kind: ConnectorError) -> Self {
        BackendOutcome {
            status: kind.to_status(),
            bytes: None,
        }
    }
}
