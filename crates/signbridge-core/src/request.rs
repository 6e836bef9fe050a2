use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::{Digest, Sig};
use crate::network::NetworkId;
use crate::transfer::TransferFields;

/// Wallet account identifier, resolved by the caller before a request is
/// submitted. Key selection/derivation stays with the key-management
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        AccountId(s.to_string())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The connector operations a session may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Digest,
    Sign,
    Serialize,
    Validate,
}

/// How a payload is framed before hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Raw transaction signing bytes.
    Transaction,
    /// Personal message: a length prefix is applied before hashing so a
    /// signed message can never collide with a signed transaction.
    PersonalSign,
}

/// A single connector request. Immutable once constructed; owned solely by
/// the pipeline call that processes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorRequest {
    pub operation: Operation,
    pub network: NetworkId,
    pub message_kind: MessageKind,
    /// Digest input for `Digest`, digest bytes for `Sign`.
    pub payload: Vec<u8>,
    /// Signing account, required for `Sign`.
    pub account: Option<AccountId>,
    /// Transaction fields, required for `Serialize`.
    pub fields: Option<TransferFields>,
    /// Signature to embed, optional for `Serialize`.
    pub signature: Option<Sig>,
    /// Externally supplied serialization, required for `Validate`.
    pub serialized: Option<Vec<u8>>,
}

impl ConnectorRequest {
    /// Request a digest over a payload.
    pub fn digest(network: NetworkId, kind: MessageKind, payload: Vec<u8>) -> Self {
        ConnectorRequest {
            operation: Operation::Digest,
            network,
            message_kind: kind,
            payload,
            account: None,
            fields: None,
            signature: None,
            serialized: None,
        }
    }

    /// Request a signature over previously produced digest bytes.
    pub fn sign(network: NetworkId, account: AccountId, digest: &Digest) -> Self {
        ConnectorRequest {
            operation: Operation::Sign,
            network,
            message_kind: MessageKind::Transaction,
            payload: digest.to_vec(),
            account: Some(account),
            fields: None,
            signature: None,
            serialized: None,
        }
    }

    /// Request canonical serialization of transfer fields, optionally with a
    /// signature embedded.
    pub fn serialize(network: NetworkId, fields: TransferFields, signature: Option<Sig>) -> Self {
        ConnectorRequest {
            operation: Operation::Serialize,
            network,
            message_kind: MessageKind::Transaction,
            payload: Vec::new(),
            account: None,
            fields: Some(fields),
            signature,
            serialized: None,
        }
    }

    /// Request validation of an externally supplied serialization.
    pub fn validate(network: NetworkId, serialized: Vec<u8>) -> Self {
        ConnectorRequest {
            operation: Operation::Validate,
            network,
            message_kind: MessageKind::Transaction,
            payload: Vec::new(),
            account: None,
            fields: None,
            signature: None,
            serialized: Some(serialized),
        }
    }
}

/// The well-formed result of a connector request; exactly one of these or a
/// `ConnectorError`, never both, never neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConnectorResponse {
    Digest(Digest),
    Signature(Sig),
    Serialized(Vec<u8>),
    Validated {
        fields: TransferFields,
        is_signed: bool,
    },
}
