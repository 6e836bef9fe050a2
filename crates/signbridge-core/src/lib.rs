//! Signbridge Core - Connector value types, error taxonomy, and serialization
//!
//! This crate provides the foundational types for the signbridge wallet
//! connector: digests, signatures, keys, the network model, the connector
//! request/response shapes, and the closed error taxonomy shared with the
//! per-network backends.

pub mod crypto;
pub mod error;
pub mod network;
pub mod request;
pub mod serialize;
pub mod transfer;

pub use crypto::{
    blake3_digest, sign, verify, Digest, KeyPair, PublicKey, SecretKey, Sig, SigScheme, DIGEST_LEN,
    SIG_LEN,
};
pub use error::{classify, ConnectorError, STATUS_OK};
pub use network::NetworkId;
pub use request::{AccountId, ConnectorRequest, ConnectorResponse, MessageKind, Operation};
pub use transfer::TransferFields;
