//! Signbridge Backends - Per-network connector primitives
//!
//! Each network's hash/sign/encode/decode primitives live behind the
//! `NetworkBackend` trait and report raw integer status codes; the engines in
//! `signbridge-connector` run every outcome through the core classifier
//! before touching the bytes.

pub mod nova;
pub mod outcome;
pub mod registry;

use signbridge_core::{MessageKind, PublicKey, SecretKey, Sig, TransferFields};

pub use nova::{NovaBackend, TxEnvelope};
pub use outcome::BackendOutcome;
pub use registry::BackendRegistry;

/// Uniform capability interface over one network's cryptographic primitives.
///
/// Implementations must be total: malformed input is reported through the
/// outcome status, never by panicking.
pub trait NetworkBackend: Send + Sync {
    /// Hash a payload under the network's digesting rule for `kind`.
    fn hash(&self, kind: MessageKind, payload: &[u8]) -> BackendOutcome;

    /// Sign digest bytes with a borrowed secret key.
    fn sign(&self, digest: &[u8], key: &SecretKey) -> BackendOutcome;

    /// Verify a signature over digest bytes against a public key.
    fn verify(&self, digest: &[u8], signature: &Sig, key: &PublicKey) -> BackendOutcome;

    /// Encode transfer fields (and an optional signature) into the network's
    /// canonical transaction bytes.
    fn encode(&self, fields: &TransferFields, signature: Option<&Sig>) -> BackendOutcome;

    /// Decode transaction bytes, enforcing a lossless round-trip. On success
    /// the outcome bytes are the canonical re-encoding of the decoded
    /// envelope.
    fn decode(&self, bytes: &[u8]) -> BackendOutcome;
}
