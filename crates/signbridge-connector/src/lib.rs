//! Signbridge Connector - Engines and request pipeline
//!
//! The orchestration layer between dApp sessions and per-network backends:
//! the digest/signing/serialization engines, the key-capability seam, the
//! request pipeline that translates every backend outcome into the closed
//! error taxonomy, and a bounded async service wrapper.

pub mod digest;
pub mod keystore;
pub mod pipeline;
pub mod serialization;
pub mod service;
pub mod signing;

pub use digest::DigestEngine;
pub use keystore::{KeyCapability, KeyStore, MemoryKeyStore};
pub use pipeline::ConnectorRequestPipeline;
pub use serialization::SerializationEngine;
pub use service::ConnectorService;
pub use signing::SigningEngine;
