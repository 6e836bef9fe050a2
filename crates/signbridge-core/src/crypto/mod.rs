pub mod hash;
pub mod keys;
pub mod signature;

pub use hash::{blake3_digest, Digest, DIGEST_LEN};
pub use keys::{KeyPair, PublicKey, SecretKey};
pub use signature::{sign, verify, Sig, SigScheme, SIG_LEN};
