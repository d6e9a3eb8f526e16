use sha2::{Digest, Sha256};

/// Opaque token handed to clients (refresh and password reset flows).
/// Only its SHA-256 hash is persisted.
pub fn generate() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

pub fn hash(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
