//! User icons and the fallback image served when a user has none

use std::path::Path;

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of icon bytes
pub fn icon_hash(image: &[u8]) -> String {
    hex::encode(Sha256::digest(image))
}

/// Image returned for users without an icon row, hashed once at start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackIcon {
    image: Vec<u8>,
    hash: String,
}

impl FallbackIcon {
    /// Wrap image bytes and precompute their hash
    pub fn from_bytes(image: Vec<u8>) -> Self {
        let hash = icon_hash(&image);
        Self { image, hash }
    }

    /// Read the fallback image from disk
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        std::fs::read(path).map(Self::from_bytes)
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}
