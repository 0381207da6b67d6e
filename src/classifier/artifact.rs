use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::error::ModelError;
use super::forest::Forest;

/// A loaded model artifact: the deserialized forest plus the SHA-256
/// fingerprint of the raw bytes it came from.
///
/// Loaded exactly once at process startup and read-only thereafter. There is
/// no retry or hot-reload; the artifact is expected to be produced by a
/// separate offline training step before the service starts.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub forest: Forest,
    pub fingerprint: String,
}

impl Artifact {
    /// Reads and validates the JSON forest artifact at `path`.
    ///
    /// A missing or malformed artifact is an error for the caller to handle;
    /// the serving binary logs it and keeps running so that health endpoints
    /// stay reachable.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }

        log::info!("Loading model artifact from {:?}", path);
        let bytes = fs::read(path)?;
        log::info!("Read {} bytes", bytes.len());

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let fingerprint = format!("{:x}", hasher.finalize());
        log::info!("Artifact fingerprint: {}", fingerprint);

        let forest: Forest = serde_json::from_slice(&bytes)?;
        forest.validate()?;
        log::info!(
            "Model loaded: {} classes, {} trees",
            forest.classes.len(),
            forest.trees.len()
        );

        Ok(Self {
            forest,
            fingerprint,
        })
    }
}
