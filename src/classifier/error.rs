use std::io;
use std::path::PathBuf;

/// Represents the different types of errors that can occur while loading or
/// evaluating the forest artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model artifact not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("artifact shape error: {0}")]
    Shape(String),
    #[error("inference error: {0}")]
    Inference(String),
}
