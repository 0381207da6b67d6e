mod artifact;
mod error;
mod forest;
mod metadata;

pub use artifact::Artifact;
pub use error::ModelError;
pub use forest::{Forest, Node, Tree};
pub use metadata::{ModelMetadata, CLASS_NAMES, FEATURE_NAMES, NUM_FEATURES};
