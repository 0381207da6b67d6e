//! A thread-safe inference service for a pre-trained Random Forest Iris classifier.
//!
//! The classifier artifact is produced by an offline training step and loaded
//! once at startup; after that every prediction is a read against immutable
//! shared state.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use irisd::Artifact;
//!
//! let artifact = Artifact::load("models/iris_forest.json")?;
//! let (label, probability) = artifact.forest.predict(&[5.1, 3.5, 1.4, 0.2])?;
//! println!("Predicted class: {} ({:.2})", label, probability);
//! # Ok(())
//! # }
//! ```
//!
//! # Serving
//!
//! ```no_run
//! # async fn serve() -> Result<(), Box<dyn std::error::Error>> {
//! use irisd::{Artifact, AppState, router};
//!
//! let artifact = Artifact::load("models/iris_forest.json").ok();
//! let app = router(AppState::new(artifact));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The loaded forest is never mutated after startup, so it is shared across
//! request handlers behind an `Arc` with no locking.

pub mod classifier;
pub mod config;
pub mod server;

pub use classifier::{Artifact, Forest, ModelError, ModelMetadata, Node, Tree};
pub use config::{Config, ConfigError};
pub use server::{router, AppState};

pub fn init_logger() {
    env_logger::init();
}
