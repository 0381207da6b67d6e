use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use irisd::{Artifact, AppState, Config};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the forest artifact (overrides IRISD_MODEL_PATH)
    #[arg(short, long)]
    model_path: Option<PathBuf>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    irisd::init_logger();
    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(model_path) = args.model_path {
        config.model_path = model_path;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    info!("=== Starting Iris Inference Service ===");

    // A missing artifact is not fatal: the service stays up so that health
    // and readiness checks remain reachable, and predictions answer 503.
    let artifact = match Artifact::load(&config.model_path) {
        Ok(artifact) => {
            info!(
                "Model ready (fingerprint: {})",
                artifact.fingerprint
            );
            Some(artifact)
        }
        Err(e) => {
            warn!(
                "Failed to load model from {:?}: {}; serving without a model",
                config.model_path, e
            );
            None
        }
    };

    let app = irisd::router(AppState::new(artifact));

    let addr = config.bind_addr();
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
