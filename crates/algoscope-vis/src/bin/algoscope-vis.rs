//! Algoscope visualization server binary.

use algoscope_vis::{VisConfig, VisServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "algoscope_vis=info,algoscope=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = VisConfig::from_env()?;
    if let Some(port) = std::env::args().nth(1) {
        config = config.with_port(port.parse()?);
    }

    tracing::info!(
        algorithm = config.algorithm.id(),
        speed_ms = config.speed_ms,
        "Starting Algoscope"
    );

    let server = VisServer::new(&config)?;

    println!("Algoscope running at http://{}", config.addr);
    println!("Press Ctrl+C to stop");

    server.serve(config.addr).await?;
    Ok(())
}
