//! MechDB Web Server
//!
//! Run with: cargo run -p mechdb-web

use std::net::SocketAddr;
use std::path::Path;

use mechdb_data::ReferenceData;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = mechdb_web::config::Config::load()?;

    info!("Starting MechDB web server...");

    // Load both reference databases before accepting requests
    let data = ReferenceData::load(Path::new(&config.database.path))?;
    let state = mechdb_web::state::AppState::new(data);

    // Build router
    let app = mechdb_web::router::build_router(state);

    // Bind to the configured address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
