mod config;
mod proxy;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is the normal production case.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "scorely failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::HostConfig::from_env()?;
    let state = state::AppState::new(&config)?;
    let app = routes::leptos_app(state)?;

    let port = config.port;
    let backend = config.backend_url.as_str();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, %backend, "scorely listening");
    axum::serve(listener, app).await?;
    Ok(())
}
