mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "invalid server configuration");
            std::process::exit(1);
        }
    };

    let app = match routes::app() {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "failed to build router");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "crimesleuth listening");
    axum::serve(listener, app).await.expect("server failed");
}
