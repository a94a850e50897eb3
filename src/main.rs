mod config;
mod error;
mod routes;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    if config.site.weather_key.is_none() {
        tracing::warn!("WEATHER_API_KEY not set; weather requests are sent without a key");
    }

    let app = routes::app(&config)?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, title = %config.site.title, "homepage listening");
    axum::serve(listener, app).await?;
    Ok(())
}
