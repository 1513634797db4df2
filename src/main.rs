mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod translate;
mod utils;
mod views;

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("course_translator=debug,tower_http=debug")),
        )
        .init();

    let config = load_config()?;

    // Ensure upload directory exists
    let system_config = &config.system_config;
    std::fs::create_dir_all(system_config.upload_path())?;
    info!("Upload directory: {}", system_config.upload_dir);

    let addr = format!("{}:{}", system_config.host, system_config.port);

    let app_state = AppState::new(config)?;

    let app = Router::new()
        .merge(routes::create_routes(app_state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Try `$CONFIG_PATH`, then `conf.yaml` and `conf.json`. With no file present
/// the built-in defaults are used.
fn load_config() -> Result<Config> {
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    for path in &config_paths {
        if !std::path::Path::new(path).exists() {
            tracing::debug!("No config file at {}", path);
            continue;
        }
        let config = Config::load(path)?;
        info!("Loaded configuration from: {}", path);
        return Ok(config);
    }

    info!("No config file found (tried {:?}), using defaults", config_paths);
    Ok(Config::default())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutting down");
}
