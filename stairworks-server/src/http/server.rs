//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing and timeout middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, StatusCode};
use axum::Router;
use stairworks_core::{Catalog, FaqEntry, ServerSettings, SiteConfig, SiteMeta, StairsError};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::routes;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,

    /// Directory served under /assets
    pub assets_dir: PathBuf,

    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from(&ServerSettings::default())
    }
}

impl From<&ServerSettings> for ServerConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self {
            bind_addr: settings.bind,
            cors_permissive: settings.cors_permissive,
            assets_dir: settings.assets_dir.clone(),
            timeout_secs: settings.timeout_secs,
        }
    }
}

/// Shared, read-only application state.
///
/// Configurator selections are not stored here: each visitor's active model
/// and finish travel in the query string, so the server holds no per-user
/// state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub site: SiteMeta,
    pub catalog: Catalog,
    pub faq: Vec<FaqEntry>,
}

impl AppState {
    pub fn new(site: SiteMeta, catalog: Catalog, faq: Vec<FaqEntry>) -> Self {
        Self { site, catalog, faq }
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self, StairsError> {
        Ok(Self::new(config.site.clone(), config.catalog()?, config.faq()))
    }
}

/// Build the application router with all routes and middleware
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        let port = config.bind_addr.port();
        let origins = [
            format!("http://localhost:{port}"),
            format!("http://127.0.0.1:{port}"),
        ]
        .into_iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(timeout_layer(Duration::from_secs(config.timeout_secs)))
        .layer(cors);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        .merge(routes::configurator::router())
        .merge(routes::assets::router(&config.assets_dir))
        .layer(middleware)
        .with_state(state)
}

/// Requests still running after `timeout` are answered with 408
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let config = SiteConfig::load()?;
/// let state = AppState::from_config(&config)?;
/// run_server(state, ServerConfig::from(&config.server)).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(
        finishes = state.catalog.finishes().len(),
        models = state.catalog.models().len(),
        faq = state.faq.len(),
        assets = %config.assets_dir.display(),
        "site content loaded"
    );

    let app = build_router(Arc::new(state), &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Site config error: {0}")]
    Config(#[from] StairsError),
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use stairworks_core::catalog::FinishEntry;
    use stairworks_core::{ActiveModel, Finish};
    use tower::ServiceExt;

    /// oak/walnut catalog with two models, used by the route tests
    pub(crate) fn test_state() -> Arc<AppState> {
        let entries = vec![
            FinishEntry {
                id: "oak".to_string(),
                label: "Oak".to_string(),
                hex: None,
            },
            FinishEntry {
                id: "walnut".to_string(),
                label: "Walnut".to_string(),
                hex: Some("#5b3a29".to_string()),
            },
        ];
        let models = vec![
            ActiveModel::new("straight", "Straight").with_variant("oak", ["oak1.png"]),
            ActiveModel::new("spiral", "Spiral").with_variant("walnut", ["walnut1.png"]),
        ];
        let catalog = Catalog::from_entries(&entries, models).unwrap();
        assert_eq!(catalog.finishes()[0], Finish::new("oak", "Oak"));

        Arc::new(AppState::new(
            SiteMeta::default(),
            catalog,
            vec![FaqEntry::new("Do you ship?", "Yes & <quickly>.")],
        ))
    }

    pub(crate) fn test_router() -> Router {
        build_router(test_state(), &ServerConfig::default())
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(!config.cors_permissive);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn state_from_default_config() {
        let state = AppState::from_config(&SiteConfig::default()).unwrap();
        assert_eq!(state.catalog.models().len(), 3);
        assert!(!state.faq.is_empty());
    }

    #[tokio::test]
    async fn slow_requests_time_out_with_408() {
        let app: Router = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .layer(timeout_layer(Duration::from_millis(20)));

        let response = app
            .oneshot(Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn fast_requests_pass_the_timeout() {
        let config = ServerConfig {
            timeout_secs: 1,
            ..ServerConfig::default()
        };
        let response = build_router(test_state(), &config)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
