//! Static assets (stylesheet, model preview images, fonts) under /assets

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

/// Serve `dir` at /assets. Missing files are plain 404s.
pub fn router<S>(dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "assets directory not found, /assets will 404");
    }
    Router::new().nest_service("/assets", ServeDir::new(dir))
}
