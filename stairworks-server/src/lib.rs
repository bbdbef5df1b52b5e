//! stairworks-server: the stairworks marketing site over HTTP
//!
//! Server-rendered pages (home, FAQ, configurator) inside a shared layout
//! shell, a JSON view of the swatch gallery, and static assets.

pub mod http;
pub mod render;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
