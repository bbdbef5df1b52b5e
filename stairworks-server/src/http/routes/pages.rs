//! Content pages: home, FAQ and the not-found page

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
    routing::get,
    Router,
};
use chrono::Datelike;

use crate::http::server::AppState;
use crate::render::faq::render_faq;
use crate::render::home::render_home;
use crate::render::{render_page, PageMeta};

/// Wrap `body` in the site layout, stamping the current year in the footer
pub(crate) fn html_page(state: &AppState, page: PageMeta<'_>, body: &str) -> Html<String> {
    let year = chrono::Utc::now().year();
    Html(render_page(&state.site, page, body, year))
}

/// GET /
async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let body = render_home(&state.site, state.catalog.models());
    html_page(
        &state,
        PageMeta {
            title: None,
            path: "/",
            description: None,
        },
        &body,
    )
}

/// GET /faq
async fn faq(State(state): State<Arc<AppState>>) -> Html<String> {
    let body = render_faq(&state.faq);
    html_page(
        &state,
        PageMeta {
            title: Some("FAQ"),
            path: "/faq",
            description: Some("Answers about lead times, materials, measuring and installation."),
        },
        &body,
    )
}

async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> (StatusCode, Html<String>) {
    tracing::debug!(path = %uri.path(), "no route");
    let body = r#"<section class="not-found"><h1>Page not found</h1><p><a href="/">Back to the home page</a></p></section>"#;
    let page = html_page(
        &state,
        PageMeta {
            title: Some("Not found"),
            path: uri.path(),
            description: None,
        },
        body,
    );
    (StatusCode::NOT_FOUND, page)
}

/// Page routes, including the HTML fallback for unknown paths
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/faq", get(faq))
        .fallback(not_found)
}
