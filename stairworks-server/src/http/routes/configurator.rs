//! Configurator endpoints
//!
//! The visitor's selection lives in the query string
//! (`/configurator?model=<name>&finish=<id>`). Swatch buttons POST the pick
//! back, and the handler answers with a redirect carrying the new selection.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use stairworks_core::{ActiveModel, FinishId, SwatchFill, SwatchProps, SwatchSelector};
use tracing::info;

use super::pages::html_page;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::render::configurator::render_configurator;
use crate::render::{url_with_query, PageMeta};

/// Current selection, as carried in the query string
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub model: Option<String>,
    pub finish: Option<String>,
}

/// Swatch button submission
#[derive(Debug, Deserialize)]
pub struct PickForm {
    pub model: Option<String>,
    /// Finish active before the pick
    pub finish: Option<String>,
    pub pick: Option<String>,
}

/// One swatch in the JSON view
#[derive(Debug, Serialize)]
pub struct SwatchResponse<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub fill: Option<SwatchFill<'a>>,
    pub active: bool,
}

/// GET /api/swatches response
#[derive(Debug, Serialize)]
pub struct SwatchesResponse<'a> {
    pub model: Option<&'a str>,
    pub active: Option<&'a str>,
    pub swatches: Vec<SwatchResponse<'a>>,
}

/// Treat `?model=` the same as no parameter
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Look up the named model; an unknown name is a 404
fn active_model<'a>(
    state: &'a AppState,
    name: Option<&str>,
) -> Result<Option<&'a ActiveModel>, ApiError> {
    match name {
        None => Ok(None),
        Some(name) => state
            .catalog
            .model(name)
            .map(Some)
            .ok_or_else(|| ApiError::not_found("model", name)),
    }
}

fn swatch_props<'a>(
    state: &'a AppState,
    model: Option<&'a ActiveModel>,
    finish: Option<&'a FinishId>,
) -> SwatchProps<'a> {
    SwatchProps {
        swatches: state.catalog.finishes(),
        active_model: model,
        active_color: finish,
        color_hex: state.catalog.color_hex(),
    }
}

/// GET /configurator
async fn configurator(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Html<String>, ApiError> {
    let model = active_model(&state, non_empty(&query.model))?;
    let finish = non_empty(&query.finish).map(FinishId::new);

    let body = render_configurator(&state.catalog, model, finish.as_ref());
    Ok(html_page(
        &state,
        PageMeta {
            title: Some("Configurator"),
            path: "/configurator",
            description: None,
        },
        &body,
    ))
}

/// POST /configurator/pick
async fn pick(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PickForm>,
) -> Result<Redirect, ApiError> {
    let Some(requested) = non_empty(&form.pick) else {
        return Err(ApiError::bad_request("missing 'pick' field"));
    };
    let model = active_model(&state, non_empty(&form.model))?;
    let current = non_empty(&form.finish).map(FinishId::new);

    let mut picked: Option<FinishId> = None;
    let activated = SwatchSelector::new(
        swatch_props(&state, model, current.as_ref()),
        |id: &FinishId| picked = Some(id.clone()),
    )
    .activate(requested);

    let picked = match picked {
        Some(id) if activated => id,
        _ => return Err(ApiError::not_found("finish", requested)),
    };

    info!(
        model = model.map(|m| m.name.as_str()).unwrap_or_default(),
        from = current.as_ref().map(FinishId::as_str).unwrap_or_default(),
        finish = %picked,
        "finish picked"
    );

    let location = url_with_query(
        "/configurator",
        &[
            ("model", model.map(|m| m.name.as_str())),
            ("finish", Some(picked.as_str())),
        ],
    );
    Ok(Redirect::to(&location))
}

/// GET /api/swatches - the rendered swatch set as JSON
async fn swatches(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Response, ApiError> {
    let model = active_model(&state, non_empty(&query.model))?;
    let finish = non_empty(&query.finish).map(FinishId::new);
    let items = swatch_props(&state, model, finish.as_ref()).items();

    let body = SwatchesResponse {
        model: model.map(|m| m.name.as_str()),
        active: items
            .iter()
            .find(|item| item.active)
            .map(|item| item.id().as_str()),
        swatches: items
            .iter()
            .map(|item| SwatchResponse {
                id: item.id().as_str(),
                label: &item.finish.label,
                fill: item.fill,
                active: item.active,
            })
            .collect(),
    };
    Ok(Json(body).into_response())
}

/// Configurator routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/configurator", get(configurator))
        .route("/configurator/pick", post(pick))
        .route("/api/swatches", get(swatches))
}
