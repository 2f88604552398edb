use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use validator::Validate;

use crate::click_data::hourly_click_data;
use crate::error::{ApiError, MISSING_PAGE_MESSAGE};
use crate::models::ClickData;
use crate::store::ClickStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ClickStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ClickStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ClickDataParams {
    #[validate(length(min = 1, max = 128))]
    pub page: Option<String>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct Dashboard {
    pages: Vec<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/pages", get(pages))
        .route("/click-data", get(click_data))
        .route("/styles.css", get(styles))
        .route("/charts.js", get(charts_script))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[axum::debug_handler]
async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let pages = state.store.pages().await?;
    Ok(Dashboard { pages })
}

#[axum::debug_handler]
async fn pages(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.store.pages().await?))
}

#[axum::debug_handler]
async fn click_data(
    State(state): State<AppState>,
    Query(params): Query<ClickDataParams>,
) -> Result<Json<ClickData>, ApiError> {
    params.validate().map_err(ApiError::InvalidParameter)?;
    let Some(page) = params.page.as_deref() else {
        return Err(ApiError::MissingParameter(MISSING_PAGE_MESSAGE));
    };

    let data = hourly_click_data(state.store.as_ref(), page, Utc::now()).await?;
    Ok(Json(data))
}

async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../templates/styles.css"),
    )
}

async fn charts_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript")],
        include_str!("../templates/charts.js"),
    )
}
