use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Json, Redirect},
};
use serde::Serialize;
use std::sync::Arc;

use crate::model::Slug;
use crate::source::PeopleSource;
use crate::view::{render_home_page, render_not_found_page, PeoplePage};

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn home_page() -> Html<String> {
    Html(render_home_page())
}

pub async fn redirect_home() -> Redirect {
    Redirect::permanent("/")
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render_not_found_page()))
}

pub async fn list_people<S: PeopleSource + 'static>(
    State(source): State<AppState<S>>,
) -> Html<String> {
    render_people(source, None).await
}

pub async fn show_person<S: PeopleSource + 'static>(
    State(source): State<AppState<S>>,
    Path(slug): Path<Slug>,
) -> Html<String> {
    render_people(source, Some(slug)).await
}

// The page lives only as long as this request, so a dropped connection cancels the load
async fn render_people<S: PeopleSource + 'static>(
    source: AppState<S>,
    selected_slug: Option<Slug>,
) -> Html<String> {
    let page = PeoplePage::mount(source, selected_slug);
    page.settled().await;
    Html(page.render())
}
