use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::config::AppConfig;
use crate::source::{HttpPeopleSource, PeopleSource};

pub fn create_router<S: PeopleSource + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Pages
        .route("/", get(handlers::home_page))
        .route("/home", get(handlers::redirect_home))
        .route("/people", get(handlers::list_people::<S>))
        .route("/people/:slug", get(handlers::show_person::<S>))
        .fallback(handlers::not_found)
}

/// Router with static assets mounted under /assets when a directory is configured
pub fn create_app<S: PeopleSource + 'static>(source: Arc<S>, assets_dir: Option<&str>) -> Router {
    let mut router = create_router::<S>();
    if let Some(dir) = assets_dir {
        router = router.nest_service("/assets", ServeDir::new(dir));
    }
    router.with_state(source)
}

/// The application as the server runs it: people from the configured API
pub fn create_app_from_config(config: &AppConfig) -> Router {
    let source = Arc::new(HttpPeopleSource::new(config.api.people_url.clone()));
    create_app(source, config.assets.dir.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Person, Sex};
    use crate::source::StaticPeopleSource;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn app() -> Router {
        let source = Arc::new(StaticPeopleSource::new(vec![
            Person::new("jane-1850", "Jane", Sex::Female, 1850, 1910).with_mother("Mary"),
            Person::new("mary-1820", "Mary", Sex::Female, 1820, 1880),
        ]));
        create_app(source, None)
    }

    #[tokio::test]
    async fn test_people_route_renders_table() {
        let (status, body) = get_page(app(), "/people").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"data-cy="peopleTable""#));
        assert_eq!(body.matches(r#"data-cy="person""#).count(), 2);
        assert!(!body.contains("has-background-warning"));
    }

    #[tokio::test]
    async fn test_person_route_highlights_row() {
        let (status, body) = get_page(app(), "/people/mary-1820").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("has-background-warning").count(), 1);
    }

    #[tokio::test]
    async fn test_failed_source_still_renders_page() {
        let app = create_app(Arc::new(StaticPeopleSource::failing()), None);
        let (status, body) = get_page(app, "/people").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Something went wrong"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = get_page(app(), "/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_home_redirects_to_root() {
        let response = app()
            .oneshot(Request::builder().uri("/home").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()["location"], "/");
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_page(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""status":"healthy""#));
    }

    #[tokio::test]
    async fn test_configured_assets_are_served() {
        let dir = std::env::temp_dir().join(format!("people-table-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("app.css"), ".Loader { display: flex; }").unwrap();

        let mut config = AppConfig::default();
        config.assets.dir = Some(dir.to_str().unwrap().to_string());

        let (status, body) = get_page(create_app_from_config(&config), "/assets/app.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ".Loader { display: flex; }");

        let (status, _) = get_page(create_app_from_config(&config), "/assets/missing.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_assets_not_mounted_without_dir() {
        let (status, body) =
            get_page(create_app_from_config(&AppConfig::default()), "/assets/app.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }
}
