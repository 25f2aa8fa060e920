//! HTTP adapter: an axum router over the caption, hashtag and post use cases

mod error;
mod handlers;

use axum::Router;
use axum::routing::{get, post};
use creator_studio_domain::usecases::PostCatalog;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use handlers::{ListPostsQuery, ServiceInfo, StatusReport};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: PostCatalog,
    /// Where the store lives; the status endpoint only reports whether it is set
    pub database_url: Option<String>,
}

impl AppState {
    pub fn new(catalog: PostCatalog) -> Self {
        Self {
            catalog,
            database_url: None,
        }
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }
}

/// Router options
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allow any origin, method and header
    pub cors_permissive: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cors_permissive: true,
        }
    }
}

/// Build the application router
pub fn router(state: AppState, config: &RouterConfig) -> Router {
    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::status))
        .route("/api/generate-caption", post(handlers::generate_caption))
        .route("/api/suggest-hashtags", post(handlers::suggest_tags))
        .route(
            "/api/posts",
            post(handlers::create_post).get(handlers::list_posts),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.cors_permissive {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}
