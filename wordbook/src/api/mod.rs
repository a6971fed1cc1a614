use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::service::health::health_handler;
use crate::service::word::get_word_handler;
use crate::utils::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_router())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // The game client may look words up with either method.
        .route("/words/{letter}", get(get_word_handler).post(get_word_handler))
        .route("/test", get(health_handler))
}

/// Open cross-origin access for the game client. Preflight requests are
/// answered by the layer with an empty 200.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any)
}
