use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        health::livez,
        images::{delete_image, list_images, serve_image, upload_image},
        squads::{list_squads, register_squad},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route(
            "/images",
            get(list_images).post(upload_image).delete(delete_image),
        )
        .route("/squads", get(list_squads).post(register_squad))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/images/{name}", get(serve_image))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
