use axum::{
    handler::Handler,
    http::{HeaderValue, header},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::apps;
use crate::state::AppState;

pub mod my_app;

pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const PREFLIGHT_ALLOW_HEADERS: &str =
    "Content-Type, Authorization, X-CSRF-Token, X-Requested-With, Accept";

pub fn router(state: AppState) -> Router {
    let post_headers = SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );

    Router::new()
        .route("/health", get(health))
        .route(
            apps::PATH,
            get(my_app::get_metadata)
                .post(my_app::build_transaction.layer(post_headers))
                .options(my_app::preflight),
        )
        // Error responses and unknown routes included.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
