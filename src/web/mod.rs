pub mod error;
pub mod routes;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::registry::SharedRegistry;
use crate::web::routes::{activities, activity, health};

/// Build the application router with all endpoints.
pub fn build_router(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/activities") }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activity::unregister_handler),
        )
        .route("/health", get(health::health_handler))
        // Rosters change between requests; never serve a cached listing.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(registry)
}
