//! API Routes
//!
//! Configures the Axum router with all grade service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    components_handler, cumulative_handler, delete_dashboard_handler, get_dashboard_handler,
    health_handler, lookup_grade_handler, performance_handler, put_dashboard_handler,
    semester_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: the browser client is served from a different origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/grades/lookup", post(lookup_grade_handler))
        .route("/grades/components", post(components_handler))
        .route("/gpa/semester", post(semester_handler))
        .route("/gpa/cumulative", post(cumulative_handler))
        .route("/performance", post(performance_handler))
        .route(
            "/dashboard/:user_id/:education_level",
            get(get_dashboard_handler)
                .put(put_dashboard_handler)
                .delete(delete_dashboard_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
