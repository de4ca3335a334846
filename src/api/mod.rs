mod handlers;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::dashboard::Dashboard;

pub fn create_router(dashboard: Dashboard) -> Router {
    let api = Router::new()
        // Static description of the page
        .route("/layout", get(handlers::get_layout))
        .route("/params", get(handlers::get_params))
        // Chart callbacks
        .route("/charts/pie", get(handlers::pie_chart))
        .route("/charts/scatter", get(handlers::scatter_chart))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(dashboard)
}
