use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;

use crate::charts;
use crate::dashboard::Dashboard;
use crate::layout::Component;
use crate::models::*;

// ============================================================
// Page
// ============================================================

pub async fn index(State(dashboard): State<Dashboard>) -> Html<String> {
    Html(dashboard.page().to_string())
}

pub async fn get_layout(State(dashboard): State<Dashboard>) -> Json<Component> {
    Json(dashboard.layout().clone())
}

pub async fn get_params(State(dashboard): State<Dashboard>) -> Json<DashboardParams> {
    Json(dashboard.params().clone())
}

// ============================================================
// Health
// ============================================================

pub async fn health(State(dashboard): State<Dashboard>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "records": dashboard.table().len(),
    }))
}

// ============================================================
// Chart callbacks
// ============================================================

/// Query parameters for the pie chart.
#[derive(Debug, Deserialize)]
pub struct PieQuery {
    /// Dropdown value. Defaults to all sites.
    pub site: Option<String>,
}

/// Query parameters for the scatter chart.
#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    /// Dropdown value. Defaults to all sites.
    pub site: Option<String>,
    /// Lower slider handle. Defaults to the slider's initial value.
    pub low: Option<f64>,
    /// Upper slider handle. Defaults to the slider's initial value.
    pub high: Option<f64>,
}

pub async fn pie_chart(
    State(dashboard): State<Dashboard>,
    Query(query): Query<PieQuery>,
) -> Json<Figure> {
    let site = SiteSelection::from(query.site);
    tracing::debug!("Pie chart for site {}", site);
    let figure = charts::pie_chart(dashboard.table(), &site);
    if figure.is_empty() {
        tracing::debug!("No launches match site {}", site);
    }
    Json(figure)
}

pub async fn scatter_chart(
    State(dashboard): State<Dashboard>,
    Query(query): Query<ScatterQuery>,
) -> Json<Figure> {
    let site = SiteSelection::from(query.site);
    let [default_low, default_high] = dashboard.params().payload_slider.value;
    let range = PayloadRange::new(
        query.low.unwrap_or(default_low),
        query.high.unwrap_or(default_high),
    );
    tracing::debug!(
        "Scatter chart for site {} over [{}, {}]",
        site,
        range.low,
        range.high
    );
    let figure = charts::scatter_chart(dashboard.table(), &site, range);
    if figure.is_empty() {
        tracing::debug!("No launches match site {} in the payload range", site);
    }
    Json(figure)
}
