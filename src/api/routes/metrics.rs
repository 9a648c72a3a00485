//! Metrics Routes
//!
//! Read-only endpoints over the static metric table.
//!
//! - GET /api/v1/selections - List every selectable view
//! - GET /api/v1/metrics - List all metric descriptors
//! - GET /api/v1/metrics/:id - Get one metric descriptor

use axum::{extract::Path, Json};

use crate::api::dto::{MetricListResponse, MetricResponse, SelectionListResponse};
use crate::api::error::ApiResult;
use crate::series::MetricId;
use crate::view::{describe, Selection};

/// GET /api/v1/selections
///
/// `home` plus the twelve metric identifiers, in dashboard order.
pub async fn list_selections() -> Json<SelectionListResponse> {
    Json(SelectionListResponse {
        selections: Selection::all()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect(),
    })
}

/// GET /api/v1/metrics
///
/// List all metric descriptors.
pub async fn list_metrics() -> Json<MetricListResponse> {
    let metrics: Vec<MetricResponse> = MetricId::all()
        .iter()
        .copied()
        .map(metric_to_response)
        .collect();

    Json(MetricListResponse {
        total: metrics.len(),
        metrics,
    })
}

/// GET /api/v1/metrics/:id
///
/// Get a specific metric descriptor.
pub async fn get_metric(Path(id): Path<String>) -> ApiResult<Json<MetricResponse>> {
    let metric: MetricId = id.parse()?;
    Ok(Json(metric_to_response(metric)))
}

/// Convert a metric id to its response
fn metric_to_response(metric: MetricId) -> MetricResponse {
    MetricResponse {
        descriptor: *describe(metric),
        categories: metric.categories().to_vec(),
        cadence: metric.cadence().to_string(),
        default_length: metric.default_length(),
    }
}
