//! Series Routes
//!
//! Raw generated series, as JSON or as a CSV download.
//!
//! - GET /api/v1/series/:id - Series as JSON
//! - GET /api/v1/export/:id - Series as CSV

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::resolve_as_of;
use crate::api::dto::SeriesParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::series::{generate, parse_length, MetricId, MetricSeries};

/// GET /api/v1/series/:id
///
/// Generate a metric's series. Optional `length` and `as_of` parameters.
pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<SeriesParams>,
) -> ApiResult<Json<MetricSeries>> {
    let series = build_series(&state, &id, &params)?;
    Ok(Json(series))
}

/// GET /api/v1/export/:id
///
/// Same series as `get_series`, one CSV row per point.
pub async fn export_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<SeriesParams>,
) -> ApiResult<Response> {
    let series = build_series(&state, &id, &params)?;
    let body = format_csv(&series)?;

    let filename = format!("{}.csv", series.metric);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response())
}

/// Validate parameters and generate
fn build_series(state: &AppState, id: &str, params: &SeriesParams) -> ApiResult<MetricSeries> {
    let metric: MetricId = id.parse()?;

    let length = params.length.as_deref().map(parse_length).transpose()?;
    if let Some(n) = length {
        if n > state.max_series_length {
            return Err(ApiError::Validation(format!(
                "length {} exceeds maximum of {}",
                n, state.max_series_length
            )));
        }
    }

    let as_of = resolve_as_of(params.as_of.as_deref())?;
    let series = generate(metric, as_of, length)?;

    tracing::debug!(metric = %metric, length = series.len(), "Generated series");

    Ok(series)
}

/// Format as CSV: `timestamp,date,<category>...`
fn format_csv(series: &MetricSeries) -> ApiResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["timestamp", "date"];
    header.extend(series.categories.iter().copied());
    writer.write_record(&header).map_err(csv_error)?;

    for point in &series.points {
        let date = chrono::DateTime::from_timestamp_millis(point.timestamp)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        let mut record = vec![point.timestamp.to_string(), date];
        record.extend(point.values.iter().map(|v| v.to_string()));
        writer.write_record(&record).map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ApiError::Internal(format!("CSV flush failed: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| ApiError::Internal(format!("CSV encoding: {}", e)))
}

fn csv_error(err: csv::Error) -> ApiError {
    ApiError::Internal(format!("CSV write failed: {}", err))
}
