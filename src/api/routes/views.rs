//! View Routes
//!
//! The selection interface: pick `home` or a metric, get back what to
//! display.
//!
//! - GET /api/v1/views/:selection - Home summary or one metric's chart

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use super::resolve_as_of;
use crate::api::dto::{ViewParams, ViewResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::view::Selection;

/// GET /api/v1/views/:selection
///
/// `home` returns twelve headlines; a metric id returns its chart and
/// headline.
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Path(selection): Path<String>,
    Query(params): Query<ViewParams>,
) -> ApiResult<Json<ViewResponse>> {
    let selection: Selection = selection.parse()?;
    let as_of = resolve_as_of(params.as_of.as_deref())?;

    let view = state.renderer.render_selection(selection, as_of)?;

    Ok(Json(ViewResponse {
        view,
        as_of: as_of.timestamp_millis(),
    }))
}
