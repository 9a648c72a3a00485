//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod metrics;
pub mod series;
pub mod views;

use chrono::{DateTime, Utc};

use crate::api::error::{ApiError, ApiResult};

/// Anchor time from an optional `as_of` parameter (ms since epoch)
///
/// Falls back to the current time.
pub(crate) fn resolve_as_of(as_of: Option<&str>) -> ApiResult<DateTime<Utc>> {
    let Some(raw) = as_of else {
        return Ok(Utc::now());
    };

    let ms: i64 = raw.trim().parse().map_err(|_| {
        ApiError::Validation(format!("as_of must be milliseconds since epoch: {}", raw))
    })?;

    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| ApiError::Validation(format!("as_of out of range: {}", ms)))
}
