//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::view::{MetricDescriptor, View};

// ============================================
// REQUEST PARAMETERS
// ============================================

/// Query parameters shared by series and export routes
#[derive(Debug, Default, Deserialize)]
pub struct SeriesParams {
    /// Length override; kept textual so non-integers map to `INVALID_LENGTH`
    #[serde(default)]
    pub length: Option<String>,
    /// Anchor time (ms since epoch), defaults to now; textual so bad input
    /// still gets a JSON error body
    #[serde(default)]
    pub as_of: Option<String>,
}

/// Query parameters for view routes
#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
    /// Anchor time (ms since epoch), defaults to now; textual so bad input
    /// still gets a JSON error body
    #[serde(default)]
    pub as_of: Option<String>,
}

// ============================================
// SELECTION / METRIC DTOs
// ============================================

/// Available selections
#[derive(Debug, Serialize)]
pub struct SelectionListResponse {
    /// `home` followed by every metric id, in table order
    pub selections: Vec<String>,
}

/// Metric descriptor plus series shape
#[derive(Debug, Serialize)]
pub struct MetricResponse {
    #[serde(flatten)]
    pub descriptor: MetricDescriptor,
    /// Category names
    pub categories: Vec<&'static str>,
    /// Point spacing: daily or weekly
    pub cadence: String,
    /// Points generated without an override
    pub default_length: usize,
}

/// List metrics response
#[derive(Debug, Serialize)]
pub struct MetricListResponse {
    /// List of metrics
    pub metrics: Vec<MetricResponse>,
    /// Total count
    pub total: usize,
}

/// Rendered view response
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    #[serde(flatten)]
    pub view: View,
    /// Anchor time used (ms since epoch)
    pub as_of: i64,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Number of metrics the generator serves
    pub metrics: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
