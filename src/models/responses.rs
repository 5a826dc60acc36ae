//! Response DTOs for the grade service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::grades::{GradeBand, PerformanceLevel};

/// Response body for the grade lookups
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResponse {
    /// Marks the grade was derived from
    pub marks: f64,
    #[serde(flatten)]
    pub band: GradeBand,
}

impl GradeResponse {
    pub fn new(marks: f64, band: &GradeBand) -> Self {
        Self { marks, band: *band }
    }
}

/// Response body for POST /gpa/cumulative
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeResponse {
    pub cgpa: f64,
    /// Semesters that carried credit hours
    pub counted_semesters: usize,
    pub total_credit_hours: i64,
    pub performance: PerformanceLevel,
}

/// Response body for DELETE /dashboard/:user_id/:education_level
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The cache key that was removed
    pub key: String,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Current number of entries in cache
    pub size: usize,
    pub max_size: usize,
    /// Percentage of lookups that hit
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, max_size: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            size: stats.size,
            max_size,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
