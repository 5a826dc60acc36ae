//! API Handlers
//!
//! HTTP request handlers for each grade service endpoint.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::grades::{
    cumulative_gpa, dashboard_cache_key, grade_from_marks, marks_from_components,
    performance_level, DashboardSummary, GpaCalculation, GradeScale, MarkComponents,
    PerformanceLevel,
};
use crate::models::{
    validate_components, CumulativeRequest, CumulativeResponse, DashboardRequest,
    DeleteResponse, GradeResponse, HealthResponse, MarksRequest, PerformanceRequest,
    SemesterRequest, StatsResponse,
};

/// Cache of computed dashboard summaries, keyed by `dashboard:{user}:{level}`.
pub type DashboardCache = TtlCache<DashboardSummary>;

/// Application state shared across all handlers.
///
/// Built once at startup and handed to the router; the cleanup task holds a
/// second reference to the same cache.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RwLock<DashboardCache>>,
}

impl AppState {
    pub fn new(cache: DashboardCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(TtlCache::new(config.max_entries, config.default_ttl()))
    }
}

fn reject_invalid(error: Option<String>) -> Result<()> {
    match error {
        Some(msg) => Err(ApiError::InvalidRequest(msg)),
        None => Ok(()),
    }
}

/// Handler for POST /grades/lookup
pub async fn lookup_grade_handler(Json(req): Json<MarksRequest>) -> Result<Json<GradeResponse>> {
    reject_invalid(req.validate())?;

    let band = GradeScale::standard().grade_from_marks_strict(req.marks)?;
    Ok(Json(GradeResponse::new(req.marks, band)))
}

/// Handler for POST /grades/components
pub async fn components_handler(
    Json(components): Json<MarkComponents>,
) -> Result<Json<GradeResponse>> {
    reject_invalid(validate_components(&components))?;

    let marks = marks_from_components(&components);
    Ok(Json(GradeResponse::new(marks, grade_from_marks(marks))))
}

/// Handler for POST /gpa/semester
pub async fn semester_handler(Json(req): Json<SemesterRequest>) -> Result<Json<GpaCalculation>> {
    reject_invalid(req.validate())?;

    Ok(Json(req.into_calculation()))
}

/// Handler for POST /gpa/cumulative
pub async fn cumulative_handler(
    Json(req): Json<CumulativeRequest>,
) -> Result<Json<CumulativeResponse>> {
    reject_invalid(req.validate())?;

    let cgpa = cumulative_gpa(&req.semesters);
    let counted: Vec<&GpaCalculation> = req
        .semesters
        .iter()
        .filter(|s| s.total_credit_hours > 0)
        .collect();

    Ok(Json(CumulativeResponse {
        cgpa,
        counted_semesters: counted.len(),
        total_credit_hours: counted.iter().map(|s| s.total_credit_hours).sum(),
        performance: performance_level(cgpa),
    }))
}

/// Handler for POST /performance
pub async fn performance_handler(
    Json(req): Json<PerformanceRequest>,
) -> Result<Json<PerformanceLevel>> {
    reject_invalid(req.validate())?;

    Ok(Json(performance_level(req.gpa)))
}

/// Handler for PUT /dashboard/:user_id/:education_level
///
/// Computes the summary from the submitted semesters and caches it.
pub async fn put_dashboard_handler(
    State(state): State<AppState>,
    Path((user_id, education_level)): Path<(String, String)>,
    Json(req): Json<DashboardRequest>,
) -> Result<Json<DashboardSummary>> {
    reject_invalid(req.validate())?;

    let semesters: Vec<GpaCalculation> = req
        .semesters
        .into_iter()
        .map(|mut semester| {
            semester.education_level = education_level.clone();
            semester.into_calculation()
        })
        .collect();
    let summary = DashboardSummary::build(user_id, education_level, semesters);
    let key = summary.cache_key();

    let mut cache = state.cache.write().await;
    cache.set(key.clone(), summary.clone(), req.ttl.map(Duration::from_secs));
    info!(key = %key, cgpa = summary.cgpa, "dashboard summary cached");

    Ok(Json(summary))
}

/// Handler for GET /dashboard/:user_id/:education_level
pub async fn get_dashboard_handler(
    State(state): State<AppState>,
    Path((user_id, education_level)): Path<(String, String)>,
) -> Result<Json<DashboardSummary>> {
    let key = dashboard_cache_key(&user_id, &education_level);

    // Write lock: a lookup updates counters and may drop an expired entry
    let mut cache = state.cache.write().await;
    match cache.get(&key) {
        Some(summary) => {
            debug!(key = %key, "dashboard cache hit");
            Ok(Json(summary))
        }
        None => {
            debug!(key = %key, "dashboard cache miss");
            Err(ApiError::NotFound(key))
        }
    }
}

/// Handler for DELETE /dashboard/:user_id/:education_level
pub async fn delete_dashboard_handler(
    State(state): State<AppState>,
    Path((user_id, education_level)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    let key = dashboard_cache_key(&user_id, &education_level);

    let mut cache = state.cache.write().await;
    if cache.delete(&key) {
        Ok(Json(DeleteResponse::new(key)))
    } else {
        Err(ApiError::NotFound(key))
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats(), cache.max_size()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectInput;

    fn test_state() -> AppState {
        AppState::new(TtlCache::new(100, Duration::from_secs(300)))
    }

    fn dashboard_request() -> DashboardRequest {
        DashboardRequest {
            semesters: vec![SemesterRequest {
                semester: "Fall 2024".to_string(),
                education_level: String::new(),
                subjects: vec![
                    SubjectInput {
                        subject_name: "Compilers".to_string(),
                        marks: 88.0,
                        credit_hours: 3,
                    },
                    SubjectInput {
                        subject_name: "Ethics".to_string(),
                        marks: 72.0,
                        credit_hours: 1,
                    },
                ],
            }],
            ttl: None,
        }
    }

    #[tokio::test]
    async fn test_lookup_grade_handler() {
        let response = lookup_grade_handler(Json(MarksRequest { marks: 91.0 }))
            .await
            .unwrap();
        assert_eq!(response.band.grade, "A+");
    }

    #[tokio::test]
    async fn test_lookup_grade_rejects_out_of_range() {
        let result = lookup_grade_handler(Json(MarksRequest { marks: 140.0 })).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_components_handler() {
        let response = components_handler(Json(MarkComponents::new(80.0, 70.0, 60.0, 50.0)))
            .await
            .unwrap();
        assert_eq!(response.marks, 58.5);
        assert_eq!(response.band.grade, "C");
    }

    #[tokio::test]
    async fn test_cumulative_handler_counts_credit_semesters() {
        let semesters = vec![
            GpaCalculation {
                total_credit_hours: 3,
                total_grade_points: 12.0,
                gpa: 4.0,
                ..Default::default()
            },
            GpaCalculation {
                total_credit_hours: 9,
                total_grade_points: 18.0,
                gpa: 2.0,
                ..Default::default()
            },
            GpaCalculation::default(),
        ];
        let response = cumulative_handler(Json(CumulativeRequest { semesters }))
            .await
            .unwrap();
        assert_eq!(response.cgpa, 2.5);
        assert_eq!(response.counted_semesters, 2);
        assert_eq!(response.total_credit_hours, 12);
        assert_eq!(response.performance, PerformanceLevel::BelowAverage);
    }

    #[tokio::test]
    async fn test_dashboard_put_then_get() {
        let state = test_state();
        let path = || Path(("u1".to_string(), "BS".to_string()));

        let put = put_dashboard_handler(State(state.clone()), path(), Json(dashboard_request()))
            .await
            .unwrap();
        assert_eq!(put.cgpa, 3.75);
        assert_eq!(put.semesters[0].education_level, "BS");

        let got = get_dashboard_handler(State(state.clone()), path())
            .await
            .unwrap();
        assert_eq!(got.0, put.0);

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.size, 1);
    }

    #[tokio::test]
    async fn test_dashboard_get_missing() {
        let result = get_dashboard_handler(
            State(test_state()),
            Path(("nobody".to_string(), "BS".to_string())),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_dashboard_delete() {
        let state = test_state();
        let path = || Path(("u1".to_string(), "MS".to_string()));

        put_dashboard_handler(State(state.clone()), path(), Json(dashboard_request()))
            .await
            .unwrap();

        let deleted = delete_dashboard_handler(State(state.clone()), path())
            .await
            .unwrap();
        assert_eq!(deleted.key, "dashboard:u1:MS");

        let again = delete_dashboard_handler(State(state), path()).await;
        assert!(matches!(again, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_stats_handler_empty() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.hit_rate, 0.0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
