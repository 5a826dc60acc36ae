//! Dashboard Summary Module
//!
//! Aggregates per-semester GPA calculations into the figures shown on a
//! student's dashboard. Summaries are what the dashboard cache memoizes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::grades::components::round_2dp;
use crate::grades::gpa::{cumulative_gpa, GpaCalculation};
use crate::grades::performance::PerformanceLevel;

/// Builds the cache key for a user's dashboard at one education level.
///
/// `%` and `:` inside either part are percent-escaped, so distinct
/// `(user, level)` pairs never share a key.
pub fn dashboard_cache_key(user_id: &str, education_level: &str) -> String {
    format!(
        "dashboard:{}:{}",
        escape_key_part(user_id),
        escape_key_part(education_level)
    )
}

fn escape_key_part(part: &str) -> String {
    part.replace('%', "%25").replace(':', "%3A")
}

// == Dashboard Summary ==
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user_id: String,
    pub education_level: String,
    pub semesters: Vec<GpaCalculation>,
    /// Credit-weighted across all semesters
    pub cgpa: f64,
    pub total_credit_hours: i64,
    pub total_subjects: usize,
    /// Mean of subject marks, 0 with no subjects
    pub average_marks: f64,
    pub performance: PerformanceLevel,
    /// Semester with the highest GPA among those carrying credit hours
    pub best_semester: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardSummary {
    pub fn build(
        user_id: impl Into<String>,
        education_level: impl Into<String>,
        semesters: Vec<GpaCalculation>,
    ) -> Self {
        let cgpa = cumulative_gpa(&semesters);
        let total_credit_hours = semesters.iter().map(|s| s.total_credit_hours).sum();
        let total_subjects = semesters.iter().map(|s| s.subjects.len()).sum();

        let marks_sum: f64 = semesters
            .iter()
            .flat_map(|s| s.subjects.iter())
            .map(|subject| subject.marks())
            .sum();
        let average_marks = if total_subjects > 0 {
            round_2dp(marks_sum / total_subjects as f64)
        } else {
            0.0
        };

        // Ties keep the earliest semester.
        let best_semester = semesters
            .iter()
            .filter(|s| s.total_credit_hours > 0)
            .fold(None::<&GpaCalculation>, |best, s| match best {
                Some(b) if b.gpa >= s.gpa => Some(b),
                _ => Some(s),
            })
            .map(|s| s.semester.clone());

        Self {
            user_id: user_id.into(),
            education_level: education_level.into(),
            semesters,
            cgpa,
            total_credit_hours,
            total_subjects,
            average_marks,
            performance: PerformanceLevel::from_gpa(cgpa),
            best_semester,
            generated_at: Utc::now(),
        }
    }

    /// Key under which this summary is cached.
    pub fn cache_key(&self) -> String {
        dashboard_cache_key(&self.user_id, &self.education_level)
    }
}
