//! Grades Module
//!
//! Pure grade engine: marks to letter grade and grade point, weighted
//! component marks, semester GPA, cumulative GPA and performance tiers.

mod components;
mod gpa;
mod performance;
mod scale;
mod summary;


// Re-export public types
pub use components::{
    marks_from_components, round_2dp, ComponentWeights, MarkComponents, COMPONENT_WEIGHTS,
};
pub use gpa::{cumulative_gpa, semester_gpa, GpaCalculation, SubjectGrade};
pub use performance::{performance_level, PerformanceLevel};
pub use scale::{grade_from_marks, GradeBand, GradeScale, MAX_GRADE_POINT, MAX_MARKS};
pub use summary::{dashboard_cache_key, DashboardSummary};

// == Public Constants ==
/// Smallest credit load a subject may carry on a submitted form
pub const MIN_CREDIT_HOURS: i32 = 1;

/// Largest credit load a subject may carry on a submitted form
pub const MAX_CREDIT_HOURS: i32 = 6;
