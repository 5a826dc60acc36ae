//! Request DTOs for the grade service API
//!
//! Defines the structure of incoming HTTP request bodies and the form-level
//! checks applied before anything reaches the grade engine.

use serde::Deserialize;

use crate::grades::{
    semester_gpa, GpaCalculation, MarkComponents, SubjectGrade, MAX_CREDIT_HOURS, MAX_MARKS,
    MIN_CREDIT_HOURS,
};

/// Most subjects accepted in one semester
pub const MAX_SUBJECTS_PER_SEMESTER: usize = 50;

/// Most semesters accepted in one dashboard or cumulative request
pub const MAX_SEMESTERS: usize = 20;

fn check_marks(field: &str, marks: f64) -> Option<String> {
    if !marks.is_finite() || !(0.0..=MAX_MARKS).contains(&marks) {
        return Some(format!("{} must be between 0 and {}", field, MAX_MARKS));
    }
    None
}

/// Request body for POST /grades/lookup
#[derive(Debug, Clone, Deserialize)]
pub struct MarksRequest {
    pub marks: f64,
}

impl MarksRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        check_marks("marks", self.marks)
    }
}

/// Validates the body of POST /grades/components.
pub fn validate_components(components: &MarkComponents) -> Option<String> {
    components
        .named()
        .iter()
        .find_map(|(name, marks)| check_marks(name, *marks))
}

/// One subject row of a semester form
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectInput {
    pub subject_name: String,
    pub marks: f64,
    pub credit_hours: i32,
}

impl SubjectInput {
    pub fn validate(&self) -> Option<String> {
        if self.subject_name.trim().is_empty() {
            return Some("Subject name cannot be empty".to_string());
        }
        if let Some(msg) = check_marks(&format!("marks for '{}'", self.subject_name), self.marks) {
            return Some(msg);
        }
        if !(MIN_CREDIT_HOURS..=MAX_CREDIT_HOURS).contains(&self.credit_hours) {
            return Some(format!(
                "credit hours for '{}' must be between {} and {}",
                self.subject_name, MIN_CREDIT_HOURS, MAX_CREDIT_HOURS
            ));
        }
        None
    }
}

/// Request body for POST /gpa/semester, and one semester of a dashboard
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterRequest {
    pub semester: String,
    #[serde(default)]
    pub education_level: String,
    pub subjects: Vec<SubjectInput>,
}

impl SemesterRequest {
    pub fn validate(&self) -> Option<String> {
        if self.semester.trim().is_empty() {
            return Some("Semester cannot be empty".to_string());
        }
        if self.subjects.len() > MAX_SUBJECTS_PER_SEMESTER {
            return Some(format!(
                "Semester '{}' exceeds {} subjects",
                self.semester, MAX_SUBJECTS_PER_SEMESTER
            ));
        }
        self.subjects.iter().find_map(SubjectInput::validate)
    }

    /// Runs the semester through the grade engine.
    pub fn into_calculation(self) -> GpaCalculation {
        let subjects = self
            .subjects
            .into_iter()
            .map(|s| SubjectGrade::new(s.subject_name, s.marks, s.credit_hours))
            .collect();
        semester_gpa(self.semester, self.education_level, subjects)
    }
}

/// Request body for POST /gpa/cumulative
#[derive(Debug, Clone, Deserialize)]
pub struct CumulativeRequest {
    pub semesters: Vec<GpaCalculation>,
}

impl CumulativeRequest {
    pub fn validate(&self) -> Option<String> {
        if self.semesters.len() > MAX_SEMESTERS {
            return Some(format!("At most {} semesters allowed", MAX_SEMESTERS));
        }
        self.semesters.iter().find_map(|s| {
            let finite = s.total_grade_points.is_finite() && s.gpa.is_finite();
            if !finite || s.total_grade_points < 0.0 {
                Some(format!("Semester '{}' has invalid grade points", s.semester))
            } else {
                None
            }
        })
    }
}

/// Request body for POST /performance
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceRequest {
    pub gpa: f64,
}

impl PerformanceRequest {
    pub fn validate(&self) -> Option<String> {
        if !self.gpa.is_finite() {
            return Some("gpa must be a finite number".to_string());
        }
        None
    }
}

/// Request body for PUT /dashboard/:user_id/:education_level
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardRequest {
    pub semesters: Vec<SemesterRequest>,
    /// Optional TTL in seconds (uses the cache default if not specified)
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl DashboardRequest {
    pub fn validate(&self) -> Option<String> {
        if self.semesters.len() > MAX_SEMESTERS {
            return Some(format!("At most {} semesters allowed", MAX_SEMESTERS));
        }
        self.semesters.iter().find_map(SemesterRequest::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str, marks: f64, credit_hours: i32) -> SubjectInput {
        SubjectInput {
            subject_name: name.to_string(),
            marks,
            credit_hours,
        }
    }

    #[test]
    fn test_marks_request_bounds() {
        assert!(MarksRequest { marks: 0.0 }.validate().is_none());
        assert!(MarksRequest { marks: 100.0 }.validate().is_none());
        assert!(MarksRequest { marks: -0.5 }.validate().is_some());
        assert!(MarksRequest { marks: 100.5 }.validate().is_some());
        assert!(MarksRequest { marks: f64::NAN }.validate().is_some());
    }

    #[test]
    fn test_components_validation_names_field() {
        let components = MarkComponents::new(50.0, 50.0, 120.0, 50.0);
        let msg = validate_components(&components).unwrap();
        assert!(msg.contains("midExam"));
        assert!(validate_components(&MarkComponents::default()).is_none());
    }

    #[test]
    fn test_subject_validation() {
        assert!(subject("Math", 80.0, 3).validate().is_none());
        assert!(subject("  ", 80.0, 3).validate().is_some());
        assert!(subject("Math", 80.0, 0).validate().is_some());
        assert!(subject("Math", 80.0, 7).validate().is_some());
        assert!(subject("Math", 101.0, 3).validate().is_some());
    }

    #[test]
    fn test_semester_request_deserialize() {
        let json = r#"{
            "semester": "Fall 2024",
            "educationLevel": "BS",
            "subjects": [{"subjectName": "Math", "marks": 88, "creditHours": 3}]
        }"#;
        let req: SemesterRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_none());

        let calc = req.into_calculation();
        assert_eq!(calc.education_level, "BS");
        assert_eq!(calc.gpa, 4.0);
    }

    #[test]
    fn test_semester_request_too_many_subjects() {
        let req = SemesterRequest {
            semester: "S".to_string(),
            education_level: String::new(),
            subjects: (0..=MAX_SUBJECTS_PER_SEMESTER)
                .map(|i| subject(&format!("s{}", i), 70.0, 3))
                .collect(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_dashboard_request_defaults() {
        let json = r#"{"semesters": [{"semester": "S1", "subjects": []}]}"#;
        let req: DashboardRequest = serde_json::from_str(json).unwrap();
        assert!(req.ttl.is_none());
        assert_eq!(req.semesters[0].education_level, "");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_performance_request_rejects_nan() {
        assert!(PerformanceRequest { gpa: f64::NAN }.validate().is_some());
        assert!(PerformanceRequest { gpa: 3.2 }.validate().is_none());
    }
}
