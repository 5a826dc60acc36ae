//! GPA Module
//!
//! Semester GPA and credit-weighted cumulative GPA.

use serde::{Deserialize, Serialize};

use crate::grades::components::round_2dp;
use crate::grades::scale::GradeScale;

// == Subject Grade ==
/// A subject's marks together with the grade derived from them.
///
/// `grade` and `grade_point` are always the standard-scale lookup of `marks`;
/// there is no way to set them independently. Deserializing re-derives them
/// and ignores any grade present in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SubjectRecord")]
pub struct SubjectGrade {
    subject_name: String,
    marks: f64,
    credit_hours: i32,
    grade: String,
    grade_point: f64,
}

impl SubjectGrade {
    // == Constructor ==
    /// Derives the grade for `marks` on the standard scale.
    pub fn new(subject_name: impl Into<String>, marks: f64, credit_hours: i32) -> Self {
        Self::with_scale(GradeScale::standard(), subject_name, marks, credit_hours)
    }

    /// Derives the grade for `marks` on the given scale.
    pub fn with_scale(
        scale: &GradeScale,
        subject_name: impl Into<String>,
        marks: f64,
        credit_hours: i32,
    ) -> Self {
        let band = scale.grade_from_marks(marks);
        Self {
            subject_name: subject_name.into(),
            marks,
            credit_hours,
            grade: band.grade.to_string(),
            grade_point: band.grade_point,
        }
    }

    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    pub fn credit_hours(&self) -> i32 {
        self.credit_hours
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn grade_point(&self) -> f64 {
        self.grade_point
    }

    /// `grade_point * credit_hours`
    pub fn quality_points(&self) -> f64 {
        self.grade_point * f64::from(self.credit_hours)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubjectRecord {
    subject_name: String,
    marks: f64,
    credit_hours: i32,
}

impl From<SubjectRecord> for SubjectGrade {
    fn from(record: SubjectRecord) -> Self {
        Self::new(record.subject_name, record.marks, record.credit_hours)
    }
}

// == GPA Calculation ==
/// GPA figures for one semester.
///
/// Fields missing from deserialized input take their zero defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GpaCalculation {
    /// Subjects that counted towards the GPA (credit hours > 0)
    pub subjects: Vec<SubjectGrade>,
    /// Summed as `i64` so large credit values cannot overflow
    pub total_credit_hours: i64,
    /// Sum of grade point times credit hours
    pub total_grade_points: f64,
    /// Rounded to two decimals; 0 when no credit hours
    pub gpa: f64,
    pub semester: String,
    pub education_level: String,
}

/// Computes the GPA of one semester.
///
/// Subjects with non-positive credit hours are left out. With nothing left the
/// result is all zeros.
pub fn semester_gpa(
    semester: impl Into<String>,
    education_level: impl Into<String>,
    subjects: Vec<SubjectGrade>,
) -> GpaCalculation {
    let subjects: Vec<SubjectGrade> = subjects
        .into_iter()
        .filter(|s| s.credit_hours > 0)
        .collect();

    let total_credit_hours: i64 = subjects.iter().map(|s| i64::from(s.credit_hours)).sum();
    let total_grade_points: f64 = subjects.iter().map(SubjectGrade::quality_points).sum();

    let gpa = if total_credit_hours > 0 {
        round_2dp(total_grade_points / total_credit_hours as f64)
    } else {
        0.0
    };

    GpaCalculation {
        subjects,
        total_credit_hours,
        total_grade_points,
        gpa,
        semester: semester.into(),
        education_level: education_level.into(),
    }
}

/// Computes the cumulative GPA over several semesters.
///
/// Weighted by credit hours, so a heavy semester moves the result more than a
/// light one. Semesters without credit hours are ignored; with none left the
/// result is 0.
pub fn cumulative_gpa(semesters: &[GpaCalculation]) -> f64 {
    let (points, credits) = semesters
        .iter()
        .filter(|s| s.total_credit_hours > 0)
        .fold((0.0_f64, 0_i64), |(points, credits), s| {
            (
                points + s.total_grade_points,
                credits + s.total_credit_hours,
            )
        });

    if credits == 0 {
        return 0.0;
    }
    round_2dp(points / credits as f64)
}
