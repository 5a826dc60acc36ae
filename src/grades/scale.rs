//! Grade Scale Module
//!
//! Ordered, immutable table of grade bands mapping marks to letter grades.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::GradeError;

// == Grade Band ==
/// One row of the grade table.
///
/// A band covers `min_marks <= marks < max_marks`. The top band of a scale is
/// closed at 100 so that full marks land in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeBand {
    /// Letter grade, e.g. "A-"
    pub grade: &'static str,
    /// Inclusive lower bound
    pub min_marks: f64,
    /// Exclusive upper bound (inclusive for the top band)
    pub max_marks: f64,
    /// Grade point on a 4.0 scale
    pub grade_point: f64,
    /// Short human-readable label
    pub description: &'static str,
}

impl GradeBand {
    const fn new(
        grade: &'static str,
        min_marks: f64,
        max_marks: f64,
        grade_point: f64,
        description: &'static str,
    ) -> Self {
        Self {
            grade,
            min_marks,
            max_marks,
            grade_point,
            description,
        }
    }

    /// Returns true if `marks` falls inside this band.
    fn contains(&self, marks: f64, is_top: bool) -> bool {
        marks >= self.min_marks
            && (marks < self.max_marks || (is_top && marks == self.max_marks))
    }
}

// == Constants ==
/// Highest achievable mark.
pub const MAX_MARKS: f64 = 100.0;

/// Highest achievable grade point.
pub const MAX_GRADE_POINT: f64 = 4.0;

static STANDARD_BANDS: [GradeBand; 9] = [
    GradeBand::new("A+", 90.0, 100.0, 4.0, "Outstanding"),
    GradeBand::new("A", 85.0, 90.0, 4.0, "Excellent"),
    GradeBand::new("A-", 80.0, 85.0, 3.7, "Very Good"),
    GradeBand::new("B+", 75.0, 80.0, 3.3, "Good"),
    GradeBand::new("B", 70.0, 75.0, 3.0, "Above Average"),
    GradeBand::new("B-", 65.0, 70.0, 2.7, "Average"),
    GradeBand::new("C+", 60.0, 65.0, 2.3, "Satisfactory"),
    GradeBand::new("C", 50.0, 60.0, 2.0, "Pass"),
    GradeBand::new("F", 0.0, 50.0, 0.0, "Fail"),
];

// Built without `GradeScale::new`; `test_standard_scale_is_valid` checks it.
static STANDARD_SCALE: GradeScale = GradeScale {
    bands: &STANDARD_BANDS,
};

// == Grade Scale ==
/// Validated grade table, sorted descending by `min_marks`.
#[derive(Debug, Clone, Copy)]
pub struct GradeScale {
    bands: &'static [GradeBand],
}

impl GradeScale {
    // == Constructor ==
    /// Builds a scale after checking that the bands are sorted descending,
    /// contiguous, exhaustive over `[0, 100]`, and carry non-increasing grade
    /// points within `[0, 4]`.
    pub fn new(bands: &'static [GradeBand]) -> Result<Self, GradeError> {
        let (first, last) = match (bands.first(), bands.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(GradeError::InvalidScale("scale has no bands".to_string())),
        };

        if first.max_marks != MAX_MARKS {
            return Err(GradeError::InvalidScale(format!(
                "top band '{}' must end at {}",
                first.grade, MAX_MARKS
            )));
        }
        if last.min_marks != 0.0 {
            return Err(GradeError::InvalidScale(format!(
                "bottom band '{}' must start at 0",
                last.grade
            )));
        }

        for band in bands {
            if band.max_marks.partial_cmp(&band.min_marks) != Some(Ordering::Greater) {
                return Err(GradeError::InvalidScale(format!(
                    "band '{}' has an empty range",
                    band.grade
                )));
            }
            if !(0.0..=MAX_GRADE_POINT).contains(&band.grade_point) {
                return Err(GradeError::InvalidScale(format!(
                    "band '{}' grade point {} outside 0..=4",
                    band.grade, band.grade_point
                )));
            }
        }

        for pair in bands.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            if lower.max_marks != upper.min_marks {
                return Err(GradeError::InvalidScale(format!(
                    "gap or overlap between '{}' and '{}'",
                    upper.grade, lower.grade
                )));
            }
            if lower.grade_point > upper.grade_point {
                return Err(GradeError::InvalidScale(format!(
                    "grade point rises from '{}' to '{}'",
                    upper.grade, lower.grade
                )));
            }
        }

        Ok(Self { bands })
    }

    /// Returns the standard nine-band scale.
    pub fn standard() -> &'static GradeScale {
        &STANDARD_SCALE
    }

    /// Returns all bands, highest first.
    pub fn bands(&self) -> &[GradeBand] {
        self.bands
    }

    /// Returns the lowest band, used as the fallback for unmatched marks.
    pub fn lowest(&self) -> &GradeBand {
        // A validated scale always holds at least one band.
        &self.bands[self.bands.len() - 1]
    }

    // == Lookup ==
    /// Finds the band containing `marks`.
    ///
    /// Marks outside `[0, 100]` and NaN fall back to the lowest band.
    pub fn grade_from_marks(&self, marks: f64) -> &GradeBand {
        self.find(marks).unwrap_or_else(|| self.lowest())
    }

    /// Like [`grade_from_marks`](Self::grade_from_marks), but rejects marks
    /// that no band covers instead of falling back.
    pub fn grade_from_marks_strict(&self, marks: f64) -> Result<&GradeBand, GradeError> {
        self.find(marks).ok_or(GradeError::MarksOutOfRange(marks))
    }

    fn find(&self, marks: f64) -> Option<&GradeBand> {
        self.bands
            .iter()
            .enumerate()
            .find(|(i, band)| band.contains(marks, *i == 0))
            .map(|(_, band)| band)
    }
}

/// Looks up `marks` on the standard scale, falling back to "F".
pub fn grade_from_marks(marks: f64) -> &'static GradeBand {
    GradeScale::standard().grade_from_marks(marks)
}
