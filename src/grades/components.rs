//! Mark Components Module
//!
//! Combines assessment components into a single weighted mark.

use serde::{Deserialize, Serialize};

// == Weights ==
/// Fixed weight of each assessment component. The weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentWeights {
    pub assignment: f64,
    pub quizzes: f64,
    pub mid_exam: f64,
    pub final_exam: f64,
}

/// Weights applied by [`marks_from_components`].
pub const COMPONENT_WEIGHTS: ComponentWeights = ComponentWeights {
    assignment: 0.10,
    quizzes: 0.15,
    mid_exam: 0.25,
    final_exam: 0.50,
};

// == Mark Components ==
/// Raw component marks, each out of 100.
///
/// Every component defaults to 0 when not supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkComponents {
    pub assignment: f64,
    pub quizzes: f64,
    pub mid_exam: f64,
    pub final_exam: f64,
}

impl MarkComponents {
    /// Creates components with all four marks supplied.
    pub fn new(assignment: f64, quizzes: f64, mid_exam: f64, final_exam: f64) -> Self {
        Self {
            assignment,
            quizzes,
            mid_exam,
            final_exam,
        }
    }

    /// Iterates over `(name, mark)` pairs, useful for validation messages.
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("assignment", self.assignment),
            ("quizzes", self.quizzes),
            ("midExam", self.mid_exam),
            ("finalExam", self.final_exam),
        ]
    }
}

// == Rounding ==
/// Rounds to two decimals, halves going up: `floor(100x + 0.5) / 100`.
pub fn round_2dp(x: f64) -> f64 {
    ((100.0 * x) + 0.5).floor() / 100.0
}

// == Weighted Marks ==
/// Computes the weighted total mark from the four components.
pub fn marks_from_components(components: &MarkComponents) -> f64 {
    let w = COMPONENT_WEIGHTS;
    let total = components.assignment * w.assignment
        + components.quizzes * w.quizzes
        + components.mid_exam * w.mid_exam
        + components.final_exam * w.final_exam;
    round_2dp(total)
}
