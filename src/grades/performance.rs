//! Performance Level Module
//!
//! Six-tier classification of a GPA.

use serde::{Serialize, Serializer};

// == Performance Level ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceLevel {
    Excellent,
    VeryGood,
    Good,
    Average,
    BelowAverage,
    Poor,
}

/// Lower GPA bound of each tier, highest first. Anything below the last bound
/// is [`PerformanceLevel::Poor`].
const THRESHOLDS: [(f64, PerformanceLevel); 5] = [
    (3.7, PerformanceLevel::Excellent),
    (3.3, PerformanceLevel::VeryGood),
    (3.0, PerformanceLevel::Good),
    (2.7, PerformanceLevel::Average),
    (2.0, PerformanceLevel::BelowAverage),
];

impl PerformanceLevel {
    /// Classifies a GPA. NaN classifies as `Poor`.
    pub fn from_gpa(gpa: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| gpa >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(PerformanceLevel::Poor)
    }

    pub fn level(&self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::VeryGood => "Very Good",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Average => "Average",
            PerformanceLevel::BelowAverage => "Below Average",
            PerformanceLevel::Poor => "Poor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "Outstanding academic performance",
            PerformanceLevel::VeryGood => "Strong academic performance",
            PerformanceLevel::Good => "Solid academic performance",
            PerformanceLevel::Average => "Satisfactory academic performance",
            PerformanceLevel::BelowAverage => "Academic performance needs improvement",
            PerformanceLevel::Poor => "Academic performance requires immediate attention",
        }
    }
}

// Serialized as `{"level": ..., "description": ...}`.
impl Serialize for PerformanceLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("PerformanceLevel", 2)?;
        state.serialize_field("level", self.level())?;
        state.serialize_field("description", self.description())?;
        state.end()
    }
}

/// Classifies a GPA into one of six tiers.
pub fn performance_level(gpa: f64) -> PerformanceLevel {
    PerformanceLevel::from_gpa(gpa)
}
