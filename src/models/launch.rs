use serde::{Deserialize, Serialize};

/// Binary result of a launch, stored as `class` (0/1) in the dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// The dataset's numeric code for this outcome.
    pub fn code(&self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Failure),
            1 => Some(Self::Success),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// A single launch record.
///
/// Only the columns the dashboard reads are kept; the loader ignores the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. `CCAFS LC-40`.
    pub site: String,
    pub outcome: Outcome,
    pub payload_mass_kg: f64,
    /// Booster family, used only to color scatter points.
    pub booster_version_category: String,
}
