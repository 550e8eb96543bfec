//! Point of no return — when recovery from the current trajectory gets hard.
//!
//! A step function over the mean of the four outcomes, then shifted earlier
//! and escalated one difficulty step for paths that accelerate decline.

use serde::{Deserialize, Serialize};

use crate::outcomes::Outcomes;
use crate::paths::LifePath;

/// Earliest year a point of no return can land on.
const EARLIEST_YEAR: u8 = 5;
/// Years a fast-decline path pulls the point of no return forward.
const ACCELERATION_YEARS: u8 = 5;

/// How hard it is to recover once the point of no return is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryDifficulty {
    Moderate,
    Hard,
    NearlyImpossible,
}

impl RecoveryDifficulty {
    /// One step harder. Moderate becomes hard, anything else nearly impossible.
    pub fn escalate(self) -> Self {
        match self {
            Self::Moderate => Self::Hard,
            Self::Hard | Self::NearlyImpossible => Self::NearlyImpossible,
        }
    }
}

/// Estimated year offset, warning and recovery difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfNoReturn {
    pub year: u8,
    pub warning: String,
    pub recovery_difficulty: RecoveryDifficulty,
}

/// Trajectory band selected by mean outcome.
struct Band {
    year: u8,
    difficulty: RecoveryDifficulty,
    warning: &'static str,
}

fn band_for(mean: f64) -> Band {
    if mean < 30.0 {
        Band {
            year: 5,
            difficulty: RecoveryDifficulty::NearlyImpossible,
            warning: "Critical trajectory detected. Immediate intervention required.",
        }
    } else if mean < 50.0 {
        Band {
            year: 10,
            difficulty: RecoveryDifficulty::Hard,
            warning: "Declining path identified. Major course correction needed.",
        }
    } else if mean < 70.0 {
        Band {
            year: 15,
            difficulty: RecoveryDifficulty::Moderate,
            warning: "Suboptimal trajectory. Adjustments recommended.",
        }
    } else {
        Band {
            year: 25,
            difficulty: RecoveryDifficulty::Moderate,
            warning: "Stable path with room for optimization.",
        }
    }
}

/// Estimate the point of no return for a run.
pub fn compute_point_of_no_return(path: LifePath, outcomes: &Outcomes) -> PointOfNoReturn {
    let band = band_for(outcomes.mean());
    let mut year = band.year;
    let mut difficulty = band.difficulty;

    if path.accelerates_decline() {
        year = year.saturating_sub(ACCELERATION_YEARS).max(EARLIEST_YEAR);
        difficulty = difficulty.escalate();
    }

    PointOfNoReturn {
        year,
        warning: band.warning.to_string(),
        recovery_difficulty: difficulty,
    }
}
