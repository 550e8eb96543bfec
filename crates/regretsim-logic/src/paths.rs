//! Life paths and their fixed multiplier table.
//!
//! A life path is the coarse behavioral stance picked before any slider is
//! touched. Each path scales the four outcome formulas and the regret formula
//! by a constant multiplier. The table is exhaustive over [`LifePath`], so a
//! missing entry is a compile error rather than a runtime condition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Behavioral stance selected for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifePath {
    /// Minimize risk, maximize security.
    Safe,
    /// High stakes, high potential.
    Risky,
    /// Embrace unpredictability.
    Chaotic,
    /// Structure and consistency.
    Disciplined,
    /// Path of least resistance.
    Lazy,
    /// All-consuming dedication.
    Obsessive,
}

/// Multipliers a life path applies to each formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathMultipliers {
    pub financial: f64,
    pub social: f64,
    pub health: f64,
    pub mental: f64,
    pub regret: f64,
}

impl LifePath {
    /// All life paths in selector order.
    pub const ALL: [LifePath; 6] = [
        LifePath::Safe,
        LifePath::Risky,
        LifePath::Chaotic,
        LifePath::Disciplined,
        LifePath::Lazy,
        LifePath::Obsessive,
    ];

    /// The multiplier row for this path.
    pub const fn multipliers(self) -> PathMultipliers {
        match self {
            LifePath::Safe => PathMultipliers {
                financial: 1.1,
                social: 1.0,
                health: 1.1,
                mental: 1.2,
                regret: 0.8,
            },
            LifePath::Risky => PathMultipliers {
                financial: 1.3,
                social: 0.9,
                health: 0.9,
                mental: 0.8,
                regret: 1.2,
            },
            LifePath::Chaotic => PathMultipliers {
                financial: 0.7,
                social: 1.1,
                health: 0.7,
                mental: 0.6,
                regret: 1.4,
            },
            LifePath::Disciplined => PathMultipliers {
                financial: 1.2,
                social: 0.9,
                health: 1.3,
                mental: 1.1,
                regret: 0.7,
            },
            LifePath::Lazy => PathMultipliers {
                financial: 0.6,
                social: 1.0,
                health: 0.5,
                mental: 0.9,
                regret: 1.5,
            },
            LifePath::Obsessive => PathMultipliers {
                financial: 1.4,
                social: 0.6,
                health: 0.8,
                mental: 0.5,
                regret: 1.3,
            },
        }
    }

    /// Lowercase wire tag.
    pub const fn tag(self) -> &'static str {
        match self {
            LifePath::Safe => "safe",
            LifePath::Risky => "risky",
            LifePath::Chaotic => "chaotic",
            LifePath::Disciplined => "disciplined",
            LifePath::Lazy => "lazy",
            LifePath::Obsessive => "obsessive",
        }
    }

    /// Display name for selectors and share cards.
    pub const fn name(self) -> &'static str {
        match self {
            LifePath::Safe => "Safe",
            LifePath::Risky => "Risky",
            LifePath::Chaotic => "Chaotic",
            LifePath::Disciplined => "Disciplined",
            LifePath::Lazy => "Lazy",
            LifePath::Obsessive => "Obsessive",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            LifePath::Safe => "Minimize risk, maximize security",
            LifePath::Risky => "High stakes, high potential",
            LifePath::Chaotic => "Embrace unpredictability",
            LifePath::Disciplined => "Structure and consistency",
            LifePath::Lazy => "Path of least resistance",
            LifePath::Obsessive => "All-consuming dedication",
        }
    }

    /// Adjective used when narrating the path ("your structured journey").
    pub const fn trajectory(self) -> &'static str {
        match self {
            LifePath::Safe => "comfort-seeking",
            LifePath::Risky => "high-stakes",
            LifePath::Chaotic => "unpredictable",
            LifePath::Disciplined => "structured",
            LifePath::Lazy => "path-of-least-resistance",
            LifePath::Obsessive => "all-consuming",
        }
    }

    /// Paths whose point of no return arrives sooner and is harder to escape.
    pub const fn accelerates_decline(self) -> bool {
        matches!(self, LifePath::Chaotic | LifePath::Lazy)
    }
}

impl fmt::Display for LifePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LifePath {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifePath::ALL
            .into_iter()
            .find(|p| p.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SimError::UnknownLifePath(s.to_string()))
    }
}
