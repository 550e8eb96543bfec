//! Decision inputs — the six sliders that drive every score.
//!
//! Each dimension is an integer in \[0, 100\]. A vector is never edited in
//! place by the engine: a slider change produces a new [`DecisionInputs`]
//! via [`DecisionInputs::with`].
//!
//! ```
//! use regretsim_logic::inputs::{DecisionInputs, Dimension};
//!
//! let base = DecisionInputs::uniform(50);
//! let bolder = base.with(Dimension::RiskTaking, 90).unwrap();
//! assert_eq!(bolder.get(Dimension::RiskTaking), 90);
//! assert_eq!(base.get(Dimension::RiskTaking), 50);
//! assert!(base.with(Dimension::RiskTaking, 101).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Upper bound of every decision input.
pub const MAX_INPUT: u8 = 100;

/// One of the six decision sliders.
///
/// Serialized in camelCase, matching the field names of a serialized
/// [`DecisionInputs`]. [`Dimension::key`] is the snake_case form used by
/// `Display`, `FromStr` and the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    CareerFocus,
    MoneyDiscipline,
    HealthFitness,
    Relationships,
    LearningGrowth,
    RiskTaking,
}

impl Dimension {
    /// All dimensions in slider order.
    pub const ALL: [Dimension; 6] = [
        Dimension::CareerFocus,
        Dimension::MoneyDiscipline,
        Dimension::HealthFitness,
        Dimension::Relationships,
        Dimension::LearningGrowth,
        Dimension::RiskTaking,
    ];

    /// Snake-case key used on the wire.
    pub const fn key(self) -> &'static str {
        match self {
            Dimension::CareerFocus => "career_focus",
            Dimension::MoneyDiscipline => "money_discipline",
            Dimension::HealthFitness => "health_fitness",
            Dimension::Relationships => "relationships",
            Dimension::LearningGrowth => "learning_growth",
            Dimension::RiskTaking => "risk_taking",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Dimension::CareerFocus => "Career Focus",
            Dimension::MoneyDiscipline => "Money Discipline",
            Dimension::HealthFitness => "Health & Fitness",
            Dimension::Relationships => "Relationships",
            Dimension::LearningGrowth => "Learning & Growth",
            Dimension::RiskTaking => "Risk Taking",
        }
    }

    /// Label for the low (0) and high (100) ends of the slider.
    pub const fn poles(self) -> (&'static str, &'static str) {
        match self {
            Dimension::CareerFocus => ("Neglected", "Obsessed"),
            Dimension::MoneyDiscipline => ("Reckless", "Frugal"),
            Dimension::HealthFitness => ("Ignored", "Prioritized"),
            Dimension::Relationships => ("Isolated", "Connected"),
            Dimension::LearningGrowth => ("Stagnant", "Evolving"),
            Dimension::RiskTaking => ("Cautious", "Bold"),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.key() == s.trim())
            .ok_or_else(|| SimError::UnknownDimension(s.to_string()))
    }
}

/// The six slider values for one simulation run.
///
/// Deserializing validates: a value above 100 is rejected with
/// [`SimError::InputOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawInputs")]
pub struct DecisionInputs {
    pub career_focus: u8,
    pub money_discipline: u8,
    pub health_fitness: u8,
    pub relationships: u8,
    pub learning_growth: u8,
    pub risk_taking: u8,
}

/// Unchecked wire form of [`DecisionInputs`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInputs {
    career_focus: u8,
    money_discipline: u8,
    health_fitness: u8,
    relationships: u8,
    learning_growth: u8,
    risk_taking: u8,
}

impl TryFrom<RawInputs> for DecisionInputs {
    type Error = SimError;

    fn try_from(raw: RawInputs) -> Result<Self, Self::Error> {
        Self::new(
            raw.career_focus,
            raw.money_discipline,
            raw.health_fitness,
            raw.relationships,
            raw.learning_growth,
            raw.risk_taking,
        )
    }
}

impl Default for DecisionInputs {
    fn default() -> Self {
        Self::uniform(50)
    }
}

impl DecisionInputs {
    /// Build a validated vector, rejecting any value above 100.
    pub fn new(
        career_focus: u8,
        money_discipline: u8,
        health_fitness: u8,
        relationships: u8,
        learning_growth: u8,
        risk_taking: u8,
    ) -> Result<Self, SimError> {
        let inputs = Self {
            career_focus,
            money_discipline,
            health_fitness,
            relationships,
            learning_growth,
            risk_taking,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Every slider at the same value (clamped to 100).
    pub fn uniform(value: u8) -> Self {
        let v = value.min(MAX_INPUT);
        Self {
            career_focus: v,
            money_discipline: v,
            health_fitness: v,
            relationships: v,
            learning_growth: v,
            risk_taking: v,
        }
    }

    /// Lenient constructor: each raw value is clamped into \[0, 100\].
    ///
    /// Values are taken in [`Dimension::ALL`] order.
    pub fn clamped(values: [i64; 6]) -> Self {
        let c = |v: i64| v.clamp(0, MAX_INPUT as i64) as u8;
        Self {
            career_focus: c(values[0]),
            money_discipline: c(values[1]),
            health_fitness: c(values[2]),
            relationships: c(values[3]),
            learning_growth: c(values[4]),
            risk_taking: c(values[5]),
        }
    }

    /// Check every dimension is within \[0, 100\].
    pub fn validate(&self) -> Result<(), SimError> {
        for dim in Dimension::ALL {
            let value = self.get(dim);
            if value > MAX_INPUT {
                return Err(SimError::InputOutOfRange {
                    field: dim.key(),
                    value: value as i64,
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, dim: Dimension) -> u8 {
        match dim {
            Dimension::CareerFocus => self.career_focus,
            Dimension::MoneyDiscipline => self.money_discipline,
            Dimension::HealthFitness => self.health_fitness,
            Dimension::Relationships => self.relationships,
            Dimension::LearningGrowth => self.learning_growth,
            Dimension::RiskTaking => self.risk_taking,
        }
    }

    /// A copy with one dimension replaced. Rejects values above 100.
    pub fn with(&self, dim: Dimension, value: u8) -> Result<Self, SimError> {
        if value > MAX_INPUT {
            return Err(SimError::InputOutOfRange {
                field: dim.key(),
                value: value as i64,
            });
        }
        let mut next = *self;
        match dim {
            Dimension::CareerFocus => next.career_focus = value,
            Dimension::MoneyDiscipline => next.money_discipline = value,
            Dimension::HealthFitness => next.health_fitness = value,
            Dimension::Relationships => next.relationships = value,
            Dimension::LearningGrowth => next.learning_growth = value,
            Dimension::RiskTaking => next.risk_taking = value,
        }
        Ok(next)
    }

    /// Values in [`Dimension::ALL`] order.
    pub fn values(&self) -> [u8; 6] {
        Dimension::ALL.map(|d| self.get(d))
    }

    /// Values as floats, clamped to \[0, 100\] for callers that bypassed
    /// validation by writing the public fields directly.
    pub(crate) fn levels(&self) -> [f64; 6] {
        self.values().map(level)
    }
}

/// Clamp a raw slider value into range and widen it for arithmetic.
pub(crate) fn level(value: u8) -> f64 {
    f64::from(value.min(MAX_INPUT))
}
