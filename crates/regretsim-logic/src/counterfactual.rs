//! Alternate reality — rerun the calculators with one slider changed.
//!
//! No new scoring happens here. The same pure outcome and regret functions
//! are called on a copy of the inputs, so the comparison can never drift
//! from the original run.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::inputs::{DecisionInputs, Dimension};
use crate::outcomes::{compute_outcomes, Outcomes};
use crate::paths::LifePath;
use crate::regret::{compute_regret, RegretData};

/// Regret swing beyond which a change counts as meaningful.
const MEANINGFUL_REGRET_DELTA: i16 = 10;

/// How the alternate timeline compares with the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterfactualVerdict {
    /// Regret drops by more than 10.
    Improves,
    /// Regret moves by 10 or less either way.
    Minimal,
    /// Regret rises by more than 10.
    Worsens,
}

impl CounterfactualVerdict {
    pub fn from_regret_delta(delta: i16) -> Self {
        if delta < -MEANINGFUL_REGRET_DELTA {
            Self::Improves
        } else if delta > MEANINGFUL_REGRET_DELTA {
            Self::Worsens
        } else {
            Self::Minimal
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Improves => "This change significantly improves your trajectory.",
            Self::Minimal => "This change has minimal impact on your future.",
            Self::Worsens => "This change worsens your projected outcomes.",
        }
    }
}

/// A side-by-side comparison of the original and alternate timelines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterfactual {
    pub dimension: Dimension,
    pub original_value: u8,
    pub alternate_value: u8,
    pub inputs: DecisionInputs,
    pub outcomes: Outcomes,
    pub regret: RegretData,
    /// Alternate regret minus original regret.
    pub regret_delta: i16,
    /// Alternate mean outcome minus original mean outcome.
    pub mean_outcome_delta: f64,
}

impl Counterfactual {
    /// Replace `dimension` with `value` and recompute.
    ///
    /// `original_outcomes` and `original_regret` must come from `inputs` on
    /// `path`; they are only used for the deltas.
    pub fn compute(
        path: LifePath,
        inputs: &DecisionInputs,
        original_outcomes: &Outcomes,
        original_regret: &RegretData,
        dimension: Dimension,
        value: u8,
    ) -> Result<Self, SimError> {
        let alternate = inputs.with(dimension, value)?;
        let outcomes = compute_outcomes(path, &alternate);
        let regret = compute_regret(path, &alternate, &outcomes);

        Ok(Self {
            dimension,
            original_value: inputs.get(dimension),
            alternate_value: value,
            inputs: alternate,
            outcomes,
            regret,
            regret_delta: i16::from(regret.score()) - i16::from(original_regret.score()),
            mean_outcome_delta: outcomes.mean() - original_outcomes.mean(),
        })
    }

    pub fn verdict(&self) -> CounterfactualVerdict {
        CounterfactualVerdict::from_regret_delta(self.regret_delta)
    }
}
