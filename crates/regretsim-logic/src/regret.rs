//! Regret calculator — how much the simulated self regrets, and why.
//!
//! Regret has two sources: imbalance between the sliders (their standard
//! deviation) and weak outcomes. The path's regret multiplier scales the sum.
//! The causes are ranked by a stable descending sort over a fixed list, so
//! tied magnitudes always resolve in [`RegretCause::ALL`] order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::inputs::DecisionInputs;
use crate::outcomes::{round_score, Outcomes};
use crate::paths::LifePath;

/// Risk above this counts as reckless.
const RECKLESS_RISK: u8 = 70;
/// Risk below this counts as fearful.
const FEARFUL_RISK: u8 = 30;

/// Intensity tier for a regret score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegretIntensity {
    /// Score 0–25.
    Low,
    /// Score 26–50.
    Medium,
    /// Score 51–75.
    Heavy,
    /// Score 76–100.
    Existential,
}

impl RegretIntensity {
    pub fn from_score(score: u8) -> Self {
        if score <= 25 {
            Self::Low
        } else if score <= 50 {
            Self::Medium
        } else if score <= 75 {
            Self::Heavy
        } else {
            Self::Existential
        }
    }

    /// Human-facing label for the regret meter.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Manageable",
            Self::Medium => "Noticeable",
            Self::Heavy => "Burdensome",
            Self::Existential => "Overwhelming",
        }
    }
}

/// A candidate source of regret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegretCause {
    #[serde(rename = "Career Neglect")]
    CareerNeglect,
    #[serde(rename = "Financial Recklessness")]
    FinancialRecklessness,
    #[serde(rename = "Health Deterioration")]
    HealthDeterioration,
    #[serde(rename = "Relationship Abandonment")]
    RelationshipAbandonment,
    #[serde(rename = "Stagnation")]
    Stagnation,
    #[serde(rename = "Reckless Risk-Taking")]
    RecklessRiskTaking,
    #[serde(rename = "Fear of Risk")]
    FearOfRisk,
}

impl RegretCause {
    /// Causes in tie-break order.
    pub const ALL: [RegretCause; 7] = [
        RegretCause::CareerNeglect,
        RegretCause::FinancialRecklessness,
        RegretCause::HealthDeterioration,
        RegretCause::RelationshipAbandonment,
        RegretCause::Stagnation,
        RegretCause::RecklessRiskTaking,
        RegretCause::FearOfRisk,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RegretCause::CareerNeglect => "Career Neglect",
            RegretCause::FinancialRecklessness => "Financial Recklessness",
            RegretCause::HealthDeterioration => "Health Deterioration",
            RegretCause::RelationshipAbandonment => "Relationship Abandonment",
            RegretCause::Stagnation => "Stagnation",
            RegretCause::RecklessRiskTaking => "Reckless Risk-Taking",
            RegretCause::FearOfRisk => "Fear of Risk",
        }
    }

    /// How strongly the sliders point at this cause (0–100).
    pub fn magnitude(self, inputs: &DecisionInputs) -> u8 {
        let neglect = |v: u8| 100 - v.min(100);
        let risk = inputs.risk_taking.min(100);
        match self {
            RegretCause::CareerNeglect => neglect(inputs.career_focus),
            RegretCause::FinancialRecklessness => neglect(inputs.money_discipline),
            RegretCause::HealthDeterioration => neglect(inputs.health_fitness),
            RegretCause::RelationshipAbandonment => neglect(inputs.relationships),
            RegretCause::Stagnation => neglect(inputs.learning_growth),
            RegretCause::RecklessRiskTaking => {
                if risk > RECKLESS_RISK {
                    risk
                } else {
                    0
                }
            }
            RegretCause::FearOfRisk => {
                if risk < FEARFUL_RISK {
                    100 - risk
                } else {
                    0
                }
            }
        }
    }
}

impl fmt::Display for RegretCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every cause with its magnitude, strongest first.
///
/// The sort is stable: equal magnitudes keep [`RegretCause::ALL`] order.
pub fn rank_causes(inputs: &DecisionInputs) -> Vec<(RegretCause, u8)> {
    let mut ranked: Vec<_> = RegretCause::ALL
        .into_iter()
        .map(|c| (c, c.magnitude(inputs)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Regret score, its tier and the two strongest causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RegretWire", from = "RegretWire")]
pub struct RegretData {
    score: u8,
    top_decisions: [RegretCause; 2],
}

impl RegretData {
    /// Wrap a score (clamped to 100) with its ranked top two causes.
    pub fn new(score: u8, top_decisions: [RegretCause; 2]) -> Self {
        Self {
            score: score.min(100),
            top_decisions,
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn intensity(&self) -> RegretIntensity {
        RegretIntensity::from_score(self.score)
    }

    /// The single strongest cause.
    pub fn primary_cause(&self) -> RegretCause {
        self.top_decisions[0]
    }

    /// The two strongest causes, ties broken by [`RegretCause::ALL`] order.
    pub fn top_decisions(&self) -> [RegretCause; 2] {
        self.top_decisions
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegretWire {
    score: u8,
    #[serde(default = "default_intensity")]
    intensity: RegretIntensity,
    #[serde(default = "default_cause")]
    primary_cause: RegretCause,
    top_decisions: [RegretCause; 2],
}

fn default_intensity() -> RegretIntensity {
    RegretIntensity::Low
}

fn default_cause() -> RegretCause {
    RegretCause::CareerNeglect
}

impl From<RegretData> for RegretWire {
    fn from(r: RegretData) -> Self {
        Self {
            score: r.score,
            intensity: r.intensity(),
            primary_cause: r.primary_cause(),
            top_decisions: r.top_decisions,
        }
    }
}

impl From<RegretWire> for RegretData {
    fn from(w: RegretWire) -> Self {
        RegretData::new(w.score, w.top_decisions)
    }
}

/// Half the population standard deviation of the six sliders.
fn variance_regret(inputs: &DecisionInputs) -> f64 {
    let levels = inputs.levels();
    let mean = levels.iter().sum::<f64>() / 6.0;
    let variance = levels.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 6.0;
    variance.sqrt() * 0.5
}

/// Average shortfall of the four rounded outcomes from 100.
fn outcome_regret(outcomes: &Outcomes) -> f64 {
    outcomes
        .scores()
        .iter()
        .map(|&s| (100.0 - f64::from(s)) * 0.25)
        .sum()
}

/// Compute regret for a run. Pure and deterministic.
pub fn compute_regret(path: LifePath, inputs: &DecisionInputs, outcomes: &Outcomes) -> RegretData {
    let m = path.multipliers();
    let base = (variance_regret(inputs) + outcome_regret(outcomes) * 0.5) * m.regret;

    let ranked = rank_causes(inputs);
    RegretData::new(round_score(base), [ranked[0].0, ranked[1].0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcomes::compute_outcomes;

    #[test]
    fn test_intensity_bands() {
        assert_eq!(RegretIntensity::from_score(0), RegretIntensity::Low);
        assert_eq!(RegretIntensity::from_score(25), RegretIntensity::Low);
        assert_eq!(RegretIntensity::from_score(26), RegretIntensity::Medium);
        assert_eq!(RegretIntensity::from_score(50), RegretIntensity::Medium);
        assert_eq!(RegretIntensity::from_score(51), RegretIntensity::Heavy);
        assert_eq!(RegretIntensity::from_score(75), RegretIntensity::Heavy);
        assert_eq!(RegretIntensity::from_score(76), RegretIntensity::Existential);
        assert_eq!(RegretIntensity::from_score(100), RegretIntensity::Existential);
    }

    #[test]
    fn test_tie_order_at_midpoint() {
        let inputs = DecisionInputs::uniform(50);
        let ranked = rank_causes(&inputs);
        let order: Vec<_> = ranked.iter().map(|(c, _)| *c).collect();
        assert_eq!(&order[..5], &RegretCause::ALL[..5]);
        assert!(ranked[..5].iter().all(|(_, m)| *m == 50));

        let outcomes = compute_outcomes(LifePath::Safe, &inputs);
        let regret = compute_regret(LifePath::Safe, &inputs, &outcomes);
        assert_eq!(regret.primary_cause(), RegretCause::CareerNeglect);
        assert_eq!(
            regret.top_decisions(),
            [RegretCause::CareerNeglect, RegretCause::FinancialRecklessness]
        );
    }

    #[test]
    fn test_safe_midpoint_score() {
        // Zero variance; outcomes 55/50/55/60 → shortfall 45; 22.5 * 0.8 = 18
        let inputs = DecisionInputs::uniform(50);
        let outcomes = compute_outcomes(LifePath::Safe, &inputs);
        let regret = compute_regret(LifePath::Safe, &inputs, &outcomes);
        assert_eq!(regret.score(), 18);
        assert_eq!(regret.intensity(), RegretIntensity::Low);
    }

    #[test]
    fn test_variance_contributes() {
        // Sliders 0/100 alternating: sd = 50 → variance regret 25
        let inputs = DecisionInputs::new(0, 100, 0, 100, 0, 100).unwrap();
        assert!((variance_regret(&inputs) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_reckless_risk_only_above_threshold() {
        let calm = DecisionInputs::uniform(70);
        assert_eq!(RegretCause::RecklessRiskTaking.magnitude(&calm), 0);
        let bold = calm.with(crate::inputs::Dimension::RiskTaking, 71).unwrap();
        assert_eq!(RegretCause::RecklessRiskTaking.magnitude(&bold), 71);
    }

    #[test]
    fn test_fear_of_risk_only_below_threshold() {
        let inputs = DecisionInputs::new(90, 90, 90, 90, 90, 10).unwrap();
        let ranked = rank_causes(&inputs);
        assert_eq!(ranked[0], (RegretCause::FearOfRisk, 90));
        assert_eq!(RegretCause::FearOfRisk.magnitude(&DecisionInputs::uniform(30)), 0);
    }

    #[test]
    fn test_reckless_beats_neglect() {
        let inputs = DecisionInputs::new(80, 80, 80, 80, 80, 95).unwrap();
        let outcomes = compute_outcomes(LifePath::Risky, &inputs);
        let regret = compute_regret(LifePath::Risky, &inputs, &outcomes);
        assert_eq!(regret.primary_cause(), RegretCause::RecklessRiskTaking);
        assert_eq!(regret.top_decisions()[1], RegretCause::CareerNeglect);
    }

    #[test]
    fn test_score_bounded_for_extremes() {
        for path in LifePath::ALL {
            for v in [0u8, 100] {
                let inputs = DecisionInputs::uniform(v);
                let outcomes = compute_outcomes(path, &inputs);
                let regret = compute_regret(path, &inputs, &outcomes);
                assert!(regret.score() <= 100);
            }
        }
    }

    #[test]
    fn test_wire_shape() {
        let regret = RegretData::new(
            80,
            [RegretCause::Stagnation, RegretCause::FearOfRisk],
        );
        let json = serde_json::to_value(regret).unwrap();
        assert_eq!(json["score"], 80);
        assert_eq!(json["intensity"], "existential");
        assert_eq!(json["primaryCause"], "Stagnation");
        assert_eq!(json["topDecisions"][1], "Fear of Risk");

        let back: RegretData = serde_json::from_value(json).unwrap();
        assert_eq!(back, regret);
    }
}
