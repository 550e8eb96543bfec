//! Outcome calculator — four life outcomes from the decision sliders.
//!
//! Each outcome is a weighted sum of specific sliders (weights sum to 1.0),
//! scaled by the life path's multiplier, clamped to \[0, 100\] and rounded.
//! The severity tier is always derived from the stored integer score, never
//! stored separately.

use serde::{Deserialize, Serialize};

use crate::inputs::{level, DecisionInputs};
use crate::paths::LifePath;

/// Severity tier for an outcome score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Score 0–20.
    Critical,
    /// Score 21–40.
    Unstable,
    /// Score 41–60.
    Balanced,
    /// Score 61–80.
    Strong,
    /// Score 81–100.
    Elite,
}

impl Severity {
    pub fn from_score(score: u8) -> Self {
        if score <= 20 {
            Self::Critical
        } else if score <= 40 {
            Self::Unstable
        } else if score <= 60 {
            Self::Balanced
        } else if score <= 80 {
            Self::Strong
        } else {
            Self::Elite
        }
    }
}

/// Clamp a raw formula value to \[0, 100\] and round to the nearest integer.
pub fn round_score(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

/// An integer outcome score in \[0, 100\] with its derived severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "OutcomeScoreWire", from = "OutcomeScoreWire")]
pub struct OutcomeScore {
    score: u8,
}

impl OutcomeScore {
    /// Wrap an integer score, clamping it to 100.
    pub fn new(score: u8) -> Self {
        Self {
            score: score.min(100),
        }
    }

    /// Clamp, round and wrap a raw formula value.
    pub fn from_raw(raw: f64) -> Self {
        Self::new(round_score(raw))
    }

    pub fn score(self) -> u8 {
        self.score
    }

    pub fn severity(self) -> Severity {
        Severity::from_score(self.score)
    }
}

/// Serialized form: the score together with its tier. The tier is ignored on
/// the way back in and recomputed from the score.
#[derive(Serialize, Deserialize)]
struct OutcomeScoreWire {
    score: u8,
    #[serde(default = "default_severity")]
    severity: Severity,
}

fn default_severity() -> Severity {
    Severity::Critical
}

impl From<OutcomeScore> for OutcomeScoreWire {
    fn from(o: OutcomeScore) -> Self {
        Self {
            score: o.score,
            severity: o.severity(),
        }
    }
}

impl From<OutcomeScoreWire> for OutcomeScore {
    fn from(w: OutcomeScoreWire) -> Self {
        OutcomeScore::new(w.score)
    }
}

/// The four independent outcomes of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcomes {
    pub financial: OutcomeScore,
    pub social: OutcomeScore,
    pub health: OutcomeScore,
    pub mental_stability: OutcomeScore,
}

impl Outcomes {
    /// Build from four integer scores (each clamped to 100).
    pub fn from_scores(financial: u8, social: u8, health: u8, mental_stability: u8) -> Self {
        Self {
            financial: OutcomeScore::new(financial),
            social: OutcomeScore::new(social),
            health: OutcomeScore::new(health),
            mental_stability: OutcomeScore::new(mental_stability),
        }
    }

    /// Scores in (financial, social, health, mental stability) order.
    pub fn scores(&self) -> [u8; 4] {
        [
            self.financial.score(),
            self.social.score(),
            self.health.score(),
            self.mental_stability.score(),
        ]
    }

    /// Arithmetic mean of the four rounded scores.
    pub fn mean(&self) -> f64 {
        self.scores().iter().map(|&s| f64::from(s)).sum::<f64>() / 4.0
    }
}

/// Compute the four outcomes for a path and slider vector.
///
/// Pure and deterministic. Inputs are clamped to \[0, 100\] before use.
pub fn compute_outcomes(path: LifePath, inputs: &DecisionInputs) -> Outcomes {
    let m = path.multipliers();

    let career = level(inputs.career_focus);
    let money = level(inputs.money_discipline);
    let fitness = level(inputs.health_fitness);
    let relationships = level(inputs.relationships);
    let learning = level(inputs.learning_growth);
    let risk = level(inputs.risk_taking);
    let caution = 100.0 - risk;

    let financial = career * 0.4 + money * 0.4 + risk * 0.2;
    let social = relationships * 0.5 + career * 0.2 + caution * 0.3;
    let health = fitness * 0.6 + money * 0.2 + caution * 0.2;
    let mental = relationships * 0.3 + learning * 0.3 + fitness * 0.2 + caution * 0.2;

    Outcomes {
        financial: OutcomeScore::from_raw(financial * m.financial),
        social: OutcomeScore::from_raw(social * m.social),
        health: OutcomeScore::from_raw(health * m.health),
        mental_stability: OutcomeScore::from_raw(mental * m.mental),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Dimension;

    #[test]
    fn test_severity_bands() {
        assert_eq!(Severity::from_score(0), Severity::Critical);
        assert_eq!(Severity::from_score(20), Severity::Critical);
        assert_eq!(Severity::from_score(21), Severity::Unstable);
        assert_eq!(Severity::from_score(40), Severity::Unstable);
        assert_eq!(Severity::from_score(41), Severity::Balanced);
        assert_eq!(Severity::from_score(60), Severity::Balanced);
        assert_eq!(Severity::from_score(61), Severity::Strong);
        assert_eq!(Severity::from_score(80), Severity::Strong);
        assert_eq!(Severity::from_score(81), Severity::Elite);
        assert_eq!(Severity::from_score(100), Severity::Elite);
    }

    #[test]
    fn test_round_score_clamps_before_rounding() {
        assert_eq!(round_score(-3.2), 0);
        assert_eq!(round_score(100.4), 100);
        assert_eq!(round_score(142.0), 100);
        assert_eq!(round_score(59.5), 60);
        assert_eq!(round_score(59.49), 59);
    }

    #[test]
    fn test_disciplined_midpoint_financial() {
        // 0.4*50 + 0.4*50 + 0.2*50 = 50, * 1.2 = 60
        let o = compute_outcomes(LifePath::Disciplined, &DecisionInputs::uniform(50));
        assert_eq!(o.financial.score(), 60);
        assert_eq!(o.financial.severity(), Severity::Balanced);
    }

    #[test]
    fn test_safe_midpoint_all_outcomes() {
        // Every base is 50 at the midpoint: 55, 50, 55, 60
        let o = compute_outcomes(LifePath::Safe, &DecisionInputs::uniform(50));
        assert_eq!(o.scores(), [55, 50, 55, 60]);
    }

    #[test]
    fn test_obsessive_max_inputs_clamp_financial() {
        // 100 * 1.4 = 140 → clamped to 100
        let o = compute_outcomes(LifePath::Obsessive, &DecisionInputs::uniform(100));
        assert_eq!(o.financial.score(), 100);
        assert_eq!(o.financial.severity(), Severity::Elite);
    }

    #[test]
    fn test_zero_inputs() {
        let o = compute_outcomes(LifePath::Safe, &DecisionInputs::uniform(0));
        // Only the caution terms contribute: 30/20/20 before multipliers,
        // then safe's 1.0/1.1/1.2 gives social 30, health 22, mental 24
        assert_eq!(o.financial.score(), 0);
        assert_eq!(o.social.score(), 30);
        assert_eq!(o.health.score(), 22);
        assert_eq!(o.mental_stability.score(), 24);
    }

    #[test]
    fn test_unvalidated_inputs_are_clamped() {
        let mut wild = DecisionInputs::uniform(100);
        wild.career_focus = 255;
        let o = compute_outcomes(LifePath::Safe, &wild);
        let tame = compute_outcomes(LifePath::Safe, &DecisionInputs::uniform(100));
        assert_eq!(o, tame);
    }

    #[test]
    fn test_idempotent() {
        let inputs = DecisionInputs::new(12, 88, 47, 63, 5, 91).unwrap();
        for path in LifePath::ALL {
            assert_eq!(
                compute_outcomes(path, &inputs),
                compute_outcomes(path, &inputs)
            );
        }
    }

    #[test]
    fn test_learning_does_not_touch_financial() {
        let base = DecisionInputs::new(30, 70, 40, 60, 20, 55).unwrap();
        let before = compute_outcomes(LifePath::Risky, &base);
        let after = compute_outcomes(
            LifePath::Risky,
            &base.with(Dimension::LearningGrowth, 95).unwrap(),
        );
        assert_eq!(before.financial, after.financial);
        assert_eq!(before.social, after.social);
        assert_eq!(before.health, after.health);
        assert!(after.mental_stability.score() > before.mental_stability.score());
    }

    #[test]
    fn test_mean() {
        let o = Outcomes::from_scores(10, 20, 30, 40);
        assert!((o.mean() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialized_tier_matches_score() {
        let json = serde_json::to_value(OutcomeScore::new(21)).unwrap();
        assert_eq!(json["score"], 21);
        assert_eq!(json["severity"], "unstable");

        let stale: OutcomeScore =
            serde_json::from_str(r#"{"score": 90, "severity": "critical"}"#).unwrap();
        assert_eq!(stale.severity(), Severity::Elite);
    }
}
