//! One full simulation run — the aggregate the UI renders.
//!
//! Chains the calculators in dependency order: outcomes feed regret, both
//! feed the point of no return and the archetype, and everything feeds the
//! narratives. Only the daily micro-regret draws from the random source.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use regretsim_logic::inputs::DecisionInputs;
//! use regretsim_logic::paths::LifePath;
//! use regretsim_logic::simulation::run_simulation;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let result = run_simulation(LifePath::Disciplined, &DecisionInputs::uniform(50), &mut rng);
//! assert_eq!(result.outcomes.financial.score(), 60);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::archetypes::{classify_archetype, Archetype};
use crate::counterfactual::Counterfactual;
use crate::error::SimError;
use crate::inputs::{DecisionInputs, Dimension};
use crate::messages::{daily_micro_regret, share_card_text, shareable_regret};
use crate::narrative::{generate_narratives, Narratives};
use crate::outcomes::{compute_outcomes, Outcomes};
use crate::paths::LifePath;
use crate::point_of_no_return::{compute_point_of_no_return, PointOfNoReturn};
use crate::regret::{compute_regret, RegretData};

/// Everything produced by one "run simulation" action.
///
/// Immutable once built; a re-run replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub path: LifePath,
    pub inputs: DecisionInputs,
    pub outcomes: Outcomes,
    pub regret: RegretData,
    pub point_of_no_return: PointOfNoReturn,
    pub narratives: Narratives,
    pub daily_micro_regret: String,
    pub archetype: Archetype,
}

/// Run the whole engine for a path and slider vector.
pub fn run_simulation(
    path: LifePath,
    inputs: &DecisionInputs,
    rng: &mut impl Rng,
) -> SimulationResult {
    let outcomes = compute_outcomes(path, inputs);
    let regret = compute_regret(path, inputs, &outcomes);
    let point_of_no_return = compute_point_of_no_return(path, &outcomes);
    let archetype = classify_archetype(path, &outcomes, &regret);
    let narratives = generate_narratives(path, inputs, &outcomes, &regret, archetype);
    let daily_micro_regret = daily_micro_regret(path, rng);

    log::debug!(
        "Simulated {} path: outcomes={:?} regret={} archetype={}",
        path,
        outcomes.scores(),
        regret.score(),
        archetype
    );

    SimulationResult {
        path,
        inputs: *inputs,
        outcomes,
        regret,
        point_of_no_return,
        narratives,
        daily_micro_regret,
        archetype,
    }
}

/// Validate raw inputs before running. Fails fast on out-of-range sliders.
pub fn try_run_simulation(
    path: LifePath,
    inputs: &DecisionInputs,
    rng: &mut impl Rng,
) -> Result<SimulationResult, SimError> {
    inputs.validate()?;
    Ok(run_simulation(path, inputs, rng))
}

impl SimulationResult {
    /// A fresh share sentence for this run.
    pub fn shareable_text(&self, rng: &mut impl Rng) -> String {
        shareable_regret(
            self.archetype,
            self.regret.score(),
            self.regret.primary_cause(),
            rng,
        )
    }

    /// Full share-card text with a fresh share sentence.
    pub fn share_card(&self, link: Option<&str>, rng: &mut impl Rng) -> String {
        let sentence = self.shareable_text(rng);
        share_card_text(
            self.path,
            self.archetype,
            self.regret.score(),
            &sentence,
            link,
        )
    }

    /// What this run would look like with one slider changed.
    pub fn alternate_reality(
        &self,
        dimension: Dimension,
        value: u8,
    ) -> Result<Counterfactual, SimError> {
        Counterfactual::compute(
            self.path,
            &self.inputs,
            &self.outcomes,
            &self.regret,
            dimension,
            value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{micro_regret_candidates, shareable_candidates};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_disciplined_midpoint() {
        let mut rng = StdRng::seed_from_u64(5);
        let r = run_simulation(LifePath::Disciplined, &DecisionInputs::uniform(50), &mut rng);
        // 50 * 1.2 / 0.9 / 1.3 / 1.1
        assert_eq!(r.outcomes.scores(), [60, 45, 65, 55]);
        // mean 56.25 → band 15 years, moderate
        assert_eq!(r.point_of_no_return.year, 15);
        // Zero variance; shortfall 43.75 * 0.5 * 0.7 = 15.3
        assert_eq!(r.regret.score(), 15);
        assert_eq!(r.archetype, Archetype::UncertainTraveler);
        assert!(micro_regret_candidates(LifePath::Disciplined).contains(&r.daily_micro_regret));
    }

    #[test]
    fn test_deterministic_apart_from_flavor() {
        let inputs = DecisionInputs::new(80, 75, 90, 85, 70, 40).unwrap();
        let a = run_simulation(LifePath::Safe, &inputs, &mut StdRng::seed_from_u64(1));
        let b = run_simulation(LifePath::Safe, &inputs, &mut StdRng::seed_from_u64(2));
        assert_eq!(a.outcomes, b.outcomes);
        assert_eq!(a.regret, b.regret);
        assert_eq!(a.point_of_no_return, b.point_of_no_return);
        assert_eq!(a.archetype, b.archetype);
        assert_eq!(a.narratives, b.narratives);
    }

    #[test]
    fn test_try_run_rejects_invalid() {
        let mut inputs = DecisionInputs::default();
        inputs.risk_taking = 150;
        let mut rng = StdRng::seed_from_u64(0);
        assert!(try_run_simulation(LifePath::Risky, &inputs, &mut rng).is_err());
    }

    #[test]
    fn test_shareable_text_uses_run_values() {
        let mut rng = StdRng::seed_from_u64(11);
        let r = run_simulation(LifePath::Lazy, &DecisionInputs::uniform(20), &mut rng);
        let candidates =
            shareable_candidates(r.archetype, r.regret.score(), r.regret.primary_cause());
        assert!(candidates.contains(&r.shareable_text(&mut rng)));
        let card = r.share_card(None, &mut rng);
        assert!(card.contains(r.archetype.label()));
        assert!(card.ends_with("Lazy Path"));
    }

    #[test]
    fn test_alternate_reality_from_result() {
        let mut rng = StdRng::seed_from_u64(3);
        let r = run_simulation(LifePath::Obsessive, &DecisionInputs::uniform(40), &mut rng);
        let cf = r.alternate_reality(Dimension::Relationships, 90).unwrap();
        assert_eq!(cf.original_value, 40);
        assert!(cf.outcomes.social.score() > r.outcomes.social.score());
        assert_eq!(cf.outcomes.financial, r.outcomes.financial);
    }

    #[test]
    fn test_result_serializes() {
        let mut rng = StdRng::seed_from_u64(8);
        let r = run_simulation(LifePath::Chaotic, &DecisionInputs::uniform(10), &mut rng);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["path"], "chaotic");
        assert!(json["pointOfNoReturn"]["recoveryDifficulty"].is_string());
        assert!(json["narratives"]["finalReflection"].is_string());
        let back: SimulationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }

    fn keys(value: &serde_json::Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_result_keys_are_camel_case_throughout() {
        let mut rng = StdRng::seed_from_u64(13);
        let r = run_simulation(LifePath::Safe, &DecisionInputs::uniform(50), &mut rng);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            keys(&json),
            [
                "archetype",
                "dailyMicroRegret",
                "inputs",
                "narratives",
                "outcomes",
                "path",
                "pointOfNoReturn",
                "regret",
            ]
        );
        assert_eq!(
            keys(&json["inputs"]),
            [
                "careerFocus",
                "healthFitness",
                "learningGrowth",
                "moneyDiscipline",
                "relationships",
                "riskTaking",
            ]
        );
        assert_eq!(
            keys(&json["outcomes"]),
            ["financial", "health", "mentalStability", "social"]
        );
        assert_eq!(
            keys(&json["regret"]),
            ["intensity", "primaryCause", "score", "topDecisions"]
        );
        assert_eq!(
            keys(&json["pointOfNoReturn"]),
            ["recoveryDifficulty", "warning", "year"]
        );
        assert_eq!(
            keys(&json["narratives"]),
            ["finalReflection", "year10", "year30", "year5"]
        );

        let cf = r.alternate_reality(Dimension::RiskTaking, 90).unwrap();
        let cf_json = serde_json::to_value(cf).unwrap();
        assert_eq!(cf_json["dimension"], "riskTaking");
        let tag = cf_json["dimension"].as_str().unwrap();
        assert_eq!(cf_json["inputs"][tag], 90);
        assert!(cf_json["regretDelta"].is_number());
        assert!(cf_json["meanOutcomeDelta"].is_number());
        assert_eq!(cf_json["originalValue"], 50);
    }
}
