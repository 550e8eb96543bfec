//! Regret archetypes — a symbolic label for the simulated trajectory.
//!
//! Each run gets exactly one archetype, chosen by an ordered rule cascade.
//! Rules are not mutually exclusive; the first one that matches wins, so a
//! run that is both thriving and a risky financial success is a Fulfilled
//! Architect, not a Calculated Gambler.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::outcomes::Outcomes;
use crate::paths::LifePath;
use crate::regret::RegretData;

/// Archetype assigned to a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Mean outcome ≥ 80 and regret ≤ 20.
    #[serde(rename = "The Fulfilled Architect")]
    FulfilledArchitect,
    /// Mean outcome ≥ 70 and regret ≤ 40.
    #[serde(rename = "The Balanced Navigator")]
    BalancedNavigator,
    /// Risky path with financial ≥ 70.
    #[serde(rename = "The Calculated Gambler")]
    CalculatedGambler,
    /// Safe path with regret ≥ 60.
    #[serde(rename = "The Comfortable Regretter")]
    ComfortableRegretter,
    /// Obsessive path with financial ≥ 80.
    #[serde(rename = "The Driven Achiever")]
    DrivenAchiever,
    /// Obsessive path with social ≤ 30.
    #[serde(rename = "The Lonely Climber")]
    LonelyClimber,
    /// Chaotic path with mean outcome ≤ 40.
    #[serde(rename = "The Wandering Soul")]
    WanderingSoul,
    /// Lazy path with regret ≥ 70.
    #[serde(rename = "The Haunted Dreamer")]
    HauntedDreamer,
    /// Disciplined path with mean outcome ≥ 60.
    #[serde(rename = "The Steady Builder")]
    SteadyBuilder,
    /// Health ≤ 30 on any path.
    #[serde(rename = "The Burned Out")]
    BurnedOut,
    /// Social ≤ 30 on any path.
    #[serde(rename = "The Isolated Achiever")]
    IsolatedAchiever,
    /// Regret ≥ 80 on any path.
    #[serde(rename = "The Heavy Heart")]
    HeavyHeart,
    /// Nothing else matched.
    #[serde(rename = "The Uncertain Traveler")]
    UncertainTraveler,
}

impl Archetype {
    /// All archetypes in rule order.
    pub const ALL: [Archetype; 13] = [
        Archetype::FulfilledArchitect,
        Archetype::BalancedNavigator,
        Archetype::CalculatedGambler,
        Archetype::ComfortableRegretter,
        Archetype::DrivenAchiever,
        Archetype::LonelyClimber,
        Archetype::WanderingSoul,
        Archetype::HauntedDreamer,
        Archetype::SteadyBuilder,
        Archetype::BurnedOut,
        Archetype::IsolatedAchiever,
        Archetype::HeavyHeart,
        Archetype::UncertainTraveler,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Archetype::FulfilledArchitect => "The Fulfilled Architect",
            Archetype::BalancedNavigator => "The Balanced Navigator",
            Archetype::CalculatedGambler => "The Calculated Gambler",
            Archetype::ComfortableRegretter => "The Comfortable Regretter",
            Archetype::DrivenAchiever => "The Driven Achiever",
            Archetype::LonelyClimber => "The Lonely Climber",
            Archetype::WanderingSoul => "The Wandering Soul",
            Archetype::HauntedDreamer => "The Haunted Dreamer",
            Archetype::SteadyBuilder => "The Steady Builder",
            Archetype::BurnedOut => "The Burned Out",
            Archetype::IsolatedAchiever => "The Isolated Achiever",
            Archetype::HeavyHeart => "The Heavy Heart",
            Archetype::UncertainTraveler => "The Uncertain Traveler",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a run. Rules are evaluated top to bottom; first match wins.
pub fn classify_archetype(path: LifePath, outcomes: &Outcomes, regret: &RegretData) -> Archetype {
    let mean = outcomes.mean();
    let regret = regret.score();
    let financial = outcomes.financial.score();
    let social = outcomes.social.score();
    let health = outcomes.health.score();

    if mean >= 80.0 && regret <= 20 {
        return Archetype::FulfilledArchitect;
    }
    if mean >= 70.0 && regret <= 40 {
        return Archetype::BalancedNavigator;
    }

    // Path-specific rules
    match path {
        LifePath::Risky if financial >= 70 => return Archetype::CalculatedGambler,
        LifePath::Safe if regret >= 60 => return Archetype::ComfortableRegretter,
        LifePath::Obsessive if financial >= 80 => return Archetype::DrivenAchiever,
        LifePath::Obsessive if social <= 30 => return Archetype::LonelyClimber,
        LifePath::Chaotic if mean <= 40.0 => return Archetype::WanderingSoul,
        LifePath::Lazy if regret >= 70 => return Archetype::HauntedDreamer,
        LifePath::Disciplined if mean >= 60.0 => return Archetype::SteadyBuilder,
        _ => {}
    }

    if health <= 30 {
        return Archetype::BurnedOut;
    }
    if social <= 30 {
        return Archetype::IsolatedAchiever;
    }
    if regret >= 80 {
        return Archetype::HeavyHeart;
    }

    Archetype::UncertainTraveler
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regret::RegretCause;

    fn regret(score: u8) -> RegretData {
        RegretData::new(
            score,
            [RegretCause::CareerNeglect, RegretCause::FinancialRecklessness],
        )
    }

    #[test]
    fn test_first_match_wins_over_gambler() {
        // Matches rule 1 and rule 3; rule 1 must win.
        let o = Outcomes::from_scores(90, 85, 80, 85);
        assert_eq!(
            classify_archetype(LifePath::Risky, &o, &regret(10)),
            Archetype::FulfilledArchitect
        );
    }

    #[test]
    fn test_balanced_navigator() {
        let o = Outcomes::from_scores(75, 70, 70, 75);
        assert_eq!(
            classify_archetype(LifePath::Safe, &o, &regret(35)),
            Archetype::BalancedNavigator
        );
    }

    #[test]
    fn test_calculated_gambler() {
        let o = Outcomes::from_scores(90, 40, 50, 40);
        assert_eq!(
            classify_archetype(LifePath::Risky, &o, &regret(50)),
            Archetype::CalculatedGambler
        );
    }

    #[test]
    fn test_comfortable_regretter() {
        let o = Outcomes::from_scores(50, 50, 50, 50);
        assert_eq!(
            classify_archetype(LifePath::Safe, &o, &regret(60)),
            Archetype::ComfortableRegretter
        );
    }

    #[test]
    fn test_driven_before_lonely() {
        let o = Outcomes::from_scores(85, 20, 50, 40);
        assert_eq!(
            classify_archetype(LifePath::Obsessive, &o, &regret(50)),
            Archetype::DrivenAchiever
        );
        let o = Outcomes::from_scores(70, 20, 50, 40);
        assert_eq!(
            classify_archetype(LifePath::Obsessive, &o, &regret(50)),
            Archetype::LonelyClimber
        );
    }

    #[test]
    fn test_wandering_soul() {
        let o = Outcomes::from_scores(30, 50, 40, 40);
        assert_eq!(
            classify_archetype(LifePath::Chaotic, &o, &regret(50)),
            Archetype::WanderingSoul
        );
    }

    #[test]
    fn test_haunted_dreamer() {
        let o = Outcomes::from_scores(40, 50, 40, 50);
        assert_eq!(
            classify_archetype(LifePath::Lazy, &o, &regret(70)),
            Archetype::HauntedDreamer
        );
    }

    #[test]
    fn test_steady_builder() {
        let o = Outcomes::from_scores(60, 60, 65, 60);
        assert_eq!(
            classify_archetype(LifePath::Disciplined, &o, &regret(45)),
            Archetype::SteadyBuilder
        );
    }

    #[test]
    fn test_general_rules_in_order() {
        // Health and social both low: burned out comes first.
        let o = Outcomes::from_scores(50, 20, 25, 50);
        assert_eq!(
            classify_archetype(LifePath::Risky, &o, &regret(85)),
            Archetype::BurnedOut
        );
        let o = Outcomes::from_scores(50, 20, 50, 50);
        assert_eq!(
            classify_archetype(LifePath::Safe, &o, &regret(50)),
            Archetype::IsolatedAchiever
        );
        let o = Outcomes::from_scores(50, 50, 50, 50);
        assert_eq!(
            classify_archetype(LifePath::Risky, &o, &regret(80)),
            Archetype::HeavyHeart
        );
    }

    #[test]
    fn test_path_rule_needs_matching_path() {
        // Financial 90 on a non-risky, non-obsessive path falls through.
        let o = Outcomes::from_scores(90, 50, 50, 50);
        assert_eq!(
            classify_archetype(LifePath::Chaotic, &o, &regret(50)),
            Archetype::UncertainTraveler
        );
    }

    #[test]
    fn test_general_rule_boundaries_are_inclusive() {
        let top = Outcomes::from_scores(80, 80, 80, 80);
        assert_eq!(
            classify_archetype(LifePath::Safe, &top, &regret(20)),
            Archetype::FulfilledArchitect
        );
        assert_eq!(
            classify_archetype(LifePath::Safe, &top, &regret(21)),
            Archetype::BalancedNavigator
        );
        // Mean 79.75 misses the first rule even with no regret.
        let just_under = Outcomes::from_scores(80, 80, 80, 79);
        assert_eq!(
            classify_archetype(LifePath::Safe, &just_under, &regret(0)),
            Archetype::BalancedNavigator
        );

        let mid = Outcomes::from_scores(70, 70, 70, 70);
        assert_eq!(
            classify_archetype(LifePath::Safe, &mid, &regret(40)),
            Archetype::BalancedNavigator
        );
        assert_eq!(
            classify_archetype(LifePath::Safe, &mid, &regret(41)),
            Archetype::UncertainTraveler
        );
        let below_mid = Outcomes::from_scores(70, 70, 70, 69);
        assert_eq!(
            classify_archetype(LifePath::Safe, &below_mid, &regret(0)),
            Archetype::UncertainTraveler
        );
    }

    #[test]
    fn test_path_rule_boundaries_are_inclusive() {
        let o = Outcomes::from_scores(50, 50, 50, 50);
        assert_eq!(
            classify_archetype(LifePath::Safe, &o, &regret(60)),
            Archetype::ComfortableRegretter
        );
        assert_eq!(
            classify_archetype(LifePath::Safe, &o, &regret(59)),
            Archetype::UncertainTraveler
        );

        let forty = Outcomes::from_scores(40, 40, 40, 40);
        assert_eq!(
            classify_archetype(LifePath::Chaotic, &forty, &regret(50)),
            Archetype::WanderingSoul
        );
        let over_forty = Outcomes::from_scores(40, 40, 40, 41);
        assert_eq!(
            classify_archetype(LifePath::Chaotic, &over_forty, &regret(50)),
            Archetype::UncertainTraveler
        );
    }

    #[test]
    fn test_all_archetypes_count() {
        assert_eq!(Archetype::ALL.len(), 13);
    }

    #[test]
    fn test_serialized_as_label() {
        for a in Archetype::ALL {
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, format!("\"{}\"", a.label()));
        }
    }
}
