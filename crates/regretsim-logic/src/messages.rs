//! Flavor text — the daily micro-regret and the shareable regret sentence.
//!
//! Both pick one of three fixed templates with the caller's random source and
//! fill its placeholders. Pass a seeded RNG to pin the selection in tests.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use regretsim_logic::messages::{daily_micro_regret, micro_regret_candidates};
//! use regretsim_logic::paths::LifePath;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let msg = daily_micro_regret(LifePath::Lazy, &mut rng);
//! assert!(micro_regret_candidates(LifePath::Lazy).contains(&msg));
//! ```

use std::ops::RangeInclusive;

use rand::Rng;

use crate::archetypes::Archetype;
use crate::paths::LifePath;
use crate::regret::RegretCause;

const PCT: &str = "{pct}";
const SCORE: &str = "{score}";
const CAUSE: &str = "{cause}";
const ARCHETYPE: &str = "{archetype}";

/// Micro-regret templates for a path. The first carries a `{pct}` slot.
pub fn micro_regret_templates(path: LifePath) -> [&'static str; 3] {
    match path {
        LifePath::Safe => [
            "Your comfort-seeking pattern today increases long-term stagnation risk by {pct}%.",
            "Another day of playing it safe. Future you wonders what could have been.",
            "Security feels good now. But at what cost to your potential?",
        ],
        LifePath::Risky => [
            "Your impulsive tendencies today elevate burnout probability by {pct}%.",
            "High risk, high reward, or high regret. Today added to the gamble.",
            "The adrenaline fades. The consequences remain.",
        ],
        LifePath::Chaotic => [
            "Your scattered focus today compounds decision fatigue by {pct}%.",
            "Chaos breeds more chaos. Today was no exception.",
            "Without direction, every path leads to the same regret.",
        ],
        LifePath::Disciplined => [
            "Your rigid routine today marginally increases isolation risk by {pct}%.",
            "Structure serves you well, until it becomes a prison.",
            "Discipline is a tool. Don't let it become your identity.",
        ],
        LifePath::Lazy => [
            "Your avoidance pattern today increases long-term regret risk by {pct}%.",
            "Rest is necessary. But this isn't rest; it's retreat.",
            "Every day of inaction is a vote for your future regrets.",
        ],
        LifePath::Obsessive => [
            "Your overwork pattern today depletes resilience reserves by {pct}%.",
            "Achievement at what cost? Your relationships silently suffer.",
            "The goal moves further away the harder you chase it.",
        ],
    }
}

/// Percentage range substituted into a path's `{pct}` slot.
pub fn micro_regret_range(path: LifePath) -> RangeInclusive<u8> {
    match path {
        LifePath::Safe => 3..=8,
        LifePath::Risky => 4..=10,
        LifePath::Chaotic => 5..=12,
        LifePath::Disciplined => 2..=5,
        LifePath::Lazy => 6..=14,
        LifePath::Obsessive => 4..=9,
    }
}

/// Today's micro-regret for a path.
pub fn daily_micro_regret(path: LifePath, rng: &mut impl Rng) -> String {
    let templates = micro_regret_templates(path);
    let template = templates[rng.gen_range(0..templates.len())];
    let pct = rng.gen_range(micro_regret_range(path));
    template.replace(PCT, &pct.to_string())
}

/// Every string [`daily_micro_regret`] can return for a path.
pub fn micro_regret_candidates(path: LifePath) -> Vec<String> {
    let mut out = Vec::new();
    for template in micro_regret_templates(path) {
        if template.contains(PCT) {
            out.extend(
                micro_regret_range(path).map(|pct| template.replace(PCT, &pct.to_string())),
            );
        } else {
            out.push(template.to_string());
        }
    }
    out
}

/// Share-sentence templates, independent of archetype.
pub const SHAREABLE_TEMPLATES: [&str; 3] = [
    "At {score}% regret, I learned that {cause} shapes more than we admit.",
    "{archetype} in me carries {score}% regret, mostly from {cause}.",
    "{score}% of my simulated future regrets stem from one thing: {cause}.",
];

fn fill_shareable(template: &str, archetype: Archetype, score: u8, cause: RegretCause) -> String {
    template
        .replace(SCORE, &score.to_string())
        .replace(CAUSE, &cause.label().to_lowercase())
        .replace(ARCHETYPE, archetype.label())
}

/// One-line regret summary for sharing.
pub fn shareable_regret(
    archetype: Archetype,
    regret_score: u8,
    primary_cause: RegretCause,
    rng: &mut impl Rng,
) -> String {
    let template = SHAREABLE_TEMPLATES[rng.gen_range(0..SHAREABLE_TEMPLATES.len())];
    fill_shareable(template, archetype, regret_score, primary_cause)
}

/// Every string [`shareable_regret`] can return for these values.
pub fn shareable_candidates(
    archetype: Archetype,
    regret_score: u8,
    primary_cause: RegretCause,
) -> Vec<String> {
    SHAREABLE_TEMPLATES
        .iter()
        .map(|t| fill_shareable(t, archetype, regret_score, primary_cause))
        .collect()
}

/// Multi-line text for the share card.
pub fn share_card_text(
    path: LifePath,
    archetype: Archetype,
    regret_score: u8,
    sentence: &str,
    link: Option<&str>,
) -> String {
    let mut text = format!(
        "Future Regret Simulation\n\n{}\n{}% Regret Score\n\n\"{}\"\n\n{} Path",
        archetype.label(),
        regret_score,
        sentence,
        path.name()
    );
    if let Some(url) = link {
        text.push_str("\n\nSimulate your future: ");
        text.push_str(url);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_micro_regret_within_candidates() {
        let mut rng = StdRng::seed_from_u64(42);
        for path in LifePath::ALL {
            let candidates = micro_regret_candidates(path);
            for _ in 0..50 {
                let msg = daily_micro_regret(path, &mut rng);
                assert!(candidates.contains(&msg), "{path}: unexpected `{msg}`");
                assert!(!msg.contains(PCT));
            }
        }
    }

    #[test]
    fn test_micro_regret_seed_is_reproducible() {
        let a = daily_micro_regret(LifePath::Chaotic, &mut StdRng::seed_from_u64(9));
        let b = daily_micro_regret(LifePath::Chaotic, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_micro_regret_reaches_every_template() {
        let mut rng = StdRng::seed_from_u64(1);
        let templates = micro_regret_templates(LifePath::Safe);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let msg = daily_micro_regret(LifePath::Safe, &mut rng);
            for (i, t) in templates.iter().enumerate() {
                let prefix = t.split(PCT).next().unwrap_or(t);
                if msg.starts_with(prefix) {
                    seen[i] = true;
                }
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_only_first_template_has_percentage() {
        for path in LifePath::ALL {
            let t = micro_regret_templates(path);
            assert!(t[0].contains(PCT));
            assert!(!t[1].contains(PCT) && !t[2].contains(PCT));
            assert!(!micro_regret_range(path).is_empty());
        }
    }

    #[test]
    fn test_shareable_within_candidates() {
        let mut rng = StdRng::seed_from_u64(3);
        let candidates =
            shareable_candidates(Archetype::HeavyHeart, 82, RegretCause::RelationshipAbandonment);
        for _ in 0..30 {
            let s = shareable_regret(
                Archetype::HeavyHeart,
                82,
                RegretCause::RelationshipAbandonment,
                &mut rng,
            );
            assert!(candidates.contains(&s));
        }
        assert!(candidates[0].contains("82% regret"));
        assert!(candidates[0].contains("relationship abandonment"));
        assert!(candidates[1].contains("The Heavy Heart"));
    }

    #[test]
    fn test_share_card_text() {
        let text = share_card_text(
            LifePath::Obsessive,
            Archetype::LonelyClimber,
            64,
            "a sentence",
            Some("https://example.test"),
        );
        assert!(text.contains("The Lonely Climber\n64% Regret Score"));
        assert!(text.contains("\"a sentence\""));
        assert!(text.contains("Obsessive Path"));
        assert!(text.ends_with("https://example.test"));

        let bare = share_card_text(LifePath::Safe, Archetype::BurnedOut, 10, "s", None);
        assert!(bare.ends_with("Safe Path"));
    }
}
