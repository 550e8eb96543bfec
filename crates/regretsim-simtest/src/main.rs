//! RegretSim Headless Simulation Harness
//!
//! Sweeps the scoring engine over the input space and checks every
//! documented invariant. Runs entirely in-process — no network, no UI.
//!
//! Usage:
//!   cargo run -p regretsim-simtest
//!   cargo run -p regretsim-simtest -- --verbose
//!   cargo run -p regretsim-simtest -- --json

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use regretsim_logic::archetypes::{classify_archetype, Archetype};
use regretsim_logic::counterfactual::{Counterfactual, CounterfactualVerdict};
use regretsim_logic::inputs::{DecisionInputs, Dimension};
use regretsim_logic::messages::{
    daily_micro_regret, micro_regret_candidates, shareable_candidates, shareable_regret,
};
use regretsim_logic::outcomes::{compute_outcomes, Outcomes, Severity};
use regretsim_logic::paths::LifePath;
use regretsim_logic::point_of_no_return::{compute_point_of_no_return, RecoveryDifficulty};
use regretsim_logic::regret::{
    compute_regret, rank_causes, RegretCause, RegretData, RegretIntensity,
};
use regretsim_logic::simulation::{run_simulation, SimulationResult};
use serde::Serialize;

/// Slider values visited by the sweep: 0, 20, ..., 100.
const SWEEP_STEP: usize = 20;

// ── Test harness ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let json = args.iter().any(|a| a == "--json");
    if !json {
        println!("=== RegretSim Simulation Harness ===\n");
    }

    let mut results = Vec::new();

    // 1. Full input-space sweep
    results.extend(validate_sweep(verbose && !json, json));

    // 2. Known reference values
    results.extend(validate_reference_values(json));

    // 3. Point of no return bands
    results.extend(validate_point_of_no_return(json));

    // 4. Archetype cascade
    results.extend(validate_archetypes(json));

    // 5. Alternate reality
    results.extend(validate_counterfactuals(json));

    // 6. Flavor text
    results.extend(validate_flavor_text(json));

    // 7. Serialized result shape
    results.extend(validate_serialization(json));

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("failed to serialize results: {}", e);
                std::process::exit(2);
            }
        }
    } else {
        // ── Summary ──
        println!();
        for r in &results {
            let icon = if r.passed { "✓" } else { "✗" };
            if !r.passed || verbose {
                println!("  {} {}: {}", icon, r.name, r.detail);
            }
        }

        println!(
            "\n=== RESULT: {}/{} passed, {} failed ===",
            passed, total, failed
        );
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

/// Section banner, suppressed in `--json` mode so stdout stays parseable.
fn section_header(section: &str, json: bool) -> Option<String> {
    (!json).then(|| format!("--- {} ---", section))
}

fn say(section: &str, json: bool) {
    if let Some(line) = section_header(section, json) {
        println!("{}", line);
    }
}

/// Every slider vector on the sweep grid.
fn sweep_grid() -> impl Iterator<Item = DecisionInputs> {
    let steps: Vec<i64> = (0..=100).step_by(SWEEP_STEP).collect();
    let n = steps.len();
    (0..n.pow(6)).map(move |mut i| {
        let mut v = [0i64; 6];
        for slot in v.iter_mut() {
            *slot = steps[i % n];
            i /= n;
        }
        DecisionInputs::clamped(v)
    })
}

// ── 1. Sweep ────────────────────────────────────────────────────────────

fn validate_sweep(verbose: bool, json: bool) -> Vec<TestResult> {
    say("Input Space Sweep", json);
    let mut results = Vec::new();

    for path in LifePath::ALL {
        let mut runs = 0usize;
        let mut out_of_range = 0usize;
        let mut tier_mismatch = 0usize;
        let mut unstable = 0usize;
        let mut bad_causes = 0usize;
        let mut bad_year = 0usize;
        let mut archetypes: BTreeMap<&'static str, usize> = BTreeMap::new();

        for inputs in sweep_grid() {
            runs += 1;
            let outcomes = compute_outcomes(path, &inputs);
            let regret = compute_regret(path, &inputs, &outcomes);

            let scores = outcomes.scores();
            if scores.iter().any(|&s| s > 100) || regret.score() > 100 {
                out_of_range += 1;
            }
            let tiers_ok = [
                outcomes.financial,
                outcomes.social,
                outcomes.health,
                outcomes.mental_stability,
            ]
            .iter()
            .all(|o| o.severity() == Severity::from_score(o.score()))
                && regret.intensity() == RegretIntensity::from_score(regret.score());
            if !tiers_ok {
                tier_mismatch += 1;
            }

            // Pure functions: a second call must match exactly.
            let again = compute_outcomes(path, &inputs);
            if again != outcomes || compute_regret(path, &inputs, &again) != regret {
                unstable += 1;
            }

            let ranked = rank_causes(&inputs);
            let sorted = ranked.windows(2).all(|w| w[0].1 >= w[1].1);
            let [first, second] = regret.top_decisions();
            if !sorted || first != ranked[0].0 || second != ranked[1].0 || first == second {
                bad_causes += 1;
            }

            let ponr = compute_point_of_no_return(path, &outcomes);
            let allowed: &[u8] = if path.accelerates_decline() {
                &[5, 10, 20]
            } else {
                &[5, 10, 15, 25]
            };
            if !allowed.contains(&ponr.year) {
                bad_year += 1;
            }

            let archetype = classify_archetype(path, &outcomes, &regret);
            *archetypes.entry(archetype.label()).or_insert(0) += 1;
        }

        results.push(TestResult {
            name: format!("sweep_{}_in_range", path),
            passed: out_of_range == 0,
            detail: format!("{} runs, {} out of [0, 100]", runs, out_of_range),
        });
        results.push(TestResult {
            name: format!("sweep_{}_tiers_match_scores", path),
            passed: tier_mismatch == 0,
            detail: format!("{} tier mismatches", tier_mismatch),
        });
        results.push(TestResult {
            name: format!("sweep_{}_deterministic", path),
            passed: unstable == 0,
            detail: format!("{} runs differed on repeat", unstable),
        });
        results.push(TestResult {
            name: format!("sweep_{}_cause_order", path),
            passed: bad_causes == 0,
            detail: format!("{} runs with inconsistent cause ranking", bad_causes),
        });
        results.push(TestResult {
            name: format!("sweep_{}_ponr_years", path),
            passed: bad_year == 0,
            detail: format!("{} runs with an unexpected year", bad_year),
        });

        if verbose {
            println!("  {} archetype distribution:", path.name());
            for (label, count) in &archetypes {
                println!("    {:26}: {}", label, count);
            }
        }
    }

    results
}

// ── 2. Reference values ─────────────────────────────────────────────────

fn validate_reference_values(json: bool) -> Vec<TestResult> {
    say("Reference Values", json);
    let mut results = Vec::new();
    let mid = DecisionInputs::uniform(50);

    let disciplined = compute_outcomes(LifePath::Disciplined, &mid);
    results.push(TestResult {
        name: "ref_disciplined_midpoint_financial".into(),
        passed: disciplined.financial.score() == 60
            && disciplined.financial.severity() == Severity::Balanced,
        detail: format!(
            "financial={} ({:?})",
            disciplined.financial.score(),
            disciplined.financial.severity()
        ),
    });

    let safe = compute_outcomes(LifePath::Safe, &mid);
    let safe_regret = compute_regret(LifePath::Safe, &mid, &safe);
    results.push(TestResult {
        name: "ref_safe_midpoint".into(),
        passed: safe.scores() == [55, 50, 55, 60] && safe_regret.score() == 18,
        detail: format!("outcomes={:?} regret={}", safe.scores(), safe_regret.score()),
    });

    let tie_ok = LifePath::ALL.iter().all(|&p| {
        let o = compute_outcomes(p, &mid);
        compute_regret(p, &mid, &o).top_decisions()
            == [RegretCause::CareerNeglect, RegretCause::FinancialRecklessness]
    });
    results.push(TestResult {
        name: "ref_midpoint_tie_order".into(),
        passed: tie_ok,
        detail: "all-50 sliders → Career Neglect, Financial Recklessness".into(),
    });

    let bold = DecisionInputs::uniform(80)
        .with(Dimension::RiskTaking, 95)
        .unwrap_or_default();
    let o = compute_outcomes(LifePath::Risky, &bold);
    let r = compute_regret(LifePath::Risky, &bold, &o);
    results.push(TestResult {
        name: "ref_reckless_risk_primary".into(),
        passed: r.primary_cause() == RegretCause::RecklessRiskTaking,
        detail: format!("primary cause {}", r.primary_cause()),
    });

    results
}

// ── 3. Point of no return ───────────────────────────────────────────────

fn validate_point_of_no_return(json: bool) -> Vec<TestResult> {
    say("Point of No Return", json);
    let mut results = Vec::new();

    let declining = Outcomes::from_scores(45, 45, 45, 45);
    let safe = compute_point_of_no_return(LifePath::Safe, &declining);
    let chaotic = compute_point_of_no_return(LifePath::Chaotic, &declining);
    results.push(TestResult {
        name: "ponr_acceleration".into(),
        passed: safe.year == 10
            && safe.recovery_difficulty == RecoveryDifficulty::Hard
            && chaotic.year == 5
            && chaotic.recovery_difficulty == RecoveryDifficulty::NearlyImpossible,
        detail: format!(
            "mean 45: safe={}y {:?}, chaotic={}y {:?}",
            safe.year, safe.recovery_difficulty, chaotic.year, chaotic.recovery_difficulty
        ),
    });

    let floor_ok = (0..=100u8).all(|m| {
        let o = Outcomes::from_scores(m, m, m, m);
        LifePath::ALL
            .iter()
            .all(|&p| compute_point_of_no_return(p, &o).year >= 5)
    });
    results.push(TestResult {
        name: "ponr_year_floor".into(),
        passed: floor_ok,
        detail: "no path lands before year 5".into(),
    });

    results
}

// ── 4. Archetypes ───────────────────────────────────────────────────────

fn validate_archetypes(json: bool) -> Vec<TestResult> {
    say("Archetype Cascade", json);
    let mut results = Vec::new();
    let low_regret = regret_with(10);

    let thriving = Outcomes::from_scores(90, 85, 80, 85);
    let a = classify_archetype(LifePath::Risky, &thriving, &low_regret);
    results.push(TestResult {
        name: "archetype_first_match_wins".into(),
        passed: a == Archetype::FulfilledArchitect,
        detail: format!("thriving risky run → {}", a),
    });

    let bare = Outcomes::from_scores(50, 50, 50, 50);
    let a = classify_archetype(LifePath::Safe, &bare, &regret_with(30));
    results.push(TestResult {
        name: "archetype_default".into(),
        passed: a == Archetype::UncertainTraveler,
        detail: format!("unremarkable safe run → {}", a),
    });

    results
}

fn regret_with(score: u8) -> RegretData {
    RegretData::new(
        score,
        [RegretCause::CareerNeglect, RegretCause::FinancialRecklessness],
    )
}

// ── 5. Alternate reality ────────────────────────────────────────────────

fn validate_counterfactuals(json: bool) -> Vec<TestResult> {
    say("Alternate Reality", json);
    let mut results = Vec::new();
    let inputs = DecisionInputs::uniform(40);

    let mut identity_ok = true;
    let mut verdict_ok = true;
    for path in LifePath::ALL {
        let o = compute_outcomes(path, &inputs);
        let r = compute_regret(path, &inputs, &o);
        for dim in Dimension::ALL {
            match Counterfactual::compute(path, &inputs, &o, &r, dim, inputs.get(dim)) {
                Ok(cf) => identity_ok &= cf.outcomes == o && cf.regret == r,
                Err(_) => identity_ok = false,
            }
            if let Ok(cf) = Counterfactual::compute(path, &inputs, &o, &r, dim, 100) {
                verdict_ok &=
                    cf.verdict() == CounterfactualVerdict::from_regret_delta(cf.regret_delta);
            }
        }
    }
    results.push(TestResult {
        name: "counterfactual_identity".into(),
        passed: identity_ok,
        detail: "unchanged value reproduces the original run".into(),
    });
    results.push(TestResult {
        name: "counterfactual_verdicts".into(),
        passed: verdict_ok,
        detail: "verdict follows the ±10 regret threshold".into(),
    });

    let o = compute_outcomes(LifePath::Safe, &inputs);
    let r = compute_regret(LifePath::Safe, &inputs, &o);
    let rejected =
        Counterfactual::compute(LifePath::Safe, &inputs, &o, &r, Dimension::RiskTaking, 101)
            .is_err();
    results.push(TestResult {
        name: "counterfactual_rejects_out_of_range".into(),
        passed: rejected,
        detail: "value 101 rejected".into(),
    });

    results
}

// ── 6. Flavor text ──────────────────────────────────────────────────────

fn validate_flavor_text(json: bool) -> Vec<TestResult> {
    say("Flavor Text", json);
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(2024);

    for path in LifePath::ALL {
        let candidates = micro_regret_candidates(path);
        let misses = (0..200)
            .map(|_| daily_micro_regret(path, &mut rng))
            .filter(|m| !candidates.contains(m))
            .count();
        results.push(TestResult {
            name: format!("micro_regret_{}_in_set", path),
            passed: misses == 0,
            detail: format!("{} of 200 draws outside {} candidates", misses, candidates.len()),
        });
    }

    let candidates = shareable_candidates(Archetype::HeavyHeart, 82, RegretCause::Stagnation);
    let misses = (0..100)
        .map(|_| shareable_regret(Archetype::HeavyHeart, 82, RegretCause::Stagnation, &mut rng))
        .filter(|s| !candidates.contains(s))
        .count();
    results.push(TestResult {
        name: "shareable_in_set".into(),
        passed: misses == 0,
        detail: format!("{} of 100 draws outside the template set", misses),
    });

    results
}

// ── 7. Serialization ────────────────────────────────────────────────────

fn validate_serialization(json: bool) -> Vec<TestResult> {
    say("Serialized Result", json);
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(7);

    for path in LifePath::ALL {
        let result = run_simulation(path, &DecisionInputs::uniform(65), &mut rng);
        let round_trip = serde_json::to_string(&result)
            .and_then(|s| serde_json::from_str::<SimulationResult>(&s));
        let (passed, detail) = match round_trip {
            Ok(back) if back == result => (true, "round trip preserved".to_string()),
            Ok(_) => (false, "round trip changed the result".to_string()),
            Err(e) => (false, format!("serde error: {}", e)),
        };
        results.push(TestResult {
            name: format!("serde_{}_result", path),
            passed,
            detail,
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_suppresses_section_headers() {
        assert_eq!(section_header("Flavor Text", true), None);
        assert_eq!(
            section_header("Flavor Text", false).as_deref(),
            Some("--- Flavor Text ---")
        );
    }

    #[test]
    fn test_sections_pass_in_json_mode() {
        let results: Vec<TestResult> = [
            validate_point_of_no_return(true),
            validate_archetypes(true),
            validate_counterfactuals(true),
            validate_flavor_text(true),
            validate_serialization(true),
        ]
        .into_iter()
        .flatten()
        .collect();
        assert!(!results.is_empty());
        for r in &results {
            assert!(r.passed, "{}: {}", r.name, r.detail);
        }
    }
}
