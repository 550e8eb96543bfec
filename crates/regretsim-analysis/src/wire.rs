//! Request and response bodies of the behavioral-analysis service.
//!
//! The service proxies a language model, so response content is
//! non-deterministic; only its shape is fixed. Model replies sometimes wrap
//! the JSON in prose, which [`parse_model_output`] strips.

use serde::{Deserialize, Serialize};

use regretsim_logic::inputs::DecisionInputs;
use regretsim_logic::outcomes::Outcomes;
use regretsim_logic::paths::LifePath;
use regretsim_logic::regret::{RegretCause, RegretData};
use regretsim_logic::simulation::SimulationResult;
use regretsim_logic::timeline::TimelineHorizon;

/// The four outcome integers, keyed as the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomePayload {
    pub financial: u8,
    pub social: u8,
    pub health: u8,
    pub mental_stability: u8,
}

impl From<&Outcomes> for OutcomePayload {
    fn from(o: &Outcomes) -> Self {
        let [financial, social, health, mental_stability] = o.scores();
        Self {
            financial,
            social,
            health,
            mental_stability,
        }
    }
}

/// The six slider values under the service's snake_case keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderPayload {
    pub career_focus: u8,
    pub money_discipline: u8,
    pub health_fitness: u8,
    pub relationships: u8,
    pub learning_growth: u8,
    pub risk_taking: u8,
}

impl From<&DecisionInputs> for SliderPayload {
    fn from(i: &DecisionInputs) -> Self {
        Self {
            career_focus: i.career_focus,
            money_discipline: i.money_discipline,
            health_fitness: i.health_fitness,
            relationships: i.relationships,
            learning_growth: i.learning_growth,
            risk_taking: i.risk_taking,
        }
    }
}

/// Body of the analysis POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub life_path: LifePath,
    pub sliders: SliderPayload,
    /// e.g. "5 Years".
    pub timeline_horizon: String,
    pub regret_score: u8,
    pub life_outcomes: OutcomePayload,
    /// Strongest first, at most two.
    pub primary_regret_causes: Vec<RegretCause>,
}

impl AnalysisRequest {
    pub fn new(
        path: LifePath,
        inputs: &DecisionInputs,
        horizon: TimelineHorizon,
        outcomes: &Outcomes,
        regret: &RegretData,
    ) -> Self {
        Self {
            life_path: path,
            sliders: inputs.into(),
            timeline_horizon: horizon.label(),
            regret_score: regret.score(),
            life_outcomes: outcomes.into(),
            primary_regret_causes: regret.top_decisions().to_vec(),
        }
    }

    /// Request for a finished run viewed at `horizon`.
    pub fn from_result(horizon: TimelineHorizon, result: &SimulationResult) -> Self {
        Self::new(
            result.path,
            &result.inputs,
            horizon,
            &result.outcomes,
            &result.regret,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegretArchetype {
    pub name: String,
    pub description: String,
    pub dominant_source: String,
}

/// The service's analysis of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehavioralAnalysis {
    pub behavioral_interpretation: String,
    pub regret_archetype: RegretArchetype,
    pub counterfactual_analysis: String,
    pub micro_regret_forecast: String,
    pub systemic_insight: String,
}

impl BehavioralAnalysis {
    /// Fixed analysis used when model output cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            behavioral_interpretation: "Analysis temporarily unavailable. The behavioral patterns \
                in this configuration suggest complex interdependencies that require deeper \
                examination."
                .to_string(),
            regret_archetype: RegretArchetype {
                name: "The Uncertain Navigator".to_string(),
                description: "Patterns indicate unresolved directional tension.".to_string(),
                dominant_source: "decision variance".to_string(),
            },
            counterfactual_analysis: "Variable interdependence makes isolated changes less \
                impactful than systemic adjustments."
                .to_string(),
            micro_regret_forecast: "Patterns tend to compound in ways that remain invisible \
                until they don't."
                .to_string(),
            systemic_insight: "Systems resist change proportionally to the depth of their \
                integration."
                .to_string(),
        }
    }
}

/// The span from the first `{` to the last `}`, if any.
fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Parse a model reply, tolerating prose around the JSON object.
pub fn try_parse_model_output(text: &str) -> Result<BehavioralAnalysis, serde_json::Error> {
    let json = outermost_object(text).unwrap_or(text);
    serde_json::from_str(json)
}

/// Parse a model reply, substituting [`BehavioralAnalysis::fallback`] on failure.
pub fn parse_model_output(text: &str) -> BehavioralAnalysis {
    match try_parse_model_output(text) {
        Ok(analysis) => analysis,
        Err(e) => {
            log::warn!("Failed to parse model output, using fallback: {}", e);
            BehavioralAnalysis::fallback()
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Message to surface for a non-2xx response.
///
/// Uses the body's `error` field when present and non-empty, otherwise
/// "Analysis failed: <status>".
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Analysis failed: {}", status))
}
