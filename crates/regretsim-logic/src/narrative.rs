//! Timeline narratives — templated prose for the 5-, 10- and 30-year views
//! plus a first-person reflection at 60.
//!
//! Pure: the same run always produces the same text. Each narrative picks an
//! "on track" or "off track" template by mean outcome, then fills clauses
//! from individual outcome thresholds.

use serde::{Deserialize, Serialize};

use crate::archetypes::Archetype;
use crate::inputs::DecisionInputs;
use crate::outcomes::Outcomes;
use crate::paths::LifePath;
use crate::regret::RegretData;

/// Mean outcome at which a run reads as on track.
const ON_TRACK_MEAN: f64 = 60.0;

/// The four narrative texts of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narratives {
    pub year5: String,
    pub year10: String,
    pub year30: String,
    pub final_reflection: String,
}

/// Pick `hi` when `cond` holds, else `lo`.
fn pick(cond: bool, hi: &'static str, lo: &'static str) -> &'static str {
    if cond {
        hi
    } else {
        lo
    }
}

/// Everything a template needs, pulled out once.
struct Ctx {
    on_track: bool,
    trajectory: &'static str,
    archetype: &'static str,
    cause: String,
    regret: u8,
    career: u8,
    financial: u8,
    social: u8,
    health: u8,
    mental: u8,
}

fn year5(c: &Ctx) -> String {
    if c.on_track {
        format!(
            "Five years into your {} journey, the early signs are cautiously optimistic. \
             Your financial situation shows {}, while relationships {}. \
             The choices you have made are beginning to compound. {}. \
             Health-wise, {}. {} pattern is taking shape.",
            c.trajectory,
            pick(c.financial >= 60, "steady growth", "some strain"),
            pick(
                c.social >= 60,
                "remain a source of strength",
                "require more attention than you anticipated"
            ),
            pick(
                c.career >= 60,
                "Career momentum is building",
                "Career stagnation is becoming noticeable"
            ),
            pick(
                c.health >= 60,
                "your body still forgives your choices",
                "warning signs are emerging"
            ),
            c.archetype,
        )
    } else {
        format!(
            "Five years down the {} path, cracks are forming. Financial stress {}. \
             Relationships {}. Your {} is already casting shadows. The body {}. \
             {} archetype is crystallizing.",
            c.trajectory,
            pick(
                c.financial < 40,
                "keeps you up at night",
                "is a constant background hum"
            ),
            pick(
                c.social < 40,
                "have deteriorated significantly",
                "feel strained"
            ),
            c.cause,
            pick(
                c.health < 40,
                "is sending urgent signals you keep ignoring",
                "shows early signs of neglect"
            ),
            c.archetype,
        )
    }
}

fn year10(c: &Ctx) -> String {
    if c.on_track {
        format!(
            "A decade in, the {} approach has yielded {}. Your network {}. \
             Mental clarity {}. The {} still lingers in quiet moments. \
             You recognize yourself as {}, and you are learning to accept what that means.",
            c.trajectory,
            pick(c.financial >= 70, "substantial returns", "modest gains"),
            pick(
                c.social >= 70,
                "has become a genuine source of support",
                "exists but lacks depth"
            ),
            pick(
                c.mental >= 70,
                "remains sharp, though wisdom comes with harder questions",
                "wavers between confidence and doubt"
            ),
            c.cause,
            c.archetype,
        )
    } else {
        format!(
            "Ten years of {} choices have accumulated into something you barely recognize. \
             Financial recovery {}. Social connections {}. \
             The {} has metastasized into daily anxiety. Health {}. \
             {} identity feels less like a choice and more like a cage.",
            c.trajectory,
            pick(
                c.financial < 50,
                "seems increasingly distant",
                "is possible but requires dramatic change"
            ),
            pick(
                c.social < 50,
                "have thinned to near-nothing",
                "exist in a shallow, transactional state"
            ),
            c.cause,
            pick(
                c.health < 50,
                "is now a serious concern that can no longer be ignored",
                "requires immediate attention"
            ),
            c.archetype,
        )
    }
}

fn year30(c: &Ctx) -> String {
    if c.on_track {
        format!(
            "Three decades have transformed the {} choice into a full life story. \
             Financial security {}. Relationships {}. Health {}. \
             As {}, you have made peace with the roads not taken. \
             Regret sits at {}%: present, but not defining. \
             The {} remains your biggest what-if, but you have learned that every path has its ghosts.",
            c.trajectory,
            pick(
                c.financial >= 70,
                "allows for genuine freedom",
                "is adequate but not abundant"
            ),
            pick(
                c.social >= 70,
                "have deepened into something irreplaceable",
                "provide companionship if not profound connection"
            ),
            pick(
                c.health >= 70,
                "has been maintained through consistent effort",
                "requires careful management"
            ),
            c.archetype,
            c.regret,
            c.cause,
        )
    } else {
        format!(
            "Thirty years of {} living have written a story you struggle to recognize as your own. \
             Financial reality {}. Loneliness {}. Physical decline {}. \
             {} label feels like a verdict. At {}% regret, every quiet moment brings the same thought: \
             the {} changed everything, and you saw it happening, and you let it happen anyway.",
            c.trajectory,
            pick(
                c.financial < 50,
                "has hardened into permanent limitation",
                "is a constant source of stress"
            ),
            pick(
                c.social < 50,
                "has become the background noise of existence",
                "visits more often than you would like"
            ),
            pick(
                c.health < 50,
                "accelerates, a daily reminder of accumulated neglect",
                "is setting in faster than expected"
            ),
            c.archetype,
            c.regret,
            c.cause,
        )
    }
}

fn final_reflection(c: &Ctx) -> String {
    if c.on_track {
        format!(
            "I am sitting here at 60, looking at old photographs, trying to find the moment \
             when I became who I am. The {} choice seemed so natural back then. \
             Was it courage or just momentum? I think about {} sometimes. \
             Not with pain anymore, just wonder. What would that other life have looked like? \
             But then I look at what I have: {}, {}, {}. \
             {} in me made this. I made this. \
             And on the good days, I can almost believe it was worth it.",
            c.trajectory,
            c.cause,
            pick(c.financial >= 60, "the security I built", "enough to get by"),
            pick(
                c.social >= 60,
                "the faces that light up when I walk in",
                "a few people who still check in"
            ),
            pick(
                c.health >= 60,
                "a body that still cooperates most days",
                "health that requires attention"
            ),
            c.archetype,
        )
    } else {
        format!(
            "Sixty years old. The {} life has run its course. I try not to think about the {}. \
             That door closed so long ago, but it is there in every silence, every empty room. \
             I used to think I had time. Time to fix things. Time to try again. \
             Time to become someone different. But time does not wait, and regret does not fade. \
             It just gets quieter, more patient. {} I became: was it inevitable? \
             Or did I choose it, one small surrender at a time? At {}%, I have learned that \
             some questions do not have answers. Just echoes. And the quiet sound of a life unlived.",
            c.trajectory, c.cause, c.archetype, c.regret,
        )
    }
}

/// Generate all four narratives for a run.
pub fn generate_narratives(
    path: LifePath,
    inputs: &DecisionInputs,
    outcomes: &Outcomes,
    regret: &RegretData,
    archetype: Archetype,
) -> Narratives {
    let ctx = Ctx {
        on_track: outcomes.mean() >= ON_TRACK_MEAN,
        trajectory: path.trajectory(),
        archetype: archetype.label(),
        cause: regret.primary_cause().label().to_lowercase(),
        regret: regret.score(),
        career: inputs.career_focus.min(100),
        financial: outcomes.financial.score(),
        social: outcomes.social.score(),
        health: outcomes.health.score(),
        mental: outcomes.mental_stability.score(),
    };

    Narratives {
        year5: year5(&ctx),
        year10: year10(&ctx),
        year30: year30(&ctx),
        final_reflection: final_reflection(&ctx),
    }
}
