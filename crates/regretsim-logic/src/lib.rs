//! Pure simulation logic for RegretSim.
//!
//! This crate contains the whole regret engine with no network, storage or
//! UI dependencies. Functions take plain data and return results; the only
//! randomness is the flavor text, which takes a caller-supplied RNG.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`archetypes`] | Ordered rule cascade assigning one of 13 regret archetypes |
//! | [`counterfactual`] | Alternate reality: rerun with one slider changed |
//! | [`error`] | Input validation errors |
//! | [`inputs`] | The six decision sliders and their dimensions |
//! | [`messages`] | Daily micro-regret, share sentence and share card text |
//! | [`narrative`] | 5/10/30-year narratives and the reflection at 60 |
//! | [`outcomes`] | Financial, social, health and mental stability scores |
//! | [`paths`] | Life path presets and their multipliers |
//! | [`point_of_no_return`] | When recovery from the trajectory gets hard |
//! | [`regret`] | Regret score, intensity and ranked causes |
//! | [`simulation`] | Full run aggregating every calculator |
//! | [`timeline`] | Horizons of the timeline view |

pub mod archetypes;
pub mod counterfactual;
pub mod error;
pub mod inputs;
pub mod messages;
pub mod narrative;
pub mod outcomes;
pub mod paths;
pub mod point_of_no_return;
pub mod regret;
pub mod simulation;
pub mod timeline;

pub use error::SimError;
pub use inputs::{DecisionInputs, Dimension};
pub use paths::LifePath;
pub use simulation::{run_simulation, SimulationResult};
