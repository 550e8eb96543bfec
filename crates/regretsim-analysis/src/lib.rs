//! Client for the RegretSim behavioral-analysis service.
//!
//! The service turns a finished simulation into a short natural-language
//! analysis. This crate owns the calling contract only: request shape,
//! response shape, error mapping and the fixed fallback analysis.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Async `reqwest` client, one POST per request |
//! | [`config`] | Base URL, key and timeout, from defaults or environment |
//! | [`error`] | Transport, status, decode and config errors |
//! | [`wire`] | Request/response bodies, model-output parsing, fallback |

pub mod client;
pub mod config;
pub mod error;
pub mod wire;

pub use client::AnalysisClient;
pub use config::AnalysisConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use wire::{AnalysisRequest, BehavioralAnalysis, RegretArchetype, SliderPayload};
