//! Async HTTP client for the behavioral-analysis service.
//!
//! One POST per call: no retries, timeout from [`AnalysisConfig`].
//! Cancel an in-flight request by dropping its future.

use std::time::Duration;

use reqwest::Client;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::wire::{error_message, AnalysisRequest, BehavioralAnalysis};

pub struct AnalysisClient {
    http: Client,
    config: AnalysisConfig,
}

impl AnalysisClient {
    pub fn new(config: AnalysisConfig) -> AnalysisResult<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { http, config })
    }

    /// Client configured from `REGRETSIM_ANALYSIS_*` environment variables.
    pub fn from_env() -> AnalysisResult<Self> {
        Self::new(AnalysisConfig::from_env())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Request an analysis.
    pub async fn fetch(&self, request: &AnalysisRequest) -> AnalysisResult<BehavioralAnalysis> {
        log::info!(
            "Requesting behavioral analysis for {} at {}",
            request.life_path,
            request.timeline_horizon
        );

        let mut builder = self.http.post(self.config.endpoint()).json(request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            log::error!("Behavioral analysis transport error: {}", e);
            AnalysisError::Transport(e)
        })?;

        let status = response.status();

        if !status.is_success() {
            // An unreadable error body still reports the status.
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    log::debug!("Behavioral analysis error body unreadable: {}", e);
                    String::new()
                }
            };
            let message = error_message(status.as_u16(), &body);
            log::warn!("Behavioral analysis returned {}: {}", status, message);
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Like [`fetch`](Self::fetch), but logs any failure and yields `None`
    /// so the caller can show its empty state.
    pub async fn fetch_or_fallback(&self, request: &AnalysisRequest) -> Option<BehavioralAnalysis> {
        match self.fetch(request).await {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                log::warn!("Behavioral analysis unavailable: {}", e);
                None
            }
        }
    }
}
