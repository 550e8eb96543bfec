use thiserror::Error;

/// Errors from a behavioral-analysis request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Connection, timeout or body-read failure.
    #[error("analysis request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. `message` is what the caller should surface.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// A 2xx body that is not a valid analysis object.
    #[error("analysis response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid analysis configuration: {0}")]
    Config(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
