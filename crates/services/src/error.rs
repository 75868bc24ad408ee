//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionError;

/// Message shown for any generation failure the user can retry.
pub const GENERATION_FAILED_MESSAGE: &str = "Could not generate a valid quiz. Please try again.";

/// Errors emitted by a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("question generation is not configured")]
    NotConfigured,
    #[error("question generation returned an empty response")]
    EmptyResponse,
    #[error("question generation failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed quiz payload: {0}")]
    Malformed(String),
}

impl GenerationError {
    /// Text safe to show the user. Details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured => {
                "Quiz generation is not configured. Set QUIZ_AI_API_KEY and try again.".into()
            }
            _ => GENERATION_FAILED_MESSAGE.into(),
        }
    }
}

impl From<QuestionError> for GenerationError {
    fn from(err: QuestionError) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Errors emitted by a `ResultSink`. Logged only.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("result webhook responded with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while reading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{name} must use http or https")]
    UnsupportedScheme { name: &'static str },
}
