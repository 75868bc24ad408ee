use async_trait::async_trait;
use reqwest::Client;

use quiz_core::model::QuizResult;

use crate::config::WebhookConfig;
use crate::error::SubmissionError;

/// Records a finished quiz somewhere outside the app.
///
/// Delivery is best-effort: callers log failures and never show them to the user.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn submit(&self, result: &QuizResult) -> Result<(), SubmissionError>;
}

/// Posts the result as JSON to a spreadsheet-style webhook.
#[derive(Clone)]
pub struct WebhookResultSink {
    client: Client,
    config: WebhookConfig,
}

impl WebhookResultSink {
    #[must_use]
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ResultSink for WebhookResultSink {
    async fn submit(&self, result: &QuizResult) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(self.config.url.clone())
            .json(result)
            .send()
            .await?;

        // Script endpoints often answer with a redirect page; only hard failures count.
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(SubmissionError::HttpStatus(status));
        }
        Ok(())
    }
}

/// Used when no webhook is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledResultSink;

#[async_trait]
impl ResultSink for DisabledResultSink {
    async fn submit(&self, result: &QuizResult) -> Result<(), SubmissionError> {
        log::debug!(
            "result logging disabled; dropping {}/{} on {:?}",
            result.score,
            result.total,
            result.topic
        );
        Ok(())
    }
}
