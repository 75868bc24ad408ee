use std::sync::Arc;

use crate::Clock;
use crate::config::{GenerationConfig, WebhookConfig};
use crate::question_source::{ChatQuestionSource, QuestionSource};
use crate::quiz_loop::QuizLoopService;
use crate::result_sink::{DisabledResultSink, ResultSink, WebhookResultSink};

/// Assembles app-facing services from configuration.
#[derive(Clone)]
pub struct AppServices {
    model: String,
    generation_configured: bool,
    result_logging: bool,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    #[must_use]
    pub fn new(generation: GenerationConfig, webhook: Option<WebhookConfig>, clock: Clock) -> Self {
        let model = generation.model.clone();
        let generation_configured = generation.is_configured();
        let result_logging = webhook.is_some();

        let questions: Arc<dyn QuestionSource> = Arc::new(ChatQuestionSource::new(generation));
        let results: Arc<dyn ResultSink> = match webhook {
            Some(config) => Arc::new(WebhookResultSink::new(config)),
            None => Arc::new(DisabledResultSink),
        };

        Self {
            model,
            generation_configured,
            result_logging,
            quiz_loop: Arc::new(QuizLoopService::new(clock, questions, results)),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn generation_configured(&self) -> bool {
        self.generation_configured
    }

    #[must_use]
    pub fn result_logging(&self) -> bool {
        self.result_logging
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;

    #[test]
    fn reports_missing_key_and_disabled_logging() {
        let services = AppServices::new(GenerationConfig::default(), None, fixed_clock());
        assert!(!services.generation_configured());
        assert!(!services.result_logging());
        assert_eq!(services.model(), "gpt-4o-mini");
    }

    #[test]
    fn reports_configured_key_and_webhook() {
        let generation = GenerationConfig {
            api_key: Some("sk-test".into()),
            ..GenerationConfig::default()
        };
        let webhook = WebhookConfig::parse("https://hooks.example.com/quiz").unwrap();
        let services = AppServices::new(generation, Some(webhook), fixed_clock());
        assert!(services.generation_configured());
        assert!(services.result_logging());
    }
}
