use std::sync::Arc;

use services::QuizLoopService;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;

    /// Model name shown in the footer.
    fn model(&self) -> String;

    fn result_logging(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    model: String,
    result_logging: bool,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            model: app.model(),
            result_logging: app.result_logging(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
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

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
