use std::sync::Arc;

use quiz_core::model::{ProficiencyLevel, QuizResult, QuizSummary, Topic};
use quiz_core::{Clock, Effect, SessionEvent, SessionState, reduce};

use crate::question_source::QuestionSource;
use crate::result_sink::ResultSink;

//
// ─── CONTROLLER ───────────────────────────────────────────────────────────────
//

/// Owns one session and applies events to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizController {
    state: SessionState,
}

impl QuizController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_state(state: SessionState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Apply an event and hand back the effect the caller must run, if any.
    pub fn dispatch(&mut self, event: SessionEvent) -> Option<Effect> {
        let from = self.state.status;
        let transition = reduce(std::mem::take(&mut self.state), event);
        self.state = transition.state;

        match transition.ignored {
            Some(reason) => log::debug!("ignored event in {from}: {reason}"),
            None if from != self.state.status => {
                log::debug!("session {from} -> {}", self.state.status);
            }
            None => {}
        }
        transition.effect
    }
}

//
// ─── EFFECT RUNNER ────────────────────────────────────────────────────────────
//

/// Runs controller effects against the question source and result sink.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    questions: Arc<dyn QuestionSource>,
    results: Arc<dyn ResultSink>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        questions: Arc<dyn QuestionSource>,
        results: Arc<dyn ResultSink>,
    ) -> Self {
        Self {
            clock,
            questions,
            results,
        }
    }

    /// Ask the question source for a quiz and turn the outcome into the next event.
    ///
    /// Failures are logged and become `GenerationFailed` with a user-facing message.
    pub async fn generate(&self, topic: &Topic, level: &ProficiencyLevel) -> SessionEvent {
        match self.questions.generate(topic, level).await {
            Ok(set) => {
                log::info!("generated quiz on {topic:?} for {level}");
                SessionEvent::GenerationSucceeded(set)
            }
            Err(err) => {
                log::warn!("quiz generation on {topic:?} failed: {err}");
                SessionEvent::GenerationFailed(err.user_message())
            }
        }
    }

    /// Send a finished session to the result sink without waiting for it.
    ///
    /// Best-effort: the outcome is only logged and never reaches the session.
    pub fn notify_result(&self, summary: QuizSummary) {
        let result = QuizResult::new(summary, self.clock.now());
        let sink = Arc::clone(&self.results);

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::warn!("no async runtime; result for {:?} not submitted", result.topic);
            return;
        };
        runtime.spawn(async move {
            match sink.submit(&result).await {
                Ok(()) => log::info!(
                    "submitted result {}/{} on {:?}",
                    result.score,
                    result.total,
                    result.topic
                ),
                Err(err) => log::warn!("result submission failed: {err}"),
            }
        });
    }

    /// Run one effect; generation yields a follow-up event, submission never does.
    pub async fn run_effect(&self, effect: Effect) -> Option<SessionEvent> {
        match effect {
            Effect::RequestQuestions { topic, level } => Some(self.generate(&topic, &level).await),
            Effect::SubmitResult(summary) => {
                self.notify_result(summary);
                None
            }
        }
    }

    /// Dispatch `event` and keep running effects until the session settles.
    pub async fn drive<'a>(
        &self,
        controller: &'a mut QuizController,
        event: SessionEvent,
    ) -> &'a SessionState {
        let mut pending = controller.dispatch(event);
        while let Some(effect) = pending.take() {
            if let Some(follow_up) = self.run_effect(effect).await {
                pending = controller.dispatch(follow_up);
            }
        }
        controller.state()
    }
}
