use dioxus::prelude::*;
use quiz_core::{SessionEvent, SessionState, SessionStatus};

use super::{GeneratingPanel, ProfilePanel, QuestionPanel, ResultsPanel, TopicPanel};

/// Renders the panel for the session's current status.
#[component]
pub fn QuizScreen(state: SessionState, on_event: EventHandler<SessionEvent>) -> Element {
    let topic_name = state
        .topic
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    match state.status {
        SessionStatus::Idle => rsx! {
            TopicPanel { topic: state.topic.clone(), error: state.error.clone(), on_event }
        },
        SessionStatus::CollectingProfile => rsx! {
            ProfilePanel { topic: topic_name, on_event }
        },
        SessionStatus::Generating => {
            let level = state
                .user_profile
                .as_ref()
                .map(|profile| profile.level().label().to_string())
                .unwrap_or_default();
            rsx! {
                GeneratingPanel { topic: topic_name, level }
            }
        }
        SessionStatus::Answering => rsx! {
            QuestionPanel { state, on_event }
        },
        SessionStatus::Finished => rsx! {
            ResultsPanel { state, on_event }
        },
    }
}
