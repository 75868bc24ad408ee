use dioxus::prelude::*;
use quiz_core::{SessionEvent, SessionState};

use crate::vm::ResultsVm;

#[component]
pub fn ResultsPanel(state: SessionState, on_event: EventHandler<SessionEvent>) -> Element {
    let Some(vm) = ResultsVm::from_state(&state) else {
        return rsx! {};
    };
    let message = vm.message();
    let score_label = vm.score_label();
    let icon = vm.icon();
    let percentage = vm.percentage;
    let level = vm.level.clone();

    rsx! {
        section { class: "panel panel--results",
            div { class: "results-icon", "{icon}" }
            h2 { class: "panel__title", "Quiz Complete!" }
            p { class: "lede", "{message}" }

            div { class: "results-score",
                span { class: "results-score__percent", "{percentage}%" }
                span { class: "results-score__value", "{score_label}" }
                span { class: "results-score__label", "Score" }
            }

            button {
                class: "btn btn-primary btn-wide",
                id: "results-restart",
                r#type: "button",
                onclick: move |_| on_event.call(SessionEvent::Restarted),
                "Try Another Quiz"
            }
            p { class: "muted", "Level: {level}" }
        }
    }
}
