use dioxus::prelude::*;
use quiz_core::{SessionEvent, SessionState};

use crate::vm::{OptionMark, QuestionVm};

#[component]
pub fn QuestionPanel(state: SessionState, on_event: EventHandler<SessionEvent>) -> Element {
    let Some(vm) = QuestionVm::from_state(&state) else {
        return rsx! {};
    };
    let progress_label = vm.progress_label();
    let progress_style = format!("width: {}%;", vm.progress_percent());
    let advance_label = vm.advance_label();
    let answered = vm.is_answered();
    let text = vm.text.clone();
    let feedback = vm.feedback.clone().map(|feedback| {
        let class = if feedback.correct {
            "feedback feedback--correct"
        } else {
            "feedback feedback--wrong"
        };
        (class, feedback.icon(), feedback.headline(), feedback.explanation_html)
    });

    rsx! {
        section { class: "panel panel--question",
            header { class: "question-header",
                div { class: "question-progress",
                    span { class: "question-progress__label", "{progress_label}" }
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "{progress_style}" }
                    }
                }
                button {
                    class: "btn btn-outline btn-small",
                    id: "quiz-exit",
                    r#type: "button",
                    onclick: move |_| on_event.call(SessionEvent::Exited),
                    "Exit Quiz"
                }
            }

            h2 { class: "question-text", "{text}" }

            div { class: "options",
                for choice in vm.options.iter().cloned() {
                    OptionButton {
                        key: "{choice.index}",
                        index: choice.index,
                        letter: choice.letter,
                        text: choice.text,
                        mark: choice.mark,
                        on_event,
                    }
                }
            }

            if let Some((class, icon, headline, explanation_html)) = feedback {
                div { class,
                    p { class: "feedback__headline",
                        span { class: "feedback__icon", "{icon}" }
                        "{headline}"
                    }
                    div {
                        class: "feedback__explanation",
                        dangerous_inner_html: "{explanation_html}",
                    }
                }
            }
            if answered {
                button {
                    class: "btn btn-primary btn-wide",
                    id: "quiz-advance",
                    r#type: "button",
                    onclick: move |_| on_event.call(SessionEvent::Advanced),
                    "{advance_label}"
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    index: usize,
    letter: char,
    text: String,
    mark: OptionMark,
    on_event: EventHandler<SessionEvent>,
) -> Element {
    rsx! {
        button {
            class: mark.class(),
            r#type: "button",
            disabled: mark != OptionMark::Open,
            onclick: move |_| on_event.call(SessionEvent::AnswerSelected(index)),
            span { class: "option__letter", "{letter}" }
            span { class: "option__text", "{text}" }
        }
    }
}
