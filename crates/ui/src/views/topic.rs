use dioxus::prelude::*;
use quiz_core::SessionEvent;
use quiz_core::model::{PREDEFINED_TOPICS, Topic, TopicChoice};

const CUSTOM_VALUE: &str = "__custom__";

fn choice_from_value(value: &str) -> TopicChoice {
    if value == CUSTOM_VALUE {
        return TopicChoice::Custom(String::new());
    }
    PREDEFINED_TOPICS
        .iter()
        .find(|name| **name == value)
        .map_or_else(TopicChoice::default, |name| TopicChoice::Predefined(*name))
}

/// Topic picker; reopens on the last confirmed topic after Back or a failed generation.
#[component]
pub fn TopicPanel(
    #[props(!optional)] topic: Option<Topic>,
    #[props(!optional)] error: Option<String>,
    on_event: EventHandler<SessionEvent>,
) -> Element {
    let mut choice = use_signal(move || {
        topic
            .as_ref()
            .map_or_else(TopicChoice::default, TopicChoice::from_topic)
    });

    let ready = choice.read().resolve().is_some();
    let (selected, custom_text) = match &*choice.read() {
        TopicChoice::Predefined(name) => (*name, None),
        TopicChoice::Custom(text) => (CUSTOM_VALUE, Some(text.clone())),
    };

    let confirm = move |_: MouseEvent| {
        let topic = choice.read().resolve();
        if let Some(topic) = topic {
            on_event.call(SessionEvent::TopicConfirmed(topic));
        }
    };

    rsx! {
        section { class: "panel panel--topic",
            span { class: "badge", "Welcome to QuizMaster AI" }
            h1 { class: "hero",
                "Test your "
                span { class: "hero__accent", "Knowledge" }
            }
            p { class: "lede", "Choose a topic and our AI will generate a unique challenge for you." }

            div { class: "card",
                label { class: "field-label", r#for: "topic-select", "Select a Topic" }
                select {
                    id: "topic-select",
                    class: "field",
                    onchange: move |evt| choice.set(choice_from_value(&evt.value())),
                    for name in PREDEFINED_TOPICS {
                        option { value: name, selected: name == selected, "{name}" }
                    }
                    option { value: CUSTOM_VALUE, selected: selected == CUSTOM_VALUE, "Custom Topic..." }
                }

                if let Some(text) = custom_text {
                    label { class: "field-label", r#for: "custom-topic", "Enter Custom Topic" }
                    input {
                        id: "custom-topic",
                        class: "field",
                        r#type: "text",
                        placeholder: "e.g. History of Jazz, Particle Physics...",
                        value: "{text}",
                        oninput: move |evt| choice.set(TopicChoice::Custom(evt.value())),
                    }
                }

                if let Some(message) = error {
                    p { class: "error-banner", role: "alert", "{message}" }
                }

                button {
                    class: "btn btn-primary btn-wide",
                    id: "topic-proceed",
                    r#type: "button",
                    disabled: !ready,
                    onclick: confirm,
                    "Proceed to Details"
                }
            }
        }
    }
}
