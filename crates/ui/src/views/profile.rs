use dioxus::prelude::*;
use quiz_core::SessionEvent;
use quiz_core::model::{ProficiencyLevel, UserProfile};

const OTHER_VALUE: &str = "__other__";

#[component]
pub fn ProfilePanel(topic: String, on_event: EventHandler<SessionEvent>) -> Element {
    let mut name = use_signal(String::new);
    let mut level = use_signal(ProficiencyLevel::default);
    let mut other_level = use_signal(|| None::<String>);

    let resolved_level = match &*other_level.read() {
        Some(text) if text.trim().is_empty() => None,
        Some(text) => Some(ProficiencyLevel::from_label(text)),
        None => Some(level.read().clone()),
    };
    let profile = resolved_level.and_then(|level| UserProfile::new(&*name.read(), level).ok());
    let ready = profile.is_some();
    let selected = if other_level.read().is_some() {
        OTHER_VALUE.to_string()
    } else {
        level.read().label().to_string()
    };
    let other_text = other_level.read().clone();

    let submit = move |_: MouseEvent| {
        if let Some(profile) = profile.clone() {
            on_event.call(SessionEvent::ProfileSubmitted(profile));
        }
    };

    rsx! {
        section { class: "panel panel--profile",
            h2 { class: "panel__title", "Almost Ready!" }
            p { class: "lede",
                "Tell us a bit about yourself for a personalized quiz on "
                span { class: "accent", "{topic}" }
                "."
            }

            div { class: "card",
                label { class: "field-label", r#for: "profile-name", "Your Name" }
                input {
                    id: "profile-name",
                    class: "field",
                    r#type: "text",
                    placeholder: "Enter your full name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }

                label { class: "field-label", r#for: "profile-level", "Learning Level" }
                select {
                    id: "profile-level",
                    class: "field",
                    onchange: move |evt| {
                        let value = evt.value();
                        if value == OTHER_VALUE {
                            other_level.set(Some(String::new()));
                        } else {
                            other_level.set(None);
                            level.set(ProficiencyLevel::from_label(&value));
                        }
                    },
                    for option_level in ProficiencyLevel::ALL {
                        option {
                            value: option_level.label(),
                            selected: option_level.label() == selected,
                            "{option_level.display_label()}"
                        }
                    }
                    option { value: OTHER_VALUE, selected: selected == OTHER_VALUE, "Other..." }
                }

                if let Some(text) = other_text {
                    input {
                        id: "profile-level-other",
                        class: "field",
                        r#type: "text",
                        placeholder: "Describe your level",
                        value: "{text}",
                        oninput: move |evt| other_level.set(Some(evt.value())),
                    }
                }

                div { class: "actions",
                    button {
                        class: "btn btn-secondary",
                        id: "profile-back",
                        r#type: "button",
                        onclick: move |_| on_event.call(SessionEvent::ProfileCancelled),
                        "Back"
                    }
                    button {
                        class: "btn btn-primary",
                        id: "profile-start",
                        r#type: "button",
                        disabled: !ready,
                        onclick: submit,
                        "Start Generation"
                    }
                }
            }
        }
    }
}
