use dioxus::prelude::*;

#[component]
pub fn GeneratingPanel(topic: String, level: String) -> Element {
    rsx! {
        section { class: "panel panel--generating", aria_busy: "true",
            div { class: "spinner" }
            h2 { class: "panel__title", "Generating Quiz..." }
            p { class: "lede",
                "Preparing 5 questions on "
                span { class: "accent", "{topic}" }
            }
            p { class: "muted", "Tailoring difficulty for a {level}..." }
        }
    }
}
