use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::QuizView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let model = ctx.model().to_string();
    let result_logging = ctx.result_logging();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                span { class: "app-header__logo", "Q" }
                h1 { class: "app-header__title", "QuizMaster AI" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer { model, result_logging }
        }
    }
}

#[component]
pub fn Footer(model: String, result_logging: bool) -> Element {
    rsx! {
        footer { class: "app-footer",
            "Powered by "
            span { class: "app-footer__model", "{model}" }
            if result_logging {
                span { class: "app-footer__note", " · results are logged" }
            }
        }
    }
}
