use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use quiz_core::{Effect, SessionEvent, SessionState};
use services::QuizController;

use super::QuizScreen;
use crate::context::AppContext;
use crate::vm::shortcut_event;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Run one event through the controller and store the new state.
fn apply(mut session: Signal<SessionState>, event: SessionEvent) -> Option<Effect> {
    let mut controller = QuizController::from_state(session.peek().clone());
    let effect = controller.dispatch(event);
    session.set(controller.into_state());
    effect
}

/// Hosts the single quiz session for the window.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let session = use_signal(SessionState::new);

    let dispatch = use_callback(move |event: SessionEvent| {
        let Some(effect) = apply(session, event) else {
            return;
        };
        let quiz_loop = Arc::clone(&quiz_loop);
        spawn(async move {
            let mut pending = Some(effect);
            while let Some(effect) = pending.take() {
                if let Some(follow_up) = quiz_loop.run_effect(effect).await {
                    pending = apply(session, follow_up);
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    use_effect(move || {
        // Re-focus on every screen change so shortcuts keep working.
        let _ = session.read().status;
        let _ = eval("document.getElementById('quiz-root')?.focus();");
    });

    let on_key = move |evt: KeyboardEvent| {
        let event = shortcut_event(&session.read(), &evt.key());
        if let Some(event) = event {
            log::debug!("shortcut {:?} -> {event:?}", evt.key());
            evt.prevent_default();
            dispatch.call(event);
        }
    };

    let state = session.read().clone();

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            QuizScreen { state, on_event: dispatch }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionEvent>>>>,
    session: Rc<RefCell<Option<Signal<SessionState>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<SessionEvent>, session: Signal<SessionState>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<SessionEvent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<SessionState> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
