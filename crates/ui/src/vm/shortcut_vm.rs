use dioxus::prelude::Key;
use quiz_core::{SessionEvent, SessionState, SessionStatus};

/// Map a key press to a session event.
///
/// Only the question screen has shortcuts: `1`-`4` or `A`-`D` pick an option,
/// Enter advances and Escape exits the quiz.
#[must_use]
pub fn shortcut_event(state: &SessionState, key: &Key) -> Option<SessionEvent> {
    if state.status != SessionStatus::Answering {
        return None;
    }
    match key {
        Key::Enter if state.can_advance() => Some(SessionEvent::Advanced),
        Key::Escape => Some(SessionEvent::Exited),
        Key::Character(value) if !state.is_answered() => {
            option_for_char(value).map(SessionEvent::AnswerSelected)
        }
        _ => None,
    }
}

fn option_for_char(value: &str) -> Option<usize> {
    let mut chars = value.chars();
    let ch = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    match ch {
        '1' | 'a' => Some(0),
        '2' | 'b' => Some(1),
        '3' | 'c' => Some(2),
        '4' | 'd' => Some(3),
        _ => None,
    }
}
