#![forbid(unsafe_code)]

pub mod model;
pub mod session;
pub mod time;

pub use session::{Effect, Ignored, SessionEvent, SessionState, SessionStatus, Transition, reduce};
pub use time::Clock;
