mod markdown_vm;
mod question_vm;
mod results_vm;
mod shortcut_vm;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use question_vm::{FeedbackVm, OptionMark, OptionVm, QuestionVm};
pub use results_vm::{ResultsVm, tier_icon, tier_message};
pub use shortcut_vm::shortcut_event;
