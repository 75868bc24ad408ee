mod generating;
mod profile;
mod question;
mod quiz;
mod results;
mod screen;
mod topic;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use generating::GeneratingPanel;
pub use profile::ProfilePanel;
pub use question::QuestionPanel;
pub use quiz::QuizView;
pub use results::ResultsPanel;
pub use screen::QuizScreen;
pub use topic::TopicPanel;

#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;
