use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;
use quiz_core::model::{ProficiencyLevel, Question, QuestionSet, QuizResult, Topic, UserProfile};
use quiz_core::time::fixed_clock;
use quiz_core::{SessionEvent, SessionState, SessionStatus};
use services::{GenerationError, QuestionSource, QuizLoopService, ResultSink, SubmissionError};
use tokio::sync::mpsc;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::{QuizScreen, QuizTestHandles};

pub const TEST_MODEL: &str = "test-model";

//
// ─── FAKE COLLABORATORS ───────────────────────────────────────────────────────
//

pub fn sample_questions(correct: [usize; 5]) -> Vec<Question> {
    correct
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            Question::new(
                format!("Sample question {}", i + 1),
                vec!["North".into(), "East".into(), "South".into(), "West".into()],
                *answer,
                "Because **that** is where it points.",
            )
            .expect("valid question")
        })
        .collect()
}

pub struct StaticSource {
    pub correct: [usize; 5],
}

#[async_trait]
impl QuestionSource for StaticSource {
    async fn generate(
        &self,
        _topic: &Topic,
        _level: &ProficiencyLevel,
    ) -> Result<QuestionSet, GenerationError> {
        Ok(QuestionSet::new(sample_questions(self.correct)).expect("five questions"))
    }
}

pub struct FailingSource;

#[async_trait]
impl QuestionSource for FailingSource {
    async fn generate(
        &self,
        _topic: &Topic,
        _level: &ProficiencyLevel,
    ) -> Result<QuestionSet, GenerationError> {
        Err(GenerationError::EmptyResponse)
    }
}

/// Records every submission; with `reject` set it also fails each one.
pub struct RecordingSink {
    tx: mpsc::UnboundedSender<QuizResult>,
    reject: bool,
}

#[async_trait]
impl ResultSink for RecordingSink {
    async fn submit(&self, result: &QuizResult) -> Result<(), SubmissionError> {
        let _ = self.tx.send(result.clone());
        if self.reject {
            return Err(SubmissionError::HttpStatus(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        Ok(())
    }
}

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn model(&self) -> String {
        TEST_MODEL.into()
    }

    fn result_logging(&self) -> bool {
        true
    }
}

//
// ─── HARNESS COMPONENTS ───────────────────────────────────────────────────────
//

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<Route> {} }
}

#[derive(Props, Clone, PartialEq)]
struct ScreenHarnessProps {
    state: SessionState,
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    rsx! {
        QuizScreen { state: props.state, on_event: move |_event: SessionEvent| {} }
    }
}

//
// ─── DRIVERS ──────────────────────────────────────────────────────────────────
//

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn dispatch(&mut self, event: SessionEvent) {
        let dispatch = self.handles().dispatch();
        self.dom.in_runtime(|| dispatch.call(event));
        drive_dom(&mut self.dom);
    }

    pub fn session(&self) -> SessionState {
        let session = self.handles().session();
        self.dom.in_runtime(|| session.peek().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn handles(&self) -> &QuizTestHandles {
        self.handles.as_ref().expect("app harness")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Full app behind the router, with a fake question source and recording sink.
pub fn setup_app_harness(
    source: Arc<dyn QuestionSource>,
) -> (ViewHarness, mpsc::UnboundedReceiver<QuizResult>) {
    build_app_harness(source, false)
}

/// Same as [`setup_app_harness`], but every result submission fails.
pub fn setup_rejecting_sink_harness(
    source: Arc<dyn QuestionSource>,
) -> (ViewHarness, mpsc::UnboundedReceiver<QuizResult>) {
    build_app_harness(source, true)
}

fn build_app_harness(
    source: Arc<dyn QuestionSource>,
    reject: bool,
) -> (ViewHarness, mpsc::UnboundedReceiver<QuizResult>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let quiz_loop = Arc::new(QuizLoopService::new(
        fixed_clock(),
        source,
        Arc::new(RecordingSink { tx, reject }),
    ));
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        AppHarness,
        AppHarnessProps {
            app: Arc::new(TestApp { quiz_loop }),
            handles: handles.clone(),
        },
    );
    (
        ViewHarness {
            dom,
            handles: Some(handles),
        },
        rx,
    )
}

/// A single screen rendered from a fixed state.
pub fn setup_screen_harness(state: SessionState) -> ViewHarness {
    let dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { state });
    ViewHarness { dom, handles: None }
}

//
// ─── STATES ───────────────────────────────────────────────────────────────────
//

pub fn profile(name: &str) -> UserProfile {
    UserProfile::new(name, ProficiencyLevel::Casual).expect("valid profile")
}

pub fn state_with(status: SessionStatus, topic: &str) -> SessionState {
    SessionState {
        status,
        topic: Some(Topic::new(topic).expect("valid topic")),
        user_profile: Some(profile("Ada")),
        ..SessionState::new()
    }
}
