use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::Topic;
use quiz_core::{SessionEvent, SessionStatus};
use services::GENERATION_FAILED_MESSAGE;

use super::test_harness::{
    FailingSource, StaticSource, TEST_MODEL, profile, sample_questions, setup_app_harness,
    setup_rejecting_sink_harness, setup_screen_harness, state_with,
};

#[tokio::test(flavor = "current_thread")]
async fn idle_view_smoke_renders_topic_picker() {
    let (mut harness, _rx) = setup_app_harness(Arc::new(FailingSource));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to QuizMaster AI"), "missing welcome in {html}");
    assert!(html.contains("Solar System"), "missing topic in {html}");
    assert!(html.contains("Custom Topic..."), "missing custom option in {html}");
    assert!(html.contains("Proceed to Details"), "missing proceed in {html}");
    assert!(html.contains("Powered by"), "missing footer in {html}");
    assert!(html.contains(TEST_MODEL), "missing model in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn idle_screen_smoke_shows_generation_error() {
    let mut state = state_with(SessionStatus::Idle, "Psychology");
    state.user_profile = None;
    state.error = Some(GENERATION_FAILED_MESSAGE.into());
    let mut harness = setup_screen_harness(state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("error-banner"), "missing banner in {html}");
    assert!(html.contains("Please try again."), "missing message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_screen_smoke_renders_form() {
    let mut harness = setup_screen_harness(state_with(SessionStatus::CollectingProfile, "Ancient Rome"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Almost Ready!"), "missing title in {html}");
    assert!(html.contains("Ancient Rome"), "missing topic in {html}");
    assert!(html.contains("Casual Learner"), "missing level in {html}");
    assert!(html.contains("Start Generation"), "missing start in {html}");
    assert!(html.contains("Back"), "missing back in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn generating_screen_smoke_names_topic() {
    let mut harness = setup_screen_harness(state_with(SessionStatus::Generating, "Psychology"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Generating Quiz..."), "missing title in {html}");
    assert!(html.contains("Preparing 5 questions on"), "missing copy in {html}");
    assert!(html.contains("Psychology"), "missing topic in {html}");
    assert!(html.contains("Tailoring difficulty for a Casual Learner"), "missing level in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_screen_smoke_marks_wrong_answer() {
    let mut state = state_with(SessionStatus::Answering, "Solar System");
    state.questions = sample_questions([2, 0, 1, 3, 0]);
    state.selected_answer = Some(0);
    state.answer_log = vec![0];

    let mut harness = setup_screen_harness(state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing progress in {html}");
    assert!(html.contains("Sample question 1"), "missing question in {html}");
    assert!(html.contains("option--wrong"), "missing wrong mark in {html}");
    assert!(html.contains("option--correct"), "missing correct mark in {html}");
    assert!(html.contains("Nice try!"), "missing feedback in {html}");
    assert!(html.contains("<strong>that</strong>"), "missing explanation in {html}");
    assert!(html.contains("Next Question"), "missing advance in {html}");
    assert!(html.contains("Exit Quiz"), "missing exit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_screen_smoke_hides_advance_until_answered() {
    let mut state = state_with(SessionStatus::Answering, "Solar System");
    state.questions = sample_questions([2, 0, 1, 3, 0]);

    let mut harness = setup_screen_harness(state);
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Next Question"), "advance shown early in {html}");
    assert!(!html.contains("feedback__headline"), "feedback shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_screen_smoke_renders_tier() {
    let mut state = state_with(SessionStatus::Finished, "Solar System");
    state.questions = sample_questions([0; 5]);
    state.current_index = 4;
    state.score = 3;

    let mut harness = setup_screen_harness(state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "missing title in {html}");
    assert!(html.contains("60%"), "missing percentage in {html}");
    assert!(html.contains("📚"), "missing icon in {html}");
    assert!(html.contains("Good effort, Ada! Keep learning!"), "missing message in {html}");
    assert!(html.contains("3/5"), "missing score in {html}");
    assert!(html.contains("Level: Casual Learner"), "missing level in {html}");
    assert!(html.contains("Try Another Quiz"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_flow_smoke_reaches_results_and_submits() {
    let (mut harness, mut rx) = setup_app_harness(Arc::new(StaticSource {
        correct: [1, 0, 2, 3, 1],
    }));
    harness.rebuild();

    harness.dispatch(SessionEvent::TopicConfirmed(
        Topic::new("World Capitals").unwrap(),
    ));
    assert!(harness.render().contains("Almost Ready!"));

    harness.dispatch(SessionEvent::ProfileSubmitted(profile("Grace")));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "quiz not shown in {html}");

    for pick in [1, 1, 2, 0, 1] {
        harness.dispatch(SessionEvent::AnswerSelected(pick));
        harness.dispatch(SessionEvent::Advanced);
    }
    harness.drive_async().await;

    let state = harness.session();
    assert_eq!(state.status, SessionStatus::Finished);
    assert_eq!(state.score, 3);
    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "results not shown in {html}");
    assert!(html.contains("3/5"), "missing score in {html}");

    let result = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("result submitted")
        .expect("sink open");
    assert_eq!(result.name, "Grace");
    assert_eq!(result.topic, "World Capitals");
    assert_eq!(result.score, 3);

    harness.dispatch(SessionEvent::Restarted);
    assert!(harness.render().contains("Welcome to QuizMaster AI"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_flow_smoke_returns_to_topic_on_failure() {
    let (mut harness, mut rx) = setup_app_harness(Arc::new(FailingSource));
    harness.rebuild();

    harness.dispatch(SessionEvent::TopicConfirmed(Topic::new("Psychology").unwrap()));
    harness.dispatch(SessionEvent::ProfileSubmitted(profile("Grace")));
    harness.drive_async().await;

    let state = harness.session();
    assert_eq!(state.status, SessionStatus::Idle);
    assert!(state.questions.is_empty());
    assert_eq!(state.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
    assert!(harness.render().contains("Please try again."));
    assert!(rx.try_recv().is_err());
}

#[tokio::test(flavor = "current_thread")]
async fn topic_picker_keeps_custom_topic_after_back() {
    let (mut harness, _rx) = setup_app_harness(Arc::new(FailingSource));
    harness.rebuild();
    assert!(!harness.render().contains("custom-topic"));

    harness.dispatch(SessionEvent::TopicConfirmed(
        Topic::new("History of Jazz").unwrap(),
    ));
    harness.dispatch(SessionEvent::ProfileCancelled);

    let html = harness.render();
    assert!(html.contains("Welcome to QuizMaster AI"), "picker not shown in {html}");
    assert!(html.contains("custom-topic"), "custom input missing in {html}");
    assert!(html.contains("History of Jazz"), "custom text lost in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_picker_keeps_custom_topic_after_generation_failure() {
    let (mut harness, _rx) = setup_app_harness(Arc::new(FailingSource));
    harness.rebuild();

    harness.dispatch(SessionEvent::TopicConfirmed(
        Topic::new("History of Jazz").unwrap(),
    ));
    harness.dispatch(SessionEvent::ProfileSubmitted(profile("Grace")));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Please try again."), "missing error in {html}");
    assert!(html.contains("custom-topic"), "custom input missing in {html}");
    assert!(html.contains("History of Jazz"), "custom text lost in {html}");

    // Retrying goes straight to the profile form with the same topic.
    harness.dispatch(SessionEvent::TopicConfirmed(
        Topic::new("History of Jazz").unwrap(),
    ));
    let state = harness.session();
    assert_eq!(state.status, SessionStatus::CollectingProfile);
    assert_eq!(state.topic.as_ref().map(Topic::as_str), Some("History of Jazz"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_flow_smoke_shows_results_when_sink_rejects() {
    let (mut harness, mut rx) = setup_rejecting_sink_harness(Arc::new(StaticSource {
        correct: [0, 0, 0, 0, 0],
    }));
    harness.rebuild();

    harness.dispatch(SessionEvent::TopicConfirmed(Topic::new("Psychology").unwrap()));
    harness.dispatch(SessionEvent::ProfileSubmitted(profile("Grace")));
    harness.drive_async().await;

    for pick in [0, 0, 0, 0, 1] {
        harness.dispatch(SessionEvent::AnswerSelected(pick));
        harness.dispatch(SessionEvent::Advanced);
    }
    harness.drive_async().await;

    let result = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("result submitted")
        .expect("sink open");
    assert_eq!(result.score, 4);
    harness.drive_async().await;

    let state = harness.session();
    assert_eq!(state.status, SessionStatus::Finished);
    assert_eq!(state.error, None);
    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "results not shown in {html}");
    assert!(html.contains("4/5"), "missing score in {html}");
    assert!(!html.contains("error-banner"), "error shown in {html}");
}
