use quiz_core::model::{Catalog, QuizSettings};
use services::{QuizService, ShuffledRounds};

use super::test_harness::{TestApp, setup_view_harness};

fn app(questions: u32) -> TestApp {
    app_with_delay(questions, 0)
}

fn app_with_delay(questions: u32, reveal_delay_ms: u32) -> TestApp {
    TestApp {
        catalog: Catalog::sample(),
        settings: QuizSettings::new(questions, reveal_delay_ms).unwrap(),
        seed: 3,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_prompt_and_counters() {
    let mut harness = setup_view_harness(app(8));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Tap the flag of"), "missing prompt label in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Question 1/8"), "missing counter in {html}");
    assert!(!html.contains("dialog-action"), "unexpected dialog in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_three_flags() {
    let mut harness = setup_view_harness(app(5));
    harness.rebuild();
    let html = harness.render();

    for index in 0..3 {
        let id = format!("flag-{index}");
        assert!(html.contains(&id), "missing {id} in {html}");
    }
    assert_eq!(html.matches(".png").count(), 3, "unexpected images in {html}");
    assert!(html.contains("Question 1/5"), "missing counter in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_uses_seeded_round() {
    let mut harness = setup_view_harness(app(8));
    harness.rebuild();
    let html = harness.render();

    let expected = QuizService::with_source(
        Catalog::sample(),
        QuizSettings::default(),
        Box::new(ShuffledRounds::seeded(3)),
    );
    for country in expected.choices() {
        let src = format!("flags/{country}.png");
        assert!(html.contains(&src), "missing {src} in {html}");
    }
    assert!(
        html.contains(expected.prompt().as_str()),
        "missing prompt {} in {html}",
        expected.prompt()
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reveals_result_after_delay() {
    let mut harness = setup_view_harness(app_with_delay(8, 20));
    harness.rebuild();

    let index = harness.correct_index();
    harness.tap(index);
    let html = harness.render();
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(!harness.dialog_open());
    assert!(!html.contains("dialog-action"), "dialog shown before delay in {html}");

    for _ in 0..20 {
        harness.drive_async().await;
        if harness.dialog_open() {
            break;
        }
    }
    let html = harness.render();
    assert!(harness.dialog_open());
    assert!(html.contains("dialog-action"), "missing dialog in {html}");
    assert!(html.contains("Continue"), "missing continue label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_zero_delay_reveals_immediately() {
    let mut harness = setup_view_harness(app(8));
    harness.rebuild();

    let index = harness.correct_index();
    harness.tap(index);
    let html = harness.render();
    assert!(harness.dialog_open());
    assert!(html.contains("dialog-action"), "missing dialog in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
}
