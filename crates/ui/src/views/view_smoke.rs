use super::test_harness::{ViewKind, setup_view_harness};
use crate::i18n::Language;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_paths_and_toggles() {
    let mut harness = setup_view_harness(ViewKind::Home, Language::En);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Math Kids"), "missing title in {html}");
    assert!(html.contains("Numbers 0 - 5"), "missing path 5 in {html}");
    assert!(html.contains("Numbers 0 - 10"), "missing path 10 in {html}");
    assert!(html.contains("Numbers 0 - 20"), "missing path 20 in {html}");
    assert!(html.contains("Fingers: ON"), "missing fingers toggle in {html}");
    assert!(html.contains("Dots: ON"), "missing dots toggle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_swedish() {
    let mut harness = setup_view_harness(ViewKind::Home, Language::Sv);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Matte-Kul"), "missing title in {html}");
    assert!(html.contains("Välj din väg"), "missing path label in {html}");
    assert!(html.contains("10 Nivåer"), "missing level count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_renders_question_and_meters() {
    let mut harness = setup_view_harness(ViewKind::Play(10), Language::En);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Level 1 / 10"), "missing level label in {html}");
    assert!(html.contains("★ 0"), "missing score badge in {html}");
    assert_eq!(
        html.matches("choice-button__value").count(),
        3,
        "expected three choices in {html}"
    );
    // Fingers default on, so both operands illustrate hands.
    assert!(html.contains("hand-group"), "missing hands in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_rejects_off_ladder_range() {
    let mut harness = setup_view_harness(ViewKind::Play(7), Language::En);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Unknown path."), "missing fallback in {html}");
    assert!(html.contains("Back to Menu"), "missing menu link in {html}");
}
