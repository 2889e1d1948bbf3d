// quill-bridge/tests/mod.rs
//
// Integration tests for the editor session and its helpers.
// Everything here runs headless: no window, no iced runtime.
//   Session      — text tracking, fetch lifecycle, stale responses
//   FetchStatus  — status bar labels
//   helpers      — status line formatting

use quill_bridge::helpers::{short_endpoint, status_line};
use quill_bridge::renderer::ThemeName;
use quill_bridge::session::{Disposition, FetchStatus, Session};

use quill_core::{CursorPosition, Grammar, TriggerKey};
use quill_suggest::SuggestResponse;

// ════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════

fn session(text: &str) -> Session {
    Session::new(text, Grammar::Python, ThemeName::Default)
}

fn response(json: &str) -> SuggestResponse {
    serde_json::from_str(json).expect("valid response json")
}

fn two_suggestions() -> SuggestResponse {
    response(
        r#"{
            "message": "ok",
            "suggestions": [
                {"name": "s1", "type": "int", "description": "first"},
                {"name": "s2", "type": ["int", "str"], "default_value": "3"}
            ]
        }"#,
    )
}

fn names(session: &Session) -> Vec<String> {
    session
        .suggestions()
        .iter()
        .map(|(s, _)| s.name.clone())
        .collect()
}

// ════════════════════════════════════════════════════════════════════
// Session — editing
// ════════════════════════════════════════════════════════════════════

#[test]
fn new_session_tracks_initial_text() {
    let s = session("# happy coding!\n");
    assert_eq!(s.cursor(), CursorPosition { line: 2, column: 0 });
    assert_eq!(s.document().line_count(), 2);
    assert_eq!(s.markup().line_count(), 2);
    assert_eq!(s.fetch_status(), &FetchStatus::Idle);
    assert!(s.suggestions().is_empty());
}

#[test]
fn text_change_moves_cursor_and_rehighlights() {
    let mut s = session("");
    let before = s.revision();

    s.text_changed("def foo(x):\n    pass\n".to_string());

    assert_eq!(s.cursor(), CursorPosition { line: 3, column: 0 });
    assert_eq!(s.document().line_numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(s.markup().line_count(), 3);
    assert!(s.markup().span_count() > 0);
    assert!(s.revision() > before);
}

#[test]
fn unchanged_text_keeps_revision() {
    let mut s = session("x = 1");
    let before = s.revision();
    s.text_changed("x = 1".to_string());
    assert_eq!(s.revision(), before);
}

#[test]
fn theme_change_bumps_revision() {
    let mut s = session("x = 1");
    let before = s.revision();

    s.set_theme(ThemeName::Monokai);
    assert_eq!(s.theme_name(), ThemeName::Monokai);
    assert!(s.revision() > before);

    let after = s.revision();
    s.set_theme(ThemeName::Monokai);
    assert_eq!(s.revision(), after);
}

#[test]
fn plain_grammar_produces_no_spans() {
    let s = Session::new("def f():\n    return 1\n", Grammar::Plain, ThemeName::Default);
    assert_eq!(s.markup().span_count(), 0);
    assert_eq!(s.markup().line_count(), 3);
}

// ════════════════════════════════════════════════════════════════════
// Session — fetch lifecycle
// ════════════════════════════════════════════════════════════════════

#[test]
fn successful_fetch_replaces_list() {
    let mut s = session("x = 1");
    let ticket = s.begin_fetch();
    assert_eq!(s.fetch_status(), &FetchStatus::Pending(ticket));

    let disposition = s.finish_fetch(ticket, Ok(two_suggestions()));

    assert_eq!(disposition, Disposition::Applied);
    assert_eq!(names(&s), vec!["s1", "s2"]);
    assert_eq!(s.fetch_status(), &FetchStatus::Ready(2));
    assert!(s.suggestions().iter().all(|(_, expanded)| !expanded));
}

#[test]
fn empty_response_empties_list() {
    let mut s = session("x = 1");
    let t1 = s.begin_fetch();
    s.finish_fetch(t1, Ok(two_suggestions()));

    let t2 = s.begin_fetch();
    s.finish_fetch(t2, Ok(response(r#"{"suggestions": []}"#)));

    assert!(s.suggestions().is_empty());
    assert_eq!(s.fetch_status(), &FetchStatus::Ready(0));
}

#[test]
fn response_without_suggestions_field_is_empty() {
    let mut s = session("x = 1");
    let t1 = s.begin_fetch();
    s.finish_fetch(t1, Ok(two_suggestions()));

    let t2 = s.begin_fetch();
    let disposition = s.finish_fetch(t2, Ok(response(r#"{"message": "nothing"}"#)));

    assert_eq!(disposition, Disposition::Applied);
    assert!(s.suggestions().is_empty());
}

#[test]
fn failed_fetch_keeps_previous_list() {
    let mut s = session("x = 1");
    let t1 = s.begin_fetch();
    s.finish_fetch(t1, Ok(two_suggestions()));

    let t2 = s.begin_fetch();
    let disposition = s.finish_fetch(t2, Err("connection refused".to_string()));

    assert_eq!(disposition, Disposition::Failed);
    assert_eq!(names(&s), vec!["s1", "s2"]);
    assert_eq!(
        s.fetch_status(),
        &FetchStatus::Failed("connection refused".to_string())
    );
}

#[test]
fn stale_response_is_discarded() {
    let mut s = session("x = 1");
    let first = s.begin_fetch();
    let second = s.begin_fetch();

    // The newer request resolves first.
    assert_eq!(s.finish_fetch(second, Ok(two_suggestions())), Disposition::Applied);

    let late = response(r#"{"suggestions": [{"name": "old", "type": "str"}]}"#);
    assert_eq!(s.finish_fetch(first, Ok(late)), Disposition::Stale);

    assert_eq!(names(&s), vec!["s1", "s2"]);
    assert_eq!(s.fetch_status(), &FetchStatus::Ready(2));
}

#[test]
fn stale_failure_does_not_touch_status() {
    let mut s = session("x = 1");
    let first = s.begin_fetch();
    let second = s.begin_fetch();

    assert_eq!(
        s.finish_fetch(first, Err("timeout".to_string())),
        Disposition::Stale
    );
    assert_eq!(s.fetch_status(), &FetchStatus::Pending(second));
}

#[test]
fn toggle_expands_one_entry_at_a_time() {
    let mut s = session("x = 1");
    let t = s.begin_fetch();
    s.finish_fetch(t, Ok(two_suggestions()));

    s.toggle_suggestion(0);
    assert_eq!(s.suggestions().expanded_index(), Some(0));

    s.toggle_suggestion(1);
    assert_eq!(s.suggestions().expanded_index(), Some(1));
    assert!(!s.suggestions().is_expanded(0));

    s.toggle_suggestion(1);
    assert_eq!(s.suggestions().expanded_index(), None);
}

#[test]
fn dismiss_empties_list() {
    let mut s = session("x = 1");
    let t = s.begin_fetch();
    s.finish_fetch(t, Ok(two_suggestions()));

    s.dismiss_suggestions();
    assert!(s.suggestions().is_empty());

    // Dismissing again is harmless.
    s.dismiss_suggestions();
    assert!(s.suggestions().is_empty());
}

// ════════════════════════════════════════════════════════════════════
// FetchStatus labels
// ════════════════════════════════════════════════════════════════════

#[test]
fn fetch_status_labels() {
    let mut s = session("");
    let ticket = s.begin_fetch();

    assert_eq!(FetchStatus::Idle.label(), "idle");
    assert_eq!(
        FetchStatus::Pending(ticket).label(),
        format!("fetching #{}", ticket.number())
    );
    assert_eq!(FetchStatus::Ready(1).label(), "1 suggestion");
    assert_eq!(FetchStatus::Ready(3).label(), "3 suggestions");
    assert_eq!(FetchStatus::Failed("boom".into()).label(), "failed: boom");
}

// ════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════

#[test]
fn short_endpoint_strips_scheme_and_path() {
    assert_eq!(short_endpoint("http://127.0.0.1:5000/suggest"), "127.0.0.1:5000");
    assert_eq!(short_endpoint("https://example.com"), "example.com");
    assert_eq!(short_endpoint("localhost:8080/x"), "localhost:8080");
}

#[test]
fn status_line_reports_cursor_and_state() {
    let s = session("def foo(x):\n    pass");
    let line = status_line(&s, TriggerKey::Tab, "http://127.0.0.1:5000/suggest");

    assert!(line.contains("Ln 2, Col 8"));
    assert!(line.contains("2 lines"));
    assert!(line.contains(Grammar::Python.label()));
    assert!(line.contains("Default"));
    assert!(line.contains("idle"));
    assert!(line.contains("127.0.0.1:5000"));
    assert!(line.contains(TriggerKey::Tab.label()));
}
