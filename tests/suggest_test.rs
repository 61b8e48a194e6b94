use std::time::{Duration, Instant};

use groupli::types::Suggestion;
use groupli::ui::suggest::*;

// Helper function to create a test suggestion
fn create_test_suggestion(text: &str) -> Suggestion {
    Suggestion {
        text: text.to_string(),
        kind: "artist".to_string(),
    }
}

#[test]
fn test_debounce_fires_once_after_quiet_period() {
    let mut debounce = SuggestDebounce::new();
    let start = Instant::now();

    assert_eq!(debounce.input("queen", start), InputOutcome::Pending);

    // Before the deadline nothing fires
    assert_eq!(debounce.poll(start + SUGGEST_DEBOUNCE / 2), None);
    assert!(debounce.is_pending());

    // At the deadline the final text fires exactly once
    assert_eq!(
        debounce.poll(start + SUGGEST_DEBOUNCE),
        Some("queen".to_string())
    );
    assert_eq!(debounce.poll(start + SUGGEST_DEBOUNCE * 2), None);
    assert!(!debounce.is_pending());
}

#[test]
fn test_debounce_coalesces_rapid_keystrokes() {
    let mut debounce = SuggestDebounce::new();
    let start = Instant::now();

    debounce.input("q", start);
    debounce.input("qu", start + Duration::from_millis(100));
    debounce.input("que", start + Duration::from_millis(200));

    // The earlier deadlines were superseded
    assert_eq!(debounce.poll(start + SUGGEST_DEBOUNCE), None);

    // Only one request fires, for the final text
    assert_eq!(
        debounce.poll(start + Duration::from_millis(200) + SUGGEST_DEBOUNCE),
        Some("que".to_string())
    );
}

#[test]
fn test_debounce_empty_text_clears_immediately() {
    let mut debounce = SuggestDebounce::new();
    let start = Instant::now();

    debounce.input("queen", start);
    assert_eq!(debounce.input("", start + Duration::from_millis(50)), InputOutcome::Clear);

    // The pending request was dropped along with the text
    assert!(!debounce.is_pending());
    assert_eq!(debounce.poll(start + SUGGEST_DEBOUNCE * 2), None);
}

#[test]
fn test_debounce_whitespace_counts_as_empty() {
    let mut debounce = SuggestDebounce::new();
    assert_eq!(debounce.input("   ", Instant::now()), InputOutcome::Clear);
}

#[test]
fn test_debounce_cancel_drops_pending_deadline() {
    let mut debounce = SuggestDebounce::new();
    let start = Instant::now();

    debounce.input("queen", start);
    debounce.cancel();
    assert_eq!(debounce.poll(start + SUGGEST_DEBOUNCE * 2), None);
}

#[test]
fn test_session_accepts_only_latest() {
    let mut session = SuggestSession::new();

    let first = session.begin();
    let second = session.begin();

    // A late completion for a superseded request is rejected
    assert!(!session.accept(first));
    assert!(session.accept(second));
}

#[test]
fn test_session_invalidate_rejects_everything_in_flight() {
    let mut session = SuggestSession::new();

    let seq = session.begin();
    session.invalidate();
    assert!(!session.accept(seq));

    // A fresh request after invalidation is accepted again
    let next = session.begin();
    assert!(session.accept(next));
}

#[test]
fn test_selecting_suggestion_clears_list_and_bypasses_debounce() {
    let mut panel = SuggestionPanel::new();
    let mut debounce = SuggestDebounce::new();
    let mut session = SuggestSession::new();
    let start = Instant::now();

    // Mid-typing state: a pending debounce window and an in-flight request
    debounce.input("que", start);
    let in_flight = session.begin();
    panel.set_items(vec![
        create_test_suggestion("Queen"),
        create_test_suggestion("Queens of the Stone Age"),
    ]);
    panel.move_down(8);

    let text = panel.select(&mut debounce, &mut session);
    assert_eq!(text, Some("Queen".to_string()));

    // The list emptied and the highlight is gone
    assert!(panel.is_empty());
    assert_eq!(panel.cursor(), None);

    // The pending deadline was dropped: the selection's search replaces the
    // debounced one
    assert!(!debounce.is_pending());
    assert_eq!(debounce.poll(start + SUGGEST_DEBOUNCE * 2), None);

    // The superseded suggestion request will be discarded on completion
    assert!(!session.accept(in_flight));
}

#[test]
fn test_select_without_highlight_is_a_no_op() {
    let mut panel = SuggestionPanel::new();
    let mut debounce = SuggestDebounce::new();
    let mut session = SuggestSession::new();
    let start = Instant::now();

    debounce.input("que", start);
    panel.set_items(vec![create_test_suggestion("Queen")]);

    // Nothing highlighted yet: selection does nothing and the debounce
    // window survives
    assert_eq!(panel.select(&mut debounce, &mut session), None);
    assert!(!panel.is_empty());
    assert!(debounce.is_pending());
}

#[test]
fn test_panel_cursor_movement() {
    let mut panel = SuggestionPanel::new();
    panel.set_items(vec![
        create_test_suggestion("A"),
        create_test_suggestion("B"),
        create_test_suggestion("C"),
    ]);

    // Entering the list starts at the top
    assert_eq!(panel.cursor(), None);
    panel.move_down(8);
    assert_eq!(panel.cursor(), Some(0));

    // The highlight is bounded by the visible rows
    panel.move_down(2);
    panel.move_down(2);
    assert_eq!(panel.cursor(), Some(1));

    // Moving up past the first row leaves the list
    panel.move_up();
    panel.move_up();
    assert_eq!(panel.cursor(), None);

    // New items reset the highlight
    panel.move_down(8);
    panel.set_items(vec![create_test_suggestion("D")]);
    assert_eq!(panel.cursor(), None);
}
