use std::time::{Duration, Instant};

use crate::types::Suggestion;

/// Quiet period that must elapse after the last keystroke before one
/// suggestion request is issued.
pub const SUGGEST_DEBOUNCE: Duration = Duration::from_millis(300);

/// What a keystroke did to the suggestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The quiet-period timer was (re)started for the new text.
    Pending,
    /// The text is empty: the suggestion list must be cleared immediately and
    /// no request issued.
    Clear,
}

/// The single pending suggestion timer.
///
/// Each keystroke cancels any pending deadline and restarts the quiet period;
/// `poll` fires at most once per quiet period, yielding the final text.
#[derive(Debug, Default)]
pub struct SuggestDebounce {
    pending: Option<(Instant, String)>,
}

impl SuggestDebounce {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn input(&mut self, text: &str, now: Instant) -> InputOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.pending = None;
            InputOutcome::Clear
        } else {
            self.pending = Some((now + SUGGEST_DEBOUNCE, trimmed.to_string()));
            InputOutcome::Pending
        }
    }

    /// Cancels the pending deadline without firing, e.g. when a suggestion is
    /// selected and the debounce is bypassed.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Fires the deadline if the quiet period has elapsed, returning the text
    /// to request suggestions for.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, text)| text),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Monotonic sequence numbers for suggestion requests.
///
/// A late response for a superseded request must not overwrite a newer list;
/// only the most recently issued sequence number is accepted on completion.
#[derive(Debug, Default)]
pub struct SuggestSession {
    next_seq: u64,
    latest: Option<u64>,
}

impl SuggestSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags a new request, superseding any in flight.
    pub fn begin(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest = Some(seq);
        seq
    }

    /// Whether a completed request is still current.
    pub fn accept(&self, seq: u64) -> bool {
        self.latest == Some(seq)
    }

    /// Drops any in-flight request, e.g. after the list was force-cleared by
    /// empty input or a selection.
    pub fn invalidate(&mut self) {
        self.latest = None;
    }
}

/// The visible suggestion list and its highlight cursor.
///
/// Replacing the items resets the highlight; nothing is highlighted until the
/// user moves onto the list.
#[derive(Debug, Default)]
pub struct SuggestionPanel {
    items: Vec<Suggestion>,
    cursor: Option<usize>,
}

impl SuggestionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_items(&mut self, items: Vec<Suggestion>) {
        self.items = items;
        self.cursor = None;
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = None;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Moves the highlight down, entering the list at the top. `visible`
    /// bounds the highlight to the rows actually shown.
    pub fn move_down(&mut self, visible: usize) {
        if self.items.is_empty() {
            return;
        }
        let limit = self.items.len().min(visible.max(1));
        self.cursor = Some(match self.cursor {
            Some(cursor) => (cursor + 1).min(limit - 1),
            None => 0,
        });
    }

    /// Moves the highlight up; moving up from the first row leaves the list
    /// (nothing highlighted).
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.and_then(|c| c.checked_sub(1));
    }

    /// Accepts the highlighted suggestion: the list empties, any pending
    /// debounce deadline is dropped, in-flight suggestion requests are
    /// invalidated, and the chosen text is returned so the caller can fill
    /// the query and search immediately. With no highlight this is a no-op.
    pub fn select(
        &mut self,
        debounce: &mut SuggestDebounce,
        session: &mut SuggestSession,
    ) -> Option<String> {
        let cursor = self.cursor?;
        let text = self.items.get(cursor)?.text.clone();
        self.clear();
        debounce.cancel();
        session.invalidate();
        Some(text)
    }
}
