//! Debounced commit of rapid text edits.
//!
//! Title and explanation fields keep keystrokes in a local buffer and
//! propagate them upward only after a quiet period, so the editor state
//! (and anything watching it) is not churned on every keypress. Blur and
//! teardown flush immediately so the last keystroke is never lost.

use std::time::{Duration, Instant};

/// Default quiet period before a buffered edit is committed.
pub const DEFAULT_COMMIT_DELAY: Duration = Duration::from_millis(2500);

/// A text field with a local edit buffer and a timer-based commit.
///
/// Plain `drop` discards uncommitted keystrokes. Owners tearing a field
/// down call [`DebouncedField::flush`] first, or consume it with
/// [`DebouncedField::into_value`], which commits the buffer itself.
#[derive(Debug, Clone)]
pub struct DebouncedField {
    /// Last committed value.
    value: String,
    /// Live buffer holding uncommitted keystrokes.
    buffer: String,
    /// When the buffer last changed; `None` while clean.
    last_edit: Option<Instant>,
    delay: Duration,
}

impl DebouncedField {
    /// Create a clean field holding `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        let value = initial.into();
        Self {
            buffer: value.clone(),
            value,
            last_edit: None,
            delay: DEFAULT_COMMIT_DELAY,
        }
    }

    /// Create a field with a custom commit delay.
    pub fn with_delay(initial: impl Into<String>, delay: Duration) -> Self {
        let mut field = Self::new(initial);
        field.delay = delay;
        field
    }

    /// The live buffer (what the input renders).
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The last committed value (what the owner holds).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check for uncommitted keystrokes.
    pub fn is_dirty(&self) -> bool {
        self.last_edit.is_some()
    }

    /// Record a keystroke: replace the buffer and restart the timer.
    pub fn edit(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.buffer {
            return;
        }
        self.buffer = text;
        self.last_edit = Some(Instant::now());
    }

    /// Check if the quiet period has elapsed since the last keystroke.
    pub fn should_commit(&self) -> bool {
        match self.last_edit {
            Some(at) => at.elapsed() >= self.delay,
            None => false,
        }
    }

    /// Commit the buffer if the quiet period has elapsed. Returns the
    /// newly committed value when a commit happened.
    pub fn poll(&mut self) -> Option<&str> {
        if !self.should_commit() {
            return None;
        }
        self.commit()
    }

    /// Commit immediately regardless of the timer. Called on blur and on
    /// teardown. Returns the newly committed value, or `None` when the
    /// buffer was already clean.
    pub fn flush(&mut self) -> Option<&str> {
        if self.last_edit.is_none() {
            return None;
        }
        self.commit()
    }

    /// Consume the field, committing any buffered keystrokes first. The
    /// teardown path: returns the final value whether or not the quiet
    /// period elapsed.
    pub fn into_value(mut self) -> String {
        self.commit();
        self.value
    }

    /// Discard uncommitted keystrokes and restore the committed value.
    pub fn revert(&mut self) {
        self.buffer = self.value.clone();
        self.last_edit = None;
    }

    fn commit(&mut self) -> Option<&str> {
        self.last_edit = None;
        if self.buffer == self.value {
            return None;
        }
        self.value = self.buffer.clone();
        Some(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_buffer_without_committing() {
        let mut field = DebouncedField::new("Mood");
        field.edit("Mood today");

        assert_eq!(field.buffer(), "Mood today");
        assert_eq!(field.value(), "Mood");
        assert!(field.is_dirty());
        assert!(field.poll().is_none(), "quiet period has not elapsed");
    }

    #[test]
    fn test_poll_commits_after_quiet_period() {
        let mut field = DebouncedField::with_delay("", Duration::ZERO);
        field.edit("How did you sleep?");

        assert_eq!(field.poll(), Some("How did you sleep?"));
        assert_eq!(field.value(), "How did you sleep?");
        assert!(!field.is_dirty());
        assert!(field.poll().is_none(), "nothing left to commit");
    }

    #[test]
    fn test_flush_commits_immediately() {
        let mut field = DebouncedField::new("start");
        field.edit("start typing");

        // Blur before the window elapses must not lose the keystroke.
        assert_eq!(field.flush(), Some("start typing"));
        assert_eq!(field.value(), "start typing");
    }

    #[test]
    fn test_flush_when_clean_is_none() {
        let mut field = DebouncedField::new("stable");
        assert!(field.flush().is_none());

        // Editing back to the committed value commits nothing.
        field.edit("changed");
        field.edit("stable");
        assert!(field.flush().is_none());
        assert_eq!(field.value(), "stable");
    }

    #[test]
    fn test_into_value_commits_on_teardown() {
        let mut field = DebouncedField::new("Evening check-in");
        field.edit("Evening check-in, day 3");

        // Teardown before the window elapses still keeps the edit.
        assert_eq!(field.into_value(), "Evening check-in, day 3");

        let clean = DebouncedField::new("untouched");
        assert_eq!(clean.into_value(), "untouched");
    }

    #[test]
    fn test_revert_discards_buffer() {
        let mut field = DebouncedField::new("keep");
        field.edit("discard");
        field.revert();

        assert_eq!(field.buffer(), "keep");
        assert!(!field.is_dirty());
        assert!(field.flush().is_none());
    }
}
