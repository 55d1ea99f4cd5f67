//! Command history and recall
//!
//! `CommandHistory` keeps submitted lines oldest-first with a retention cap.
//! `HistoryCursor` is the Up/Down recall position; it is independent of the
//! focused module and is reset after every submission.

use std::collections::VecDeque;

/// Default number of entries kept (same bound the REPL history uses in memory)
pub const DEFAULT_HISTORY_CAP: usize = 1000;

/// Submitted command lines, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    cap: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::with_cap(DEFAULT_HISTORY_CAP)
    }
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history holding at most `cap` entries (minimum 1)
    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap: cap.max(1),
        }
    }

    /// Build from stored entries, keeping only the newest `cap`
    pub fn from_entries<I>(entries: I, cap: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut history = Self::with_cap(cap);
        for entry in entries {
            history.push(entry);
        }
        history
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Append an entry, evicting the oldest ones past the cap
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());
        while self.entries.len() > self.cap {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Entries oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(String::as_str)
    }

    /// The last `n` entries, most recent first
    pub fn recent(&self, n: usize) -> Vec<&str> {
        self.iter().rev().take(n).collect()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

/// Recall position while browsing history with Up/Down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryCursor {
    /// None = not browsing, Some(i) = showing history entry i
    index: Option<usize>,
}

impl HistoryCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_browsing(&self) -> bool {
        self.index.is_some()
    }

    /// Stop browsing (after a submission or when history is cleared)
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Step one entry older. Returns the entry to show, or None if history is empty.
    pub fn older<'h>(&mut self, history: &'h CommandHistory) -> Option<&'h str> {
        if history.is_empty() {
            return None;
        }
        let next = match self.index {
            None => history.len() - 1,
            // Already at oldest entry
            Some(idx) => idx.saturating_sub(1).min(history.len() - 1),
        };
        self.index = Some(next);
        history.get(next)
    }

    /// Step one entry newer. Past the newest entry the draft becomes empty.
    pub fn newer<'h>(&mut self, history: &'h CommandHistory) -> Option<&'h str> {
        if history.is_empty() {
            self.index = None;
            return None;
        }
        match self.index {
            Some(idx) if idx + 1 < history.len() => {
                self.index = Some(idx + 1);
                history.get(idx + 1)
            }
            _ => {
                self.index = None;
                Some("")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> CommandHistory {
        CommandHistory::from_entries(["a", "b", "c"].map(String::from), 10)
    }

    #[test]
    fn test_push_keeps_order() {
        let history = abc();
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut history = CommandHistory::with_cap(2);
        history.push("one");
        history.push("two");
        history.push("three");
        assert_eq!(history.to_vec(), vec!["two", "three"]);
    }

    #[test]
    fn test_zero_cap_is_clamped() {
        let mut history = CommandHistory::with_cap(0);
        history.push("only");
        assert_eq!(history.cap(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_recent_most_recent_first() {
        let history = CommandHistory::from_entries((1..=8).map(|i| i.to_string()), 100);
        assert_eq!(history.recent(6), vec!["8", "7", "6", "5", "4", "3"]);
        assert_eq!(abc().recent(6), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_no_deduplication() {
        let mut history = CommandHistory::new();
        history.push("ls");
        history.push("ls");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_cursor_walk() {
        let history = abc();
        let mut cursor = HistoryCursor::new();
        assert_eq!(cursor.older(&history), Some("c"));
        assert_eq!(cursor.older(&history), Some("b"));
        assert_eq!(cursor.newer(&history), Some("c"));
        assert_eq!(cursor.newer(&history), Some(""));
        assert!(!cursor.is_browsing());
    }

    #[test]
    fn test_cursor_bounded_at_oldest() {
        let history = abc();
        let mut cursor = HistoryCursor::new();
        cursor.older(&history);
        cursor.older(&history);
        assert_eq!(cursor.older(&history), Some("a"));
        assert_eq!(cursor.older(&history), Some("a"));
    }

    #[test]
    fn test_cursor_newer_when_idle_gives_empty_draft() {
        let history = abc();
        let mut cursor = HistoryCursor::new();
        assert_eq!(cursor.newer(&history), Some(""));
        assert!(!cursor.is_browsing());
    }

    #[test]
    fn test_cursor_on_empty_history() {
        let history = CommandHistory::new();
        let mut cursor = HistoryCursor::new();
        assert_eq!(cursor.older(&history), None);
        assert_eq!(cursor.newer(&history), None);
    }

    #[test]
    fn test_cursor_survives_history_shrink() {
        let mut history = abc();
        let mut cursor = HistoryCursor::new();
        cursor.older(&history);
        history.clear();
        history.push("z");
        assert_eq!(cursor.older(&history), Some("z"));
    }
}
