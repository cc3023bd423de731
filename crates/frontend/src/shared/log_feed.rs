use contracts::shared::logger::{LogEntry, LogFeed, Severity};
use leptos::prelude::*;

/// Reactive handle on the page's log feed.
///
/// Every user-visible event goes through here; the log panel renders
/// whatever the feed holds.
#[derive(Clone, Copy)]
pub struct ConsoleLog {
    feed: RwSignal<LogFeed>,
}

impl ConsoleLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            feed: RwSignal::new(LogFeed::new(capacity)),
        }
    }

    pub fn push(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        log::debug!("[{}] {}", severity.as_str(), message);
        self.feed.update(|feed| {
            feed.push(message, severity);
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(message, Severity::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message, Severity::Success);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(message, Severity::Warning);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, Severity::Error);
    }

    /// Empties the feed, then records that it was cleared.
    pub fn clear(&self) {
        self.feed.update(LogFeed::clear);
        self.info("Log cleared");
    }

    /// Tracked snapshot for rendering
    pub fn entries(&self) -> Vec<LogEntry> {
        self.feed.with(|feed| feed.entries().cloned().collect())
    }

    pub fn entries_untracked(&self) -> Vec<LogEntry> {
        self.feed
            .with_untracked(|feed| feed.entries().cloned().collect())
    }

    pub fn len_untracked(&self) -> usize {
        self.feed.with_untracked(LogFeed::len)
    }

    pub fn count_untracked(&self, severity: Severity) -> usize {
        self.feed.with_untracked(|feed| feed.count(severity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_leaves_one_info_entry() {
        let log = ConsoleLog::new(10);
        log.error("boom");
        log.success("ok");
        log.clear();
        let entries = log.entries_untracked();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Info);
    }

    #[test]
    fn test_capacity_applies() {
        let log = ConsoleLog::new(2);
        log.info("a");
        log.warning("b");
        log.error("c");
        let messages: Vec<_> = log
            .entries_untracked()
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(messages, vec!["b", "c"]);
    }
}
