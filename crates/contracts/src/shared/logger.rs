use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Retained entries for the banking console.
pub const BANKING_LOG_CAPACITY: usize = 1000;
/// Retained entries for the order console.
pub const ORDER_LOG_CAPACITY: usize = 100;

/// Severity of a console log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// CSS modifier used by the log panel and toasts
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "log-info",
            Severity::Success => "log-success",
            Severity::Warning => "log-warning",
            Severity::Error => "log-error",
        }
    }
}

/// One line of the on-page console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    /// ISO-8601, UTC
    pub timestamp: String,
    pub severity: Severity,
    pub message: String,
}

/// Insertion-ordered log capped at `capacity`; the oldest entry goes first.
#[derive(Debug, Clone, PartialEq)]
pub struct LogFeed {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogFeed {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(BANKING_LOG_CAPACITY)),
            capacity,
            next_id: 0,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> &LogEntry {
        self.push_at(message, severity, Utc::now())
    }

    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        at: DateTime<Utc>,
    ) -> &LogEntry {
        self.next_id += 1;
        self.entries.push_back(LogEntry {
            id: self.next_id,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            severity,
            message: message.into(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        // never empty right after a push
        &self.entries[self.entries.len() - 1]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|e| e.severity == severity).count()
    }
}

impl Default for LogFeed {
    fn default() -> Self {
        Self::new(BANKING_LOG_CAPACITY)
    }
}
