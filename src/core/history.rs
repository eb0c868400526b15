//! Transition history tracking.
//!
//! The machine records every successful transition with the time it
//! happened. History is bounded: once the limit is reached the oldest
//! record is dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single successful transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left, `None` for the first transition.
    pub from: Option<String>,
    /// The state being entered
    pub to: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of transitions.
///
/// # Example
///
/// ```rust
/// use framestate::{TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = TransitionHistory::with_limit(8);
/// history.record(TransitionRecord {
///     from: None,
///     to: "menu".to_string(),
///     timestamp: Utc::now(),
/// });
/// history.record(TransitionRecord {
///     from: Some("menu".to_string()),
///     to: "playing".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec!["menu", "playing"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
    limit: usize,
}

impl TransitionHistory {
    /// Create an empty history keeping at most `limit` records.
    /// A limit of zero records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit.min(256)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn record(&mut self, record: TransitionRecord) {
        if self.limit == 0 {
            return;
        }
        while self.records.len() >= self.limit {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    /// Iterate records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    /// Names of the states traversed.
    ///
    /// Starts with the `from` of the oldest retained record (when there is
    /// one), followed by the `to` of every record.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(from) = self.records.front().and_then(|r| r.from.as_deref()) {
            path.push(from);
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Time between the oldest and newest retained record.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.front(), self.records.back()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn record(from: Option<&str>, to: &str, timestamp: DateTime<Utc>) -> TransitionRecord {
        TransitionRecord {
            from: from.map(str::to_string),
            to: to.to_string(),
            timestamp,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = TransitionHistory::with_limit(4);
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn path_starts_with_first_source() {
        let now = Utc::now();
        let mut history = TransitionHistory::with_limit(4);
        history.record(record(Some("menu"), "playing", now));
        history.record(record(Some("playing"), "paused", now));

        assert_eq!(history.path(), vec!["menu", "playing", "paused"]);
    }

    #[test]
    fn first_transition_has_no_source() {
        let mut history = TransitionHistory::with_limit(4);
        history.record(record(None, "menu", Utc::now()));

        assert_eq!(history.path(), vec!["menu"]);
        assert_eq!(history.last().unwrap().from, None);
    }

    #[test]
    fn oldest_records_are_evicted() {
        let now = Utc::now();
        let mut history = TransitionHistory::with_limit(2);
        history.record(record(None, "a", now));
        history.record(record(Some("a"), "b", now));
        history.record(record(Some("b"), "c", now));

        assert_eq!(history.len(), 2);
        assert_eq!(history.path(), vec!["a", "b", "c"]);
        assert_eq!(history.iter().next().unwrap().to, "b");
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut history = TransitionHistory::with_limit(0);
        history.record(record(None, "a", Utc::now()));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let end = start + ChronoDuration::milliseconds(250);
        let mut history = TransitionHistory::with_limit(4);
        history.record(record(None, "a", start));
        history.record(record(Some("a"), "b", end));

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = TransitionHistory::with_limit(4);
        history.record(record(None, "menu", Utc::now()));

        let json = serde_json::to_string(&history).unwrap();
        let parsed: TransitionHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.limit(), 4);
        assert_eq!(parsed.last(), history.last());
    }

    #[test]
    fn clear_keeps_the_limit() {
        let mut history = TransitionHistory::with_limit(4);
        history.record(record(None, "a", Utc::now()));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.limit(), 4);
    }
}
