use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-task, per-day completion state.
///
/// Ordered: None < Half < Full.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskProgress {
    #[default]
    None,
    Half,
    Full,
}

impl TaskProgress {
    /// Cyclic successor, the order the toggle control steps through.
    pub fn advance(self) -> Self {
        match self {
            Self::None => Self::Half,
            Self::Half => Self::Full,
            Self::Full => Self::None,
        }
    }

    /// Weight this state contributes to a day's completion percentage.
    pub fn score(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Half => 0.5,
            Self::Full => 1.0,
        }
    }
}

/// One persisted progress record: a user's state for one task on one day.
///
/// The store keeps at most one live document per `(date, task)` key and
/// overwrites on each toggle; there is no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressLog {
    pub id: String,
    pub user_id: String,
    pub task_id: Uuid,
    pub date: NaiveDate,
    pub progress: TaskProgress,
}

impl ProgressLog {
    pub fn new(
        user_id: impl Into<String>,
        task_id: Uuid,
        date: NaiveDate,
        progress: TaskProgress,
    ) -> Self {
        Self {
            id: Self::key(date, task_id),
            user_id: user_id.into(),
            task_id,
            date,
            progress,
        }
    }

    /// Store document id for a `(date, task)` pair, e.g. `2024-01-15_<uuid>`.
    pub fn key(date: NaiveDate, task_id: Uuid) -> String {
        format!("{}_{}", date.format("%Y-%m-%d"), task_id)
    }
}

/// In-memory index of progress by date and task, built from a store snapshot.
///
/// Callers own this and pass it into the aggregation functions; the core
/// keeps no progress state of its own. Lookups for unrecorded pairs yield
/// `TaskProgress::None`, and recorded values survive recurrence edits — a
/// rule change never drops a log.
#[derive(Debug, Clone, Default)]
pub struct ProgressSnapshot {
    by_date: HashMap<NaiveDate, HashMap<Uuid, TaskProgress>>,
}

impl ProgressSnapshot {
    /// Index a slice of logs. Later entries win on duplicate keys, matching
    /// the store's overwrite-on-toggle behavior.
    pub fn from_logs(logs: &[ProgressLog]) -> Self {
        let mut snapshot = Self::default();
        for log in logs {
            snapshot.record(log.date, log.task_id, log.progress);
        }
        log::debug!(
            "indexed {} progress logs across {} days",
            logs.len(),
            snapshot.by_date.len()
        );
        snapshot
    }

    pub fn record(&mut self, date: NaiveDate, task_id: Uuid, progress: TaskProgress) {
        self.by_date.entry(date).or_default().insert(task_id, progress);
    }

    pub fn get(&self, date: NaiveDate, task_id: Uuid) -> TaskProgress {
        self.by_date
            .get(&date)
            .and_then(|day| day.get(&task_id))
            .copied()
            .unwrap_or_default()
    }

    /// All recorded progress for one day, if any.
    pub fn for_date(&self, date: NaiveDate) -> Option<&HashMap<Uuid, TaskProgress>> {
        self.by_date.get(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn advance_is_a_three_cycle() {
        assert_eq!(TaskProgress::None.advance(), TaskProgress::Half);
        assert_eq!(TaskProgress::Half.advance(), TaskProgress::Full);
        assert_eq!(TaskProgress::Full.advance(), TaskProgress::None);
        assert_eq!(
            TaskProgress::None.advance().advance().advance(),
            TaskProgress::None
        );
    }

    #[test]
    fn ordering_none_half_full() {
        assert!(TaskProgress::None < TaskProgress::Half);
        assert!(TaskProgress::Half < TaskProgress::Full);
    }

    #[test]
    fn log_key_format() {
        let task_id = Uuid::nil();
        assert_eq!(
            ProgressLog::key(d(2024, 1, 15), task_id),
            format!("2024-01-15_{task_id}")
        );
    }

    #[test]
    fn snapshot_defaults_to_none() {
        let snapshot = ProgressSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.get(d(2024, 1, 1), Uuid::new_v4()), TaskProgress::None);
    }

    #[test]
    fn snapshot_last_write_wins() {
        let task_id = Uuid::new_v4();
        let logs = vec![
            ProgressLog::new("u", task_id, d(2024, 1, 1), TaskProgress::Half),
            ProgressLog::new("u", task_id, d(2024, 1, 1), TaskProgress::Full),
        ];
        let snapshot = ProgressSnapshot::from_logs(&logs);
        assert_eq!(snapshot.get(d(2024, 1, 1), task_id), TaskProgress::Full);
    }

    #[test]
    fn snapshot_keys_by_date_and_task() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let logs = vec![
            ProgressLog::new("u", a, d(2024, 1, 1), TaskProgress::Full),
            ProgressLog::new("u", b, d(2024, 1, 2), TaskProgress::Half),
        ];
        let snapshot = ProgressSnapshot::from_logs(&logs);
        assert_eq!(snapshot.get(d(2024, 1, 1), a), TaskProgress::Full);
        assert_eq!(snapshot.get(d(2024, 1, 1), b), TaskProgress::None);
        assert_eq!(snapshot.get(d(2024, 1, 2), b), TaskProgress::Half);
    }

    #[test]
    fn serde_lowercase_states() {
        assert_eq!(serde_json::to_string(&TaskProgress::Half).unwrap(), r#""half""#);
        let p: TaskProgress = serde_json::from_str(r#""full""#).unwrap();
        assert_eq!(p, TaskProgress::Full);
    }
}
