use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use super::progress::{ProgressSnapshot, TaskProgress};
use super::task::Task;

/// Tasks scheduled on `date`, in input order. Every calendar surface applies
/// this filter before rendering or scoring a day.
pub fn due_tasks_for_date<'a>(tasks: &'a [Task], date: NaiveDate) -> Vec<&'a Task> {
    tasks.iter().filter(|t| t.is_due_on(date)).collect()
}

/// Mean completion of the due tasks, as a percentage in `[0.0, 100.0]`.
///
/// `None` means no tasks were scheduled that day, which the heat-map renders
/// differently from an unproductive 0%. Tasks without a recorded state count
/// as `TaskProgress::None`. The result is real-valued; callers round for
/// display only.
pub fn completion_percentage(
    due_tasks: &[&Task],
    progress: &HashMap<Uuid, TaskProgress>,
) -> Option<f64> {
    if due_tasks.is_empty() {
        return None;
    }
    let total: f64 = due_tasks
        .iter()
        .map(|task| progress.get(&task.id).copied().unwrap_or_default().score())
        .sum();
    Some(total / due_tasks.len() as f64 * 100.0)
}

/// Everything a calendar cell needs to render one day.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub due_tasks: Vec<Task>,
    /// `None` when nothing was scheduled.
    pub completion: Option<f64>,
}

impl DaySummary {
    pub fn build(tasks: &[Task], progress: &ProgressSnapshot, date: NaiveDate) -> Self {
        let due: Vec<&Task> = due_tasks_for_date(tasks, date);
        let completion = match progress.for_date(date) {
            Some(day) => completion_percentage(&due, day),
            // No logs for the day: every due task scores zero.
            None => completion_percentage(&due, &HashMap::new()),
        };
        Self {
            date,
            due_tasks: due.into_iter().cloned().collect(),
            completion,
        }
    }
}
