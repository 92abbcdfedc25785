use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recurrence::Recurrence;

/// A recurring task, scoped to a single user.
///
/// `start_date` anchors the recurrence rule; editing it re-anchors the rule
/// from the new value, it does not replay history. Milestone texts describe
/// what half and full completion mean for this task, shown next to the
/// progress toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub user_id: String,
    pub label: String,
    pub recurrence: Recurrence,
    pub start_date: NaiveDate,
    pub milestone_half: Option<String>,
    pub milestone_full: Option<String>,
}

impl Task {
    pub fn new(
        user_id: impl Into<String>,
        label: impl Into<String>,
        recurrence: Recurrence,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            label: label.into(),
            recurrence,
            start_date,
            milestone_half: None,
            milestone_full: None,
        }
    }

    /// Whether this task is scheduled on `date`. Never true before the
    /// start date.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.recurrence.matches(self.start_date, date)
    }

    /// Same check for a timestamp: the time of day is discarded first, so a
    /// moment just past midnight lands on the calendar day it belongs to.
    pub fn is_due_at(&self, moment: NaiveDateTime) -> bool {
        self.is_due_on(moment.date())
    }
}
