use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a task repeats.
///
/// - Daily: every day from the start date
/// - EveryNDays: every `interval` days counted from the start date
/// - Weekly: on fixed weekdays (0 = Sunday .. 6 = Saturday)
/// - Monthly: on a fixed day of the month, no end-of-month clamping
///
/// Serialized as a tagged union so it round-trips against the documents the
/// store already holds (`{"type": "every_x_days", "days": 3}` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recurrence {
    Daily,
    #[serde(rename = "every_x_days")]
    EveryNDays {
        #[serde(rename = "days")]
        interval: u32,
    },
    Weekly {
        days: Vec<u8>,
    },
    Monthly {
        day: u32,
    },
}

/// Rejected rule shapes, checked when a task edit is saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecurrenceError {
    #[error("interval must be at least 2 days (got {0}); use daily instead")]
    IntervalTooShort(u32),
    #[error("weekly recurrence needs at least one weekday")]
    NoWeekdays,
    #[error("weekday {0} is out of range (0 = Sunday .. 6 = Saturday)")]
    WeekdayOutOfRange(u8),
    #[error("day of month {0} is out of range (1..=31)")]
    DayOfMonthOutOfRange(u32),
}

impl Recurrence {
    /// Whether a task starting on `start` repeats onto `date`.
    ///
    /// Total: malformed rules (zero interval, empty weekday set) evaluate to
    /// false rather than failing, since old documents may predate validation.
    /// Never due strictly before `start`.
    pub fn matches(&self, start: NaiveDate, date: NaiveDate) -> bool {
        if date < start {
            return false;
        }
        let day_diff = (date - start).num_days();

        match self {
            Self::Daily => true,
            Self::EveryNDays { interval } => {
                if *interval == 0 {
                    log::debug!("recurrence with zero-day interval never matches");
                    return false;
                }
                day_diff % i64::from(*interval) == 0
            }
            Self::Weekly { days } => {
                let weekday = date.weekday().num_days_from_sunday() as u8;
                days.contains(&weekday)
            }
            Self::Monthly { day } => date.day() == *day,
        }
    }

    /// Validate a rule before it is written to the store.
    ///
    /// An interval of 1 is rejected even though evaluation would treat it as
    /// daily; the editor offers Daily for that, and a single encoding per
    /// schedule keeps stored documents comparable.
    pub fn validate(&self) -> Result<(), RecurrenceError> {
        match self {
            Self::Daily => Ok(()),
            Self::EveryNDays { interval } => {
                if *interval < 2 {
                    Err(RecurrenceError::IntervalTooShort(*interval))
                } else {
                    Ok(())
                }
            }
            Self::Weekly { days } => {
                if days.is_empty() {
                    return Err(RecurrenceError::NoWeekdays);
                }
                if let Some(&bad) = days.iter().find(|d| **d > 6) {
                    return Err(RecurrenceError::WeekdayOutOfRange(bad));
                }
                Ok(())
            }
            Self::Monthly { day } => {
                if (1..=31).contains(day) {
                    Ok(())
                } else {
                    Err(RecurrenceError::DayOfMonthOutOfRange(*day))
                }
            }
        }
    }
}
