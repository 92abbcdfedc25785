use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A labeled, colored period shown on the calendar ("exam season",
/// "marathon prep"). Both endpoints are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: Uuid,
    pub user_id: String,
    pub label: String,
    pub description: Option<String>,
    /// `#RRGGBB`
    pub color: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("theme ends before it starts ({end} < {start})")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("\"{0}\" is not a #RRGGBB color")]
    InvalidColor(String),
}

impl Theme {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether this theme's period intersects `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }

    /// Checked when the theme editor saves.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.end_date < self.start_date {
            return Err(ThemeError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        let hex = self.color.strip_prefix('#').unwrap_or("");
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidColor(self.color.clone()));
        }
        Ok(())
    }
}
