use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One journal entry for one day. Content arrives here already decrypted;
/// the store layer owns encryption at rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub date: NaiveDate,
    pub content: String,
    pub last_modified: NaiveDateTime,
}

impl Note {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            content: String::new(),
            last_modified: chrono::Local::now().naive_local(),
        }
    }

    /// Replace the content and bump the modified stamp.
    pub fn edit(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.last_modified = chrono::Local::now().naive_local();
    }
}
