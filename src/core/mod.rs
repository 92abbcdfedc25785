pub mod note;
pub mod progress;
pub mod recurrence;
pub mod summary;
pub mod task;
pub mod theme;
