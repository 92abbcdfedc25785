//! Domain model and scheduling logic for Quill, a personal journaling app.
//!
//! Quill's shell handles storage, auth, decryption, and rendering; this crate
//! is the pure part in between. The centerpiece is recurrence evaluation —
//! which tasks are due on which calendar day — plus the progress aggregation
//! and date-grid arithmetic the week/month/year views are built on. Nothing
//! here does I/O or keeps state: callers pass in fresh snapshots and get
//! values back.

pub mod calendar;
pub mod core;
