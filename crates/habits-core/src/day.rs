//! Day records and the read models computed from them.
//!
//! A `Day` row exists only for dates that have seen at least one toggle; it
//! is created lazily on first toggle and never deleted, even when its last
//! completion record is removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::habit::Habit;

/// A persisted calendar date, keyed uniquely by `date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
  pub day_id: Uuid,
  pub date:   NaiveDate,
}

/// The result of a toggle: which edge of the state machine was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
  /// No completion record existed; one was created.
  Completed,
  /// A completion record existed; it was deleted.
  Cleared,
}

/// The computed view for a single date — never stored, always derived.
///
/// The two sets are independent: `completed_habits` comes from the date's
/// completion records alone and is empty when no `Day` row exists yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayView {
  /// Habits scheduled for this date's week-day and created on or before it.
  pub possible_habits: Vec<Habit>,
  /// Identities of habits with a completion record for this date.
  pub completed_habits: Vec<Uuid>,
}

/// One row of the historical summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
  pub day_id:    Uuid,
  pub date:      NaiveDate,
  /// Number of completion records for this day.
  pub completed: u32,
  /// Number of habits possible on this day, independent of completion.
  pub amount:    u32,
}
