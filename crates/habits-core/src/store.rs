//! The `HabitStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `habits-store-sqlite`).
//! Higher layers (`habits-api`, `habits-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
  day::{DaySummary, DayView, ToggleOutcome},
  habit::{Habit, NewHabit},
};

/// Abstraction over a habit store backend.
///
/// Habits are immutable once created; the only mutation is the completion
/// toggle, which flips a single `(day, habit)` record on or off.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait HabitStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Atomically persist a habit and one association row per week-day.
  ///
  /// `created_on` is the habit's day-granular creation date; callers pass
  /// the server clock's current day.
  fn create_habit(
    &self,
    input: NewHabit,
    created_on: NaiveDate,
  ) -> impl Future<Output = Result<Habit, Self::Error>> + Send + '_;

  /// Retrieve a habit and its week-day set. Returns `None` if not found.
  fn get_habit(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Habit>, Self::Error>> + Send + '_;

  /// Compute the possible and completed habit sets for `date`.
  ///
  /// If no `Day` row exists for `date`, `completed_habits` is empty rather
  /// than an error.
  fn day_view(
    &self,
    date: NaiveDate,
  ) -> impl Future<Output = Result<DayView, Self::Error>> + Send + '_;

  /// Flip the completion record for `(date, habit_id)`.
  ///
  /// Creates the `Day` row for `date` if absent (idempotent under
  /// concurrent first-toggle races; the unique index on the date column is
  /// authoritative). Fails if the habit does not exist. No check is made
  /// that the habit is scheduled for `date`.
  fn toggle_completion(
    &self,
    habit_id: Uuid,
    date: NaiveDate,
  ) -> impl Future<Output = Result<ToggleOutcome, Self::Error>> + Send + '_;

  /// Per-day counts of completed vs. possible habits over the entire
  /// history, ordered by date.
  fn summary(
    &self,
  ) -> impl Future<Output = Result<Vec<DaySummary>, Self::Error>> + Send + '_;
}
