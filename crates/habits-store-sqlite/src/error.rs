//! Error type for `habits-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] habits_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  #[error("week-day column out of range: {0}")]
  WeekdayColumn(i64),

  /// Attempted to toggle a habit that was not found.
  #[error("habit not found: {0}")]
  HabitNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
