//! Error types for `habits-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("habit not found: {0}")]
  HabitNotFound(Uuid),

  #[error("habit title must not be empty")]
  EmptyTitle,

  #[error("week-day out of range (expected 0-6, Sunday = 0): {0}")]
  InvalidWeekday(u8),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
