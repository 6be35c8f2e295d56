//! Habit — a recurring task scheduled on a fixed subset of week-days.
//!
//! A habit and its week-day set are created together and are immutable
//! thereafter. There are no update or delete operations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Weekday ─────────────────────────────────────────────────────────────────

/// A day of the week as an integer in `[0, 6]`, Sunday = 0.
///
/// Matches `chrono`'s `num_days_from_sunday` numbering and SQLite's
/// `strftime('%w', ...)`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

impl Weekday {
  pub fn index(self) -> u8 { self.0 }
}

impl TryFrom<u8> for Weekday {
  type Error = Error;

  fn try_from(value: u8) -> Result<Self> {
    if value <= 6 {
      Ok(Self(value))
    } else {
      Err(Error::InvalidWeekday(value))
    }
  }
}

impl From<Weekday> for u8 {
  fn from(w: Weekday) -> u8 { w.0 }
}

impl From<NaiveDate> for Weekday {
  fn from(date: NaiveDate) -> Self {
    // num_days_from_sunday is always in 0..=6.
    Self(date.weekday().num_days_from_sunday() as u8)
  }
}

// ─── Habit ───────────────────────────────────────────────────────────────────

/// A persisted habit with its schedule.
///
/// `created_on` is day-granular: habits never apply retroactively before
/// their own creation day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
  pub habit_id:   Uuid,
  pub title:      String,
  pub created_on: NaiveDate,
  /// Sorted, deduplicated.
  pub week_days:  Vec<Weekday>,
}

impl Habit {
  /// Whether this habit is scheduled ("possible") on `date`: the date's
  /// week-day is in the set and the habit already existed on that day.
  pub fn is_possible_on(&self, date: NaiveDate) -> bool {
    self.created_on <= date && self.week_days.contains(&Weekday::from(date))
  }
}

// ─── NewHabit ────────────────────────────────────────────────────────────────

/// Validated input for habit creation.
#[derive(Debug, Clone)]
pub struct NewHabit {
  pub title:     String,
  pub week_days: Vec<Weekday>,
}

impl NewHabit {
  /// Validate a raw title and week-day list.
  ///
  /// The title must be non-empty after trimming; every week-day must be in
  /// `[0, 6]`. Duplicate week-days are collapsed to a single entry.
  pub fn new(title: impl Into<String>, week_days: &[u8]) -> Result<Self> {
    let title = title.into();
    if title.trim().is_empty() {
      return Err(Error::EmptyTitle);
    }

    let mut week_days = week_days
      .iter()
      .map(|&raw| Weekday::try_from(raw))
      .collect::<Result<Vec<_>>>()?;
    week_days.sort();
    week_days.dedup();

    Ok(Self { title, week_days })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn weekday_rejects_out_of_range() {
    assert!(Weekday::try_from(6).is_ok());
    assert!(matches!(Weekday::try_from(7), Err(Error::InvalidWeekday(7))));
  }

  #[test]
  fn weekday_from_date_is_sunday_zero() {
    // 2023-01-15 was a Sunday.
    assert_eq!(Weekday::from(date(2023, 1, 15)).index(), 0);
    assert_eq!(Weekday::from(date(2023, 1, 16)).index(), 1);
  }

  #[test]
  fn new_habit_rejects_blank_title() {
    assert!(matches!(NewHabit::new("  ", &[1]), Err(Error::EmptyTitle)));
  }

  #[test]
  fn new_habit_dedupes_and_sorts_week_days() {
    let input = NewHabit::new("Drink water", &[5, 1, 3, 1]).unwrap();
    let days: Vec<u8> = input.week_days.iter().map(|w| w.index()).collect();
    assert_eq!(days, vec![1, 3, 5]);
  }

  #[test]
  fn possible_requires_week_day_match_and_prior_creation() {
    let habit = Habit {
      habit_id:   Uuid::new_v4(),
      title:      "Drink water".into(),
      created_on: date(2023, 1, 16), // a Monday
      week_days:  vec![Weekday::try_from(1).unwrap()],
    };

    // Scheduled week-day, on the creation day itself.
    assert!(habit.is_possible_on(date(2023, 1, 16)));
    // Scheduled week-day, a later week.
    assert!(habit.is_possible_on(date(2023, 1, 23)));
    // Matching week-day but before creation.
    assert!(!habit.is_possible_on(date(2023, 1, 9)));
    // After creation but wrong week-day (a Tuesday).
    assert!(!habit.is_possible_on(date(2023, 1, 17)));
  }
}
