//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` strings. UUIDs are stored as hyphenated
//! lowercase strings. Week-days are stored as plain integers.

use chrono::NaiveDate;
use habits_core::{
  day::DaySummary,
  habit::{Habit, Weekday},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  s.parse().map_err(|_| Error::DateParse(s.to_owned()))
}

// ─── Weekday ─────────────────────────────────────────────────────────────────

pub fn decode_weekday(raw: i64) -> Result<Weekday> {
  let value = u8::try_from(raw).map_err(|_| Error::WeekdayColumn(raw))?;
  Weekday::try_from(value).map_err(|_| Error::WeekdayColumn(raw))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `habits` row.
pub struct RawHabit {
  pub habit_id:   String,
  pub title:      String,
  pub created_on: String,
}

impl RawHabit {
  /// Combine with the habit's separately-fetched week-day rows.
  pub fn into_habit(self, week_days: Vec<i64>) -> Result<Habit> {
    Ok(Habit {
      habit_id:   decode_uuid(&self.habit_id)?,
      title:      self.title,
      created_on: decode_date(&self.created_on)?,
      week_days:  week_days
        .into_iter()
        .map(decode_weekday)
        .collect::<Result<_>>()?,
    })
  }
}

/// Raw values read from one row of the summary query.
pub struct RawSummary {
  pub day_id:    String,
  pub date:      String,
  pub completed: i64,
  pub amount:    i64,
}

impl RawSummary {
  pub fn into_summary(self) -> Result<DaySummary> {
    Ok(DaySummary {
      day_id:    decode_uuid(&self.day_id)?,
      date:      decode_date(&self.date)?,
      completed: self.completed as u32,
      amount:    self.amount as u32,
    })
  }
}
