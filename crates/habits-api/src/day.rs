//! Handler for `GET /day` — the possible-vs-completed view for one date.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use chrono::{DateTime, NaiveDate};
use habits_core::{habit::Habit, store::HabitStore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct DayParams {
  /// `YYYY-MM-DD`, or an RFC 3339 datetime whose time-of-day is discarded.
  pub date: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResponse {
  pub possible_habits:  Vec<Habit>,
  pub completed_habits: Vec<Uuid>,
}

/// Normalise the `date` query value to a calendar date.
fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
  if let Ok(date) = raw.parse::<NaiveDate>() {
    return Ok(date);
  }
  DateTime::parse_from_rfc3339(raw)
    .map(|dt| dt.date_naive())
    .map_err(|_| ApiError::BadRequest(format!("unparseable date: {raw:?}")))
}

/// `GET /day?date=<date>`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<DayParams>,
) -> Result<Json<DayResponse>, ApiError>
where
  S: HabitStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let date = parse_date(&params.date)?;

  let view = store
    .day_view(date)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(DayResponse {
    possible_habits:  view.possible_habits,
    completed_habits: view.completed_habits,
  }))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_plain_date() {
    assert_eq!(
      parse_date("2023-01-16").unwrap(),
      NaiveDate::from_ymd_opt(2023, 1, 16).unwrap()
    );
  }

  #[test]
  fn discards_time_of_day() {
    assert_eq!(
      parse_date("2023-01-16T23:59:59Z").unwrap(),
      NaiveDate::from_ymd_opt(2023, 1, 16).unwrap()
    );
  }

  #[test]
  fn rejects_garbage() {
    assert!(parse_date("yesterday").is_err());
  }
}
