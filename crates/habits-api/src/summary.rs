//! Handler for `GET /summary` — historical per-day counts.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::NaiveDate;
use habits_core::{day::DaySummary, store::HabitStore};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;

/// One summary row on the wire.
#[derive(Debug, Serialize)]
pub struct SummaryRow {
  pub id:        Uuid,
  pub date:      NaiveDate,
  /// Completion records for the day.
  pub completed: u32,
  /// Habits possible on the day, independent of completion.
  pub amount:    u32,
}

impl From<DaySummary> for SummaryRow {
  fn from(s: DaySummary) -> Self {
    Self {
      id:        s.day_id,
      date:      s.date,
      completed: s.completed,
      amount:    s.amount,
    }
  }
}

/// `GET /summary`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<SummaryRow>>, ApiError>
where
  S: HabitStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let summary = store
    .summary()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(summary.into_iter().map(SummaryRow::from).collect()))
}
