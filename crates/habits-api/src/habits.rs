//! Handlers for `/habits` endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `POST`  | `/habits` | Body: `{"title":"...","weekDays":[0..6]}`; 201, empty body |
//! | `PATCH` | `/habits/:id/toggle` | Flips today's completion; 204, empty body |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use chrono::Utc;
use habits_core::{habit::NewHabit, store::HabitStore};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── Create ──────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /habits`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitBody {
  pub title:     String,
  /// Week-day integers, 0-6, Sunday = 0.
  pub week_days: Vec<u8>,
}

/// `POST /habits` — validates before any store access, then persists the
/// habit with `created_on` set to the server clock's current day.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateHabitBody>,
) -> Result<StatusCode, ApiError>
where
  S: HabitStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = NewHabit::new(body.title, &body.week_days)
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  store
    .create_habit(input, Utc::now().date_naive())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(StatusCode::CREATED)
}

// ─── Toggle ──────────────────────────────────────────────────────────────────

/// `PATCH /habits/:id/toggle` — always targets the current day, never an
/// arbitrary historical date. 404 if the habit does not exist.
pub async fn toggle<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: HabitStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .get_habit(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("habit {id} not found")))?;

  let today = Utc::now().date_naive();
  store
    .toggle_completion(id, today)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(StatusCode::NO_CONTENT)
}
