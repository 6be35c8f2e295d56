//! [`SqliteStore`] — the SQLite implementation of [`HabitStore`].

use std::path::Path;

use chrono::NaiveDate;
use habits_core::{
  day::{DaySummary, DayView, ToggleOutcome},
  habit::{Habit, NewHabit, Weekday},
  store::HabitStore,
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{RawHabit, RawSummary, decode_uuid, encode_date, encode_uuid},
  schema::SCHEMA,
};

// ─── SQL ─────────────────────────────────────────────────────────────────────

/// Per-day counts, each computed as an independent scalar subquery.
///
/// A join across days × completions × habit_week_days would multiply rows
/// per matching week-day association and double-count; the two subqueries
/// keep `completed` and `amount` independent of each other.
const SUMMARY_SQL: &str = "
  SELECT
    d.day_id,
    d.date,
    (
      SELECT count(*)
      FROM completions c
      WHERE c.day_id = d.day_id
    ) AS completed,
    (
      SELECT count(*)
      FROM habit_week_days w
      INNER JOIN habits h ON h.habit_id = w.habit_id
      WHERE w.week_day = CAST(strftime('%w', d.date) AS INTEGER)
        AND h.created_on <= d.date
    ) AS amount
  FROM days d
  ORDER BY d.date";

/// Habits scheduled for a week-day and created on or before a date.
const POSSIBLE_HABITS_SQL: &str = "
  SELECT h.habit_id, h.title, h.created_on
  FROM habits h
  WHERE h.created_on <= ?1
    AND EXISTS (
      SELECT 1 FROM habit_week_days w
      WHERE w.habit_id = h.habit_id AND w.week_day = ?2
    )";

const WEEK_DAYS_SQL: &str = "
  SELECT week_day FROM habit_week_days
  WHERE habit_id = ?1
  ORDER BY week_day";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A habit store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── HabitStore impl ─────────────────────────────────────────────────────────

impl HabitStore for SqliteStore {
  type Error = Error;

  async fn create_habit(
    &self,
    input: NewHabit,
    created_on: NaiveDate,
  ) -> Result<Habit> {
    let habit = Habit {
      habit_id: Uuid::new_v4(),
      title: input.title,
      created_on,
      week_days: input.week_days,
    };

    let id_str    = encode_uuid(habit.habit_id);
    let title     = habit.title.clone();
    let on_str    = encode_date(habit.created_on);
    let week_days = habit.week_days.clone();

    // One transaction: the habit row and its association rows land together
    // or not at all.
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO habits (habit_id, title, created_on) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, title, on_str],
        )?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO habit_week_days (habit_id, week_day) VALUES (?1, ?2)",
          )?;
          for week_day in &week_days {
            stmt.execute(rusqlite::params![id_str, week_day.index()])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(habit)
  }

  async fn get_habit(&self, id: Uuid) -> Result<Option<Habit>> {
    let id_str = encode_uuid(id);

    let raw: Option<(RawHabit, Vec<i64>)> = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(
            "SELECT habit_id, title, created_on FROM habits WHERE habit_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawHabit {
                habit_id:   row.get(0)?,
                title:      row.get(1)?,
                created_on: row.get(2)?,
              })
            },
          )
          .optional()?;

        let Some(raw) = raw else { return Ok(None) };

        let mut stmt = conn.prepare(WEEK_DAYS_SQL)?;
        let week_days = stmt
          .query_map(rusqlite::params![id_str], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<i64>>>()?;

        Ok(Some((raw, week_days)))
      })
      .await?;

    raw
      .map(|(raw, week_days)| raw.into_habit(week_days))
      .transpose()
  }

  async fn day_view(&self, date: NaiveDate) -> Result<DayView> {
    let date_str = encode_date(date);
    let week_day = Weekday::from(date).index();

    let (raw_habits, completed_strs): (Vec<(RawHabit, Vec<i64>)>, Vec<String>) =
      self
        .conn
        .call(move |conn| {
          let mut stmt = conn.prepare(POSSIBLE_HABITS_SQL)?;
          let raws = stmt
            .query_map(rusqlite::params![date_str, week_day], |row| {
              Ok(RawHabit {
                habit_id:   row.get(0)?,
                title:      row.get(1)?,
                created_on: row.get(2)?,
              })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

          let mut wd_stmt = conn.prepare(WEEK_DAYS_SQL)?;
          let mut habits = Vec::with_capacity(raws.len());
          for raw in raws {
            let week_days = wd_stmt
              .query_map(rusqlite::params![raw.habit_id], |row| row.get(0))?
              .collect::<rusqlite::Result<Vec<i64>>>()?;
            habits.push((raw, week_days));
          }

          // No Day row for the date simply yields zero rows here.
          let mut c_stmt = conn.prepare(
            "SELECT c.habit_id
             FROM completions c
             INNER JOIN days d ON d.day_id = c.day_id
             WHERE d.date = ?1",
          )?;
          let completed = c_stmt
            .query_map(rusqlite::params![date_str], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

          Ok((habits, completed))
        })
        .await?;

    let possible_habits = raw_habits
      .into_iter()
      .map(|(raw, week_days)| raw.into_habit(week_days))
      .collect::<Result<_>>()?;

    let completed_habits = completed_strs
      .iter()
      .map(|s| decode_uuid(s))
      .collect::<Result<_>>()?;

    Ok(DayView { possible_habits, completed_habits })
  }

  async fn toggle_completion(
    &self,
    habit_id: Uuid,
    date: NaiveDate,
  ) -> Result<ToggleOutcome> {
    let habit_id_str = encode_uuid(habit_id);
    let date_str     = encode_date(date);
    // Candidate id for the Day row; discarded if another caller won the
    // insert race.
    let day_id_str   = encode_uuid(Uuid::new_v4());

    // `None` means the habit row does not exist; `Some(true)` means a
    // completion record was created, `Some(false)` that one was deleted.
    let flipped_on: Option<bool> = self
      .conn
      .call(move |conn| {
        let exists: bool = conn
          .query_row(
            "SELECT 1 FROM habits WHERE habit_id = ?1",
            rusqlite::params![habit_id_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        if !exists {
          return Ok(None);
        }

        // Find-or-create the Day row. The unique index on date resolves
        // concurrent first-toggle races; losing the race is fine, the
        // SELECT below reads whichever row won.
        conn.execute(
          "INSERT INTO days (day_id, date) VALUES (?1, ?2)
           ON CONFLICT (date) DO NOTHING",
          rusqlite::params![day_id_str, date_str],
        )?;
        let day_id: String = conn.query_row(
          "SELECT day_id FROM days WHERE date = ?1",
          rusqlite::params![date_str],
          |row| row.get(0),
        )?;

        let completed: bool = conn
          .query_row(
            "SELECT 1 FROM completions WHERE day_id = ?1 AND habit_id = ?2",
            rusqlite::params![day_id, habit_id_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        if completed {
          conn.execute(
            "DELETE FROM completions WHERE day_id = ?1 AND habit_id = ?2",
            rusqlite::params![day_id, habit_id_str],
          )?;
          Ok(Some(false))
        } else {
          conn.execute(
            "INSERT INTO completions (day_id, habit_id) VALUES (?1, ?2)",
            rusqlite::params![day_id, habit_id_str],
          )?;
          Ok(Some(true))
        }
      })
      .await?;

    match flipped_on {
      None        => Err(Error::HabitNotFound(habit_id)),
      Some(true)  => Ok(ToggleOutcome::Completed),
      Some(false) => Ok(ToggleOutcome::Cleared),
    }
  }

  async fn summary(&self) -> Result<Vec<DaySummary>> {
    let raws: Vec<RawSummary> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(SUMMARY_SQL)?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSummary {
              day_id:    row.get(0)?,
              date:      row.get(1)?,
              completed: row.get(2)?,
              amount:    row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSummary::into_summary).collect()
  }
}
