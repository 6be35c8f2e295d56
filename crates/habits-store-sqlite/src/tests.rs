//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use habits_core::{day::ToggleOutcome, habit::NewHabit, store::HabitStore};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// 2023-01-16 was a Monday.
fn monday() -> NaiveDate { date(2023, 1, 16) }
fn tuesday() -> NaiveDate { date(2023, 1, 17) }
fn next_monday() -> NaiveDate { date(2023, 1, 23) }

fn mon_wed_fri(title: &str) -> NewHabit {
  NewHabit::new(title, &[1, 3, 5]).unwrap()
}

// ─── Habits ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_habit() {
  let s = store().await;

  let habit = s
    .create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();
  assert_eq!(habit.title, "Drink water");
  assert_eq!(habit.created_on, monday());

  let fetched = s.get_habit(habit.habit_id).await.unwrap().unwrap();
  assert_eq!(fetched.habit_id, habit.habit_id);
  assert_eq!(fetched.title, "Drink water");
  let days: Vec<u8> = fetched.week_days.iter().map(|w| w.index()).collect();
  assert_eq!(days, vec![1, 3, 5]);
}

#[tokio::test]
async fn get_habit_missing_returns_none() {
  let s = store().await;
  let result = s.get_habit(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn duplicate_week_days_stored_once() {
  let s = store().await;

  let habit = s
    .create_habit(NewHabit::new("Stretch", &[2, 2, 4]).unwrap(), monday())
    .await
    .unwrap();

  let fetched = s.get_habit(habit.habit_id).await.unwrap().unwrap();
  let days: Vec<u8> = fetched.week_days.iter().map(|w| w.index()).collect();
  assert_eq!(days, vec![2, 4]);
}

// ─── Day view ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn day_view_includes_scheduled_habit() {
  let s = store().await;
  let habit = s
    .create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();

  let view = s.day_view(monday()).await.unwrap();
  assert_eq!(view.possible_habits.len(), 1);
  assert_eq!(view.possible_habits[0].habit_id, habit.habit_id);
  assert!(view.completed_habits.is_empty());
}

#[tokio::test]
async fn day_view_excludes_unscheduled_week_day() {
  let s = store().await;
  s.create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();

  let view = s.day_view(tuesday()).await.unwrap();
  assert!(view.possible_habits.is_empty());
  assert!(view.completed_habits.is_empty());
}

#[tokio::test]
async fn day_view_excludes_habit_created_later() {
  let s = store().await;
  // Created on the 23rd; the 16th is a matching Monday but predates it.
  s.create_habit(mon_wed_fri("Drink water"), next_monday())
    .await
    .unwrap();

  let view = s.day_view(monday()).await.unwrap();
  assert!(view.possible_habits.is_empty());

  let view = s.day_view(next_monday()).await.unwrap();
  assert_eq!(view.possible_habits.len(), 1);
}

#[tokio::test]
async fn day_view_without_day_row_has_empty_completed() {
  let s = store().await;
  // No toggles have ever happened; no Day row exists anywhere.
  let view = s.day_view(monday()).await.unwrap();
  assert!(view.completed_habits.is_empty());
}

// ─── Toggle ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn toggle_flips_completion_on_and_off() {
  let s = store().await;
  let habit = s
    .create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();

  let outcome = s.toggle_completion(habit.habit_id, monday()).await.unwrap();
  assert_eq!(outcome, ToggleOutcome::Completed);

  let view = s.day_view(monday()).await.unwrap();
  assert_eq!(view.completed_habits, vec![habit.habit_id]);

  let outcome = s.toggle_completion(habit.habit_id, monday()).await.unwrap();
  assert_eq!(outcome, ToggleOutcome::Cleared);

  let view = s.day_view(monday()).await.unwrap();
  assert!(view.completed_habits.is_empty());
}

#[tokio::test]
async fn toggle_twice_is_identity() {
  let s = store().await;
  let habit = s
    .create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();

  s.toggle_completion(habit.habit_id, monday()).await.unwrap();
  s.toggle_completion(habit.habit_id, monday()).await.unwrap();
  s.toggle_completion(habit.habit_id, monday()).await.unwrap();
  s.toggle_completion(habit.habit_id, monday()).await.unwrap();

  let view = s.day_view(monday()).await.unwrap();
  assert!(view.completed_habits.is_empty());
}

#[tokio::test]
async fn toggle_is_scoped_to_its_date() {
  let s = store().await;
  let habit = s
    .create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();

  s.toggle_completion(habit.habit_id, monday()).await.unwrap();

  // The following Tuesday: not scheduled, and no record for that date.
  let view = s.day_view(tuesday()).await.unwrap();
  assert!(view.possible_habits.is_empty());
  assert!(view.completed_habits.is_empty());
}

#[tokio::test]
async fn toggle_missing_habit_errors() {
  let s = store().await;
  let err = s
    .toggle_completion(Uuid::new_v4(), monday())
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::HabitNotFound(_)));
}

#[tokio::test]
async fn toggle_does_not_check_schedule() {
  // Deliberately permissive: a habit can be marked complete on a day it is
  // not scheduled for. Matches the original contract.
  let s = store().await;
  let habit = s
    .create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();

  let outcome = s
    .toggle_completion(habit.habit_id, tuesday())
    .await
    .unwrap();
  assert_eq!(outcome, ToggleOutcome::Completed);

  let view = s.day_view(tuesday()).await.unwrap();
  assert!(view.possible_habits.is_empty());
  assert_eq!(view.completed_habits, vec![habit.habit_id]);
}

#[tokio::test]
async fn day_row_survives_clearing_its_last_completion() {
  let s = store().await;
  let habit = s
    .create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();

  s.toggle_completion(habit.habit_id, monday()).await.unwrap();
  s.toggle_completion(habit.habit_id, monday()).await.unwrap();

  // The Day row still appears in the summary, now with zero completions.
  let summary = s.summary().await.unwrap();
  assert_eq!(summary.len(), 1);
  assert_eq!(summary[0].date, monday());
  assert_eq!(summary[0].completed, 0);
}

// ─── Summary ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn summary_empty_without_days() {
  let s = store().await;
  s.create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();

  // Habits alone produce no summary rows; only toggled days exist.
  assert!(s.summary().await.unwrap().is_empty());
}

#[tokio::test]
async fn summary_counts_possible_and_completed_independently() {
  let s = store().await;

  let water = s
    .create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();
  s.create_habit(NewHabit::new("Run", &[1]).unwrap(), monday())
    .await
    .unwrap();

  // Complete one of the two Monday habits.
  s.toggle_completion(water.habit_id, monday()).await.unwrap();

  let summary = s.summary().await.unwrap();
  assert_eq!(summary.len(), 1);
  assert_eq!(summary[0].date, monday());
  assert_eq!(summary[0].completed, 1);
  assert_eq!(summary[0].amount, 2);
}

#[tokio::test]
async fn summary_amount_respects_creation_date() {
  let s = store().await;

  let early = s
    .create_habit(mon_wed_fri("Drink water"), monday())
    .await
    .unwrap();
  // Created a week later; must not count toward the earlier Monday.
  s.create_habit(NewHabit::new("Run", &[1]).unwrap(), next_monday())
    .await
    .unwrap();

  s.toggle_completion(early.habit_id, monday()).await.unwrap();
  s.toggle_completion(early.habit_id, next_monday())
    .await
    .unwrap();

  let summary = s.summary().await.unwrap();
  assert_eq!(summary.len(), 2);

  // Ordered by date.
  assert_eq!(summary[0].date, monday());
  assert_eq!(summary[0].amount, 1);
  assert_eq!(summary[1].date, next_monday());
  assert_eq!(summary[1].amount, 2);
}

#[tokio::test]
async fn summary_amount_not_inflated_by_multi_day_schedules() {
  // A habit scheduled on several week-days must count once per day, not
  // once per association row.
  let s = store().await;

  let habit = s
    .create_habit(
      NewHabit::new("Stretch", &[0, 1, 2, 3, 4, 5, 6]).unwrap(),
      monday(),
    )
    .await
    .unwrap();
  s.toggle_completion(habit.habit_id, monday()).await.unwrap();

  let summary = s.summary().await.unwrap();
  assert_eq!(summary.len(), 1);
  assert_eq!(summary[0].amount, 1);
  assert_eq!(summary[0].completed, 1);
}
