//! SQL schema for the SQLite habit store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Dates are stored as `YYYY-MM-DD` text, so lexicographic comparison is
/// chronological and `strftime('%w', ...)` applies directly.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Habits and their week-day sets are immutable after creation.
CREATE TABLE IF NOT EXISTS habits (
    habit_id   TEXT PRIMARY KEY,
    title      TEXT NOT NULL,
    created_on TEXT NOT NULL    -- ISO 8601 date; server-assigned
);

-- One row per (habit, scheduled week-day).
CREATE TABLE IF NOT EXISTS habit_week_days (
    habit_id TEXT    NOT NULL REFERENCES habits(habit_id),
    week_day INTEGER NOT NULL,  -- 0-6, Sunday = 0
    UNIQUE (habit_id, week_day),
    CHECK  (week_day BETWEEN 0 AND 6)
);

-- Created lazily on first toggle for a date; never deleted.
-- The UNIQUE constraint on date is the sole guard against concurrent
-- first-toggle races.
CREATE TABLE IF NOT EXISTS days (
    day_id TEXT PRIMARY KEY,
    date   TEXT NOT NULL UNIQUE
);

-- At most one completion record per (day, habit) pair.
CREATE TABLE IF NOT EXISTS completions (
    day_id   TEXT NOT NULL REFERENCES days(day_id),
    habit_id TEXT NOT NULL REFERENCES habits(habit_id),
    UNIQUE (day_id, habit_id)
);

PRAGMA user_version = 1;
";
