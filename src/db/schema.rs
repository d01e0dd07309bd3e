//! SQL DDL for initializing the database schema.

/// SQLite schema includes:
/// - `lists` table (one named todo list per row)
/// - `todo` table (one task per row, owned by exactly one list)
///
/// Name uniqueness (across lists, and across todos within a list) is
/// enforced by request-time validation, not by constraints here.
pub const SQLITE_INIT: &str = r"
CREATE TABLE IF NOT EXISTS lists (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS todo (
    id INTEGER PRIMARY KEY NOT NULL,
    list_id INTEGER NOT NULL REFERENCES lists(id),
    name TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT false
);

CREATE INDEX IF NOT EXISTS idx_todo_list_id ON todo(list_id);
";
