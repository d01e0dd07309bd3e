use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named collection of todos. `todos` is not a column; the store fills
/// it with the list's rows from the `todo` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct TodoList {
    pub id: i64,
    pub name: String,
    #[sqlx(skip)]
    pub todos: Vec<Todo>,
}

/// A single task entry belonging to exactly one list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Todo {
    pub id: i64,
    pub list_id: i64,
    pub name: String,
    pub completed: bool,
}
