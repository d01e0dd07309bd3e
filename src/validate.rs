//! Request-time name validation for lists and todos.
//!
//! Both checks run against freshly fetched rows; nothing locks between the
//! check and the insert, so two concurrent requests can both pass and
//! create duplicates.

use crate::db::models::{Todo, TodoList};

pub const LIST_NAME_LENGTH: &str = "The list name must be between 1 and 100 characters.";
pub const LIST_NAME_UNIQUE: &str = "List name must be unique.";
pub const TODO_NAME_LENGTH: &str = "The todo name must be between 1 and 100 characters.";
pub const TODO_NAME_UNIQUE: &str = "Todo name must be unique.";

/// Return an error message if the list name is invalid, `None` if valid.
pub fn error_for_list_name(name: &str, lists: &[TodoList]) -> Option<&'static str> {
    if !(1..=100).contains(&name.chars().count()) {
        Some(LIST_NAME_LENGTH)
    } else if lists.iter().any(|list| list.name == name) {
        Some(LIST_NAME_UNIQUE)
    } else {
        None
    }
}

/// Return an error message if the todo name is invalid within its list,
/// `None` if valid. Uniqueness is scoped to the given list's todos.
pub fn error_for_todo_name(name: &str, todos: &[Todo]) -> Option<&'static str> {
    if !(1..=100).contains(&name.chars().count()) {
        Some(TODO_NAME_LENGTH)
    } else if todos.iter().any(|todo| todo.name == name) {
        Some(TODO_NAME_UNIQUE)
    } else {
        None
    }
}
