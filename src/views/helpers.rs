//! Pure functions computing derived display state from loaded lists.

use crate::db::models::{Todo, TodoList};

pub fn todos_count(list: &TodoList) -> usize {
    list.todos.len()
}

pub fn todos_remaining_count(list: &TodoList) -> usize {
    list.todos.iter().filter(|todo| !todo.completed).count()
}

/// A list is complete iff it has at least one todo and none remaining.
pub fn list_complete(list: &TodoList) -> bool {
    todos_count(list) > 0 && todos_remaining_count(list) == 0
}

/// CSS class hook for complete lists.
pub fn list_class(list: &TodoList) -> Option<&'static str> {
    list_complete(list).then_some("complete")
}

/// Incomplete todos before completed ones, stable within each partition.
pub fn sort_todos(todos: &[Todo]) -> Vec<&Todo> {
    let (complete, incomplete): (Vec<&Todo>, Vec<&Todo>) =
        todos.iter().partition(|todo| todo.completed);
    incomplete.into_iter().chain(complete).collect()
}

/// Incomplete lists before complete ones, stable within each partition.
pub fn sort_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    let (complete, incomplete): (Vec<&TodoList>, Vec<&TodoList>) =
        lists.iter().partition(|list| list_complete(list));
    incomplete.into_iter().chain(complete).collect()
}

/// Minimal HTML entity escaping for user-entered content.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
