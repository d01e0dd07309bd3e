//! HTML pages composed as plain functions over the loaded data.
//!
//! All user-entered content passes through `escape_html`; the flash block
//! in the shared layout renders whatever one-shot messages the handler
//! took out of the cookie jar (or set inline for a validation re-render).

use crate::db::models::TodoList;
use crate::server::flash::FlashMessages;
use crate::views::helpers::{
    escape_html, list_class, sort_lists, sort_todos, todos_count, todos_remaining_count,
};
use axum::response::Html;
use std::fmt::Write as _;

fn layout(heading: &str, messages: &FlashMessages, content: &str) -> Html<String> {
    let mut flash_html = String::new();
    if let Some(error) = &messages.error {
        let _ = write!(
            flash_html,
            "<div class=\"flash error\">{}</div>\n",
            escape_html(error)
        );
    }
    if let Some(success) = &messages.success {
        let _ = write!(
            flash_html,
            "<div class=\"flash success\">{}</div>\n",
            escape_html(success)
        );
    }

    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Todo Tracker</title>\n\
         </head>\n\
         <body>\n\
         <header>\n\
         <h1>{heading}</h1>\n\
         {flash_html}\
         </header>\n\
         <main>\n\
         {content}\
         </main>\n\
         </body>\n\
         </html>\n",
        heading = escape_html(heading),
    ))
}

/// GET /lists
pub fn lists_index(lists: &[TodoList], messages: &FlashMessages) -> Html<String> {
    let mut items = String::new();
    for list in sort_lists(lists) {
        let class_attr = list_class(list)
            .map(|class| format!(" class=\"{class}\""))
            .unwrap_or_default();
        let _ = write!(
            items,
            "<li{class_attr}><a href=\"/lists/{id}\">{name}</a> \
             <span class=\"count\">{remaining} / {total}</span></li>\n",
            id = list.id,
            name = escape_html(&list.name),
            remaining = todos_remaining_count(list),
            total = todos_count(list),
        );
    }

    let content = format!(
        "<ul class=\"lists\">\n{items}</ul>\n\
         <p><a href=\"/lists/new\">New List</a></p>\n"
    );
    layout("Todo Lists", messages, &content)
}

/// GET /lists/new — `name_value` refills the input on a failed submit.
pub fn new_list(name_value: &str, messages: &FlashMessages) -> Html<String> {
    let content = format!(
        "<form action=\"/lists\" method=\"post\">\n\
         <label for=\"list_name\">Enter the name for your new list:</label>\n\
         <input type=\"text\" id=\"list_name\" name=\"list_name\" value=\"{value}\" placeholder=\"List Name\">\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/lists\">Cancel</a></p>\n",
        value = escape_html(name_value),
    );
    layout("New Todo List", messages, &content)
}

/// GET /lists/{id} — `todo_value` refills the add-todo input on a failed
/// submit.
pub fn list_detail(list: &TodoList, todo_value: &str, messages: &FlashMessages) -> Html<String> {
    let mut items = String::new();
    for todo in sort_todos(&list.todos) {
        let class_attr = if todo.completed {
            " class=\"complete\""
        } else {
            ""
        };
        let _ = write!(
            items,
            "<li{class_attr}>\n\
             <form action=\"/lists/{list_id}/todos/{todo_id}\" method=\"post\" class=\"toggle\">\n\
             <input type=\"hidden\" name=\"completed\" value=\"{next_status}\">\n\
             <button type=\"submit\">{toggle_label}</button>\n\
             </form>\n\
             <span class=\"name\">{name}</span>\n\
             <form action=\"/lists/{list_id}/todos/{todo_id}/destroy\" method=\"post\" class=\"delete\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n\
             </li>\n",
            list_id = list.id,
            todo_id = todo.id,
            next_status = !todo.completed,
            toggle_label = if todo.completed { "Undo" } else { "Complete" },
            name = escape_html(&todo.name),
        );
    }

    let content = format!(
        "<p><a href=\"/lists\">All Lists</a> <a href=\"/lists/{id}/edit\">Edit List</a></p>\n\
         <form action=\"/lists/{id}/check_all\" method=\"post\" class=\"check-all\">\n\
         <button type=\"submit\">Complete All</button>\n\
         </form>\n\
         <ul class=\"todos\">\n{items}</ul>\n\
         <form action=\"/lists/{id}/todos\" method=\"post\">\n\
         <label for=\"todo\">Enter a new todo item:</label>\n\
         <input type=\"text\" id=\"todo\" name=\"todo\" value=\"{value}\" placeholder=\"Something to do\">\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
        id = list.id,
        value = escape_html(todo_value),
    );
    layout(&list.name, messages, &content)
}

/// GET /lists/{id}/edit — `name_value` refills the input on a failed
/// rename.
pub fn edit_list(list: &TodoList, name_value: &str, messages: &FlashMessages) -> Html<String> {
    let content = format!(
        "<p><a href=\"/lists/{id}\">Back to List</a></p>\n\
         <form action=\"/lists/{id}\" method=\"post\">\n\
         <label for=\"list_name\">Enter the new name for the list:</label>\n\
         <input type=\"text\" id=\"list_name\" name=\"list_name\" value=\"{value}\">\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <form action=\"/lists/{id}/destroy\" method=\"post\" class=\"delete\">\n\
         <button type=\"submit\">Delete List</button>\n\
         </form>\n",
        id = list.id,
        value = escape_html(name_value),
    );
    layout(&format!("Editing {}", list.name), messages, &content)
}
