//! Todo Card Component
//!
//! A single todo in the list.

use leptos::prelude::*;
use crate::models::Todo;

use crate::context::use_todos;

/// One todo card with toggle, edit and delete controls
#[component]
pub fn TodoCard(todo: Todo) -> impl IntoView {
    let todos = use_todos();

    let completed = todo.completed;
    let card_class = format!(
        "todo-card priority-{}{}",
        todo.priority.as_str(),
        if completed { " completed" } else { "" }
    );
    let toggle_id = todo.id.clone();
    let delete_id = todo.id.clone();
    let title = todo.title.clone();
    let priority = todo.priority.label();

    view! {
        <div class=card_class>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| todos.toggle(toggle_id.clone())
            />
            <div class="todo-body">
                <span class="todo-title">{title}</span>
                <span class="todo-priority">{priority}</span>
            </div>
            <div class="todo-actions">
                <button class="edit-btn" title="Edit" on:click=move |_| todos.open_edit(todo.clone())>
                    "✎"
                </button>
                <button class="delete-btn" title="Delete" on:click=move |_| todos.ask_delete(delete_id.clone())>
                    "🗑"
                </button>
            </div>
        </div>
    }
}
