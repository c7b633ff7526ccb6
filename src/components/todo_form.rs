//! Todo Form Component
//!
//! Modal for adding a todo or editing one in place.

use leptos::prelude::*;
use crate::models::{Priority, TodoPatch};

use super::{FormMode, Modal, PrioritySelector};
use crate::context::use_todos;

/// Add/edit modal, shown while a form mode is set
#[component]
pub fn TodoForm() -> impl IntoView {
    let todos = use_todos();
    let (title, set_title) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());

    // Prefill whenever the form opens
    Effect::new(move |_| match todos.form.get() {
        Some(FormMode::Edit(todo)) => {
            set_title.set(todo.title);
            set_priority.set(todo.priority);
        }
        Some(FormMode::Add) => {
            set_title.set(String::new());
            set_priority.set(Priority::default());
        }
        None => {}
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        match todos.form.get_untracked() {
            Some(FormMode::Add) => todos.add(text, priority.get_untracked()),
            Some(FormMode::Edit(todo)) => {
                todos.update(todo.id, TodoPatch::edit(text, priority.get_untracked()))
            }
            None => return,
        }
        todos.close_form();
    };

    let heading = move || todos.form.with(|form| form.as_ref().map(FormMode::heading).unwrap_or_default());
    let submit_label =
        move || todos.form.with(|form| form.as_ref().map(FormMode::submit_label).unwrap_or_default());

    view! {
        <Modal
            open=Signal::derive(move || todos.form.with(|form| form.is_some()))
            on_close=Callback::new(move |_| todos.close_form())
        >
            <h2>{heading}</h2>
            <form class="todo-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <PrioritySelector
                    current=priority
                    on_change=move |value| set_priority.set(value)
                />
                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| todos.close_form()>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="submit-btn"
                        disabled=move || title.with(|text| text.trim().is_empty())
                    >
                        {submit_label}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
