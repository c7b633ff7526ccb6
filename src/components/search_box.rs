//! Search Box Component

use leptos::prelude::*;

use crate::context::use_todos;

/// Search input; every keystroke goes to the debouncer
#[component]
pub fn SearchBox() -> impl IntoView {
    let todos = use_todos();

    view! {
        <div class="search-box">
            <input
                type="search"
                placeholder="Search Todos"
                on:input=move |ev| todos.search(event_target_value(&ev))
            />
        </div>
    }
}
