//! Todo List Component
//!
//! Renders the loaded todos with infinite scroll, skeletons and the
//! empty state.

use leptos::prelude::*;
use leptos_infinite_scroll::ScrollSentinel;

use super::{SkeletonStack, TodoCard, TodoSkeleton};
use crate::context::use_todos;
use crate::store::{use_app_store, AppStateStoreFields};

/// Scrollable todo list
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();
    let todos = use_todos();

    // Only flip when the list empties/fills or a first page starts/lands,
    // so edits do not rebuild the grid
    let is_loading = Memo::new(move |_| store.is_loading().get());
    let is_empty = Memo::new(move |_| store.todos().with(|items| items.is_empty()));
    let item_count = Memo::new(move |_| store.todos().with(|items| items.len()));

    // Index is part of the key: the server may return the same todo on two pages
    let rows = move || store.todos().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="todo-list">
            {move || {
                if is_loading.get() {
                    view! { <SkeletonStack /> }.into_any()
                } else if is_empty.get() {
                    view! { <EmptyState query=store.query().get_untracked() /> }.into_any()
                } else {
                    view! {
                        <div class="todo-grid">
                            <For
                                each=rows
                                key=|(index, todo)| {
                                    (*index, todo.id.clone(), todo.title.clone(), todo.priority, todo.completed)
                                }
                                children=move |(_, todo)| view! { <TodoCard todo=todo /> }
                            />
                        </div>
                        // Rebuilt whenever the list grows so a sentinel that stays
                        // on screen reports again
                        {move || {
                            item_count.track();
                            view! {
                                <ScrollSentinel on_visible=Callback::new(move |_| todos.next_page()) />
                            }
                        }}
                    }.into_any()
                }
            }}
            <Show when=move || store.is_fetching_more().get()>
                <TodoSkeleton />
            </Show>
        </div>
    }
}

#[component]
fn EmptyState(query: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>"No Todos Found!"</h2>
            <p>{empty_hint(&query)}</p>
        </div>
    }
}

fn empty_hint(query: &str) -> &'static str {
    if query.is_empty() {
        "Start adding todos by clicking the add icon!"
    } else {
        "0 results found"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hint() {
        assert_eq!(empty_hint(""), "Start adding todos by clicking the add icon!");
        assert_eq!(empty_hint("milk"), "0 results found");
    }
}
