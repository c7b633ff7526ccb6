//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list
//! fields mirror the controller's snapshot; toasts live only here.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{ListSnapshot, Notice, NoticeLevel, Todo};

/// Toasts kept on screen at once
const MAX_TOASTS: usize = 4;
/// How long a toast stays up
const TOAST_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Loaded todos, in list order
    pub todos: Vec<Todo>,
    /// Query the list was loaded for
    pub query: String,
    pub has_more: bool,
    /// First page in flight
    pub is_loading: bool,
    /// Next page in flight
    pub is_fetching_more: bool,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            has_more: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// List fields a snapshot would change
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ListChanges {
    todos: bool,
    query: bool,
    has_more: bool,
    is_loading: bool,
    is_fetching_more: bool,
}

impl ListChanges {
    fn between(state: &AppState, snapshot: &ListSnapshot) -> Self {
        Self {
            todos: state.todos != snapshot.items,
            query: state.query != snapshot.query,
            has_more: state.has_more != snapshot.has_more,
            is_loading: state.is_loading != snapshot.is_loading,
            is_fetching_more: state.is_fetching_more != snapshot.is_fetching_more,
        }
    }
}

/// Copy the controller's snapshot into the store
///
/// Only fields that differ are written, so a toggle does not wake views
/// that only read the loading flags.
pub fn store_apply_snapshot(store: &AppStore, snapshot: ListSnapshot) {
    let changes = store.with_untracked(|state| ListChanges::between(state, &snapshot));
    if changes.todos {
        store.todos().set(snapshot.items);
    }
    if changes.query {
        store.query().set(snapshot.query);
    }
    if changes.has_more {
        store.has_more().set(snapshot.has_more);
    }
    if changes.is_loading {
        store.is_loading().set(snapshot.is_loading);
    }
    if changes.is_fetching_more {
        store.is_fetching_more().set(snapshot.is_fetching_more);
    }
}

/// Show a notice; returns the toast id
pub fn store_push_toast(store: &AppStore, notice: Notice) -> u64 {
    let id = store.next_toast_id().get_untracked() + 1;
    store.next_toast_id().set(id);
    push_bounded(
        &mut store.toasts().write(),
        Toast { id, level: notice.level, message: notice.message },
    );
    id
}

/// Show a notice and dismiss it after a few seconds
pub fn store_notify(store: &AppStore, notice: Notice) {
    let store = *store;
    let id = store_push_toast(&store, notice);
    gloo_timers::callback::Timeout::new(TOAST_MS, move || {
        store_dismiss_toast(&store, id);
    })
    .forget();
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

fn push_bounded(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_TOASTS {
        let overflow = toasts.len() - MAX_TOASTS;
        toasts.drain(0..overflow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_sync::Priority;

    fn toast(id: u64) -> Toast {
        Toast { id, level: NoticeLevel::Success, message: format!("toast {id}") }
    }

    fn loaded() -> (AppState, ListSnapshot) {
        let items = vec![Todo::new("a", "Buy milk", Priority::Low)];
        let snapshot = ListSnapshot {
            items: items.clone(),
            query: String::new(),
            has_more: false,
            is_loading: false,
            is_fetching_more: false,
        };
        let state = AppState { todos: items, has_more: false, ..AppState::new() };
        (state, snapshot)
    }

    #[test]
    fn test_toggle_only_changes_todos() {
        let (state, mut snapshot) = loaded();
        snapshot.items[0].completed = true;
        assert_eq!(
            ListChanges::between(&state, &snapshot),
            ListChanges { todos: true, ..Default::default() }
        );
    }

    #[test]
    fn test_identical_snapshot_changes_nothing() {
        let (state, snapshot) = loaded();
        assert_eq!(ListChanges::between(&state, &snapshot), ListChanges::default());
    }

    #[test]
    fn test_first_page_start_flips_loading() {
        let (state, _) = loaded();
        let snapshot = ListSnapshot {
            query: "milk".into(),
            has_more: true,
            is_loading: true,
            ..Default::default()
        };
        let changes = ListChanges::between(&state, &snapshot);
        assert!(changes.todos && changes.query && changes.has_more && changes.is_loading);
        assert!(!changes.is_fetching_more);
    }

    #[test]
    fn test_push_bounded_drops_oldest() {
        let mut toasts = Vec::new();
        for id in 1..=6 {
            push_bounded(&mut toasts, toast(id));
        }
        let ids: Vec<u64> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6]);
    }
}
