//! List State
//!
//! Items, cursor and exhaustion for the current query, plus the
//! bookkeeping that keeps fetches and local mutations from stepping on
//! each other:
//! - every reset starts a new epoch; fetches are tagged with the epoch
//!   they were issued in and are dropped on completion if it has moved on
//! - at most one fetch per epoch is in flight
//! - optimistic patches stay pending until their request settles and are
//!   re-applied to any page merged in the meantime
//! - todos deleted during an epoch never come back from a later page

use std::collections::HashSet;

use crate::models::{Todo, TodoPage, TodoPatch};

pub type Epoch = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    First,
    Next,
}

/// A page request issued for a particular epoch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetch {
    pub epoch: Epoch,
    pub kind: FetchKind,
    pub query: String,
    pub cursor: Option<String>,
}

/// Handle for an optimistic patch awaiting confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchTicket(u64);

#[derive(Debug, Clone)]
struct PendingPatch {
    seq: u64,
    id: String,
    patch: TodoPatch,
}

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSnapshot {
    pub items: Vec<Todo>,
    pub query: String,
    pub has_more: bool,
    /// First page in flight
    pub is_loading: bool,
    /// Incremental page in flight
    pub is_fetching_more: bool,
}

#[derive(Debug, Clone)]
pub struct TodoListState {
    items: Vec<Todo>,
    cursor: Option<String>,
    has_more: bool,
    query: String,
    epoch: Epoch,
    in_flight: Option<(Epoch, FetchKind)>,
    pending: Vec<PendingPatch>,
    next_seq: u64,
    /// Ids confirmed by an add while the first page of this epoch is loading
    early_inserts: Vec<String>,
    /// Ids confirmed deleted during this epoch
    removed: HashSet<String>,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            has_more: true,
            query: String::new(),
            epoch: 0,
            in_flight: None,
            pending: Vec::new(),
            next_seq: 0,
            early_inserts: Vec::new(),
            removed: HashSet::new(),
        }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight == Some((self.epoch, FetchKind::First))
    }

    pub fn is_fetching_more(&self) -> bool {
        self.in_flight == Some((self.epoch, FetchKind::Next))
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            items: self.items.clone(),
            query: self.query.clone(),
            has_more: self.has_more,
            is_loading: self.is_loading(),
            is_fetching_more: self.is_fetching_more(),
        }
    }

    // ========================
    // Fetch lifecycle
    // ========================

    /// Start a new epoch for `query` with an empty list
    pub fn reset(&mut self, query: &str) -> Epoch {
        self.epoch += 1;
        self.items.clear();
        self.cursor = None;
        self.has_more = true;
        self.query = query.to_string();
        self.in_flight = None;
        self.early_inserts.clear();
        self.removed.clear();
        self.epoch
    }

    /// Orphan whatever is in flight without touching the list
    pub fn invalidate(&mut self) -> Epoch {
        self.epoch += 1;
        self.in_flight = None;
        self.early_inserts.clear();
        self.epoch
    }

    /// Reset for `query` and mark its first page in flight
    ///
    /// Returns `None` if that first page is already loading.
    pub fn begin_first_page(&mut self, query: &str) -> Option<Fetch> {
        if self.query == query && self.is_loading() {
            return None;
        }
        let epoch = self.reset(query);
        self.in_flight = Some((epoch, FetchKind::First));
        Some(Fetch {
            epoch,
            kind: FetchKind::First,
            query: query.to_string(),
            cursor: None,
        })
    }

    /// Mark the next page in flight, or `None` if no request is allowed
    pub fn begin_next_page(&mut self) -> Option<Fetch> {
        if self.in_flight.is_some() || !self.has_more {
            return None;
        }
        let cursor = self.cursor.clone()?;
        self.in_flight = Some((self.epoch, FetchKind::Next));
        Some(Fetch {
            epoch: self.epoch,
            kind: FetchKind::Next,
            query: self.query.clone(),
            cursor: Some(cursor),
        })
    }

    pub fn is_current(&self, fetch: &Fetch) -> bool {
        fetch.epoch == self.epoch
    }

    /// Merge a page for `fetch`; returns false (and changes nothing) if stale
    pub fn apply_page(&mut self, fetch: &Fetch, page: TodoPage) -> bool {
        if !self.is_current(fetch) {
            return false;
        }
        let mut incoming = page.todos;
        incoming.retain(|todo| !self.removed.contains(&todo.id));
        for todo in incoming.iter_mut() {
            self.overlay_pending(todo);
        }
        match fetch.kind {
            FetchKind::First => {
                // Local copies of early inserts carry every edit made since,
                // so they win over the page's copy of the same id
                let early_ids = std::mem::take(&mut self.early_inserts);
                let mut items: Vec<Todo> = early_ids
                    .iter()
                    .filter_map(|id| self.items.iter().find(|todo| &todo.id == id).cloned())
                    .collect();
                incoming.retain(|todo| !early_ids.contains(&todo.id));
                items.extend(incoming);
                self.items = items;
            }
            FetchKind::Next => self.items.extend(incoming),
        }
        self.cursor = page.next_cursor;
        self.has_more = page.has_more;
        true
    }

    /// Clear the in-flight marker if it still belongs to `fetch`
    pub fn finish(&mut self, fetch: &Fetch) {
        if self.in_flight == Some((fetch.epoch, fetch.kind)) {
            self.in_flight = None;
            if fetch.kind == FetchKind::First {
                self.early_inserts.clear();
            }
        }
    }

    // ========================
    // Local mutations
    // ========================

    /// Insert a server-confirmed todo at the head of the list
    pub fn insert_head(&mut self, todo: Todo) {
        if self.is_loading() {
            self.early_inserts.insert(0, todo.id.clone());
        }
        self.items.insert(0, todo);
    }

    /// Apply `patch` to every entry with `id` and keep it pending
    pub fn begin_patch(&mut self, id: &str, patch: &TodoPatch) -> PatchTicket {
        self.patch(id, patch);
        self.next_seq += 1;
        self.pending.push(PendingPatch {
            seq: self.next_seq,
            id: id.to_string(),
            patch: patch.clone(),
        });
        PatchTicket(self.next_seq)
    }

    /// Drop a pending patch once its request has settled
    pub fn end_patch(&mut self, ticket: PatchTicket) {
        self.pending.retain(|pending| pending.seq != ticket.0);
    }

    pub fn pending_patches(&self) -> usize {
        self.pending.len()
    }

    /// Apply `patch` to every entry with `id`; returns the number touched
    pub fn patch(&mut self, id: &str, patch: &TodoPatch) -> usize {
        let mut touched = 0;
        for todo in self.items.iter_mut().filter(|todo| todo.id == id) {
            patch.apply_to(todo);
            touched += 1;
        }
        touched
    }

    /// Flip `completed` for `id`, returning the value it had before
    pub fn toggle_completed(&mut self, id: &str) -> Option<bool> {
        let previous = self.items.iter().find(|todo| todo.id == id)?.completed;
        self.patch(id, &TodoPatch::completed(!previous));
        Some(previous)
    }

    /// Remove every entry with `id`; returns the number removed
    ///
    /// The id stays fenced out of pages merged later in this epoch.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|todo| todo.id != id);
        self.early_inserts.retain(|early| early != id);
        self.removed.insert(id.to_string());
        before - self.items.len()
    }

    fn overlay_pending(&self, todo: &mut Todo) {
        for pending in &self.pending {
            if pending.id == todo.id {
                pending.patch.apply_to(todo);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn todo(id: &str) -> Todo {
        Todo::new(id, format!("Todo {id}"), Priority::Low)
    }

    fn page(ids: &[&str], next_cursor: Option<&str>, has_more: bool) -> TodoPage {
        TodoPage {
            todos: ids.iter().map(|id| todo(id)).collect(),
            next_cursor: next_cursor.map(str::to_string),
            has_more,
        }
    }

    fn ids(state: &TodoListState) -> Vec<&str> {
        state.items().iter().map(|todo| todo.id.as_str()).collect()
    }

    #[test]
    fn test_first_page_replaces_items() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        assert!(state.is_loading());
        assert!(state.apply_page(&first, page(&["a", "b"], Some("c1"), true)));
        state.finish(&first);

        let second = state.begin_first_page("milk").unwrap();
        assert!(state.items().is_empty());
        assert!(state.has_more());
        assert!(state.apply_page(&second, page(&["m"], None, false)));
        state.finish(&second);

        assert_eq!(ids(&state), vec!["m"]);
        assert_eq!(state.cursor(), None);
        assert!(!state.has_more());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_duplicate_first_page_is_refused() {
        let mut state = TodoListState::new();
        assert!(state.begin_first_page("milk").is_some());
        assert!(state.begin_first_page("milk").is_none());
        assert!(state.begin_first_page("bread").is_some());
    }

    #[test]
    fn test_next_page_appends_without_dedup() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        state.apply_page(&first, page(&["a", "b"], Some("c1"), true));
        state.finish(&first);

        let next = state.begin_next_page().unwrap();
        assert_eq!(next.cursor.as_deref(), Some("c1"));
        assert!(state.is_fetching_more());
        state.apply_page(&next, page(&["b", "c"], None, false));
        state.finish(&next);

        assert_eq!(ids(&state), vec!["a", "b", "b", "c"]);
    }

    #[test]
    fn test_next_page_guards() {
        let mut state = TodoListState::new();
        // No cursor yet
        assert!(state.begin_next_page().is_none());

        let first = state.begin_first_page("").unwrap();
        // First page in flight
        assert!(state.begin_next_page().is_none());
        state.apply_page(&first, page(&["a"], Some("c1"), true));
        state.finish(&first);

        let next = state.begin_next_page().unwrap();
        // Single flight
        assert!(state.begin_next_page().is_none());
        state.apply_page(&next, page(&["b"], Some("c2"), false));
        state.finish(&next);

        // Exhausted even though a cursor was returned
        assert!(state.begin_next_page().is_none());
    }

    #[test]
    fn test_stale_fetch_is_ignored() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        state.apply_page(&first, page(&["a"], Some("c1"), true));
        state.finish(&first);
        let next = state.begin_next_page().unwrap();

        let fresh = state.begin_first_page("x").unwrap();
        assert!(!state.apply_page(&next, page(&["stale"], None, false)));
        state.finish(&next);
        assert!(state.is_loading());

        state.apply_page(&fresh, page(&["x1"], Some("c9"), true));
        state.finish(&fresh);
        assert_eq!(ids(&state), vec!["x1"]);
        assert_eq!(state.cursor(), Some("c9"));
    }

    #[test]
    fn test_failed_fetch_leaves_state() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        state.apply_page(&first, page(&["a"], Some("c1"), true));
        state.finish(&first);

        let next = state.begin_next_page().unwrap();
        state.finish(&next);

        assert_eq!(ids(&state), vec!["a"]);
        assert_eq!(state.cursor(), Some("c1"));
        assert!(state.begin_next_page().is_some());
    }

    #[test]
    fn test_toggle_returns_previous() {
        let mut state = TodoListState::new();
        state.insert_head(todo("a"));
        assert_eq!(state.toggle_completed("a"), Some(false));
        assert_eq!(state.toggle_completed("a"), Some(true));
        assert!(!state.items()[0].completed);
        assert_eq!(state.toggle_completed("missing"), None);
    }

    #[test]
    fn test_pending_patch_survives_page_merge() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        state.apply_page(&first, page(&["a"], Some("c1"), true));
        state.finish(&first);

        let next = state.begin_next_page().unwrap();
        let ticket = state.begin_patch("b", &TodoPatch::completed(true));
        state.apply_page(&next, page(&["b"], None, false));
        state.finish(&next);
        state.end_patch(ticket);

        assert!(state.items()[1].completed);
        assert_eq!(state.pending_patches(), 0);
    }

    #[test]
    fn test_insert_during_first_load_is_kept() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        state.insert_head(todo("new"));
        state.apply_page(&first, page(&["a", "b"], None, false));
        state.finish(&first);
        assert_eq!(ids(&state), vec!["new", "a", "b"]);
    }

    #[test]
    fn test_insert_during_first_load_not_duplicated() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        state.insert_head(todo("a"));
        state.apply_page(&first, page(&["a", "b"], None, false));
        assert_eq!(ids(&state), vec!["a", "b"]);
    }

    #[test]
    fn test_settled_edit_of_early_insert_survives_first_page() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        state.insert_head(todo("new"));
        let ticket = state.begin_patch("new", &TodoPatch::completed(true));
        state.end_patch(ticket);

        state.apply_page(&first, page(&["a"], None, false));
        state.finish(&first);

        assert_eq!(ids(&state), vec!["new", "a"]);
        assert!(state.items()[0].completed);
    }

    #[test]
    fn test_pending_edit_of_early_insert_survives_first_page() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        state.insert_head(Todo::new("new", "Buy milk", Priority::Low));
        let ticket = state.begin_patch("new", &TodoPatch::edit("Buy oat milk", Priority::High));

        // The page already has the server copy, without the edit
        let mut landed = page(&["a"], None, false);
        landed.todos.insert(0, Todo::new("new", "Buy milk", Priority::Low));
        state.apply_page(&first, landed);
        state.finish(&first);
        state.end_patch(ticket);

        assert_eq!(ids(&state), vec!["new", "a"]);
        assert_eq!(state.items()[0].title, "Buy oat milk");
        assert_eq!(state.items()[0].priority, Priority::High);
    }

    #[test]
    fn test_toggle_of_early_insert_survives_first_page() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        state.insert_head(todo("new"));
        assert_eq!(state.toggle_completed("new"), Some(false));

        state.apply_page(&first, page(&["a"], None, false));
        assert!(state.items()[0].completed);
    }

    #[test]
    fn test_removed_id_is_fenced_from_next_page() {
        let mut state = TodoListState::new();
        let first = state.begin_first_page("").unwrap();
        state.apply_page(&first, page(&["a", "b"], Some("c1"), true));
        state.finish(&first);

        let next = state.begin_next_page().unwrap();
        assert_eq!(state.remove("b"), 1);
        state.apply_page(&next, page(&["b", "c"], None, false));
        state.finish(&next);

        assert_eq!(ids(&state), vec!["a", "c"]);
    }

    #[test]
    fn test_removed_fence_resets_with_query() {
        let mut state = TodoListState::new();
        state.insert_head(todo("b"));
        state.remove("b");

        let first = state.begin_first_page("b").unwrap();
        state.apply_page(&first, page(&["b"], None, false));
        assert_eq!(ids(&state), vec!["b"]);
    }

    #[test]
    fn test_remove_all_entries() {
        let mut state = TodoListState::new();
        state.insert_head(todo("a"));
        state.insert_head(todo("b"));
        state.insert_head(todo("a"));
        assert_eq!(state.remove("a"), 2);
        assert_eq!(ids(&state), vec!["b"]);
    }
}
