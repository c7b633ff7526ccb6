//! List Controller
//!
//! Ties the debouncer, the list state and the remote service together.
//! All entry points take `&self`; the controller is a cheap `Rc` handle
//! meant to be cloned into UI callbacks on a single thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};

use crate::config::SyncConfig;
use crate::debounce::{Debouncer, QueryState, Settled};
use crate::error::{SyncError, SyncResult};
use crate::events::{ListEvent, Listeners, Notice, Subscription};
use crate::models::{ListRequest, Priority, Todo, TodoPage, TodoPatch};
use crate::service::{with_timeout, Timer, TodoService};
use crate::state::{Fetch, FetchKind, ListSnapshot, TodoListState};

const FETCH_FAILED: &str = "Failed to fetch todos";
const ADD_FAILED: &str = "Failed to add todo";
const UPDATE_FAILED: &str = "Failed to update todo";
const DELETE_FAILED: &str = "Failed to delete todo";

/// How a fetch request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The page was merged into the list
    Applied,
    /// The query moved on while the request was in flight; result dropped
    Stale,
    /// No request was issued
    Skipped,
    /// The request failed; the list is unchanged
    Failed(SyncError),
}

struct Inner<S, T> {
    service: S,
    timer: T,
    config: SyncConfig,
    state: RefCell<TodoListState>,
    debouncer: RefCell<Debouncer>,
    listeners: Listeners<ListEvent>,
    mounted: Cell<bool>,
}

pub struct TodoListController<S, T> {
    inner: Rc<Inner<S, T>>,
}

impl<S, T> Clone for TodoListController<S, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<S: TodoService, T: Timer> TodoListController<S, T> {
    pub fn new(service: S, timer: T, config: SyncConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                service,
                timer,
                config,
                state: RefCell::new(TodoListState::new()),
                debouncer: RefCell::new(Debouncer::new(config.debounce)),
                listeners: Listeners::new(),
                mounted: Cell::new(false),
            }),
        }
    }

    pub fn config(&self) -> SyncConfig {
        self.inner.config
    }

    pub fn snapshot(&self) -> ListSnapshot {
        self.inner.state.borrow().snapshot()
    }

    pub fn query_state(&self) -> QueryState {
        self.inner.debouncer.borrow().query().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&ListEvent) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    // ========================
    // Lifecycle
    // ========================

    /// Load the first page for the effective query
    pub async fn mount(&self) -> Outcome {
        self.inner.mounted.set(true);
        let query = self.inner.debouncer.borrow().debounced().to_string();
        self.load_first_page(&query).await
    }

    /// Orphan pending keystrokes and requests and drop all listeners
    ///
    /// Every entry point except `mount` is refused afterwards.
    pub fn unmount(&self) {
        self.inner.mounted.set(false);
        self.inner.debouncer.borrow_mut().cancel();
        let epoch = self.inner.state.borrow_mut().invalidate();
        debug!("[SYNC] unmounted, epoch now {}", epoch);
        self.inner.listeners.clear();
    }

    // ========================
    // Query / Fetcher
    // ========================

    /// Feed raw search text; reloads once it has been quiet for the
    /// debounce window and differs from the query in effect
    pub async fn set_query(&self, text: &str) -> Outcome {
        if !self.is_mounted() {
            return Outcome::Skipped;
        }
        let (ticket, delay) = {
            let mut debouncer = self.inner.debouncer.borrow_mut();
            (debouncer.push(text), debouncer.delay())
        };
        self.inner.timer.sleep(delay).await;
        let settled = self.inner.debouncer.borrow_mut().settle(ticket);
        match settled {
            Settled::Changed(query) => {
                debug!("[SYNC] query settled on {:?}", query);
                self.load_first_page(&query).await
            }
            Settled::Unchanged | Settled::Superseded => Outcome::Skipped,
        }
    }

    /// Reset the list for `query` and fetch its first page
    pub async fn load_first_page(&self, query: &str) -> Outcome {
        if !self.is_mounted() {
            return Outcome::Skipped;
        }
        let fetch = self.inner.state.borrow_mut().begin_first_page(query);
        match fetch {
            Some(fetch) => self.run_fetch(fetch).await,
            None => Outcome::Skipped,
        }
    }

    /// Fetch the next page; no-op while exhausted, cursorless or busy
    pub async fn request_next_page(&self) -> Outcome {
        if !self.is_mounted() {
            return Outcome::Skipped;
        }
        let fetch = self.inner.state.borrow_mut().begin_next_page();
        match fetch {
            Some(fetch) => self.run_fetch(fetch).await,
            None => Outcome::Skipped,
        }
    }

    async fn run_fetch(&self, fetch: Fetch) -> Outcome {
        debug!(
            "[SYNC] fetching {:?} page for {:?} (epoch {}, cursor {:?})",
            fetch.kind, fetch.query, fetch.epoch, fetch.cursor
        );
        self.emit(ListEvent::Changed);

        let request = ListRequest {
            query: fetch.query.clone(),
            cursor: fetch.cursor.clone(),
            limit: self.inner.config.page_limit,
        };
        let result = self.call(self.inner.service.list_todos(&request)).await;
        self.settle_fetch(&fetch, result)
    }

    fn settle_fetch(&self, fetch: &Fetch, result: SyncResult<TodoPage>) -> Outcome {
        let outcome = {
            let mut state = self.inner.state.borrow_mut();
            if !state.is_current(fetch) {
                debug!("[SYNC] dropping stale {:?} page for {:?}", fetch.kind, fetch.query);
                return Outcome::Stale;
            }
            let outcome = match result {
                Ok(page) => {
                    let received = page.todos.len();
                    state.apply_page(fetch, page);
                    debug!(
                        "[SYNC] merged {} todos, {} total, has_more={}",
                        received,
                        state.items().len(),
                        state.has_more()
                    );
                    Outcome::Applied
                }
                Err(err) => Outcome::Failed(err),
            };
            state.finish(fetch);
            outcome
        };

        self.emit(ListEvent::Changed);
        if let Outcome::Failed(err) = &outcome {
            let what = match fetch.kind {
                FetchKind::First => "first page",
                FetchKind::Next => "next page",
            };
            warn!("[SYNC] {} for {:?} failed: {}", what, fetch.query, err);
            self.notify(Notice::error(err.user_message(FETCH_FAILED)));
        }
        outcome
    }

    // ========================
    // Mutator
    // ========================

    /// Create a todo and insert the server's copy at the head of the list
    pub async fn add(&self, title: &str, priority: Priority) -> SyncResult<Todo> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SyncError::EmptyTitle);
        }
        self.ensure_mounted()?;

        match self.call(self.inner.service.create_todo(title, priority)).await {
            Ok(todo) => {
                debug!("[SYNC] created {}", todo.id);
                self.inner.state.borrow_mut().insert_head(todo.clone());
                self.emit(ListEvent::Changed);
                self.notify(Notice::success("Todo added successfully"));
                Ok(todo)
            }
            Err(err) => Err(self.report("create", err, ADD_FAILED)),
        }
    }

    /// Apply `patch` locally right away, then send it
    ///
    /// A failed request is reported but not rolled back.
    pub async fn update(&self, id: &str, patch: TodoPatch) -> SyncResult<()> {
        if patch.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
            return Err(SyncError::EmptyTitle);
        }
        self.ensure_mounted()?;

        let ticket = self.inner.state.borrow_mut().begin_patch(id, &patch);
        self.emit(ListEvent::Changed);

        let result = self.call(self.inner.service.update_todo(id, &patch)).await;
        self.inner.state.borrow_mut().end_patch(ticket);

        match result {
            Ok(()) => {
                self.notify(Notice::success("Todo updated successfully"));
                Ok(())
            }
            Err(err) => Err(self.report("update", err, UPDATE_FAILED)),
        }
    }

    /// Flip `completed` locally and send the new value
    pub async fn toggle(&self, id: &str) -> SyncResult<()> {
        self.ensure_mounted()?;
        // Read and flip in one borrow so back-to-back toggles each see the
        // other's local change
        let previous = self.inner.state.borrow_mut().toggle_completed(id);
        let Some(previous) = previous else {
            warn!("[SYNC] toggle of unknown todo {}", id);
            return Err(SyncError::NotFound(id.to_string()));
        };
        self.update(id, TodoPatch::completed(!previous)).await
    }

    /// Delete on the server, then drop the todo from the list
    pub async fn remove(&self, id: &str) -> SyncResult<()> {
        self.ensure_mounted()?;
        match self.call(self.inner.service.delete_todo(id)).await {
            Ok(()) => {
                let removed = self.inner.state.borrow_mut().remove(id);
                debug!("[SYNC] deleted {} ({} entries)", id, removed);
                self.emit(ListEvent::Changed);
                self.notify(Notice::success("Todo deleted successfully"));
                Ok(())
            }
            Err(err) => Err(self.report("delete", err, DELETE_FAILED)),
        }
    }

    // ========================
    // Helpers
    // ========================

    fn ensure_mounted(&self) -> SyncResult<()> {
        if self.is_mounted() {
            Ok(())
        } else {
            debug!("[SYNC] ignoring call on unmounted list");
            Err(SyncError::Unmounted)
        }
    }

    async fn call<R>(&self, call: impl std::future::Future<Output = SyncResult<R>>) -> SyncResult<R> {
        with_timeout(&self.inner.timer, self.inner.config.request_timeout, call).await
    }

    fn report(&self, action: &str, err: SyncError, fallback: &str) -> SyncError {
        warn!("[SYNC] {} failed: {}", action, err);
        self.notify(Notice::error(err.user_message(fallback)));
        err
    }

    fn notify(&self, notice: Notice) {
        self.emit(ListEvent::Notice(notice));
    }

    fn emit(&self, event: ListEvent) {
        self.inner.listeners.emit(&event);
    }
}
