//! To-do List Synchronization
//!
//! Client-side controller for a cursor-paginated, searchable to-do list:
//! - debounce: raw search text -> effective query
//! - state: items, cursor and exhaustion per query epoch
//! - controller: fetcher (first/next page) and mutator (add/update/toggle/remove)
//! - service: the remote to-do service and timer seams
//!
//! Everything runs on one thread; ordering between requests comes from
//! epoch fencing and the single-flight rule rather than locks.

pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod events;
pub mod models;
pub mod service;
pub mod state;

pub use config::SyncConfig;
pub use controller::{Outcome, TodoListController};
pub use debounce::{Debouncer, QueryState, Settled};
pub use error::{SyncError, SyncResult};
pub use events::{ListEvent, Listeners, Notice, NoticeLevel, Subscription};
pub use models::{ListRequest, Priority, Todo, TodoPage, TodoPatch};
pub use service::{with_timeout, Timer, TodoService};
pub use state::{ListSnapshot, TodoListState};
