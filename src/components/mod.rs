//! UI Components
//!
//! Reusable Leptos components.

mod form_mode;
mod modal;
mod priority_selector;
mod route_guard;
mod search_box;
mod skeleton;
mod toast_host;
mod todo_card;
mod todo_form;
mod todo_list;

pub use form_mode::FormMode;
pub use modal::{ConfirmModal, Modal};
pub use priority_selector::PrioritySelector;
pub use route_guard::{PublicOnly, RequireAuth, Splash, HOME_PATH, LOGIN_PATH};
pub use search_box::SearchBox;
pub use skeleton::{SkeletonStack, TodoSkeleton};
pub use toast_host::ToastHost;
pub use todo_card::TodoCard;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
