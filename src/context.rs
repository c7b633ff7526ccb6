//! Todos Context
//!
//! List controller and form state shared via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{ListEvent, Priority, Subscription, Todo, TodoListController, TodoPatch};

use crate::api::{ApiClient, HttpTodoService};
use crate::components::FormMode;
use crate::config::AppConfig;
use crate::store::{store_apply_snapshot, store_notify, AppStore};
use crate::timer::GlooTimer;

pub type ListController = TodoListController<HttpTodoService, GlooTimer>;

#[derive(Clone, Copy)]
pub struct TodosContext {
    controller: StoredValue<ListController, LocalStorage>,
    subscription: StoredValue<Option<Subscription>, LocalStorage>,
    /// Open add/edit form (None = closed) - read
    pub form: ReadSignal<Option<FormMode>>,
    /// Open add/edit form (None = closed) - write
    set_form: WriteSignal<Option<FormMode>>,
    /// Todo awaiting delete confirmation - read
    pub delete_target: ReadSignal<Option<String>>,
    /// Todo awaiting delete confirmation - write
    set_delete_target: WriteSignal<Option<String>>,
}

impl TodosContext {
    /// Build the controller and mirror its events into `store`
    pub fn new(store: AppStore) -> Self {
        let config = AppConfig::from_env();
        let service = HttpTodoService::new(ApiClient::new(config.api_base_url));
        let controller = StoredValue::new_local(ListController::new(service, GlooTimer, config.sync));
        let (form, set_form) = signal(None::<FormMode>);
        let (delete_target, set_delete_target) = signal(None::<String>);

        let subscription = controller.with_value(|ctrl| {
            ctrl.subscribe(move |event| match event {
                ListEvent::Changed => {
                    if let Some(snapshot) = controller.try_with_value(|ctrl| ctrl.snapshot()) {
                        store_apply_snapshot(&store, snapshot);
                    }
                }
                ListEvent::Notice(notice) => store_notify(&store, notice.clone()),
            })
        });

        Self {
            controller,
            subscription: StoredValue::new_local(Some(subscription)),
            form,
            set_form,
            delete_target,
            set_delete_target,
        }
    }

    fn controller(&self) -> ListController {
        self.controller.get_value()
    }

    // ========================
    // Lifecycle
    // ========================

    pub fn mount(&self) {
        let ctrl = self.controller();
        spawn_local(async move {
            ctrl.mount().await;
        });
    }

    /// Safe to call while the owner is being disposed
    pub fn unmount(&self) {
        self.controller.try_with_value(|ctrl| ctrl.unmount());
        self.subscription.try_update_value(|subscription| {
            subscription.take();
        });
    }

    // ========================
    // List actions
    // ========================

    pub fn search(&self, text: String) {
        let ctrl = self.controller();
        spawn_local(async move {
            ctrl.set_query(&text).await;
        });
    }

    /// Last item became visible
    pub fn next_page(&self) {
        let ctrl = self.controller();
        spawn_local(async move {
            ctrl.request_next_page().await;
        });
    }

    pub fn add(&self, title: String, priority: Priority) {
        let ctrl = self.controller();
        spawn_local(async move {
            let _ = ctrl.add(&title, priority).await;
        });
    }

    pub fn update(&self, id: String, patch: TodoPatch) {
        let ctrl = self.controller();
        spawn_local(async move {
            let _ = ctrl.update(&id, patch).await;
        });
    }

    pub fn toggle(&self, id: String) {
        let ctrl = self.controller();
        spawn_local(async move {
            let _ = ctrl.toggle(&id).await;
        });
    }

    pub fn remove(&self, id: String) {
        let ctrl = self.controller();
        spawn_local(async move {
            let _ = ctrl.remove(&id).await;
        });
    }

    // ========================
    // Form
    // ========================

    pub fn open_add(&self) {
        self.set_form.set(Some(FormMode::Add));
    }

    pub fn open_edit(&self, todo: Todo) {
        self.set_form.set(Some(FormMode::Edit(todo)));
    }

    pub fn close_form(&self) {
        self.set_form.set(None);
    }

    // ========================
    // Delete confirmation
    // ========================

    pub fn ask_delete(&self, id: String) {
        self.set_delete_target.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.set_delete_target.set(None);
    }

    /// Delete the todo awaiting confirmation, if any
    pub fn confirm_delete(&self) {
        if let Some(id) = self.delete_target.get_untracked() {
            self.set_delete_target.set(None);
            self.remove(id);
        }
    }
}

/// Get the todos context
pub fn use_todos() -> TodosContext {
    expect_context::<TodosContext>()
}
