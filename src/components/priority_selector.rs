//! Priority Selector Component
//!
//! Low / Medium / High toggle buttons.

use leptos::prelude::*;
use crate::models::Priority;

/// Priority buttons for the todo form
#[component]
pub fn PrioritySelector(
    current: ReadSignal<Priority>,
    on_change: impl Fn(Priority) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="priority-selector">
            {Priority::ALL.iter().map(|&priority| {
                let is_selected = move || current.get() == priority;
                view! {
                    <button
                        type="button"
                        class=move || {
                            if is_selected() {
                                format!("priority-btn {} active", priority.as_str())
                            } else {
                                format!("priority-btn {}", priority.as_str())
                            }
                        }
                        on:click=move |_| on_change(priority)
                    >
                        {priority.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
