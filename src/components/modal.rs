//! Modal Components
//!
//! Backdrop dialog and a yes/no confirmation built on it.

use leptos::prelude::*;

/// Dialog over a dimmed backdrop; backdrop click or × closes it
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

/// Destructive action confirmation
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] detail: Option<String>,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal open=open on_close=on_cancel>
            <div class="confirm-modal">
                <h2>{title.clone()}</h2>
                {detail.clone().map(|detail| view! { <p class="confirm-detail">{detail}</p> })}
                <div class="form-actions">
                    <button class="danger-btn" on:click=move |_| on_confirm.run(())>
                        {confirm_label.clone()}
                    </button>
                    <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </Modal>
    }
}
