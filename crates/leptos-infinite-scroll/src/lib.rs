//! Leptos Infinite Scroll Utilities
//!
//! Visibility trigger for the end of a list, backed by IntersectionObserver.
//! The observer is disconnected when its owner is cleaned up.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Margin around the viewport that already counts as visible
pub const DEFAULT_ROOT_MARGIN: &str = "200px";

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Observes one element; disconnects when dropped
pub struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    // Must outlive the observer
    _callback: EntriesCallback,
}

impl VisibilityObserver {
    /// Call `on_visible` each time `target` enters the (margin-extended) viewport
    pub fn observe<F>(target: &web_sys::Element, root_margin: &str, on_visible: F) -> Result<Self, JsValue>
    where
        F: Fn() + 'static,
    {
        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                on_visible();
            }
        });

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(target);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Empty marker placed after the last list item
///
/// Fires `on_visible` whenever it scrolls into view. Callers are expected
/// to ignore triggers they cannot serve (already loading, list exhausted).
#[component]
pub fn ScrollSentinel(
    #[prop(into)] on_visible: Callback<()>,
    #[prop(optional, into)] root_margin: Option<String>,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let observer = StoredValue::new_local(None::<VisibilityObserver>);
    let root_margin = root_margin.unwrap_or_else(|| DEFAULT_ROOT_MARGIN.to_string());

    Effect::new(move |_| {
        let Some(element) = node.get() else { return };
        match VisibilityObserver::observe(&element, &root_margin, move || on_visible.run(())) {
            // Replacing drops (and disconnects) any previous observer
            Ok(created) => observer.set_value(Some(created)),
            Err(err) => log::warn!("[SCROLL] IntersectionObserver unavailable: {:?}", err),
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|current| {
            current.take();
        });
    });

    view! { <div class="scroll-sentinel" node_ref=node></div> }
}
