//! Loading placeholders

use leptos::prelude::*;

/// Grey card shown while a page is loading
#[component]
pub fn TodoSkeleton() -> impl IntoView {
    view! {
        <div class="todo-card skeleton">
            <span class="skeleton-box check"></span>
            <span class="skeleton-box line"></span>
        </div>
    }
}

/// A stack of `count` skeleton cards
#[component]
pub fn SkeletonStack(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="skeleton-stack">
            {(0..count).map(|_| view! { <TodoSkeleton /> }).collect_view()}
        </div>
    }
}
