//! Service Layer - Core Traits
//!
//! Abstract interface to the remote to-do service plus the timer seam.
//! Implementations can use HTTP, in-memory scripts, etc.

use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{self, Either, LocalBoxFuture};

use crate::error::{SyncError, SyncResult};
use crate::models::{ListRequest, Priority, Todo, TodoPage, TodoPatch};

/// Remote to-do service
///
/// Futures are not required to be `Send`; the controller runs on a single
/// UI thread.
#[async_trait(?Send)]
pub trait TodoService {
    /// Fetch one page of todos matching the query
    async fn list_todos(&self, request: &ListRequest) -> SyncResult<TodoPage>;

    /// Create a todo and return the server's canonical copy
    async fn create_todo(&self, title: &str, priority: Priority) -> SyncResult<Todo>;

    /// Apply a partial update
    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> SyncResult<()>;

    /// Delete a todo by ID
    async fn delete_todo(&self, id: &str) -> SyncResult<()>;
}

#[async_trait(?Send)]
impl<T: TodoService + ?Sized> TodoService for Rc<T> {
    async fn list_todos(&self, request: &ListRequest) -> SyncResult<TodoPage> {
        (**self).list_todos(request).await
    }

    async fn create_todo(&self, title: &str, priority: Priority) -> SyncResult<Todo> {
        (**self).create_todo(title, priority).await
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> SyncResult<()> {
        (**self).update_todo(id, patch).await
    }

    async fn delete_todo(&self, id: &str) -> SyncResult<()> {
        (**self).delete_todo(id).await
    }
}

/// Source of delays for debouncing and request timeouts
pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

impl<T: Timer + ?Sized> Timer for Rc<T> {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        (**self).sleep(duration)
    }
}

/// Race `call` against `timer`; expiry yields [`SyncError::Timeout`]
pub async fn with_timeout<T, F, R>(timer: &T, duration: Duration, call: F) -> SyncResult<R>
where
    T: Timer + ?Sized,
    F: Future<Output = SyncResult<R>>,
{
    let call = pin!(call);
    match future::select(call, timer.sleep(duration)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(SyncError::Timeout(duration)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;

    struct Instant;

    impl Timer for Instant {
        fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
            future::ready(()).boxed_local()
        }
    }

    struct Never;

    impl Timer for Never {
        fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
            future::pending().boxed_local()
        }
    }

    #[test]
    fn test_call_wins_over_pending_timer() {
        let result = block_on(with_timeout(&Never, Duration::from_secs(1), async { Ok(7) }));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_expired_timer_yields_timeout() {
        let duration = Duration::from_secs(30);
        let result: SyncResult<()> =
            block_on(with_timeout(&Instant, duration, future::pending()));
        assert_eq!(result, Err(SyncError::Timeout(duration)));
    }
}
