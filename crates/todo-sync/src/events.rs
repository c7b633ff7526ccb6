//! Change Listeners
//!
//! Observer registry with unregister-on-drop subscriptions.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Toast-level message for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Events emitted by the list controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// List state changed; re-read the snapshot
    Changed,
    Notice(Notice),
}

type Callback<E> = Rc<dyn Fn(&E)>;

struct Registry<E> {
    next_id: u64,
    entries: Vec<(u64, Callback<E>)>,
}

pub struct Listeners<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Listeners<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry { next_id: 0, entries: Vec::new() })),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            registry.next_id += 1;
            let id = registry.next_id;
            registry.entries.push((id, Rc::new(listener)));
            id
        };
        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().entries.retain(|(entry, _)| *entry != id);
                }
            })),
        }
    }

    /// Deliver `event` to every listener registered at call time
    pub fn emit(&self, event: &E) {
        // Snapshot so listeners may subscribe or unsubscribe while handling
        let callbacks: Vec<Callback<E>> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }

    pub fn clear(&self) {
        self.registry.borrow_mut().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration handle; dropping it unregisters the listener
#[must_use = "dropping a Subscription unregisters the listener"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_subscribers() {
        let listeners = Listeners::<u32>::new();
        let seen = Rc::new(Cell::new(0));
        let seen_clone = seen.clone();
        let _sub = listeners.subscribe(move |value| seen_clone.set(seen_clone.get() + value));

        listeners.emit(&2);
        listeners.emit(&3);
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let listeners = Listeners::<u32>::new();
        let seen = Rc::new(Cell::new(0));
        let seen_clone = seen.clone();
        let sub = listeners.subscribe(move |_| seen_clone.set(seen_clone.get() + 1));
        assert_eq!(listeners.len(), 1);

        drop(sub);
        listeners.emit(&1);
        assert_eq!(seen.get(), 0);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_subscription_outliving_registry() {
        let listeners = Listeners::<u32>::new();
        let sub = listeners.subscribe(|_| {});
        drop(listeners);
        sub.unsubscribe();
    }
}
