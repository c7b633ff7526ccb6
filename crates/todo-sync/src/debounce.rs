//! Search Debouncer
//!
//! Raw search text only becomes the effective query after it has been
//! stable for the quiescence window. Each keystroke takes a ticket; only
//! the newest ticket may settle.

use std::time::Duration;

/// Raw and effective search text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub raw: String,
    pub debounced: String,
}

/// Handle for one pending keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Result of settling a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// A newer value arrived (or the debouncer was cancelled)
    Superseded,
    /// Raw text settled on the query already in effect
    Unchanged,
    /// The effective query changed
    Changed(String),
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    query: QueryState,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            query: QueryState::default(),
            generation: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn debounced(&self) -> &str {
        &self.query.debounced
    }

    /// Record a raw value; restarts the quiescence wait
    pub fn push(&mut self, raw: &str) -> Ticket {
        self.generation += 1;
        self.query.raw = raw.to_string();
        Ticket(self.generation)
    }

    /// Promote `raw` to `debounced` if `ticket` is still the newest
    pub fn settle(&mut self, ticket: Ticket) -> Settled {
        if ticket.0 != self.generation {
            return Settled::Superseded;
        }
        if self.query.raw == self.query.debounced {
            return Settled::Unchanged;
        }
        self.query.debounced = self.query.raw.clone();
        Settled::Changed(self.query.debounced.clone())
    }

    /// Invalidate every outstanding ticket
    pub fn cancel(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_settles() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let first = debouncer.push("m");
        let second = debouncer.push("mi");
        let third = debouncer.push("milk");

        assert_eq!(debouncer.settle(first), Settled::Superseded);
        assert_eq!(debouncer.settle(second), Settled::Superseded);
        assert_eq!(debouncer.settle(third), Settled::Changed("milk".into()));
        assert_eq!(debouncer.debounced(), "milk");
    }

    #[test]
    fn test_settling_on_current_query_is_unchanged() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.push("a");
        let ticket = debouncer.push("");
        assert_eq!(debouncer.settle(ticket), Settled::Unchanged);
        assert_eq!(debouncer.query().raw, "");
    }

    #[test]
    fn test_cancel_supersedes_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let ticket = debouncer.push("milk");
        debouncer.cancel();
        assert_eq!(debouncer.settle(ticket), Settled::Superseded);
        assert_eq!(debouncer.debounced(), "");
    }
}
