//! Request bookkeeping for the browser's asynchronous calls.
//!
//! Every call is tagged with a [`Ticket`]. A response is applied only when its
//! ticket is still the current one, so answers arriving after a dialog was
//! closed or a newer request was issued are dropped.

pub mod pipeline;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Issues monotonically increasing tickets.
#[derive(Clone, Debug, Default)]
pub struct Tickets {
    last: u64,
}

impl Tickets {
    pub fn issue(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum JobStatus<T> {
    Idle,
    InFlight,
    Completed(T),
    Failed(String),
}

/// State of one user-triggered action (verify, preview, vendor code).
///
/// At most one request per slot is in flight; the triggering control stays
/// disabled until it resolves. A new run replaces the previous result.
#[derive(Clone, Debug)]
pub struct RequestSlot<T> {
    status: JobStatus<T>,
    tickets: Tickets,
    current: Option<Ticket>,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        RequestSlot {
            status: JobStatus::Idle,
            tickets: Tickets::default(),
            current: None,
        }
    }
}

impl<T> RequestSlot<T> {
    /// Starts a request, or returns `None` while the previous one is outstanding.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.is_in_flight() {
            return None;
        }
        let ticket = self.tickets.issue();
        self.current = Some(ticket);
        self.status = JobStatus::InFlight;
        Some(ticket)
    }

    /// Applies a response. Returns `false` when the ticket is stale.
    pub fn finish(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if self.current != Some(ticket) {
            return false;
        }
        self.current = None;
        self.status = match result {
            Ok(value) => JobStatus::Completed(value),
            Err(err) => JobStatus::Failed(err.to_string()),
        };
        true
    }

    /// Forgets any outstanding request and result.
    pub fn reset(&mut self) {
        self.current = None;
        self.status = JobStatus::Idle;
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.status, JobStatus::InFlight)
    }

    pub fn status(&self) -> &JobStatus<T> {
        &self.status
    }

    pub fn value(&self) -> Option<&T> {
        match &self.status {
            JobStatus::Completed(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            JobStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slot_refuses_overlapping_requests() {
        let mut slot: RequestSlot<u32> = RequestSlot::default();
        let ticket = slot.begin().unwrap();
        assert!(slot.is_in_flight());
        assert_eq!(slot.begin(), None);

        assert!(slot.finish(ticket, Ok(7)));
        assert_eq!(slot.value(), Some(&7));
        assert!(slot.begin().is_some());
        assert_eq!(slot.value(), None);
    }

    #[test]
    fn failure_replaces_previous_result() {
        let mut slot: RequestSlot<u32> = RequestSlot::default();
        let first = slot.begin().unwrap();
        slot.finish(first, Ok(1));
        let second = slot.begin().unwrap();
        slot.finish(second, Err(ApiError::Network("offline".to_string())));
        assert_eq!(slot.value(), None);
        assert_eq!(slot.error(), Some("Network error: offline"));
    }

    #[test]
    fn responses_after_reset_are_stale() {
        let mut slot: RequestSlot<u32> = RequestSlot::default();
        let ticket = slot.begin().unwrap();
        slot.reset();
        assert!(!slot.finish(ticket, Ok(3)));
        assert_eq!(slot.status(), &JobStatus::Idle);

        let fresh = slot.begin().unwrap();
        assert_ne!(fresh, ticket);
        assert!(!slot.finish(ticket, Ok(4)));
        assert!(slot.finish(fresh, Ok(5)));
    }
}
