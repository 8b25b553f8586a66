//! Diff-on-change reactive store over the externally-owned status values.
//!
//! This is the monitor seam of the component: the auth controller publishes
//! service and auth state into the store, and the presenter subscribes. A
//! subscription fires once immediately with the current snapshot and then on
//! every subsequent change to either value. Publishing an unchanged value is
//! suppressed, so subscribers only ever see transitions.

use crate::emitter::{Emitter, SubscriptionId};
use acctmon_types::{AuthState, ServiceState};
use std::cell::RefCell;
use std::rc::Rc;

/// The pair of observed values, as last published.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusSnapshot {
    pub service: ServiceState,
    pub auth: AuthState,
}

pub struct StatusStore {
    current: Rc<RefCell<StatusSnapshot>>,
    emitter: Emitter<StatusSnapshot>,
}

impl Clone for StatusStore {
    fn clone(&self) -> Self {
        Self {
            current: Rc::clone(&self.current),
            emitter: self.emitter.clone(),
        }
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusStore {
    pub fn new() -> Self {
        Self {
            current: Rc::new(RefCell::new(StatusSnapshot::default())),
            emitter: Emitter::new(),
        }
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        self.current.borrow().clone()
    }

    /// Register a callback and fire it once immediately with the current
    /// snapshot, synchronizing the subscriber before any transition arrives.
    pub fn subscribe(&self, callback: impl FnMut(&StatusSnapshot) + 'static) -> SubscriptionId {
        let id = self.emitter.subscribe(callback);
        let snapshot = self.snapshot();
        self.emitter.notify_one(id, &snapshot);
        id
    }

    /// Synchronous and idempotent; after this returns the callback sees no
    /// further snapshots, even mid-delivery.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.emitter.unsubscribe(id);
    }

    pub fn set_service_state(&self, service: ServiceState) {
        let snapshot = {
            let mut current = self.current.borrow_mut();
            if current.service == service {
                return;
            }
            current.service = service;
            current.clone()
        };
        self.emitter.emit(snapshot);
    }

    pub fn set_auth_state(&self, auth: AuthState) {
        let snapshot = {
            let mut current = self.current.borrow_mut();
            if current.auth == auth {
                return;
            }
            current.auth = auth;
            current.clone()
        };
        self.emitter.emit(snapshot);
    }

    pub fn subscriber_count(&self) -> usize {
        self.emitter.subscriber_count()
    }
}
