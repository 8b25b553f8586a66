//! Connectivity notifier surface of the enterprise service.
//!
//! Connectivity changes arrive independently of the status store, through a
//! listener the presenter registers while active. Detection itself is the
//! service's concern; this type only fans transitions out.

use acctmon_core::{Emitter, SubscriptionId};
use acctmon_types::ConnectivityState;
use std::cell::RefCell;
use std::rc::Rc;

pub struct ConnectivityNotifier {
    emitter: Emitter<ConnectivityState>,
    last: Rc<RefCell<Option<ConnectivityState>>>,
}

impl Clone for ConnectivityNotifier {
    fn clone(&self) -> Self {
        Self {
            emitter: self.emitter.clone(),
            last: Rc::clone(&self.last),
        }
    }
}

impl Default for ConnectivityNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityNotifier {
    pub fn new() -> Self {
        Self {
            emitter: Emitter::new(),
            last: Rc::new(RefCell::new(None)),
        }
    }

    /// Listeners fire on transitions only; there is no initial sync.
    pub fn add_listener(
        &self,
        listener: impl FnMut(&ConnectivityState) + 'static,
    ) -> SubscriptionId {
        self.emitter.subscribe(listener)
    }

    /// Idempotent; suppresses late callbacks like the store does.
    pub fn remove_listener(&self, id: SubscriptionId) {
        self.emitter.unsubscribe(id);
    }

    /// Called by the service when connectivity changes. Repeated reports of
    /// the same state are suppressed.
    pub fn notify(&self, state: ConnectivityState) {
        {
            let mut last = self.last.borrow_mut();
            if *last == Some(state) {
                return;
            }
            *last = Some(state);
        }
        self.emitter.emit(state);
    }

    pub fn listener_count(&self) -> usize {
        self.emitter.subscriber_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_fire_on_transition() {
        let notifier = ConnectivityNotifier::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        notifier.add_listener(move |state| sink.borrow_mut().push(*state));

        notifier.notify(ConnectivityState::connected(true));
        notifier.notify(ConnectivityState::disconnected());

        assert_eq!(seen.borrow().len(), 2);
        assert!(seen.borrow()[0].connected);
        assert!(!seen.borrow()[1].connected);
    }

    #[test]
    fn duplicate_reports_are_suppressed() {
        let notifier = ConnectivityNotifier::new();
        let count = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&count);
        notifier.add_listener(move |_| *sink.borrow_mut() += 1);

        notifier.notify(ConnectivityState::connected(false));
        notifier.notify(ConnectivityState::connected(false));

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn remove_listener_is_idempotent() {
        let notifier = ConnectivityNotifier::new();
        let count = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&count);
        let id = notifier.add_listener(move |_| *sink.borrow_mut() += 1);

        notifier.remove_listener(id);
        notifier.remove_listener(id);
        notifier.notify(ConnectivityState::connected(true));

        assert_eq!(*count.borrow(), 0);
        assert_eq!(notifier.listener_count(), 0);
    }
}
