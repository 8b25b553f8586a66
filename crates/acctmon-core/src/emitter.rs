//! Typed event emitter with synchronous, ordered delivery.
//!
//! Subscribers are invoked in subscription order. Unsubscribing is
//! idempotent and takes effect immediately, including against a delivery
//! pass that is already in flight: once `unsubscribe` returns, the callback
//! will not run again. An `emit` issued from inside a callback is queued and
//! delivered after the current pass completes, so delivery is never
//! re-entrant and per-subscriber ordering is preserved.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

/// Handle identifying one subscription. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber<T> {
    id: SubscriptionId,
    callback: Box<dyn FnMut(&T)>,
}

struct Inner<T> {
    subscribers: Vec<Subscriber<T>>,
    /// Subscribed while a delivery pass was running; joins `subscribers`
    /// when the pass completes.
    incoming: Vec<Subscriber<T>>,
    /// Unsubscribed while a delivery pass was running.
    cancelled: HashSet<SubscriptionId>,
    /// Emissions queued from inside a callback.
    pending: VecDeque<T>,
    delivering: bool,
    next_id: u64,
}

pub struct Emitter<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Emitter<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                subscribers: Vec::new(),
                incoming: Vec::new(),
                cancelled: HashSet::new(),
                pending: VecDeque::new(),
                delivering: false,
                next_id: 0,
            })),
        }
    }

    /// Register a callback. It does not fire here; callers that need an
    /// immediate initial delivery layer it on top (see `StatusStore`).
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        let subscriber = Subscriber {
            id,
            callback: Box::new(callback),
        };
        if inner.delivering {
            inner.incoming.push(subscriber);
        } else {
            inner.subscribers.push(subscriber);
        }
        id
    }

    /// Idempotent. After this returns the callback will not be invoked
    /// again, even if a delivery pass is currently running.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut inner = self.inner.borrow_mut();
        if inner.delivering {
            inner.cancelled.insert(id);
        } else {
            inner.subscribers.retain(|s| s.id != id);
        }
    }

    /// Deliver `value` to every subscriber, in subscription order.
    pub fn emit(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.delivering {
                inner.pending.push_back(value);
                return;
            }
            inner.delivering = true;
        }
        self.deliver_all(&value);
        self.drain_pending();
        self.finish_pass();
    }

    /// Deliver `value` to a single subscriber, then flush anything its
    /// callback queued. Used for the fire-immediately-on-subscribe contract.
    pub fn notify_one(&self, id: SubscriptionId, value: &T) {
        let in_flight = {
            let mut inner = self.inner.borrow_mut();
            if inner.cancelled.contains(&id) {
                return;
            }
            let delivering = inner.delivering;
            if !delivering {
                inner.delivering = true;
            }
            delivering
        };

        if in_flight {
            // Subscribed from inside a delivery pass; the subscriber sits in
            // the incoming list until the outer pass completes, which also
            // owns draining the pending queue.
            let mut incoming = std::mem::take(&mut self.inner.borrow_mut().incoming);
            if let Some(subscriber) = incoming.iter_mut().find(|s| s.id == id) {
                (subscriber.callback)(value);
            }
            let mut inner = self.inner.borrow_mut();
            let added = std::mem::take(&mut inner.incoming);
            incoming.extend(added);
            inner.incoming = incoming;
            return;
        }

        let mut subscribers = std::mem::take(&mut self.inner.borrow_mut().subscribers);
        if let Some(subscriber) = subscribers.iter_mut().find(|s| s.id == id)
            && !self.inner.borrow().cancelled.contains(&id)
        {
            (subscriber.callback)(value);
        }
        self.inner.borrow_mut().subscribers = subscribers;
        self.drain_pending();
        self.finish_pass();
    }

    pub fn subscriber_count(&self) -> usize {
        let inner = self.inner.borrow();
        inner.subscribers.len() + inner.incoming.len()
    }

    fn deliver_all(&self, value: &T) {
        // Take the list out so callbacks can subscribe/unsubscribe/emit
        // through the shared handle without aliasing the borrow. While the
        // pass runs, new subscribers land in `incoming` and removals in
        // `cancelled`, so putting the list back cannot clobber anything.
        let mut subscribers = std::mem::take(&mut self.inner.borrow_mut().subscribers);
        for subscriber in subscribers.iter_mut() {
            let skip = self.inner.borrow().cancelled.contains(&subscriber.id);
            if !skip {
                (subscriber.callback)(value);
            }
        }
        self.inner.borrow_mut().subscribers = subscribers;
    }

    fn drain_pending(&self) {
        loop {
            let next = self.inner.borrow_mut().pending.pop_front();
            match next {
                Some(value) => self.deliver_all(&value),
                None => break,
            }
        }
    }

    fn finish_pass(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.delivering = false;
        let cancelled = std::mem::take(&mut inner.cancelled);
        let incoming = std::mem::take(&mut inner.incoming);
        inner.subscribers.retain(|s| !cancelled.contains(&s.id));
        inner
            .subscribers
            .extend(incoming.into_iter().filter(|s| !cancelled.contains(&s.id)));
    }
}
