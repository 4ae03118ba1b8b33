//! Listener registry
//!
//! Two ordered sequences: `next` receives every subscribe/unsubscribe,
//! `current` is the snapshot a dispatch iterates. The snapshot is refreshed
//! from `next` only when a dispatch starts notifying and `next` has diverged,
//! so changes made while listeners run apply from the following dispatch on.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Zero-argument change callback
pub type Listener = Rc<dyn Fn()>;

#[derive(Default)]
pub(crate) struct ListenerRegistry {
    current: Rc<Vec<Listener>>,
    next: Vec<(u64, Listener)>,
    next_diverged: bool,
    next_id: u64,
}

impl ListenerRegistry {
    pub(crate) fn add(&mut self, listener: Listener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.next.push((id, listener));
        self.next_diverged = true;
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let Some(index) = self.next.iter().position(|(entry, _)| *entry == id) else {
            return false;
        };
        self.next.remove(index);
        self.next_diverged = true;
        true
    }

    /// Listeners to notify for the dispatch that is about to notify
    pub(crate) fn snapshot(&mut self) -> Rc<Vec<Listener>> {
        if self.next_diverged {
            self.current = Rc::new(self.next.iter().map(|(_, l)| Rc::clone(l)).collect());
            self.next_diverged = false;
        }
        Rc::clone(&self.current)
    }

    pub(crate) fn len(&self) -> usize {
        self.next.len()
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe)
///
/// Dropping the handle keeps the listener registered.
pub struct Unsubscribe {
    registry: Weak<RefCell<ListenerRegistry>>,
    id: u64,
    subscribed: Cell<bool>,
}

impl Unsubscribe {
    pub(crate) fn new(registry: &Rc<RefCell<ListenerRegistry>>, id: u64) -> Self {
        Self {
            registry: Rc::downgrade(registry),
            id,
            subscribed: Cell::new(true),
        }
    }

    /// Remove the listener; calling this again is a no-op
    pub fn unsubscribe(&self) {
        if !self.subscribed.replace(false) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed.get()
    }
}
