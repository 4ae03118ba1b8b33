//! Dispatcher for actions produced off the UI thread
//!
//! The store is single threaded. Background work (the timer) reports through
//! this channel instead; the event loop drains it and dispatches every event
//! as a regular action, one at a time, so all dispatches stay serialized on
//! the UI thread.

use crate::actions::AppAction;
use chrono::NaiveTime;
use std::sync::mpsc::{self, Receiver, Sender};

/// Facts reported by background work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    TimerFired(NaiveTime),
}

impl From<Event> for AppAction {
    fn from(event: Event) -> Self {
        match event {
            Event::TimerFired(at) => AppAction::Timer(at),
        }
    }
}

/// Sending half of the event queue, cheap to clone into threads
#[derive(Clone)]
pub struct Dispatcher {
    event_tx: Sender<Event>,
}

impl Dispatcher {
    /// Create the dispatcher together with the receiver the event loop drains
    pub fn channel() -> (Self, Receiver<Event>) {
        let (event_tx, event_rx) = mpsc::channel();
        (Self { event_tx }, event_rx)
    }

    /// Queue an event for the UI thread
    ///
    /// Returns `false` once the receiving side is gone.
    pub fn dispatch(&self, event: Event) -> bool {
        match self.event_tx.send(event) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Dispatcher: event loop gone, dropping {:?}", e.0);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatched_event_reaches_receiver() {
        let (dispatcher, events) = Dispatcher::channel();
        let at = NaiveTime::from_hms_opt(9, 5, 0).unwrap();

        assert!(dispatcher.dispatch(Event::TimerFired(at)));
        assert_eq!(events.try_recv(), Ok(Event::TimerFired(at)));
    }

    #[test]
    fn test_dispatch_after_receiver_dropped() {
        let (dispatcher, events) = Dispatcher::channel();
        drop(events);
        assert!(!dispatcher.dispatch(Event::TimerFired(NaiveTime::MIN)));
    }

    #[test]
    fn test_event_converts_to_timer_action() {
        let at = NaiveTime::from_hms_opt(23, 59, 1).unwrap();
        assert!(matches!(AppAction::from(Event::TimerFired(at)), AppAction::Timer(t) if t == at));
    }
}
