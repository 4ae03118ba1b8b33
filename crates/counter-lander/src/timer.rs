//! Background timer
//!
//! Starting the timer is itself an action: a thunk that stamps the current
//! time right away and then leaves a thread behind that keeps reporting
//! ticks through the [`Dispatcher`].

use crate::actions::AppAction;
use crate::dispatcher::{Dispatcher, Event};
use chrono::Local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Clone)]
pub struct TimerControl {
    dispatcher: Dispatcher,
    interval: Duration,
    started: Arc<AtomicBool>,
}

impl TimerControl {
    pub fn new(dispatcher: Dispatcher, interval: Duration) -> Self {
        Self {
            dispatcher,
            interval,
            started: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Thunk starting the timer; a timer that already runs is left alone
    ///
    /// The first tick is stamped right away instead of one interval later,
    /// and repeated starts never stack up extra tickers.
    pub fn start_action(&self) -> AppAction {
        let control = self.clone();
        AppAction::thunk(move |dispatch, _get_state| {
            if control.started.swap(true, Ordering::SeqCst) {
                log::debug!("Timer already running");
                return;
            }

            if let Err(e) = dispatch.call(AppAction::Timer(Local::now().time())) {
                log::error!("Failed to dispatch first timer tick: {}", e);
            }
            control.spawn_ticker();
        })
    }

    fn spawn_ticker(&self) {
        let dispatcher = self.dispatcher.clone();
        let interval = self.interval;
        log::info!("Timer started, ticking every {:?}", interval);

        thread::spawn(move || loop {
            thread::sleep(interval);
            if !dispatcher.dispatch(Event::TimerFired(Local::now().time())) {
                break;
            }
        });
    }
}
