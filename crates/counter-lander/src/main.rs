use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event as TermEvent, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

mod actions;
mod dispatcher;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod store;
mod timer;
mod view_models;
mod views;

use actions::AppAction;
use counter_config::CounterConfig;
use dispatcher::{Dispatcher, Event};
use keymap::Command;
use store::AppStore;
use timer::TimerControl;
use view_models::CounterViewModel;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let log_file = logger::init()?;

    log::info!("Starting counter-lander, logging to {}", log_file.display());

    let config = CounterConfig::load();
    let (dispatcher, events) = Dispatcher::channel();
    let store = store::build_store(&config);
    let timer = TimerControl::new(dispatcher, Duration::from_millis(config.timer_interval_ms));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &store, &events, &timer, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("Exiting counter-lander");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &AppStore,
    events: &Receiver<Event>,
    timer: &TimerControl,
    config: &CounterConfig,
) -> anyhow::Result<()> {
    // Render whenever the store notifies, plus once at start
    let dirty = Rc::new(Cell::new(true));
    let _render_subscription = {
        let dirty = Rc::clone(&dirty);
        store.subscribe(move || dirty.set(true))
    };
    let tick_rate = Duration::from_millis(config.tick_rate_ms);

    loop {
        if dirty.replace(false) {
            let vm =
                CounterViewModel::from_state(&store.get_state(), config.limit, timer.is_running());
            terminal.draw(|frame| {
                let area = frame.area();
                views::render(&vm, area, frame);
            })?;
        }

        // Actions queued by background work
        for event in events.try_iter() {
            store.dispatch(event.into()).context("Failed to dispatch queued event")?;
        }

        if !event::poll(tick_rate)? {
            continue;
        }
        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let action = match keymap::command_for(&key) {
                    Some(Command::Quit) => break,
                    Some(Command::Increment) => AppAction::Increment,
                    Some(Command::Decrement) => AppAction::Decrement,
                    Some(Command::StartTimer) => timer.start_action(),
                    None => continue,
                };
                store.dispatch(action).context("Failed to dispatch key action")?;
            }
            TermEvent::Resize(_, _) => dirty.set(true),
            _ => {}
        }
    }

    Ok(())
}
