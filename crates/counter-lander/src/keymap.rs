//! Key bindings
//!
//! Translates raw key presses into the few commands the counter screen knows.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Increment,
    Decrement,
    StartTimer,
    Quit,
}

pub fn command_for(key: &KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('+') | KeyCode::Up => Some(Command::Increment),
        KeyCode::Char('-') | KeyCode::Down => Some(Command::Decrement),
        KeyCode::Char('t') => Some(Command::StartTimer),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_counter_keys() {
        assert_eq!(command_for(&key(KeyCode::Char('+'))), Some(Command::Increment));
        assert_eq!(command_for(&key(KeyCode::Up)), Some(Command::Increment));
        assert_eq!(command_for(&key(KeyCode::Char('-'))), Some(Command::Decrement));
        assert_eq!(command_for(&key(KeyCode::Down)), Some(Command::Decrement));
        assert_eq!(command_for(&key(KeyCode::Char('t'))), Some(Command::StartTimer));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(command_for(&key(KeyCode::Char('c'))), None);
    }
}
