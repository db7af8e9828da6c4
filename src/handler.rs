use crate::event::Action;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handles a crossterm event and returns an optional Action.
pub fn handle_event(event: &Event) -> Option<Action> {
    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Press
    {
        return handle_key_press(key);
    }
    None
}

/// Handles key press events.
fn handle_key_press(key_event: &KeyEvent) -> Option<Action> {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(Action::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
        _ => None,
    }
}
