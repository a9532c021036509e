use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, View};
use crate::config::ControlsSettings;
use crate::session::PlaybackIntent;

/// What a key press asks the runtime to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Intent(PlaybackIntent),
    Up,
    Down,
    Top,
    Bottom,
    ToggleView,
    Rescan,
    Quit,
}

/// Map a key press to an `Action`, given the current app state.
pub fn action_for_key(key: KeyEvent, app: &App, controls: &ControlsSettings) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let seek_step_ms = controls.seek_seconds.saturating_mul(1000);

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc if app.view == View::NowPlaying => Some(Action::ToggleView),
        KeyCode::Char('f') | KeyCode::Tab => Some(Action::ToggleView),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
        KeyCode::Char('r') => Some(Action::Rescan),
        KeyCode::Enter => app.select_intent().map(Action::Intent),
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_intent().map(Action::Intent),
        KeyCode::Char('s') => Some(Action::Intent(PlaybackIntent::Stop)),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::Intent(PlaybackIntent::Next)),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Intent(PlaybackIntent::Previous)),
        KeyCode::Char('L') => app.seek_intent(true, seek_step_ms).map(Action::Intent),
        KeyCode::Char('H') => app.seek_intent(false, seek_step_ms).map(Action::Intent),
        _ => None,
    }
}
