use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::library::{TrackCatalog, load_catalog};
use crate::session::{PlaybackState, SessionHandle};
use crate::ui;

use super::keys::{Action, action_for_key};

/// Main terminal event loop: applies session snapshots, draws, and turns key
/// presses into intents. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    session: &SessionHandle,
    snapshots: &Receiver<Arc<PlaybackState>>,
    catalog: &dyn TrackCatalog,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Only the newest snapshot matters for rendering.
        if let Some(state) = snapshots.try_iter().last() {
            app.apply_state(state);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.controls))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match action_for_key(key, app, &settings.controls) {
            Some(Action::Quit) => break,
            Some(Action::Intent(intent)) => session.dispatch(intent)?,
            Some(Action::Up) => app.move_up(),
            Some(Action::Down) => app.move_down(),
            Some(Action::Top) => app.move_top(),
            Some(Action::Bottom) => app.move_bottom(),
            Some(Action::ToggleView) => app.toggle_view(),
            Some(Action::Rescan) => {
                tracing::info!("rescanning library");
                session.set_catalog(load_catalog(catalog))?;
            }
            None => {}
        }
    }

    Ok(())
}
