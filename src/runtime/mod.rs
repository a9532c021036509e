use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::RodioEngine;
use crate::library::{DirectoryCatalog, load_catalog};
use crate::logging;
use crate::session::{PlaybackEngine, SessionHandle};

mod event_loop;
mod keys;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();
    let _log_guard = logging::init_logging(&settings.logging)?;
    if let Some(msg) = settings_warning {
        tracing::warn!("{msg}");
    }

    let dir = env::args().nth(1).unwrap_or_else(|| {
        env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let catalog = DirectoryCatalog::new(&dir, settings.library.clone());
    let session = SessionHandle::spawn(settings.session.clone())?;
    let snapshots = session.subscribe();
    session.set_catalog(load_catalog(&catalog))?;
    session.attach_engine(Box::new(|| {
        RodioEngine::new().map(|e| Box::new(e) as Box<dyn PlaybackEngine>)
    }))?;

    let mut app = App::new();
    app.set_current_dir(catalog.root().display().to_string());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result =
        event_loop::run(&mut terminal, &settings, &mut app, &session, &snapshots, &catalog);

    session.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
