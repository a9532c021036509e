use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::config::SessionSettings;
use crate::library::Track;

use super::machine::PlaybackSession;
use super::engine::EngineFactory;
use super::intent::PlaybackIntent;
use super::state::PlaybackState;

/// Messages accepted by the session thread.
pub(super) enum SessionMsg {
    Intent(PlaybackIntent),
    SetCatalog(Vec<Track>),
    AttachEngine(EngineFactory),
    Subscribe(Sender<Arc<PlaybackState>>),
    Shutdown,
}

pub(super) fn spawn_session_thread(
    rx: Receiver<SessionMsg>,
    settings: SessionSettings,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("minim-session".to_string())
        .spawn(move || run(rx, settings))
}

fn run(rx: Receiver<SessionMsg>, settings: SessionSettings) {
    let mut session = PlaybackSession::new(&settings);

    loop {
        // Block indefinitely unless a progress sample is pending.
        let msg = match session.ticker_timeout(Instant::now()) {
            Some(timeout) => match rx.recv_timeout(timeout) {
                Ok(msg) => Some(msg),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            },
            None => match rx.recv() {
                Ok(msg) => Some(msg),
                Err(_) => break,
            },
        };

        match msg {
            Some(SessionMsg::Intent(intent)) => session.handle(intent),
            Some(SessionMsg::SetCatalog(tracks)) => session.set_catalog(tracks),
            Some(SessionMsg::AttachEngine(factory)) => match factory() {
                Ok(engine) => session.attach_engine(engine),
                Err(e) => tracing::warn!(error = %e, "failed to start playback engine"),
            },
            Some(SessionMsg::Subscribe(tx)) => session.subscribe(tx),
            Some(SessionMsg::Shutdown) => break,
            None => {}
        }

        session.on_tick(Instant::now());
    }

    tracing::debug!(
        status = ?session.state().status(),
        engine_attached = session.has_engine(),
        sampling = session.is_sampling(),
        "session thread exiting"
    );
    session.shutdown();
}
