use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::config::SessionSettings;
use crate::error::SessionClosed;
use crate::library::Track;

use super::engine::EngineFactory;
use super::intent::PlaybackIntent;
use super::state::PlaybackState;
use super::thread::{SessionMsg, spawn_session_thread};

/// Owner-side handle to a playback session running on its own thread.
pub struct SessionHandle {
    tx: Sender<SessionMsg>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl SessionHandle {
    pub fn spawn(settings: SessionSettings) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel::<SessionMsg>();
        let join = spawn_session_thread(rx, settings)?;
        Ok(Self {
            tx,
            join: Mutex::new(Some(join)),
        })
    }

    pub fn dispatch(&self, intent: PlaybackIntent) -> Result<(), SessionClosed> {
        self.send(SessionMsg::Intent(intent))
    }

    pub fn set_catalog(&self, tracks: Vec<Track>) -> Result<(), SessionClosed> {
        self.send(SessionMsg::SetCatalog(tracks))
    }

    /// Build and attach the engine on the session thread.
    pub fn attach_engine(&self, factory: EngineFactory) -> Result<(), SessionClosed> {
        self.send(SessionMsg::AttachEngine(factory))
    }

    /// Stream of snapshots, starting with the current one.
    pub fn subscribe(&self) -> Receiver<Arc<PlaybackState>> {
        let (tx, rx) = mpsc::channel();
        // A closed session simply yields a disconnected receiver.
        let _ = self.send(SessionMsg::Subscribe(tx));
        rx
    }

    /// Stop the session thread and wait for it to release the engine.
    pub fn shutdown(&self) {
        let _ = self.send(SessionMsg::Shutdown);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                if h.join().is_err() {
                    tracing::error!("session thread panicked");
                }
            }
        }
    }

    fn send(&self, msg: SessionMsg) -> Result<(), SessionClosed> {
        self.tx.send(msg).map_err(|_| SessionClosed)
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
