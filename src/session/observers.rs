use std::sync::Arc;
use std::sync::mpsc::Sender;

use super::state::PlaybackState;

/// Subscribers to playback snapshots. Disconnected receivers are dropped on publish.
#[derive(Default)]
pub struct Observers {
    senders: Vec<Sender<Arc<PlaybackState>>>,
}

impl Observers {
    pub fn add(&mut self, tx: Sender<Arc<PlaybackState>>) {
        self.senders.push(tx);
    }

    pub fn publish(&mut self, state: &Arc<PlaybackState>) {
        self.senders.retain(|tx| tx.send(Arc::clone(state)).is_ok());
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.senders.len()
    }
}
