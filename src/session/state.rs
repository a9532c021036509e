//! Playback snapshot published to observers.

use std::sync::Arc;

use crate::library::{Track, TrackId};

/// Coarse session state derived from a `PlaybackState`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    /// No current track.
    Idle,
    Playing,
    Paused,
}

/// Last load failure, kept until a track loads successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackFault {
    pub track_id: TrackId,
    pub message: String,
}

/// Immutable snapshot of playback. A new value is built on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current: Option<Track>,
    pub is_playing: bool,
    /// Fraction of the track played, within `0.0..=1.0`.
    pub progress: f32,
    pub position_ms: u64,
    pub duration_ms: u64,
    /// Catalog order used for next/previous.
    pub tracks: Arc<[Track]>,
    pub fault: Option<PlaybackFault>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current: None,
            is_playing: false,
            progress: 0.0,
            position_ms: 0,
            duration_ms: 0,
            tracks: Arc::from(Vec::new()),
            fault: None,
        }
    }
}

impl PlaybackState {
    pub fn status(&self) -> Status {
        match (&self.current, self.is_playing) {
            (None, _) => Status::Idle,
            (Some(_), true) => Status::Playing,
            (Some(_), false) => Status::Paused,
        }
    }

    /// Catalog index of the current track, matched by id.
    pub fn current_index(&self) -> Option<usize> {
        let id = self.current.as_ref()?.id;
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Track following the current one, if any.
    pub fn next_track(&self) -> Option<&Track> {
        let i = self.current_index()?;
        self.tracks.get(i + 1)
    }

    /// Track preceding the current one, if any.
    pub fn previous_track(&self) -> Option<&Track> {
        let i = self.current_index()?;
        i.checked_sub(1).and_then(|p| self.tracks.get(p))
    }
}

/// `position / duration`, or 0 when the duration is unknown.
pub fn progress_of(position_ms: u64, duration_ms: u64) -> f32 {
    if duration_ms == 0 {
        return 0.0;
    }
    (position_ms as f64 / duration_ms as f64).clamp(0.0, 1.0) as f32
}
