//! Application model: the `App` view state rendered by the TUI.
//!
//! The `App` struct mirrors the latest playback snapshot and holds the
//! purely presentational state (cursor, active view).

use std::sync::Arc;

use crate::library::{Track, TrackId};
use crate::session::{PlaybackIntent, PlaybackState, Status};

/// Which screen is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum View {
    /// Track list with the mini-player underneath.
    #[default]
    Library,
    /// Full-screen player for the current track.
    NowPlaying,
}

/// The main application model.
pub struct App {
    pub state: Arc<PlaybackState>,
    pub selected: usize,
    pub view: View,
    /// Move the cursor to the current track whenever it changes.
    pub follow_playback: bool,
    pub current_dir: Option<String>,
    last_current: Option<TrackId>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: Arc::new(PlaybackState::default()),
            selected: 0,
            view: View::Library,
            follow_playback: true,
            current_dir: None,
            last_current: None,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.state.tracks
    }

    pub fn has_tracks(&self) -> bool {
        !self.state.tracks.is_empty()
    }

    /// Record the library directory in the app state.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    /// Take a new snapshot from the session.
    pub fn apply_state(&mut self, state: Arc<PlaybackState>) {
        let current = state.current.as_ref().map(|t| t.id);
        self.state = state;

        if self.follow_playback && current.is_some() && current != self.last_current {
            if let Some(i) = self.state.current_index() {
                self.selected = i;
            }
        }
        self.last_current = current;
        self.clamp_selected();
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.state.tracks.get(self.selected)
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.state.tracks.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_top(&mut self) {
        self.selected = 0;
    }

    pub fn move_bottom(&mut self) {
        self.selected = self.state.tracks.len().saturating_sub(1);
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Library => View::NowPlaying,
            View::NowPlaying => View::Library,
        };
    }

    /// Intent for "play the highlighted track".
    pub fn select_intent(&self) -> Option<PlaybackIntent> {
        self.selected_track()
            .cloned()
            .map(PlaybackIntent::SelectTrack)
    }

    /// Intent for the play/pause toggle. Starts the highlighted track when idle.
    pub fn toggle_intent(&self) -> Option<PlaybackIntent> {
        match self.state.status() {
            Status::Playing => Some(PlaybackIntent::Pause),
            Status::Paused => Some(PlaybackIntent::Play),
            Status::Idle => self.select_intent(),
        }
    }

    /// Intent to seek `step_ms` forward or backward from the last known position.
    pub fn seek_intent(&self, forward: bool, step_ms: u64) -> Option<PlaybackIntent> {
        if self.state.status() == Status::Idle {
            return None;
        }
        let pos = self.state.position_ms;
        let target = if forward {
            pos.saturating_add(step_ms)
        } else {
            pos.saturating_sub(step_ms)
        };
        Some(PlaybackIntent::SeekTo(target))
    }

    fn clamp_selected(&mut self) {
        let len = self.state.tracks.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
