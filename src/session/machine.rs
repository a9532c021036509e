use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crate::config::SessionSettings;
use crate::library::Track;

use super::engine::PlaybackEngine;
use super::intent::PlaybackIntent;
use super::observers::Observers;
use super::state::{PlaybackFault, PlaybackState, Status, progress_of};
use super::ticker::Ticker;

/// Sole owner of `PlaybackState` and sole caller of the playback engine.
///
/// Every intent is applied synchronously, in arrival order. Engine-backed
/// intents are no-ops until an engine is attached.
pub struct PlaybackSession {
    engine: Option<Box<dyn PlaybackEngine>>,
    state: Arc<PlaybackState>,
    ticker: Ticker,
    observers: Observers,
    auto_advance: bool,
    /// The engine reported end of media for the current track.
    at_end: bool,
}

impl PlaybackSession {
    pub fn new(settings: &SessionSettings) -> Self {
        Self {
            engine: None,
            state: Arc::new(PlaybackState::default()),
            ticker: Ticker::new(Duration::from_millis(settings.progress_interval_ms.max(1))),
            observers: Observers::default(),
            auto_advance: settings.auto_advance,
            at_end: false,
        }
    }

    pub fn state(&self) -> &Arc<PlaybackState> {
        &self.state
    }

    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    pub fn is_sampling(&self) -> bool {
        self.ticker.is_running()
    }

    /// Attach the engine. A second attach is ignored.
    pub fn attach_engine(&mut self, engine: Box<dyn PlaybackEngine>) {
        if self.engine.is_some() {
            tracing::warn!("engine already attached, ignoring");
            return;
        }
        tracing::info!("playback engine attached");
        self.engine = Some(engine);
    }

    /// Register an observer; it receives the current snapshot right away.
    pub fn subscribe(&mut self, tx: Sender<Arc<PlaybackState>>) {
        if tx.send(Arc::clone(&self.state)).is_ok() {
            self.observers.add(tx);
        }
    }

    /// Replace the catalog snapshot used for next/previous.
    pub fn set_catalog(&mut self, tracks: Vec<Track>) {
        tracing::debug!(count = tracks.len(), "catalog replaced");
        let tracks: Arc<[Track]> = Arc::from(tracks);
        self.update(|s| s.tracks = tracks);
    }

    pub fn handle(&mut self, intent: PlaybackIntent) {
        tracing::debug!(?intent, status = ?self.state.status(), "handling intent");
        match intent {
            PlaybackIntent::Play => self.play(),
            PlaybackIntent::Pause => self.pause(),
            PlaybackIntent::Stop => self.stop(),
            PlaybackIntent::Next => {
                if let Some(track) = self.state.next_track().cloned() {
                    self.select(track);
                }
            }
            PlaybackIntent::Previous => {
                if let Some(track) = self.state.previous_track().cloned() {
                    self.select(track);
                }
            }
            PlaybackIntent::SelectTrack(track) => self.select(track),
            PlaybackIntent::SeekTo(position_ms) => self.seek(position_ms),
            PlaybackIntent::UpdateProgress(fraction) => self.update_progress(fraction),
        }
    }

    /// Time until the next progress sample, `None` while not playing.
    pub fn ticker_timeout(&self, now: Instant) -> Option<Duration> {
        self.ticker.timeout(now)
    }

    /// Run a due progress sample, handling end of media first.
    pub fn on_tick(&mut self, now: Instant) {
        if !self.ticker.fire_if_due(now) {
            return;
        }
        let completed = self
            .engine
            .as_mut()
            .map(|e| e.take_completion())
            .unwrap_or(false);
        if completed {
            self.complete();
        } else {
            self.sample();
        }
    }

    /// Publish engine position and duration for the current track.
    pub fn sample(&mut self) {
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        if self.state.current.is_none() {
            return;
        }
        let position_ms = engine.position();
        let duration_ms = match engine.duration() {
            0 => self.state.duration_ms,
            d => d,
        };
        self.update(|s| {
            s.position_ms = position_ms;
            s.duration_ms = duration_ms;
            s.progress = progress_of(position_ms, duration_ms);
        });
    }

    /// Stop sampling and release the engine. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.ticker.stop();
        if let Some(mut engine) = self.engine.take() {
            engine.pause();
            drop(engine);
            tracing::info!("playback engine released");
        }
        self.update(|s| s.is_playing = false);
    }

    fn select(&mut self, track: Track) {
        let Some(engine) = self.engine.as_mut() else {
            tracing::debug!(track = %track.id, "no engine attached, ignoring selection");
            return;
        };

        let was_playing = self.state.status() == Status::Playing;
        // No stale sample may be published for the outgoing track.
        self.ticker.stop();

        if let Err(e) = engine.load(&track) {
            tracing::warn!(track = %track.id, error = %e, "failed to load track");
            if was_playing {
                self.ticker.start(Instant::now());
            }
            let fault = PlaybackFault {
                track_id: track.id,
                message: e.to_string(),
            };
            self.update(|s| s.fault = Some(fault));
            return;
        }
        engine.play();
        self.at_end = false;

        tracing::info!(track = %track.id, title = %track.title, "playing");
        let duration_ms = track.duration_ms;
        self.update(|s| {
            s.current = Some(track);
            s.is_playing = true;
            s.progress = 0.0;
            s.position_ms = 0;
            s.duration_ms = duration_ms;
            s.fault = None;
        });
        self.ticker.start(Instant::now());
    }

    fn play(&mut self) {
        if self.state.status() != Status::Paused {
            return;
        }
        if self.at_end {
            if let Some(track) = self.state.current.clone() {
                self.select(track);
            }
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if !engine.is_playing() {
            engine.resume();
        }
        self.update(|s| s.is_playing = true);
        self.ticker.start(Instant::now());
    }

    fn pause(&mut self) {
        if self.state.status() != Status::Playing {
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.pause();
        self.ticker.stop();
        self.update(|s| s.is_playing = false);
    }

    fn stop(&mut self) {
        if self.state.status() == Status::Idle {
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.pause();
        // A finished track is reloaded on the next Play instead.
        if !self.at_end {
            if let Err(e) = engine.seek(0) {
                tracing::warn!(error = %e, "failed to rewind on stop");
            }
        }
        self.ticker.stop();
        self.update(|s| {
            s.is_playing = false;
            s.progress = 0.0;
            s.position_ms = 0;
        });
    }

    fn seek(&mut self, position_ms: u64) {
        if self.state.status() == Status::Idle {
            tracing::debug!(position_ms, "seek without a current track, ignoring");
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if self.at_end {
            // The finished source is drained; reload it paused so the seek sticks.
            let Some(track) = self.state.current.as_ref() else {
                return;
            };
            if let Err(e) = engine.load(track) {
                tracing::warn!(track = %track.id, error = %e, "failed to reload finished track");
                let fault = PlaybackFault {
                    track_id: track.id,
                    message: e.to_string(),
                };
                self.update(|s| s.fault = Some(fault));
                return;
            }
            self.at_end = false;
        }
        if let Err(e) = engine.seek(position_ms) {
            tracing::warn!(position_ms, error = %e, "seek failed");
            return;
        }
        self.sample();
    }

    fn update_progress(&mut self, fraction: f32) {
        if self.state.status() != Status::Playing {
            return;
        }
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.update(|s| s.progress = fraction);
    }

    fn complete(&mut self) {
        self.ticker.stop();
        self.at_end = true;

        let duration_ms = match self.engine.as_ref().map(|e| e.duration()) {
            Some(d) if d > 0 => d,
            _ => self.state.duration_ms,
        };
        tracing::debug!(duration_ms, "track finished");
        self.update(|s| {
            s.is_playing = false;
            s.position_ms = duration_ms;
            s.duration_ms = duration_ms;
            s.progress = progress_of(duration_ms, duration_ms);
        });

        if self.auto_advance {
            if let Some(next) = self.state.next_track().cloned() {
                self.select(next);
            }
        }
    }

    /// Build the next snapshot and publish it if anything changed.
    fn update(&mut self, f: impl FnOnce(&mut PlaybackState)) {
        let mut next = PlaybackState::clone(&self.state);
        f(&mut next);
        if next != *self.state {
            self.state = Arc::new(next);
            self.observers.publish(&self.state);
        }
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
