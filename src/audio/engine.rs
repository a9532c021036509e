use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::error::EngineError;
use crate::library::Track;
use crate::session::PlaybackEngine;

use super::sink::create_sink;

/// `PlaybackEngine` backed by the default `rodio` output device.
pub struct RodioEngine {
    // Keep this alive for the lifetime of the engine.
    stream: OutputStream,
    sink: Option<Sink>,
    duration_ms: u64,
    /// Completion already reported for the current sink.
    completion_reported: bool,
}

impl RodioEngine {
    pub fn new() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::OutputUnavailable(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            duration_ms: 0,
            completion_reported: false,
        })
    }
}

impl PlaybackEngine for RodioEngine {
    fn load(&mut self, track: &Track) -> Result<(), EngineError> {
        let (new_sink, total) = create_sink(&self.stream, track)?;

        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.sink = Some(new_sink);
        // Not every decoder knows its length up front (e.g. VBR mp3).
        self.duration_ms = total
            .map(|d| d.as_millis() as u64)
            .filter(|&ms| ms > 0)
            .unwrap_or(track.duration_ms);
        self.completion_reported = false;
        tracing::debug!(path = %track.source.display(), duration_ms = self.duration_ms, "source loaded");
        Ok(())
    }

    fn play(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
    }

    fn resume(&mut self) {
        self.play();
    }

    fn seek(&mut self, position_ms: u64) -> Result<(), EngineError> {
        let sink = self.sink.as_ref().ok_or(EngineError::NotLoaded)?;
        if self.duration_ms > 0 && position_ms > self.duration_ms {
            tracing::debug!(position_ms, duration_ms = self.duration_ms, "seek past end ignored");
            return Ok(());
        }
        sink.try_seek(Duration::from_millis(position_ms))
            .map_err(|e| EngineError::Seek(e.to_string()))
    }

    fn position(&self) -> u64 {
        self.sink
            .as_ref()
            .map(|s| s.get_pos().as_millis() as u64)
            .unwrap_or(0)
    }

    fn duration(&self) -> u64 {
        self.duration_ms
    }

    fn is_playing(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.is_paused() && !s.empty())
            .unwrap_or(false)
    }

    fn take_completion(&mut self) -> bool {
        let finished = self
            .sink
            .as_ref()
            .map(|s| !s.is_paused() && s.empty())
            .unwrap_or(false);
        if finished && !self.completion_reported {
            self.completion_reported = true;
            return true;
        }
        false
    }
}

impl Drop for RodioEngine {
    fn drop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }
}
