use crate::error::EngineError;
use crate::library::Track;

/// Audio decode/output capability driven by the playback session.
///
/// `play` is only valid after a successful `load`. Positions and durations are
/// in milliseconds.
pub trait PlaybackEngine {
    /// Prepare `track` for playback, replacing whatever was loaded before.
    fn load(&mut self, track: &Track) -> Result<(), EngineError>;
    /// Start the freshly loaded track.
    fn play(&mut self);
    fn pause(&mut self);
    /// Continue after `pause`.
    fn resume(&mut self);
    /// Jump to `position_ms`. Targets past the end are ignored.
    fn seek(&mut self, position_ms: u64) -> Result<(), EngineError>;
    fn position(&self) -> u64;
    fn duration(&self) -> u64;
    fn is_playing(&self) -> bool;
    /// Returns `true` exactly once after the started track reaches end of media.
    fn take_completion(&mut self) -> bool;
}

/// Builds an engine on the session thread. Audio output handles are
/// generally not `Send`, so the engine itself never crosses threads.
pub type EngineFactory =
    Box<dyn FnOnce() -> Result<Box<dyn PlaybackEngine>, EngineError> + Send + 'static>;
