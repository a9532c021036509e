use crate::library::Track;

/// Command sent to the playback session by the user or the system.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackIntent {
    /// Resume the paused track.
    Play,
    /// Pause the playing track, keeping its position.
    Pause,
    /// Pause and rewind to the start, keeping the current track.
    Stop,
    /// Select the track after the current one in catalog order.
    Next,
    /// Select the track before the current one in catalog order.
    Previous,
    /// Load and play `Track` from the beginning.
    SelectTrack(Track),
    /// Seek the engine to a position in milliseconds.
    SeekTo(u64),
    /// Overwrite the progress fraction while playing.
    UpdateProgress(f32),
}
