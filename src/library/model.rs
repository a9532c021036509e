use std::fmt;
use std::path::PathBuf;

/// Artist shown when a file carries no artist tag.
pub const UNKNOWN_ARTIST: &str = "<unknown>";

/// Stable identifier of a catalog entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One playable audio item. Never mutated after enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub duration_ms: u64,
    /// Sidecar cover image, if one was found next to the file.
    pub artwork: Option<PathBuf>,
    /// Location the playback engine opens.
    pub source: PathBuf,
}
