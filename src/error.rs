//! Error types shared by the catalog and the playback engine.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a `PlaybackEngine` implementation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No audio output device could be opened.
    #[error("audio output unavailable: {0}")]
    OutputUnavailable(String),

    /// The source file could not be opened.
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file was opened but could not be decoded.
    #[error("failed to decode {path:?}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The engine refused a seek request.
    #[error("seek failed: {0}")]
    Seek(String),

    /// An operation needed a loaded source but none was loaded.
    #[error("no source loaded")]
    NotLoaded,
}

/// Failures reported by a `TrackCatalog`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured library root is missing or not a directory.
    #[error("library root {0:?} is not a directory")]
    NotADirectory(PathBuf),

    /// The library root could not be read.
    #[error("failed to read library root {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The session thread is gone and no longer accepts messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("playback session has shut down")]
pub struct SessionClosed;
