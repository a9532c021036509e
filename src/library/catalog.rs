use std::path::{Path, PathBuf};

use crate::config::LibrarySettings;
use crate::error::CatalogError;

use super::model::Track;
use super::scan::scan;

/// Source of the ordered track list shown to the user.
pub trait TrackCatalog {
    /// Enumerate tracks in title order. Deterministic for a fixed underlying index.
    fn list_tracks(&self) -> Result<Vec<Track>, CatalogError>;
}

/// Catalog backed by a music directory on disk.
pub struct DirectoryCatalog {
    root: PathBuf,
    settings: LibrarySettings,
}

impl DirectoryCatalog {
    pub fn new(root: impl Into<PathBuf>, settings: LibrarySettings) -> Self {
        Self {
            root: root.into(),
            settings,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TrackCatalog for DirectoryCatalog {
    fn list_tracks(&self) -> Result<Vec<Track>, CatalogError> {
        let meta = std::fs::metadata(&self.root).map_err(|source| CatalogError::Unreadable {
            path: self.root.clone(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(CatalogError::NotADirectory(self.root.clone()));
        }
        Ok(scan(&self.root, &self.settings))
    }
}

/// List tracks, treating an unavailable catalog as empty.
pub fn load_catalog(catalog: &dyn TrackCatalog) -> Vec<Track> {
    match catalog.list_tracks() {
        Ok(tracks) => {
            if tracks.is_empty() {
                tracing::warn!("catalog is empty");
            } else {
                tracing::info!(count = tracks.len(), "catalog loaded");
            }
            tracks
        }
        Err(e) => {
            tracing::warn!(error = %e, "catalog unavailable, continuing with an empty library");
            Vec::new()
        }
    }
}
