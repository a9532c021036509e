use std::path::{Path, PathBuf};

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Track, TrackId, UNKNOWN_ARTIST};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// First configured sidecar image that exists next to `path`.
pub(super) fn find_artwork(path: &Path, names: &[String]) -> Option<PathBuf> {
    let dir = path.parent()?;
    names
        .iter()
        .map(|n| dir.join(n))
        .find(|candidate| candidate.is_file())
}

/// Tag and stream properties read from one file.
struct FileMeta {
    title: Option<String>,
    artist: Option<String>,
    duration_ms: u64,
}

fn read_meta(path: &Path) -> FileMeta {
    let mut meta = FileMeta {
        title: None,
        artist: None,
        duration_ms: 0,
    };

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            meta.duration_ms = tagged.properties().duration().as_millis() as u64;

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                meta.title = tag
                    .title()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty());
                meta.artist = tag
                    .artist()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty());
            }
        }
        Err(e) => tracing::debug!(path = %path.display(), error = %e, "no readable tags"),
    }

    meta
}

/// Collect audio file paths under `dir`, honoring the scan options.
fn audio_paths(dir: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut paths: Vec<PathBuf> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_audio_file(p, settings))
        .collect();

    paths.sort();
    paths
}

/// Scan `dir` into tracks sorted by title (case-insensitive, ties by id).
///
/// Ids follow path order, so they are stable for an unchanged directory tree.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = audio_paths(dir, settings)
        .into_iter()
        .enumerate()
        .map(|(i, path)| {
            let meta = read_meta(&path);
            let title = meta.title.unwrap_or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("UNKNOWN")
                    .to_string()
            });

            Track {
                id: TrackId(i as u64 + 1),
                title,
                artist: meta.artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
                duration_ms: meta.duration_ms,
                artwork: find_artwork(&path, &settings.artwork_names),
                source: path,
            }
        })
        .collect();

    sort_by_title(&mut tracks);
    tracks
}

pub(super) fn sort_by_title(tracks: &mut [Track]) {
    tracks.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then(a.id.cmp(&b.id))
    });
}
