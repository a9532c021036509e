use super::*;
use crate::config::LibrarySettings;
use crate::error::CatalogError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

struct FailingCatalog;

impl TrackCatalog for FailingCatalog {
    fn list_tracks(&self) -> Result<Vec<Track>, CatalogError> {
        Err(CatalogError::NotADirectory(PathBuf::from("/nowhere")))
    }
}

#[test]
fn directory_catalog_lists_tracks_in_title_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Beta.mp3"), b"x").unwrap();
    fs::write(dir.path().join("alpha.flac"), b"x").unwrap();

    let catalog = DirectoryCatalog::new(dir.path(), LibrarySettings::default());
    let titles: Vec<String> = catalog
        .list_tracks()
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["alpha".to_string(), "Beta".to_string()]);
}

#[test]
fn directory_catalog_rejects_missing_root() {
    let dir = tempdir().unwrap();
    let catalog = DirectoryCatalog::new(dir.path().join("missing"), LibrarySettings::default());
    assert!(matches!(
        catalog.list_tracks(),
        Err(CatalogError::Unreadable { .. })
    ));
}

#[test]
fn directory_catalog_rejects_file_root() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("song.mp3");
    fs::write(&file, b"x").unwrap();

    let catalog = DirectoryCatalog::new(&file, LibrarySettings::default());
    assert!(matches!(
        catalog.list_tracks(),
        Err(CatalogError::NotADirectory(p)) if p == file
    ));
}

#[test]
fn load_catalog_turns_failure_into_empty_list() {
    assert!(load_catalog(&FailingCatalog).is_empty());
}

#[test]
fn track_id_displays_as_number() {
    assert_eq!(TrackId(42).to_string(), "42");
}
