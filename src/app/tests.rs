use super::*;
use crate::library::{Track, TrackId};
use crate::session::{PlaybackIntent, PlaybackState};
use std::path::PathBuf;
use std::sync::Arc;

fn t(id: u64, title: &str) -> Track {
    Track {
        id: TrackId(id),
        title: title.into(),
        artist: "Artist".into(),
        duration_ms: 1000,
        artwork: None,
        source: PathBuf::from(format!("/music/{title}.mp3")),
    }
}

fn library() -> Vec<Track> {
    vec![t(1, "Alpha"), t(2, "Beta"), t(3, "Gamma")]
}

fn snapshot(current: Option<usize>, playing: bool) -> Arc<PlaybackState> {
    let tracks = library();
    Arc::new(PlaybackState {
        current: current.map(|i| tracks[i].clone()),
        is_playing: playing,
        position_ms: 300,
        tracks: Arc::from(tracks),
        ..PlaybackState::default()
    })
}

#[test]
fn movement_is_clamped_to_track_list() {
    let mut app = App::new();
    app.apply_state(snapshot(None, false));

    app.move_up();
    assert_eq!(app.selected, 0);
    app.move_down();
    app.move_down();
    app.move_down();
    assert_eq!(app.selected, 2);
    app.move_top();
    assert_eq!(app.selected, 0);
    app.move_bottom();
    assert_eq!(app.selected, 2);
}

#[test]
fn cursor_follows_new_current_track_only_when_it_changes() {
    let mut app = App::new();
    app.apply_state(snapshot(Some(1), true));
    assert_eq!(app.selected, 1);

    // Free roaming while the same track keeps playing.
    app.move_down();
    app.apply_state(snapshot(Some(1), true));
    assert_eq!(app.selected, 2);

    app.apply_state(snapshot(Some(0), true));
    assert_eq!(app.selected, 0);
}

#[test]
fn cursor_stays_put_without_follow_playback() {
    let mut app = App::new();
    app.follow_playback = false;
    app.apply_state(snapshot(Some(2), true));
    assert_eq!(app.selected, 0);
}

#[test]
fn selection_is_clamped_when_catalog_shrinks() {
    let mut app = App::new();
    app.apply_state(snapshot(None, false));
    app.move_bottom();

    app.apply_state(Arc::new(PlaybackState {
        tracks: Arc::from(vec![t(1, "Alpha")]),
        ..PlaybackState::default()
    }));
    assert_eq!(app.selected, 0);

    app.apply_state(Arc::new(PlaybackState::default()));
    assert_eq!(app.selected, 0);
    assert!(app.selected_track().is_none());
    assert!(!app.has_tracks());
}

#[test]
fn toggle_intent_depends_on_status() {
    let mut app = App::new();
    app.apply_state(snapshot(None, false));
    app.move_down();
    assert_eq!(
        app.toggle_intent(),
        Some(PlaybackIntent::SelectTrack(t(2, "Beta")))
    );

    app.apply_state(snapshot(Some(0), true));
    assert_eq!(app.toggle_intent(), Some(PlaybackIntent::Pause));

    app.apply_state(snapshot(Some(0), false));
    assert_eq!(app.toggle_intent(), Some(PlaybackIntent::Play));
}

#[test]
fn toggle_intent_is_none_for_empty_idle_library() {
    let app = App::new();
    assert_eq!(app.toggle_intent(), None);
    assert_eq!(app.select_intent(), None);
}

#[test]
fn seek_intent_steps_from_last_position_and_saturates() {
    let mut app = App::new();
    app.apply_state(snapshot(None, false));
    assert_eq!(app.seek_intent(true, 5000), None);

    app.apply_state(snapshot(Some(0), true));
    assert_eq!(app.seek_intent(true, 5000), Some(PlaybackIntent::SeekTo(5300)));
    assert_eq!(app.seek_intent(false, 5000), Some(PlaybackIntent::SeekTo(0)));
}

#[test]
fn toggle_view_switches_between_library_and_player() {
    let mut app = App::new();
    assert_eq!(app.view, View::Library);
    app.toggle_view();
    assert_eq!(app.view, View::NowPlaying);
    app.toggle_view();
    assert_eq!(app.view, View::Library);
}
