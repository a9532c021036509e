//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`: the
//! library view with its mini-player, and the full-screen player.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, View};
use crate::config::ControlsSettings;
use crate::session::{PlaybackState, Status};

/// Format milliseconds as `MM:SS`.
fn format_mmss(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_seconds: u64) -> String {
    [
        "[j/k] up/down".to_string(),
        "[g/G] top/bottom".to_string(),
        "[enter] play selected".to_string(),
        "[space/p] play/pause".to_string(),
        "[h/l] prev/next".to_string(),
        format!("[H/L] seek -/+{}s", seek_seconds),
        "[s] stop".to_string(),
        "[f] player".to_string(),
        "[r] rescan".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

fn status_label(state: &PlaybackState) -> &'static str {
    match state.status() {
        Status::Idle => "Stopped",
        Status::Playing => "Playing",
        Status::Paused => "Paused",
    }
}

fn time_label(state: &PlaybackState) -> String {
    format!(
        "{} / {}",
        format_mmss(state.position_ms),
        format_mmss(state.duration_ms)
    )
}

fn progress_gauge(state: &PlaybackState) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(f64::from(state.progress).clamp(0.0, 1.0))
        .label(time_label(state))
}

fn fault_text(state: &PlaybackState) -> Option<String> {
    state
        .fault
        .as_ref()
        .map(|f| format!("Can't play track #{}: {}", f.track_id, f.message))
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, controls: &ControlsSettings) {
    match app.view {
        View::Library => draw_library(frame, app, controls),
        View::NowPlaying => draw_now_playing(frame, app),
    }
}

fn draw_library(frame: &mut Frame, app: &App, controls: &ControlsSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header_text = match &app.current_dir {
        Some(dir) => format!("{} tracks in {}", app.tracks().len(), dir),
        None => format!("{} tracks", app.tracks().len()),
    };
    let header = Paragraph::new(header_text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" minim ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(header, chunks[0]);

    draw_track_list(frame, app, chunks[1]);
    draw_mini_player(frame, &app.state, chunks[2]);

    let footer = Paragraph::new(controls_text(controls.seek_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

fn draw_track_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" tracks ");
    if !app.has_tracks() {
        let empty = Paragraph::new("No audio files found ([r] rescans)")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let current_id = app.state.current.as_ref().map(|t| t.id);

    // Only build ListItems for the visible window, centered on the cursor when possible.
    let total = app.tracks().len();
    let list_height = area.height.saturating_sub(2) as usize;
    let (start, end) = if total <= list_height || list_height == 0 {
        (0, total)
    } else {
        let half = list_height / 2;
        let mut start = app.selected.saturating_sub(half);
        if start + list_height > total {
            start = total - list_height;
        }
        (start, start + list_height)
    };

    let items: Vec<ListItem> = app.tracks()[start..end]
        .iter()
        .map(|t| {
            let marker = if Some(t.id) == current_id { "♪ " } else { "  " };
            ListItem::new(format!(
                "{}{} - {} [{}]",
                marker,
                t.title,
                t.artist,
                format_mmss(t.duration_ms)
            ))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.selected - start));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_mini_player(frame: &mut Frame, state: &PlaybackState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", status_label(state)))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let now_playing = match &state.current {
        Some(t) => format!("{} - {}", t.title, t.artist),
        None => "Nothing playing".to_string(),
    };
    frame.render_widget(Paragraph::new(now_playing), rows[0]);
    frame.render_widget(progress_gauge(state), rows[1]);

    if let Some(fault) = fault_text(state) {
        frame.render_widget(
            Paragraph::new(fault).style(Style::default().fg(Color::Red)),
            rows[2],
        );
    }
}

fn draw_now_playing(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" now playing (f returns) ")
        .title_alignment(Alignment::Center)
        .padding(Padding::uniform(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(inner);

    let details = match &state.current {
        Some(t) => format!(
            "{}\n{}\n\nArtwork: {}\n{}",
            t.title,
            t.artist,
            t.artwork
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
            status_label(state)
        ),
        None => "Nothing playing".to_string(),
    };
    frame.render_widget(
        Paragraph::new(details)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    frame.render_widget(
        progress_gauge(state).block(Block::default().borders(Borders::ALL)),
        rows[2],
    );

    if let Some(fault) = fault_text(state) {
        frame.render_widget(
            Paragraph::new(fault)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red)),
            rows[3],
        );
    }
}
