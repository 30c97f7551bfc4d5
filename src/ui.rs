//! UI rendering for the terminal user interface.
//!
//! Everything here reads state and draws it with `ratatui`; nothing mutates
//! the player or the app model.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, LineGauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, Row, RowItem, View, progress_ratio, queue_position};
use crate::catalog::{Track, TrackId, format_duration, format_total_duration};
use crate::config::{ControlsSettings, Settings, TimeField, TrackField, UiSettings};
use crate::player::{PlaybackStatus, PlayerStore};
use crate::transport::Clock;

const LEFT_PAD: Padding = Padding {
    left: 1,
    right: 0,
    top: 0,
    bottom: 0,
};

/// Render the controls help text for the current mode.
fn controls_text(app: &App, seeking: bool, controls: &ControlsSettings) -> String {
    let step = controls.scrub_seconds;
    if seeking {
        return format!("[h/l H/L] -/+{step}s | [enter] seek here | [esc] cancel");
    }
    if app.search_editing {
        return "type to search | [enter] done | [esc] clear".to_string();
    }
    let mut parts = vec![
        "[j/k] up/down".to_string(),
        "[enter] open/play".to_string(),
        "[a] queue".to_string(),
        "[space/p] play/pause".to_string(),
        "[h/l] prev/next".to_string(),
        format!("[H/L] scrub -/+{step}s"),
        "[S] seek".to_string(),
        format!("[+/-] volume {}", controls.volume_step),
        "[m] mute".to_string(),
        "[s] shuffle".to_string(),
        "[r] repeat".to_string(),
        "[1-4] views".to_string(),
        "[n] now playing".to_string(),
        "[/] search".to_string(),
    ];
    if matches!(app.view, View::Album(_) | View::Playlist(_)) {
        parts.push("[P] play all".to_string());
    }
    if app.view == View::Library {
        parts.push("[f] filter".to_string());
    }
    if app.can_go_back() {
        parts.push("[esc] back".to_string());
    }
    parts.push("[q] quit".to_string());
    parts.join(" | ")
}

/// Build the track text of the playback bar from the configured fields.
fn now_playing_track_text(track: &Track, ui: &UiSettings) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in &ui.now_playing_track_fields {
        let part = match f {
            TrackField::Title => Some(track.title.clone()),
            TrackField::Artist => Some(track.artist.clone()),
            TrackField::Album => Some(track.album.clone()),
            TrackField::Quality => Some(track.quality.label().to_string()),
            TrackField::Genre => track.genre.clone(),
            TrackField::Year => track.year.map(|y| y.to_string()),
        };
        if let Some(p) = part.filter(|p| !p.trim().is_empty()) {
            parts.push(p);
        }
    }

    if parts.is_empty() {
        track.display()
    } else {
        parts.join(&ui.now_playing_track_separator)
    }
}

/// Build the time text (elapsed/total/remaining) of the playback bar.
fn now_playing_time_text(elapsed: u32, total: u32, ui: &UiSettings) -> Option<String> {
    let parts: Vec<String> = ui
        .now_playing_time_fields
        .iter()
        .map(|f| match f {
            TimeField::Elapsed => format_duration(elapsed),
            TimeField::Total => format_duration(total),
            TimeField::Remaining => format!("-{}", format_duration(total.saturating_sub(elapsed))),
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(&ui.now_playing_time_separator))
    }
}

fn status_label(status: PlaybackStatus) -> &'static str {
    match status {
        PlaybackStatus::Stopped => "Stopped",
        PlaybackStatus::Playing => "Playing",
        PlaybackStatus::Paused => "Paused",
    }
}

/// Flags shown next to the progress line.
fn transport_flags(app: &App, store: &PlayerStore) -> String {
    let volume = if app.is_muted() {
        "muted".to_string()
    } else {
        format!("{}%", store.volume())
    };
    format!(
        "vol {volume} • shuffle {} • repeat {}",
        if store.is_shuffle() { "on" } else { "off" },
        store.repeat_mode()
    )
}

fn row_line(row: &Row, current: Option<&TrackId>, show_section: bool) -> Line<'static> {
    let mut spans = match &row.item {
        RowItem::Album(a) => vec![
            Span::raw(format!("{} - {}", a.title, a.artist)),
            Span::raw(format!(
                "  {} • {} tracks • {} • {}",
                a.year,
                a.track_count,
                format_total_duration(a.duration),
                a.quality
            ))
            .dim(),
        ],
        RowItem::Playlist(p) => vec![
            Span::raw(p.name.clone()),
            Span::raw(format!("  {} tracks", p.track_count)).dim(),
        ],
        RowItem::Track(t) => {
            let marker = if current == Some(&t.id) { "♪ " } else { "  " };
            vec![
                Span::raw(format!("{marker}{}", t.display())),
                Span::raw(format!(
                    "  {} • {}",
                    format_duration(t.duration),
                    t.quality.label()
                ))
                .dim(),
            ]
        }
    };
    if show_section {
        spans.insert(0, Span::raw(format!("{:<16}", row.section)).italic().dim());
    }
    Line::from(spans)
}

/// Visible window of `total` rows of `height`, keeping `selected` centered
/// when possible. Returns `(start, end)`.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

fn view_title(app: &App) -> String {
    match &app.view {
        View::Album(id) => app
            .catalog
            .album(id)
            .map(|a| format!(" {} ", a.title))
            .unwrap_or_else(|| " album ".to_string()),
        View::Playlist(id) => app
            .catalog
            .playlist(id)
            .map(|p| format!(" {} ", p.name))
            .unwrap_or_else(|| " playlist ".to_string()),
        View::Library => format!(" library [{}] ", app.library_filter.label()),
        view => format!(" {} ", view.title()),
    }
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, store: &PlayerStore) {
    let rows = app.rows(store);
    let current = store.current_track().map(|t| &t.id);
    let show_section = matches!(app.view, View::Home | View::Library | View::Search);

    let height = area.height.saturating_sub(2) as usize;
    let selected = app.selected.min(rows.len().saturating_sub(1));
    let (start, end) = visible_window(rows.len(), height, selected);

    let items: Vec<ListItem> = rows[start..end]
        .iter()
        .map(|r| ListItem::new(row_line(r, current, show_section)))
        .collect();

    let empty_hint = match app.view {
        View::Search if app.search_query.is_empty() => Some("Type / to search albums and tracks"),
        View::Search => Some("No results"),
        View::Queue => Some("Queue is empty"),
        _ if items.is_empty() => Some("Nothing here"),
        _ => None,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(view_title(app))
        .padding(LEFT_PAD);

    if items.is_empty() {
        let hint = Paragraph::new(empty_hint.unwrap_or_default())
            .dim()
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(selected - start));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_search(frame: &mut Frame, area: Rect, app: &App, store: &PlayerStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let cursor = if app.search_editing { "▏" } else { "" };
    let input = Paragraph::new(format!("{}{cursor}", app.search_query)).block(
        Block::bordered()
            .title(" search artists, albums, tracks ")
            .padding(LEFT_PAD),
    );
    frame.render_widget(input, chunks[0]);
    draw_list(frame, chunks[1], app, store);
}

fn draw_now_playing(frame: &mut Frame, area: Rect, store: &PlayerStore, clock: &Clock) {
    let block = Block::bordered().title(" now playing ").padding(Padding::uniform(1));
    let Some(track) = store.current_track() else {
        let idle = Paragraph::new("Nothing is playing")
            .alignment(Alignment::Center)
            .dim()
            .block(block);
        frame.render_widget(idle, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let mut details = vec![
        Line::from(Span::raw(track.title.clone()).bold()),
        Line::from(track.artist.clone()),
        Line::from(Span::raw(track.album.clone()).dim()),
        Line::default(),
    ];
    let mut tags = vec![track.quality.label().to_string()];
    tags.extend(track.genre.clone());
    tags.extend(track.year.map(|y| y.to_string()));
    details.push(Line::from(tags.join(" • ")));
    if let Some((pos, len)) = queue_position(store) {
        details.push(Line::from(format!("Track {pos} of {len}")).dim());
    }
    if clock.is_seeking() {
        details.push(Line::from("seeking… enter to jump, esc to cancel").italic());
    }

    let body = Paragraph::new(details)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[0]);

    let elapsed = clock.local_time();
    let gauge = Gauge::default()
        .ratio(progress_ratio(elapsed, track.duration))
        .label(format!(
            "{} / {}",
            format_duration(elapsed),
            format_duration(track.duration)
        ));
    frame.render_widget(gauge, chunks[1]);
}

fn draw_playback_bar(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    store: &PlayerStore,
    clock: &Clock,
    ui: &UiSettings,
) {
    let block = Block::bordered()
        .title(format!(" {} ", status_label(store.status()).to_lowercase()))
        .padding(LEFT_PAD);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let (song, ratio, time) = match store.current_track() {
        Some(track) => {
            let elapsed = clock.local_time();
            let mut song = now_playing_track_text(track, ui);
            if clock.is_seeking() {
                song.push_str("  [seek]");
            }
            (
                song,
                progress_ratio(elapsed, track.duration),
                now_playing_time_text(elapsed, track.duration, ui),
            )
        }
        None => ("No track selected".to_string(), 0.0, None),
    };

    let top = Line::from(vec![
        Span::raw(song).bold(),
        Span::raw("   "),
        Span::raw(transport_flags(app, store)).dim(),
    ]);
    frame.render_widget(Paragraph::new(top), chunks[0]);

    let gauge = LineGauge::default()
        .ratio(ratio)
        .label(time.unwrap_or_default())
        .filled_style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(gauge, chunks[1]);
}

/// Render the entire UI into `frame`.
pub fn draw(frame: &mut Frame, app: &App, store: &PlayerStore, clock: &Clock, settings: &Settings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let tabs = [
        ("1", View::Home),
        ("2", View::Library),
        ("3", View::Search),
        ("4", View::Queue),
    ];
    let mut header_spans = vec![Span::raw(settings.ui.header_text.clone()).bold(), Span::raw("   ")];
    for (key, view) in tabs {
        let label = Span::raw(format!(" {key} {} ", view.title()));
        header_spans.push(if app.view == view { label.reversed() } else { label });
    }
    let header = Paragraph::new(Line::from(header_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    match app.view {
        View::NowPlaying => draw_now_playing(frame, chunks[1], store, clock),
        View::Search => draw_search(frame, chunks[1], app, store),
        _ => draw_list(frame, chunks[1], app, store),
    }

    draw_playback_bar(frame, chunks[2], app, store, clock, &settings.ui);

    let footer = Paragraph::new(controls_text(app, clock.is_seeking(), &settings.controls))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(LEFT_PAD),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
