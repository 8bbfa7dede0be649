//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the projections from `view` with `ratatui` and reports
//! where the mouse-sensitive regions ended up.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Focus, HitAreas};
use crate::config::{ControlsSettings, Settings, UiSettings};
use crate::player::PlaybackController;
use crate::queue::EntryId;
use crate::transport::TransportStatus;
use crate::view::{
    CompactBar, FullscreenView, LayerIndex, QueuePanel, QueueRow, RowClass, UPCOMING_LIMIT,
    format_time, time_text,
};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("gg/G", "top/bottom");
    map.insert("enter", "play album / jump");
    map.insert("a/n", "append / play next");
    map.insert("A/N", "album: append / play next");
    map.insert("x", "remove from queue");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next");
    // H/L is filled dynamically from config.
    map.insert("s", "shuffle");
    map.insert("r", "repeat");
    map.insert("v", "queue");
    map.insert("tab", "focus");
    map.insert("f", "fullscreen");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(controls: &ControlsSettings) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "j/k", "enter", "space/p", "h/l", "H/L", "a/n", "A/N", "x", "gg/G", "s", "r", "v", "tab", "f",
        "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] scrub -/+{}s", controls.scrub_seconds))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{k}] {v}"))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Window of `total` rows of which `height` fit, keeping `selected` near the
/// middle. Returns `(start, end)`; never more than `height` rows.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

fn now_playing_line(bar: &CompactBar) -> String {
    let Some(title) = bar.title.as_deref() else {
        return "Nothing playing".to_string();
    };

    let mut text = match bar.status {
        TransportStatus::Stopped => "■ ".to_string(),
        _ => format!("{} ", bar.icon.symbol()),
    };
    if let Some(artist) = bar.artist.as_deref().filter(|a| !a.trim().is_empty()) {
        text.push_str(artist);
        text.push_str(" - ");
    }
    text.push_str(title);
    if let Some(album) = bar.album.as_deref() {
        text.push_str(" • ");
        text.push_str(album);
    }
    text
}

fn toggles_text(bar: &CompactBar) -> String {
    let on_off = |b: bool| if b { "ON" } else { "OFF" };
    format!("Shuffle: {} • Repeat: {}", on_off(bar.shuffle), on_off(bar.repeat))
}

/// Draw the compact transport bar; returns the gauge area for seeking.
fn draw_compact_bar(
    frame: &mut Frame,
    area: Rect,
    bar: &CompactBar,
    ui: &UiSettings,
    seeking: bool,
) -> Rect {
    let block = bordered(if seeking { " seeking " } else { " now playing " });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let info = Line::from(vec![
        now_playing_line(bar).bold(),
        "   ".into(),
        toggles_text(bar).dim(),
    ]);
    frame.render_widget(Paragraph::new(info), rows[0]);

    let label = time_text(bar.elapsed, bar.total, &ui.time_fields, &ui.time_separator)
        .unwrap_or_default();
    let gauge = Gauge::default()
        .ratio(bar.progress.clamp(0.0, 1.0))
        .label(label)
        .gauge_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(gauge, rows[1]);
    rows[1]
}

fn draw_library(frame: &mut Frame, area: Rect, app: &App, player: &PlaybackController) {
    let tracks = app.library.tracks();
    let (start, end) = visible_window(tracks.len(), area.height.saturating_sub(2) as usize, app.selected);
    let playing = player.current().map(|t| t.id);

    let items: Vec<ListItem> = tracks[start..end]
        .iter()
        .map(|t| {
            let marker = if Some(t.id) == playing { "♪ " } else { "  " };
            let album = t.album_name().map(|a| format!("  [{a}]")).unwrap_or_default();
            ListItem::new(format!("{marker}{}{album}", t.display()))
        })
        .collect();

    let title = match &app.current_dir {
        Some(dir) => format!(" library: {dir} "),
        None => " library ".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !tracks.is_empty() && app.focus == Focus::Library {
        state.select(Some(app.selected - start));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the queue panel; returns the screen row of each visible entry.
fn draw_queue_panel(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    panel: &QueuePanel,
) -> Vec<(Rect, EntryId)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" queue ({}) ", panel.rows.len()));
    let inner = block.inner(area);

    let (start, end) = visible_window(panel.rows.len(), inner.height as usize, app.queue_selected);
    let rows = &panel.rows[start..end];

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let text = format!("{:>3}. {}", row.index + 1, row.track.display());
            match row.class {
                RowClass::Current => ListItem::new(format!("▶{text}")).bold(),
                RowClass::Past => ListItem::new(format!(" {text}")).dim(),
                RowClass::Upcoming => ListItem::new(format!(" {text}")),
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if !rows.is_empty() && app.focus == Focus::Queue {
        state.select(Some(app.queue_selected.clamp(start, end - 1) - start));
    }
    frame.render_stateful_widget(list, area, &mut state);

    row_hits(inner, rows)
}

/// One clickable line per row, stopping at the bottom of `inner`.
fn row_hits(inner: Rect, rows: &[QueueRow]) -> Vec<(Rect, EntryId)> {
    (inner.y..inner.bottom())
        .zip(rows)
        .map(|(y, row)| {
            let rect = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: 1,
            };
            (rect, row.entry)
        })
        .collect()
}

fn draw_fullscreen(frame: &mut Frame, area: Rect, view: &FullscreenView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .split(area);

    let bar = &view.bar;
    let mut lines = vec![
        Line::from(bar.title.clone().unwrap_or_else(|| "Nothing playing".into())).bold(),
        Line::from(bar.artist.clone().unwrap_or_default()),
        Line::from(bar.album.clone().unwrap_or_default()).dim(),
    ];
    if let Some(cover) = &bar.cover {
        lines.push(Line::from(format!("cover: {}", cover.display())).dim());
    }
    lines.push(Line::from(format!(
        "{}  {} / {}",
        bar.icon.symbol(),
        format_time(bar.elapsed),
        format_time(bar.total)
    )));
    let current = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(" now playing "));
    frame.render_widget(current, chunks[0]);

    let mut items: Vec<ListItem> = view
        .upcoming
        .iter()
        .map(|card| {
            let item = ListItem::new(format!("{:>3}. {}", card.index + 1, card.track.display()));
            match card.layer {
                LayerIndex::Remaining => item,
                // Deeper cards in the stack fade out.
                LayerIndex::Slice(0) => item.dim(),
                LayerIndex::Slice(_) => item,
            }
        })
        .collect();
    if view.remaining > UPCOMING_LIMIT {
        items.push(ListItem::new(format!("     … and {} more", view.remaining - UPCOMING_LIMIT)).dim());
    }
    let upcoming = List::new(items).block(bordered(" up next "));
    frame.render_widget(upcoming, chunks[1]);
}

/// Render the entire UI into `frame` and report the mouse-sensitive regions.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    player: &PlaybackController,
    settings: &Settings,
) -> HitAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(settings.ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cadenza ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let preview = app.seek.preview(player.total());
    let mut hit = HitAreas::default();

    if app.fullscreen {
        draw_fullscreen(frame, chunks[1], &FullscreenView::project(player, preview));
    } else if app.show_queue_panel {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        draw_library(frame, body[0], app, player);
        hit.queue_rows = draw_queue_panel(frame, body[1], app, &QueuePanel::project(player));
    } else {
        draw_library(frame, chunks[1], app, player);
    }

    let bar = CompactBar::project(player, preview);
    let gauge = draw_compact_bar(frame, chunks[2], &bar, &settings.ui, app.seek.is_dragging());
    hit.progress = Some(gauge.into());
    hit.progress_row = Some(gauge.y);

    let footer = Paragraph::new(controls_text(&settings.controls))
        .block(bordered(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);

    hit
}
