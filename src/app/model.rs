//! Application model: library browsing and view state.
//!
//! `App` holds everything the UI needs that is not playback state: the
//! library, selection cursors, which views are open and the geometry of the
//! last frame for mouse hit-testing. Playback lives in `PlaybackController`.

use std::sync::Arc;

use ratatui::layout::Rect;

use crate::library::{Library, Track};
use crate::queue::{EntryId, QueueStore};
use crate::seek::{BarRect, SeekDrag};

/// Which list receives navigation keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Library,
    Queue,
}

/// Screen regions recorded by the last draw.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub progress: Option<BarRect>,
    pub progress_row: Option<u16>,
    pub queue_rows: Vec<(Rect, EntryId)>,
}

impl HitAreas {
    pub fn on_progress(&self, column: u16, row: u16) -> Option<BarRect> {
        let bar = self.progress?;
        (self.progress_row == Some(row) && bar.contains(column)).then_some(bar)
    }

    pub fn queue_entry_at(&self, column: u16, row: u16) -> Option<EntryId> {
        self.queue_rows
            .iter()
            .find(|(rect, _)| {
                row >= rect.y
                    && row < rect.y.saturating_add(rect.height)
                    && column >= rect.x
                    && column < rect.x.saturating_add(rect.width)
            })
            .map(|(_, id)| *id)
    }
}

/// The main application model.
pub struct App {
    pub library: Library,
    pub selected: usize,
    pub focus: Focus,
    pub queue_selected: usize,
    pub show_queue_panel: bool,
    pub fullscreen: bool,
    pub seek: SeekDrag,
    pub hit: HitAreas,
    pub current_dir: Option<String>,
}

impl App {
    pub fn new(library: Library) -> Self {
        Self {
            library,
            selected: 0,
            focus: Focus::Library,
            queue_selected: 0,
            show_queue_panel: false,
            fullscreen: false,
            seek: SeekDrag::new(),
            hit: HitAreas::default(),
            current_dir: None,
        }
    }

    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    pub fn selected_track(&self) -> Option<Arc<Track>> {
        self.library.get(self.selected).cloned()
    }

    /// The selected track's album and the selected track's index within it.
    pub fn selected_album(&self) -> Option<(Vec<Arc<Track>>, usize)> {
        self.library.album_of(self.selected)
    }

    /// Every track of the selected track's album, in album order.
    pub fn selected_album_tracks(&self) -> Option<Vec<Arc<Track>>> {
        self.selected_album().map(|(tracks, _)| tracks)
    }

    /// The queue entry under the queue cursor.
    pub fn selected_entry(&self, queue: &QueueStore) -> Option<EntryId> {
        queue.entries().get(self.queue_selected).map(|e| e.id())
    }

    /// Move the focused cursor down one row, stopping at the end.
    /// `queue_len` bounds the queue cursor.
    pub fn next(&mut self, queue_len: usize) {
        match self.focus {
            Focus::Library => {
                if self.selected + 1 < self.library.len() {
                    self.selected += 1;
                }
            }
            Focus::Queue => {
                if self.queue_selected + 1 < queue_len {
                    self.queue_selected += 1;
                }
            }
        }
    }

    pub fn prev(&mut self) {
        match self.focus {
            Focus::Library => self.selected = self.selected.saturating_sub(1),
            Focus::Queue => self.queue_selected = self.queue_selected.saturating_sub(1),
        }
    }

    pub fn select_first(&mut self) {
        match self.focus {
            Focus::Library => self.selected = 0,
            Focus::Queue => self.queue_selected = 0,
        }
    }

    pub fn select_last(&mut self, queue_len: usize) {
        match self.focus {
            Focus::Library => self.selected = self.library.len().saturating_sub(1),
            Focus::Queue => self.queue_selected = queue_len.saturating_sub(1),
        }
    }

    /// Keep the queue cursor on a row after the queue shrank.
    pub fn clamp_queue_selection(&mut self, queue_len: usize) {
        self.queue_selected = self.queue_selected.min(queue_len.saturating_sub(1));
    }

    pub fn toggle_queue_panel(&mut self) {
        self.show_queue_panel = !self.show_queue_panel;
        self.focus = if self.show_queue_panel {
            Focus::Queue
        } else {
            Focus::Library
        };
    }

    /// Switch focus between library and queue; only meaningful while the
    /// queue panel is open.
    pub fn cycle_focus(&mut self) {
        if !self.show_queue_panel {
            self.focus = Focus::Library;
            return;
        }
        self.focus = match self.focus {
            Focus::Library => Focus::Queue,
            Focus::Queue => Focus::Library,
        };
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        // The bar being dragged is about to move or disappear.
        self.seek.cancel();
    }
}
