use std::sync::Arc;

use crate::library::Track;

use super::error::QueueError;

/// Stable key of a queue entry. Never reused within one `QueueStore`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

#[derive(Debug, Clone)]
pub struct QueueEntry {
    id: EntryId,
    track: Arc<Track>,
}

impl QueueEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn track(&self) -> &Arc<Track> {
        &self.track
    }
}

/// Where `insert` places new tracks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InsertMode {
    /// After the last entry.
    Append,
    /// Immediately after the current position; the position does not move.
    InsertAfterCurrent,
}

/// Ordered tracks plus the index of the active one.
///
/// Invariant: `position < len` whenever the queue is non-empty, and
/// `position == 0` when it is empty.
#[derive(Debug, Default)]
pub struct QueueStore {
    entries: Vec<QueueEntry>,
    position: usize,
    next_id: u64,
    reload_requested: bool,
}

impl QueueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn index_of(&self, entry: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == entry)
    }

    /// The track at `position + offset`, if that index exists.
    ///
    /// This is the only relative read the controller uses; it never panics on a
    /// cursor that a mutation just moved.
    pub fn at(&self, offset: isize) -> Option<&Arc<Track>> {
        self.entry_at(offset).map(|e| &e.track)
    }

    /// Like `at`, but yields the whole entry so callers can keep its id.
    pub fn entry_at(&self, offset: isize) -> Option<&QueueEntry> {
        let index = (self.position as isize).checked_add(offset)?;
        if index < 0 {
            return None;
        }
        self.entries.get(index as usize)
    }

    fn wrap_entries(&mut self, tracks: Vec<Arc<Track>>) -> Vec<QueueEntry> {
        tracks
            .into_iter()
            .map(|track| {
                let id = EntryId(self.next_id);
                self.next_id += 1;
                QueueEntry { id, track }
            })
            .collect()
    }

    pub fn insert(&mut self, tracks: Vec<Arc<Track>>, mode: InsertMode) {
        let new_entries = self.wrap_entries(tracks);
        match mode {
            InsertMode::Append => self.entries.extend(new_entries),
            InsertMode::InsertAfterCurrent => {
                let at = if self.entries.is_empty() {
                    0
                } else {
                    self.position + 1
                };
                self.entries.splice(at..at, new_entries);
            }
        }
    }

    /// Remove the entry at `index`; out-of-range indices are ignored.
    ///
    /// Removing before the cursor shifts it back so the same track stays
    /// current. Removing the current entry keeps the index, so whichever entry
    /// slides into that slot becomes current (clamped when the tail was removed).
    pub fn remove_at(&mut self, index: usize) -> Option<Arc<Track>> {
        if index >= self.entries.len() {
            return None;
        }

        let removed = self.entries.remove(index);
        if index < self.position {
            self.position -= 1;
        } else if self.position >= self.entries.len() {
            self.position = self.entries.len().saturating_sub(1);
        }
        Some(removed.track)
    }

    /// Replace every entry and move the cursor to `start`.
    ///
    /// Rejected without touching the queue when `tracks` is non-empty and
    /// `start` is out of range. On success a transport reload is requested.
    pub fn replace(&mut self, tracks: Vec<Arc<Track>>, start: usize) -> Result<(), QueueError> {
        if !tracks.is_empty() && start >= tracks.len() {
            return Err(QueueError::InvalidPosition {
                index: start,
                len: tracks.len(),
            });
        }

        let empty = tracks.is_empty();
        self.entries = self.wrap_entries(tracks);
        self.position = if empty { 0 } else { start };
        self.reload_requested = true;
        Ok(())
    }

    /// Consume the reload request raised by `replace`.
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), QueueError> {
        if index >= self.entries.len() {
            return Err(QueueError::InvalidPosition {
                index,
                len: self.entries.len(),
            });
        }
        self.position = index;
        Ok(())
    }

    fn step_cyclic(&mut self, delta: isize) -> Result<usize, QueueError> {
        let len = self.entries.len() as isize;
        if len == 0 {
            return Err(QueueError::EmptyQueue);
        }
        self.position = (self.position as isize + delta).rem_euclid(len) as usize;
        Ok(self.position)
    }

    /// Move forward one entry, wrapping from the tail to the head.
    pub fn advance(&mut self) -> Result<usize, QueueError> {
        self.step_cyclic(1)
    }

    /// Move back one entry, wrapping from the head to the tail.
    pub fn retreat(&mut self) -> Result<usize, QueueError> {
        self.step_cyclic(-1)
    }

    /// Non-wrapping advance used for automatic end-of-track progression.
    /// Returns `false` (and stays put) at the tail.
    pub fn step_forward(&mut self) -> bool {
        if self.position + 1 < self.entries.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }
}
