use std::cmp::Ordering;
use std::sync::Arc;

use crate::library::Track;
use crate::player::PlaybackController;
use crate::queue::EntryId;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RowClass {
    Past,
    Current,
    Upcoming,
}

#[derive(Debug, Clone)]
pub struct QueueRow {
    /// Stable handle for remove/jump; survives earlier removals in the same pass.
    pub entry: EntryId,
    pub index: usize,
    pub class: RowClass,
    pub track: Arc<Track>,
}

/// Every queue entry, classified against the cursor.
#[derive(Debug, Clone, Default)]
pub struct QueuePanel {
    pub rows: Vec<QueueRow>,
}

impl QueuePanel {
    pub fn project(player: &PlaybackController) -> Self {
        let queue = player.queue();
        let position = queue.position();
        let rows = queue
            .entries()
            .iter()
            .enumerate()
            .map(|(index, e)| QueueRow {
                entry: e.id(),
                index,
                class: match index.cmp(&position) {
                    Ordering::Less => RowClass::Past,
                    Ordering::Equal => RowClass::Current,
                    Ordering::Greater => RowClass::Upcoming,
                },
                track: e.track().clone(),
            })
            .collect();
        Self { rows }
    }
}
