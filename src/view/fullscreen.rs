use std::sync::Arc;
use std::time::Duration;

use crate::library::Track;
use crate::player::PlaybackController;

use super::bar::CompactBar;

/// Most upcoming tracks shown behind the current one.
pub const UPCOMING_LIMIT: usize = 5;

/// Stacking layer of an upcoming card.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LayerIndex {
    /// Few enough tracks remain that every card shares one layer.
    Remaining,
    /// Distance from the back of the stack; the nearest card is highest.
    Slice(usize),
}

#[derive(Debug, Clone)]
pub struct UpcomingCard {
    pub index: usize,
    pub track: Arc<Track>,
    pub layer: LayerIndex,
}

/// Now-playing view: the bar plus a short stack of what comes next.
#[derive(Debug, Clone)]
pub struct FullscreenView {
    pub bar: CompactBar,
    pub upcoming: Vec<UpcomingCard>,
    /// Entries after the current one, including those not shown.
    pub remaining: usize,
}

impl FullscreenView {
    pub fn project(player: &PlaybackController, preview: Option<Duration>) -> Self {
        let queue = player.queue();
        let remaining = queue.len().saturating_sub(queue.position() + 1);
        let shown = remaining.min(UPCOMING_LIMIT);

        let upcoming = (1..=shown)
            .filter_map(|offset| {
                let entry = queue.entry_at(offset as isize)?;
                Some(UpcomingCard {
                    index: queue.position() + offset,
                    track: entry.track().clone(),
                    layer: if remaining <= UPCOMING_LIMIT {
                        LayerIndex::Remaining
                    } else {
                        LayerIndex::Slice(shown - offset)
                    },
                })
            })
            .collect();

        Self {
            bar: CompactBar::project(player, preview),
            upcoming,
            remaining,
        }
    }
}
