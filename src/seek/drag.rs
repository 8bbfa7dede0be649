use std::time::Duration;

use ratatui::layout::Rect;

use crate::player::PlayerCommands;

/// Horizontal extent of the progress bar, in terminal columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct BarRect {
    pub left: u16,
    pub width: u16,
}

impl BarRect {
    pub fn contains(&self, x: u16) -> bool {
        x >= self.left && x < self.left.saturating_add(self.width)
    }

    /// Fraction of the bar left of `x`, clamped to `[0, 1]`. A zero-width bar
    /// always yields zero.
    pub fn percentage(&self, x: u16) -> f64 {
        if self.width == 0 {
            return 0.0;
        }
        let offset = f64::from(x) - f64::from(self.left);
        (offset / f64::from(self.width)).clamp(0.0, 1.0)
    }
}

impl From<Rect> for BarRect {
    fn from(rect: Rect) -> Self {
        Self {
            left: rect.x,
            width: rect.width,
        }
    }
}

#[derive(Debug, Clone)]
struct Drag {
    bar: BarRect,
    /// Pointer position as a fraction of the bar.
    fraction: f64,
}

/// An in-progress drag on the progress bar.
///
/// Only the pointer fraction is kept. Times are derived from the length of
/// whatever track is current when they are asked for, so a track change in
/// the middle of a drag never carries the old length over. The transport
/// keeps running and is sought exactly once, on release.
#[derive(Debug, Default)]
pub struct SeekDrag {
    drag: Option<Drag>,
}

impl SeekDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag. The bar geometry is captured here and reused for every
    /// motion until release.
    pub fn start(&mut self, bar: BarRect, pointer_x: u16) {
        self.drag = Some(Drag {
            bar,
            fraction: bar.percentage(pointer_x),
        });
    }

    pub fn motion(&mut self, pointer_x: u16) {
        if let Some(drag) = self.drag.as_mut() {
            drag.fraction = drag.bar.percentage(pointer_x);
        }
    }

    /// Commit the drag against the current track. Returns the committed
    /// target, or `None` when no drag was active.
    pub fn release(&mut self, commands: &mut dyn PlayerCommands) -> Option<Duration> {
        let drag = self.drag.take()?;
        let target = commands.total().mul_f64(drag.fraction);
        commands.seek(target);
        tracing::debug!(target_ms = target.as_millis() as u64, "seek committed");
        Some(target)
    }

    pub fn cancel(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Preview time for a track of length `total`, while dragging.
    pub fn preview(&self, total: Duration) -> Option<Duration> {
        self.drag.as_ref().map(|d| total.mul_f64(d.fraction))
    }
}
