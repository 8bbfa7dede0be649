//! Read-only projections of the playback controller.
//!
//! Each projection is rebuilt from the controller on every frame, so the three
//! views can never disagree with each other or with the controller.

mod bar;
mod fullscreen;
mod queue_panel;
mod time;

pub use bar::*;
pub use fullscreen::*;
pub use queue_panel::*;
pub use time::*;

#[cfg(test)]
mod tests;
