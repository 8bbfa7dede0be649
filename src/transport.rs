//! Simulated playback clock.
//!
//! The audio backend never reports progress or end-of-track, so elapsed time
//! is derived from an anchor on a `Clock` and sampled on a fixed period.

mod clock;
mod scheduler;
mod state;

pub use clock::*;
pub use scheduler::Ticker;
pub use state::*;
