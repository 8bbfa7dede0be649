//! Playback controller: the single owner of queue, transport and backend.
//!
//! Views read from `PlaybackController` and issue commands through
//! `PlayerCommands`; nothing else mutates playback state.

mod commands;
mod controller;
mod error;

pub use commands::PlayerCommands;
pub use controller::*;
