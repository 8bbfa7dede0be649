//! Pointer-drag seeking on the progress bar.

mod drag;

pub use drag::*;
