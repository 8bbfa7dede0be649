//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the library, the
//! selection cursors and which views are open.

mod model;

pub use model::*;
