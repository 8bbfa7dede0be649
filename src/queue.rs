//! The play queue: ordered entries plus the active-position cursor.
//!
//! All mutation goes through `QueueStore` so the cursor is adjusted in the
//! same call that changes the entries.

mod error;
mod store;

pub use error::QueueError;
pub use store::*;
