//! Library source: scans a directory into immutable `Track` records.
//!
//! The rest of the player only ever sees `Arc<Track>` snapshots produced here.

mod model;
mod scan;

pub use model::*;
pub use scan::scan;

#[cfg(test)]
mod tests;
