//! Track catalog: the ordered list of local audio files.
//!
//! Tracks are enumerated from a music directory, tagged with metadata read
//! from the files themselves and sorted by title.

mod catalog;
mod model;
mod scan;

pub use catalog::{DirectoryCatalog, TrackCatalog, load_catalog};
pub use model::{Track, TrackId};

#[cfg(test)]
mod tests;
