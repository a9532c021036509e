//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the latest playback
//! snapshot, the cursor and the active view.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
