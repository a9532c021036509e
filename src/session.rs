//! Playback session: the state machine between user intents and the engine.
//!
//! `PlaybackSession` applies intents and samples progress synchronously;
//! `SessionHandle` runs it on a dedicated thread and fans snapshots out to
//! subscribers.

mod engine;
mod handle;
mod intent;
mod machine;
mod observers;
mod state;
mod thread;
mod ticker;

pub use engine::PlaybackEngine;
pub use handle::SessionHandle;
pub use intent::PlaybackIntent;
pub use state::{PlaybackState, Status};
