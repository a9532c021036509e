//! Audio output: the `rodio` implementation of `PlaybackEngine`.

mod engine;
mod sink;

pub use engine::RodioEngine;

#[cfg(test)]
mod tests;
