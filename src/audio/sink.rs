//! Utilities for creating `rodio` sinks from `Track` values.
//!
//! Opening and decoding happen before any sink exists, so a bad file never
//! disturbs what is currently playing.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::EngineError;
use crate::library::Track;

pub(super) type FileDecoder = Decoder<BufReader<File>>;

/// Open and decode `path`.
pub(super) fn decode_file(path: &Path) -> Result<FileDecoder, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| EngineError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Create a paused `Sink` for `track`, along with the decoder's total duration if known.
pub(super) fn create_sink(
    stream: &OutputStream,
    track: &Track,
) -> Result<(Sink, Option<Duration>), EngineError> {
    let source = decode_file(&track.source)?;
    let total = source.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    sink.pause();
    sink.append(source);
    Ok((sink, total))
}
