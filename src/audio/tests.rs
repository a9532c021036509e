use super::sink::decode_file;
use crate::error::EngineError;
use std::fs;
use tempfile::tempdir;

#[test]
fn decode_file_reports_missing_file_as_open_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.mp3");
    match decode_file(&path) {
        Err(EngineError::Open { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected open error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn decode_file_reports_garbage_as_decode_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("noise.mp3");
    fs::write(&path, b"definitely not audio").unwrap();
    match decode_file(&path) {
        Err(EngineError::Decode { path: p, message }) => {
            assert_eq!(p, path);
            assert!(!message.is_empty());
        }
        other => panic!("expected decode error, got {:?}", other.map(|_| ())),
    }
}
