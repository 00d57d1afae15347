use crate::model::song::Song;
use crate::smf_writer::{SmfFormat, write_song};
use anyhow::{Result, anyhow};
use log::{debug, warn};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub fn parse_format(s: &str) -> SmfFormat {
    match s.to_lowercase().as_str() {
        "0" | "s" | "single" | "singletrack" => SmfFormat::SingleTrack,
        "1" | "p" | "parallel" | "multi" => SmfFormat::Parallel,
        other => {
            warn!("Unknown format '{}', defaulting to `1` (parallel)..!", other);
            SmfFormat::Parallel
        }
    }
}

/// Reads a JSON song file and checks every event before handing it back.
pub fn load_song<P: AsRef<Path>>(path: P) -> Result<Song> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read song file {}: {}", path.display(), e))?;

    let mut song: Song = serde_json::from_str(&text)
        .map_err(|e| anyhow!("Failed to parse song file {}: {}", path.display(), e))?;

    if song.title.is_none() {
        song.title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());
    }

    song.validate()?;
    debug!(
        "Loaded '{}' with {} events at {} BPM..!",
        song.title.as_deref().unwrap_or("<untitled>"),
        song.events.len(),
        song.tempo_bpm
    );

    Ok(song)
}

/// Writes an already-encoded MIDI buffer to `path`, replacing any existing file.
pub fn write_midi_file<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)
        .map_err(|e| anyhow!("Failed to create {}: {}", path.display(), e))?;

    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;

    Ok(())
}

/// Encodes `song` and writes it to `path`, returning the file size.
///
/// The output path is only opened once encoding has succeeded, so an invalid song
/// leaves any existing file untouched.
pub fn encode_to_file<P: AsRef<Path>>(song: &Song, format: SmfFormat, path: P) -> Result<usize> {
    let bytes = write_song(song, format)?;
    write_midi_file(path, &bytes)?;
    Ok(bytes.len())
}
