use std::fmt;
use thiserror::Error;

/// Which field of a [`NoteEvent`](crate::NoteEvent) failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    StartBeats,
    Pitch,
    DurationBeats,
    Velocity,
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventField::StartBeats => "start_beats",
            EventField::Pitch => "pitch",
            EventField::DurationBeats => "duration_beats",
            EventField::Velocity => "velocity",
        };
        f.write_str(name)
    }
}

/// Everything that can stop a song from being encoded.
///
/// The writer validates the whole input before producing bytes, so any of these
/// means no buffer (and no file) was produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmfError {
    #[error("event {index}: {field} = {value} is out of range")]
    InvalidEvent {
        index: usize,
        field: EventField,
        value: f64,
    },

    #[error("tempo of {bpm} BPM cannot be encoded (needs 1..=16777215 microseconds per beat)")]
    InvalidTempo { bpm: u32 },

    #[error("value {value} does not fit in a 4-byte variable-length quantity")]
    ValueTooLarge { value: u64 },

    #[error("event {index} starts {overlap_ticks} ticks before the previous note ends")]
    OverlappingOrUnorderedEvent { index: usize, overlap_ticks: u64 },
}
