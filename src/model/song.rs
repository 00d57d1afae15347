use crate::error::{EventField, SmfError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPO_BPM: u32 = 155;

fn default_tempo() -> u32 {
    DEFAULT_TEMPO_BPM
}

/// A single note, timed in beats from the start of the song.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    pub start_beats: f64,
    pub pitch: u8,
    pub duration_beats: f64,
    pub velocity: u8,
}

impl NoteEvent {
    pub const fn new(start_beats: f64, pitch: u8, duration_beats: f64, velocity: u8) -> Self {
        Self {
            start_beats,
            pitch,
            duration_beats,
            velocity,
        }
    }

    /// Checks the fields of the event at position `index` in its song.
    pub fn validate(&self, index: usize) -> Result<(), SmfError> {
        let invalid = |field, value| SmfError::InvalidEvent {
            index,
            field,
            value,
        };

        if !self.start_beats.is_finite() || self.start_beats < 0.0 {
            return Err(invalid(EventField::StartBeats, self.start_beats));
        }
        if self.pitch > 127 {
            return Err(invalid(EventField::Pitch, self.pitch as f64));
        }
        if !self.duration_beats.is_finite() || self.duration_beats <= 0.0 {
            return Err(invalid(EventField::DurationBeats, self.duration_beats));
        }
        if self.velocity > 127 {
            return Err(invalid(EventField::Velocity, self.velocity as f64));
        }

        Ok(())
    }

    pub fn end_beats(&self) -> f64 {
        self.start_beats + self.duration_beats
    }
}

/// Everything needed to render one MIDI file: a tempo and the notes, in play order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Song {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_tempo")]
    pub tempo_bpm: u32,
    pub events: Vec<NoteEvent>,
}

impl Song {
    pub fn validate(&self) -> Result<(), SmfError> {
        self.events
            .iter()
            .enumerate()
            .try_for_each(|(i, ev)| ev.validate(i))
    }

    /// Length of the song in beats, measured to the end of the last note.
    pub fn length_beats(&self) -> f64 {
        self.events
            .iter()
            .map(NoteEvent::end_beats)
            .fold(0.0, f64::max)
    }
}
