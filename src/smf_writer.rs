use crate::error::SmfError;
use crate::model::song::{NoteEvent, Song};
use crate::vlq::{self, VLQ_MAX};
use log::{debug, warn};

/// Ticks per quarter note, used both for beat -> tick conversion and in the header.
pub const TICKS_PER_BEAT: u16 = 480;
pub const HEADER_CHUNK_LEN: usize = 14;

const MICROSECONDS_PER_MINUTE: u32 = 60_000_000;
const MAX_MICROSECONDS_PER_BEAT: u32 = 0x00FF_FFFF;

const NOTE_ON: u8 = 0x90;
const NOTE_OFF: u8 = 0x80;
const META: u8 = 0xFF;
const META_TEMPO: u8 = 0x51;
const META_END_OF_TRACK: u8 = 0x2F;

/// Value written to the format field of the header chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SmfFormat {
    /// Format 0: one track holding everything.
    SingleTrack,

    /// Format 1: simultaneous tracks. We still only ever emit one.
    #[default]
    Parallel,
}

impl SmfFormat {
    pub fn header_value(self) -> u16 {
        match self {
            SmfFormat::SingleTrack => 0,
            SmfFormat::Parallel => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventKind {
    Tempo { micros_per_beat: u32 },
    NoteOn { pitch: u8, velocity: u8 },
    NoteOff { pitch: u8 },
    EndOfTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrackEvent {
    delta_ticks: u32,
    kind: EventKind,
}

impl TrackEvent {
    fn encode_into(&self, buf: &mut Vec<u8>) -> Result<(), SmfError> {
        vlq::encode_into(self.delta_ticks as u64, buf)?;

        match self.kind {
            EventKind::Tempo { micros_per_beat } => {
                let [_, hi, mid, lo] = micros_per_beat.to_be_bytes();
                buf.extend_from_slice(&[META, META_TEMPO, 0x03, hi, mid, lo]);
            }
            EventKind::NoteOn { pitch, velocity } => {
                buf.extend_from_slice(&[NOTE_ON, pitch, velocity]);
            }
            EventKind::NoteOff { pitch } => {
                buf.extend_from_slice(&[NOTE_OFF, pitch, 0x00]);
            }
            EventKind::EndOfTrack => {
                buf.extend_from_slice(&[META, META_END_OF_TRACK, 0x00]);
            }
        }

        Ok(())
    }
}

/// Converts a tempo to the microseconds-per-quarter-note value stored in the tempo meta-event.
///
/// The division truncates. Anything that does not fit in the event's 3-byte field
/// (including 0 BPM) is rejected.
pub fn microseconds_per_beat(tempo_bpm: u32) -> Result<u32, SmfError> {
    if tempo_bpm == 0 {
        return Err(SmfError::InvalidTempo { bpm: tempo_bpm });
    }

    let micros = MICROSECONDS_PER_MINUTE / tempo_bpm;
    if micros == 0 || micros > MAX_MICROSECONDS_PER_BEAT {
        return Err(SmfError::InvalidTempo { bpm: tempo_bpm });
    }

    Ok(micros)
}

fn beats_to_ticks(beats: f64) -> f64 {
    (beats * TICKS_PER_BEAT as f64).round()
}

fn checked_delta(ticks: f64) -> Result<u32, SmfError> {
    if ticks > VLQ_MAX as f64 {
        // `as` saturates, which is all the error message needs
        return Err(SmfError::ValueTooLarge {
            value: ticks as u64,
        });
    }

    Ok(ticks as u32)
}

/// Turns the notes into the delta-timed event list of the track, validating as it goes.
fn build_track_events(tempo_bpm: u32, events: &[NoteEvent]) -> Result<Vec<TrackEvent>, SmfError> {
    let micros_per_beat = microseconds_per_beat(tempo_bpm)?;

    let mut track = Vec::with_capacity(events.len() * 2 + 2);
    track.push(TrackEvent {
        delta_ticks: 0,
        kind: EventKind::Tempo { micros_per_beat },
    });

    let mut last_time_beats = 0.0;
    for (index, ev) in events.iter().enumerate() {
        ev.validate(index)?;

        let start_ticks = beats_to_ticks(ev.start_beats - last_time_beats);
        if start_ticks < 0.0 {
            return Err(SmfError::OverlappingOrUnorderedEvent {
                index,
                overlap_ticks: -start_ticks as u64,
            });
        }

        let duration_ticks = beats_to_ticks(ev.duration_beats);
        if duration_ticks == 0.0 {
            warn!(
                "Event {} (pitch {}) is shorter than one tick and will be silent..! [{} beats]",
                index, ev.pitch, ev.duration_beats
            );
        }

        track.push(TrackEvent {
            delta_ticks: checked_delta(start_ticks)?,
            kind: EventKind::NoteOn {
                pitch: ev.pitch,
                velocity: ev.velocity,
            },
        });
        track.push(TrackEvent {
            delta_ticks: checked_delta(duration_ticks)?,
            kind: EventKind::NoteOff { pitch: ev.pitch },
        });

        last_time_beats = ev.end_beats();
    }

    track.push(TrackEvent {
        delta_ticks: 0,
        kind: EventKind::EndOfTrack,
    });

    Ok(track)
}

fn push_header_chunk(out: &mut Vec<u8>, format: SmfFormat, track_count: u16) {
    out.extend_from_slice(b"MThd");
    out.extend_from_slice(&6u32.to_be_bytes());
    out.extend_from_slice(&format.header_value().to_be_bytes());
    out.extend_from_slice(&track_count.to_be_bytes());
    out.extend_from_slice(&TICKS_PER_BEAT.to_be_bytes());
}

fn push_track_chunk(out: &mut Vec<u8>, data: &[u8]) -> Result<(), SmfError> {
    let len = u32::try_from(data.len()).map_err(|_| SmfError::ValueTooLarge {
        value: data.len() as u64,
    })?;

    out.extend_from_slice(b"MTrk");
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(data);
    Ok(())
}

/// Encode a single-track Standard MIDI File with a format 1 header.
pub fn write(tempo_bpm: u32, events: &[NoteEvent]) -> Result<Vec<u8>, SmfError> {
    write_with_format(tempo_bpm, events, SmfFormat::default())
}

/// Encode a single-track Standard MIDI File.
///
/// Either the whole buffer is returned or nothing is: every event is validated and
/// converted before the first byte of output is produced.
pub fn write_with_format(
    tempo_bpm: u32,
    events: &[NoteEvent],
    format: SmfFormat,
) -> Result<Vec<u8>, SmfError> {
    let track = build_track_events(tempo_bpm, events)?;

    let mut data = Vec::with_capacity(track.len() * 5);
    for event in track.iter() {
        event.encode_into(&mut data)?;
    }

    debug!(
        "Encoded {} notes at {} BPM into {} track events ({} bytes)..!",
        events.len(),
        tempo_bpm,
        track.len(),
        data.len()
    );

    let mut out = Vec::with_capacity(HEADER_CHUNK_LEN + 8 + data.len());
    push_header_chunk(&mut out, format, 1);
    push_track_chunk(&mut out, &data)?;

    Ok(out)
}

pub fn write_song(song: &Song, format: SmfFormat) -> Result<Vec<u8>, SmfError> {
    write_with_format(song.tempo_bpm, &song.events, format)
}
