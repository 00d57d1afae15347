use crate::model::song::{DEFAULT_TEMPO_BPM, NoteEvent, Song};

const JUMP_UP_BASSLINE: &[NoteEvent] = &[
    NoteEvent::new(0.0, 41, 0.75, 100),  // F1
    NoteEvent::new(0.75, 46, 0.25, 95),  // Bb1
    NoteEvent::new(1.0, 43, 0.5, 100),   // G1
    NoteEvent::new(1.5, 41, 0.25, 100),  // F1
    NoteEvent::new(1.75, 48, 0.25, 100), // C2
    NoteEvent::new(2.0, 45, 0.5, 100),   // A1
    NoteEvent::new(2.5, 41, 0.5, 100),   // F1
    NoteEvent::new(3.0, 43, 0.5, 100),   // G1
    NoteEvent::new(3.5, 46, 0.25, 100),  // Bb1
    NoteEvent::new(3.75, 41, 0.25, 100), // F1
    NoteEvent::new(4.0, 48, 0.5, 100),   // C2
    NoteEvent::new(4.5, 45, 0.25, 100),  // A1
    NoteEvent::new(4.75, 43, 0.25, 100), // G1
    NoteEvent::new(5.0, 41, 1.0, 100),   // F1
    NoteEvent::new(6.0, 46, 0.5, 100),   // Bb1
    NoteEvent::new(6.5, 48, 0.5, 100),   // C2
    NoteEvent::new(7.0, 41, 1.0, 100),   // F1
];

pub const SAMPLE_OUTPUT_FILE: &str = "jumpup_complex_808_bass_155bpm.mid";

/// Rolling jump-up 808 bassline in F minor, two bars at 155 BPM.
pub fn jump_up_bassline() -> Song {
    Song {
        title: Some("Jump-up 808 bassline (F minor)".into()),
        tempo_bpm: DEFAULT_TEMPO_BPM,
        events: JUMP_UP_BASSLINE.to_vec(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sample_is_valid_and_monophonic() {
        let song = jump_up_bassline();
        assert_eq!(song.events.len(), 17);
        assert!(song.validate().is_ok());
        assert_eq!(song.length_beats(), 8.0);

        for pair in song.events.windows(2) {
            assert!(pair[1].start_beats >= pair[0].end_beats());
        }
    }
}
