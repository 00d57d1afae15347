use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use midigen::{
    Args, TICKS_PER_BEAT, encode_to_file, jump_up_bassline, load_song, parse_format, write_song,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let format = parse_format(&args.format);

    let mut song = match &args.notes {
        Some(path) => {
            info!("Loading song file: '{}'...", path.display());
            load_song(path)?
        }
        None => {
            info!("No song file given, using the built-in sample bassline..!");
            jump_up_bassline()
        }
    };

    if let Some(bpm) = args.tempo {
        debug!("Overriding tempo: {} -> {} BPM", song.tempo_bpm, bpm);
        song.tempo_bpm = bpm;
    }

    debug!(
        "Encoding '{}': {} events, {:.2} beats at {} BPM, format {}..!",
        song.title.as_deref().unwrap_or("<untitled>"),
        song.events.len(),
        song.length_beats(),
        song.tempo_bpm,
        format.header_value()
    );

    if args.dry_run {
        let bytes = write_song(&song, format)?;

        info!("Previewing at most {} events..!", args.dry_run_max);
        for (i, ev) in song.events.iter().take(args.dry_run_max).enumerate() {
            info!(
                "Event {}: pitch={} vel={} start={:.3} beats (tick {}) dur={:.3} beats",
                i,
                ev.pitch,
                ev.velocity,
                ev.start_beats,
                (ev.start_beats * TICKS_PER_BEAT as f64).round(),
                ev.duration_beats
            );
        }

        info!(
            "Dry run: would write {} bytes to '{}'..!",
            bytes.len(),
            args.output.display()
        );
        return Ok(());
    }

    let written = encode_to_file(&song, format, &args.output)?;
    info!(
        "MIDI file written: {} ({} bytes)",
        args.output.display(),
        written
    );

    Ok(())
}
