use crate::model::samples::SAMPLE_OUTPUT_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "midigen",
    about = "Write a sequence of notes out as a Standard MIDI File!"
)]
pub struct Args {
    /// Where to write the MIDI file.
    #[arg(short, long, default_value = SAMPLE_OUTPUT_FILE)]
    pub output: PathBuf,

    /// JSON song file to encode. The built-in sample bassline is used when omitted.
    #[arg(short, long)]
    pub notes: Option<PathBuf>,

    /// Tempo in beats per minute, overriding the one in the song.
    #[arg(short, long)]
    pub tempo: Option<u32>,

    /// Header format: 0|single or 1|parallel.
    #[arg(short, long, default_value = "1")]
    pub format: String,

    /// Dry run (print the first dry_run_max events and exit without writing).
    #[arg(short, long, default_value_t = false)]
    pub dry_run: bool,

    /// Maximum events to print in dry run.
    #[arg(long, default_value_t = 80)]
    pub dry_run_max: usize,

    /// Prints extra information to the terminal.
    #[arg(short, long)]
    pub verbose: bool,
}
