use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;

use chordshift::{suggest_capo, transpose_chord, transpose_chordpro, Spelling};

#[derive(Parser)]
#[command(name = "chordshift", about = "Transpose chord charts and suggest capo positions")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transpose a ChordPro-style chart
    Transpose {
        /// Path to the chart, or `-` for stdin
        file: PathBuf,

        /// Key the chart is written in
        #[arg(long)]
        from: Option<String>,

        /// Key to transpose to
        #[arg(long)]
        to: String,
    },

    /// Transpose a single chord symbol
    Chord {
        symbol: String,

        /// Interval in semitones (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        semitones: i32,

        /// Spell the result with flats instead of sharps
        #[arg(long)]
        flats: bool,
    },

    /// Suggest capo positions for a key
    Capo {
        key: String,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_env_logger(verbosity: u8) {
    let level_filter = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = LoggerBuilder::new();
    builder.filter(None, level_filter);
    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }
    builder.init();
}

fn read_chart(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut chart = String::new();
        io::stdin().read_to_string(&mut chart)?;
        Ok(chart)
    } else {
        fs::read_to_string(path)
    }
}

fn main() {
    let cli = Cli::parse();
    init_env_logger(cli.verbose);

    match cli.command {
        Command::Transpose { file, from, to } => {
            let chart = match read_chart(&file) {
                Ok(chart) => chart,
                Err(e) => {
                    eprintln!("Error reading '{}': {}", file.display(), e);
                    process::exit(1);
                }
            };

            match transpose_chordpro(&chart, from.as_deref(), &to) {
                Ok(transposed) => print!("{}", transposed),
                Err(e) => {
                    eprintln!("Transposition error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::Chord {
            symbol,
            semitones,
            flats,
        } => {
            let spelling = if flats { Spelling::Flats } else { Spelling::Sharps };
            println!("{}", transpose_chord(&symbol, semitones, spelling.prefers_sharps()));
        }
        Command::Capo { key, json } => {
            let suggestions = match suggest_capo(&key) {
                Ok(suggestions) => suggestions,
                Err(e) => {
                    eprintln!("Invalid key: {}", e);
                    process::exit(1);
                }
            };

            if json {
                match serde_json::to_string_pretty(&suggestions) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Error serializing suggestions: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                for suggestion in suggestions {
                    println!("Capo {:>2}: play in {}", suggestion.capo, suggestion.played_key);
                }
            }
        }
    }
}
