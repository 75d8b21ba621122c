use glyphr::bmp_to_ascii;
use std::{fs::File, io, path::PathBuf};
use tracing::{info, Level};

use anyhow::Result;
use clap::Parser;

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    /// The bmp image to render (24-bit uncompressed)
    bmp_file: PathBuf,

    /// The output file name; writes to stdout when absent
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // diagnostics go to stderr so a piped rendering stays clean
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .init();

    match cli.output {
        Some(output) => {
            let f = File::options()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&output)?;
            bmp_to_ascii(&cli.bmp_file, f)?;
            info!("output name: {}", output.display());
        }
        None => {
            bmp_to_ascii(&cli.bmp_file, io::stdout().lock())?;
        }
    }
    Ok(())
}
