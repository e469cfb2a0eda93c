//! Command-line front end: convert a DICOM file to the JPEG Lossless
//! (Process 14 SV1) transfer syntax.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Convert a DICOM file to the JPEG Lossless transfer syntax
/// (1.2.840.10008.1.2.4.70)
#[derive(Parser)]
#[command(name = "dcmcjpeg", version, about)]
struct Cli {
    /// Input DICOM file
    input: PathBuf,

    /// Output DICOM file
    output: PathBuf,

    /// Print per-stage diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match dcmcjpeg_rs::convert_file(&cli.input, &cli.output) {
        Ok(()) => {
            println!("successfully converted");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
