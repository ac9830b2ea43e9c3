//! `b64` — encode stdin or a file to base64, or decode it back.
//!
//! Usage:
//!   b64 [--decode] [--url-safe] [FILE]

use std::io::{self, Write};

use base64_codec::cli::{Args, CliError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("b64: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let input = args.read_input()?;
    let mut stdout = io::stdout().lock();
    args.run(&input, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
