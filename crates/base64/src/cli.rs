//! `b64` — encode or decode base64 from a file or stdin.
//!
//! Provides the logic used by the binary entry point in `src/bin/b64.rs`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::{decode_to_vec, encode_to_string, Alphabet, Base64Error};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Codec(#[from] Base64Error),
}

/// Command-line arguments for `b64`.
#[derive(Debug, Default, Parser)]
#[command(name = "b64", version, about = "Encode or decode base64 (RFC 4648)")]
pub struct Args {
    /// Decode the input instead of encoding it.
    #[arg(short, long)]
    pub decode: bool,

    /// Encode with the URL-safe alphabet (`-` and `_`). Decoding accepts both alphabets.
    #[arg(short, long)]
    pub url_safe: bool,

    /// File to read. Reads stdin when absent or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl Args {
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::from_url_safe(self.url_safe)
    }

    /// Reads the whole input from the file argument or stdin.
    pub fn read_input(&self) -> Result<Vec<u8>, CliError> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => {
                tracing::debug!(path = %path.display(), "reading input file");
                Ok(fs::read(path)?)
            }
            _ => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }

    /// Encodes or decodes `input` and writes the result to `out`.
    pub fn run<W: Write>(&self, input: &[u8], out: &mut W) -> Result<(), CliError> {
        if self.decode {
            out.write_all(&decode_input(input)?)?;
        } else {
            let encoded = encode_to_string(input, self.alphabet());
            writeln!(out, "{encoded}")?;
        }
        Ok(())
    }
}

/// Decodes base64 text, ignoring ASCII whitespace (line breaks in wrapped files).
pub fn decode_input(input: &[u8]) -> Result<Vec<u8>, CliError> {
    let compact: Vec<u8> = input
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    Ok(decode_to_vec(&compact)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &Args, input: &[u8]) -> Result<Vec<u8>, CliError> {
        let mut out = Vec::new();
        args.run(input, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_encode_appends_newline() {
        let out = run(&Args::default(), b"Man").unwrap();
        assert_eq!(out, b"TWFu\n");
    }

    #[test]
    fn test_encode_url_safe() {
        let args = Args {
            url_safe: true,
            ..Default::default()
        };
        assert_eq!(run(&args, &[0xfb, 0xff]).unwrap(), b"-_8=\n");
    }

    #[test]
    fn test_decode_ignores_whitespace() {
        let args = Args {
            decode: true,
            ..Default::default()
        };
        assert_eq!(run(&args, b"aGVs\nbG8g\r\nd29y bGQ=\n").unwrap(), b"hello world");
    }

    #[test]
    fn test_decode_error() {
        let args = Args {
            decode: true,
            ..Default::default()
        };
        assert!(matches!(
            run(&args, b"TW*u"),
            Err(CliError::Codec(Base64Error::InvalidCharacter { byte: b'*', .. }))
        ));
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from(["b64", "-d", "--url-safe", "input.txt"]);
        assert!(args.decode);
        assert!(args.url_safe);
        assert_eq!(args.file, Some(PathBuf::from("input.txt")));
    }
}
