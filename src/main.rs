use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sentinel_scan::prelude::*;
use sentinel_scan::CStrCursor;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sentinel-scan",
    about = "Scan text up to a composed stop condition"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Overridden by RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input file (reads stdin when neither this nor --text is given).
    path: Option<PathBuf>,

    /// Scan this text instead of a file.
    #[arg(long, conflicts_with = "path")]
    text: Option<String>,

    /// Stop before the first occurrence of any of these bytes.
    #[arg(long, default_value = "")]
    stop_at: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Offset of the first occurrence of a byte before the stop.
    Locate {
        /// Byte to search for (ASCII).
        needle: char,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Occurrences of a byte before the stop.
    Count {
        /// Byte to count (ASCII).
        needle: char,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Offsets of the largest and smallest bytes before the stop.
    Extent {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Number of bytes before the stop.
    Length {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Length of the NUL-terminated prefix, scanned without knowing its end.
    Strlen {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Locate { needle, input } => run_locate(needle, &input)?,
        Commands::Count { needle, input } => run_count(needle, &input)?,
        Commands::Extent { input } => run_extent(&input)?,
        Commands::Length { input } => run_length(&input)?,
        Commands::Strlen { input } => run_strlen(&input)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Where a `locate` scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Located {
    Found(usize),
    Bounded(usize),
}

fn run_locate(needle: char, input: &InputArgs) -> Result<()> {
    let needle = ascii_byte(needle)?;
    let bytes = read_input(input)?;

    match locate_before_stop(&bytes, input.stop_at.as_bytes(), needle) {
        Located::Found(offset) => println!("{offset}"),
        Located::Bounded(offset) => println!("not found (bounded at {offset})"),
    }
    Ok(())
}

fn run_count(needle: char, input: &InputArgs) -> Result<()> {
    let needle = ascii_byte(needle)?;
    let bytes = read_input(input)?;

    println!("{}", count_before_stop(&bytes, input.stop_at.as_bytes(), needle));
    Ok(())
}

fn run_extent(input: &InputArgs) -> Result<()> {
    let bytes = read_input(input)?;
    let ((max_at, max), (min_at, min)) = extent_before_stop(&bytes, input.stop_at.as_bytes())?;

    println!(
        "max\t{}\t{:?}\nmin\t{}\t{:?}",
        max_at, max as char, min_at, min as char
    );
    Ok(())
}

fn run_length(input: &InputArgs) -> Result<()> {
    let bytes = read_input(input)?;

    println!("{}", length_before_stop(&bytes, input.stop_at.as_bytes()));
    Ok(())
}

fn run_strlen(input: &InputArgs) -> Result<()> {
    let bytes = read_input(input)?;

    println!("{}", strlen_before_stop(bytes, input.stop_at.as_bytes())?);
    Ok(())
}

fn locate_before_stop(bytes: &[u8], stops: &[u8], needle: u8) -> Located {
    let stop = until(|b: &u8| stops.contains(b)).or(bytes.end());
    let pos = scan::locate(bytes.begin(), stop, &needle);

    if stop.reached(&pos) {
        Located::Bounded(pos.position())
    } else {
        Located::Found(pos.position())
    }
}

fn count_before_stop(bytes: &[u8], stops: &[u8], needle: u8) -> usize {
    let stop = until(|b: &u8| stops.contains(b)).or(bytes.end());
    scan::count(bytes.begin(), stop, &needle)
}

fn extent_before_stop(bytes: &[u8], stops: &[u8]) -> Result<((usize, u8), (usize, u8))> {
    let region = bounds(bytes.begin(), until(|b: &u8| stops.contains(b)).or(bytes.end()));
    let max = region
        .locate_max_by(|a, b| a.cmp(b))
        .context("no bytes before the stop condition")?;
    let min = region
        .locate_min_by(|a, b| a.cmp(b))
        .context("no bytes before the stop condition")?;

    Ok(((max.position(), *max.get()), (min.position(), *min.get())))
}

fn length_before_stop(bytes: &[u8], stops: &[u8]) -> usize {
    let stop = until(|b: &u8| stops.contains(b)).or(bytes.end());
    scan::distance(bytes.begin(), stop)
}

fn strlen_before_stop(mut bytes: Vec<u8>, stops: &[u8]) -> Result<usize> {
    if !bytes.contains(&0) {
        debug!(len = bytes.len(), "appending terminator to input");
        bytes.push(0);
    }

    let begin = CStrCursor::from_bytes(&bytes)?;
    let stop = NulTerminator.or(until(|b: u8| stops.contains(&b)));
    Ok(scan::distance(begin, stop))
}

fn ascii_byte(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("needle {c:?} is not an ASCII character");
    }
    Ok(c as u8)
}

fn read_input(input: &InputArgs) -> Result<Vec<u8>> {
    let bytes = match (&input.text, &input.path) {
        (Some(text), _) => text.clone().into_bytes(),
        (None, Some(path)) => fs::read(path)
            .with_context(|| format!("failed to read input from {}", path.display()))?,
        (None, None) => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read input from stdin")?;
            buf
        }
    };
    info!(len = bytes.len(), "input loaded");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_without_stop_bytes_scans_to_the_end() {
        assert_eq!(locate_before_stop(b"abc", b"", b'z'), Located::Bounded(3));
        assert_eq!(locate_before_stop(b"abc", b"", b'c'), Located::Found(2));
        assert_eq!(locate_before_stop(b"", b"", b'a'), Located::Bounded(0));
    }

    #[test]
    fn test_locate_stops_at_stop_byte() {
        assert_eq!(locate_before_stop(b"key=value", b"=", b'v'), Located::Bounded(3));
        assert_eq!(locate_before_stop(b"key=value", b"=", b'e'), Located::Found(1));
        // A needle that is also a stop byte is never found.
        assert_eq!(locate_before_stop(b"a=b", b"=", b'='), Located::Bounded(1));
    }

    #[test]
    fn test_count_and_length_without_stop_bytes() {
        assert_eq!(count_before_stop(b"banana", b"", b'a'), 3);
        assert_eq!(count_before_stop(b"banana", b"n", b'a'), 1);
        assert_eq!(length_before_stop(b"abc", b""), 3);
        assert_eq!(length_before_stop(b"abc", b"xyz"), 3);
        assert_eq!(length_before_stop(b"ab;c", b";"), 2);
    }

    #[test]
    fn test_extent_without_stop_bytes() {
        let ((max_at, max), (min_at, min)) = extent_before_stop(b"cabca", b"").unwrap();
        assert_eq!((max_at, max), (0, b'c'));
        assert_eq!((min_at, min), (1, b'a'));
    }

    #[test]
    fn test_extent_of_empty_region_is_an_error() {
        assert!(extent_before_stop(b";abc", b";").is_err());
        assert!(extent_before_stop(b"", b"").is_err());
    }

    #[test]
    fn test_strlen_appends_missing_terminator() {
        assert_eq!(strlen_before_stop(b"abc".to_vec(), b"").unwrap(), 3);
        assert_eq!(strlen_before_stop(b"ab\0cd".to_vec(), b"").unwrap(), 2);
        assert_eq!(strlen_before_stop(b"a-bc".to_vec(), b"-").unwrap(), 1);
    }

    #[test]
    fn test_ascii_byte_rejects_non_ascii() {
        assert_eq!(ascii_byte('a').unwrap(), b'a');
        assert!(ascii_byte('é').is_err());
    }
}
