#![warn(unused)]

use clap::{crate_version, value_parser};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;

use svgsize::{Document, ElementError, IntrinsicSize, LoadingError};

/// Command-line options for `svg-size`.
#[derive(Debug)]
struct Opt {
    /// Whether to stop all processing when a file cannot be measured.
    hard_failures: bool,

    /// Input files or directories.
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Error)]
enum ProcessingError {
    #[error("{}: {error}", .path.display())]
    Io { path: PathBuf, error: io::Error },

    #[error("{}: {error}", .path.display())]
    Loading { path: PathBuf, error: LoadingError },

    #[error("{}: {error}", .path.display())]
    Size { path: PathBuf, error: ElementError },
}

impl ProcessingError {
    /// The underlying error, without the path.
    fn error(&self) -> &dyn std::error::Error {
        match self {
            ProcessingError::Io { error, .. } => error,
            ProcessingError::Loading { error, .. } => error,
            ProcessingError::Size { error, .. } => error,
        }
    }
}

fn format_size(size: Option<IntrinsicSize>) -> String {
    match size {
        Some(IntrinsicSize { width, height }) => format!("{width}x{height}"),
        None => String::from("unknown"),
    }
}

fn measure_file(path: &Path) -> Result<Option<IntrinsicSize>, ProcessingError> {
    let document = Document::load_from_path(path).map_err(|error| ProcessingError::Loading {
        path: path.to_owned(),
        error,
    })?;

    document
        .intrinsic_size()
        .map_err(|error| ProcessingError::Size {
            path: path.to_owned(),
            error,
        })
}

fn process_file(opt: &Opt, path: &Path) -> Result<(), ProcessingError> {
    match (opt.hard_failures, measure_file(path)) {
        (_, Ok(size)) => {
            println!("{}: {}", path.display(), format_size(size));
            Ok(())
        }
        (false, Err(e)) => {
            println!("{}: error: {}", path.display(), e.error());
            Ok(())
        }
        (true, Err(e)) => Err(e),
    }
}

fn process_directory(opt: &Opt, path: &Path) -> Result<(), ProcessingError> {
    let io_error = |error| ProcessingError::Io {
        path: path.to_owned(),
        error,
    };

    let mut entries = fs::read_dir(path)
        .map_err(io_error)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;

    // Make the output independent of the order in which the OS lists files.
    entries.sort();

    for entry in entries {
        if entry.is_dir() {
            process_directory(opt, &entry)?;
        } else if let Some(ext) = entry.extension() {
            if ext == "svg" || ext == "SVG" {
                process_file(opt, &entry)?;
            }
        }
    }

    Ok(())
}

fn process_path(opt: &Opt, path: &Path) -> Result<(), ProcessingError> {
    let meta = fs::metadata(path).map_err(|error| ProcessingError::Io {
        path: path.to_owned(),
        error,
    })?;

    // Files named on the command line are measured whatever their extension.
    if meta.is_dir() {
        process_directory(opt, path)
    } else {
        process_file(opt, path)
    }
}

fn run(opt: &Opt) -> anyhow::Result<()> {
    for path in &opt.inputs {
        process_path(opt, path)?;
    }

    Ok(())
}

fn build_cli() -> clap::Command {
    clap::Command::new("svg-size")
        .version(concat!("version ", crate_version!()))
        .about("Prints the intrinsic size of SVG files.")
        .arg(
            clap::Arg::new("hard-failures")
                .long("hard-failures")
                .help("Stop all processing when a file cannot be measured")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("inputs")
                .help("Input files or directories")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .action(clap::ArgAction::Append),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let hard_failures = matches.get_flag("hard-failures");
    let inputs = matches
        .get_many::<PathBuf>("inputs")
        .expect("inputs are required")
        .cloned()
        .collect();

    let opt = Opt {
        hard_failures,
        inputs,
    };

    if let Err(e) = run(&opt) {
        eprintln!("svg-size: {e}");
        process::exit(1);
    }
}
