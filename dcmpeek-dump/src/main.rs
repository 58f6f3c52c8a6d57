//! A CLI tool for dumping the header of a DICOM file in a human readable
//! format.
use clap::Parser;
use dcmpeek_dump::{parse_filter, DumpOptions};
use snafu::Report;
use std::path::PathBuf;

/// Dump the header of a DICOM file
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM file to read
    path: PathBuf,

    /// Cap on the number of elements printed
    #[clap(short = 'n', value_name = "N", default_value_t = 250)]
    max_elements: u32,

    /// Print every element, ignoring -n
    #[clap(long = "all")]
    all: bool,

    /// Maximum sequence recursion depth
    #[clap(short = 'd', value_name = "DEPTH", default_value_t = 5)]
    max_depth: u32,

    /// Collapse sequences instead of descending into them
    #[clap(short = 'c')]
    collapse: bool,

    /// Disable value truncation
    #[clap(short = 'v')]
    full_values: bool,

    /// Filter to a `;`- or `,`-separated list of hex tags
    #[clap(short = 'f', value_name = "TAGS", value_parser = parse_filter)]
    filter: Option<std::collections::HashSet<u32>>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app = App::parse();

    if app.max_depth == 0 || app.max_depth > 100 {
        eprintln!("error: -d must be between 1 and 100");
        std::process::exit(1);
    }

    if app.max_elements == 0 {
        eprintln!("error: -n must be a positive integer");
        std::process::exit(1);
    }

    let width = terminal_size::terminal_size().map(|(w, _)| w.0 as u32).unwrap_or(90);

    let mut options = DumpOptions::new();
    options.width(width).max_sq_depth(app.max_depth).collapse_sequences(app.collapse).show_full_values(app.full_values);
    if app.all {
        options.unbounded();
    } else {
        options.max_elements(app.max_elements);
    }
    if let Some(filter) = app.filter {
        options.filter(filter);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = options.dump_file(&app.path, &mut out) {
        eprintln!("{}", Report::from_error(e));
        std::process::exit(1);
    }
}
