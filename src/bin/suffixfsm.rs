//! suffixfsm - build the backward suffix automaton for one stemmer stage.
//!
//! Reads a newline-delimited suffix list (gzipped when the file name ends
//! in `.gz`) and prints the transition and accept tables, either as JSON or
//! as a Rust source skeleton.

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use porter2::SuffixTable;
use porter2::codegen::{self, TableFormat};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Serialized table, loadable with `SuffixTable::from_json`
    Json,
    /// Rust constants plus a skeleton `match` over the final states
    Rust,
}

impl From<Format> for TableFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => TableFormat::Json,
            Format::Rust => TableFormat::Rust,
        }
    }
}

#[derive(Parser)]
#[command(name = "suffixfsm")]
#[command(about = "Generate a suffix automaton table from a list of suffixes")]
#[command(version)]
struct Cli {
    /// File with one suffix per line, optionally gzipped (.gz)
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "rust")]
    format: Format,

    /// Stage name, used for the generated constant names
    #[arg(short, long, default_value = "stage")]
    name: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let gzipped = cli.input.extension().is_some_and(|ext| ext == "gz");
    let file = File::open(&cli.input)
        .with_context(|| format!("opening suffix list {}", cli.input.display()))?;
    let suffixes = codegen::read_suffix_list(file, gzipped)
        .with_context(|| format!("reading suffix list {}", cli.input.display()))?;
    let table = SuffixTable::build(&suffixes)
        .with_context(|| format!("building table from {}", cli.input.display()))?;

    info!(suffixes = suffixes.len(), states = table.state_count(), gzipped, "built suffix table");

    let rendered = codegen::render(&table, &suffixes, &cli.name, cli.format.into())?;
    match &cli.output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
