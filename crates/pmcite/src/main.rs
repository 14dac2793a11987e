//! CLI entry point: print one citation line per input article.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use pmcite_core::{Assembler, CiteError};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about = "Extract citation lines from PubMed Central article XML", long_about = None)]
struct Cli {
    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Input article XML file(s).
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Keep stdout for citation lines only; diagnostics go to stderr.
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: failed to set up logging: {}", e);
        std::process::exit(1);
    }

    let assembler = match Assembler::new() {
        Ok(assembler) => assembler,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for path in &cli.files {
        match process(&assembler, path) {
            Ok(citation) => println!("{}", citation),
            // A file without front matter is reported and skipped; the
            // rest of the batch still runs.
            Err(e @ CiteError::MissingFront(_)) => eprintln!("Error: {}", e),
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }
}

fn process(assembler: &Assembler, path: &Path) -> Result<String, CiteError> {
    debug!(file = %path.display(), "processing");
    let xml = fs::read_to_string(path)?;
    assembler
        .cite(&xml)?
        .ok_or_else(|| CiteError::MissingFront(path.to_path_buf()))
}
