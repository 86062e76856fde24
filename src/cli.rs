// Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fastapaint",
    version,
    about = "Render a FASTA alignment as a PNG image, one pixel row per sequence",
    long_about = None
)]
pub struct Cli {
    /// Input FASTA file (plain or gzip-compressed)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PNG file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Styled helpers for messages printed to stderr.
pub mod fmt {
    use console::style;
    use std::fmt::Display;

    pub fn header(title: &str) -> String {
        format!("{}", style(title).bold().underlined())
    }

    /// Left-aligns a parameter name to `width` columns.
    pub fn param_aligned(name: &str, width: usize) -> String {
        format!("{}", style(format!("{name:<width$}")).cyan())
    }

    pub fn progress(message: impl Display) -> String {
        format!("{} {}", style("→").blue().bold(), message)
    }

    pub fn success(message: impl Display) -> String {
        format!("{} {}", style("✓").green().bold(), message)
    }

    pub fn error(message: impl Display) -> String {
        format!("{} {}", style("✗").red().bold(), message)
    }
}
