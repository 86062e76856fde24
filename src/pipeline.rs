use crate::cli::{fmt, Cli};
use crate::io::{FastaReader, PngWriter};
use crate::render::Canvas;
use anyhow::Result;
use log::info;

/// Loads the input FASTA, paints it and writes the PNG.
///
/// Failing to read the input is returned as an error. Failing to encode or
/// write the image is reported on stderr and still returns `Ok(())`, in which
/// case the output file may be missing or truncated.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.verbose {
        eprintln!("{}", fmt::header("FastaPaint Configuration"));
        eprintln!("{}: {}", fmt::param_aligned("Input", 8), cli.input.display());
        eprintln!("{}: {}", fmt::param_aligned("Output", 8), cli.output.display());
        eprintln!();
    }

    if cli.verbose {
        eprintln!("{}", fmt::progress("Loading sequences..."));
    }
    let sequences = FastaReader::read(&cli.input)?;
    info!(
        "Loaded {} records, longest is {} bases",
        sequences.len(),
        sequences.max_len()
    );

    if cli.verbose {
        eprintln!("{}", fmt::progress("Painting canvas..."));
    }
    let canvas = Canvas::render(&sequences);
    info!("Canvas is {}x{} pixels", canvas.width(), canvas.height());

    match PngWriter::write(&canvas, &cli.output) {
        Ok(()) => {
            if cli.verbose {
                eprintln!("{}", fmt::success(format!("Image written to {}", cli.output.display())));
            }
        }
        Err(e) => {
            eprintln!("{}", fmt::error(format!("Could not write image: {e:#}")));
        }
    }

    Ok(())
}
