//! CLI logic for the Weft diagram tool.
//!
//! Reads a topology from JSON, runs the Weft build pipeline, and
//! writes the resulting SVG. Topology parsing lives here, outside the
//! engine; the engine only sees the validated value.

mod args;
mod error;

pub use args::Args;
pub use error::CliError;

use std::fs::{self, File};
use std::io::BufWriter;

use log::info;

use weft::{HttpFetcher, IconFetcher, Topology};

/// Run the Weft CLI application
///
/// # Errors
///
/// Returns [`CliError`] for file I/O errors, topology parse errors,
/// and any engine failure (invalid positions, layout, icon fetch).
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing topology"
    );

    let source = fs::read_to_string(&args.input)?;
    let topology: Topology = serde_json::from_str(&source)?;

    let fetcher = args
        .fetch_icons
        .then(|| HttpFetcher::new(args.icon_url()));
    let fetcher = fetcher.as_ref().map(|f| f as &dyn IconFetcher);

    let diagram = weft::build(&topology, args.icon_url(), fetcher)?;

    let file = File::create(&args.output)?;
    diagram.serialize(&mut BufWriter::new(file))?;

    info!(
        output_file = args.output,
        width = diagram.width(),
        height = diagram.height();
        "SVG exported successfully"
    );

    Ok(())
}
