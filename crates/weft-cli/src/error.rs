//! CLI-level error type wrapping engine and I/O failures for
//! miette-based reporting.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    Weft(#[from] weft::WeftError),

    #[error("cannot read topology: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
