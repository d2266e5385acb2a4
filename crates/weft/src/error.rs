//! Error types for Weft diagram builds.
//!
//! Every failure aborts the whole build; there is no partial diagram
//! and no recovery inside the engine. The variants identify which
//! component or condition triggered the failure so callers can report
//! them directly.

use std::io;

use thiserror::Error;

/// The main error type for Weft operations.
#[derive(Debug, Error)]
pub enum WeftError {
    /// The topology is structurally invalid, e.g. a relation endpoint
    /// names a component that does not exist.
    #[error("invalid topology: {0}")]
    Topology(String),

    /// A component carries a partial or unparseable position
    /// annotation pair.
    #[error("component {name:?} does not have a valid position")]
    InvalidPosition { name: String },

    /// The auto-placement search exhausted its bounded candidate set.
    /// Not expected for well-formed topologies.
    #[error("no free position found for component {name:?}")]
    LayoutFailed { name: String },

    /// The icon fetch contract failed. The underlying error is
    /// surfaced verbatim.
    #[error("{0}")]
    IconFetch(Box<dyn std::error::Error + Send + Sync>),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
