//! Weft — renders component topologies as SVG diagrams.
//!
//! A [`Topology`] of named components and pairwise relations becomes a
//! vector diagram: circular component glyphs connected by relation
//! lines, each carrying an icon and a status indicator gap.
//! Components without valid position annotations are auto-placed
//! deterministically, so identical input always serializes to
//! identical output.
//!
//! # Examples
//!
//! ```rust,no_run
//! use weft::{Component, Endpoint, Relation, Topology};
//!
//! let topology = Topology::new(
//!     vec![
//!         Component::at("charmworld", "precise/charmworld-58", "813.5", "112.23"),
//!         Component::new("mongodb", "precise/mongodb-21"),
//!     ],
//!     vec![Relation::new(
//!         Endpoint::with_role("charmworld", "database"),
//!         Endpoint::with_role("mongodb", "database"),
//!     )],
//! );
//!
//! // No fetcher: every icon renders as an external reference.
//! let diagram = weft::build(&topology, |key| format!("https://icons.example/{key}.svg"), None)
//!     .expect("failed to build diagram");
//!
//! let mut out = Vec::new();
//! diagram.serialize(&mut out).expect("failed to serialize diagram");
//! ```

mod error;
mod export;
mod icon;
mod layout;
mod style;
mod topology;

pub use weft_core::{connector, geometry};

pub use error::WeftError;
pub use export::svg::Diagram;
pub use icon::{FetchError, HttpFetcher, IconFetcher, IconSet};
pub use layout::{Engine, Layout};
pub use topology::{Component, Endpoint, Relation, Topology, X_ANNOTATION, Y_ANNOTATION};

use log::info;

/// Builds a diagram from a validated topology.
///
/// `icon_url` maps an icon reference key to the external URL used for
/// components whose icon bytes are unavailable. `fetcher` is the
/// optional fetch contract; when absent, every icon resolves to an
/// external reference. The fetcher is invoked at most once.
///
/// # Errors
///
/// - [`WeftError::Topology`] — a relation endpoint does not resolve.
/// - [`WeftError::InvalidPosition`] — partial or unparseable position
///   annotations, naming the component.
/// - [`WeftError::LayoutFailed`] — the bounded placement search was
///   exhausted.
/// - [`WeftError::IconFetch`] — the fetch contract failed; the
///   underlying error is surfaced verbatim.
pub fn build(
    topology: &Topology,
    icon_url: impl Fn(&str) -> String,
    fetcher: Option<&dyn IconFetcher>,
) -> Result<Diagram, WeftError> {
    info!(
        components_len = topology.components.len(),
        relations_len = topology.relations.len();
        "Building diagram"
    );

    topology.validate()?;

    let layout = layout::Engine::new().calculate(topology)?;

    let icons = match fetcher {
        Some(fetcher) => fetcher
            .fetch_icons(topology)
            .map_err(WeftError::IconFetch)?,
        None => IconSet::new(),
    };
    info!(icons_len = icons.len(); "Icons resolved");

    Ok(export::svg::assemble(topology, layout, &icons, &icon_url))
}
