//! The layout pipeline: explicit positions, auto-placement, canvas
//! normalization.
//!
//! [`Engine::calculate`] is a deterministic, pure function of the
//! topology. It resolves the annotated positions, places whatever is
//! left, then translates everything onto a non-negative whole-unit
//! grid and computes the tight canvas extent. Positions are block
//! origins (top-left of the 180-unit component block); circle centers
//! derive from them.

mod placement;
mod position;

use log::debug;

use weft_core::geometry::{Bounds, Point};

use crate::error::WeftError;
use crate::style;
use crate::topology::Topology;

/// Resolved per-component positions plus the canvas extent.
///
/// Positions are frozen once the layout is built; they sit on the
/// whole-unit grid with the minimum coordinate at (0, 0).
#[derive(Debug, Clone)]
pub struct Layout {
    positions: Vec<Point>,
    width: u32,
    height: u32,
}

impl Layout {
    /// Block-origin positions, indexed like the topology's components
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Block origin of the component at `index`
    pub fn position(&self, index: usize) -> Point {
        self.positions[index]
    }

    /// Circle center of the component at `index`
    pub fn center(&self, index: usize) -> Point {
        self.positions[index].add_point(Point::new(
            style::COMPONENT_RADIUS,
            style::COMPONENT_RADIUS,
        ))
    }

    /// Canvas width in whole canvas units
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in whole canvas units
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Layout engine for component topologies.
pub struct Engine {
    radius: f32,
    placement_padding: f32,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            radius: style::COMPONENT_RADIUS,
            placement_padding: style::PLACEMENT_PADDING,
        }
    }

    /// Runs the full pipeline for the given topology.
    ///
    /// # Errors
    ///
    /// Returns [`WeftError::InvalidPosition`] for partial or
    /// unparseable position annotations and [`WeftError::LayoutFailed`]
    /// if the bounded placement search is exhausted.
    pub fn calculate(&self, topology: &Topology) -> Result<Layout, WeftError> {
        let mut positions = position::resolve_explicit(topology)?;
        let explicit = positions.iter().flatten().count();

        let min_distance = 2.0 * self.radius + self.placement_padding;
        placement::place_missing(topology, &mut positions, min_distance)?;

        let resolved: Vec<Point> = positions
            .into_iter()
            .map(|p| p.expect("every component is resolved after placement"))
            .collect();

        let layout = self.normalize(resolved);
        debug!(
            components_len = layout.positions.len(),
            explicit_len = explicit,
            width = layout.width,
            height = layout.height;
            "Layout calculated"
        );

        Ok(layout)
    }

    /// Translates all positions so the minimum coordinate is (0, 0),
    /// snaps them to the whole-unit grid, and derives the canvas size.
    fn normalize(&self, resolved: Vec<Point>) -> Layout {
        let Some(bounds) = Bounds::from_points(resolved.iter().copied()) else {
            return Layout {
                positions: Vec::new(),
                width: 0,
                height: 0,
            };
        };

        let origin = bounds.min_point();
        let positions: Vec<Point> = resolved
            .into_iter()
            .map(|p| p.sub_point(origin).floor())
            .collect();

        let extent = Bounds::from_points(positions.iter().copied())
            .expect("normalized positions are non-empty")
            .max_point();
        let block = style::block_extent() + style::CANVAS_MARGIN;

        Layout {
            positions,
            width: (extent.x() + block) as u32,
            height: (extent.y() + block) as u32,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
