//! Deterministic auto-placement for unpositioned components.
//!
//! Components without explicit coordinates are placed by an outward
//! ring search: candidates are generated around a seed point at fixed
//! radius steps and fixed angular increments, and the first candidate
//! clearing every already-resolved component wins. Identical input
//! always yields identical output, which snapshot tests rely on.
//!
//! The search operates on an explicit working vector of resolved
//! positions indexed by component, never on shared state.

use log::debug;

use weft_core::geometry::Point;

use crate::error::WeftError;
use crate::topology::Topology;

/// Radius increment between candidate rings.
const RING_STEP: f32 = 90.0;
/// Candidates per ring, at equal angular increments clockwise from 0°.
const RING_CANDIDATES: u32 = 16;
/// Rings searched before the placement is declared failed.
const MAX_RINGS: u32 = 64;

/// Assigns a position to every `None` entry of `positions`, in
/// declaration order. `min_distance` is the required center-to-center
/// clearance against all already-resolved components.
pub fn place_missing(
    topology: &Topology,
    positions: &mut [Option<Point>],
    min_distance: f32,
) -> Result<(), WeftError> {
    let relations = topology.relation_indices();

    for index in 0..positions.len() {
        if positions[index].is_some() {
            continue;
        }

        let seed = seed_point(index, &relations, positions);
        let placed = search(seed, positions, min_distance).ok_or_else(|| WeftError::LayoutFailed {
            name: topology.components[index].name.clone(),
        })?;

        debug!(
            component = topology.components[index].name,
            x = placed.x(),
            y = placed.y();
            "Auto-placed component"
        );
        positions[index] = Some(placed);
    }

    Ok(())
}

/// Centroid of the resolved relation neighbors, or the origin when the
/// component has none.
fn seed_point(index: usize, relations: &[(usize, usize)], positions: &[Option<Point>]) -> Point {
    let neighbors = relations.iter().filter_map(|&(a, b)| {
        let other = match (a, b) {
            _ if a == index => b,
            _ if b == index => a,
            _ => return None,
        };
        positions[other]
    });

    let mut sum = Point::default();
    let mut count = 0u32;
    for neighbor in neighbors {
        sum = sum.add_point(neighbor);
        count += 1;
    }

    if count == 0 {
        Point::default()
    } else {
        sum.scale(1.0 / count as f32)
    }
}

/// Outward ring search around `seed`; the seed itself is ring zero.
fn search(seed: Point, positions: &[Option<Point>], min_distance: f32) -> Option<Point> {
    if clears_all(seed, positions, min_distance) {
        return Some(seed);
    }

    let angle_step = std::f32::consts::TAU / RING_CANDIDATES as f32;
    for ring in 1..=MAX_RINGS {
        let radius = ring as f32 * RING_STEP;
        for step in 0..RING_CANDIDATES {
            // SVG coordinates grow downward, so increasing angles walk
            // the ring clockwise on screen.
            let angle = step as f32 * angle_step;
            let candidate =
                seed.add_point(Point::new(angle.cos(), angle.sin()).scale(radius));
            if clears_all(candidate, positions, min_distance) {
                return Some(candidate);
            }
        }
    }

    None
}

fn clears_all(candidate: Point, positions: &[Option<Point>], min_distance: f32) -> bool {
    positions
        .iter()
        .flatten()
        .all(|&occupied| candidate.distance(occupied) >= min_distance)
}
