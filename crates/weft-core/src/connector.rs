//! Relation-line math between two circular glyphs.
//!
//! [`connect`] turns a pair of circle centers into everything the
//! renderer needs for one relation: the trimmed line segment, the dash
//! pattern that leaves a gap for the status indicator, the indicator
//! anchor, and two decorative tick marks. It is a pure function of the
//! centers, the circle radius, and the indicator gap size.

use crate::geometry::Point;

/// Fraction of the trimmed segment, from each end, at which the tick
/// marks sit.
const TICK_FRACTION: f32 = 1.0 / 3.0;

/// Stroke dash pattern of a relation line.
///
/// The repeating `dash, gap` cycle covers the trimmed segment exactly
/// once as dash, gap, dash, so the single gap straddles the segment
/// midpoint and exposes the indicator slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    dash: f32,
    gap: f32,
}

impl DashPattern {
    /// Length of each visible dash on either side of the gap
    pub fn dash(self) -> f32 {
        self.dash
    }

    /// Length of the indicator gap
    pub fn gap(self) -> f32 {
        self.gap
    }
}

/// Resolved geometry of one relation line.
#[derive(Debug, Clone, Copy)]
pub struct Connector {
    start: Point,
    end: Point,
    dash: DashPattern,
    indicator: Point,
    ticks: [Point; 2],
}

impl Connector {
    /// Start of the drawn segment, on the first circle's boundary
    pub fn start(self) -> Point {
        self.start
    }

    /// End of the drawn segment, on the second circle's boundary
    pub fn end(self) -> Point {
        self.end
    }

    /// Dash pattern reserving the indicator gap
    pub fn dash(self) -> DashPattern {
        self.dash
    }

    /// Top-left anchor of the indicator glyph at the segment midpoint
    pub fn indicator(self) -> Point {
        self.indicator
    }

    /// Tick-mark centers, one third in from each end
    pub fn ticks(self) -> [Point; 2] {
        self.ticks
    }

    /// Length of the drawn (trimmed) segment
    pub fn length(self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Computes the line geometry between two component circles.
///
/// Both endpoints are trimmed by `radius` along the center-to-center
/// direction so the line touches the circle boundaries. Centers closer
/// than `2 * radius` degrade to a zero-length segment at the midpoint;
/// coincident centers are guarded explicitly so no direction is ever
/// derived from a zero-length vector.
pub fn connect(a: Point, b: Point, radius: f32, gap: f32) -> Connector {
    let delta = b.sub_point(a);
    let distance = delta.hypot();
    let midpoint = a.midpoint(b);

    let (start, end) = if distance == 0.0 {
        (a, a)
    } else {
        // Overlapping circles collapse the segment to the midpoint
        // rather than crossing into either glyph.
        let trim = radius.min(distance / 2.0);
        let unit = delta.scale(1.0 / distance);
        (a.add_point(unit.scale(trim)), b.sub_point(unit.scale(trim)))
    };

    let length = start.distance(end);
    let dash = DashPattern {
        dash: (length - gap).max(0.0) / 2.0,
        gap,
    };

    let half_gap = gap / 2.0;
    let indicator = midpoint.sub_point(Point::new(half_gap, half_gap));

    let span = end.sub_point(start);
    let ticks = [
        start.add_point(span.scale(TICK_FRACTION)),
        end.sub_point(span.scale(TICK_FRACTION)),
    ];

    Connector {
        start,
        end,
        dash,
        indicator,
        ticks,
    }
}
