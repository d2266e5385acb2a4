//! The relation layer: one group per relation with its dashed line,
//! indicator reference, and tick marks.

use svg::node::element::{Circle, Group, Line, Title, Use};

use weft_core::connector::{self, Connector};

use crate::layout::Layout;
use crate::style;
use crate::topology::{Relation, Topology};

use super::fmt_coord;

/// Builds the visual group for one relation from the resolved centers
/// of its endpoints.
pub(super) fn relation_group(topology: &Topology, layout: &Layout, relation: &Relation) -> Group {
    let a = topology
        .component_index(&relation.endpoints[0].component)
        .expect("topology was validated before assembly");
    let b = topology
        .component_index(&relation.endpoints[1].component)
        .expect("topology was validated before assembly");

    let connector = connector::connect(
        layout.center(a),
        layout.center(b),
        style::COMPONENT_RADIUS,
        style::INDICATOR_SIZE,
    );

    Group::new()
        .add(Title::new(relation.title()))
        .add(line(&connector))
        .add(indicator(&connector))
        .add(tick(connector.ticks()[0]))
        .add(tick(connector.ticks()[1]))
}

fn line(connector: &Connector) -> Line {
    Line::new()
        .set("x1", fmt_coord(connector.start().x()))
        .set("y1", fmt_coord(connector.start().y()))
        .set("x2", fmt_coord(connector.end().x()))
        .set("y2", fmt_coord(connector.end().y()))
        .set("stroke", style::RELATION_COLOR)
        .set("stroke-width", "1px")
        .set(
            "stroke-dasharray",
            format!(
                "{:.2}, {}",
                connector.dash().dash(),
                connector.dash().gap()
            ),
        )
}

fn indicator(connector: &Connector) -> Use {
    Use::new()
        .set("x", fmt_coord(connector.indicator().x()))
        .set("y", fmt_coord(connector.indicator().y()))
        .set("xlink:href", "#indicator")
}

fn tick(center: weft_core::geometry::Point) -> Circle {
    Circle::new()
        .set("cx", fmt_coord(center.x()))
        .set("cy", fmt_coord(center.y()))
        .set("r", style::TICK_RADIUS)
        .set("fill", style::RELATION_COLOR)
}
