//! The component layer: one translated group per component with its
//! circle, icon, and label band.

use indexmap::IndexMap;
use svg::node::element::{Circle, Group, Image, Rectangle, Text, Title, Use};

use weft_core::geometry::Point;

use crate::icon::IconSet;
use crate::style;
use crate::topology::{Component, Topology};

/// How one component's icon is referenced from its glyph.
///
/// Inline icons live in the definition block and are pulled in via
/// `<use>`; external icons link straight to the built URL. Both occupy
/// the same slot under the shared clip mask.
#[derive(Debug)]
pub(super) enum IconRef {
    Inline { id: String },
    External { url: String },
}

/// One entry of the document definition block: a fetched icon embedded
/// under a stable id. Components sharing a key share the definition.
#[derive(Debug)]
pub(super) struct IconDef {
    pub(super) id: String,
    pub(super) bytes: Vec<u8>,
}

/// Decides inline versus external per component. Inline definition ids
/// are assigned per distinct icon key, in first-seen order, so a key
/// referenced by several components is defined once and reused.
pub(super) fn resolve_icon_refs(
    topology: &Topology,
    icons: &IconSet,
    icon_url: &dyn Fn(&str) -> String,
) -> (Vec<IconDef>, Vec<IconRef>) {
    let mut defs: Vec<IconDef> = Vec::new();
    let mut assigned: IndexMap<&str, String> = IndexMap::new();

    let refs = topology
        .components
        .iter()
        .map(|component| match icons.get(&component.icon) {
            Some(bytes) => {
                let id = assigned
                    .entry(component.icon.as_str())
                    .or_insert_with(|| {
                        let id = format!("icon-{}", defs.len() + 1);
                        defs.push(IconDef {
                            id: id.clone(),
                            bytes: bytes.clone(),
                        });
                        id
                    })
                    .clone();
                IconRef::Inline { id }
            }
            None => IconRef::External {
                url: icon_url(&component.icon),
            },
        })
        .collect();

    (defs, refs)
}

/// One visual group per component, translated to its resolved block
/// origin.
pub(super) fn component_group(component: &Component, position: Point, icon_ref: &IconRef) -> Group {
    let circle = Circle::new()
        .set("cx", style::COMPONENT_RADIUS)
        .set("cy", style::COMPONENT_RADIUS)
        .set("r", style::COMPONENT_RADIUS)
        .set("class", "component-block")
        .set("fill", style::COMPONENT_FILL)
        .set("stroke", style::COMPONENT_STROKE)
        .set("stroke-width", 1);

    let label_band = Rectangle::new()
        .set("x", 0)
        .set("y", style::LABEL_BAND_Y)
        .set("width", style::BLOCK_SIZE)
        .set("height", style::LABEL_BAND_HEIGHT)
        .set("rx", 2)
        .set("ry", 2)
        .set("fill", style::LABEL_FILL);

    let label = Text::new(component.name.clone())
        .set("x", style::COMPONENT_RADIUS)
        .set("y", style::LABEL_TEXT_Y)
        .set("text-anchor", "middle")
        .set("style", "font-weight:200");

    let mut group = Group::new()
        .set("transform", format!("translate({},{})", position.x(), position.y()))
        .add(Title::new(component.name.clone()))
        .add(circle);

    group = match icon_ref {
        IconRef::Inline { id } => group.add(
            Use::new()
                .set("x", 0)
                .set("y", 0)
                .set("xlink:href", format!("#{id}"))
                .set(
                    "transform",
                    format!("translate({0},{0})", style::ICON_OFFSET),
                )
                .set("width", style::ICON_SIZE)
                .set("height", style::ICON_SIZE)
                .set("clip-path", "url(#clip-mask)"),
        ),
        IconRef::External { url } => group.add(
            Image::new()
                .set("x", style::ICON_OFFSET)
                .set("y", style::ICON_OFFSET)
                .set("width", style::ICON_SIZE)
                .set("height", style::ICON_SIZE)
                .set("xlink:href", url.as_str())
                .set("clip-path", "url(#clip-mask)"),
        ),
    };

    group.add(label_band).add(label)
}
