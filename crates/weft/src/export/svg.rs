//! SVG assembly for a resolved layout.
//!
//! The document is built in a fixed structural order that downstream
//! consumers snapshot-compare: the definition block (indicator glyph,
//! then inline icon definitions in component order), the icon clip
//! mask, the relation layer, and finally the component layer. Nothing
//! is emitted incrementally; [`Diagram::serialize`] writes the whole
//! tree in one pass.

mod component;
mod defs;
mod relation;

use std::io::{self, Write};

use log::debug;
use svg::Document;
use svg::node::element::Group;

use crate::icon::IconSet;
use crate::layout::Layout;
use crate::style;
use crate::topology::Topology;

/// A fully built, immutable diagram.
///
/// Positions and the render tree are frozen at construction;
/// serialization only formats what is already there.
#[derive(Debug)]
pub struct Diagram {
    layout: Layout,
    document: Document,
}

impl Diagram {
    /// Canvas width in whole canvas units
    pub fn width(&self) -> u32 {
        self.layout.width()
    }

    /// Canvas height in whole canvas units
    pub fn height(&self) -> u32 {
        self.layout.height()
    }

    /// The resolved layout backing this diagram
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Writes the complete SVG document to the sink: XML declaration,
    /// generator comment, then the namespaced markup.
    pub fn serialize(&self, sink: &mut impl Write) -> io::Result<()> {
        writeln!(sink, "<?xml version=\"1.0\"?>")?;
        writeln!(sink, "<!-- Generated by weft -->")?;
        svg::write(sink, &self.document)
    }
}

/// Composes the final document from the layout, the fetched icons, and
/// the external-reference URL builder.
pub(crate) fn assemble(
    topology: &Topology,
    layout: Layout,
    icons: &IconSet,
    icon_url: &dyn Fn(&str) -> String,
) -> Diagram {
    let (icon_defs, icon_refs) = component::resolve_icon_refs(topology, icons, icon_url);

    let mut document = Document::new()
        .set("width", layout.width())
        .set("height", layout.height())
        .set("style", style::CANVAS_FONT)
        .set("viewBox", format!("0 0 {} {}", layout.width(), layout.height()))
        .set("xmlns:xlink", "http://www.w3.org/1999/xlink");

    document = document.add(defs::definitions(&icon_defs));
    let (mask, clip) = defs::clip_mask();
    document = document.add(mask).add(clip);

    let mut relations = Group::new().set("id", "relations");
    for rel in &topology.relations {
        relations = relations.add(relation::relation_group(topology, &layout, rel));
    }
    document = document.add(relations);

    let mut components = Group::new().set("id", "components");
    for (index, comp) in topology.components.iter().enumerate() {
        components = components.add(component::component_group(
            comp,
            layout.position(index),
            &icon_refs[index],
        ));
    }
    document = document.add(components);

    debug!(
        width = layout.width(),
        height = layout.height(),
        inline_icons = icon_defs.len();
        "SVG document assembled"
    );

    Diagram { layout, document }
}

/// Formats a coordinate for attribute output, trimmed to two decimals
/// so whole-unit values print as integers.
fn fmt_coord(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
