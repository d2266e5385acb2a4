//! The document definition block: status-indicator glyph, inline icon
//! definitions, and the shared icon clip mask.

use svg::node::Blob;
use svg::node::element::{Circle, ClipPath, Definitions, Group, SVG, Use};

use crate::style;

use super::component::IconDef;

/// Static status-indicator glyph, referenced once per relation.
const INDICATOR_GLYPH: &str = concat!(
    r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16">"##,
    r##"<circle cx="8" cy="8" r="7.25" fill="#a7a7a7" stroke="#a7a7a7" stroke-width="1.5"/>"##,
    r##"<path d="M11.73 4.89l-4.7 4.15-2.78-2.38-.84.95 3.62 3.8 5.5-5.79z" fill="#fff"/>"##,
    r##"</svg>"##
);

/// Builds the `<defs>` block: the indicator glyph first, then one
/// nested document per distinct inline icon, in first-seen key order.
pub(super) fn definitions(icon_defs: &[IconDef]) -> Definitions {
    let indicator = Group::new()
        .set("id", "indicator")
        .add(Blob::new(INDICATOR_GLYPH));

    let mut defs = Definitions::new().add(indicator);
    for icon_def in icon_defs {
        let nested = SVG::new()
            .set("id", icon_def.id.as_str())
            .set("width", style::ICON_SIZE)
            .set("height", style::ICON_SIZE)
            .add(Blob::new(String::from_utf8_lossy(&icon_def.bytes).into_owned()));
        defs = defs.add(nested);
    }
    defs
}

/// The reusable icon clip mask keyed to the component radius: a mask
/// circle plus the `clipPath` that references it.
pub(super) fn clip_mask() -> (Circle, ClipPath) {
    let mask = Circle::new()
        .set("cx", 47)
        .set("cy", 49)
        .set("r", 45)
        .set("id", "component-icon-mask")
        .set("fill", "none");

    let clip = ClipPath::new().set("id", "clip-mask").add(
        Use::new()
            .set("x", 0)
            .set("y", 0)
            .set("xlink:href", "#component-icon-mask"),
    );

    (mask, clip)
}
