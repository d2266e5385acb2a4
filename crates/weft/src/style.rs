//! The fixed visual language of Weft diagrams.
//!
//! Every component renders as the same 180-unit circular block; these
//! constants are shared between the layout pipeline (which needs the
//! block footprint) and the SVG assembler (which needs the full
//! palette). Downstream consumers snapshot-compare rendered output, so
//! none of these values are configurable.

/// Radius of every component circle, in canvas units.
pub const COMPONENT_RADIUS: f32 = 90.0;

/// Side length of the square block a component occupies.
pub const BLOCK_SIZE: f32 = COMPONENT_RADIUS * 2.0;

/// Clearance added on top of `2 * COMPONENT_RADIUS` when auto-placing.
pub const PLACEMENT_PADDING: f32 = 20.0;

/// Margin between the outermost block edge and the canvas border.
pub const CANVAS_MARGIN: f32 = 1.0;

/// Vertical offset of the label band within a component block.
pub const LABEL_BAND_Y: f32 = 135.0;
/// Height of the label band.
pub const LABEL_BAND_HEIGHT: f32 = 32.0;
/// Baseline of the label text within a component block.
pub const LABEL_TEXT_Y: f32 = 157.0;

/// Rendered edge length of a component icon.
pub const ICON_SIZE: f32 = 96.0;
/// Offset of the icon within its component block, both axes.
pub const ICON_OFFSET: f32 = 42.0;

/// Edge length of the status indicator glyph, which is also the gap
/// reserved for it in the relation dash pattern.
pub const INDICATOR_SIZE: f32 = 16.0;

/// Radius of the relation tick marks.
pub const TICK_RADIUS: f32 = 4.0;

pub const RELATION_COLOR: &str = "#a7a7a7";
pub const COMPONENT_FILL: &str = "#f5f5f5";
pub const COMPONENT_STROKE: &str = "#888";
pub const LABEL_FILL: &str = "rgba(220, 220, 220, 0.8)";
pub const CANVAS_FONT: &str = "font-family:Ubuntu, sans-serif;";

/// Vertical extent of a component block including the label band.
///
/// The band currently ends inside the circle, so this equals the block
/// size; the max keeps the canvas tight if the band ever grows past it.
pub fn block_extent() -> f32 {
    BLOCK_SIZE.max(LABEL_BAND_Y + LABEL_BAND_HEIGHT)
}
