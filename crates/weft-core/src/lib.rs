//! Weft Core Geometry
//!
//! This crate provides the pure geometric foundation for Weft diagrams:
//!
//! - **Geometry**: points and bounding boxes ([`geometry`] module)
//! - **Connectors**: relation-line math between circular glyphs
//!   ([`connector`] module)
//!
//! Everything here is a deterministic function of its inputs; no I/O,
//! no document assembly. The rendering layer in the `weft` crate
//! consumes these value types.

pub mod connector;
pub mod geometry;
