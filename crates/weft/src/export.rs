//! Document assembly and serialization.

pub mod svg;
