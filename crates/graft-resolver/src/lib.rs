//! Style and variable resolution for the Graft engine.
//!
//! The host supplies style-by-id and variable-by-id lookups as explicit
//! read-only interfaces; resolution is a pure function of node plus
//! lookups and never mutates the snapshot.

pub mod lookup;
pub mod style;

pub use lookup::{NullLookup, StyleLookup, VariableLookup};
pub use style::{
    resolve_corner_radius, resolve_fill, resolve_fill_variable, resolve_paint_list,
    resolve_solid_fill, resolve_style, ResolvedStyle,
};
