//! Core types for the Graft code generation engine.
//!
//! Defines the normalized scene-graph snapshot (nodes, paints, colors,
//! auto-layout data) that every downstream crate consumes. The model is
//! read-only once built: the engine never mutates a node.

pub mod color;
pub mod error;
pub mod layout;
pub mod node;
pub mod paint;

pub use color::Rgba;
pub use error::ColorParseError;
pub use layout::{AutoLayout, AutoLayoutResult, CrossAxisAlign, Direction, PrimaryAxisAlign};
pub use node::{
    BlendMode, EllipseNode, FrameNode, GroupNode, LetterSpacing, LineHeight, Node, NodeProps,
    Rect, RectangleNode, TextAlignHorizontal, TextAlignVertical, TextAutoResize, TextNode,
    TextSegment,
};
pub use paint::{GradientStop, Mixed, Paint};
