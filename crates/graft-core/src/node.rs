//! The normalized scene-graph node model.
//!
//! A `Node` tree is created fresh per generation request from the host
//! snapshot, is read-only for the engine's lifetime, and is discarded once
//! the output string is produced. Parents exclusively own their children;
//! the tree is acyclic and of finite depth by construction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::layout::{AutoLayout, AutoLayoutResult};
use crate::paint::{Mixed, Paint};

/// Bounding geometry of a node, in design pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A rect positioned at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// Blend mode of a node. Carried through from the host snapshot; no
/// emitter reads it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    PassThrough,
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
}

/// Attributes common to every node variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeProps {
    /// Layer name from the design tool.
    pub name: String,
    pub rect: Rect,
    /// Node opacity, 0..1.
    pub opacity: f64,
    pub blend_mode: BlendMode,
    /// Corner radius; `Mixed` when the corners differ.
    pub corner_radius: Mixed<f64>,
    /// Ordered fill paints; `Mixed` when the values differ across a
    /// composite selection.
    pub fills: Mixed<SmallVec<[Paint; 2]>>,
    /// Reference to a shared fill style, resolved by the host.
    pub fill_style_id: Option<String>,
    /// Reference to a bound color variable, resolved by the host.
    pub fill_variable_id: Option<String>,
}

impl NodeProps {
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            rect,
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
            corner_radius: Mixed::Value(0.0),
            fills: Mixed::Value(SmallVec::new()),
            fill_style_id: None,
            fill_variable_id: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Mixed::Value(radius);
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        match &mut self.fills {
            Mixed::Value(fills) => fills.push(paint),
            Mixed::Mixed => self.fills = Mixed::Value(SmallVec::from_elem(paint, 1)),
        }
        self
    }

    pub fn with_fill_style_id(mut self, id: impl Into<String>) -> Self {
        self.fill_style_id = Some(id.into());
        self
    }

    pub fn with_fill_variable_id(mut self, id: impl Into<String>) -> Self {
        self.fill_variable_id = Some(id.into());
        self
    }
}

/// A node in the design snapshot.
///
/// Closed sum type: every backend emitter matches it exhaustively, so a
/// new variant fails every backend at compile time instead of silently
/// falling through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Frame(FrameNode),
    Group(GroupNode),
    Rectangle(RectangleNode),
    Ellipse(EllipseNode),
    Text(TextNode),
}

impl Node {
    /// Common attributes of any variant.
    pub fn props(&self) -> &NodeProps {
        match self {
            Node::Frame(n) => &n.props,
            Node::Group(n) => &n.props,
            Node::Rectangle(n) => &n.props,
            Node::Ellipse(n) => &n.props,
            Node::Text(n) => &n.props,
        }
    }

    pub fn name(&self) -> &str {
        &self.props().name
    }

    /// Children for container variants, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Frame(n) => &n.children,
            Node::Group(n) => &n.children,
            Node::Rectangle(_) | Node::Ellipse(_) | Node::Text(_) => &[],
        }
    }
}

/// A frame: a container that may carry explicit auto-layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameNode {
    pub props: NodeProps,
    pub auto_layout: Option<AutoLayout>,
    pub children: Vec<Node>,
}

impl FrameNode {
    /// Effective layout: explicit values when present, otherwise inferred
    /// from child geometry. Always yields a result, so the layout mapper
    /// never sees an absent layout.
    pub fn layout(&self) -> AutoLayoutResult {
        match &self.auto_layout {
            Some(layout) => AutoLayoutResult::from_explicit(layout),
            None => {
                let rects: Vec<Rect> =
                    self.children.iter().map(|c| c.props().rect).collect();
                AutoLayoutResult::infer(&rects)
            }
        }
    }
}

/// A group: a container without layout data of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    pub props: NodeProps,
    pub children: Vec<Node>,
}

impl GroupNode {
    /// Groups never carry explicit auto-layout; infer from geometry.
    pub fn layout(&self) -> AutoLayoutResult {
        let rects: Vec<Rect> = self.children.iter().map(|c| c.props().rect).collect();
        AutoLayoutResult::infer(&rects)
    }
}

/// A rectangle shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleNode {
    pub props: NodeProps,
}

/// An ellipse shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseNode {
    pub props: NodeProps,
}

/// A text node with per-segment styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub props: NodeProps,
    pub characters: String,
    /// Styled runs in character order. Emitters that need a single value
    /// take the first segment.
    pub segments: Vec<TextSegment>,
    pub align_horizontal: TextAlignHorizontal,
    pub align_vertical: TextAlignVertical,
    pub auto_resize: TextAutoResize,
}

impl TextNode {
    /// The segment that drives single-value typography emission.
    pub fn primary_segment(&self) -> Option<&TextSegment> {
        self.segments.first()
    }

    /// Whether the node has a fixed (non-auto) size.
    pub fn is_fixed_size(&self) -> bool {
        self.auto_resize == TextAutoResize::None
    }
}

/// Typography of one styled run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSegment {
    /// Font size in pixels.
    pub font_size: f64,
    /// Numeric font weight (100..900).
    pub font_weight: u16,
    pub line_height: LineHeight,
    pub letter_spacing: LetterSpacing,
}

impl Default for TextSegment {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            font_weight: 400,
            line_height: LineHeight::Auto,
            letter_spacing: LetterSpacing::Px(0.0),
        }
    }
}

/// Line height of a text segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineHeight {
    Px(f64),
    Percent(f64),
    Auto,
}

/// Letter spacing of a text segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterSpacing {
    Px(f64),
    Percent(f64),
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

/// Vertical text alignment inside a fixed-size text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}

/// How a text node resizes to fit its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAutoResize {
    /// Fixed box; text wraps and clips inside it.
    None,
    /// Fixed width, height grows with content.
    Height,
    /// Both dimensions grow with content.
    #[default]
    WidthAndHeight,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::layout::Direction;

    #[test]
    fn test_props_builder() {
        let props = NodeProps::new("Card", Rect::sized(120.0, 80.0))
            .with_opacity(0.5)
            .with_corner_radius(8.0)
            .with_fill(Paint::Solid(Rgba::rgb(255, 0, 0)));

        assert_eq!(props.opacity, 0.5);
        assert_eq!(props.corner_radius.value(), Some(&8.0));
        assert_eq!(props.fills.value().map(|f| f.len()), Some(1));
    }

    #[test]
    fn test_frame_layout_falls_back_to_inference() {
        let child = |x: f64| {
            Node::Rectangle(RectangleNode {
                props: NodeProps::new("r", Rect::new(x, 0.0, 40.0, 20.0)),
            })
        };
        let frame = FrameNode {
            props: NodeProps::new("Row", Rect::sized(200.0, 20.0)),
            auto_layout: None,
            children: vec![child(0.0), child(60.0), child(120.0)],
        };

        assert_eq!(frame.layout().direction, Direction::Horizontal);
    }

    #[test]
    fn test_leaf_nodes_have_no_children() {
        let text = Node::Text(TextNode {
            props: NodeProps::new("Label", Rect::sized(60.0, 20.0)),
            characters: "hi".to_string(),
            segments: vec![TextSegment::default()],
            align_horizontal: TextAlignHorizontal::Left,
            align_vertical: TextAlignVertical::Top,
            auto_resize: TextAutoResize::WidthAndHeight,
        });
        assert!(text.children().is_empty());
    }
}
