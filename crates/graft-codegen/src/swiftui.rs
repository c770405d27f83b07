//! SwiftUI emitter: stack/shape/text views with trailing modifier
//! chains.

use graft_core::{
    AutoLayoutResult, Direction, LetterSpacing, LineHeight, Node, NodeProps, Paint,
    PrimaryAxisAlign, Rgba, TextAlignHorizontal, TextNode,
};
use graft_resolver::{resolve_paint_list, resolve_style};

use crate::align::swiftui_stack_alignment;
use crate::builder::{fmt_num, CodeBuilder};
use crate::decor;
use crate::gradient::first_gradient;
use crate::{Backend, EmitContext, Emitter};

/// Swift/SwiftUI code generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwiftUiEmitter;

impl SwiftUiEmitter {
    pub fn new() -> Self {
        Self
    }

    fn emit_node(&self, node: &Node, ctx: &EmitContext) -> String {
        let content = match node {
            Node::Frame(frame) => self.container(&frame.props, frame.layout(), &frame.children, ctx),
            Node::Group(group) => self.container(&group.props, group.layout(), &group.children, ctx),
            Node::Rectangle(rect) => self.shape("Rectangle()", &rect.props, false, ctx),
            Node::Ellipse(ellipse) => self.shape("Ellipse()", &ellipse.props, true, ctx),
            Node::Text(text) => self.text(text, ctx),
        };
        decor::apply(
            Backend::SwiftUi,
            &decor::derive(node, ctx.containing_align),
            content,
        )
    }

    fn container(
        &self,
        props: &NodeProps,
        layout: AutoLayoutResult,
        children: &[Node],
        ctx: &EmitContext,
    ) -> String {
        let stack = match layout.direction {
            Direction::Horizontal => "HStack",
            Direction::Vertical => "VStack",
        };
        let mut params = vec![format!("alignment: {}", swiftui_stack_alignment(&layout))];
        if layout.spacing > 0.0 {
            params.push(format!("spacing: {}", fmt_num(layout.spacing)));
        }

        let mut out = CodeBuilder::new();
        out.line(&format!("{stack}({}) {{", params.join(", "))).indent();
        let child_ctx = ctx.for_child(layout.cross.into());
        // Stacks have no space-between arrangement; expanding spacers
        // between children produce the same distribution.
        let spaced = layout.primary == PrimaryAxisAlign::SpaceBetween;
        for (i, child) in children.iter().enumerate() {
            if spaced && i > 0 {
                out.line("Spacer()");
            }
            out.block(&self.emit_node(child, &child_ctx));
        }
        out.dedent().line("}");

        out.line(&format!(
            ".frame(width: {}, height: {})",
            fmt_num(props.rect.width),
            fmt_num(props.rect.height)
        ));
        let style = resolve_style(props, ctx.styles, ctx.variables);
        if let Some(fill) = fill_expr(props, ctx) {
            out.line(&format!(".background({fill})"));
        }
        if let Some(radius) = style.corner_radius {
            out.line(&format!(".cornerRadius({})", fmt_num(radius)));
        }
        out.finish()
    }

    fn shape(&self, view: &str, props: &NodeProps, ellipse: bool, ctx: &EmitContext) -> String {
        let mut out = CodeBuilder::new();
        out.line(view).indent();
        if let Some(fill) = fill_expr(props, ctx) {
            out.line(&format!(".fill({fill})"));
        }
        out.line(&format!(
            ".frame(width: {}, height: {})",
            fmt_num(props.rect.width),
            fmt_num(props.rect.height)
        ));
        let style = resolve_style(props, ctx.styles, ctx.variables);
        if !ellipse {
            if let Some(radius) = style.corner_radius {
                out.line(&format!(".cornerRadius({})", fmt_num(radius)));
            }
        }
        out.finish()
    }

    fn text(&self, text: &TextNode, ctx: &EmitContext) -> String {
        let mut out = CodeBuilder::new();
        out.line(&format!("Text(\"{}\")", escape_swift(&text.characters)))
            .indent();

        if let Some(segment) = text.primary_segment() {
            let weight = swiftui_weight(segment.font_weight);
            let font = match weight {
                Some(weight) => format!(
                    ".font(.system(size: {}, weight: {weight}))",
                    fmt_num(segment.font_size)
                ),
                None => format!(".font(.system(size: {}))", fmt_num(segment.font_size)),
            };
            out.line(&font);

            // SwiftUI takes extra space between lines, not a line height.
            let extra = match segment.line_height {
                LineHeight::Px(px) => px - segment.font_size,
                LineHeight::Percent(pct) => (pct / 100.0 - 1.0) * segment.font_size,
                LineHeight::Auto => 0.0,
            };
            if extra > 0.0 {
                out.line(&format!(".lineSpacing({})", fmt_round2(extra)));
            }
            let tracking = match segment.letter_spacing {
                LetterSpacing::Px(px) => px,
                LetterSpacing::Percent(pct) => pct / 100.0 * segment.font_size,
            };
            if tracking != 0.0 {
                out.line(&format!(".tracking({})", fmt_round2(tracking)));
            }
        }

        let style = resolve_style(&text.props, ctx.styles, ctx.variables);
        if let Some(Paint::Solid(color)) = style.fill {
            out.line(&format!(".foregroundColor({})", color_literal(color)));
        }
        if let Some(align) = swiftui_text_align(text.align_horizontal) {
            out.line(&format!(".multilineTextAlignment({align})"));
        }
        out.finish()
    }
}

impl Emitter for SwiftUiEmitter {
    fn backend(&self) -> Backend {
        Backend::SwiftUi
    }

    fn emit(&self, node: &Node, ctx: &EmitContext) -> String {
        self.emit_node(node, ctx)
    }
}

/// The fill expression for a view: a gradient when one resolves,
/// otherwise the solid color, otherwise nothing.
fn fill_expr(props: &NodeProps, ctx: &EmitContext) -> Option<String> {
    let paints = resolve_paint_list(props, ctx.styles);
    if let Some(stops) = first_gradient(&paints) {
        let colors: Vec<String> = stops.iter().map(|s| color_literal(s.color)).collect();
        return Some(format!(
            "LinearGradient(gradient: Gradient(colors: [{}]), startPoint: .leading, endPoint: .trailing)",
            colors.join(", ")
        ));
    }
    match resolve_style(props, ctx.styles, ctx.variables).fill {
        Some(Paint::Solid(color)) => Some(color_literal(color)),
        _ => None,
    }
}

/// SwiftUI `Color` literal with fractional components.
fn color_literal(color: Rgba) -> String {
    let base = format!(
        "Color(red: {}, green: {}, blue: {}",
        fmt_component(color.r),
        fmt_component(color.g),
        fmt_component(color.b)
    );
    if color.is_opaque() {
        format!("{base})")
    } else {
        format!("{base}, opacity: {})", fmt_round2(color.a))
    }
}

fn fmt_component(channel: u8) -> String {
    let value = (channel as f64 / 255.0 * 1000.0).round() / 1000.0;
    fmt_num(value)
}

fn fmt_round2(value: f64) -> String {
    fmt_num((value * 100.0).round() / 100.0)
}

fn swiftui_weight(weight: u16) -> Option<&'static str> {
    match weight {
        100 => Some(".thin"),
        200 => Some(".ultraLight"),
        300 => Some(".light"),
        400 => None,
        500 => Some(".medium"),
        600 => Some(".semibold"),
        700 => Some(".bold"),
        800 => Some(".heavy"),
        _ if weight >= 900 => Some(".black"),
        _ => None,
    }
}

fn swiftui_text_align(align: TextAlignHorizontal) -> Option<&'static str> {
    match align {
        TextAlignHorizontal::Left => None,
        TextAlignHorizontal::Center => Some(".center"),
        TextAlignHorizontal::Right => Some(".trailing"),
        // Justified text has no SwiftUI equivalent.
        TextAlignHorizontal::Justified => Some(".leading"),
    }
}

fn escape_swift(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_core::{
        AutoLayout, CrossAxisAlign, EllipseNode, FrameNode, GradientStop, Rect, RectangleNode,
        TextAlignVertical, TextAutoResize, TextSegment,
    };

    fn rect_node(props: NodeProps) -> Node {
        Node::Rectangle(RectangleNode { props })
    }

    #[test]
    fn test_rectangle_modifiers() {
        let node = rect_node(
            NodeProps::new("Box", Rect::sized(64.0, 32.0))
                .with_fill(Paint::Solid(Rgba::WHITE))
                .with_corner_radius(8.0),
        );
        let out = SwiftUiEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.starts_with("Rectangle()"));
        assert!(out.contains(".fill(Color(red: 1, green: 1, blue: 1))"));
        assert!(out.contains(".frame(width: 64, height: 32)"));
        assert!(out.contains(".cornerRadius(8)"));
    }

    #[test]
    fn test_ellipse_ignores_corner_radius() {
        let node = Node::Ellipse(EllipseNode {
            props: NodeProps::new("Dot", Rect::sized(16.0, 16.0)).with_corner_radius(4.0),
        });
        let out = SwiftUiEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.starts_with("Ellipse()"));
        assert!(!out.contains("cornerRadius"));
    }

    #[test]
    fn test_stack_direction_and_alignment() {
        let frame = |direction| {
            Node::Frame(FrameNode {
                props: NodeProps::new("F", Rect::sized(100.0, 100.0)),
                auto_layout: Some(AutoLayout {
                    direction,
                    primary: PrimaryAxisAlign::Min,
                    cross: CrossAxisAlign::Min,
                    cross_content: CrossAxisAlign::Min,
                    wrap: false,
                    spacing: 8.0,
                }),
                children: vec![rect_node(NodeProps::new("c", Rect::sized(10.0, 10.0)))],
            })
        };
        let emitter = SwiftUiEmitter::new();
        let h = emitter.emit(&frame(Direction::Horizontal), &EmitContext::detached());
        assert!(h.starts_with("HStack(alignment: .top, spacing: 8) {"));
        let v = emitter.emit(&frame(Direction::Vertical), &EmitContext::detached());
        assert!(v.starts_with("VStack(alignment: .leading, spacing: 8) {"));
        assert!(v.contains(".frame(width: 100, height: 100)"));
    }

    #[test]
    fn test_space_between_inserts_spacers() {
        let frame = Node::Frame(FrameNode {
            props: NodeProps::new("F", Rect::sized(100.0, 20.0)),
            auto_layout: Some(AutoLayout {
                direction: Direction::Horizontal,
                primary: PrimaryAxisAlign::SpaceBetween,
                cross: CrossAxisAlign::Center,
                cross_content: CrossAxisAlign::Min,
                wrap: false,
                spacing: 0.0,
            }),
            children: vec![
                rect_node(NodeProps::new("a", Rect::sized(10.0, 10.0))),
                rect_node(NodeProps::new("b", Rect::sized(10.0, 10.0))),
                rect_node(NodeProps::new("c", Rect::sized(10.0, 10.0))),
            ],
        });
        let out = SwiftUiEmitter::new().emit(&frame, &EmitContext::detached());
        assert_eq!(out.matches("Spacer()").count(), 2);
    }

    #[test]
    fn test_gradient_fill() {
        let node = rect_node(NodeProps::new("Grad", Rect::sized(64.0, 64.0)).with_fill(
            Paint::GradientLinear(vec![
                GradientStop::new(0.0, Rgba::rgb(255, 0, 0)),
                GradientStop::new(1.0, Rgba::rgb(0, 0, 255)),
            ]),
        ));
        let out = SwiftUiEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.contains(".fill(LinearGradient(gradient: Gradient(colors: ["));
        assert!(out.contains("startPoint: .leading, endPoint: .trailing"));
    }

    #[test]
    fn test_text_modifiers() {
        let node = Node::Text(TextNode {
            props: NodeProps::new("Label", Rect::sized(120.0, 20.0))
                .with_fill(Paint::Solid(Rgba::BLACK)),
            characters: "Say \"hi\"".to_string(),
            segments: vec![TextSegment {
                font_size: 14.0,
                font_weight: 700,
                line_height: LineHeight::Px(21.0),
                letter_spacing: LetterSpacing::Px(0.5),
            }],
            align_horizontal: TextAlignHorizontal::Center,
            align_vertical: TextAlignVertical::Top,
            auto_resize: TextAutoResize::WidthAndHeight,
        });
        let out = SwiftUiEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.starts_with("Text(\"Say \\\"hi\\\"\")"));
        assert!(out.contains(".font(.system(size: 14, weight: .bold))"));
        assert!(out.contains(".lineSpacing(7)"));
        assert!(out.contains(".tracking(0.5)"));
        assert!(out.contains(".foregroundColor(Color(red: 0, green: 0, blue: 0))"));
        assert!(out.contains(".multilineTextAlignment(.center)"));
    }

    #[test]
    fn test_translucent_color_carries_opacity() {
        let node = rect_node(
            NodeProps::new("Box", Rect::sized(10.0, 10.0))
                .with_fill(Paint::Solid(Rgba::rgba(255, 0, 0, 0.5))),
        );
        let out = SwiftUiEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.contains(".fill(Color(red: 1, green: 0, blue: 0, opacity: 0.5))"));
    }
}
