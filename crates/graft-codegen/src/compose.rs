//! Jetpack Compose emitter: Row/Column/Box/Text composables with
//! modifier chains.

use convert_case::{Case, Casing};

use graft_core::{
    AutoLayoutResult, Direction, LetterSpacing, LineHeight, Node, NodeProps, Paint,
    PrimaryAxisAlign, Rgba, TextAlignHorizontal, TextNode,
};
use graft_resolver::{resolve_paint_list, resolve_style};

use crate::align::{compose_arrangement, compose_cross_alignment};
use crate::builder::{fmt_num, CodeBuilder};
use crate::decor;
use crate::gradient::first_gradient;
use crate::{Backend, EmitContext, Emitter};

/// Kotlin/Compose code generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComposeEmitter;

impl ComposeEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Generate a standalone `@Composable` function wrapping the tree.
    pub fn emit_component(&self, node: &Node, ctx: &EmitContext) -> String {
        let name = node.name().to_case(Case::Pascal);
        let mut out = CodeBuilder::new();
        out.line("@Composable")
            .line(&format!("fun {name}() {{"))
            .indent()
            .block(&self.emit(node, ctx))
            .dedent()
            .line("}");
        out.finish()
    }

    fn emit_node(&self, node: &Node, ctx: &EmitContext) -> String {
        let content = match node {
            Node::Frame(frame) => self.container(&frame.props, frame.layout(), &frame.children, ctx),
            Node::Group(group) => self.container(&group.props, group.layout(), &group.children, ctx),
            Node::Rectangle(rect) => self.shape(&rect.props, false, ctx),
            Node::Ellipse(ellipse) => self.shape(&ellipse.props, true, ctx),
            Node::Text(text) => self.text(text, ctx),
        };
        decor::apply(
            Backend::Compose,
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
        let composable = match layout.direction {
            Direction::Horizontal => "Row",
            Direction::Vertical => "Column",
        };
        let (arrangement_param, alignment_param) = match layout.direction {
            Direction::Horizontal => ("horizontalArrangement", "verticalAlignment"),
            Direction::Vertical => ("verticalArrangement", "horizontalAlignment"),
        };
        let arrangement = if layout.spacing > 0.0 && layout.primary == PrimaryAxisAlign::Min {
            format!("Arrangement.spacedBy({}.dp)", fmt_num(layout.spacing))
        } else {
            compose_arrangement(&layout).to_string()
        };

        let mut out = CodeBuilder::new();
        out.line(&format!("{composable}(")).indent();
        out.line(&format!("modifier = {},", modifier_chain(props, ctx)));
        out.line(&format!("{arrangement_param} = {arrangement},"));
        out.line(&format!(
            "{alignment_param} = {},",
            compose_cross_alignment(&layout)
        ));
        out.dedent();
        if children.is_empty() {
            out.line(")");
            return out.finish();
        }
        out.line(") {").indent();
        let child_ctx = ctx.for_child(layout.cross.into());
        for child in children {
            out.block(&self.emit_node(child, &child_ctx));
        }
        out.dedent().line("}");
        out.finish()
    }

    fn shape(&self, props: &NodeProps, ellipse: bool, ctx: &EmitContext) -> String {
        let chain = modifier_chain_parts(props, ctx, ellipse).concat();
        format!("Box(modifier = Modifier{chain})")
    }

    fn text(&self, text: &TextNode, ctx: &EmitContext) -> String {
        let mut out = CodeBuilder::new();
        out.line("Text(").indent();
        out.line(&format!("text = \"{}\",", escape_kotlin(&text.characters)));

        if let Some(segment) = text.primary_segment() {
            out.line(&format!("fontSize = {}.sp,", fmt_num(segment.font_size)));
            if let Some(weight) = compose_weight(segment.font_weight) {
                out.line(&format!("fontWeight = {weight},"));
            }
            match segment.line_height {
                LineHeight::Px(px) => out.line(&format!("lineHeight = {}.sp,", fmt_num(px))),
                LineHeight::Percent(pct) => {
                    out.line(&format!("lineHeight = {}.em,", fmt_num(pct / 100.0)))
                }
                LineHeight::Auto => &mut out,
            };
            match segment.letter_spacing {
                LetterSpacing::Px(px) if px != 0.0 => {
                    out.line(&format!("letterSpacing = {}.sp,", fmt_num(px)))
                }
                LetterSpacing::Percent(pct) if pct != 0.0 => {
                    out.line(&format!("letterSpacing = {}.em,", fmt_num(pct / 100.0)))
                }
                _ => &mut out,
            };
        }

        let style = resolve_style(&text.props, ctx.styles, ctx.variables);
        if let Some(Paint::Solid(color)) = style.fill {
            out.line(&format!("color = {},", color_literal(color)));
        }
        if let Some(align) = compose_text_align(text.align_horizontal) {
            out.line(&format!("textAlign = {align},"));
        }
        out.dedent().line(")");
        out.finish()
    }
}

impl Emitter for ComposeEmitter {
    fn backend(&self) -> Backend {
        Backend::Compose
    }

    fn emit(&self, node: &Node, ctx: &EmitContext) -> String {
        self.emit_node(node, ctx)
    }
}

/// Kotlin `Color(0xAARRGGBB)` literal.
fn color_literal(color: Rgba) -> String {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "Color(0x{:02X}{:02X}{:02X}{:02X})",
        alpha, color.r, color.g, color.b
    )
}

fn modifier_chain(props: &NodeProps, ctx: &EmitContext) -> String {
    format!(
        "Modifier{}",
        modifier_chain_parts(props, ctx, false).concat()
    )
}

/// Ordered modifier calls: size first, then clip, then background, so
/// the clip shape masks the fill.
fn modifier_chain_parts(props: &NodeProps, ctx: &EmitContext, ellipse: bool) -> Vec<String> {
    let style = resolve_style(props, ctx.styles, ctx.variables);
    let mut parts = vec![
        format!(".width({}.dp)", fmt_num(props.rect.width)),
        format!(".height({}.dp)", fmt_num(props.rect.height)),
    ];
    if ellipse {
        parts.push(".clip(CircleShape)".to_string());
    } else if let Some(radius) = style.corner_radius {
        parts.push(format!(".clip(RoundedCornerShape({}.dp))", fmt_num(radius)));
    }
    let paints = resolve_paint_list(props, ctx.styles);
    if let Some(stops) = first_gradient(&paints) {
        let colors: Vec<String> = stops.iter().map(|s| color_literal(s.color)).collect();
        parts.push(format!(
            ".background(Brush.horizontalGradient(listOf({})))",
            colors.join(", ")
        ));
    } else if let Some(Paint::Solid(color)) = style.fill {
        parts.push(format!(".background({})", color_literal(color)));
    }
    parts
}

fn compose_weight(weight: u16) -> Option<&'static str> {
    match weight {
        100 => Some("FontWeight.Thin"),
        200 => Some("FontWeight.ExtraLight"),
        300 => Some("FontWeight.Light"),
        400 => None,
        500 => Some("FontWeight.Medium"),
        600 => Some("FontWeight.SemiBold"),
        700 => Some("FontWeight.Bold"),
        800 => Some("FontWeight.ExtraBold"),
        _ if weight >= 900 => Some("FontWeight.Black"),
        _ => None,
    }
}

fn compose_text_align(align: TextAlignHorizontal) -> Option<&'static str> {
    match align {
        TextAlignHorizontal::Left => None,
        TextAlignHorizontal::Center => Some("TextAlign.Center"),
        TextAlignHorizontal::Right => Some("TextAlign.End"),
        TextAlignHorizontal::Justified => Some("TextAlign.Justify"),
    }
}

fn escape_kotlin(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_core::{
        AutoLayout, CrossAxisAlign, FrameNode, GradientStop, Rect, RectangleNode,
        TextAlignVertical, TextAutoResize, TextSegment,
    };

    fn rect_node(props: NodeProps) -> Node {
        Node::Rectangle(RectangleNode { props })
    }

    #[test]
    fn test_rectangle_modifier_chain() {
        let node = rect_node(
            NodeProps::new("Box", Rect::sized(64.0, 32.0))
                .with_fill(Paint::Solid(Rgba::from_hex("#ef4444").unwrap()))
                .with_corner_radius(8.0),
        );
        let out = ComposeEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.contains(".width(64.dp)"));
        assert!(out.contains(".height(32.dp)"));
        assert!(out.contains(".clip(RoundedCornerShape(8.dp))"));
        assert!(out.contains(".background(Color(0xFFEF4444))"));
        let clip_at = out.find(".clip").unwrap();
        let bg_at = out.find(".background").unwrap();
        assert!(clip_at < bg_at);
    }

    #[test]
    fn test_ellipse_clips_to_circle() {
        let node = Node::Ellipse(graft_core::EllipseNode {
            props: NodeProps::new("Dot", Rect::sized(16.0, 16.0))
                .with_fill(Paint::Solid(Rgba::BLACK)),
        });
        let out = ComposeEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.contains(".clip(CircleShape)"));
    }

    #[test]
    fn test_row_and_column_parameter_names() {
        let frame = |direction| {
            Node::Frame(FrameNode {
                props: NodeProps::new("F", Rect::sized(100.0, 100.0)),
                auto_layout: Some(AutoLayout {
                    direction,
                    primary: PrimaryAxisAlign::Center,
                    cross: CrossAxisAlign::Center,
                    cross_content: CrossAxisAlign::Min,
                    wrap: false,
                    spacing: 0.0,
                }),
                children: vec![rect_node(NodeProps::new("c", Rect::sized(10.0, 10.0)))],
            })
        };
        let emitter = ComposeEmitter::new();
        let row = emitter.emit(&frame(Direction::Horizontal), &EmitContext::detached());
        assert!(row.starts_with("Row("));
        assert!(row.contains("horizontalArrangement = Arrangement.Center,"));
        assert!(row.contains("verticalAlignment = Alignment.CenterVertically,"));

        let column = emitter.emit(&frame(Direction::Vertical), &EmitContext::detached());
        assert!(column.starts_with("Column("));
        assert!(column.contains("verticalArrangement = Arrangement.Center,"));
        assert!(column.contains("horizontalAlignment = Alignment.CenterHorizontally,"));
    }

    #[test]
    fn test_spacing_becomes_spaced_by() {
        let frame = Node::Frame(FrameNode {
            props: NodeProps::new("F", Rect::sized(100.0, 40.0)),
            auto_layout: Some(AutoLayout {
                direction: Direction::Horizontal,
                primary: PrimaryAxisAlign::Min,
                cross: CrossAxisAlign::Min,
                cross_content: CrossAxisAlign::Min,
                wrap: false,
                spacing: 8.0,
            }),
            children: vec![],
        });
        let out = ComposeEmitter::new().emit(&frame, &EmitContext::detached());
        assert!(out.contains("horizontalArrangement = Arrangement.spacedBy(8.dp),"));
    }

    #[test]
    fn test_gradient_background() {
        let node = rect_node(NodeProps::new("Grad", Rect::sized(64.0, 64.0)).with_fill(
            Paint::GradientLinear(vec![
                GradientStop::new(0.0, Rgba::rgb(255, 0, 0)),
                GradientStop::new(1.0, Rgba::rgb(0, 0, 255)),
            ]),
        ));
        let out = ComposeEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.contains(
            ".background(Brush.horizontalGradient(listOf(Color(0xFFFF0000), Color(0xFF0000FF))))"
        ));
    }

    #[test]
    fn test_text_parameters() {
        let node = Node::Text(TextNode {
            props: NodeProps::new("Label", Rect::sized(120.0, 20.0))
                .with_fill(Paint::Solid(Rgba::from_hex("#1f2937").unwrap())),
            characters: "Total: $12".to_string(),
            segments: vec![TextSegment {
                font_size: 14.0,
                font_weight: 700,
                line_height: LineHeight::Px(20.0),
                letter_spacing: LetterSpacing::Px(0.5),
            }],
            align_horizontal: TextAlignHorizontal::Center,
            align_vertical: TextAlignVertical::Top,
            auto_resize: TextAutoResize::WidthAndHeight,
        });
        let out = ComposeEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.contains("text = \"Total: \\$12\","));
        assert!(out.contains("fontSize = 14.sp,"));
        assert!(out.contains("fontWeight = FontWeight.Bold,"));
        assert!(out.contains("lineHeight = 20.sp,"));
        assert!(out.contains("letterSpacing = 0.5.sp,"));
        assert!(out.contains("color = Color(0xFF1F2937),"));
        assert!(out.contains("textAlign = TextAlign.Center,"));
    }

    #[test]
    fn test_regular_weight_is_omitted() {
        let node = Node::Text(TextNode {
            props: NodeProps::new("Label", Rect::sized(120.0, 20.0)),
            characters: "plain".to_string(),
            segments: vec![TextSegment::default()],
            align_horizontal: TextAlignHorizontal::Left,
            align_vertical: TextAlignVertical::Top,
            auto_resize: TextAutoResize::WidthAndHeight,
        });
        let out = ComposeEmitter::new().emit(&node, &EmitContext::detached());
        assert!(!out.contains("fontWeight"));
        assert!(!out.contains("textAlign"));
        assert!(!out.contains("letterSpacing"));
    }

    #[test]
    fn test_component_wrapper_names_from_layer() {
        let node = rect_node(NodeProps::new("primary button", Rect::sized(10.0, 10.0)));
        let out = ComposeEmitter::new().emit_component(&node, &EmitContext::detached());
        assert!(out.starts_with("@Composable\nfun PrimaryButton() {"));
        assert!(out.trim_end().ends_with("}"));
    }

    #[test]
    fn test_opacity_wraps_in_alpha_box() {
        let node = rect_node(
            NodeProps::new("Ghost", Rect::sized(16.0, 16.0)).with_opacity(0.5),
        );
        let out = ComposeEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.starts_with("Box(modifier = Modifier.alpha(0.5f)) {"));
    }
}
