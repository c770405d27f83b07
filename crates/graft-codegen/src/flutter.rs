//! Flutter emitter: Container/Row/Column/Text widget constructors.

use graft_core::{
    AutoLayoutResult, Direction, LetterSpacing, LineHeight, Node, NodeProps, Paint, Rgba,
    TextAlignHorizontal, TextNode,
};
use graft_resolver::{resolve_paint_list, resolve_style};

use crate::align::{flutter_cross_axis, flutter_main_axis};
use crate::builder::{fmt_num, CodeBuilder};
use crate::decor;
use crate::gradient::first_gradient;
use crate::{Backend, EmitContext, Emitter};

/// Dart/Flutter code generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlutterEmitter;

impl FlutterEmitter {
    pub fn new() -> Self {
        Self
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
            Backend::Flutter,
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
        let mut out = CodeBuilder::new();
        out.line("Container(").indent();
        self.size_and_decoration(&mut out, props, false, ctx);
        if !children.is_empty() {
            let widget = match layout.direction {
                Direction::Horizontal => "Row",
                Direction::Vertical => "Column",
            };
            out.line(&format!("child: {widget}(")).indent();
            out.line(&format!(
                "mainAxisAlignment: {},",
                flutter_main_axis(layout.primary)
            ));
            out.line(&format!(
                "crossAxisAlignment: {},",
                flutter_cross_axis(layout.cross)
            ));
            if layout.spacing > 0.0 {
                out.line(&format!("spacing: {},", fmt_num(layout.spacing)));
            }
            out.line("children: [").indent();
            let child_ctx = ctx.for_child(layout.cross.into());
            for child in children {
                let mut rendered = self.emit_node(child, &child_ctx);
                rendered.push(',');
                out.block(&rendered);
            }
            out.dedent().line("],");
            out.dedent().line("),");
        }
        out.dedent().line(")");
        out.finish()
    }

    fn shape(&self, props: &NodeProps, ellipse: bool, ctx: &EmitContext) -> String {
        let mut out = CodeBuilder::new();
        out.line("Container(").indent();
        self.size_and_decoration(&mut out, props, ellipse, ctx);
        out.dedent().line(")");
        out.finish()
    }

    /// Shared Container parameters: size, then either a bare `color:` or
    /// a `BoxDecoration` when a shape, radius, or gradient is present.
    fn size_and_decoration(
        &self,
        out: &mut CodeBuilder,
        props: &NodeProps,
        ellipse: bool,
        ctx: &EmitContext,
    ) {
        out.line(&format!("width: {},", fmt_num(props.rect.width)));
        out.line(&format!("height: {},", fmt_num(props.rect.height)));

        let style = resolve_style(props, ctx.styles, ctx.variables);
        let paints = resolve_paint_list(props, ctx.styles);
        let gradient = first_gradient(&paints).map(gradient_expr);
        let solid = match style.fill {
            Some(Paint::Solid(color)) => Some(color_literal(color)),
            _ => None,
        };

        let needs_decoration = ellipse || style.corner_radius.is_some() || gradient.is_some();
        if !needs_decoration {
            if let Some(color) = solid {
                out.line(&format!("color: {color},"));
            }
            return;
        }

        out.line("decoration: BoxDecoration(").indent();
        if let Some(gradient) = gradient {
            out.line(&format!("gradient: {gradient},"));
        } else if let Some(color) = solid {
            out.line(&format!("color: {color},"));
        }
        if ellipse {
            out.line("shape: BoxShape.circle,");
        } else if let Some(radius) = style.corner_radius {
            out.line(&format!(
                "borderRadius: BorderRadius.circular({}),",
                fmt_num(radius)
            ));
        }
        out.dedent().line("),");
    }

    fn text(&self, text: &TextNode, ctx: &EmitContext) -> String {
        let mut out = CodeBuilder::new();
        out.line("Text(").indent();
        out.line(&format!("'{}',", escape_dart(&text.characters)));

        let style = resolve_style(&text.props, ctx.styles, ctx.variables);
        let mut style_lines = Vec::new();
        if let Some(segment) = text.primary_segment() {
            style_lines.push(format!("fontSize: {},", fmt_num(segment.font_size)));
            if segment.font_weight != 400 {
                style_lines.push(format!("fontWeight: FontWeight.w{},", segment.font_weight));
            }
            // TextStyle.height is a multiple of the font size.
            match segment.line_height {
                LineHeight::Px(px) if segment.font_size > 0.0 => {
                    style_lines.push(format!("height: {},", fmt_ratio(px / segment.font_size)))
                }
                LineHeight::Percent(pct) => {
                    style_lines.push(format!("height: {},", fmt_ratio(pct / 100.0)))
                }
                _ => {}
            }
            match segment.letter_spacing {
                LetterSpacing::Px(px) if px != 0.0 => {
                    style_lines.push(format!("letterSpacing: {},", fmt_num(px)))
                }
                LetterSpacing::Percent(pct) if pct != 0.0 => style_lines.push(format!(
                    "letterSpacing: {},",
                    fmt_ratio(pct / 100.0 * segment.font_size)
                )),
                _ => {}
            }
        }
        if let Some(Paint::Solid(color)) = style.fill {
            style_lines.push(format!("color: {},", color_literal(color)));
        }
        if !style_lines.is_empty() {
            out.line("style: TextStyle(").indent();
            for line in &style_lines {
                out.line(line);
            }
            out.dedent().line("),");
        }
        if let Some(align) = flutter_text_align(text.align_horizontal) {
            out.line(&format!("textAlign: {align},"));
        }
        out.dedent().line(")");
        out.finish()
    }
}

impl Emitter for FlutterEmitter {
    fn backend(&self) -> Backend {
        Backend::Flutter
    }

    fn emit(&self, node: &Node, ctx: &EmitContext) -> String {
        self.emit_node(node, ctx)
    }
}

/// Dart `Color(0xAARRGGBB)` literal.
fn color_literal(color: Rgba) -> String {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "Color(0x{:02X}{:02X}{:02X}{:02X})",
        alpha, color.r, color.g, color.b
    )
}

fn gradient_expr(stops: &[graft_core::GradientStop]) -> String {
    let colors: Vec<String> = stops.iter().map(|s| color_literal(s.color)).collect();
    format!(
        "LinearGradient(begin: Alignment.centerLeft, end: Alignment.centerRight, colors: [{}])",
        colors.join(", ")
    )
}

fn flutter_text_align(align: TextAlignHorizontal) -> Option<&'static str> {
    match align {
        TextAlignHorizontal::Left => None,
        TextAlignHorizontal::Center => Some("TextAlign.center"),
        TextAlignHorizontal::Right => Some("TextAlign.right"),
        TextAlignHorizontal::Justified => Some("TextAlign.justify"),
    }
}

/// Format a unitless ratio to at most two decimal places.
fn fmt_ratio(value: f64) -> String {
    fmt_num((value * 100.0).round() / 100.0)
}

fn escape_dart(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('$', "\\$")
        .replace('\n', "\\n")
}
