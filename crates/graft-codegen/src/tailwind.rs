//! Tailwind/HTML emitter: markup elements carrying utility classes.

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

use graft_core::{
    AutoLayoutResult, Direction, LetterSpacing, LineHeight, Node, NodeProps, Paint,
    TextAlignHorizontal, TextAutoResize, TextNode,
};
use graft_resolver::{resolve_paint_list, resolve_style};
use graft_tokens::{
    classify, line_height_token, FONT_SIZE, LETTER_SPACING, LINE_HEIGHT_RELATIVE, SPACING,
    CORNER_RADIUS,
};

use crate::align::{
    tailwind_content_align, tailwind_content_justify, tailwind_items, tailwind_justify,
};
use crate::builder::CodeBuilder;
use crate::decor;
use crate::gradient::{linear_gradient_expr, GradientSyntax};
use crate::{Backend, EmitContext, Emitter};

/// Auxiliary descriptor for the host preview UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewFrame {
    pub width: f64,
    pub height: f64,
    pub content: String,
}

/// Markup + utility-class code generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct TailwindEmitter;

impl TailwindEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Generate markup plus the preview descriptor the host UI renders.
    pub fn preview_frame(&self, node: &Node, ctx: &EmitContext) -> PreviewFrame {
        let rect = node.props().rect;
        PreviewFrame {
            width: rect.width,
            height: rect.height,
            content: self.emit(node, ctx),
        }
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
            Backend::Tailwind,
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
        let mut classes = size_classes(props);
        classes.push("flex".to_string());
        if layout.direction == Direction::Vertical {
            classes.push("flex-col".to_string());
        }
        classes.push(tailwind_justify(layout.primary).to_string());
        classes.push(tailwind_items(layout.cross).to_string());
        if layout.spacing > 0.0 {
            classes.push(format!("gap-{}", SPACING.nearest(layout.spacing)));
        }
        if layout.wrap {
            classes.push("flex-wrap".to_string());
            classes.push(tailwind_content_justify(layout.primary).to_string());
            classes.push(tailwind_content_align(layout.cross_content).to_string());
        }
        classes.extend(fill_classes(props, ctx));
        classes.extend(radius_class(props, ctx));

        let open = element_open("div", &classes, gradient_style(props, ctx));
        if children.is_empty() {
            return format!("{open}</div>");
        }

        let child_ctx = ctx.for_child(layout.cross.into());
        let mut out = CodeBuilder::new();
        out.line(&open).indent();
        for child in children {
            out.block(&self.emit_node(child, &child_ctx));
        }
        out.dedent().line("</div>");
        out.finish()
    }

    fn shape(&self, props: &NodeProps, ellipse: bool, ctx: &EmitContext) -> String {
        let mut classes = size_classes(props);
        classes.extend(fill_classes(props, ctx));
        if ellipse {
            classes.push("rounded-full".to_string());
        } else {
            classes.extend(radius_class(props, ctx));
        }
        format!("{}</div>", element_open("div", &classes, gradient_style(props, ctx)))
    }

    fn text(&self, text: &TextNode, ctx: &EmitContext) -> String {
        let mut classes = Vec::new();
        if text.auto_resize != TextAutoResize::WidthAndHeight {
            classes.push(format!("w-{}", SPACING.nearest(text.props.rect.width)));
        }
        if text.auto_resize == TextAutoResize::None {
            classes.push(format!("h-{}", SPACING.nearest(text.props.rect.height)));
        }

        if let Some(segment) = text.primary_segment() {
            classes.push(format!("text-{}", FONT_SIZE.nearest(segment.font_size)));
            if let Some(weight) = weight_class(segment.font_weight) {
                classes.push(weight.to_string());
            }
            match segment.line_height {
                LineHeight::Px(px) => classes.push(format!("leading-{}", line_height_token(px))),
                LineHeight::Percent(pct) => {
                    classes.push(format!("leading-{}", LINE_HEIGHT_RELATIVE.nearest(pct / 100.0)))
                }
                LineHeight::Auto => {}
            }
            let tracking_px = match segment.letter_spacing {
                LetterSpacing::Px(px) => px,
                LetterSpacing::Percent(pct) => pct / 100.0 * segment.font_size,
            };
            let tracking = LETTER_SPACING.nearest(tracking_px);
            if tracking != "normal" {
                classes.push(format!("tracking-{tracking}"));
            }
        }

        match text.align_horizontal {
            TextAlignHorizontal::Left => {}
            TextAlignHorizontal::Center => classes.push("text-center".to_string()),
            TextAlignHorizontal::Right => classes.push("text-right".to_string()),
            TextAlignHorizontal::Justified => classes.push("text-justify".to_string()),
        }

        classes.extend(text_color_class(&text.props, ctx));

        format!(
            "{}{}</p>",
            element_open("p", &classes, None),
            escape_html(&text.characters)
        )
    }
}

impl Emitter for TailwindEmitter {
    fn backend(&self) -> Backend {
        Backend::Tailwind
    }

    fn emit(&self, node: &Node, ctx: &EmitContext) -> String {
        self.emit_node(node, ctx)
    }
}

fn element_open(tag: &str, classes: &[String], style: Option<String>) -> String {
    let class_attr = if classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", classes.join(" "))
    };
    let style_attr = style
        .map(|s| format!(" style=\"{s}\""))
        .unwrap_or_default();
    format!("<{tag}{class_attr}{style_attr}>")
}

fn size_classes(props: &NodeProps) -> Vec<String> {
    vec![
        format!("w-{}", SPACING.nearest(props.rect.width)),
        format!("h-{}", SPACING.nearest(props.rect.height)),
    ]
}

/// Background classes for a solid fill. Gradients render through the
/// style attribute instead; an absent fill contributes nothing.
fn fill_classes(props: &NodeProps, ctx: &EmitContext) -> Vec<String> {
    let style = resolve_style(props, ctx.styles, ctx.variables);
    if let Some(variable) = style.fill_variable {
        return vec![format!("bg-[var(--{})]", variable.to_case(Case::Kebab))];
    }
    match style.fill {
        Some(Paint::Solid(color)) => match classify(color) {
            Some(name) => vec![format!("bg-{name}")],
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn text_color_class(props: &NodeProps, ctx: &EmitContext) -> Vec<String> {
    let style = resolve_style(props, ctx.styles, ctx.variables);
    if let Some(variable) = style.fill_variable {
        return vec![format!("text-[var(--{})]", variable.to_case(Case::Kebab))];
    }
    match style.fill {
        Some(Paint::Solid(color)) => match classify(color) {
            Some(name) => vec![format!("text-{name}")],
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn radius_class(props: &NodeProps, ctx: &EmitContext) -> Option<String> {
    let style = resolve_style(props, ctx.styles, ctx.variables);
    style.corner_radius.map(|radius| {
        match CORNER_RADIUS.nearest(radius) {
            "" => "rounded".to_string(),
            token => format!("rounded-{token}"),
        }
    })
}

fn gradient_style(props: &NodeProps, ctx: &EmitContext) -> Option<String> {
    let paints = resolve_paint_list(props, ctx.styles);
    let expr = linear_gradient_expr(&paints, GradientSyntax::Plain);
    (!expr.is_empty()).then(|| format!("background-image: {expr}"))
}

fn weight_class(weight: u16) -> Option<&'static str> {
    match weight {
        100 => Some("font-thin"),
        200 => Some("font-extralight"),
        300 => Some("font-light"),
        400 => None,
        500 => Some("font-medium"),
        600 => Some("font-semibold"),
        700 => Some("font-bold"),
        800 => Some("font-extrabold"),
        _ if weight >= 900 => Some("font-black"),
        _ => None,
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_core::{
        FrameNode, GradientStop, NodeProps, Rect, RectangleNode, Rgba, TextAlignVertical,
        TextSegment,
    };

    fn rect_node(props: NodeProps) -> Node {
        Node::Rectangle(RectangleNode { props })
    }

    #[test]
    fn test_rectangle_classes() {
        let node = rect_node(
            NodeProps::new("Box", Rect::sized(64.0, 32.0))
                .with_fill(Paint::Solid(Rgba::from_hex("#ef4444").unwrap()))
                .with_corner_radius(8.0),
        );
        let out = TailwindEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.contains("w-16"));
        assert!(out.contains("h-8"));
        assert!(out.contains("bg-red-500"));
        assert!(out.contains("rounded-lg"));
    }

    #[test]
    fn test_frame_layout_classes() {
        let frame = Node::Frame(FrameNode {
            props: NodeProps::new("Row", Rect::sized(256.0, 48.0)),
            auto_layout: Some(graft_core::AutoLayout {
                direction: Direction::Horizontal,
                primary: graft_core::PrimaryAxisAlign::SpaceBetween,
                cross: graft_core::CrossAxisAlign::Center,
                cross_content: graft_core::CrossAxisAlign::Min,
                wrap: false,
                spacing: 8.0,
            }),
            children: vec![rect_node(NodeProps::new("a", Rect::sized(16.0, 16.0)))],
        });
        let out = TailwindEmitter::new().emit(&frame, &EmitContext::detached());
        assert!(out.contains("flex"));
        assert!(!out.contains("flex-col"));
        assert!(out.contains("justify-between"));
        assert!(out.contains("items-center"));
        assert!(out.starts_with("<div"));
        assert!(out.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_gradient_renders_inline_style() {
        let node = rect_node(NodeProps::new("Grad", Rect::sized(64.0, 64.0)).with_fill(
            Paint::GradientLinear(vec![
                GradientStop::new(0.0, Rgba::rgb(255, 0, 0)),
                GradientStop::new(1.0, Rgba::rgb(0, 0, 255)),
            ]),
        ));
        let out = TailwindEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.contains("style=\"background-image: linear-gradient(90deg,"));
        assert!(!out.contains("bg-"));
    }

    #[test]
    fn test_text_typography() {
        let node = Node::Text(TextNode {
            props: NodeProps::new("Label", Rect::sized(120.0, 20.0))
                .with_fill(Paint::Solid(Rgba::from_hex("#1f2937").unwrap())),
            characters: "Checkout & pay".to_string(),
            segments: vec![TextSegment {
                font_size: 14.0,
                font_weight: 700,
                line_height: LineHeight::Px(20.0),
                letter_spacing: LetterSpacing::Px(0.0),
            }],
            align_horizontal: TextAlignHorizontal::Center,
            align_vertical: TextAlignVertical::Top,
            auto_resize: TextAutoResize::WidthAndHeight,
        });
        let out = TailwindEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.contains("text-sm"));
        assert!(out.contains("font-bold"));
        assert!(out.contains("leading-5"));
        assert!(out.contains("text-center"));
        assert!(out.contains("text-gray-800"));
        assert!(out.contains("Checkout &amp; pay"));
    }

    #[test]
    fn test_variable_bound_fill() {
        struct Vars;
        impl graft_resolver::VariableLookup for Vars {
            fn variable_by_id(&self, id: &str) -> Option<String> {
                (id == "V:1").then(|| "Brand Primary".to_string())
            }
        }
        let node = rect_node(
            NodeProps::new("Box", Rect::sized(16.0, 16.0))
                .with_fill(Paint::Solid(Rgba::rgb(0, 0, 0)))
                .with_fill_variable_id("V:1"),
        );
        let ctx = EmitContext::new(&graft_resolver::NullLookup, &Vars);
        let out = TailwindEmitter::new().emit(&node, &ctx);
        assert!(out.contains("bg-[var(--brand-primary)]"));
    }

    #[test]
    fn test_opacity_decorator_wraps_output() {
        let node = rect_node(
            NodeProps::new("Ghost", Rect::sized(16.0, 16.0)).with_opacity(0.5),
        );
        let out = TailwindEmitter::new().emit(&node, &EmitContext::detached());
        assert!(out.starts_with("<div class=\"opacity-50\">"));
    }

    #[test]
    fn test_preview_frame() {
        let node = rect_node(NodeProps::new("Box", Rect::sized(200.0, 100.0)));
        let preview = TailwindEmitter::new().preview_frame(&node, &EmitContext::detached());
        assert_eq!(preview.width, 200.0);
        assert_eq!(preview.height, 100.0);
        assert!(preview.content.starts_with("<div"));

        let json = serde_json::to_string(&preview).unwrap();
        assert!(json.contains("\"width\":200.0"));
    }
}
