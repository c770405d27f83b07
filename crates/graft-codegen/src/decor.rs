//! Node-level decorators.
//!
//! Decorators are small named wrapper values derived per node and applied
//! last, after the node's own construct is generated. Keeping them as
//! values (rather than inline string templates) makes the derived
//! wrapping inspectable and testable without running an emitter.
//!
//! Composition order is the same for every backend: the node's own
//! content innermost, the opacity wrapper next, the alignment wrapper
//! outermost.

use graft_core::{CrossAxisAlign, Node, TextAlignHorizontal, TextAlignVertical};

use crate::builder::{fmt_num, indent_block};
use crate::Backend;

/// Alignment of a node inside its containing layout, as seen by the
/// decorator derivation. Derived from the parent's cross-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutAlign {
    #[default]
    Start,
    Center,
    End,
}

impl From<CrossAxisAlign> for LayoutAlign {
    fn from(cross: CrossAxisAlign) -> Self {
        match cross {
            CrossAxisAlign::Min => LayoutAlign::Start,
            CrossAxisAlign::Center | CrossAxisAlign::Baseline => LayoutAlign::Center,
            CrossAxisAlign::Max => LayoutAlign::End,
        }
    }
}

/// The alignment token a wrapper carries, backend-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignToken {
    Center,
    CenterLeft,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// A wrapper applied around an already-generated code fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decorator {
    Opacity(f64),
    Alignment(AlignToken),
}

impl Decorator {
    /// Opacity wrapper, or `None` when fully opaque (identity).
    pub fn opacity(value: f64) -> Option<Decorator> {
        (value < 1.0).then_some(Decorator::Opacity(value))
    }

    /// Alignment wrapper derived from the containing layout and the
    /// node's text alignment fields.
    ///
    /// Precedence: bottom vertical alignment on a fixed-size node forces
    /// a bottom-center-family token; a start containing alignment is the
    /// implicit default and needs no wrapper; otherwise the containing
    /// alignment combines with the horizontal alignment through a fixed
    /// table, with a generic center fallback.
    pub fn alignment(
        layout: LayoutAlign,
        horizontal: TextAlignHorizontal,
        vertical: TextAlignVertical,
        fixed_size: bool,
    ) -> Option<Decorator> {
        if vertical == TextAlignVertical::Bottom && fixed_size {
            return Some(Decorator::Alignment(AlignToken::BottomCenter));
        }
        let token = match (layout, horizontal) {
            (LayoutAlign::Start, _) => return None,
            (LayoutAlign::Center, TextAlignHorizontal::Left) => AlignToken::CenterLeft,
            (LayoutAlign::Center, TextAlignHorizontal::Right) => AlignToken::CenterRight,
            (LayoutAlign::Center, TextAlignHorizontal::Center) => AlignToken::Center,
            (LayoutAlign::End, TextAlignHorizontal::Left) => AlignToken::BottomLeft,
            (LayoutAlign::End, TextAlignHorizontal::Right) => AlignToken::BottomRight,
            (LayoutAlign::End, TextAlignHorizontal::Center) => AlignToken::BottomCenter,
            _ => AlignToken::Center,
        };
        Some(Decorator::Alignment(token))
    }

    /// Wrap a generated fragment in this decorator's backend construct.
    pub fn render(&self, backend: Backend, child: &str) -> String {
        match self {
            Decorator::Opacity(value) => render_opacity(backend, *value, child),
            Decorator::Alignment(token) => render_alignment(backend, *token, child),
        }
    }
}

/// Derive the decorators for a node, in application order (innermost
/// first). Text nodes feed their own alignment fields into the
/// derivation; other variants use the defaults, so only their containing
/// alignment can produce a wrapper.
pub fn derive(node: &Node, containing: LayoutAlign) -> Vec<Decorator> {
    let mut decorators = Vec::new();
    if let Some(d) = Decorator::opacity(node.props().opacity) {
        decorators.push(d);
    }
    let alignment = match node {
        Node::Text(text) => Decorator::alignment(
            containing,
            text.align_horizontal,
            text.align_vertical,
            text.is_fixed_size(),
        ),
        Node::Frame(_) | Node::Group(_) | Node::Rectangle(_) | Node::Ellipse(_) => {
            Decorator::alignment(
                containing,
                TextAlignHorizontal::Left,
                TextAlignVertical::Top,
                false,
            )
        }
    };
    if let Some(d) = alignment {
        decorators.push(d);
    }
    decorators
}

/// Apply decorators around a fragment, first entry innermost.
pub fn apply(backend: Backend, decorators: &[Decorator], content: String) -> String {
    decorators
        .iter()
        .fold(content, |inner, d| d.render(backend, &inner))
}

/// Opacity wrapper honoring the identity contract: fully opaque input
/// returns the child fragment unchanged.
pub fn wrap_opacity(backend: Backend, opacity: f64, child: &str) -> String {
    match Decorator::opacity(opacity) {
        Some(d) => d.render(backend, child),
        None => child.to_string(),
    }
}

fn render_opacity(backend: Backend, value: f64, child: &str) -> String {
    match backend {
        Backend::Tailwind => {
            let pct = (value * 100.0).round() as i64;
            format!("<div class=\"opacity-{pct}\">\n{}\n</div>", indent_block(child, 1))
        }
        Backend::Compose => format!(
            "Box(modifier = Modifier.alpha({}f)) {{\n{}\n}}",
            fmt_num(value),
            indent_block(child, 1)
        ),
        Backend::Flutter => format!(
            "Opacity(\n    opacity: {},\n    child: {},\n)",
            fmt_num(value),
            indent_block(child, 1).trim_start()
        ),
        Backend::SwiftUi => format!("{child}\n    .opacity({})", fmt_num(value)),
    }
}

fn render_alignment(backend: Backend, token: AlignToken, child: &str) -> String {
    match backend {
        Backend::Tailwind => format!(
            "<div class=\"flex w-full h-full {}\">\n{}\n</div>",
            tailwind_align_classes(token),
            indent_block(child, 1)
        ),
        Backend::Compose => format!(
            "Box(modifier = Modifier.fillMaxSize(), contentAlignment = {}) {{\n{}\n}}",
            compose_alignment(token),
            indent_block(child, 1)
        ),
        Backend::Flutter => format!(
            "Align(\n    alignment: {},\n    child: {},\n)",
            flutter_alignment(token),
            indent_block(child, 1).trim_start()
        ),
        Backend::SwiftUi => format!(
            "{child}\n    .frame(maxWidth: .infinity, maxHeight: .infinity, alignment: {})",
            swiftui_alignment(token)
        ),
    }
}

fn tailwind_align_classes(token: AlignToken) -> &'static str {
    match token {
        AlignToken::Center => "items-center justify-center",
        AlignToken::CenterLeft => "items-center justify-start",
        AlignToken::CenterRight => "items-center justify-end",
        AlignToken::BottomLeft => "items-end justify-start",
        AlignToken::BottomCenter => "items-end justify-center",
        AlignToken::BottomRight => "items-end justify-end",
    }
}

fn compose_alignment(token: AlignToken) -> &'static str {
    match token {
        AlignToken::Center => "Alignment.Center",
        AlignToken::CenterLeft => "Alignment.CenterStart",
        AlignToken::CenterRight => "Alignment.CenterEnd",
        AlignToken::BottomLeft => "Alignment.BottomStart",
        AlignToken::BottomCenter => "Alignment.BottomCenter",
        AlignToken::BottomRight => "Alignment.BottomEnd",
    }
}

fn flutter_alignment(token: AlignToken) -> &'static str {
    match token {
        AlignToken::Center => "Alignment.center",
        AlignToken::CenterLeft => "Alignment.centerLeft",
        AlignToken::CenterRight => "Alignment.centerRight",
        AlignToken::BottomLeft => "Alignment.bottomLeft",
        AlignToken::BottomCenter => "Alignment.bottomCenter",
        AlignToken::BottomRight => "Alignment.bottomRight",
    }
}

fn swiftui_alignment(token: AlignToken) -> &'static str {
    match token {
        AlignToken::Center => ".center",
        AlignToken::CenterLeft => ".leading",
        AlignToken::CenterRight => ".trailing",
        AlignToken::BottomLeft => ".bottomLeading",
        AlignToken::BottomCenter => ".bottom",
        AlignToken::BottomRight => ".bottomTrailing",
    }
}
