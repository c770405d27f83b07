//! Target emitters for the Graft engine.
//!
//! Each backend is a recursive tree-to-string compiler over the shared
//! node model. Upstream semantic decisions (style resolution, token
//! snapping, color matching, layout mapping, gradient translation,
//! decorator derivation) are shared; backends differ only in vocabulary
//! and syntax, so the same snapshot produces equivalent layout and style
//! decisions in every dialect.

pub mod align;
pub mod builder;
pub mod decor;
pub mod gradient;

mod compose;
mod flutter;
mod swiftui;
mod tailwind;

pub use compose::ComposeEmitter;
pub use flutter::FlutterEmitter;
pub use swiftui::SwiftUiEmitter;
pub use tailwind::{PreviewFrame, TailwindEmitter};

pub use decor::{AlignToken, Decorator, LayoutAlign};
pub use gradient::{linear_gradient_expr, GradientSyntax};

use graft_core::Node;
use graft_resolver::{NullLookup, StyleLookup, VariableLookup};

/// The target dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Tailwind,
    Compose,
    Flutter,
    SwiftUi,
}

/// Per-request emission context: the host's lookup interfaces plus the
/// alignment the containing layout imposes on the current node.
#[derive(Clone, Copy)]
pub struct EmitContext<'a> {
    pub styles: &'a dyn StyleLookup,
    pub variables: &'a dyn VariableLookup,
    pub containing_align: LayoutAlign,
}

impl<'a> EmitContext<'a> {
    pub fn new(styles: &'a dyn StyleLookup, variables: &'a dyn VariableLookup) -> Self {
        Self {
            styles,
            variables,
            containing_align: LayoutAlign::Start,
        }
    }

    /// Context for hosts without style or variable collections.
    pub fn detached() -> EmitContext<'static> {
        static NULL: NullLookup = NullLookup;
        EmitContext {
            styles: &NULL,
            variables: &NULL,
            containing_align: LayoutAlign::Start,
        }
    }

    /// Context for a child laid out with the given cross-axis alignment.
    pub fn for_child(&self, containing_align: LayoutAlign) -> Self {
        Self {
            containing_align,
            ..*self
        }
    }
}

/// A backend code generator over the shared node model.
pub trait Emitter {
    /// The dialect this emitter produces.
    fn backend(&self) -> Backend;

    /// Generate code for a node tree. Never fails: unresolvable or
    /// unsupported properties degrade to omitted output, locally.
    fn emit(&self, node: &Node, ctx: &EmitContext) -> String;
}
