//! Paint model: solid fills and gradients.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// A single fill or stroke paint.
///
/// A paint resolved through a style-id reference may simply not exist any
/// more (the referenced style was deleted); callers model that with
/// `Option<Paint>` rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Flat color fill.
    Solid(Rgba),
    /// Linear gradient with stops in declaration order.
    GradientLinear(Vec<GradientStop>),
    /// Image fill; carried through the model but not rendered by any
    /// backend, so it contributes an empty fill expression.
    Image,
    /// A paint kind the engine does not handle. Contributes nothing and
    /// never halts generation of siblings or parents.
    Unsupported,
}

impl Paint {
    /// Whether this paint can produce a concrete fill expression.
    pub fn is_concrete(&self) -> bool {
        matches!(self, Paint::Solid(_) | Paint::GradientLinear(_))
    }

    /// The solid color, if this is a solid paint.
    pub fn as_solid(&self) -> Option<Rgba> {
        match self {
            Paint::Solid(color) => Some(*color),
            _ => None,
        }
    }
}

/// One stop of a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient axis, 0..1.
    pub position: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(position: f64, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// A property value that may differ across the elements a node stands for.
///
/// Distinct from absence: a `Mixed` fill list means the selection has
/// several differing fills and no single value can be emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mixed<T> {
    Value(T),
    Mixed,
}

impl<T> Mixed<T> {
    /// The single value, or `None` when mixed.
    pub fn value(&self) -> Option<&T> {
        match self {
            Mixed::Value(v) => Some(v),
            Mixed::Mixed => None,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, Mixed::Mixed)
    }
}

impl<T> From<T> for Mixed<T> {
    fn from(value: T) -> Self {
        Mixed::Value(value)
    }
}
