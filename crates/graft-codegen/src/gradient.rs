//! Gradient translation.
//!
//! The gradient direction is always the declared stop order rendered
//! left-to-right. Deriving a true angle from the paint's 2D transform is
//! out of scope; the fixed default is a documented approximation.

use graft_core::{GradientStop, Paint};

/// Quoting convention for the finished CSS expression. Controls only the
/// surrounding quoting/escaping for the target dialect, never the
/// gradient math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientSyntax {
    /// The bare expression, for embedding inside an existing attribute or
    /// style block.
    Plain,
    /// The expression wrapped in double quotes, for contexts that take it
    /// as a string literal.
    Quoted,
}

/// The first paint in the list that resolves to a concrete value.
/// Unresolved and unsupported entries are skipped.
pub fn first_concrete(paints: &[Paint]) -> Option<&Paint> {
    paints.iter().find(|p| p.is_concrete())
}

/// The stop list of the first concrete paint, when it is a linear
/// gradient.
pub fn first_gradient(paints: &[Paint]) -> Option<&[GradientStop]> {
    match first_concrete(paints) {
        Some(Paint::GradientLinear(stops)) => Some(stops),
        _ => None,
    }
}

/// Render the first concrete paint as a CSS `linear-gradient` expression.
///
/// Stops render in declaration order as `rgba(...)` entries; a stop at
/// exactly 0 or 1 is the implicit start/end and carries no percentage
/// suffix, interior stops carry a rounded percentage. Non-gradient or
/// unresolved input yields an empty string, not an error.
pub fn linear_gradient_expr(paints: &[Paint], syntax: GradientSyntax) -> String {
    let Some(stops) = first_gradient(paints) else {
        return String::new();
    };

    let entries: Vec<String> = stops.iter().map(stop_expr).collect();
    let expr = format!("linear-gradient(90deg, {})", entries.join(", "));
    match syntax {
        GradientSyntax::Plain => expr,
        GradientSyntax::Quoted => format!("\"{expr}\""),
    }
}

fn stop_expr(stop: &GradientStop) -> String {
    let color = stop.color.to_css_rgba();
    if stop.position <= 0.0 || stop.position >= 1.0 {
        color
    } else {
        format!("{} {}%", color, (stop.position * 100.0).round() as i64)
    }
}
