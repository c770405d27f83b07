//! Effective style resolution for a node.
//!
//! Collapses style-id indirection, mixed sentinels, and paint lists into
//! the single values emitters print. Nothing here fails: an unresolvable
//! reference or a mixed value resolves to absent and the affected
//! property is simply omitted downstream.

use graft_core::{Mixed, NodeProps, Paint, Rgba};

use crate::lookup::{StyleLookup, VariableLookup};

/// Resolved per-node style values, computed once per node during
/// emission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedStyle {
    /// The effective fill paint, if any single one exists.
    pub fill: Option<Paint>,
    /// The name of the variable bound to the fill, when the host still
    /// knows it.
    pub fill_variable: Option<String>,
    /// Corner radius, absent when zero or mixed.
    pub corner_radius: Option<f64>,
    /// Node opacity passed through, 0..1.
    pub opacity: f64,
}

/// Resolve every style-relevant property of a node in one pass.
pub fn resolve_style(
    props: &NodeProps,
    styles: &dyn StyleLookup,
    variables: &dyn VariableLookup,
) -> ResolvedStyle {
    ResolvedStyle {
        fill: resolve_fill(props, styles),
        fill_variable: resolve_fill_variable(props, variables),
        corner_radius: resolve_corner_radius(props),
        opacity: props.opacity,
    }
}

/// The effective fill paint of a node.
///
/// Style-id indirection wins over the node's own paint list; a deleted
/// style resolves to absent rather than falling back. A mixed paint list
/// has no single value and also resolves to absent.
pub fn resolve_fill(props: &NodeProps, styles: &dyn StyleLookup) -> Option<Paint> {
    if let Some(id) = &props.fill_style_id {
        return styles.style_by_id(id).filter(Paint::is_concrete);
    }
    match &props.fills {
        Mixed::Value(fills) => fills.iter().find(|p| p.is_concrete()).cloned(),
        Mixed::Mixed => None,
    }
}

/// The effective fill as a solid color, when the fill is solid.
pub fn resolve_solid_fill(props: &NodeProps, styles: &dyn StyleLookup) -> Option<Rgba> {
    resolve_fill(props, styles).and_then(|p| p.as_solid())
}

/// The paint list the gradient converter scans, after indirection.
pub fn resolve_paint_list(props: &NodeProps, styles: &dyn StyleLookup) -> Vec<Paint> {
    if let Some(id) = &props.fill_style_id {
        return styles.style_by_id(id).into_iter().collect();
    }
    match &props.fills {
        Mixed::Value(fills) => fills.iter().cloned().collect(),
        Mixed::Mixed => Vec::new(),
    }
}

/// The name of the color variable bound to the fill, if still bound.
pub fn resolve_fill_variable(
    props: &NodeProps,
    variables: &dyn VariableLookup,
) -> Option<String> {
    props
        .fill_variable_id
        .as_deref()
        .and_then(|id| variables.variable_by_id(id))
}

/// Corner radius worth emitting: a concrete non-zero value.
pub fn resolve_corner_radius(props: &NodeProps) -> Option<f64> {
    match &props.corner_radius {
        Mixed::Value(radius) if *radius > 0.0 => Some(*radius),
        _ => None,
    }
}
