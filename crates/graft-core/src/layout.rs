//! Auto-layout data: explicit snapshot values plus geometric inference.

use serde::{Deserialize, Serialize};

use crate::node::Rect;

/// Layout direction of a frame's primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Alignment of children along the primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
}

/// Alignment of children along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossAxisAlign {
    Min,
    Center,
    Max,
    /// Text baseline alignment. Not every backend has an equivalent; the
    /// layout mapper approximates it with that axis's center token.
    Baseline,
}

/// Auto-layout values carried explicitly on a frame in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoLayout {
    pub direction: Direction,
    pub primary: PrimaryAxisAlign,
    pub cross: CrossAxisAlign,
    /// Alignment of wrapped runs along the cross axis.
    pub cross_content: CrossAxisAlign,
    /// Whether children wrap into multiple runs.
    pub wrap: bool,
    /// Gap between children in pixels.
    pub spacing: f64,
}

/// Effective auto-layout for a frame, present for every frame by the time
/// the layout mapper runs: either the snapshot's explicit values or values
/// inferred from child geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoLayoutResult {
    pub direction: Direction,
    pub primary: PrimaryAxisAlign,
    pub cross: CrossAxisAlign,
    pub cross_content: CrossAxisAlign,
    pub wrap: bool,
    /// Gap between children in pixels; zero when inferred.
    pub spacing: f64,
}

impl AutoLayoutResult {
    pub fn from_explicit(layout: &AutoLayout) -> Self {
        Self {
            direction: layout.direction,
            primary: layout.primary,
            cross: layout.cross,
            cross_content: layout.cross_content,
            wrap: layout.wrap,
            spacing: layout.spacing,
        }
    }

    /// Infer layout from child geometry when the snapshot carries none.
    ///
    /// Children that spread further along x than along y read as a row;
    /// everything else, including empty and single-child frames, reads as
    /// a column. Alignments default to start.
    pub fn infer(children: &[Rect]) -> Self {
        let direction = if children.len() >= 2 {
            let (min_x, max_x) = span(children.iter().map(|r| (r.x, r.x + r.width)));
            let (min_y, max_y) = span(children.iter().map(|r| (r.y, r.y + r.height)));
            if (max_x - min_x) > (max_y - min_y) {
                Direction::Horizontal
            } else {
                Direction::Vertical
            }
        } else {
            Direction::Vertical
        };

        Self {
            direction,
            primary: PrimaryAxisAlign::Min,
            cross: CrossAxisAlign::Min,
            cross_content: CrossAxisAlign::Min,
            wrap: false,
            spacing: 0.0,
        }
    }
}

fn span(edges: impl Iterator<Item = (f64, f64)>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (lo, hi) in edges {
        min = min.min(lo);
        max = max.max(hi);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect { x, y, width: w, height: h }
    }

    #[test]
    fn test_infer_row() {
        let children = [rect(0.0, 0.0, 40.0, 20.0), rect(50.0, 0.0, 40.0, 20.0)];
        let layout = AutoLayoutResult::infer(&children);
        assert_eq!(layout.direction, Direction::Horizontal);
        assert_eq!(layout.primary, PrimaryAxisAlign::Min);
    }

    #[test]
    fn test_infer_column() {
        let children = [rect(0.0, 0.0, 40.0, 20.0), rect(0.0, 30.0, 40.0, 20.0)];
        let layout = AutoLayoutResult::infer(&children);
        assert_eq!(layout.direction, Direction::Vertical);
    }

    #[test]
    fn test_infer_defaults_vertical() {
        assert_eq!(AutoLayoutResult::infer(&[]).direction, Direction::Vertical);
        assert_eq!(
            AutoLayoutResult::infer(&[rect(0.0, 0.0, 10.0, 10.0)]).direction,
            Direction::Vertical
        );
    }
}
