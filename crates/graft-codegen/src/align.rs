//! Auto-layout alignment mapping, per backend.
//!
//! Pure, total functions from the enumerated auto-layout values to backend
//! alignment/arrangement tokens. Undefined or minimum alignment maps to
//! the backend's start token. The cross axis is direction-dependent: in a
//! horizontal layout the cross axis is vertical and vice versa, so the
//! same enumerated value maps to a different token family when direction
//! flips.

use graft_core::{AutoLayoutResult, CrossAxisAlign, Direction, PrimaryAxisAlign};

/// Compose main-axis arrangement (`verticalArrangement` /
/// `horizontalArrangement`).
pub fn compose_arrangement(layout: &AutoLayoutResult) -> &'static str {
    match (layout.direction, layout.primary) {
        (Direction::Horizontal, PrimaryAxisAlign::Min) => "Arrangement.Start",
        (Direction::Horizontal, PrimaryAxisAlign::Max) => "Arrangement.End",
        (Direction::Vertical, PrimaryAxisAlign::Min) => "Arrangement.Top",
        (Direction::Vertical, PrimaryAxisAlign::Max) => "Arrangement.Bottom",
        (_, PrimaryAxisAlign::Center) => "Arrangement.Center",
        (_, PrimaryAxisAlign::SpaceBetween) => "Arrangement.SpaceBetween",
    }
}

/// Compose cross-axis alignment (`verticalAlignment` on a Row,
/// `horizontalAlignment` on a Column). Baseline approximates to the
/// center token of the axis.
pub fn compose_cross_alignment(layout: &AutoLayoutResult) -> &'static str {
    match (layout.direction, layout.cross) {
        (Direction::Horizontal, CrossAxisAlign::Min) => "Alignment.Top",
        (Direction::Horizontal, CrossAxisAlign::Max) => "Alignment.Bottom",
        (Direction::Horizontal, CrossAxisAlign::Center | CrossAxisAlign::Baseline) => {
            "Alignment.CenterVertically"
        }
        (Direction::Vertical, CrossAxisAlign::Min) => "Alignment.Start",
        (Direction::Vertical, CrossAxisAlign::Max) => "Alignment.End",
        (Direction::Vertical, CrossAxisAlign::Center | CrossAxisAlign::Baseline) => {
            "Alignment.CenterHorizontally"
        }
    }
}

/// Tailwind main-axis utility (`justify-*`).
pub fn tailwind_justify(primary: PrimaryAxisAlign) -> &'static str {
    match primary {
        PrimaryAxisAlign::Min => "justify-start",
        PrimaryAxisAlign::Center => "justify-center",
        PrimaryAxisAlign::Max => "justify-end",
        PrimaryAxisAlign::SpaceBetween => "justify-between",
    }
}

/// Tailwind cross-axis utility (`items-*`). Baseline has a direct
/// equivalent here.
pub fn tailwind_items(cross: CrossAxisAlign) -> &'static str {
    match cross {
        CrossAxisAlign::Min => "items-start",
        CrossAxisAlign::Center => "items-center",
        CrossAxisAlign::Max => "items-end",
        CrossAxisAlign::Baseline => "items-baseline",
    }
}

/// Tailwind wrap-run main-axis utility (`justify-*` applied to runs).
/// SpaceBetween keeps its own token; it never degrades to start.
pub fn tailwind_content_justify(primary: PrimaryAxisAlign) -> &'static str {
    match primary {
        PrimaryAxisAlign::Min => "content-start",
        PrimaryAxisAlign::Center => "content-center",
        PrimaryAxisAlign::Max => "content-end",
        PrimaryAxisAlign::SpaceBetween => "content-between",
    }
}

/// Tailwind wrap-run cross-axis utility. Baseline has no run-level token;
/// it approximates to center.
pub fn tailwind_content_align(cross: CrossAxisAlign) -> &'static str {
    match cross {
        CrossAxisAlign::Min => "content-start",
        CrossAxisAlign::Center | CrossAxisAlign::Baseline => "content-center",
        CrossAxisAlign::Max => "content-end",
    }
}

/// Flutter main-axis alignment.
pub fn flutter_main_axis(primary: PrimaryAxisAlign) -> &'static str {
    match primary {
        PrimaryAxisAlign::Min => "MainAxisAlignment.start",
        PrimaryAxisAlign::Center => "MainAxisAlignment.center",
        PrimaryAxisAlign::Max => "MainAxisAlignment.end",
        PrimaryAxisAlign::SpaceBetween => "MainAxisAlignment.spaceBetween",
    }
}

/// Flutter cross-axis alignment. Baseline has a direct equivalent.
pub fn flutter_cross_axis(cross: CrossAxisAlign) -> &'static str {
    match cross {
        CrossAxisAlign::Min => "CrossAxisAlignment.start",
        CrossAxisAlign::Center => "CrossAxisAlignment.center",
        CrossAxisAlign::Max => "CrossAxisAlignment.end",
        CrossAxisAlign::Baseline => "CrossAxisAlignment.baseline",
    }
}

/// SwiftUI stack alignment parameter. Direction-dependent family: an
/// HStack aligns children vertically, a VStack horizontally.
pub fn swiftui_stack_alignment(layout: &AutoLayoutResult) -> &'static str {
    match (layout.direction, layout.cross) {
        (Direction::Horizontal, CrossAxisAlign::Min) => ".top",
        (Direction::Horizontal, CrossAxisAlign::Max) => ".bottom",
        (Direction::Horizontal, CrossAxisAlign::Center) => ".center",
        (Direction::Horizontal, CrossAxisAlign::Baseline) => ".firstTextBaseline",
        (Direction::Vertical, CrossAxisAlign::Min) => ".leading",
        (Direction::Vertical, CrossAxisAlign::Max) => ".trailing",
        (Direction::Vertical, CrossAxisAlign::Center | CrossAxisAlign::Baseline) => ".center",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(direction: Direction, cross: CrossAxisAlign) -> AutoLayoutResult {
        AutoLayoutResult {
            direction,
            primary: PrimaryAxisAlign::Min,
            cross,
            cross_content: CrossAxisAlign::Min,
            wrap: false,
            spacing: 0.0,
        }
    }

    #[test]
    fn test_cross_axis_is_direction_dependent() {
        let horizontal = layout(Direction::Horizontal, CrossAxisAlign::Center);
        let vertical = layout(Direction::Vertical, CrossAxisAlign::Center);
        assert_eq!(
            compose_cross_alignment(&horizontal),
            "Alignment.CenterVertically"
        );
        assert_eq!(
            compose_cross_alignment(&vertical),
            "Alignment.CenterHorizontally"
        );
        assert_eq!(swiftui_stack_alignment(&horizontal), ".center");
        assert_eq!(swiftui_stack_alignment(&vertical), ".center");
        assert_eq!(
            swiftui_stack_alignment(&layout(Direction::Horizontal, CrossAxisAlign::Min)),
            ".top"
        );
        assert_eq!(
            swiftui_stack_alignment(&layout(Direction::Vertical, CrossAxisAlign::Min)),
            ".leading"
        );
    }

    #[test]
    fn test_min_maps_to_start_family() {
        assert_eq!(tailwind_justify(PrimaryAxisAlign::Min), "justify-start");
        assert_eq!(flutter_main_axis(PrimaryAxisAlign::Min), "MainAxisAlignment.start");
        let row = layout(Direction::Horizontal, CrossAxisAlign::Min);
        assert_eq!(compose_arrangement(&row), "Arrangement.Start");
    }

    #[test]
    fn test_space_between_never_degrades() {
        assert_eq!(tailwind_justify(PrimaryAxisAlign::SpaceBetween), "justify-between");
        assert_eq!(
            tailwind_content_justify(PrimaryAxisAlign::SpaceBetween),
            "content-between"
        );
        let mut row = layout(Direction::Horizontal, CrossAxisAlign::Min);
        row.primary = PrimaryAxisAlign::SpaceBetween;
        assert_eq!(compose_arrangement(&row), "Arrangement.SpaceBetween");
        assert_eq!(
            flutter_main_axis(PrimaryAxisAlign::SpaceBetween),
            "MainAxisAlignment.spaceBetween"
        );
    }

    #[test]
    fn test_baseline_falls_back_to_center() {
        let row = layout(Direction::Horizontal, CrossAxisAlign::Baseline);
        assert_eq!(compose_cross_alignment(&row), "Alignment.CenterVertically");
        assert_eq!(tailwind_content_align(CrossAxisAlign::Baseline), "content-center");
    }
}
