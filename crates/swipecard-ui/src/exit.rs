//! Exit classification and badge feedback.

use crate::bounds::Geometry;
use crate::config::LegacyQuirks;
use swipecard_ui_graphics::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitOutcome {
    Left,
    Right,
    Top,
    Bottom,
    Reset,
}

impl ExitOutcome {
    /// True for the four directional exits.
    pub fn is_exit(&self) -> bool {
        !matches!(self, ExitOutcome::Reset)
    }

    /// Where the item travels for this outcome. Directional exits leave the
    /// container along one axis, keeping the other coordinate; a reset goes
    /// back to `origin`.
    pub fn target(&self, live: Point, origin: Point, geometry: &Geometry) -> Point {
        let container = geometry.container;
        match self {
            ExitOutcome::Left => Point::new(-container.width, live.y),
            ExitOutcome::Right => Point::new(container.width, live.y),
            ExitOutcome::Top => Point::new(live.x, -container.height),
            ExitOutcome::Bottom => Point::new(live.x, container.height),
            ExitOutcome::Reset => origin,
        }
    }
}

/// Raw badge opacities. Values are unclamped and may be negative or exceed 1.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BadgeAlpha {
    pub horizontal: f32,
    pub vertical: f32,
}

impl BadgeAlpha {
    pub const TRANSPARENT: BadgeAlpha = BadgeAlpha {
        horizontal: 0.0,
        vertical: 0.0,
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExitClassifier {
    quirks: LegacyQuirks,
}

impl ExitClassifier {
    pub fn new(quirks: LegacyQuirks) -> Self {
        Self { quirks }
    }

    /// Badge opacity proportional to drag distance over half the container.
    pub fn badge_alpha(&self, offset: Point, geometry: &Geometry) -> BadgeAlpha {
        let vertical_numerator = if self.quirks.vertical_alpha_uses_horizontal_offset {
            offset.x
        } else {
            offset.y
        };
        BadgeAlpha {
            horizontal: ratio(offset.x, geometry.container.width),
            vertical: ratio(vertical_numerator, geometry.container.height),
        }
    }

    /// Decide the outcome for an item released at `position`.
    ///
    /// Checks run in a fixed order and the first hit wins: left, right, top,
    /// bottom, otherwise reset.
    pub fn classify(&self, position: Point, geometry: &Geometry) -> ExitOutcome {
        if crossed_left(position, geometry) {
            ExitOutcome::Left
        } else if crossed_right(position, geometry) {
            ExitOutcome::Right
        } else if crossed_top(position, geometry) {
            ExitOutcome::Top
        } else if crossed_bottom(position, geometry) {
            ExitOutcome::Bottom
        } else {
            ExitOutcome::Reset
        }
    }
}

fn ratio(distance: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    distance / (extent * 0.5)
}

fn horizontal_probe(position: Point, geometry: &Geometry) -> f32 {
    (position.x + geometry.half_item.width) + geometry.item.width / 2.0
}

fn vertical_probe(position: Point, geometry: &Geometry) -> f32 {
    (position.y + geometry.half_item.height) + geometry.item.height / 2.0
}

fn crossed_left(position: Point, geometry: &Geometry) -> bool {
    horizontal_probe(position, geometry) < geometry.left_boundary
}

fn crossed_right(position: Point, geometry: &Geometry) -> bool {
    horizontal_probe(position, geometry) > geometry.right_boundary
}

fn crossed_top(position: Point, geometry: &Geometry) -> bool {
    vertical_probe(position, geometry) < geometry.top_boundary
}

fn crossed_bottom(position: Point, geometry: &Geometry) -> bool {
    vertical_probe(position, geometry) > geometry.bottom_boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SwipeConfig;
    use swipecard_ui_graphics::Size;

    fn geometry() -> Geometry {
        Geometry::capture(
            Size::new(100.0, 100.0),
            Size::new(600.0, 600.0),
            &SwipeConfig::default(),
        )
    }

    #[test]
    fn scenario_left_exit() {
        let classifier = ExitClassifier::default();
        let outcome = classifier.classify(Point::new(-10.0, 250.0), &geometry());
        assert_eq!(outcome, ExitOutcome::Left);
        assert_eq!(
            outcome.target(Point::new(-10.0, 250.0), Point::new(250.0, 250.0), &geometry()),
            Point::new(-600.0, 250.0)
        );
    }

    #[test]
    fn small_drag_resets() {
        let classifier = ExitClassifier::default();
        let outcome = classifier.classify(Point::new(260.0, 260.0), &geometry());
        assert_eq!(outcome, ExitOutcome::Reset);
        assert_eq!(
            outcome.target(Point::new(260.0, 260.0), Point::new(250.0, 250.0), &geometry()),
            Point::new(250.0, 250.0)
        );
    }

    #[test]
    fn each_edge_is_detected() {
        let classifier = ExitClassifier::default();
        let g = geometry();
        assert_eq!(classifier.classify(Point::new(450.0, 250.0), &g), ExitOutcome::Right);
        assert_eq!(classifier.classify(Point::new(250.0, -10.0), &g), ExitOutcome::Top);
        assert_eq!(classifier.classify(Point::new(250.0, 450.0), &g), ExitOutcome::Bottom);
    }

    #[test]
    fn precedence_is_left_right_top_bottom() {
        let classifier = ExitClassifier::default();
        let release = Point::new(-100.0, -100.0);
        // Overlapping bands: all four conditions hold at once.
        let all = Geometry {
            left_boundary: 100.0,
            right_boundary: -50.0,
            top_boundary: 100.0,
            bottom_boundary: -50.0,
            ..geometry()
        };
        assert_eq!(classifier.classify(release, &all), ExitOutcome::Left);

        let no_left = Geometry {
            left_boundary: -1000.0,
            ..all
        };
        assert_eq!(classifier.classify(release, &no_left), ExitOutcome::Right);

        let vertical_only = Geometry {
            right_boundary: 1000.0,
            ..no_left
        };
        assert_eq!(classifier.classify(release, &vertical_only), ExitOutcome::Top);

        let bottom_only = Geometry {
            top_boundary: -1000.0,
            ..vertical_only
        };
        assert_eq!(classifier.classify(release, &bottom_only), ExitOutcome::Bottom);
    }

    #[test]
    fn zero_geometry_resets() {
        let classifier = ExitClassifier::default();
        assert_eq!(
            classifier.classify(Point::new(0.0, 0.0), &Geometry::ZERO),
            ExitOutcome::Reset
        );
    }

    #[test]
    fn badge_alpha_uses_each_axis() {
        let classifier = ExitClassifier::default();
        let alpha = classifier.badge_alpha(Point::new(-150.0, 600.0), &geometry());
        assert_eq!(alpha.horizontal, -0.5);
        assert_eq!(alpha.vertical, 2.0);
    }

    #[test]
    fn legacy_vertical_alpha_follows_horizontal_offset() {
        let classifier = ExitClassifier::new(LegacyQuirks {
            vertical_alpha_uses_horizontal_offset: true,
            ..LegacyQuirks::default()
        });
        let alpha = classifier.badge_alpha(Point::new(150.0, 0.0), &geometry());
        assert_eq!(alpha.vertical, 0.5);
    }

    #[test]
    fn badge_alpha_is_zero_without_container() {
        let alpha = ExitClassifier::default().badge_alpha(Point::new(10.0, 10.0), &Geometry::ZERO);
        assert_eq!(alpha, BadgeAlpha::TRANSPARENT);
    }
}
