//! Screen geometry for slides and the control bar.

use raylib::prelude::{Rectangle, Vector2};

use crate::constants::*;
use crate::input::NavInput;

// The default raylib font only covers ASCII
const ELLIPSIS: &str = "...";

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

/// Region above the control bar where the visible slide is drawn.
pub fn slide_area(screen_width: f32, screen_height: f32) -> Rectangle {
    Rectangle::new(
        0.0,
        0.0,
        screen_width,
        (screen_height - CONTROL_BAR_HEIGHT).max(0.0),
    )
}

/// Scale that fits a texture inside `area`, never enlarging it.
pub fn fit_scale(texture_width: f32, texture_height: f32, area: &Rectangle) -> f32 {
    if texture_width <= 0.0 || texture_height <= 0.0 {
        return 0.0;
    }
    let horizontal = area.width * SLIDE_FILL / texture_width;
    let vertical = area.height * SLIDE_FILL / texture_height;
    horizontal.min(vertical).min(1.0)
}

/// Destination rectangle for a texture centered in `area` at `fit_scale`.
pub fn fit_rect(texture_width: f32, texture_height: f32, area: &Rectangle) -> Rectangle {
    let scale = fit_scale(texture_width, texture_height, area);
    let width = texture_width * scale;
    let height = texture_height * scale;
    Rectangle::new(
        area.x + (area.width - width) * 0.5,
        area.y + (area.height - height) * 0.5,
        width,
        height,
    )
}

/// Hit areas of the bottom bar: previous button, breadcrumb markers, next button.
#[derive(Debug, Clone)]
pub struct ControlBar {
    pub bar: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub markers: Vec<Rectangle>,
}

impl ControlBar {
    pub fn compute(screen_width: f32, screen_height: f32, marker_count: usize) -> Self {
        let bar_y = (screen_height - CONTROL_BAR_HEIGHT).max(0.0);
        let bar = Rectangle::new(0.0, bar_y, screen_width, CONTROL_BAR_HEIGHT);

        let inner_y = bar_y + BAR_PADDING;
        let inner_height = CONTROL_BAR_HEIGHT - 2.0 * BAR_PADDING;

        let prev = Rectangle::new(BAR_PADDING, inner_y, BUTTON_WIDTH, inner_height);
        let next = Rectangle::new(
            (screen_width - BAR_PADDING - BUTTON_WIDTH).max(0.0),
            inner_y,
            BUTTON_WIDTH,
            inner_height,
        );

        let strip_x = prev.x + prev.width + BAR_PADDING;
        let strip_width = (next.x - BAR_PADDING - strip_x).max(0.0);
        let markers = if marker_count == 0 {
            Vec::new()
        } else {
            let gaps = MARKER_GAP * (marker_count - 1) as f32;
            let width = ((strip_width - gaps) / marker_count as f32).max(0.0);
            (0..marker_count)
                .map(|i| {
                    Rectangle::new(
                        strip_x + i as f32 * (width + MARKER_GAP),
                        inner_y,
                        width,
                        inner_height,
                    )
                })
                .collect()
        };

        Self {
            bar,
            prev,
            next,
            markers,
        }
    }

    /// Input produced by a click at `point`, if it landed on a control.
    pub fn hit(&self, point: Vector2) -> Option<NavInput> {
        if contains(&self.prev, point) {
            return Some(NavInput::Previous);
        }
        if contains(&self.next, point) {
            return Some(NavInput::Next);
        }
        self.markers
            .iter()
            .position(|marker| contains(marker, point))
            .map(NavInput::Breadcrumb)
    }
}

/// Shortens `label` with an ellipsis until `measure` says it fits in `max_width`.
///
/// `measure` must grow with the text, so the cut point is found by bisection.
pub fn fit_label(label: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> String {
    if measure(label) <= max_width {
        return label.to_string();
    }
    let chars: Vec<char> = label.chars().collect();
    let truncated = |keep: usize| chars[..keep].iter().collect::<String>() + ELLIPSIS;
    let fits = |keep: usize| measure(&truncated(keep)) <= max_width;

    if !fits(0) {
        return String::new();
    }
    // fits(low) holds, keeping every char does not
    let (mut low, mut high) = (0, chars.len());
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if fits(mid) {
            low = mid;
        } else {
            high = mid;
        }
    }
    truncated(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_sit_between_buttons_in_order() {
        let bar = ControlBar::compute(1280.0, 720.0, 5);
        assert_eq!(bar.markers.len(), 5);
        assert!(bar.markers[0].x >= bar.prev.x + bar.prev.width);
        let last = bar.markers[4];
        assert!(last.x + last.width <= bar.next.x + 0.01);
        for pair in bar.markers.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn hit_testing_maps_to_inputs() {
        let bar = ControlBar::compute(1280.0, 720.0, 3);
        let center = |r: &Rectangle| Vector2::new(r.x + r.width / 2.0, r.y + r.height / 2.0);

        assert_eq!(bar.hit(center(&bar.prev)), Some(NavInput::Previous));
        assert_eq!(bar.hit(center(&bar.next)), Some(NavInput::Next));
        assert_eq!(bar.hit(center(&bar.markers[2])), Some(NavInput::Breadcrumb(2)));
        assert_eq!(bar.hit(Vector2::new(640.0, 100.0)), None);
    }

    #[test]
    fn large_textures_shrink_small_ones_stay() {
        let area = slide_area(1000.0, 556.0);
        assert_eq!(area.height, 500.0);
        assert_eq!(fit_scale(100.0, 100.0, &area), 1.0);
        assert!((fit_scale(2000.0, 500.0, &area) - 0.45).abs() < 1e-6);

        let rect = fit_rect(100.0, 50.0, &area);
        assert_eq!(rect.x, 450.0);
        assert_eq!(rect.y, 225.0);
    }

    #[test]
    fn labels_are_truncated_to_fit() {
        let measure = |s: &str| s.chars().count() as i32 * 10;
        assert_eq!(fit_label("Intro", 50, measure), "Intro");
        assert_eq!(fit_label("Introduction", 50, measure), "In...");
        assert_eq!(fit_label("Introduction", 5, measure), "");
        assert_eq!(fit_label("Introduction", 30, measure), "...");
    }

    #[test]
    fn long_labels_take_logarithmic_measurements() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let measure = |s: &str| {
            calls.set(calls.get() + 1);
            s.chars().count() as i32 * 10
        };
        let label = "x".repeat(1000);

        let fitted = fit_label(&label, 200, measure);
        assert_eq!(fitted, format!("{}...", "x".repeat(17)));
        assert!(calls.get() <= 16, "measured {} times", calls.get());
    }
}
