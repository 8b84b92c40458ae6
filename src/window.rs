//! The raylib window the deck is presented in.

use raylib::core::text::measure_text;
use raylib::prelude::*;

use crate::constants::*;
use crate::input::NavInput;
use crate::layout::{fit_label, slide_area, ControlBar};
use crate::navigation::{Breadcrumb, Controls, DeckView};
use crate::slide::Slide;

const PREV_LABEL: &str = "< Prev";
const NEXT_LABEL: &str = "Next >";

pub struct WindowDeck {
    slides: Vec<Slide>,
    breadcrumbs: Vec<Breadcrumb>,
    controls: Controls,
    // Breadcrumb labels truncated for the screen width they were fitted at
    fitted_labels: Vec<String>,
    fitted_width: Option<f32>,
}

impl WindowDeck {
    pub fn new(textures: Vec<Texture2D>) -> Self {
        Self {
            slides: textures.into_iter().map(Slide::new).collect(),
            breadcrumbs: Vec::new(),
            controls: Controls {
                prev_enabled: false,
                next_enabled: false,
            },
            fitted_labels: Vec::new(),
            fitted_width: None,
        }
    }

    fn control_bar(&self, screen_width: f32, screen_height: f32) -> ControlBar {
        ControlBar::compute(screen_width, screen_height, self.breadcrumbs.len())
    }

    /// Refits breadcrumb labels to the current window before a frame is drawn.
    pub fn prepare_frame(&mut self, rl: &RaylibHandle) {
        self.refit_labels(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            |s| measure_text(s, FONT_SIZE),
        );
    }

    /// Truncates labels to their markers. Only reruns after a resize or a rebuild.
    pub fn refit_labels(
        &mut self,
        screen_width: f32,
        screen_height: f32,
        measure: impl Fn(&str) -> i32,
    ) {
        if self.fitted_width == Some(screen_width) {
            return;
        }
        let bar = self.control_bar(screen_width, screen_height);
        self.fitted_labels = self
            .breadcrumbs
            .iter()
            .zip(bar.markers.iter())
            .map(|(marker, rect)| fit_label(&marker.label, text_width(rect), &measure))
            .collect();
        self.fitted_width = Some(screen_width);
    }

    /// Collects this frame's key presses and clicks, in that order.
    pub fn poll_input(&self, rl: &mut RaylibHandle) -> Vec<NavInput> {
        let mut inputs = Vec::new();

        while let Some(key) = rl.get_key_pressed() {
            inputs.push(NavInput::Key(key));
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let bar = self.control_bar(
                rl.get_screen_width() as f32,
                rl.get_screen_height() as f32,
            );
            if let Some(input) = bar.hit(rl.get_mouse_position()) {
                inputs.push(input);
            }
        }

        inputs
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        d.clear_background(BACKGROUND);

        let area = slide_area(screen_width, screen_height);
        for slide in self.slides.iter() {
            slide.draw(d, &area);
        }

        let bar = self.control_bar(screen_width, screen_height);
        d.draw_rectangle_rec(bar.bar, BAR_BACKGROUND);

        draw_button(d, &bar.prev, PREV_LABEL, self.controls.prev_enabled);
        draw_button(d, &bar.next, NEXT_LABEL, self.controls.next_enabled);

        for (i, (marker, rect)) in self.breadcrumbs.iter().zip(bar.markers.iter()).enumerate() {
            let fill = if marker.active { MARKER_ACTIVE } else { MARKER_IDLE };
            d.draw_rectangle_rec(*rect, fill);
            if let Some(label) = self.fitted_labels.get(i) {
                draw_centered_text(d, rect, label, TEXT_ENABLED);
            }
        }
    }
}

fn draw_button(d: &mut RaylibDrawHandle, rect: &Rectangle, label: &str, enabled: bool) {
    let (fill, text) = if enabled {
        (BUTTON_ENABLED, TEXT_ENABLED)
    } else {
        (BUTTON_DISABLED, TEXT_DISABLED)
    };
    d.draw_rectangle_rec(*rect, fill);
    draw_centered_text(d, rect, label, text);
}

fn text_width(rect: &Rectangle) -> i32 {
    (rect.width - 2.0 * MARKER_GAP).max(0.0) as i32
}

fn draw_centered_text(d: &mut RaylibDrawHandle, rect: &Rectangle, text: &str, color: Color) {
    if text.is_empty() {
        return;
    }
    let width = measure_text(text, FONT_SIZE) as f32;
    let x = rect.x + (rect.width - width) * 0.5;
    let y = rect.y + (rect.height - FONT_SIZE as f32) * 0.5;
    d.draw_text(text, x as i32, y as i32, FONT_SIZE, color);
}

impl DeckView for WindowDeck {
    fn set_slide_visible(&mut self, index: usize, visible: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.visible = visible;
        }
    }

    fn replace_breadcrumbs(&mut self, markers: Vec<Breadcrumb>) {
        self.breadcrumbs = markers;
        self.fitted_labels.clear();
        self.fitted_width = None;
    }

    fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }
}
