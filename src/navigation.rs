//! The navigation controller: the deck's only mutable state.
//!
//! All movement goes through [`NavigationController::go_to`], which clamps the
//! requested position, skips no-op moves and then re-renders the breadcrumb strip
//! and the previous/next controls from scratch.

use crate::deck::{LabelFormat, SlideInfo, SlideSet};
use crate::error::Result;
use crate::input::{NavInput, NavRequest};

/// One marker in the breadcrumb strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

/// Enabled state of the two directional controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl Controls {
    pub fn at(current: usize, last_index: usize) -> Self {
        Self {
            prev_enabled: current != 0,
            next_enabled: current != last_index,
        }
    }
}

/// Render-level output of the controller.
pub trait DeckView {
    fn set_slide_visible(&mut self, index: usize, visible: bool);

    /// Replaces every marker in the breadcrumb container.
    fn replace_breadcrumbs(&mut self, markers: Vec<Breadcrumb>);

    fn set_controls(&mut self, controls: Controls);
}

pub struct NavigationController<V: DeckView> {
    slides: SlideSet,
    labels: LabelFormat,
    current: usize,
    view: V,
}

impl<V: DeckView> NavigationController<V> {
    /// Shows slide 0, hides the rest and renders the initial breadcrumbs and controls.
    pub fn new(slides: SlideSet, labels: LabelFormat, view: V) -> Self {
        let mut controller = Self {
            slides,
            labels,
            current: 0,
            view,
        };

        for index in 0..controller.slides.len() {
            controller.view.set_slide_visible(index, index == 0);
        }
        controller.render_chrome();

        tracing::debug!(slides = controller.slides.len(), "Navigation initialized");
        controller
    }

    /// Builds the slide set from `slides` first; fails only for an empty deck.
    pub fn from_slides(
        slides: Vec<SlideInfo>,
        labels: LabelFormat,
        view: V,
    ) -> Result<Self> {
        Ok(Self::new(SlideSet::new(slides)?, labels, view))
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn controls(&self) -> Controls {
        Controls::at(self.current, self.slides.last_index())
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        (0..self.slides.len())
            .map(|index| Breadcrumb {
                index,
                label: self.slides.label(index, &self.labels),
                active: index == self.current,
            })
            .collect()
    }

    /// Moves to `target`, clamped into the deck. Returns whether the slide changed.
    pub fn go_to(&mut self, target: isize) -> bool {
        let clamped = self.slides.clamp(target);
        if clamped == self.current {
            tracing::trace!(target, current = self.current, "Navigation is a no-op");
            return false;
        }

        let previous = self.current;
        self.view.set_slide_visible(previous, false);
        self.current = clamped;
        self.view.set_slide_visible(clamped, true);
        self.render_chrome();

        tracing::debug!(from = previous, to = clamped, requested = target, "Navigated");
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current as isize + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.current as isize - 1)
    }

    /// Dispatches one input event. Unhandled keys do nothing.
    pub fn handle(&mut self, input: NavInput) -> bool {
        match input.request() {
            Some(NavRequest::Previous) => self.prev(),
            Some(NavRequest::Next) => self.next(),
            Some(NavRequest::GoTo(index)) => {
                self.go_to(isize::try_from(index).unwrap_or(isize::MAX))
            }
            None => false,
        }
    }

    fn render_chrome(&mut self) {
        let markers = self.breadcrumbs();
        self.view.replace_breadcrumbs(markers);
        self.view.set_controls(self.controls());
    }
}
