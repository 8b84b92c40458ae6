//! The ordered, load-once set of slides a deck navigates over.

use crate::error::{DeckError, Result};

/// Placeholder substituted with the 1-based slide number in [`LabelFormat`].
pub const SLIDE_NUMBER_PLACEHOLDER: &str = "{n}";

/// What the controller knows about a slide. The pixels stay with the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideInfo {
    pub title: Option<String>,
}

impl SlideInfo {
    pub fn new(title: Option<String>) -> Self {
        // Blank titles count as missing
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self { title }
    }

    pub fn untitled() -> Self {
        Self { title: None }
    }
}

/// Template for the label of a slide without a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormat {
    template: String,
}

impl LabelFormat {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into() }
    }

    /// Label for the slide at zero-based `index`.
    pub fn fallback(&self, index: usize) -> String {
        if self.template.contains(SLIDE_NUMBER_PLACEHOLDER) {
            self.template
                .replace(SLIDE_NUMBER_PLACEHOLDER, &(index + 1).to_string())
        } else {
            format!("{} {}", self.template, index + 1)
        }
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::new("Slide {n}")
    }
}

/// Slides in document order. Never empty, never reordered.
#[derive(Debug, Clone)]
pub struct SlideSet {
    slides: Vec<SlideInfo>,
}

impl SlideSet {
    pub fn new(slides: Vec<SlideInfo>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    // A SlideSet is never empty, but clippy wants the pair.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&SlideInfo> {
        self.slides.get(index)
    }

    /// The slide's title, or the generated fallback when it has none.
    pub fn label(&self, index: usize, format: &LabelFormat) -> String {
        self.get(index)
            .and_then(|slide| slide.title.clone())
            .unwrap_or_else(|| format.fallback(index))
    }

    /// Clamps any requested position into `0..=last_index`.
    pub fn clamp(&self, target: isize) -> usize {
        if target <= 0 {
            0
        } else {
            (target as usize).min(self.last_index())
        }
    }
}
