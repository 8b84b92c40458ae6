//! A slide-deck navigator: one visible slide, previous/next controls and a
//! breadcrumb strip, driven by clicks and the arrow keys.

pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod slide;
pub mod texture_loader;
pub mod window;

pub use deck::{LabelFormat, SlideInfo, SlideSet};
pub use error::DeckError;
pub use input::{NavInput, NavRequest};
pub use navigation::{Breadcrumb, Controls, DeckView, NavigationController};
