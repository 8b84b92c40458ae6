use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::constants::{FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::deck::LabelFormat;

/// Present a directory of images as a navigable slide deck.
#[derive(Parser, Debug)]
#[command(name = "slidedeck", version, about)]
pub struct Cli {
    /// Directory holding the slide images, shown in file-name order
    pub image_directory: PathBuf,

    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Breadcrumb label for slides without a title; `{n}` is the slide number
    #[arg(long, default_value = "Slide {n}")]
    pub fallback_label: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn label_format(&self) -> LabelFormat {
        LabelFormat::new(self.fallback_label.clone())
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// `RUST_LOG` when set, otherwise the level picked with `-v`.
    pub fn env_filter(&self) -> EnvFilter {
        build_env_filter(std::env::var("RUST_LOG").ok().as_deref(), self.log_level())
    }
}

/// Blank or unparseable directives fall back to `fallback`.
pub fn build_env_filter(directives: Option<&str>, fallback: Level) -> EnvFilter {
    if let Some(directives) = directives.filter(|d| !d.trim().is_empty())
        && let Ok(filter) = EnvFilter::try_new(directives)
    {
        return filter;
    }
    EnvFilter::new(fallback.to_string())
}
