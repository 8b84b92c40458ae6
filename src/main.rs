use anyhow::{bail, Context, Result};
use clap::Parser;
use raylib::prelude::*;

use slidedeck::config::Cli;
use slidedeck::deck::SlideSet;
use slidedeck::navigation::NavigationController;
use slidedeck::texture_loader::{load_slide, load_sorted_image_paths};
use slidedeck::window::WindowDeck;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.env_filter())
        .with_target(false)
        .init();

    tracing::info!(directory = ?cli.image_directory, "Starting slide deck");

    let image_paths = load_sorted_image_paths(&cli.image_directory)
        .with_context(|| format!("Error loading images from {:?}", cli.image_directory))?;

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Slide Deck")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Only the arrow keys navigate; nothing else may close the deck
    rl.set_exit_key(None);

    // --- Load Slides ---
    let mut textures = Vec::new();
    let mut infos = Vec::new();
    for path in &image_paths {
        match load_slide(&mut rl, &thread, path) {
            Ok(slide) => {
                textures.push(slide.texture);
                infos.push(slide.info);
            }
            Err(e) => tracing::warn!(error = %e, "Skipping slide"),
        }
    }
    if infos.is_empty() {
        bail!("No slides could be loaded from {:?}", cli.image_directory);
    }

    let slides = SlideSet::new(infos)?;
    tracing::info!(slides = slides.len(), "Deck loaded");

    let mut deck = NavigationController::new(slides, cli.label_format(), WindowDeck::new(textures));

    // --- Main Loop ---
    while !rl.window_should_close() {
        let inputs = deck.view().poll_input(&mut rl);
        for input in inputs {
            deck.handle(input);
        }

        deck.view_mut().prepare_frame(&rl);

        let mut d = rl.begin_drawing(&thread);
        deck.view().draw(&mut d);
    }

    Ok(())
}
