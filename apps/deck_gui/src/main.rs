use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod controller;
mod ui;

use ui::app::{PitchDeckApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "deck_gui", about = "Q'anta pitch deck presenter")]
struct Args {
    /// Deck manifest (TOML). Falls back to the bundled pitch when missing or invalid.
    #[arg(long)]
    deck: Option<PathBuf>,
    /// Settings file; defaults to ./deck.toml.
    #[arg(long)]
    settings: Option<PathBuf>,
    #[arg(long)]
    skip_entrance: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let startup = StartupConfig {
        settings_path: args.settings,
        deck_path: args.deck,
        skip_entrance: args.skip_entrance,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Q'anta")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Q'anta",
        options,
        Box::new(move |_cc| {
            let app = PitchDeckApp::new(&startup)?;
            Ok(Box::new(app))
        }),
    )
}
