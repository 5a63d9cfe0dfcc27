use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deck_core::{
    load_settings, replay_script, DeckController, ManualClock, MonotonicClock, ReplayFrame,
    Settings, SlideList,
};
use shared::{domain::DeckManifest, protocol::SessionScript};
use tracing_subscriber::EnvFilter;

mod realtime;

#[derive(Parser, Debug)]
#[command(name = "deck_cli", about = "Inspect the pitch deck and replay input sessions")]
struct Args {
    /// Settings file; defaults to ./deck.toml.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every slide with its position and id.
    Outline {
        #[arg(long)]
        deck: Option<PathBuf>,
    },
    /// Replay a JSON session script, printing one snapshot per step.
    Replay {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        deck: Option<PathBuf>,
        /// Pace steps against the wall clock instead of jumping a manual clock.
        #[arg(long)]
        realtime: bool,
        #[arg(long)]
        settle_ms: Option<u64>,
        #[arg(long)]
        skip_entrance: bool,
    },
}

fn load_manifest(settings: &Settings, deck: Option<PathBuf>) -> Result<DeckManifest> {
    match deck.or_else(|| settings.deck_path.clone()) {
        Some(path) => DeckManifest::load(&path)
            .with_context(|| format!("failed to load deck '{}'", path.display())),
        None => Ok(DeckManifest::builtin()?),
    }
}

fn print_frame(frame: ReplayFrame) -> Result<()> {
    println!("{}", serde_json::to_string(&frame)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let mut settings = load_settings(args.settings.as_deref())?;

    match args.command {
        Command::Outline { deck } => {
            let manifest = load_manifest(&settings, deck)?;
            println!("{} ({} slides)", manifest.title, manifest.slides.len());
            for (position, slide) in manifest.slides.iter().enumerate() {
                println!("{:>3}  {:<16} {}", position + 1, slide.id.as_str(), slide.title);
            }
        }
        Command::Replay {
            script,
            deck,
            realtime,
            settle_ms,
            skip_entrance,
        } => {
            settings.skip_entrance |= skip_entrance;
            let manifest = load_manifest(&settings, deck)?;
            let raw = fs::read_to_string(&script)
                .with_context(|| format!("failed to read script '{}'", script.display()))?;
            let script = SessionScript::from_json(&raw)
                .with_context(|| format!("invalid script '{}'", script.display()))?;
            let slides = SlideList::from_manifest(&manifest, |slide| slide.id.clone())?;
            tracing::info!(
                steps = script.steps().len(),
                realtime,
                "replaying session"
            );

            if realtime {
                let mut controller =
                    DeckController::new(slides, &settings, MonotonicClock::new());
                realtime::replay_realtime(&mut controller, &script, settle_ms, print_frame)
                    .await?;
            } else {
                let mut controller = DeckController::new(slides, &settings, ManualClock::new(0));
                for frame in replay_script(&mut controller, &script, settle_ms) {
                    print_frame(frame)?;
                }
            }
        }
    }

    Ok(())
}
