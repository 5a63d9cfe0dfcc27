use std::path::{Path, PathBuf};

use anyhow::Context;
use deck_core::{
    config::DEFAULT_SETTINGS_FILE, load_settings, DeckController, MonotonicClock, Settings,
    SlideList, Stage,
};
use eframe::egui;
use shared::domain::DeckManifest;

use super::{
    deck::{self, DeckView},
    entrance,
    slide_view::SlideView,
    theme::Palette,
};
use crate::controller::{
    events::RevealZone,
    orchestration::{dispatch_inputs, dispatch_keyboard, repaint_delay},
};

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub settings_path: Option<PathBuf>,
    pub deck_path: Option<PathBuf>,
    pub skip_entrance: bool,
}

impl StartupConfig {
    /// Explicit path, then `./deck.toml`, then the per-user config directory.
    pub fn resolve_settings_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.settings_path {
            return Some(path.clone());
        }
        if Path::new(DEFAULT_SETTINGS_FILE).exists() {
            return None;
        }
        dirs::config_dir()
            .map(|dir| dir.join("pitch_deck").join(DEFAULT_SETTINGS_FILE))
            .filter(|path| path.exists())
    }

    pub fn load_settings(&self) -> anyhow::Result<Settings> {
        let path = self.resolve_settings_path();
        let mut settings = load_settings(path.as_deref())?;
        settings.skip_entrance |= self.skip_entrance;
        if let Some(deck_path) = &self.deck_path {
            settings.deck_path = Some(deck_path.clone());
        }
        Ok(settings)
    }
}

/// Loads the configured manifest, falling back to the bundled pitch when it cannot be read.
pub fn load_manifest(path: Option<&Path>) -> anyhow::Result<DeckManifest> {
    if let Some(path) = path {
        match DeckManifest::load(path) {
            Ok(manifest) => return Ok(manifest),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "deck manifest unusable; using bundled pitch"
                );
            }
        }
    }
    DeckManifest::builtin().context("bundled pitch deck is invalid")
}

pub struct PitchDeckApp {
    controller: DeckController<SlideView>,
    title: String,
    brand: String,
    palette: Palette,
    reveal_zone: RevealZone,
}

impl PitchDeckApp {
    pub fn new(startup: &StartupConfig) -> anyhow::Result<Self> {
        let settings = startup.load_settings()?;
        let manifest = load_manifest(settings.deck_path.as_deref())?;
        let slides = SlideList::from_manifest(&manifest, SlideView::new)?;
        tracing::info!(
            title = %manifest.title,
            slides = slides.len(),
            skip_entrance = settings.skip_entrance,
            "pitch deck ready"
        );

        Ok(Self {
            controller: DeckController::new(slides, &settings, MonotonicClock::new()),
            title: manifest.title.clone(),
            brand: manifest.brand().to_string(),
            palette: Palette::default(),
            reveal_zone: RevealZone::default(),
        })
    }
}

impl eframe::App for PitchDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.tick() {
            tracing::debug!("navbar countdown elapsed");
        }

        let mut changed = dispatch_keyboard(ctx, &mut self.controller);

        let inputs = match self.controller.stage() {
            Stage::Entrance(gate) => entrance::show(ctx, gate, &self.title, &self.palette),
            Stage::Deck(navigator) => {
                let slides = self.controller.render_window();
                let view = DeckView {
                    navigator,
                    slides: &slides,
                    brand: &self.brand,
                };
                deck::show(ctx, &view, &mut self.reveal_zone, &self.palette)
            }
        };
        changed |= dispatch_inputs(&mut self.controller, inputs);

        if changed {
            ctx.request_repaint();
        }
        if let Some(delay) = repaint_delay(&self.controller) {
            ctx.request_repaint_after(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_deck_file_falls_back_to_bundled_pitch() {
        let manifest = load_manifest(Some(Path::new("/nonexistent/deck-manifest.toml")))
            .expect("fallback manifest");
        assert_eq!(manifest.slides.len(), 15);
    }

    #[test]
    fn explicit_settings_path_wins() {
        let startup = StartupConfig {
            settings_path: Some(PathBuf::from("custom.toml")),
            ..StartupConfig::default()
        };
        assert_eq!(
            startup.resolve_settings_path(),
            Some(PathBuf::from("custom.toml"))
        );
    }
}
