//! Top-level shell state: exactly one of the entrance gate or the deck is mounted.

use serde::{Deserialize, Serialize};
use shared::protocol::DeckInput;
use tracing::{debug, info};

use crate::{
    config::Settings,
    gate::{EntranceGate, GateSnapshot, GateTransition},
    navigator::{DeckNavigator, NavigatorOptions, NavigatorSnapshot, RenderedSlide},
    schedule::{Clock, MonotonicClock},
    slides::{SlideList, SlideRender},
};

#[derive(Debug, Clone)]
pub enum Stage {
    Entrance(EntranceGate),
    Deck(DeckNavigator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    pub changed: bool,
    pub prevent_default: bool,
}

impl InputOutcome {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            prevent_default: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum ControllerSnapshot {
    Entrance(GateSnapshot),
    Deck(NavigatorSnapshot),
}

pub struct DeckController<R, C = MonotonicClock> {
    slides: SlideList<R>,
    options: NavigatorOptions,
    clock: C,
    stage: Stage,
}

impl<R, C: Clock> DeckController<R, C> {
    pub fn new(slides: SlideList<R>, settings: &Settings, clock: C) -> Self {
        let options = NavigatorOptions::from(settings);
        let stage = if settings.skip_entrance {
            info!("controller: entrance skipped");
            Stage::Deck(DeckNavigator::new(slides.count(), options))
        } else {
            Stage::Entrance(EntranceGate::new())
        };

        Self {
            slides,
            options,
            clock,
            stage,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn gate(&self) -> Option<&EntranceGate> {
        match &self.stage {
            Stage::Entrance(gate) => Some(gate),
            Stage::Deck(_) => None,
        }
    }

    pub fn navigator(&self) -> Option<&DeckNavigator> {
        match &self.stage {
            Stage::Deck(navigator) => Some(navigator),
            Stage::Entrance(_) => None,
        }
    }

    pub fn is_deck_mounted(&self) -> bool {
        matches!(self.stage, Stage::Deck(_))
    }

    pub fn handle(&mut self, input: DeckInput) -> InputOutcome {
        let now_ms = self.clock.now_ms();
        // Fire anything already due so the input sees current state.
        let ticked = self.tick_at(now_ms);

        let mut outcome = match input {
            DeckInput::EnterDeck => InputOutcome::changed(self.enter_deck()),
            DeckInput::Lock => InputOutcome::changed(self.lock()),
            _ => self.route(input, now_ms),
        };

        outcome.changed |= ticked;
        outcome
    }

    /// Fires due timers. Returns true when visible state changed.
    pub fn tick(&mut self) -> bool {
        let now_ms = self.clock.now_ms();
        self.tick_at(now_ms)
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.navigator().and_then(DeckNavigator::next_deadline_ms)
    }

    /// Transfers control from an unlocked gate to a freshly mounted deck.
    pub fn enter_deck(&mut self) -> bool {
        let unlocked = matches!(&self.stage, Stage::Entrance(gate) if gate.is_unlocked());
        if !unlocked {
            return false;
        }
        info!(slides = self.slides.len(), "controller: entering deck");
        self.stage = Stage::Deck(DeckNavigator::new(self.slides.count(), self.options));
        true
    }

    /// Unmounts the deck and shows a fresh entrance gate.
    pub fn lock(&mut self) -> bool {
        if !self.is_deck_mounted() {
            return false;
        }
        let previous = std::mem::replace(&mut self.stage, Stage::Entrance(EntranceGate::new()));
        if let Stage::Deck(navigator) = previous {
            navigator.unmount();
        }
        info!("controller: deck locked");
        true
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        match &self.stage {
            Stage::Entrance(gate) => ControllerSnapshot::Entrance(gate.snapshot()),
            Stage::Deck(navigator) => ControllerSnapshot::Deck(navigator.snapshot()),
        }
    }

    fn route(&mut self, input: DeckInput, now_ms: u64) -> InputOutcome {
        match &mut self.stage {
            Stage::Entrance(gate) => match input {
                DeckInput::GateClick { element } => {
                    InputOutcome::changed(gate.click(element) != GateTransition::Ignored)
                }
                _ => {
                    debug!(?input, "controller: input ignored at entrance");
                    InputOutcome::default()
                }
            },
            Stage::Deck(navigator) => match input {
                DeckInput::Key { key } => {
                    let key_outcome = navigator.handle_key(key, now_ms);
                    InputOutcome {
                        changed: key_outcome.changed,
                        prevent_default: key_outcome.prevent_default,
                    }
                }
                DeckInput::NextClicked => InputOutcome::changed(navigator.next(now_ms)),
                DeckInput::PreviousClicked => InputOutcome::changed(navigator.previous(now_ms)),
                DeckInput::GoTo { index } => InputOutcome::changed(navigator.go_to(index, now_ms)),
                DeckInput::RevealNavbar => {
                    InputOutcome::changed(navigator.reveal_navbar(now_ms))
                }
                _ => {
                    debug!(?input, "controller: input ignored while deck is mounted");
                    InputOutcome::default()
                }
            },
        }
    }

    fn tick_at(&mut self, now_ms: u64) -> bool {
        match &mut self.stage {
            Stage::Deck(navigator) => navigator.tick(now_ms),
            Stage::Entrance(_) => false,
        }
    }
}

impl<R: SlideRender, C: Clock> DeckController<R, C> {
    /// Renders the windowed slides; empty while the entrance gate is mounted.
    pub fn render_window(&self) -> Vec<RenderedSlide<R::Output>> {
        match &self.stage {
            Stage::Deck(navigator) => navigator.render(&self.slides),
            Stage::Entrance(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
