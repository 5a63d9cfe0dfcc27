//! Routing of collected UI inputs into the deck controller.

use std::time::Duration;

use deck_core::{Clock, DeckController};
use eframe::egui;
use shared::protocol::DeckInput;

use super::events::pressed_navigation_keys;

fn input_name(input: &DeckInput) -> &'static str {
    match input {
        DeckInput::Key { .. } => "key",
        DeckInput::NextClicked => "next_clicked",
        DeckInput::PreviousClicked => "previous_clicked",
        DeckInput::GoTo { .. } => "go_to",
        DeckInput::RevealNavbar => "reveal_navbar",
        DeckInput::GateClick { .. } => "gate_click",
        DeckInput::EnterDeck => "enter_deck",
        DeckInput::Lock => "lock",
    }
}

pub fn dispatch_inputs<R, C: Clock>(
    controller: &mut DeckController<R, C>,
    inputs: impl IntoIterator<Item = DeckInput>,
) -> bool {
    let mut changed = false;
    for input in inputs {
        let outcome = controller.handle(input);
        tracing::debug!(
            input = input_name(&input),
            changed = outcome.changed,
            "dispatched ui input"
        );
        changed |= outcome.changed;
    }
    changed
}

/// Feeds this frame's navigation keys to the controller, consuming the ones it handled.
pub fn dispatch_keyboard<R, C: Clock>(
    ctx: &egui::Context,
    controller: &mut DeckController<R, C>,
) -> bool {
    let mut changed = false;
    for (key, input) in pressed_navigation_keys(ctx) {
        let outcome = controller.handle(DeckInput::Key { key: input });
        if outcome.prevent_default {
            ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key));
        }
        changed |= outcome.changed;
    }
    changed
}

pub fn repaint_delay<R, C: Clock>(controller: &DeckController<R, C>) -> Option<Duration> {
    let deadline = controller.next_deadline_ms()?;
    let now = controller.clock().now_ms();
    Some(Duration::from_millis(deadline.saturating_sub(now)))
}
