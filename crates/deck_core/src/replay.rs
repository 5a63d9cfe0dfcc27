//! Deterministic replay of recorded input sessions against a controller.

use serde::{Deserialize, Serialize};
use shared::protocol::{DeckInput, SessionScript};

use crate::{
    controller::{ControllerSnapshot, DeckController},
    schedule::{Clock, ManualClock},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayFrame {
    pub at_ms: u64,
    pub input: Option<DeckInput>,
    pub changed: bool,
    pub prevent_default: bool,
    pub snapshot: ControllerSnapshot,
}

impl ReplayFrame {
    pub fn capture<R, C: Clock>(
        controller: &DeckController<R, C>,
        at_ms: u64,
        input: Option<DeckInput>,
        changed: bool,
        prevent_default: bool,
    ) -> Self {
        Self {
            at_ms,
            input,
            changed,
            prevent_default,
            snapshot: controller.snapshot(),
        }
    }
}

/// Drives the controller's manual clock to each step, then applies the input.
///
/// With `settle_ms`, one extra frame is recorded that long after the last step.
pub fn replay_script<R>(
    controller: &mut DeckController<R, ManualClock>,
    script: &SessionScript,
    settle_ms: Option<u64>,
) -> Vec<ReplayFrame> {
    let mut frames = Vec::with_capacity(script.steps().len() + 1);

    for step in script.steps() {
        controller.clock().set(step.at_ms);
        let outcome = controller.handle(step.input);
        frames.push(ReplayFrame::capture(
            controller,
            step.at_ms,
            Some(step.input),
            outcome.changed,
            outcome.prevent_default,
        ));
    }

    if let Some(settle_ms) = settle_ms {
        let at_ms = script.last_at_ms().saturating_add(settle_ms);
        controller.clock().set(at_ms);
        let changed = controller.tick();
        frames.push(ReplayFrame::capture(controller, at_ms, None, changed, false));
    }

    tracing::debug!(frames = frames.len(), "replay: script finished");
    frames
}
