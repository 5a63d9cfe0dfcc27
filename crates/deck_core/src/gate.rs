//! Entrance puzzle: Q four times, A twice, then the apostrophe.

use serde::{Deserialize, Serialize};
use shared::protocol::GateElement;
use tracing::{debug, info};

pub const REQUIRED_Q_CLICKS: u8 = 4;
pub const REQUIRED_A_CLICKS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTransition {
    Advanced,
    Unlocked,
    Reset,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GateSnapshot {
    pub q_clicks: u8,
    pub a_clicks: u8,
    pub apostrophe_clicked: bool,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EntranceGate {
    q_clicks: u8,
    a_clicks: u8,
    apostrophe_clicked: bool,
}

impl EntranceGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn q_clicks(&self) -> u8 {
        self.q_clicks
    }

    pub fn a_clicks(&self) -> u8 {
        self.a_clicks
    }

    pub fn apostrophe_clicked(&self) -> bool {
        self.apostrophe_clicked
    }

    /// Unlocking is terminal for this gate instance.
    pub fn is_unlocked(&self) -> bool {
        self.apostrophe_clicked
    }

    pub fn snapshot(&self) -> GateSnapshot {
        GateSnapshot {
            q_clicks: self.q_clicks,
            a_clicks: self.a_clicks,
            apostrophe_clicked: self.apostrophe_clicked,
            unlocked: self.is_unlocked(),
        }
    }

    pub fn click(&mut self, element: GateElement) -> GateTransition {
        if self.is_unlocked() {
            debug!(?element, "gate: click ignored, already unlocked");
            return GateTransition::Ignored;
        }

        let transition = match element {
            GateElement::Q => self.click_q(),
            GateElement::A => self.click_a(),
            GateElement::Apostrophe => self.click_apostrophe(),
        };

        match transition {
            GateTransition::Unlocked => info!("gate: unlocked"),
            GateTransition::Reset => debug!(?element, "gate: out of sequence, progress reset"),
            _ => debug!(
                ?element,
                q_clicks = self.q_clicks,
                a_clicks = self.a_clicks,
                "gate: advanced"
            ),
        }

        transition
    }

    fn click_q(&mut self) -> GateTransition {
        if self.q_clicks < REQUIRED_Q_CLICKS {
            self.q_clicks += 1;
            GateTransition::Advanced
        } else {
            self.reset()
        }
    }

    fn click_a(&mut self) -> GateTransition {
        if self.q_clicks == REQUIRED_Q_CLICKS && self.a_clicks < REQUIRED_A_CLICKS {
            self.a_clicks += 1;
            GateTransition::Advanced
        } else {
            self.reset()
        }
    }

    fn click_apostrophe(&mut self) -> GateTransition {
        if self.q_clicks == REQUIRED_Q_CLICKS && self.a_clicks == REQUIRED_A_CLICKS {
            self.apostrophe_clicked = true;
            GateTransition::Unlocked
        } else {
            self.reset()
        }
    }

    fn reset(&mut self) -> GateTransition {
        *self = Self::default();
        GateTransition::Reset
    }
}

#[cfg(test)]
#[path = "tests/gate_tests.rs"]
mod tests;
