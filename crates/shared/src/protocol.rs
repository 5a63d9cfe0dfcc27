use serde::{Deserialize, Serialize};

use crate::error::DeckError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyInput {
    ArrowRight,
    ArrowLeft,
    Space,
    Other,
}

/// Clickable parts of the entrance wordmark.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GateElement {
    Q,
    A,
    Apostrophe,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DeckInput {
    Key { key: KeyInput },
    NextClicked,
    PreviousClicked,
    GoTo { index: usize },
    RevealNavbar,
    GateClick { element: GateElement },
    EnterDeck,
    Lock,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptStep {
    pub at_ms: u64,
    pub input: DeckInput,
}

/// Timestamped inputs replayed against a controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionScript {
    steps: Vec<ScriptStep>,
}

impl SessionScript {
    pub fn new(steps: Vec<ScriptStep>) -> Result<Self, DeckError> {
        for (index, pair) in steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(DeckError::UnsortedScript {
                    index: index + 1,
                    at_ms: pair[1].at_ms,
                    previous_ms: pair[0].at_ms,
                });
            }
        }
        Ok(Self { steps })
    }

    pub fn from_json(raw: &str) -> Result<Self, DeckError> {
        let steps: Vec<ScriptStep> = serde_json::from_str(raw)?;
        Self::new(steps)
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn last_at_ms(&self) -> u64 {
        self.steps.last().map(|step| step.at_ms).unwrap_or(0)
    }
}
