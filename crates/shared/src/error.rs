use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck has no slides")]
    EmptyDeck,
    #[error("duplicate slide id '{0}'")]
    DuplicateSlideId(String),
    #[error("slide at position {position} has an empty id")]
    BlankSlideId { position: usize },
    #[error("invalid deck manifest: {0}")]
    InvalidManifest(String),
    #[error("invalid session script: {0}")]
    InvalidScript(String),
    #[error("script step {index} at {at_ms}ms precedes the previous step at {previous_ms}ms")]
    UnsortedScript {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },
}

impl From<toml::de::Error> for DeckError {
    fn from(value: toml::de::Error) -> Self {
        Self::InvalidManifest(value.to_string())
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidScript(value.to_string())
    }
}
