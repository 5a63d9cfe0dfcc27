use std::{collections::HashSet, fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

const BUILTIN_MANIFEST: &str = include_str!("../decks/pitch.toml");

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(pub String);

impl SlideId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlideId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Intro,
    Founder,
    Team,
    Problem,
    Solution,
    Demo,
    Market,
    TargetMarkets,
    Competitor,
    Revenue,
    Gtm,
    Roadmap,
    Ask,
    ThankYou,
    #[default]
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// Text content of a single slide. Layout and styling belong to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDescriptor {
    pub id: SlideId,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub kind: SlideKind,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckManifest {
    pub title: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(rename = "slide", default)]
    pub slides: Vec<SlideDescriptor>,
}

impl DeckManifest {
    pub fn from_toml_str(raw: &str) -> Result<Self, DeckError> {
        let manifest: Self = toml::from_str(raw)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            DeckError::InvalidManifest(format!("failed to read '{}': {err}", path.display()))
        })?;
        let manifest = Self::from_toml_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            slides = manifest.slides.len(),
            "loaded deck manifest"
        );
        Ok(manifest)
    }

    /// The fifteen-slide pitch compiled into the binary.
    pub fn builtin() -> Result<Self, DeckError> {
        Self::from_toml_str(BUILTIN_MANIFEST)
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        validate_slide_ids(self.slides.iter().map(|slide| &slide.id))
    }

    pub fn brand(&self) -> &str {
        self.brand.as_deref().unwrap_or(&self.title)
    }
}

/// A deck needs at least one slide, and every id must be non-blank and unique.
pub fn validate_slide_ids<'a>(
    ids: impl IntoIterator<Item = &'a SlideId>,
) -> Result<(), DeckError> {
    let mut seen = HashSet::new();
    for (position, id) in ids.into_iter().enumerate() {
        if id.as_str().trim().is_empty() {
            return Err(DeckError::BlankSlideId { position });
        }
        if !seen.insert(id.as_str()) {
            return Err(DeckError::DuplicateSlideId(id.to_string()));
        }
    }
    if seen.is_empty() {
        return Err(DeckError::EmptyDeck);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_manifest_has_fifteen_slides_in_pitch_order() {
        let manifest = DeckManifest::builtin().expect("builtin deck");
        assert_eq!(manifest.slides.len(), 15);
        assert_eq!(manifest.slides[0].id.as_str(), "intro");
        assert_eq!(manifest.slides[14].id.as_str(), "thankyou");
        assert_eq!(manifest.slides[13].kind, SlideKind::Ask);
    }

    #[test]
    fn rejects_manifest_without_slides() {
        let err = DeckManifest::from_toml_str("title = \"empty\"").expect_err("empty deck");
        assert!(matches!(err, DeckError::EmptyDeck));
    }

    #[test]
    fn rejects_duplicate_slide_ids() {
        let raw = r#"
title = "dupes"

[[slide]]
id = "intro"
title = "One"

[[slide]]
id = "intro"
title = "Two"
"#;
        let err = DeckManifest::from_toml_str(raw).expect_err("duplicate ids");
        assert!(matches!(err, DeckError::DuplicateSlideId(id) if id == "intro"));
    }

    #[test]
    fn rejects_blank_slide_id() {
        let raw = r#"
title = "blank"

[[slide]]
id = "  "
title = "Nameless"
"#;
        let err = DeckManifest::from_toml_str(raw).expect_err("blank id");
        assert!(matches!(err, DeckError::BlankSlideId { position: 0 }));
    }

    #[test]
    fn slide_id_rules_report_first_offender() {
        let ids = [SlideId::from("intro"), SlideId::from(""), SlideId::from("intro")];
        assert!(matches!(
            validate_slide_ids(&ids),
            Err(DeckError::BlankSlideId { position: 1 })
        ));

        let dupes = [SlideId::from("ask"), SlideId::from("ask")];
        assert!(matches!(
            validate_slide_ids(&dupes),
            Err(DeckError::DuplicateSlideId(id)) if id == "ask"
        ));

        let none: [SlideId; 0] = [];
        assert!(matches!(validate_slide_ids(&none), Err(DeckError::EmptyDeck)));
        assert!(validate_slide_ids(&[SlideId::from("only")]).is_ok());
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let raw = r#"
title = "minimal"

[[slide]]
id = "only"
title = "Only slide"
"#;
        let manifest = DeckManifest::from_toml_str(raw).expect("minimal deck");
        let slide = &manifest.slides[0];
        assert_eq!(slide.kind, SlideKind::Generic);
        assert!(slide.subtitle.is_none());
        assert!(slide.points.is_empty());
        assert_eq!(manifest.brand(), "minimal");
    }
}
