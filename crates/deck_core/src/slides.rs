use std::num::NonZeroUsize;

use shared::{
    domain::{validate_slide_ids, DeckManifest, SlideDescriptor, SlideId},
    error::DeckError,
};

/// Render capability for one slide. Must depend on `is_active` only.
pub trait SlideRender {
    type Output;

    fn render(&self, is_active: bool) -> Self::Output;
}

#[derive(Debug, Clone)]
pub struct SlideEntry<R> {
    id: SlideId,
    renderer: R,
}

impl<R> SlideEntry<R> {
    pub fn id(&self) -> &SlideId {
        &self.id
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

/// Non-empty, presentation-ordered slides with unique ids.
#[derive(Debug, Clone)]
pub struct SlideList<R> {
    entries: Vec<SlideEntry<R>>,
}

impl<R> SlideList<R> {
    pub fn new(entries: impl IntoIterator<Item = (SlideId, R)>) -> Result<Self, DeckError> {
        let entries: Vec<SlideEntry<R>> = entries
            .into_iter()
            .map(|(id, renderer)| SlideEntry { id, renderer })
            .collect();

        validate_slide_ids(entries.iter().map(|entry| &entry.id))?;

        Ok(Self { entries })
    }

    pub fn from_manifest<F>(manifest: &DeckManifest, mut build: F) -> Result<Self, DeckError>
    where
        F: FnMut(&SlideDescriptor) -> R,
    {
        Self::new(
            manifest
                .slides
                .iter()
                .map(|descriptor| (descriptor.id.clone(), build(descriptor))),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.entries.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, index: usize) -> Option<&SlideEntry<R>> {
        self.entries.get(index)
    }

    #[cfg(test)]
    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label(&'static str);

    impl SlideRender for Label {
        type Output = String;

        fn render(&self, is_active: bool) -> String {
            format!("{}:{is_active}", self.0)
        }
    }

    #[test]
    fn keeps_presentation_order() {
        let list = SlideList::new([
            (SlideId::from("intro"), Label("intro")),
            (SlideId::from("ask"), Label("ask")),
        ])
        .expect("slides");
        assert_eq!(list.len(), 2);
        assert_eq!(list.position_of("ask"), Some(1));
        assert_eq!(
            list.get(1).map(|entry| entry.renderer().render(true)),
            Some("ask:true".to_string())
        );
    }

    #[test]
    fn rejects_empty_and_duplicate_lists() {
        let empty: Vec<(SlideId, Label)> = Vec::new();
        assert!(matches!(SlideList::new(empty), Err(DeckError::EmptyDeck)));

        let dupes = SlideList::new([
            (SlideId::from("intro"), Label("a")),
            (SlideId::from("intro"), Label("b")),
        ]);
        assert!(matches!(dupes, Err(DeckError::DuplicateSlideId(id)) if id == "intro"));
    }

    #[test]
    fn builds_from_builtin_manifest() {
        let manifest = DeckManifest::builtin().expect("builtin deck");
        let list = SlideList::from_manifest(&manifest, |descriptor| descriptor.title.clone())
            .expect("slides");
        assert_eq!(list.count().get(), 15);
        assert_eq!(list.position_of("thankyou"), Some(14));
    }
}
