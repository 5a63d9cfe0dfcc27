use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use shared::{domain::SlideId, protocol::KeyInput};
use tracing::debug;

use crate::{
    config::Settings,
    navbar::{NavbarOptions, NavbarVisibility},
    slides::{SlideList, SlideRender},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorOptions {
    pub counter_on_first_slide: bool,
    pub window_radius: usize,
    pub navbar: NavbarOptions,
}

impl From<&Settings> for NavigatorOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            counter_on_first_slide: settings.counter_on_first_slide,
            window_radius: settings.render_window_radius,
            navbar: NavbarOptions {
                hide_after_ms: settings.navbar_hide_ms,
                reveal_policy: settings.reveal_policy,
                pin_on_first_slide: settings.pin_navbar_on_first_slide,
            },
        }
    }
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub action: Option<NavAction>,
    pub changed: bool,
    pub prevent_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlidePosition {
    Before,
    Active,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSlot {
    pub index: usize,
    pub position: SlidePosition,
}

impl WindowSlot {
    pub fn is_active(&self) -> bool {
        self.position == SlidePosition::Active
    }
}

#[derive(Debug, Clone)]
pub struct RenderedSlide<O> {
    pub index: usize,
    pub id: SlideId,
    pub position: SlidePosition,
    pub output: O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideCounter {
    pub current: usize,
    pub total: usize,
}

impl SlideCounter {
    pub fn label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorSnapshot {
    pub current_index: usize,
    pub slide_count: usize,
    pub navbar_hidden: bool,
    pub counter: Option<SlideCounter>,
    pub hide_deadline_ms: Option<u64>,
}

/// Owns the active slide index and the navbar auto-hide state.
#[derive(Debug, Clone)]
pub struct DeckNavigator {
    current_index: usize,
    slide_count: NonZeroUsize,
    navbar: NavbarVisibility,
    options: NavigatorOptions,
}

impl DeckNavigator {
    pub fn new(slide_count: NonZeroUsize, options: NavigatorOptions) -> Self {
        debug!(slide_count = slide_count.get(), "navigator: mounted");
        Self {
            current_index: 0,
            slide_count,
            navbar: NavbarVisibility::new(options.navbar, 0),
            options,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count.get()
    }

    pub fn navbar_hidden(&self) -> bool {
        self.navbar.is_hidden()
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.slide_count.get()
    }

    pub fn next(&mut self, now_ms: u64) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.move_to(self.current_index + 1, now_ms);
        true
    }

    pub fn previous(&mut self, now_ms: u64) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.move_to(self.current_index - 1, now_ms);
        true
    }

    /// Out-of-range targets are ignored and reported as `false`.
    pub fn go_to(&mut self, index: usize, now_ms: u64) -> bool {
        if index >= self.slide_count.get() {
            debug!(
                index,
                slide_count = self.slide_count.get(),
                "navigator: go_to out of range ignored"
            );
            return false;
        }
        if index == self.current_index {
            return false;
        }
        self.move_to(index, now_ms);
        true
    }

    pub fn handle_key(&mut self, key: KeyInput, now_ms: u64) -> KeyOutcome {
        let action = match key {
            KeyInput::ArrowRight | KeyInput::Space => NavAction::Next,
            KeyInput::ArrowLeft => NavAction::Previous,
            KeyInput::Other => {
                return KeyOutcome {
                    action: None,
                    changed: false,
                    prevent_default: false,
                }
            }
        };

        let changed = match action {
            NavAction::Next => self.next(now_ms),
            NavAction::Previous => self.previous(now_ms),
        };

        KeyOutcome {
            action: Some(action),
            changed,
            prevent_default: true,
        }
    }

    pub fn reveal_navbar(&mut self, now_ms: u64) -> bool {
        self.navbar.reveal(now_ms)
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.navbar.tick(now_ms)
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.navbar.hide_deadline_ms()
    }

    pub fn counter(&self) -> Option<SlideCounter> {
        if self.current_index == 0 && !self.options.counter_on_first_slide {
            return None;
        }
        Some(SlideCounter {
            current: self.current_index + 1,
            total: self.slide_count.get(),
        })
    }

    /// Slides within `window_radius` of the current one, in presentation order.
    pub fn window(&self) -> impl Iterator<Item = WindowSlot> {
        let radius = self.options.window_radius;
        let current = self.current_index;
        let start = current.saturating_sub(radius);
        let end = current
            .saturating_add(radius)
            .min(self.slide_count.get() - 1);

        (start..=end).map(move |index| WindowSlot {
            index,
            position: if index < current {
                SlidePosition::Before
            } else if index == current {
                SlidePosition::Active
            } else {
                SlidePosition::After
            },
        })
    }

    pub fn render<R: SlideRender>(&self, slides: &SlideList<R>) -> Vec<RenderedSlide<R::Output>> {
        self.window()
            .filter_map(|slot| {
                let entry = slides.get(slot.index)?;
                Some(RenderedSlide {
                    index: slot.index,
                    id: entry.id().clone(),
                    position: slot.position,
                    output: entry.renderer().render(slot.is_active()),
                })
            })
            .collect()
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            current_index: self.current_index,
            slide_count: self.slide_count.get(),
            navbar_hidden: self.navbar.is_hidden(),
            counter: self.counter(),
            hide_deadline_ms: self.navbar.hide_deadline_ms(),
        }
    }

    /// Tears down timed state before the navigator is dropped.
    pub fn unmount(mut self) {
        self.navbar.cancel();
        debug!(
            current_index = self.current_index,
            "navigator: unmounted"
        );
    }

    fn move_to(&mut self, index: usize, now_ms: u64) {
        debug!(
            from = self.current_index,
            to = index,
            slide_count = self.slide_count.get(),
            "navigator: slide changed"
        );
        self.current_index = index;
        self.navbar.on_index_changed(index, now_ms);
    }
}

#[cfg(test)]
#[path = "tests/navigator_tests.rs"]
mod tests;
