//! Auto-hide state for the deck's top navigation bar.

use tracing::debug;

use crate::{config::RevealPolicy, schedule::DeferredTask};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarOptions {
    pub hide_after_ms: u64,
    pub reveal_policy: RevealPolicy,
    pub pin_on_first_slide: bool,
}

#[derive(Debug, Clone)]
pub struct NavbarVisibility {
    hidden: bool,
    on_first_slide: bool,
    hide_task: DeferredTask,
    options: NavbarOptions,
}

impl NavbarVisibility {
    /// Starts visible with no countdown; only slide changes arm the timer.
    pub fn new(options: NavbarOptions, current_index: usize) -> Self {
        Self {
            hidden: false,
            on_first_slide: current_index == 0,
            hide_task: DeferredTask::idle(),
            options,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn hide_deadline_ms(&self) -> Option<u64> {
        self.hide_task.deadline_ms()
    }

    pub fn on_index_changed(&mut self, new_index: usize, now_ms: u64) {
        self.on_first_slide = new_index == 0;
        if self.is_pinned() {
            self.hide_task.cancel();
            self.hidden = false;
            debug!("navbar: pinned on first slide");
            return;
        }

        self.hide_task.arm(now_ms, self.options.hide_after_ms);
        debug!(
            slide = new_index,
            deadline_ms = now_ms.saturating_add(self.options.hide_after_ms),
            "navbar: hide countdown armed"
        );
    }

    /// Pointer entered the reveal strip or the navbar itself.
    pub fn reveal(&mut self, now_ms: u64) -> bool {
        let was_hidden = self.hidden;
        self.hidden = false;

        match self.options.reveal_policy {
            RevealPolicy::HoldUntilNavigate => {
                if self.hide_task.cancel() {
                    debug!("navbar: reveal held, countdown cancelled");
                }
            }
            RevealPolicy::RestartCountdown => {
                if !self.is_pinned() {
                    self.hide_task.arm(now_ms, self.options.hide_after_ms);
                }
            }
        }

        was_hidden
    }

    /// Fires a due countdown. Returns true when the navbar just became hidden.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.hide_task.poll(now_ms) {
            return false;
        }
        let changed = !self.hidden;
        self.hidden = true;
        debug!(now_ms, "navbar: hidden by countdown");
        changed
    }

    pub fn cancel(&mut self) {
        if self.hide_task.cancel() {
            debug!("navbar: pending countdown cancelled");
        }
    }

    fn is_pinned(&self) -> bool {
        self.on_first_slide && self.options.pin_on_first_slide
    }
}

#[cfg(test)]
#[path = "tests/navbar_tests.rs"]
mod tests;
