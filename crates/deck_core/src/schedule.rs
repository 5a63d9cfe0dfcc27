//! Millisecond clocks and the cancellable single-shot task used for timed UI state.

use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn instant_at(&self, at_ms: u64) -> Instant {
        self.origin + Duration::from_millis(at_ms)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock. Clones share the same time source.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }

    #[cfg(test)]
    pub(crate) fn advance(&self, delta_ms: u64) -> u64 {
        let next = self.now_ms.get().saturating_add(delta_ms);
        self.now_ms.set(next);
        next
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeferredTask {
    deadline_ms: Option<u64>,
}

impl DeferredTask {
    pub const fn idle() -> Self {
        Self { deadline_ms: None }
    }

    /// Re-arming replaces any pending deadline.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    #[cfg(test)]
    pub(crate) fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.deadline_ms
            .map(|deadline| deadline.saturating_sub(now_ms))
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_fires_once_at_deadline() {
        let mut task = DeferredTask::idle();
        task.arm(100, 2_000);
        assert!(!task.poll(2_099));
        assert_eq!(task.remaining_ms(2_099), Some(1));
        assert!(task.poll(2_100));
        assert!(!task.poll(5_000));
        assert!(!task.is_pending());
    }

    #[test]
    fn rearm_supersedes_previous_deadline() {
        let mut task = DeferredTask::idle();
        task.arm(0, 2_000);
        task.arm(1_500, 2_000);
        assert!(!task.poll(2_000));
        assert_eq!(task.deadline_ms(), Some(3_500));
        assert!(task.poll(3_500));
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut task = DeferredTask::idle();
        task.arm(0, 10);
        assert!(task.cancel());
        assert!(!task.cancel());
        assert!(!task.poll(u64::MAX));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(5);
        let handle = clock.clone();
        handle.advance(45);
        assert_eq!(clock.now_ms(), 50);
        clock.set(7);
        assert_eq!(handle.now_ms(), 7);
    }
}
