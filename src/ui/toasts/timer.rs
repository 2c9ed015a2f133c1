// SPDX-License-Identifier: MPL-2.0
//! One-shot auto-dismiss timer owned by a mounted toast.
//!
//! The timer is a plain deadline checked on every tick. Whoever owns it
//! decides its lifetime: once dropped it can no longer fire, which is how a
//! toast unmounted by any path cancels its pending dismissal.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    started_at: Instant,
    duration: Duration,
}

impl DismissTimer {
    /// Arms a timer at `now`.
    #[must_use]
    pub fn start(duration: Duration, now: Instant) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    /// Instant at which the timer fires, or `None` if it lies beyond what
    /// `Instant` can represent.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.started_at.checked_add(self.duration)
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_at_deadline() {
        let start = Instant::now();
        let timer = DismissTimer::start(Duration::from_millis(1000), start);

        assert!(!timer.is_due(start + Duration::from_millis(999)));
        assert!(timer.is_due(start + Duration::from_millis(1000)));
        assert!(timer.is_due(start + Duration::from_millis(5000)));
    }

    #[test]
    fn unrepresentable_deadline_never_fires() {
        let start = Instant::now();
        let timer = DismissTimer::start(Duration::MAX, start);

        assert_eq!(timer.deadline(), None);
        assert!(!timer.is_due(start + Duration::from_millis(100)));
    }
}
