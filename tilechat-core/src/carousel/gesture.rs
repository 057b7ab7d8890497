//! Debounced wheel/swipe interpretation

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingWheel {
    delta_x: f32,
    delta_y: f32,
    deadline: Instant,
}

/// Collapses a burst of wheel events into one swipe decision.
///
/// Each event replaces the pending one and pushes the deadline out; only the
/// last event of a burst is evaluated once the burst has been quiet for the
/// debounce window.
#[derive(Debug, Clone)]
pub struct GestureInput {
    threshold: f32,
    debounce: Duration,
    pending: Option<PendingWheel>,
}

impl GestureInput {
    pub fn new(threshold: f32, debounce: Duration) -> Self {
        Self {
            threshold: threshold.abs(),
            debounce,
            pending: None,
        }
    }

    /// Record a wheel event; returns the evaluation deadline.
    pub fn on_wheel(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        now: Instant,
    ) -> Instant {
        let deadline = now + self.debounce;
        self.pending = Some(PendingWheel {
            delta_x,
            delta_y,
            deadline,
        });
        deadline
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Evaluate the pending event once its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<SwipeDirection> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        classify(pending.delta_x, pending.delta_y, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// A predominantly horizontal delta beyond `threshold` is a swipe.
pub fn classify(
    delta_x: f32,
    delta_y: f32,
    threshold: f32,
) -> Option<SwipeDirection> {
    if delta_x.abs() <= delta_y.abs() {
        return None;
    }
    if delta_x > threshold {
        Some(SwipeDirection::Forward)
    } else if delta_x < -threshold {
        Some(SwipeDirection::Backward)
    } else {
        None
    }
}
