//! Auto-advance controller
//!
//! Two phases: `Stopped` and `Running`. The controller runs while the play
//! flag is set *and* the viewer's guard holds (on screen, more than one item
//! in the window). While running it carries the deadline of the next tick;
//! the host sleeps until that instant and calls
//! [`PlaybackController::take_due`].

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Stopped,
    Running { next_tick_at: Instant },
}

#[derive(Debug, Clone)]
pub struct PlaybackController {
    phase: PlaybackPhase,
    is_playing: bool,
    interval: Duration,
}

impl PlaybackController {
    pub fn new(interval: Duration, autoplay: bool) -> Self {
        Self {
            phase: PlaybackPhase::Stopped,
            is_playing: autoplay,
            // A zero period would spin the host loop.
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, PlaybackPhase::Running { .. })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_tick_at(&self) -> Option<Instant> {
        match self.phase {
            PlaybackPhase::Running { next_tick_at } => Some(next_tick_at),
            PlaybackPhase::Stopped => None,
        }
    }

    /// Re-evaluate the run guard. `conditions` is the viewer-side half of the
    /// guard (visible and more than one item). Returns true on a phase change.
    pub fn sync(&mut self, conditions: bool, now: Instant) -> bool {
        let guard = self.is_playing && conditions;
        match (self.phase, guard) {
            (PlaybackPhase::Stopped, true) => {
                self.phase = PlaybackPhase::Running {
                    next_tick_at: now + self.interval,
                };
                log::debug!("Playback running, tick every {:?}", self.interval);
                true
            }
            (PlaybackPhase::Running { .. }, false) => {
                self.phase = PlaybackPhase::Stopped;
                log::debug!("Playback stopped");
                true
            }
            _ => false,
        }
    }

    /// Start a fresh period from `now` if running.
    pub fn restart(&mut self, now: Instant) {
        if let PlaybackPhase::Running { next_tick_at } = &mut self.phase {
            *next_tick_at = now + self.interval;
        }
    }

    /// Change the play flag. Returns true if it changed; the caller must
    /// [`sync`](Self::sync) afterwards.
    pub fn set_playing(&mut self, playing: bool) -> bool {
        let changed = self.is_playing != playing;
        self.is_playing = playing;
        changed
    }

    /// Manual interaction: clear the play flag and cancel the pending tick.
    /// Returns true if playback had been on.
    pub fn pause(&mut self) -> bool {
        let was_playing = self.is_playing;
        self.is_playing = false;
        self.phase = PlaybackPhase::Stopped;
        was_playing
    }

    /// Cancel the pending tick without touching the play flag.
    pub fn stop(&mut self) {
        self.phase = PlaybackPhase::Stopped;
    }

    /// Consume a due tick and schedule the next one. At most one tick fires
    /// per call; after a stall the next deadline is one period from `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        let PlaybackPhase::Running { next_tick_at } = &mut self.phase else {
            return false;
        };
        if now < *next_tick_at {
            return false;
        }
        let scheduled = *next_tick_at + self.interval;
        *next_tick_at = if scheduled > now {
            scheduled
        } else {
            now + self.interval
        };
        true
    }
}

/// Index after one auto-advance step.
///
/// At the last index the step holds when more items can be loaded, so the
/// load-more affordance stays on screen, and wraps to 0 otherwise.
pub fn advance(current: usize, window_size: usize, has_more: bool) -> usize {
    if window_size == 0 {
        return 0;
    }
    if current + 1 < window_size {
        current + 1
    } else if has_more {
        current.min(window_size - 1)
    } else {
        0
    }
}
