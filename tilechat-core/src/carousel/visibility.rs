//! On-screen visibility gate

/// Tracks whether the viewer is on screen.
///
/// Hosts that cannot observe intersection report it once through
/// [`VisibilityGate::mark_unsupported`]; the gate then stays visible so
/// playback is never stuck paused.
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    threshold: f32,
    visible: bool,
    subscribed: bool,
    supported: bool,
}

impl VisibilityGate {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: true,
            subscribed: true,
            supported: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feed an observed intersection ratio (0.0..=1.0). Returns true when the
    /// visible flag flipped.
    pub fn on_intersection(&mut self, ratio: f32) -> bool {
        if !self.subscribed || !self.supported {
            return false;
        }
        let ratio = if ratio.is_nan() { 0.0 } else { ratio };
        let visible = if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        };
        self.set_visible(visible)
    }

    /// Fail open. Returns true when the visible flag flipped.
    pub fn mark_unsupported(&mut self) -> bool {
        self.supported = false;
        self.set_visible(true)
    }

    /// Drop the subscription; later observations are ignored.
    pub fn disconnect(&mut self) {
        self.subscribed = false;
    }

    fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        if changed {
            log::debug!("Carousel visibility changed: visible={visible}");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_splits_visible_and_hidden() {
        let mut gate = VisibilityGate::new(0.1);
        assert!(gate.is_visible());
        assert!(gate.on_intersection(0.05));
        assert!(!gate.is_visible());
        assert!(!gate.on_intersection(0.0));
        assert!(gate.on_intersection(0.1));
        assert!(gate.is_visible());
    }

    #[test]
    fn unsupported_host_fails_open() {
        let mut gate = VisibilityGate::new(0.1);
        gate.on_intersection(0.0);
        assert!(gate.mark_unsupported());
        assert!(gate.is_visible());
        assert!(!gate.on_intersection(0.0));
        assert!(gate.is_visible());
    }

    #[test]
    fn disconnected_gate_ignores_observations() {
        let mut gate = VisibilityGate::new(0.1);
        gate.disconnect();
        assert!(!gate.on_intersection(0.0));
        assert!(gate.is_visible());
    }

    #[test]
    fn zero_threshold_needs_any_overlap() {
        let mut gate = VisibilityGate::new(0.0);
        assert!(gate.on_intersection(0.0));
        assert!(gate.on_intersection(0.01));
    }
}
