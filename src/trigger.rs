//! Schmitt Trigger
//!
//! Rising-edge detection with hysteresis, used for hard sync.

/// Sync input falls back low at or below this voltage.
pub const SYNC_LOW_THRESHOLD: f64 = 0.1;

/// Sync input fires once it reaches this voltage from the low state.
pub const SYNC_HIGH_THRESHOLD: f64 = 1.0;

/// Edge detector with separate low and high thresholds.
///
/// Starts in the high state so that a signal which is already high when
/// the detector is created has to fall low before it can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchmittTrigger {
    high: bool,
}

impl SchmittTrigger {
    pub fn new() -> Self {
        Self { high: true }
    }

    /// Feed one sample; returns true only on the low-to-high transition.
    #[inline]
    pub fn process(&mut self, input: f64, low: f64, high: f64) -> bool {
        if self.high {
            if input <= low {
                self.high = false;
            }
            false
        } else if input >= high {
            self.high = true;
            true
        } else {
            false
        }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn reset(&mut self) {
        self.high = true;
    }
}

impl Default for SchmittTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(trigger: &mut SchmittTrigger, samples: &[f64]) -> Vec<bool> {
        samples
            .iter()
            .map(|&v| trigger.process(v, SYNC_LOW_THRESHOLD, SYNC_HIGH_THRESHOLD))
            .collect()
    }

    #[test]
    fn test_fires_once_per_rising_edge() {
        let mut trig = SchmittTrigger::new();
        let fired = feed(&mut trig, &[0.0, 5.0, 5.0, 5.0, 0.0, 5.0]);
        assert_eq!(fired, vec![false, true, false, false, false, true]);
    }

    #[test]
    fn test_initially_high_input_does_not_fire() {
        let mut trig = SchmittTrigger::new();
        assert!(!trig.process(5.0, SYNC_LOW_THRESHOLD, SYNC_HIGH_THRESHOLD));
        assert!(trig.is_high());
    }

    #[test]
    fn test_hysteresis_rejects_chatter() {
        let mut trig = SchmittTrigger::new();
        // Arm, then cross high once
        let fired = feed(&mut trig, &[0.0, 1.2]);
        assert_eq!(fired, vec![false, true]);

        // Wobbling between the thresholds never re-arms
        let fired = feed(&mut trig, &[0.5, 0.9, 0.2, 1.5, 0.11, 2.0]);
        assert!(fired.iter().all(|&f| !f));

        // Dropping to the low threshold re-arms
        let fired = feed(&mut trig, &[0.1, 1.0]);
        assert_eq!(fired, vec![false, true]);
    }

    #[test]
    fn test_below_high_threshold_never_fires() {
        let mut trig = SchmittTrigger::new();
        let fired = feed(&mut trig, &[0.0, 0.5, 0.99, 0.0, 0.99]);
        assert!(fired.iter().all(|&f| !f));
        assert!(!trig.is_high());
    }

    #[test]
    fn test_reset_restores_high_state() {
        let mut trig = SchmittTrigger::new();
        feed(&mut trig, &[0.0]);
        assert!(!trig.is_high());
        trig.reset();
        assert!(trig.is_high());
        assert!(!trig.process(5.0, SYNC_LOW_THRESHOLD, SYNC_HIGH_THRESHOLD));
    }
}
