//! Step clock configuration.

use std::time::Duration;

/// Clock configuration for a paced driver.
///
/// The machine has no timing of its own. A driver that wants a steady rate
/// describes it here and sleeps for [`MasterClock::period`] between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterClock {
    /// Steps per second. Zero means unpaced.
    pub frequency_hz: u64,
}

impl MasterClock {
    #[must_use]
    pub const fn new(frequency_hz: u64) -> Self {
        Self { frequency_hz }
    }

    /// Time between two steps, or `Duration::ZERO` for an unpaced clock.
    #[must_use]
    pub const fn period(&self) -> Duration {
        if self.frequency_hz == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(1_000_000_000 / self.frequency_hz)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_divides_one_second() {
        assert_eq!(MasterClock::new(10).period(), Duration::from_millis(100));
        assert_eq!(MasterClock::new(1).period(), Duration::from_secs(1));
    }

    #[test]
    fn zero_frequency_is_unpaced() {
        assert_eq!(MasterClock::new(0).period(), Duration::ZERO);
    }
}
