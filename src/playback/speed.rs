use crate::INTERVAL_FASTEST;
use crate::INTERVAL_SLOWEST;
use crate::SPEED_DEFAULT;
use crate::SPEED_MAX;
use crate::SPEED_MIN;
use std::time::Duration;

/// Speed slider position, clamped to [SPEED_MIN, SPEED_MAX].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u8);

impl Speed {
    /// Tick interval, linear from INTERVAL_SLOWEST at SPEED_MIN
    /// down to INTERVAL_FASTEST at SPEED_MAX.
    pub fn interval(&self) -> Duration {
        let span = (INTERVAL_SLOWEST - INTERVAL_FASTEST) as u128;
        let range = (SPEED_MAX - SPEED_MIN) as u128;
        let above = (self.0 - SPEED_MIN) as u128;
        let scaled = INTERVAL_SLOWEST as u128 * range - span * above;
        Duration::from_micros((scaled * 1000 / range) as u64)
    }
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(SPEED_DEFAULT)
    }
}

impl From<u8> for Speed {
    fn from(value: u8) -> Self {
        Self(value.clamp(SPEED_MIN, SPEED_MAX))
    }
}

impl From<Speed> for u8 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}ms/tick)", self.0, self.interval().as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(Speed::from(100).interval(), Duration::from_millis(100));
        assert_eq!(Speed::from(0).interval(), Duration::from_millis(1000));
    }
    #[test]
    fn interpolates_linearly() {
        assert_eq!(Speed::from(50).interval(), Duration::from_millis(550));
        assert_eq!(Speed::from(1).interval(), Duration::from_millis(991));
        let steps = (0..100)
            .map(|s| Speed::from(s).interval() - Speed::from(s + 1).interval())
            .collect::<Vec<_>>();
        assert!(steps.iter().all(|d| *d == Duration::from_millis(9)));
    }
    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(Speed::from(250).value(), 100);
        assert_eq!(Speed::from(250).interval(), Duration::from_millis(100));
    }
}
