use super::Speed;
use std::time::Duration;
use std::time::Instant;

/// Deadline tracking for the periodic playback tick.
/// Armed while running; the owner fires a tick once `due` and re-arms.
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Cadence {
    pub fn new(speed: Speed) -> Self {
        Self {
            interval: speed.interval(),
            deadline: None,
        }
    }
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }
    pub fn disarm(&mut self) {
        self.deadline = None;
    }
    pub fn armed(&self) -> bool {
        self.deadline.is_some()
    }
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
    pub fn due(&self, now: Instant) -> bool {
        self.deadline.map(|d| now >= d).unwrap_or(false)
    }
    pub fn interval(&self) -> Duration {
        self.interval
    }
    /// Adopts a new interval. An armed timer restarts from `now`
    /// so the next tick comes one new interval later.
    pub fn retune(&mut self, speed: Speed, now: Instant) {
        self.interval = speed.interval();
        if self.armed() {
            self.arm(now);
        }
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new(Speed::default())
    }
}
