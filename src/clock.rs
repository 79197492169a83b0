use std::time::Duration;
use std::time::Instant;

use tracing::debug;

/// Fastest allowed cadence
const MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Slowest allowed cadence
const MAX_INTERVAL: Duration = Duration::from_millis(2_000);

/// Owns the stepping cadence of a session.
///
/// The clock never fires on its own; the driver asks [`Clock::due`] on every
/// pass of its loop and steps the simulation when it answers `true`.
///
/// Start and stop are strict transitions: starting a running clock or
/// stopping a stopped one is a driver bug and panics, rather than being
/// quietly absorbed into an inconsistent play/pause state.
pub struct Clock {
    /// Time between steps
    interval: Duration,

    running: bool,

    /// When the last step was issued, while running
    last: Option<Instant>,
}

impl Clock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
            running: false,
            last: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Begin issuing steps. The first [`Clock::due`] after a start fires
    /// immediately.
    ///
    /// # Panics
    /// If the clock is already running.
    pub fn start(&mut self) {
        assert!(!self.running, "clock started while already running");

        self.running = true;
        self.last = None;

        debug!(interval = ?self.interval, "clock started");
    }

    /// Stop issuing steps. The grid keeps its last-computed generation.
    ///
    /// # Panics
    /// If the clock is already stopped.
    pub fn stop(&mut self) {
        assert!(self.running, "clock stopped while already stopped");

        self.running = false;
        self.last = None;

        debug!("clock stopped");
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Halve the interval, down to [`MIN_INTERVAL`].
    pub fn faster(&mut self) {
        self.interval = (self.interval / 2).max(MIN_INTERVAL);

        debug!(interval = ?self.interval, "cadence changed");
    }

    /// Double the interval, up to [`MAX_INTERVAL`].
    pub fn slower(&mut self) {
        self.interval = (self.interval * 2).min(MAX_INTERVAL);

        debug!(interval = ?self.interval, "cadence changed");
    }

    /// Whether a step is owed at `now`. Records the tick when it is.
    pub fn due(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }

        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);

                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use std::time::Instant;

    use super::Clock;
    use super::MAX_INTERVAL;
    use super::MIN_INTERVAL;

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn stopped_clock_is_never_due() {
        let mut clock = Clock::new(TICK);
        let t = Instant::now();

        assert!(!clock.due(t));
        assert!(!clock.due(t + TICK * 10));
    }

    #[test]
    fn fires_immediately_then_on_interval() {
        let mut clock = Clock::new(TICK);
        let t = Instant::now();

        clock.start();

        assert!(clock.due(t));
        assert!(!clock.due(t + TICK / 2));
        assert!(clock.due(t + TICK));
        assert!(!clock.due(t + TICK + TICK / 2));
    }

    #[test]
    fn toggle_round_trips() {
        let mut clock = Clock::new(TICK);

        clock.toggle();
        assert!(clock.is_running());

        clock.toggle();
        assert!(!clock.is_running());
    }

    #[test]
    #[should_panic(expected = "already running")]
    fn double_start_panics() {
        let mut clock = Clock::new(TICK);

        clock.start();
        clock.start();
    }

    #[test]
    #[should_panic(expected = "already stopped")]
    fn double_stop_panics() {
        let mut clock = Clock::new(TICK);

        clock.stop();
    }

    #[test]
    fn cadence_is_clamped() {
        let mut clock = Clock::new(TICK);

        for _ in 0..16 {
            clock.faster();
        }
        assert_eq!(clock.interval(), MIN_INTERVAL);

        for _ in 0..16 {
            clock.slower();
        }
        assert_eq!(clock.interval(), MAX_INTERVAL);
    }
}
