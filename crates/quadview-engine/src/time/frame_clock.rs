use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so that camera movement stays sane when the process
/// is stalled (debugger, window drag on some platforms, minimize) or when two
/// redraws land back to back.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline, e.g. after resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_clamped_to_minimum() {
        let mut clock = FrameClock::new();
        // Two immediate ticks; the second delta is below the minimum clamp.
        clock.tick();
        let ft = clock.tick();
        assert!(ft.dt >= 0.0001);
    }

    #[test]
    fn dt_is_clamped_to_maximum() {
        let mut clock = FrameClock::with_clamps(
            Duration::from_micros(100),
            Duration::from_millis(10),
        );
        clock.tick();
        std::thread::sleep(Duration::from_millis(30));
        let ft = clock.tick();
        assert!(ft.dt <= 0.010 + f32::EPSILON);
    }

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
    }
}
