use std::time::Instant;

/// Emit one reading per second of wall-clock time.
const REPORT_WINDOW_SECS: f64 = 1.0;

/// One frame-rate observation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FpsReading {
    /// Frames per second averaged over the measurement window.
    pub fps: f64,

    /// Frames counted in the window.
    pub frames: u32,

    /// Actual window length in seconds (>= 1, rarely exactly 1).
    pub window_secs: f64,
}

/// Windowed frame counter.
///
/// Counts presented frames and emits one averaged reading per elapsed
/// wall-clock second, then starts a new window. The frame that closes a
/// window is included in that window's count.
///
/// This is the windowed-count policy. The alternative of reporting the
/// instantaneous `1 / frame_time` once per second yields noisier
/// single-frame samples and is intentionally not implemented.
///
/// Measurement is wall-clock, so input polling and the loop's voluntary
/// yield count toward frame time.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
        }
    }

    /// Records one presented frame.
    ///
    /// Returns a reading when the current window is at least
    /// `REPORT_WINDOW_SECS` long, `None` otherwise. Because the window
    /// threshold is strictly positive, a reading's division is always by a
    /// non-zero elapsed time; identical consecutive timestamps simply stay
    /// inside the window.
    pub fn tick(&mut self, now: Instant) -> Option<FpsReading> {
        self.frames += 1;

        let window_secs = now.saturating_duration_since(self.window_start).as_secs_f64();
        if window_secs < REPORT_WINDOW_SECS {
            return None;
        }

        let reading = FpsReading {
            fps: f64::from(self.frames) / window_secs,
            frames: self.frames,
            window_secs,
        };

        self.frames = 0;
        self.window_start = now;
        Some(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn no_reading_inside_the_window() {
        let t0 = Instant::now();
        let mut counter = FpsCounter::new(t0);

        for i in 1..=50 {
            assert_eq!(counter.tick(t0 + Duration::from_millis(i * 10)), None);
        }
    }

    #[test]
    fn reading_after_one_second_averages_the_window() {
        let t0 = Instant::now();
        let mut counter = FpsCounter::new(t0);

        for i in 1..60 {
            assert!(counter.tick(t0 + Duration::from_millis(i * 16)).is_none());
        }

        // Still inside the window at 960ms.
        assert!(counter.tick(t0 + Duration::from_millis(960)).is_none());
        let reading = counter
            .tick(t0 + Duration::from_millis(1008))
            .expect("window crossed");

        assert_eq!(reading.frames, 61);
        assert!((reading.window_secs - 1.008).abs() < 1e-9);
        assert!((reading.fps - 61.0 / 1.008).abs() < 1e-9);
    }

    #[test]
    fn window_resets_after_a_reading() {
        let t0 = Instant::now();
        let mut counter = FpsCounter::new(t0);

        assert!(counter.tick(t0 + Duration::from_millis(1100)).is_some());

        // New window starts at the reading's timestamp.
        assert!(counter.tick(t0 + Duration::from_millis(1500)).is_none());
        let reading = counter
            .tick(t0 + Duration::from_millis(2200))
            .expect("second window crossed");
        assert_eq!(reading.frames, 2);
    }

    #[test]
    fn identical_timestamps_never_divide_by_zero() {
        let t0 = Instant::now();
        let mut counter = FpsCounter::new(t0);

        // Zero elapsed time across many ticks: no panic, no reading.
        for _ in 0..1000 {
            assert_eq!(counter.tick(t0), None);
        }
    }
}
