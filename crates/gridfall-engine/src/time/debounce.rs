use std::time::{Duration, Instant};

use crate::coords::Dimensions;

/// Default quiescence window.
///
/// Interactive drag-resizing delivers events many times per second, and
/// reallocating the output surface for each one is both expensive and
/// visibly jittery. 200ms collapses a whole gesture into one reallocation
/// while staying under the ~300ms threshold humans read as lag.
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(200);

#[derive(Debug, Copy, Clone)]
struct PendingResize {
    dims: Dimensions,
    requested_at: Instant,
}

/// Debouncer for viewport resize requests.
///
/// Resize events overwrite any pending request unconditionally: the latest
/// request always wins and intermediate sizes are never queued. A request
/// becomes due once the quiescence window passes with no newer event; taking
/// it returns the debouncer to idle until the next event.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    pending: Option<PendingResize>,
    quiet_window: Duration,
}

impl ResizeDebouncer {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_QUIET_WINDOW)
    }

    pub fn with_window(quiet_window: Duration) -> Self {
        Self {
            pending: None,
            quiet_window,
        }
    }

    /// Records a resize event, replacing any pending request.
    pub fn record(&mut self, dims: Dimensions, now: Instant) {
        self.pending = Some(PendingResize {
            dims,
            requested_at: now,
        });
    }

    /// True iff a pending request has gone quiet for the full window.
    pub fn is_due(&self, now: Instant) -> bool {
        self.pending
            .is_some_and(|p| now.saturating_duration_since(p.requested_at) >= self.quiet_window)
    }

    /// Takes the pending request if due, marking it applied.
    ///
    /// Returns `None` while idle or while the request is still settling.
    pub fn take_due(&mut self, now: Instant) -> Option<Dimensions> {
        if self.is_due(now) {
            self.pending.take().map(|p| p.dims)
        } else {
            None
        }
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn idle_is_never_due() {
        let debouncer = ResizeDebouncer::new();
        assert!(!debouncer.is_due(Instant::now()));
    }

    #[test]
    fn burst_collapses_to_one_apply_with_the_last_size() {
        let t0 = Instant::now();
        let mut debouncer = ResizeDebouncer::new();

        // A drag gesture: many events inside one quiescence window.
        debouncer.record(Dimensions::new(900, 700), t0);
        debouncer.record(Dimensions::new(950, 720), t0 + ms(50));
        debouncer.record(Dimensions::new(1000, 740), t0 + ms(100));
        debouncer.record(Dimensions::new(1100, 750), t0 + ms(150));

        // Not due until 200ms after the *last* event.
        assert_eq!(debouncer.take_due(t0 + ms(349)), None);

        assert_eq!(
            debouncer.take_due(t0 + ms(350)),
            Some(Dimensions::new(1100, 750))
        );

        // Applied: idle again.
        assert_eq!(debouncer.take_due(t0 + ms(1000)), None);
    }

    #[test]
    fn events_spaced_past_the_window_apply_separately() {
        let t0 = Instant::now();
        let mut debouncer = ResizeDebouncer::new();

        debouncer.record(Dimensions::new(640, 480), t0);
        assert_eq!(
            debouncer.take_due(t0 + ms(210)),
            Some(Dimensions::new(640, 480))
        );

        debouncer.record(Dimensions::new(1280, 960), t0 + ms(250));
        assert_eq!(debouncer.take_due(t0 + ms(260)), None);
        assert_eq!(
            debouncer.take_due(t0 + ms(460)),
            Some(Dimensions::new(1280, 960))
        );
    }

    #[test]
    fn newer_event_restarts_the_quiet_window() {
        let t0 = Instant::now();
        let mut debouncer = ResizeDebouncer::new();

        debouncer.record(Dimensions::new(800, 600), t0);
        debouncer.record(Dimensions::new(820, 610), t0 + ms(190));

        // 200ms after the first event but only 10ms after the second.
        assert!(!debouncer.is_due(t0 + ms(200)));
        assert!(debouncer.is_due(t0 + ms(390)));
    }

    #[test]
    fn custom_window_is_honored() {
        let t0 = Instant::now();
        let mut debouncer = ResizeDebouncer::with_window(ms(50));

        debouncer.record(Dimensions::new(320, 240), t0);
        assert_eq!(debouncer.take_due(t0 + ms(49)), None);
        assert_eq!(
            debouncer.take_due(t0 + ms(50)),
            Some(Dimensions::new(320, 240))
        );
    }
}
