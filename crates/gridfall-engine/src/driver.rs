//! Per-iteration frame driving.
//!
//! [`FrameDriver`] owns all of the loop's mutable state (pattern phase,
//! frame buffer, FPS window, pending resize) and is advanced by exclusive
//! reference once per iteration. The surrounding event loop only feeds it
//! resize events and timestamps.

use std::time::Instant;

use thiserror::Error;

use crate::backend::{BackendError, PresentBackend, PresentError};
use crate::coords::Dimensions;
use crate::pattern::{GridPattern, PixelBuffer};
use crate::scale::{self, FitError};
use crate::time::{FpsCounter, ResizeDebouncer};

/// What a single driver step did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StepOutcome {
    /// A frame was rendered and presented.
    Presented,

    /// The frame was dropped: zero-sized viewport or transient surface
    /// loss. The next iteration retries naturally.
    Skipped,
}

/// Unrecoverable error from a driver step.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Resize(#[from] BackendError),

    #[error(transparent)]
    Present(PresentError),
}

/// Owns the per-iteration state of the demo loop.
pub struct FrameDriver {
    pattern: GridPattern,
    frame: PixelBuffer,
    fps: FpsCounter,
    resize: ResizeDebouncer,
    started: Instant,
}

impl FrameDriver {
    pub fn new(frame_dims: Dimensions, pattern: GridPattern, now: Instant) -> Self {
        Self {
            pattern,
            frame: PixelBuffer::new(frame_dims),
            fps: FpsCounter::new(now),
            resize: ResizeDebouncer::new(),
            started: now,
        }
    }

    /// Feeds a viewport resize event into the debouncer.
    ///
    /// The actual surface reallocation happens in a later [`step`], once the
    /// gesture has gone quiet.
    ///
    /// [`step`]: FrameDriver::step
    pub fn handle_resize(&mut self, dims: Dimensions, now: Instant) {
        self.resize.record(dims, now);
    }

    /// Runs one loop iteration: applies a due resize, regenerates the
    /// pattern, fits it to the viewport, and presents.
    pub fn step<B: PresentBackend>(
        &mut self,
        backend: &mut B,
        now: Instant,
    ) -> Result<StepOutcome, StepError> {
        if let Some(dims) = self.resize.take_due(now) {
            log::info!("applying debounced resize: {}x{}", dims.width, dims.height);
            backend.resize(dims)?;
        }

        self.pattern.advance(now.duration_since(self.started));
        self.pattern.fill(&mut self.frame);

        let viewport = backend.viewport();
        if viewport.is_empty() {
            // Minimized windows report a zero-sized drawable.
            return Ok(StepOutcome::Skipped);
        }

        let fit = scale::fit(self.frame.dimensions(), viewport)?;
        match backend.present(&self.frame, fit.target) {
            Ok(()) => {}
            Err(PresentError::Transient) => {
                log::debug!("frame skipped: surface temporarily unavailable");
                return Ok(StepOutcome::Skipped);
            }
            Err(err) => return Err(StepError::Present(err)),
        }

        if let Some(reading) = self.fps.tick(now) {
            log::info!(
                "{:>3.0} fps at {}x{}x32",
                reading.fps,
                viewport.width,
                viewport.height
            );
        }

        Ok(StepOutcome::Presented)
    }
}
