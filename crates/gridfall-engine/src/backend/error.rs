use thiserror::Error;

/// Fatal backend failure outside the present path.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to reallocate output surface at {width}x{height}: {reason}")]
    Resize {
        width: u32,
        height: u32,
        reason: String,
    },
}

/// Failure while presenting a frame.
#[derive(Debug, Error)]
pub enum PresentError {
    /// The surface is temporarily unavailable, e.g. mid fullscreen
    /// transition or between a resize event and its debounced reallocation.
    /// The frame is skipped, not retried.
    #[error("output surface temporarily unavailable")]
    Transient,

    /// Unrecoverable presentation failure; the loop must terminate.
    #[error("presentation failed: {0}")]
    Fatal(String),
}
