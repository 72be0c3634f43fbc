//! Capture error types

use thiserror::Error;

/// Recoverable failures reported by the native capture engine.
///
/// Would-block is not an error (polling returns `Ok(None)`), and contract
/// violations such as polling a closed session panic instead of returning
/// a value.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("display enumeration failed: {0}")]
    EnumerateFailed(String),

    #[error("no displays found")]
    NoDisplays,

    #[error("capture session open failed: {0}")]
    OpenFailed(String),

    #[error("frame poll failed: {0}")]
    PollFailed(String),

    #[error("failed to enable process DPI awareness")]
    DpiAwareFailed,
}

pub type CaptureResult<T> = Result<T, CaptureError>;
