//! Backend capability traits
//!
//! The interface the core requires from a native capture engine. Platform
//! backends (DXGI desktop duplication, ScreenCaptureKit, XCB shared
//! memory, ...) implement these uniformly; the core itself carries no
//! platform-specific logic. The in-tree [`SimBackend`](crate::SimBackend)
//! is the reference implementation.

use crate::CaptureResult;

/// Outcome of a single non-blocking poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// A new frame is mapped and readable via [`NativeSession::frame_bytes`]
    Ready,
    /// No new frame yet; the caller retries later
    WouldBlock,
}

/// Entry point into a native capture engine
pub trait CaptureBackend: Send + Sync {
    /// Enumerate the displays known to the engine
    fn displays(&self) -> CaptureResult<Vec<Box<dyn NativeDisplay>>>;

    /// The primary display of the system
    fn primary(&self) -> CaptureResult<Box<dyn NativeDisplay>>;

    /// Enable process-wide DPI awareness
    ///
    /// Platforms without the concept report success without doing
    /// anything.
    fn set_dpi_aware(&self) -> bool {
        true
    }
}

/// A display handle owned by the native engine
///
/// Implementations release the native resource on drop; a handle consumed
/// by [`open`](NativeDisplay::open) has transferred that ownership to the
/// session and is gone.
pub trait NativeDisplay: Send {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Open a capture session, consuming the display handle
    fn open(self: Box<Self>) -> CaptureResult<Box<dyn NativeSession>>;
}

/// An open native capture session
pub trait NativeSession: Send {
    /// Width of the captured surface
    fn width(&self) -> u32;

    /// Height of the captured surface
    fn height(&self) -> u32;

    /// Single non-blocking check for a new frame; must never block beyond
    /// the engine's own readiness test
    fn poll(&mut self) -> CaptureResult<PollStatus>;

    /// The frame mapped by the last [`Ready`](PollStatus::Ready) poll
    ///
    /// Valid only until the next `poll` or `close`: the engine is free to
    /// reuse the buffer as soon as it is asked again.
    fn frame_bytes(&self) -> &[u8];

    /// Release the native session; called at most once
    fn close(&mut self);
}
