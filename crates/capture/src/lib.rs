//! Cross-platform screen capture core
//!
//! Enumerate displays, open a capture session against one, and poll it for
//! raw BGRA frames without blocking. Platform engines (DXGI desktop
//! duplication, ScreenCaptureKit, XCB shared memory, ...) plug in
//! underneath through the [`CaptureBackend`] capability traits; the
//! [`SimBackend`] software backend ships in-tree for tests and headless
//! use.
//!
//! A [`Display`] is consumed, by value, to open a [`Capturer`]; each
//! successful poll yields a [`Frame`] view that borrows the session and is
//! invalidated by the next poll. Copy out through
//! [`Frame::to_frame_buffer`] or [`Frame::to_rgba`] to keep pixels longer.
//!
//! ```
//! use capture::{Capturer, Display, SimBackend};
//!
//! let backend = SimBackend::default();
//! let display = Display::primary(&backend)?;
//! let mut capturer = Capturer::new(display)?;
//!
//! loop {
//!     match capturer.poll_frame()? {
//!         Some(frame) => {
//!             let rgba = frame.to_rgba();
//!             assert_eq!(rgba.bytes().len(), frame.stride() * frame.height() as usize);
//!             break;
//!         }
//!         // No new frame yet; a real caller sleeps for roughly one
//!         // display refresh interval before retrying.
//!         None => continue,
//!     }
//! }
//! # Ok::<(), capture::CaptureError>(())
//! ```

use std::sync::OnceLock;

use tracing::debug;

mod capturer;
mod display;
mod error;
mod frame;
mod sim;
mod traits;

pub use capturer::*;
pub use display::*;
pub use error::*;
pub use frame::*;
pub use sim::*;
pub use traits::*;

pub use raster::{FrameBuffer, PixelFormat, PixelSource, Rgba, bgra_to_rgba};

static DPI_AWARE: OnceLock<bool> = OnceLock::new();

/// Enable process-wide DPI awareness
///
/// When DPI aware, display and session dimensions report the full pixel
/// resolution of the screen instead of the scaled size. One-shot: the
/// first call asks the backend and the outcome is latched for the rest of
/// the process; later calls return the latched result without touching the
/// backend again. There is no teardown.
pub fn make_dpi_aware(backend: &dyn CaptureBackend) -> CaptureResult<()> {
    let aware = *DPI_AWARE.get_or_init(|| {
        let ok = backend.set_dpi_aware();
        debug!(ok, "set process DPI awareness");
        ok
    });
    if aware {
        Ok(())
    } else {
        Err(CaptureError::DpiAwareFailed)
    }
}
