//! Capture sessions and the frame polling protocol

use tracing::{debug, info};

use crate::{CaptureResult, Display, Frame, NativeSession, PollStatus};

/// An open capture session against one display
///
/// Created by consuming a [`Display`]; owns the native session resource
/// until [`close`](Capturer::close) or drop. Capture dimensions are fixed
/// for the session's lifetime and cached at open time, so reading them per
/// frame is free.
pub struct Capturer {
    raw: Box<dyn NativeSession>,
    width: u32,
    height: u32,
    closed: bool,
}

impl Capturer {
    /// Open a capture session, consuming the display handle
    ///
    /// On failure the handle has already moved into the failed attempt and
    /// is not reusable.
    ///
    /// ```compile_fail
    /// use capture::{Capturer, Display, SimBackend};
    ///
    /// let backend = SimBackend::default();
    /// let display = Display::primary(&backend).unwrap();
    /// let capturer = Capturer::new(display).unwrap();
    /// display.width(); // error: `display` was moved into the capturer
    /// ```
    pub fn new(display: Display) -> CaptureResult<Capturer> {
        let raw = display.raw.open()?;
        let (width, height) = (raw.width(), raw.height());
        info!(width, height, "opened capture session");
        Ok(Capturer {
            raw,
            width,
            height,
            closed: false,
        })
    }

    /// Width of the captured display
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the captured display
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Single non-blocking check for a new frame
    ///
    /// Returns `Ok(Some(frame))` when the engine has a new frame mapped,
    /// `Ok(None)` when it would have to block — not an error; retry after
    /// a short delay, one display refresh interval is a reasonable
    /// default — and `Err` carrying the engine's message when the poll
    /// failed. A failed poll does not close the session.
    ///
    /// Polling again invalidates the previous [`Frame`]: the view borrows
    /// the session, so holding one across the next call is a compile
    /// error.
    ///
    /// ```compile_fail
    /// use capture::{Capturer, Display, SimBackend};
    ///
    /// let backend = SimBackend::default();
    /// let mut capturer = Capturer::new(Display::primary(&backend).unwrap()).unwrap();
    /// let first = capturer.poll_frame().unwrap();
    /// let second = capturer.poll_frame(); // error: `first` still borrows the capturer
    /// if let Some(frame) = first {
    ///     frame.bytes();
    /// }
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the session has been closed.
    pub fn poll_frame(&mut self) -> CaptureResult<Option<Frame<'_>>> {
        assert!(!self.closed, "poll_frame called on a closed capture session");
        match self.raw.poll()? {
            PollStatus::WouldBlock => Ok(None),
            PollStatus::Ready => Ok(Some(Frame::new(
                self.raw.frame_bytes(),
                self.width,
                self.height,
            ))),
        }
    }

    /// Release the native session resource
    ///
    /// Idempotent; drop calls it as well, so every exit path releases
    /// exactly once. Polling a closed session panics.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.raw.close();
        debug!("closed capture session");
    }
}

impl Drop for Capturer {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for Capturer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capturer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("closed", &self.closed)
            .finish()
    }
}
