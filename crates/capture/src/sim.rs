//! Deterministic software backend
//!
//! Synthetic displays producing procedurally generated BGRA frames, with
//! configurable row padding, would-block cadence, and failure injection.
//! Drives the capture tests without a real display and serves headless
//! consumers that need the full session protocol.

use crate::{
    CaptureBackend, CaptureError, CaptureResult, NativeDisplay, NativeSession, PollStatus,
};

/// Padding bytes are filled with this sentinel so tests can watch them
/// travel through conversions untouched by the pixel accessors.
pub const PADDING_SENTINEL: u8 = 0xAB;

/// Configuration for one synthetic display
#[derive(Debug, Clone)]
pub struct SimDisplayConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Padding bytes appended to every row
    pub row_padding: usize,
    /// Every n-th poll yields a frame; the rest report would-block
    pub polls_per_frame: u32,
    /// 1-based poll index that fails with a backend error, once
    pub fail_on_poll: Option<u32>,
    /// Refuse to open a session on this display
    pub fail_open: bool,
}

impl SimDisplayConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl Default for SimDisplayConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            row_padding: 0,
            polls_per_frame: 1,
            fail_on_poll: None,
            fail_open: false,
        }
    }
}

/// Software capture backend over a fixed display list
///
/// The first configured display is the primary.
#[derive(Debug, Clone)]
pub struct SimBackend {
    displays: Vec<SimDisplayConfig>,
}

impl SimBackend {
    pub fn new(displays: Vec<SimDisplayConfig>) -> Self {
        Self { displays }
    }
}

impl Default for SimBackend {
    fn default() -> Self {
        Self::new(vec![SimDisplayConfig::default()])
    }
}

impl CaptureBackend for SimBackend {
    fn displays(&self) -> CaptureResult<Vec<Box<dyn NativeDisplay>>> {
        Ok(self
            .displays
            .iter()
            .cloned()
            .map(|config| Box::new(SimDisplay { config }) as Box<dyn NativeDisplay>)
            .collect())
    }

    fn primary(&self) -> CaptureResult<Box<dyn NativeDisplay>> {
        let config = self
            .displays
            .first()
            .cloned()
            .ok_or(CaptureError::NoDisplays)?;
        Ok(Box::new(SimDisplay { config }))
    }
}

struct SimDisplay {
    config: SimDisplayConfig,
}

impl NativeDisplay for SimDisplay {
    fn width(&self) -> u32 {
        self.config.width
    }

    fn height(&self) -> u32 {
        self.config.height
    }

    fn open(self: Box<Self>) -> CaptureResult<Box<dyn NativeSession>> {
        if self.config.fail_open {
            return Err(CaptureError::OpenFailed("simulated open failure".into()));
        }
        let stride = self.config.width as usize * 4 + self.config.row_padding;
        let buf = vec![0u8; stride * self.config.height as usize];
        Ok(Box::new(SimSession {
            config: self.config,
            stride,
            buf,
            polls: 0,
            frames: 0,
        }))
    }
}

struct SimSession {
    config: SimDisplayConfig,
    stride: usize,
    buf: Vec<u8>,
    polls: u32,
    frames: u64,
}

impl SimSession {
    fn render(&mut self) {
        let frame = self.frames as u8;
        let pixels = self.config.width as usize * 4;
        for y in 0..self.config.height as usize {
            let row = &mut self.buf[y * self.stride..(y + 1) * self.stride];
            for x in 0..self.config.width as usize {
                // blue, green, red, alpha
                row[4 * x] = x as u8;
                row[4 * x + 1] = y as u8;
                row[4 * x + 2] = frame;
                row[4 * x + 3] = 0xFF;
            }
            for pad in &mut row[pixels..] {
                *pad = PADDING_SENTINEL;
            }
        }
    }
}

impl NativeSession for SimSession {
    fn width(&self) -> u32 {
        self.config.width
    }

    fn height(&self) -> u32 {
        self.config.height
    }

    fn poll(&mut self) -> CaptureResult<PollStatus> {
        self.polls += 1;
        if self.config.fail_on_poll == Some(self.polls) {
            return Err(CaptureError::PollFailed("simulated poll failure".into()));
        }
        if self.polls % self.config.polls_per_frame.max(1) != 0 {
            return Ok(PollStatus::WouldBlock);
        }
        self.frames += 1;
        self.render();
        Ok(PollStatus::Ready)
    }

    fn frame_bytes(&self) -> &[u8] {
        &self.buf
    }

    fn close(&mut self) {
        self.buf = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn would_block_cadence_matches_configuration() {
        let backend = SimBackend::new(vec![SimDisplayConfig {
            polls_per_frame: 2,
            ..SimDisplayConfig::new(8, 8)
        }]);
        let mut session = backend.primary().unwrap().open().unwrap();
        assert_eq!(session.poll().unwrap(), PollStatus::WouldBlock);
        assert_eq!(session.poll().unwrap(), PollStatus::Ready);
        assert_eq!(session.poll().unwrap(), PollStatus::WouldBlock);
        assert_eq!(session.poll().unwrap(), PollStatus::Ready);
    }

    #[test]
    fn frames_are_deterministic_bgra_with_sentinel_padding() {
        let backend = SimBackend::new(vec![SimDisplayConfig {
            row_padding: 4,
            ..SimDisplayConfig::new(4, 2)
        }]);
        let mut session = backend.primary().unwrap().open().unwrap();
        assert_eq!(session.poll().unwrap(), PollStatus::Ready);

        let stride = 4 * 4 + 4;
        let bytes = session.frame_bytes();
        assert_eq!(bytes.len(), stride * 2);

        // pixel (2, 1): blue = x, green = y, red = frame index, opaque
        let i = stride + 4 * 2;
        assert_eq!(&bytes[i..i + 4], &[2, 1, 1, 0xFF]);
        assert_eq!(&bytes[stride - 4..stride], &[PADDING_SENTINEL; 4]);
    }

    #[test]
    fn session_reports_display_dimensions() {
        let backend = SimBackend::new(vec![SimDisplayConfig::new(320, 200)]);
        let display = backend.primary().unwrap();
        assert_eq!((display.width(), display.height()), (320, 200));
        let session = display.open().unwrap();
        assert_eq!((session.width(), session.height()), (320, 200));
    }
}
