//! Borrowed frame views

use raster::{FrameBuffer, PixelFormat, PixelSource, Rgba, bgra_to_rgba};

/// A borrowed view over the frame mapped by the latest poll
///
/// Packed BGRA rows, `stride * height` bytes. Rows may carry trailing
/// padding, so per-row offsets must use [`stride`](Frame::stride), never
/// `4 * width`. The view lives only until the session is polled again or
/// closed — the borrow checker enforces this — and
/// [`to_frame_buffer`](Frame::to_frame_buffer) is the way to keep the
/// pixels beyond that window.
pub struct Frame<'a> {
    bytes: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(bytes: &'a [u8], width: u32, height: u32) -> Frame<'a> {
        let stride = bytes.len() / height as usize;
        debug_assert!(stride >= 4 * width as usize);
        Frame {
            bytes,
            width,
            height,
            stride,
        }
    }

    /// Raw packed BGRA bytes, `stride * height` long
    pub fn bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Bytes per row, including any backend padding
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte index of the 4-byte BGRA pixel at (x, y)
    pub fn pix_offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + 4 * x as usize
    }

    /// Owned BGRA copy, the sanctioned way to retain frame data past the
    /// next poll
    pub fn to_frame_buffer(&self) -> FrameBuffer {
        FrameBuffer::new(
            self.bytes.to_vec(),
            self.width,
            self.height,
            self.stride,
            PixelFormat::Bgra8,
        )
    }

    /// Owned RGBA copy, ready for standard raster-image encoders
    ///
    /// Stride and padding bytes carry over unchanged.
    pub fn to_rgba(&self) -> FrameBuffer {
        FrameBuffer::new(
            bgra_to_rgba(self.bytes),
            self.width,
            self.height,
            self.stride,
            PixelFormat::Rgba8,
        )
    }
}

impl PixelSource for Frame<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgba_at(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::TRANSPARENT;
        }
        let i = self.pix_offset(x, y);
        Rgba {
            r: self.bytes[i + 2],
            g: self.bytes[i + 1],
            b: self.bytes[i],
            a: self.bytes[i + 3],
        }
    }
}

impl std::fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("len", &self.bytes.len())
            .finish()
    }
}
