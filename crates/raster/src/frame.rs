//! Pixel formats, accessor trait, and owned frame buffers

use bytes::Bytes;

use crate::bgra_to_rgba;

/// Pixel format of a raster buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// BGRA 8-bit per channel
    Bgra8,
    /// RGBA 8-bit per channel
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel
    pub const fn bytes_per_pixel(self) -> usize {
        4
    }
}

/// A single 8-bit-per-channel RGBA sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, returned for out-of-bounds lookups
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
}

/// Bounds plus per-pixel RGBA lookup over a raster surface
///
/// The upward interface for encoders and image writers. Out-of-range
/// coordinates yield [`Rgba::TRANSPARENT`] rather than faulting.
pub trait PixelSource {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Color at (x, y), transparent black when out of bounds
    fn rgba_at(&self, x: u32, y: u32) -> Rgba;
}

/// Owned raster buffer
///
/// A full copy of one frame, free of the validity window that constrains
/// borrowed views. `stride` is bytes per row and may exceed
/// `4 * width` when the producing backend pads its rows.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    data: Bytes,
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
}

impl FrameBuffer {
    pub fn new(
        data: impl Into<Bytes>,
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
    ) -> Self {
        let data = data.into();
        debug_assert_eq!(data.len(), stride * height as usize);
        debug_assert!(stride >= format.bytes_per_pixel() * width as usize);
        Self {
            data,
            width,
            height,
            stride,
            format,
        }
    }

    /// Raw packed bytes, `stride * height` long
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// The underlying buffer, cheap to hand to an encoder
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, including any padding
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Byte index of the 4-byte pixel at (x, y)
    pub fn pix_offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + 4 * x as usize
    }

    /// RGBA copy of this buffer
    ///
    /// Stride and padding bytes carry over unchanged; a buffer that is
    /// already RGBA is copied without reordering.
    pub fn to_rgba(&self) -> FrameBuffer {
        match self.format {
            PixelFormat::Rgba8 => self.clone(),
            PixelFormat::Bgra8 => FrameBuffer::new(
                bgra_to_rgba(&self.data),
                self.width,
                self.height,
                self.stride,
                PixelFormat::Rgba8,
            ),
        }
    }
}

impl PixelSource for FrameBuffer {
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
        let px = &self.data[i..i + 4];
        match self.format {
            PixelFormat::Bgra8 => Rgba {
                r: px[2],
                g: px[1],
                b: px[0],
                a: px[3],
            },
            PixelFormat::Rgba8 => Rgba {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One 2x1 BGRA row followed by a 4-byte padding group
    fn bgra_buffer() -> FrameBuffer {
        FrameBuffer::new(
            vec![1, 2, 3, 4, 5, 6, 7, 8, 0xAB, 0xAB, 0xAB, 0xAB],
            2,
            1,
            12,
            PixelFormat::Bgra8,
        )
    }

    #[test]
    fn rgba_at_honors_the_buffer_format() {
        let bgra = bgra_buffer();
        assert_eq!(bgra.rgba_at(0, 0), Rgba { r: 3, g: 2, b: 1, a: 4 });
        assert_eq!(bgra.rgba_at(1, 0), Rgba { r: 7, g: 6, b: 5, a: 8 });

        let rgba = bgra.to_rgba();
        assert_eq!(rgba.format(), PixelFormat::Rgba8);
        assert_eq!(rgba.rgba_at(0, 0), bgra.rgba_at(0, 0));
        assert_eq!(rgba.rgba_at(1, 0), bgra.rgba_at(1, 0));
    }

    #[test]
    fn out_of_bounds_lookup_is_transparent_black() {
        let buf = bgra_buffer();
        assert_eq!(buf.rgba_at(2, 0), Rgba::TRANSPARENT);
        assert_eq!(buf.rgba_at(0, 1), Rgba::TRANSPARENT);
        assert_eq!(buf.rgba_at(2, 1), Rgba::TRANSPARENT);
    }

    #[test]
    fn to_rgba_preserves_stride_and_padding() {
        let rgba = bgra_buffer().to_rgba();
        assert_eq!(rgba.stride(), 12);
        assert_eq!(rgba.bytes().len(), 12);
        assert_eq!(&rgba.bytes()[8..], &[0xAB; 4]);
    }

    #[test]
    fn to_rgba_on_rgba_copies_without_reordering() {
        let rgba = bgra_buffer().to_rgba();
        let again = rgba.to_rgba();
        assert_eq!(again.bytes(), rgba.bytes());
        assert_eq!(again.format(), PixelFormat::Rgba8);
    }

    #[test]
    fn accessor_agrees_with_full_conversion() {
        let bgra = bgra_buffer();
        let converted = bgra_to_rgba(bgra.bytes());
        for x in 0..2 {
            let px = bgra.rgba_at(x, 0);
            let i = bgra.pix_offset(x, 0);
            assert_eq!([px.r, px.g, px.b, px.a][..], converted[i..i + 4]);
        }
    }
}
