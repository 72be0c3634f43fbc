//! Raster vocabulary for captured frames
//!
//! Leaf crate shared by the capture core and its consumers (encoders,
//! image writers): pixel formats, the [`PixelSource`] accessor trait,
//! owned frame buffers, and packed BGRA to RGBA conversion.

mod convert;
mod frame;

pub use convert::*;
pub use frame::*;
