//! Packed pixel conversion

/// Reorder a packed BGRA buffer into RGBA.
///
/// Pure function: returns a new buffer of identical length, swapping the
/// first and third byte of every aligned 4-byte group. Processing is flat
/// over the whole buffer, not row-aware: row padding bytes travel through
/// in place and a trailing tail shorter than one pixel is copied as-is.
/// Padding is opaque filler that no pixel accessor ever reads, so the flat
/// walk is observationally row-correct for any stride.
///
/// Applying the swap twice returns the original buffer.
pub fn bgra_to_rgba(src: &[u8]) -> Vec<u8> {
    let mut out = src.to_vec();
    for px in out.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    out
}
