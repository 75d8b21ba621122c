//! Rank-based brightness to glyph mapping.

use super::{luma::brightness, ramp::GLYPH_RAMP};
use libdib::PixelBuffer;

/// Maps every pixel to a glyph by its brightness *rank* within the image.
///
/// The buffer is sorted in place by ascending brightness, then the pixel
/// at rank `r` (of `N` total) is assigned `GLYPH_RAMP[r * 120 / N]` and
/// the glyph is stored back at the pixel's original row-major index.
/// Ranking, as opposed to fixed brightness thresholds, spends the full
/// ramp on every image no matter how narrow its exposure range is: the
/// darkest pixels always land on blank space and the brightest always
/// reach the dense end.
///
/// Equal-brightness pixels all take the rank of the first member of
/// their tie group ("competition" ranking), so they always share a glyph
/// and the output never depends on how the unstable sort broke the tie.
/// A uniform image is a single tie group at rank 0 and renders entirely
/// as `GLYPH_RAMP[0]`.
///
/// Returns one glyph per pixel in row-major order, or an empty vec for an
/// empty buffer.
#[must_use]
pub fn rank_glyphs(buffer: &mut PixelBuffer) -> Vec<u8> {
    let pixels = buffer.pixels_mut();
    let total = pixels.len();
    if total == 0 {
        return Vec::new();
    }

    pixels.sort_unstable_by(|a, b| brightness(a).total_cmp(&brightness(b)));

    let mut glyphs = vec![0u8; total];
    let mut rank = 0;
    for (i, pixel) in pixels.iter().enumerate() {
        // a tie group keeps the rank of its first member
        if i > 0 && brightness(pixel) > brightness(&pixels[i - 1]) {
            rank = i;
        }
        // rank <= total - 1, so integer division keeps the index in bounds
        glyphs[pixel.origin] = GLYPH_RAMP[rank * GLYPH_RAMP.len() / total];
    }
    glyphs
}
