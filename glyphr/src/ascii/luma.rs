//! RGB to brightness conversion using the ITU-R BT.601 luma weights.

use libdib::Pixel;

/// Perceived brightness of a pixel: `0.299*R + 0.587*G + 0.114*B`.
///
/// Pure and deterministic; the ranking in [`super::rank`] relies on that.
/// The value is recomputed on demand rather than cached alongside the
/// pixel, which keeps the pixel type a plain copy of the decoded channels.
#[must_use]
pub fn brightness(pixel: &Pixel) -> f32 {
    0.299 * f32::from(pixel.red) + 0.587 * f32::from(pixel.green) + 0.114 * f32::from(pixel.blue)
}
