//! ASCII renderer module for converting decoded BMP images to ASCII art.
//!
//! The pipeline has three steps:
//!
//! 1. **Brightness** - RGB to a single luma scalar ([`brightness`])
//! 2. **Rank mapping** - pixels sorted by brightness, each assigned a
//!    glyph by its percentile rank ([`rank_glyphs`])
//! 3. **Rendering** - glyphs reassembled into text rows ([`render`])
//!
//! Rank mapping is what distinguishes this renderer from threshold-based
//! ones: the glyph an individual pixel receives depends on where it sits
//! among all the image's pixels, not on its absolute brightness, so a
//! murky low-contrast photograph still uses the whole of [`GLYPH_RAMP`].

mod luma;
mod ramp;
mod rank;
mod render;

pub use luma::brightness;
pub use ramp::GLYPH_RAMP;
pub use rank::rank_glyphs;
pub use render::render;

use libdib::BmpImageFile;
use std::io::{self, Write};

/// Renders a decoded image as ASCII art into `out`.
///
/// Convenience wrapper over [`rank_glyphs`] + [`render`]; consumes the
/// image since the pixel buffer is reordered by the sort.
///
/// # Errors
///
/// Only fails if writing to `out` fails.
pub fn write_ascii(image: BmpImageFile, out: &mut impl Write) -> io::Result<()> {
    let width = image.width();
    let mut bitmap = image.into_bitmap();
    let glyphs = rank_glyphs(&mut bitmap);
    render(&glyphs, width, out)
}
