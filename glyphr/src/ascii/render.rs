//! Row-major glyph output.

use std::io::{self, Write};

/// Writes `glyphs` to `out` as text, one row of `width` glyphs per line.
///
/// Every row is followed by a line break, including the last; nothing is
/// written after the final line break. Empty input writes nothing. The
/// only failure source is the sink itself.
///
/// # Panics
///
/// Panics if `width` is 0 while `glyphs` is not empty.
pub fn render(glyphs: &[u8], width: u32, out: &mut impl Write) -> io::Result<()> {
    if glyphs.is_empty() {
        return Ok(());
    }
    for row in glyphs.chunks(width as usize) {
        out.write_all(row)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
