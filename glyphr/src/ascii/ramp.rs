//! The glyph density ramp.

/// Glyphs ordered from lowest to highest visual density.
///
/// The first quarter is blank on purpose: it acts as a minimum-brightness
/// threshold, so the darkest quarter of an image's pixels renders as empty
/// space rather than faint punctuation. The remaining 90 entries run from
/// barely-there marks (`` ` ``, `.`) up to the densest glyphs (`%`, `&`,
/// `@`).
pub const GLYPH_RAMP: &[u8; 120] =
    b"                              `.-:_,^=;><+!rc*/z?sLTv)J7(|Fi{C}fI31tlu[neoZ5Yxjya]2ESwqkP6h9d4VpOGbUAKXHm8RD#$Bg0MNWQ%&@";
