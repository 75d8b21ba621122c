/// A single decoded pixel
///
/// `origin` is the pixel's row-major index at decode time. It is set once
/// by the decoder and never changes, so a buffer of pixels can be freely
/// reordered and still be restored to row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Row-major index assigned at decode time
    pub origin: usize,
}

/// Decoded pixels of a BMP image in row-major (top-to-bottom,
/// left-to-right) order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Creates a new [`PixelBuffer`] from row-major pixels
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len()` is not `width * height`
    #[must_use]
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        assert_eq!(width as usize * height as usize, pixels.len());
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Returns the width of the image
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixels of the image
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Returns the pixels of the image mutably, for callers that reorder
    /// them in place
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Returns the pixel at column `x`, row `y`, if in bounds
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&Pixel> {
        if x < self.width && y < self.height {
            self.pixels.get(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}
