#![allow(clippy::module_name_repetitions)]

pub(crate) mod bitmap;
pub(crate) mod header;

use crate::error::Error;
use bitmap::{Pixel, PixelBuffer};
use header::{FileHeader, InfoHeader, COMPRESSION_NONE};
use std::{
    fs::File,
    io::{BufReader, Read, Seek, SeekFrom},
    path::Path,
};
use tracing::{debug, trace};

/// A typed representation of a decoded 24-bit BMP image file
#[derive(Debug, Clone, PartialEq)]
pub struct BmpImageFile {
    header: InfoHeader,
    bitmap: PixelBuffer,
}

impl BmpImageFile {
    /// Returns a reference to the [`InfoHeader`]
    #[must_use]
    pub const fn header(&self) -> &InfoHeader {
        &self.header
    }

    /// Returns a reference to the decoded [`PixelBuffer`]
    #[must_use]
    pub const fn bitmap(&self) -> &PixelBuffer {
        &self.bitmap
    }

    /// Consumes `self` and returns the decoded [`PixelBuffer`]
    #[must_use]
    pub fn into_bitmap(self) -> PixelBuffer {
        self.bitmap
    }

    /// Returns the image width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.bitmap.width()
    }

    /// Returns the image height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// Tries to read a [`Self`] from a reader positioned at the start of
    /// a BMP file
    ///
    /// Pixel rows are stored bottom-up on disk (unless the declared
    /// height is negative) and padded to 4-byte boundaries; both are
    /// undone here, so the resulting buffer is plain row-major with each
    /// pixel's [`Pixel::origin`] equal to its row-major index
    ///
    /// # Errors
    ///
    /// This function will error if the underlying reader holds invalid
    /// data for any reason:
    /// - the `BM` signature is missing
    /// - the bit depth is not 24, or the image is compressed
    /// - the declared dimensions are invalid
    /// - the pixel data is truncated
    pub fn from_reader(mut r: impl Read + Seek) -> Result<Self, Error> {
        let file_header = FileHeader::from_reader(&mut r)?;
        trace!("file header: {file_header:?}");
        let info_header = InfoHeader::from_reader(&mut r)?;
        trace!("info header: {info_header:?}");

        if info_header.bits_per_pixel != 24 {
            return Err(Error::UnsupportedBitDepth {
                bits_per_pixel: info_header.bits_per_pixel,
            });
        }
        if info_header.compression != COMPRESSION_NONE {
            return Err(Error::UnsupportedCompression {
                method: info_header.compression,
            });
        }
        if info_header.width <= 0 || info_header.height == 0 {
            return Err(Error::Dimensions {
                width: info_header.width,
                height: info_header.height,
            });
        }

        // the pixel data need not immediately follow the info header;
        // extended headers and palette gaps sit in between
        r.seek(SeekFrom::Start(u64::from(file_header.data_offset)))?;

        let width = info_header.width.unsigned_abs();
        let height = info_header.height.unsigned_abs();
        debug!("raster width, height: {:?}", (&width, &height));

        let total = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(total)?;
        pixels.resize(
            total,
            Pixel {
                red: 0,
                green: 0,
                blue: 0,
                origin: 0,
            },
        );

        // each on-disk row is padded to a 4-byte boundary
        let stride = (width as usize * 3 + 3) & !3;
        let mut row_buf = vec![0u8; stride];

        for i in 0..height {
            // rows are stored bottom-up unless the height was negative
            let y = if info_header.is_top_down() {
                i
            } else {
                height - 1 - i
            };
            r.read_exact(&mut row_buf)?;
            for (x, bgr) in row_buf.chunks_exact(3).take(width as usize).enumerate() {
                let origin = y as usize * width as usize + x;
                pixels[origin] = Pixel {
                    red: bgr[2],
                    green: bgr[1],
                    blue: bgr[0],
                    origin,
                };
            }
        }
        debug!("decoded {total} pixels");

        Ok(Self {
            header: info_header,
            bitmap: PixelBuffer::new(width, height, pixels),
        })
    }

    /// Tries to read [`Self`] from a provided file path
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be opened or if the
    /// file contains invalid data. See [`Self::from_reader`] for
    /// potential errors
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let file = File::open(filename)?;
        Self::from_reader(BufReader::new(file))
    }
}
