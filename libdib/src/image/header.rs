use crate::error::Error;
use std::io::{self, Read};

/// `BI_RGB`, the only compression method this crate accepts
pub const COMPRESSION_NONE: u32 = 0;

/// The two ASCII bytes every BMP file starts with
pub const BMP_SIGNATURE: [u8; 2] = *b"BM";

/// On-disk BMP file header (14 bytes, little-endian)
///
/// Only `data_offset` matters for decoding; the remaining fields are
/// retained because the format documents them
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Signature bytes, always `BM` once parsing succeeds
    pub signature: [u8; 2],
    /// Total file size in bytes as declared by the writer
    pub file_size: u32,
    /// Reserved, creator-defined
    pub reserved1: u16,
    /// Reserved, creator-defined
    pub reserved2: u16,
    /// Offset from the start of the file to the pixel data
    pub data_offset: u32,
}

/// On-disk `BITMAPINFOHEADER` (40 bytes, little-endian)
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    /// Size of this header; writers may extend it past 40 bytes
    pub header_size: u32,
    /// Image width in pixels
    pub width: i32,
    /// Image height in pixels; negative means rows are stored top-down
    pub height: i32,
    /// Color plane count, always 1 in practice
    pub planes: u16,
    /// Bits per pixel; this crate only accepts 24
    pub bits_per_pixel: u16,
    /// Compression method; this crate only accepts `BI_RGB` (0)
    pub compression: u32,
    /// Size of the raw pixel data, may be 0 for `BI_RGB`
    pub image_size: u32,
    /// Horizontal resolution, pixels per meter
    pub x_pixels_per_meter: i32,
    /// Vertical resolution, pixels per meter
    pub y_pixels_per_meter: i32,
    /// Number of palette colors, 0 for 24-bit images
    pub colors_used: u32,
    /// Number of "important" palette colors, generally ignored
    pub important_colors: u32,
}

impl FileHeader {
    /// Reads and validates the 14-byte file header
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the signature bytes are not `BM`,
    /// or [`Error::Io`] if the header cannot be read in full
    pub fn from_reader(r: &mut impl Read) -> Result<Self, Error> {
        let mut signature = [0u8; 2];
        r.read_exact(&mut signature)?;
        if signature != BMP_SIGNATURE {
            return Err(Error::Format { found: signature });
        }
        Ok(Self {
            signature,
            file_size: read_u32(r)?,
            reserved1: read_u16(r)?,
            reserved2: read_u16(r)?,
            data_offset: read_u32(r)?,
        })
    }
}

impl InfoHeader {
    /// Reads the documented 40-byte info header layout
    ///
    /// Extended headers (`header_size` > 40) are tolerated: the decoder
    /// seeks to [`FileHeader::data_offset`] before touching pixel data,
    /// so trailing extension fields are simply skipped over
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the header cannot be read in full
    pub fn from_reader(r: &mut impl Read) -> Result<Self, Error> {
        Ok(Self {
            header_size: read_u32(r)?,
            width: read_i32(r)?,
            height: read_i32(r)?,
            planes: read_u16(r)?,
            bits_per_pixel: read_u16(r)?,
            compression: read_u32(r)?,
            image_size: read_u32(r)?,
            x_pixels_per_meter: read_i32(r)?,
            y_pixels_per_meter: read_i32(r)?,
            colors_used: read_u32(r)?,
            important_colors: read_u32(r)?,
        })
    }

    /// Returns `true` if pixel rows are stored top-down
    /// (negative declared height)
    #[must_use]
    pub const fn is_top_down(&self) -> bool {
        self.height < 0
    }
}

fn read_u16(r: &mut impl Read) -> io::Result<u16> {
    let mut buf = [0; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32(r: &mut impl Read) -> io::Result<u32> {
    let mut buf = [0; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_i32(r: &mut impl Read) -> io::Result<i32> {
    let mut buf = [0; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}
