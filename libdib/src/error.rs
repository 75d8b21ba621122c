use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libdib` errors
pub enum Error {
    /// Error returned on any read/seek failure, including truncated
    /// pixel data (`UnexpectedEof`)
    #[error("i/o error")]
    Io(#[from] std::io::Error),
    /// Error returned if the file does not start with the `BM` signature
    #[error("not a BMP file: expected signature \"BM\", found {found:?}")]
    Format {
        /// the first two bytes of the file
        found: [u8; 2],
    },
    /// Error returned for any bit depth other than 24
    #[error("only 24-bit BMP files are supported, found {bits_per_pixel} bits per pixel")]
    UnsupportedBitDepth {
        /// bit depth declared by the info header
        bits_per_pixel: u16,
    },
    /// Error returned for any compression method other than `BI_RGB` (0)
    #[error("only uncompressed BMP files are supported, found compression method {method}")]
    UnsupportedCompression {
        /// compression method declared by the info header
        method: u32,
    },
    /// Error returned if the header declares dimensions no pixel buffer
    /// can be built from
    #[error("invalid image dimensions {width}x{height}")]
    Dimensions {
        /// width declared by the info header
        width: i32,
        /// height declared by the info header
        height: i32,
    },
    /// Error returned if the pixel buffer cannot be allocated
    #[error("failed to allocate pixel buffer")]
    Allocation(#[from] TryReserveError),
}
