//! # libdib
//!
//!
//! This library provides datatypes and decoding for the Windows BMP/DIB
//! (device-independent bitmap) raster image file format, restricted to the
//! 24-bit uncompressed variant.
//!
//! It aims to provide a minimal, low-level API to build upon: the decoder
//! validates the format invariants it depends on (signature, bit depth,
//! compression method, dimensions) and hands back a plain row-major pixel
//! buffer, leaving any further processing to the users of this crate.
//!
//! ### Format notes
//!
//! BMP is an old format with many variants. This crate reads the classic
//! layout: a 14-byte file header carrying the `BM` signature and the offset
//! to the pixel data, followed by the 40-byte `BITMAPINFOHEADER`. Pixel rows
//! are stored bottom-up (top-down when the declared height is negative),
//! each pixel as 3 bytes in blue-green-red order, each row padded to a
//! 4-byte boundary. All multi-byte fields are little-endian and are parsed
//! field by field, never by reinterpreting struct memory.
//!
//! ### Limitations
//!
//! Palette-indexed depths (1/4/8 bit), 16/32-bit depths, and every
//! compression method (RLE4, RLE8, bitfields) are rejected with a
//! structured error rather than decoded. Please open an issue on GitHub if
//! you would like to see support for more of the format.
//!
//! ### Usage
//!
//! ```rust
//! use libdib::BmpImageFile;
//! use std::io::Cursor;
//!
//! fn main() -> Result<(), libdib::Error> {
//!     // a 1x1 blue image: 14-byte file header, 40-byte info header,
//!     // one BGR pixel padded to 4 bytes
//!     let mut bmp = Vec::new();
//!     bmp.extend_from_slice(b"BM");
//!     bmp.extend_from_slice(&58u32.to_le_bytes()); // file size
//!     bmp.extend_from_slice(&[0; 4]); // reserved fields
//!     bmp.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
//!     bmp.extend_from_slice(&40u32.to_le_bytes()); // info header size
//!     bmp.extend_from_slice(&1i32.to_le_bytes()); // width
//!     bmp.extend_from_slice(&1i32.to_le_bytes()); // height
//!     bmp.extend_from_slice(&1u16.to_le_bytes()); // planes
//!     bmp.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
//!     bmp.extend_from_slice(&[0; 24]); // compression through important colors
//!     bmp.extend_from_slice(&[255, 0, 0, 0]); // one BGR pixel + row padding
//!
//!     let image = BmpImageFile::from_reader(Cursor::new(bmp))?;
//!     assert_eq!((image.width(), image.height()), (1, 1));
//!     assert_eq!(image.bitmap().pixels()[0].blue, 255);
//!     Ok(())
//! }
//! ```
//!

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

mod error;
/// Module containing types for BMP image files
pub mod image;

pub use error::Error;
pub use image::bitmap::Pixel;
pub use image::bitmap::PixelBuffer;
pub use image::header::FileHeader;
pub use image::header::InfoHeader;
pub use image::BmpImageFile;
