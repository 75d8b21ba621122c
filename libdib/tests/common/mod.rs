//! In-memory BMP fixtures for decoder tests.
//!
//! Layout: 14-byte file header, 40-byte `BITMAPINFOHEADER`, optional gap
//! before the pixel data, then BGR rows padded to 4-byte boundaries.

/// Byte offset of the width field, for tests that patch it
pub const WIDTH_OFFSET: usize = 18;
/// Byte offset of the bits-per-pixel field, for tests that patch it
pub const BPP_OFFSET: usize = 28;
/// Byte offset of the compression field, for tests that patch it
pub const COMPRESSION_OFFSET: usize = 30;

/// Serializes `pixels` (row-major top-down, RGB) as a 24-bit BMP.
///
/// `top_down` writes a negative height and keeps rows in row-major order;
/// otherwise rows are written bottom-up as the format prescribes. `gap`
/// inserts that many zero bytes between the headers and the pixel data,
/// reflected in the declared data offset.
pub fn encode_bmp_ex(
    width: u32,
    height: u32,
    pixels: &[[u8; 3]],
    top_down: bool,
    gap: u32,
) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);
    let stride = (width * 3 + 3) & !3;
    let data_offset = 54 + gap;
    let file_size = data_offset + stride * height;

    let mut buf = Vec::with_capacity(file_size as usize);

    // file header
    buf.extend_from_slice(b"BM");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(&0u16.to_le_bytes());
    buf.extend_from_slice(&0u16.to_le_bytes());
    buf.extend_from_slice(&data_offset.to_le_bytes());

    // info header
    let declared_height = if top_down {
        -(height as i32)
    } else {
        height as i32
    };
    buf.extend_from_slice(&40u32.to_le_bytes());
    buf.extend_from_slice(&(width as i32).to_le_bytes());
    buf.extend_from_slice(&declared_height.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&24u16.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    buf.extend_from_slice(&(stride * height).to_le_bytes());
    buf.extend_from_slice(&2835i32.to_le_bytes());
    buf.extend_from_slice(&2835i32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());

    buf.extend(std::iter::repeat(0u8).take(gap as usize));

    let pad = (stride - width * 3) as usize;
    let mut write_row = |buf: &mut Vec<u8>, row: u32| {
        for col in 0..width {
            let [r, g, b] = pixels[(row * width + col) as usize];
            buf.push(b);
            buf.push(g);
            buf.push(r);
        }
        buf.extend(std::iter::repeat(0u8).take(pad));
    };
    if top_down {
        for row in 0..height {
            write_row(&mut buf, row);
        }
    } else {
        for row in (0..height).rev() {
            write_row(&mut buf, row);
        }
    }
    buf
}

/// Serializes `pixels` (row-major top-down, RGB) as a plain bottom-up
/// 24-bit BMP with no gap between headers and pixel data.
pub fn encode_bmp(width: u32, height: u32, pixels: &[[u8; 3]]) -> Vec<u8> {
    encode_bmp_ex(width, height, pixels, false, 0)
}
