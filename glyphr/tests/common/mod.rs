//! Minimal 24-bit BMP writer for end-to-end tests.

/// Serializes `pixels` (row-major top-down, RGB) as a bottom-up 24-bit
/// BMP with rows padded to 4-byte boundaries.
pub fn encode_bmp(width: u32, height: u32, pixels: &[[u8; 3]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);
    let stride = (width * 3 + 3) & !3;
    let file_size = 54 + stride * height;

    let mut buf = Vec::with_capacity(file_size as usize);
    buf.extend_from_slice(b"BM");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(&[0; 4]);
    buf.extend_from_slice(&54u32.to_le_bytes());

    buf.extend_from_slice(&40u32.to_le_bytes());
    buf.extend_from_slice(&(width as i32).to_le_bytes());
    buf.extend_from_slice(&(height as i32).to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&24u16.to_le_bytes());
    buf.extend_from_slice(&[0; 24]);

    for row in (0..height).rev() {
        for col in 0..width {
            let [r, g, b] = pixels[(row * width + col) as usize];
            buf.push(b);
            buf.push(g);
            buf.push(r);
        }
        buf.extend(std::iter::repeat(0u8).take((stride - width * 3) as usize));
    }
    buf
}
