use std::{
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Result;
use libdib::BmpImageFile;
use tracing::{debug, info, instrument};

pub mod ascii;

/// Decodes a 24-bit BMP file and writes its ASCII-art rendering to `out`.
///
/// Nothing is written until the whole file has decoded successfully, so a
/// rejected or truncated input produces no partial image.
#[instrument(skip(out))]
pub fn bmp_to_ascii(bmp_file: &Path, out: impl Write) -> Result<()> {
    let image = BmpImageFile::from_file(bmp_file)?;
    let (width, height) = (image.width(), image.height());
    debug!("read {width}x{height} bmp from file");

    let mut out = BufWriter::new(out);
    ascii::write_ascii(image, &mut out)?;
    out.flush()?;
    info!("rendered {width}x{height} image as ASCII");
    Ok(())
}
