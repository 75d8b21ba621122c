use libdib::BmpImageFile;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "image.bmp".to_owned());
    let image = BmpImageFile::from_file(&path)?;
    println!("{path}: {}x{} pixels", image.width(), image.height());
    println!("{:#?}", image.header());
    Ok(())
}
