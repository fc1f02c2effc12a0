use anyhow::{Context, Result};
use std::io::Cursor;
use std::path::Path;
use xcommon::Scaler;

pub const DPI_LABEL: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

pub const DPI_SIZE: [u32; 5] = [48, 72, 96, 144, 192];

/// Every density gets both names with identical content.
pub const IC_LAUNCHER: [&str; 2] = ["ic_launcher.png", "ic_launcher_round.png"];

pub fn mipmap_ic_launcher<P: AsRef<Path>, Q: AsRef<Path>>(icon: P, res: Q) -> Result<()> {
    let scaler = Scaler::open(icon)?;
    write_mipmaps(&scaler, res)?;
    println!("Icons generated!");
    Ok(())
}

pub fn write_mipmaps<P: AsRef<Path>>(scaler: &Scaler, res: P) -> Result<()> {
    for (label, size) in DPI_LABEL.iter().zip(DPI_SIZE) {
        let span = tracing::debug_span!("mipmap", density = *label, size);
        let _guard = span.enter();
        let dir = res.as_ref().join(format!("mipmap-{}", label));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let mut png = Cursor::new(Vec::new());
        scaler.write(&mut png, size)?;
        let png = png.into_inner();
        for name in IC_LAUNCHER {
            let path = dir.join(name);
            std::fs::write(&path, &png)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::debug!("wrote {} ({} bytes)", path.display(), png.len());
        }
        println!("Generated {}: {}x{}", label, size, size);
    }
    Ok(())
}
