use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, Rgb, RgbImage};
use std::io::{Seek, Write};
use std::path::Path;

/// Composites `img` onto an opaque black background.
///
/// Four channel images are blended using the alpha as mask, so fully
/// transparent pixels end up black. Everything else is converted to 8-bit rgb,
/// which drops the alpha of grey-alpha images.
pub fn flatten(img: &DynamicImage) -> RgbImage {
    if img.color().channel_count() == 4 {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        RgbImage::from_fn(width, height, |x, y| {
            let [r, g, b, a] = rgba.get_pixel(x, y).0;
            Rgb([over_black(r, a), over_black(g, a), over_black(b, a)])
        })
    } else if let DynamicImage::ImageRgb8(rgb) = img {
        rgb.clone()
    } else {
        img.to_rgb8()
    }
}

fn over_black(c: u8, a: u8) -> u8 {
    ((c as u16 * a as u16 + 127) / 255) as u8
}

pub struct Scaler {
    img: RgbImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?
            .with_guessed_format()?
            .decode()
            .with_context(|| format!("failed to decode {}", path.display()))?;
        Ok(Self::from_image(img))
    }

    pub fn from_image(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        tracing::debug!("source image {}x{} {:?}", width, height, img.color());
        if width != height {
            tracing::warn!(
                "source image is {}x{}, icons will be stretched to a square",
                width,
                height
            );
        }
        Self { img: flatten(&img) }
    }

    pub fn resize(&self, size: u32) -> RgbImage {
        image::imageops::resize(&self.img, size, size, FilterType::Lanczos3)
    }

    pub fn write<W: Write + Seek>(&self, w: &mut W, size: u32) -> Result<()> {
        self.resize(size).write_to(w, ImageFormat::Png)?;
        Ok(())
    }
}
