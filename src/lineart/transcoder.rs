use crate::Result;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use tracing::debug;

/// Turns raw generated image bytes into the bytes returned to the client.
pub trait ImageTranscoder: Send + Sync {
    fn transcode(&self, raw: &[u8]) -> Result<Vec<u8>>;
}

/// Decodes any supported raster format and re-encodes it as a
/// grayscale-with-alpha PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineArtTranscoder;

impl LineArtTranscoder {
    pub fn new() -> Self {
        Self
    }
}

impl ImageTranscoder for LineArtTranscoder {
    fn transcode(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let source = image::load_from_memory(raw)?;
        debug!(
            "Decoded {}x{} {:?} image",
            source.width(),
            source.height(),
            source.color()
        );

        // Luma conversion keeps an existing alpha channel and adds an opaque one otherwise.
        let line_art = DynamicImage::ImageLumaA8(source.to_luma_alpha8());

        let mut png = Vec::new();
        line_art.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        Ok(png)
    }
}
