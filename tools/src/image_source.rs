use image::{DynamicImage, GenericImageView, Pixel};
use pixpack_core::{GrayGrid, PixelBuffer, PixelFormat, Result};

/// Decoded image handed to the codec.
///
/// 8 bit luma images are read as is, everything else goes through the
/// image crate's luma conversion.
pub struct DecodedImage(pub DynamicImage);

impl PixelBuffer for DecodedImage {
    fn format(&self) -> PixelFormat {
        match self.0 {
            DynamicImage::ImageLuma8(_) => PixelFormat::Gray,
            _ => PixelFormat::Other,
        }
    }

    fn width(&self) -> usize {
        self.0.width() as usize
    }

    fn height(&self) -> usize {
        self.0.height() as usize
    }

    fn sample(&self, x: usize, y: usize) -> u8 {
        self.0.get_pixel(x as u32, y as u32).to_luma()[0]
    }

    fn to_gray(&self) -> Option<Result<GrayGrid>> {
        let luma = self.0.to_luma8();
        Some(GrayGrid::new(
            luma.width() as usize,
            luma.height() as usize,
            luma.into_raw(),
        ))
    }
}
