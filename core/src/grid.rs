use alloc::{vec, vec::Vec};

use embedded_graphics::pixelcolor::BinaryColor;

use crate::{Error, Result};

/// Pixel format tag of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum PixelFormat {
    /// 1 bit per pixel, black or white
    Binary,
    /// 8 bit luminance
    Gray,
    /// Anything else (RGB, palettes, 16 bit, ...)
    Other,
}

impl PixelFormat {
    pub fn repr(self) -> &'static str {
        match self {
            PixelFormat::Binary => "1-bit",
            PixelFormat::Gray => "8-bit grayscale",
            PixelFormat::Other => "other",
        }
    }
}

/// Read access to a decoded image.
///
/// Implemented by the grids in this crate and by adapters around image
/// decoding libraries.
pub trait PixelBuffer {
    fn format(&self) -> PixelFormat;
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Sample at `(x, y)`.
    ///
    /// Gray buffers return the luminance. Binary buffers return 0 for black
    /// and anything else for white. Other formats may return anything, the
    /// quantizer goes through [`PixelBuffer::to_gray`] for them.
    fn sample(&self, x: usize, y: usize) -> u8;

    /// Grayscale conversion for buffers in [`PixelFormat::Other`].
    ///
    /// `None` means the buffer can't be converted. A conversion that fails
    /// returns its error, which the quantizer passes on unchanged.
    fn to_gray(&self) -> Option<Result<GrayGrid>> {
        None
    }
}

/// Validates dimensions and returns the pixel count.
pub(crate) fn pixel_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }
    width.checked_mul(height).ok_or(Error::TooLarge)
}

/// Row-major 8 bit grayscale image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayGrid {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn filled(width: usize, height: usize, luma: u8) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![luma; count],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, luma: u8) {
        self.data[y * self.width + x] = luma;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl PixelBuffer for GrayGrid {
    fn format(&self) -> PixelFormat {
        PixelFormat::Gray
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn sample(&self, x: usize, y: usize) -> u8 {
        self.get(x, y)
    }
}

/// Row-major black/white image.
///
/// `BinaryColor::On` is white, `BinaryColor::Off` is black. New grids start
/// out black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: usize,
    height: usize,
    pixels: Vec<BinaryColor>,
}

impl BinaryGrid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![BinaryColor::Off; count],
        })
    }

    /// Builds a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> BinaryColor,
    ) -> Result<Self> {
        let count = pixel_count(width, height)?;
        let mut pixels = Vec::with_capacity(count);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Dimensions must already be validated and `pixels` must be row-major.
    pub(crate) fn from_raw(width: usize, height: usize, pixels: Vec<BinaryColor>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> BinaryColor {
        self.pixels[y * self.width + x]
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_on()
    }

    pub fn set(&mut self, x: usize, y: usize, color: BinaryColor) {
        self.pixels[y * self.width + x] = color;
    }

    /// Swaps black and white
    pub fn invert(&mut self) {
        for pixel in self.pixels.iter_mut() {
            *pixel = pixel.invert();
        }
    }

    pub fn as_slice(&self) -> &[BinaryColor] {
        &self.pixels
    }
}

impl PixelBuffer for BinaryGrid {
    fn format(&self) -> PixelFormat {
        PixelFormat::Binary
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn sample(&self, x: usize, y: usize) -> u8 {
        if self.is_set(x, y) { 0xFF } else { 0x00 }
    }
}
