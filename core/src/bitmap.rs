use alloc::{string::String, vec::Vec};

use crate::{BinaryGrid, PackedBitmap, PixelBuffer, Result, pack, quantize, render};

/// A black/white image held both as a pixel grid and as packed bytes.
///
/// The two views always describe the same pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    grid: BinaryGrid,
    packed: PackedBitmap,
}

impl Bitmap {
    /// Quantizes and packs a decoded image.
    pub fn from_image(image: &impl PixelBuffer) -> Result<Self> {
        let grid = quantize(image)?;
        let packed = pack(&grid);
        Ok(Self { grid, packed })
    }

    /// Decodes packed bytes. Anything past the required length is ignored.
    pub fn from_bytes(bytes: &[u8], width: usize, height: usize) -> Result<Self> {
        let packed = PackedBitmap::from_bytes(Vec::from(bytes), width, height)?;
        let grid = packed.to_grid();
        Ok(Self { grid, packed })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &BinaryGrid {
        &self.grid
    }

    pub fn packed(&self) -> &PackedBitmap {
        &self.packed
    }

    pub fn bits(&self) -> &[u8] {
        self.packed.bits()
    }

    pub fn into_parts(self) -> (BinaryGrid, PackedBitmap) {
        (self.grid, self.packed)
    }

    /// Swaps black and white in both views.
    pub fn invert(&mut self) {
        self.grid.invert();
        self.packed.invert();
    }

    pub fn ascii_art(&self, from_packed: bool) -> String {
        render::ascii_art(self, from_packed)
    }

    pub fn c_array(&self, prefix: &str, line_width: usize) -> Result<String> {
        render::c_array(self.bits(), prefix, line_width)
    }
}
