use alloc::vec::Vec;

use embedded_graphics::pixelcolor::BinaryColor;

use crate::{BinaryGrid, Error, Result, grid::pixel_count};

/// Height rounded up to a whole number of bytes per column.
pub fn pad_height(height: usize) -> usize {
    height.div_ceil(8) * 8
}

/// Number of bytes a packed `width` x `height` image occupies.
pub fn byte_len(width: usize, height: usize) -> Result<usize> {
    pixel_count(width, height)?;
    width.checked_mul(height.div_ceil(8)).ok_or(Error::TooLarge)
}

/// Byte index and bit mask of pixel `(x, y)`.
///
/// Equivalent to absolute bit `x * pad_height + y`, LSB first.
#[inline]
fn locate(column_bytes: usize, x: usize, y: usize) -> (usize, u8) {
    (x * column_bytes + y / 8, 1 << (y % 8))
}

/// Column-major, 8 rows per byte, topmost row in the LSB.
///
/// Padding rows below `height` are written as zero and never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: usize,
    height: usize,
    bits: Vec<u8>,
}

impl PackedBitmap {
    /// Takes ownership of raw packed bytes.
    ///
    /// Bytes past the required length are dropped.
    pub fn from_bytes(mut bits: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if bits.len() < expected {
            return Err(Error::InputTooShort {
                expected,
                actual: bits.len(),
            });
        }
        bits.truncate(expected);
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pad_height(&self) -> usize {
        pad_height(self.height)
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    fn column_bytes(&self) -> usize {
        self.height.div_ceil(8)
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        let (index, mask) = locate(self.column_bytes(), x, y);
        self.bits[index] & mask != 0
    }

    pub fn pixel(&self, x: usize, y: usize) -> BinaryColor {
        BinaryColor::from(self.is_set(x, y))
    }

    /// Complements every byte, padding included.
    pub fn invert(&mut self) {
        for byte in self.bits.iter_mut() {
            *byte = !*byte;
        }
    }

    pub fn to_grid(&self) -> BinaryGrid {
        decode(&self.bits, self.width, self.height)
    }
}

/// Packs a black/white grid. White pixels become set bits.
pub fn pack(grid: &BinaryGrid) -> PackedBitmap {
    let width = grid.width();
    let height = grid.height();
    let column_bytes = height.div_ceil(8);
    let mut bits = alloc::vec![0u8; width * column_bytes];
    for x in 0..width {
        for y in 0..height {
            if grid.is_set(x, y) {
                let (index, mask) = locate(column_bytes, x, y);
                bits[index] |= mask;
            }
        }
    }
    PackedBitmap {
        width,
        height,
        bits,
    }
}

/// Decodes packed bytes into a black/white grid.
///
/// Trailing bytes past `byte_len(width, height)` are ignored.
pub fn unpack(bits: &[u8], width: usize, height: usize) -> Result<BinaryGrid> {
    let expected = byte_len(width, height)?;
    if bits.len() < expected {
        return Err(Error::InputTooShort {
            expected,
            actual: bits.len(),
        });
    }
    Ok(decode(bits, width, height))
}

/// Caller guarantees `bits` holds at least `byte_len(width, height)` bytes.
fn decode(bits: &[u8], width: usize, height: usize) -> BinaryGrid {
    let column_bytes = height.div_ceil(8);
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let (index, mask) = locate(column_bytes, x, y);
            pixels.push(BinaryColor::from(bits[index] & mask != 0));
        }
    }
    BinaryGrid::from_raw(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_pad_height() {
        assert_eq!(pad_height(1), 8);
        assert_eq!(pad_height(8), 8);
        assert_eq!(pad_height(9), 16);
        assert_eq!(pad_height(64), 64);
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len(2, 9), Ok(4));
        assert_eq!(byte_len(128, 32), Ok(512));
        assert_eq!(byte_len(0, 8), Err(Error::EmptyImage));
    }

    #[test]
    fn test_pack_tall_white_column() {
        let grid = BinaryGrid::from_fn(2, 9, |_, _| BinaryColor::On).unwrap();
        let packed = pack(&grid);
        assert_eq!(packed.pad_height(), 16);
        assert_eq!(packed.bits(), &[0xFF, 0x01, 0xFF, 0x01]);
    }

    #[test]
    fn test_top_row_is_lsb() {
        let mut grid = BinaryGrid::new(2, 8).unwrap();
        grid.set(0, 0, BinaryColor::On);
        grid.set(1, 7, BinaryColor::On);
        assert_eq!(pack(&grid).bits(), &[0x01, 0x80]);
    }

    #[test]
    fn test_unpack_short_input() {
        let err = unpack(&[0xFF; 3], 2, 9).unwrap_err();
        assert_eq!(err, Error::InputTooShort { expected: 4, actual: 3 });
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_unpack_ignores_trailing_and_padding() {
        // Padding bits set in the second byte must not leak into the grid
        let grid = unpack(&[0x00, 0xFE, 0xAA, 0xBB], 1, 9).unwrap();
        assert_eq!(grid, BinaryGrid::new(1, 9).unwrap());
    }

    #[test]
    fn test_unpack_zero_size() {
        assert_eq!(unpack(&[], 0, 0), Err(Error::EmptyImage));
        assert_eq!(unpack(&[0xFF], 1, 0), Err(Error::EmptyImage));
    }

    #[test]
    fn test_from_bytes_truncates() {
        let packed = PackedBitmap::from_bytes(vec![0x0F, 0xF0, 0x55], 2, 4).unwrap();
        assert_eq!(packed.bits(), &[0x0F, 0xF0]);
        assert!(packed.is_set(0, 3));
        assert!(!packed.is_set(1, 3));
        assert_eq!(packed.to_grid(), unpack(&[0x0F, 0xF0], 2, 4).unwrap());
    }

    #[test]
    fn test_invert_includes_padding() {
        let mut packed = PackedBitmap::from_bytes(vec![0x00, 0x01], 1, 9).unwrap();
        packed.invert();
        assert_eq!(packed.bits(), &[0xFF, 0xFE]);
    }
}
