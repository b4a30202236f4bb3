use embedded_graphics::pixelcolor::BinaryColor;

use crate::{BinaryGrid, Error, PixelBuffer, PixelFormat, Result};

/// Luminance cutoff: anything below is black, the rest is white.
///
/// Existing exported assets depend on this exact value.
pub const THRESHOLD: u8 = 32;

/// Reduces any supported pixel buffer to strict black/white.
pub fn quantize(source: &impl PixelBuffer) -> Result<BinaryGrid> {
    match source.format() {
        PixelFormat::Binary => BinaryGrid::from_fn(source.width(), source.height(), |x, y| {
            BinaryColor::from(source.sample(x, y) != 0)
        }),
        PixelFormat::Gray => threshold(source),
        PixelFormat::Other => {
            let gray = source
                .to_gray()
                .ok_or(Error::UnsupportedPixelFormat(PixelFormat::Other))??;
            if gray.width() != source.width() || gray.height() != source.height() {
                return Err(Error::DimensionMismatch {
                    expected: source.width().saturating_mul(source.height()),
                    actual: gray.width() * gray.height(),
                });
            }
            threshold(&gray)
        }
    }
}

fn threshold(gray: &impl PixelBuffer) -> Result<BinaryGrid> {
    BinaryGrid::from_fn(gray.width(), gray.height(), |x, y| {
        BinaryColor::from(gray.sample(x, y) >= THRESHOLD)
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::{ErrorKind, GrayGrid};

    /// Reports 2x1 and converts to a gray grid of the given size, if any.
    struct Rgb {
        gray: Option<(usize, usize)>,
    }

    impl PixelBuffer for Rgb {
        fn format(&self) -> PixelFormat {
            PixelFormat::Other
        }

        fn width(&self) -> usize {
            2
        }

        fn height(&self) -> usize {
            1
        }

        fn sample(&self, _x: usize, _y: usize) -> u8 {
            0xAA
        }

        fn to_gray(&self) -> Option<Result<GrayGrid>> {
            self.gray.map(|(width, height)| {
                let data = (0..width * height)
                    .map(|i| if i % 2 == 0 { 10 } else { 200 })
                    .collect();
                GrayGrid::new(width, height, data)
            })
        }
    }

    #[test]
    fn test_threshold_boundary() {
        let gray = GrayGrid::new(4, 1, vec![0, 31, 32, 255]).unwrap();
        let grid = quantize(&gray).unwrap();
        assert!(!grid.is_set(0, 0));
        assert!(!grid.is_set(1, 0));
        assert!(grid.is_set(2, 0));
        assert!(grid.is_set(3, 0));
    }

    #[test]
    fn test_binary_passthrough() {
        let mut grid = BinaryGrid::new(3, 3).unwrap();
        grid.set(1, 2, BinaryColor::On);
        grid.set(2, 0, BinaryColor::On);
        assert_eq!(quantize(&grid).unwrap(), grid);
    }

    #[test]
    fn test_other_converted_through_gray() {
        let grid = quantize(&Rgb { gray: Some((2, 1)) }).unwrap();
        assert!(!grid.is_set(0, 0));
        assert!(grid.is_set(1, 0));
    }

    #[test]
    fn test_other_without_conversion() {
        let err = quantize(&Rgb { gray: None }).unwrap_err();
        assert_eq!(err, Error::UnsupportedPixelFormat(PixelFormat::Other));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_conversion_error_propagates() {
        let err = quantize(&Rgb { gray: Some((0, 0)) }).unwrap_err();
        assert_eq!(err, Error::EmptyImage);
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_conversion_size_mismatch() {
        let err = quantize(&Rgb { gray: Some((3, 1)) }).unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 2, actual: 3 });
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}
