use embedded_graphics::{
    Pixel,
    image::ImageDrawable,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Size},
    primitives::{PointsIter, Rectangle},
};

use crate::{BinaryGrid, PackedBitmap};

/// embedded-graphics sizes are u32, larger dimensions saturate.
fn clamped_size(width: usize, height: usize) -> Size {
    Size::new(
        u32::try_from(width).unwrap_or(u32::MAX),
        u32::try_from(height).unwrap_or(u32::MAX),
    )
}

impl OriginDimensions for BinaryGrid {
    fn size(&self) -> Size {
        clamped_size(self.width(), self.height())
    }
}

/// Lets embedded-graphics primitives and text render into a grid before packing.
impl DrawTarget for BinaryGrid {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 {
                continue;
            }
            let (x, y) = (coord.x as usize, coord.y as usize);
            if x < self.width() && y < self.height() {
                self.set(x, y, color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for PackedBitmap {
    fn size(&self) -> Size {
        clamped_size(self.width(), self.height())
    }
}

/// Draws packed assets the way firmware blits them, every pixel written
/// including black ones.
impl ImageDrawable for PackedBitmap {
    type Color = BinaryColor;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.draw_sub_image(target, &Rectangle::new(Point::zero(), self.size()))
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let area = area.intersection(&Rectangle::new(Point::zero(), self.size()));
        let origin = area.top_left;
        target.draw_iter(area.points().map(|p| {
            Pixel(p - origin, self.pixel(p.x as usize, p.y as usize))
        }))
    }
}
