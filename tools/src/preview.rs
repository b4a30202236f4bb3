use image::{GrayImage, Luma};
use pixpack_core::BinaryGrid;

/// White pixels become 255, black ones 0.
pub fn to_gray_image(grid: &BinaryGrid) -> GrayImage {
    GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        Luma([if grid.is_set(x as usize, y as usize) { 255 } else { 0 }])
    })
}
