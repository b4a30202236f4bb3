/*!
A no_std codec for monochrome bitmaps in the column-major layout used by
small OLED controllers and the firmware that drives them.

## Layout
- one column after another, 8 rows per byte
- the topmost row of every 8-row block is the least significant bit
- every column is zero-padded to a multiple of 8 rows

## Usage
```
# use pixpack_core as pixpack;
# fn main() -> Result<(), pixpack::Error> {
let gray = pixpack::GrayGrid::new(2, 9, [255u8; 18].to_vec())?;
let bitmap = pixpack::Bitmap::from_image(&gray)?;
assert_eq!(bitmap.bits(), &[0xFF, 0x01, 0xFF, 0x01]);
assert_eq!(bitmap.ascii_art(true), bitmap.ascii_art(false));
let listing = pixpack::c_array(bitmap.bits(), "\t", 16)?;
assert_eq!(listing, "\t0xFF, 0x01, 0xFF, 0x01");
# Ok(())
# }
```
*/

#![no_std]

extern crate alloc;

mod bitmap;
mod draw;
mod error;
mod grid;
mod packed;
mod quantize;
mod render;


pub use bitmap::Bitmap;
pub use error::{Error, ErrorKind};
pub use grid::{BinaryGrid, GrayGrid, PixelBuffer, PixelFormat};
pub use packed::{PackedBitmap, byte_len, pad_height, pack, unpack};
pub use quantize::{THRESHOLD, quantize};
pub use render::{ascii_art, c_array, c_source};

pub type Result<T> = core::result::Result<T, Error>;
