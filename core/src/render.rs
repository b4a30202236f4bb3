use alloc::{format, string::String, vec::Vec};

use crate::{Bitmap, Error, Result};

/// Draws the bitmap as text, `#` for white and a space for black.
///
/// With `from_packed` the pixels are read straight from the packed bytes,
/// otherwise from the grid, so the two outputs can be compared to check the
/// conversion.
pub fn ascii_art(bitmap: &Bitmap, from_packed: bool) -> String {
    if from_packed {
        let packed = bitmap.packed();
        ascii_with(packed.width(), packed.height(), |x, y| packed.is_set(x, y))
    } else {
        let grid = bitmap.grid();
        ascii_with(grid.width(), grid.height(), |x, y| grid.is_set(x, y))
    }
}

fn ascii_with(width: usize, height: usize, is_set: impl Fn(usize, usize) -> bool) -> String {
    let mut out = String::with_capacity((width + 1) * height);
    for y in 0..height {
        for x in 0..width {
            out.push(if is_set(x, y) { '#' } else { ' ' });
        }
        out.push('\n');
    }
    out
}

/// Lists bytes as C hex literals, `line_width` per line, each line starting
/// with `prefix`. There is no separator after the last byte.
pub fn c_array(bytes: &[u8], prefix: &str, line_width: usize) -> Result<String> {
    if line_width == 0 {
        return Err(Error::InvalidLineWidth);
    }
    let lines = bytes
        .chunks(line_width)
        .map(|line| {
            let literals = line
                .iter()
                .map(|b| format!("0x{b:02X}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{prefix}{literals}")
        })
        .collect::<Vec<_>>();
    Ok(lines.join(",\n"))
}

/// Wraps [`c_array`] in a complete `const uint8_t` definition.
pub fn c_source(name: &str, bitmap: &Bitmap, prefix: &str, line_width: usize) -> Result<String> {
    let body = c_array(bitmap.bits(), prefix, line_width)?;
    let mut source = String::new();
    source.push_str(&format!(
        "// {}x{}, column-major, 8 rows per byte, top row = LSB\n",
        bitmap.width(),
        bitmap.height()
    ));
    source.push_str(&format!("const uint8_t {name}[] = {{\n"));
    source.push_str(&body);
    source.push_str("\n};\n");
    Ok(source)
}
