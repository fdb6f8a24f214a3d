//! Blitting text glyphs.
use gfxprim_pixmap::{Coord, Size};

use crate::raster::Plot;

/// A glyph bitmap, one bit per pixel with the first pixel in the most significant bit.
///
/// Rows start at multiples of `bytes_per_row`, the padding bits of each row are ignored.
#[derive(Clone, Copy, Debug)]
pub struct Glyph<'bits> {
    pub bitmap: &'bits [u8],
    pub width: Size,
    pub height: Size,
    pub bytes_per_row: usize,
}

impl<'bits> Glyph<'bits> {
    /// A glyph with rows packed to whole bytes.
    ///
    /// # Panics
    ///
    /// When the bitmap is too short for the dimensions.
    pub fn new(bitmap: &'bits [u8], width: Size, height: Size) -> Self {
        let bytes_per_row = (width as usize).div_ceil(8);
        let glyph = Glyph {
            bitmap,
            width,
            height,
            bytes_per_row,
        };

        assert!(
            glyph.is_complete(),
            "Glyph bitmap of {} bytes is too short for {}x{}",
            bitmap.len(),
            width,
            height
        );

        glyph
    }

    /// Whether the bitmap covers every row.
    pub fn is_complete(&self) -> bool {
        let row = (self.width as usize).div_ceil(8);
        match self.height as usize {
            0 => true,
            h => self.bytes_per_row >= row && (h - 1) * self.bytes_per_row + row <= self.bitmap.len(),
        }
    }

    /// Whether the pixel at column `x` of row `y` is set.
    pub fn is_set(&self, x: Size, y: Size) -> bool {
        let index = y as usize * self.bytes_per_row + x as usize / 8;
        self.bitmap
            .get(index)
            .map_or(false, |byte| byte & (0x80 >> (x % 8)) != 0)
    }
}

/// Plot the set pixels of a glyph with its top left corner at `(x, y)`.
pub fn glyph<P: Plot>(plot: &mut P, x: Coord, y: Coord, glyph: &Glyph) {
    let (width, height) = (i64::from(plot.width()), i64::from(plot.height()));
    let (x, y) = (i64::from(x), i64::from(y));

    for row in 0..glyph.height {
        let py = y + i64::from(row);
        if py < 0 || py >= height {
            continue;
        }

        for col in 0..glyph.width {
            let px = x + i64::from(col);
            if px >= 0 && px < width && glyph.is_set(col, row) {
                // Both within the plot.
                plot.plot(px as Coord, py as Coord);
            }
        }
    }
}
