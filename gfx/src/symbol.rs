//! Triangle symbols fitted into a box, as used for arrows and scroll buttons.
use alloc::vec::Vec;

use gfxprim_pixmap::{Coord, Size};

use crate::circle::clamp;
use crate::polygon::{fill_polygon, polygon};
use crate::raster::Plot;

/// A triangle pointing in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
}

impl Symbol {
    /// The corners of the symbol filling the `w` by `h` box with top left corner `(x, y)`.
    ///
    /// The base spans a whole side of the box and the tip touches the middle of the opposite
    /// one. A base of an even number of pixels has a tip two pixels wide, so the symbol stays
    /// symmetric. Empty for an empty box.
    pub fn corners(self, x: Coord, y: Coord, w: Size, h: Size) -> Vec<(Coord, Coord)> {
        if w == 0 || h == 0 {
            return Vec::new();
        }

        let (x, y) = (i64::from(x), i64::from(y));
        let (w, h) = (i64::from(w) - 1, i64::from(h) - 1);

        // Base corners, then the tip across from them, in storage order.
        let (base, tip, across) = match self {
            Symbol::TriangleUp => ([(x, y + h), (x + w, y + h)], (x, y), w),
            Symbol::TriangleDown => ([(x, y), (x + w, y)], (x, y + h), w),
            Symbol::TriangleLeft => ([(x + w, y), (x + w, y + h)], (x, y), h),
            Symbol::TriangleRight => ([(x, y), (x, y + h)], (x + w, y), h),
        };

        let along = |offset: i64| match self {
            Symbol::TriangleUp | Symbol::TriangleDown => (tip.0 + offset, tip.1),
            Symbol::TriangleLeft | Symbol::TriangleRight => (tip.0, tip.1 + offset),
        };

        let mut corners: Vec<_> = base.to_vec();
        if across % 2 == 1 {
            corners.push(along(across / 2 + 1));
        }
        corners.push(along(across / 2));

        corners
            .into_iter()
            .map(|(x, y)| (clamp(x), clamp(y)))
            .collect()
    }
}

/// Draw the outline of a symbol in the `w` by `h` box at `(x, y)`.
pub fn symbol<P: Plot>(plot: &mut P, kind: Symbol, x: Coord, y: Coord, w: Size, h: Size) {
    polygon(plot, &kind.corners(x, y, w, h));
}

/// Fill a symbol in the `w` by `h` box at `(x, y)`.
pub fn fill_symbol<P: Plot>(plot: &mut P, kind: Symbol, x: Coord, y: Coord, w: Size, h: Size) {
    fill_polygon(plot, &kind.corners(x, y, w, h));
}
