//! Axis aligned ellipses.
use gfxprim_pixmap::Coord;

use crate::circle::{fill, outline, QuadrantRows};
use crate::raster::Plot;

/// Draw the outline of the ellipse with center `(xc, yc)` and half axes `a`, `b`.
///
/// With one half axis zero this degenerates to a line of length `2a + 1` or `2b + 1`. Nothing is
/// drawn for a negative half axis.
pub fn ellipse<P: Plot>(plot: &mut P, xc: Coord, yc: Coord, a: Coord, b: Coord) {
    if !degenerate(plot, xc, yc, a, b) {
        outline(plot, xc, yc, QuadrantRows::ellipse(a, b));
    }
}

/// Fill the ellipse with center `(xc, yc)` and half axes `a`, `b`.
pub fn fill_ellipse<P: Plot>(plot: &mut P, xc: Coord, yc: Coord, a: Coord, b: Coord) {
    if !degenerate(plot, xc, yc, a, b) {
        fill(plot, xc, yc, QuadrantRows::ellipse(a, b));
    }
}

/// Draw the cases without area, returns whether it was one of them.
fn degenerate<P: Plot>(plot: &mut P, xc: Coord, yc: Coord, a: Coord, b: Coord) -> bool {
    if a < 0 || b < 0 {
        return true;
    }

    if b == 0 {
        plot.hline(xc.saturating_sub(a), xc.saturating_add(a), yc);
        return true;
    }

    if a == 0 {
        plot.vline(xc, yc.saturating_sub(b), yc.saturating_add(b));
        return true;
    }

    false
}
