//! Triangles, as three point polygons.
use gfxprim_pixmap::Coord;

use crate::polygon::{fill_polygon, polygon};
use crate::raster::Plot;

/// Draw the outline of the triangle with corners `(x0, y0)`, `(x1, y1)` and `(x2, y2)`.
pub fn triangle<P: Plot>(
    plot: &mut P,
    x0: Coord,
    y0: Coord,
    x1: Coord,
    y1: Coord,
    x2: Coord,
    y2: Coord,
) {
    polygon(plot, &[(x0, y0), (x1, y1), (x2, y2)]);
}

/// Fill a triangle, with the edge rules of [`fill_polygon`].
pub fn fill_triangle<P: Plot>(
    plot: &mut P,
    x0: Coord,
    y0: Coord,
    x1: Coord,
    y1: Coord,
    x2: Coord,
    y2: Coord,
) {
    fill_polygon(plot, &[(x0, y0), (x1, y1), (x2, y2)]);
}
