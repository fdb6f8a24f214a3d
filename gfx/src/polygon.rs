//! Polygons, outlined and scan filled.
use alloc::vec::Vec;

use gfxprim_pixmap::Coord;

use crate::line::line;
use crate::raster::Plot;

/// Draw the outline of a polygon, including the edge closing it.
pub fn polygon<P: Plot>(plot: &mut P, points: &[(Coord, Coord)]) {
    let Some(&last) = points.last() else {
        return;
    };

    let mut from = last;
    for &to in points {
        line(plot, from.0, from.1, to.0, to.1);
        from = to;
    }
}

/// A non-horizontal edge, oriented downwards.
#[derive(Clone, Copy, Debug)]
struct Edge {
    /// First and last scanline covered.
    top: i64,
    bottom: i64,
    /// The x coordinate at `top`.
    x: i64,
    dx: i64,
    /// Positive.
    dy: i64,
}

impl Edge {
    /// The columns of the edge within scanline `y`, sampled half a pixel above and below.
    ///
    /// Computed in `i128`, the products exceed `i64` for edges spanning the whole `Coord` range.
    fn span(&self, y: i64) -> (i64, i64) {
        let ry = i128::from(y - self.top);
        let (dx, dy) = (i128::from(self.dx), i128::from(self.dy));
        let at = |offset: i128| {
            let num = 2 * dx * (100 * ry + offset) + 100 * dy;
            // Within half a pixel of the edge, so between its end points.
            self.x + num.div_euclid(200 * dy) as i64
        };

        let (l, r) = (at(-49), at(49));
        if l > r {
            (r, l)
        } else {
            (l, r)
        }
    }
}

/// Fill a polygon by scanlines.
///
/// Every non-horizontal edge covers the scanlines from its upper end up to, but excluding, its
/// lower end. Only at the lowest row of the polygon is the lower end included. Horizontal edges
/// are drawn as lines. Crossings are paired left to right, so self intersecting polygons are
/// filled by the even-odd rule.
pub fn fill_polygon<P: Plot>(plot: &mut P, points: &[(Coord, Coord)]) {
    match points {
        [] => return,
        [(x, y)] => return plot.plot(*x, *y),
        [a, b] => return line(plot, a.0, a.1, b.0, b.1),
        _ => {}
    }

    let widen = |&(x, y): &(Coord, Coord)| (i64::from(x), i64::from(y));
    let ymin = points.iter().map(|p| p.1).min().map_or(0, i64::from);
    let ymax = points.iter().map(|p| p.1).max().map_or(0, i64::from);

    let mut edges = Vec::with_capacity(points.len());
    let mut from = points[points.len() - 1];
    for &to in points {
        if from.1 == to.1 {
            plot.hline(from.0, to.0, to.1);
        } else {
            let (a, b) = if from.1 < to.1 { (from, to) } else { (to, from) };
            let ((ax, ay), (bx, by)) = (widen(&a), widen(&b));
            edges.push(Edge {
                top: ay,
                bottom: if by == ymax { by } else { by - 1 },
                x: ax,
                dx: bx - ax,
                dy: by - ay,
            });
        }
        from = to;
    }

    let first = ymin.max(0);
    let last = ymax.min(i64::from(plot.height()) - 1);
    log::trace!("Polygon with {} edges over rows {}..={}", edges.len(), first, last);

    let mut spans = Vec::with_capacity(edges.len());
    for y in first..=last {
        spans.clear();
        spans.extend(
            edges
                .iter()
                .filter(|edge| (edge.top..=edge.bottom).contains(&y))
                .map(|edge| edge.span(y)),
        );
        spans.sort_by_key(|span| span.0);

        // Within the rows of the plot.
        let row = y as Coord;
        for pair in spans.chunks_exact(2) {
            plot.hline(clamp(pair[0].0), clamp(pair[1].1), row);
        }
    }
}

fn clamp(x: i64) -> Coord {
    x.clamp(Coord::MIN.into(), Coord::MAX.into()) as Coord
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_spans_round_half_up() {
        // From (0, 0) down to (4, 2).
        let edge = Edge {
            top: 0,
            bottom: 1,
            x: 0,
            dx: 4,
            dy: 2,
        };

        assert_eq!(edge.span(0), (-1, 1));
        assert_eq!(edge.span(1), (1, 3));
    }

    #[test]
    fn edge_spans_ordered_when_leaning_left() {
        let edge = Edge {
            top: 0,
            bottom: 3,
            x: 6,
            dx: -6,
            dy: 3,
        };

        let (l, r) = edge.span(1);
        assert!(l <= r);
        assert_eq!((l, r), (3, 5));
    }

    #[test]
    fn edge_spans_of_the_whole_coordinate_range() {
        // From (Coord::MAX, Coord::MIN) down to (Coord::MIN, Coord::MAX), on x + y = -1.
        let edge = Edge {
            top: Coord::MIN.into(),
            bottom: Coord::MAX.into(),
            x: Coord::MAX.into(),
            dx: -(1 << 32) + 1,
            dy: (1 << 32) - 1,
        };

        assert_eq!(edge.span(5), (-6, -6));
        assert_eq!(edge.span(-1), (0, 0));
    }
}
