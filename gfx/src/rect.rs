//! Axis aligned rectangles, given by two opposite corners or by a corner and a size.
use gfxprim_pixmap::{Coord, Size};

use crate::raster::Plot;

/// Draw the outline of the rectangle with corners `(x0, y0)` and `(x1, y1)`, both inclusive.
pub fn rect<P: Plot>(plot: &mut P, x0: Coord, y0: Coord, x1: Coord, y1: Coord) {
    plot.hline(x0, x1, y0);
    plot.hline(x0, x1, y1);
    plot.vline(x0, y0, y1);
    plot.vline(x1, y0, y1);
}

/// Fill the rectangle with corners `(x0, y0)` and `(x1, y1)`, both inclusive.
///
/// The corners may come in any order and lie anywhere, only rows within the plot are visited.
pub fn fill_rect<P: Plot>(plot: &mut P, x0: Coord, y0: Coord, x1: Coord, y1: Coord) {
    let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    let last = i64::from(plot.height()) - 1;

    if i64::from(bottom) < 0 || i64::from(top) > last {
        return;
    }

    let top = top.max(0);
    let bottom = i64::from(bottom).min(last) as Coord;
    for y in top..=bottom {
        plot.hline(x0, x1, y);
    }
}

/// Draw the outline of the `w` by `h` rectangle with top left corner `(x, y)`.
///
/// Nothing is drawn when either side is zero.
pub fn rect_xywh<P: Plot>(plot: &mut P, x: Coord, y: Coord, w: Size, h: Size) {
    if let Some((x1, y1)) = far_corner(x, y, w, h) {
        rect(plot, x, y, x1, y1);
    }
}

/// Fill the `w` by `h` rectangle with top left corner `(x, y)`.
pub fn fill_rect_xywh<P: Plot>(plot: &mut P, x: Coord, y: Coord, w: Size, h: Size) {
    if let Some((x1, y1)) = far_corner(x, y, w, h) {
        fill_rect(plot, x, y, x1, y1);
    }
}

/// The inclusive bottom right corner, none for an empty rectangle.
fn far_corner(x: Coord, y: Coord, w: Size, h: Size) -> Option<(Coord, Coord)> {
    let end = |start: Coord, len: Size| {
        let end = i64::from(start) + i64::from(len) - 1;
        end.min(Coord::MAX.into()) as Coord
    };

    (w > 0 && h > 0).then(|| (end(x, w), end(y, h)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Records the calls, not the pixels.
    #[derive(Default)]
    struct Spans {
        rows: Vec<(Coord, Coord, Coord)>,
    }

    impl Plot for Spans {
        fn width(&self) -> Size {
            4
        }

        fn height(&self) -> Size {
            4
        }

        fn plot(&mut self, _: Coord, _: Coord) {
            unreachable!("filled with spans only")
        }

        fn hline(&mut self, x0: Coord, x1: Coord, y: Coord) {
            self.rows.push((x0, x1, y));
        }
    }

    #[test]
    fn fill_visits_visible_rows_only() {
        let mut spans = Spans::default();
        fill_rect(&mut spans, 1, Coord::MAX, 2, Coord::MIN);
        assert_eq!(spans.rows, [(1, 2, 0), (1, 2, 1), (1, 2, 2), (1, 2, 3)]);

        let mut spans = Spans::default();
        fill_rect(&mut spans, 0, 4, 3, 9);
        assert!(spans.rows.is_empty());
    }

    #[test]
    fn xywh_spans_its_size() {
        let mut spans = Spans::default();
        fill_rect_xywh(&mut spans, 1, 2, 3, 2);
        assert_eq!(spans.rows, [(1, 3, 2), (1, 3, 3)]);

        let mut spans = Spans::default();
        fill_rect_xywh(&mut spans, 0, 0, 0, 3);
        fill_rect_xywh(&mut spans, 0, 0, 3, 0);
        assert!(spans.rows.is_empty());
    }

    #[test]
    fn xywh_saturates_at_the_last_coordinate() {
        assert_eq!(far_corner(Coord::MAX, 0, 5, 1), Some((Coord::MAX, 0)));
        assert_eq!(far_corner(Coord::MIN, 1, Size::MAX, 1), Some((Coord::MAX - 1, 1)));
    }
}
