//! Arcs of axis aligned ellipses.
use gfxprim_pixmap::Coord;

use crate::circle::{clamp, QuadrantRows};
use crate::raster::Plot;

/// The half of an ellipse an arc runs through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArcHalf {
    /// Rows above the center, `y` smaller than `yc`.
    Upper,
    Lower,
}

/// Draw the part of an ellipse outline in one half, between two angles.
///
/// The angles are in radians. They select columns, not rows: only the outline pixels between
/// `cos(start) * a` and `cos(end) * a` relative to the center, each truncated towards zero, are
/// drawn. Going from `π` to `0` is the whole half. Nothing is drawn unless both half axes are
/// positive.
#[allow(clippy::too_many_arguments)]
pub fn arc_segment<P: Plot>(
    plot: &mut P,
    xc: Coord,
    yc: Coord,
    a: Coord,
    b: Coord,
    half: ArcHalf,
    start: f64,
    end: f64,
) {
    if a <= 0 || b <= 0 {
        return;
    }

    // Saturating float to int conversion, NaN becomes zero.
    let x0 = (libm::cos(start) * f64::from(a)) as i64;
    let x1 = (libm::cos(end) * f64::from(a)) as i64;
    let (xmin, xmax) = (x0.min(x1), x0.max(x1));

    let dy = match half {
        ArcHalf::Upper => -1,
        ArcHalf::Lower => 1,
    };

    let (xc, yc) = (i64::from(xc), i64::from(yc));
    for (y, lo, hi) in QuadrantRows::ellipse(a, b) {
        let Ok(row) = Coord::try_from(yc + dy * i64::from(y)) else {
            continue;
        };

        let (lo, hi) = (i64::from(lo), i64::from(hi));
        for (from, to) in [(-hi, -lo), (lo, hi)] {
            let (from, to) = (from.max(xmin), to.min(xmax));
            if from <= to {
                plot.hline(clamp(xc + from), clamp(xc + to), row);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use gfxprim_pixmap::Size;

    #[derive(Default)]
    struct Points(BTreeSet<(Coord, Coord)>);

    impl Plot for Points {
        fn width(&self) -> Size {
            64
        }

        fn height(&self) -> Size {
            64
        }

        fn plot(&mut self, x: Coord, y: Coord) {
            self.0.insert((x, y));
        }

        fn hline(&mut self, x0: Coord, x1: Coord, y: Coord) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.plot(x, y);
            }
        }
    }

    fn arc(half: ArcHalf, start: f64, end: f64) -> BTreeSet<(Coord, Coord)> {
        let mut points = Points::default();
        arc_segment(&mut points, 20, 20, 9, 5, half, start, end);
        points.0
    }

    #[test]
    fn quarter_stays_right_of_center() {
        let quarter = arc(ArcHalf::Upper, core::f64::consts::FRAC_PI_2, 0.0);
        assert!(!quarter.is_empty());
        assert!(quarter.iter().all(|&(x, y)| x >= 20 && y <= 20));
        assert!(quarter.contains(&(29, 20)));
        assert!(quarter.contains(&(20, 15)));
    }

    #[test]
    fn halves_mirror() {
        let upper = arc(ArcHalf::Upper, 2.5, 0.3);
        let lower = arc(ArcHalf::Lower, 2.5, 0.3);
        let mirrored: BTreeSet<_> = upper.iter().map(|&(x, y)| (x, 40 - y)).collect();
        assert_eq!(lower, mirrored);
    }

    #[test]
    fn flat_axes_draw_nothing() {
        let mut points = Points::default();
        arc_segment(&mut points, 20, 20, 0, 5, ArcHalf::Upper, 3.0, 0.0);
        arc_segment(&mut points, 20, 20, 5, -1, ArcHalf::Lower, 3.0, 0.0);
        assert!(points.0.is_empty());
    }
}
