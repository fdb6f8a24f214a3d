//! Thick lines, after Murphy's modified Bresenham.
use gfxprim_pixmap::{Coord, Size};

use crate::line::line;
use crate::raster::Plot;

/// Draw a line of thickness `2r + 1` between two points.
///
/// The center line is traced with Bresenham. From each of its pixels a perpendicular line is
/// traced to both sides, with the error terms of the outer walk carried over so that the
/// perpendiculars tile the band without holes. A thickness of zero is the plain [`line`], a
/// single point becomes a square.
///
/// Only the steps whose perpendiculars can reach the plot are walked, the error terms of the first
/// one are computed directly. Coordinates far outside of the plot cost no more than those inside.
pub fn line_th<P: Plot>(plot: &mut P, x0: Coord, y0: Coord, x1: Coord, y1: Coord, r: Size) {
    if r == 0 {
        line(plot, x0, y0, x1, y1);
        return;
    }

    let r = i64::from(r);
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));

    let (width, height) = (i64::from(plot.width()), i64::from(plot.height()));
    if x0.max(x1) + r < 0 || y0.max(y1) + r < 0 {
        return;
    }
    if x0.min(x1) - r >= width || y0.min(y1) - r >= height {
        return;
    }

    if x0 == x1 && y0 == y1 {
        for y in y0 - r..=y0 + r {
            if let Some(y) = coord(y) {
                plot.hline(saturate(x0 - r), saturate(x0 + r), y);
            }
        }
        return;
    }

    let mut band = Band::new(plot, (x0, y0), (x1, y1), r);
    if band.dx > band.dy {
        band.x_major(x0, y0);
    } else {
        band.y_major(x0, y0);
    }
}

/// The state shared by the outer walk and its perpendiculars.
struct Band<'plot, P> {
    plot: &'plot mut P,
    dx: i64,
    dy: i64,
    /// Steps along the line.
    step: (i64, i64),
    /// Steps along the perpendicular.
    perp: (i64, i64),
    /// The band half width, scaled by twice the line length.
    w: i64,
    /// How far the perpendiculars of one step reach along either axis, with room to spare.
    reach: i64,
}

impl<'plot, P: Plot> Band<'plot, P> {
    fn new(plot: &'plot mut P, (x0, y0): (i64, i64), (x1, y1): (i64, i64), r: i64) -> Self {
        let (dx, dy) = (x1 - x0, y1 - y0);
        let step = (dx.signum(), dy.signum());

        // Rotated a quarter turn, keyed by both step directions.
        let perp = match (step.0, step.1) {
            (-1, -1) => (1, -1),
            (-1, 0) => (0, -1),
            (-1, 1) => (1, 1),
            (0, -1) => (-1, 0),
            (0, 1) => (1, 0),
            (1, -1) => (-1, -1),
            (1, 0) => (0, -1),
            (1, 1) => (-1, 1),
            _ => (0, 0),
        };

        let (dx, dy) = (dx.abs(), dy.abs());
        let length = libm::sqrt((dx as f64) * (dx as f64) + (dy as f64) * (dy as f64));
        let w = ((2 * r + 1) as f64 * length) as i64;

        Band {
            plot,
            dx,
            dy,
            step,
            perp,
            w,
            reach: 2 * r + 2,
        }
    }

    /// The plot along x and y, for a walk starting at `(x0, y0)`.
    fn axes(&self, x0: i64, y0: i64) -> (Axis, Axis) {
        let along_x = Axis {
            start: x0,
            step: self.step.0,
            len: self.plot.width().into(),
        };
        let along_y = Axis {
            start: y0,
            step: self.step.1,
            len: self.plot.height().into(),
        };
        (along_x, along_y)
    }

    fn put(&mut self, x: i64, y: i64) {
        if let (Some(x), Some(y)) = (coord(x), coord(y)) {
            self.plot.plot(x, y);
        }
    }

    fn x_major(&mut self, x0: i64, y0: i64) {
        let (dx, dy) = (self.dx, self.dy);
        let threshold = dx - 2 * dy;
        let diagonal = -2 * dx;
        let square = 2 * dy;

        let (along_x, along_y) = self.axes(x0, y0);
        let Some((first, last)) = visible_steps(along_x, along_y, dx, dy, self.reach) else {
            return;
        };

        let (k, mut err) = carried(first, dx, dy);
        let (_, mut perr) = carried(k, dx, dy);
        let (mut x, mut y) = (x0 + self.step.0 * first, y0 + self.step.1 * k);
        for _ in first..=last {
            self.x_perpendicular(x, y, perr, err);
            if err >= threshold {
                y += self.step.1;
                err += diagonal;
                if perr >= threshold {
                    // Corner step, fill the gap between both perpendiculars.
                    self.x_perpendicular(x, y, perr + diagonal + square, err);
                    perr += diagonal;
                }
                perr += square;
            }
            err += square;
            x += self.step.0;
        }
    }

    fn y_major(&mut self, x0: i64, y0: i64) {
        let (dx, dy) = (self.dx, self.dy);
        let threshold = dy - 2 * dx;
        let diagonal = -2 * dy;
        let square = 2 * dx;

        let (along_x, along_y) = self.axes(x0, y0);
        let Some((first, last)) = visible_steps(along_y, along_x, dy, dx, self.reach) else {
            return;
        };

        let (k, mut err) = carried(first, dy, dx);
        let (_, mut perr) = carried(k, dy, dx);
        let (mut x, mut y) = (x0 + self.step.0 * k, y0 + self.step.1 * first);
        for _ in first..=last {
            self.y_perpendicular(x, y, perr, err);
            if err >= threshold {
                x += self.step.0;
                err += diagonal;
                if perr >= threshold {
                    self.y_perpendicular(x, y, perr + diagonal + square, err);
                    perr += diagonal;
                }
                perr += square;
            }
            err += square;
            y += self.step.1;
        }
    }

    /// The perpendicular through `(x0, y0)` of an x-major line.
    fn x_perpendicular(&mut self, x0: i64, y0: i64, einit: i64, winit: i64) {
        let (dx, dy) = (self.dx, self.dy);
        let (pxs, pys) = self.perp;
        let threshold = dx - 2 * dy;
        let diagonal = -2 * dx;
        let square = 2 * dy;

        let (mut x, mut y) = (x0, y0);
        let mut err = einit;
        let mut tk = dx + dy - winit;
        let mut left = 0;
        while tk <= self.w {
            self.put(x, y);
            if err >= threshold {
                x += pxs;
                err += diagonal;
                tk += 2 * dy;
            }
            err += square;
            y += pys;
            tk += 2 * dx;
            left += 1;
        }

        let (mut x, mut y) = (x0, y0);
        let mut err = -einit;
        let mut tk = dx + dy + winit;
        let mut right = 0;
        while tk <= self.w {
            if right > 0 {
                self.put(x, y);
            }
            if err > threshold {
                x -= pxs;
                err += diagonal;
                tk += 2 * dy;
            }
            err += square;
            y -= pys;
            tk += 2 * dx;
            right += 1;
        }

        if left == 0 && right < 2 {
            self.put(x0, y0);
        }
    }

    /// The perpendicular through `(x0, y0)` of a y-major line.
    fn y_perpendicular(&mut self, x0: i64, y0: i64, einit: i64, winit: i64) {
        let (dx, dy) = (self.dx, self.dy);
        let (pxs, pys) = self.perp;
        let threshold = dy - 2 * dx;
        let diagonal = -2 * dy;
        let square = 2 * dx;

        let (mut x, mut y) = (x0, y0);
        let mut err = -einit;
        let mut tk = dx + dy + winit;
        let mut left = 0;
        while tk <= self.w {
            self.put(x, y);
            if err > threshold {
                y += pys;
                err += diagonal;
                tk += 2 * dx;
            }
            err += square;
            x += pxs;
            tk += 2 * dy;
            left += 1;
        }

        let (mut x, mut y) = (x0, y0);
        let mut err = einit;
        let mut tk = dx + dy - winit;
        let mut right = 0;
        while tk <= self.w {
            if right > 0 {
                self.put(x, y);
            }
            if err >= threshold {
                y -= pys;
                err += diagonal;
                tk += 2 * dx;
            }
            err += square;
            x -= pxs;
            tk += 2 * dy;
            right += 1;
        }

        if left == 0 && right < 2 {
            self.put(x0, y0);
        }
    }
}

/// One axis of the outer walk, and the extent of the plot along it.
#[derive(Clone, Copy)]
struct Axis {
    start: i64,
    step: i64,
    len: i64,
}

impl Axis {
    /// The offsets, counted in walking direction, that land within the plot widened by `margin`.
    fn window(self, margin: i64) -> (i64, i64) {
        if self.step < 0 {
            (self.start - (self.len - 1 + margin), self.start + margin)
        } else {
            (-margin - self.start, self.len - 1 + margin - self.start)
        }
    }
}

/// The steps `first..=last` of a walk along the major axis `u` with a foot near the plot.
///
/// The minor offset after step `i` is `(2 dv i + du) / 2 du`, rounded down, so the steps of a
/// window of minor offsets are found by inverting it.
fn visible_steps(u: Axis, v: Axis, du: i64, dv: i64, margin: i64) -> Option<(i64, i64)> {
    let (mut first, mut last) = u.window(margin);
    let (kmin, kmax) = v.window(margin);

    if dv == 0 {
        if kmin > 0 || kmax < 0 {
            return None;
        }
    } else {
        let (du, du2, dv2) = (i128::from(du), 2 * i128::from(du), 2 * i128::from(dv));
        let from = -(du - du2 * i128::from(kmin)).div_euclid(dv2);
        let to = (du2 * (i128::from(kmax) + 1) - 1 - du).div_euclid(dv2);
        first = first.max(saturate_i64(from));
        last = last.min(saturate_i64(to));
    }

    let (first, last) = (first.max(0), last.min(du));
    (first <= last).then_some((first, last))
}

/// The minor steps taken, and the error term, after `n` steps of a walk.
fn carried(n: i64, du: i64, dv: i64) -> (i64, i64) {
    let (n, du, dv) = (i128::from(n), i128::from(du), i128::from(dv));
    let k = (2 * dv * n + du).div_euclid(2 * du);
    // The error stays within `-du..du`, `k` is at most `n`.
    (k as i64, (2 * dv * n - 2 * du * k) as i64)
}

fn saturate_i64(v: i128) -> i64 {
    v.clamp(i64::MIN.into(), i64::MAX.into()) as i64
}

fn coord(v: i64) -> Option<Coord> {
    Coord::try_from(v).ok()
}

fn saturate(v: i64) -> Coord {
    v.clamp(Coord::MIN.into(), Coord::MAX.into()) as Coord
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    struct Points {
        size: Size,
        set: BTreeSet<(Coord, Coord)>,
        calls: usize,
    }

    impl Plot for Points {
        fn width(&self) -> Size {
            self.size
        }

        fn height(&self) -> Size {
            self.size
        }

        fn plot(&mut self, x: Coord, y: Coord) {
            self.calls += 1;
            if (0..self.size as Coord).contains(&x) && (0..self.size as Coord).contains(&y) {
                self.set.insert((x, y));
            }
        }
    }

    fn traced(size: Size, x0: Coord, y0: Coord, x1: Coord, y1: Coord, r: Size) -> Points {
        let mut points = Points {
            size,
            set: BTreeSet::new(),
            calls: 0,
        };
        line_th(&mut points, x0, y0, x1, y1, r);
        points
    }

    fn band(x0: Coord, y0: Coord, x1: Coord, y1: Coord, r: Size) -> BTreeSet<(Coord, Coord)> {
        traced(64, x0, y0, x1, y1, r).set
    }

    fn distance(p: (Coord, Coord), a: (Coord, Coord), b: (Coord, Coord)) -> f64 {
        let (px, py) = (f64::from(p.0), f64::from(p.1));
        let (ax, ay) = (f64::from(a.0), f64::from(a.1));
        let (vx, vy) = (f64::from(b.0) - ax, f64::from(b.1) - ay);
        let t = (((px - ax) * vx + (py - ay) * vy) / (vx * vx + vy * vy)).clamp(0.0, 1.0);
        libm::hypot(px - (ax + t * vx), py - (ay + t * vy))
    }

    #[test]
    fn horizontal_band() {
        let set = band(2, 3, 8, 3, 2);
        let expected: BTreeSet<_> = (1..=5)
            .flat_map(|y| (2..=8).map(move |x| (x, y)))
            .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn vertical_band() {
        let set = band(3, 2, 3, 8, 2);
        let expected: BTreeSet<_> = (2..=8)
            .flat_map(|y| (1..=5).map(move |x| (x, y)))
            .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn stays_near_the_segment() {
        let lines = [
            (10, 12, 40, 25, 1),
            (35, 10, 12, 38, 3),
            (20, 40, 30, 11, 2),
            (11, 11, 38, 38, 4),
            (40, 30, 10, 29, 5),
        ];

        for (x0, y0, x1, y1, r) in lines {
            let set = band(x0, y0, x1, y1, r);
            assert!(set.contains(&(x0, y0)) && set.contains(&(x1, y1)));

            for &p in &set {
                let d = distance(p, (x0, y0), (x1, y1));
                assert!(d <= f64::from(r) + 2.0, "{:?} is {} away", p, d);
            }
        }
    }

    #[test]
    fn outside_is_skipped() {
        assert!(band(-20, -20, -3, -10, 2).is_empty());
        assert_eq!(band(-20, 1, 0, 1, 2).len(), 4);
    }

    #[test]
    fn far_steps_are_not_walked() {
        let points = traced(16, -100_000_000, 5, 100_000_000, 5, 1);
        let expected: BTreeSet<_> = (4..=6)
            .flat_map(|y| (0..16).map(move |x| (x, y)))
            .collect();
        assert_eq!(points.set, expected);
        assert!(points.calls < 1_000, "{} pixels plotted", points.calls);

        let points = traced(16, 3, -400_000_000, 9, 400_000_000, 3);
        assert!(!points.set.is_empty());
        assert!(points.calls < 1_000, "{} pixels plotted", points.calls);
    }

    #[test]
    fn far_diagonal_matches_short_one() {
        const FAR: Coord = 100_000_000;
        // Pairs on the same diagonal through the plot, both ends well outside of it.
        let lines = [
            ((-FAR, 5 - FAR, FAR, FAR + 5), (-40, -35, 60, 65)),
            ((FAR, FAR + 5, -FAR, 5 - FAR), (60, 65, -40, -35)),
            ((-FAR, FAR + 20, FAR, 20 - FAR), (-40, 60, 60, -40)),
            ((FAR, 20 - FAR, -FAR, FAR + 20), (60, -40, -40, 60)),
        ];

        for ((x0, y0, x1, y1), (u0, v0, u1, v1)) in lines {
            let far = traced(16, x0, y0, x1, y1, 2);
            let near = traced(16, u0, v0, u1, v1, 2);
            assert!(!far.set.is_empty());
            assert_eq!(far.set, near.set);
        }
    }
}
