//! Midpoint circles and rings.
//!
//! All conics are traced one quadrant at a time, row by row, and mirrored into the other three.
use gfxprim_pixmap::Coord;

use crate::raster::Plot;

/// The rows of the upper right quadrant of a circle or an axis aligned ellipse.
///
/// Yields `(y, lo, hi)` from `y = b` down to `y = 0`: the columns `lo..=hi` are on the outline in
/// row `y`. Rows are never empty and `hi` is the outer extent of the shape in that row.
#[derive(Clone, Debug)]
pub struct QuadrantRows {
    x: i64,
    y: i64,
    err: i128,
    a2: i128,
    b2: i128,
}

impl QuadrantRows {
    /// The quadrant of a circle with radius `r`, which must not be negative.
    pub fn circle(r: Coord) -> Self {
        QuadrantRows {
            x: 0,
            y: r.into(),
            err: -i128::from(r),
            a2: 1,
            b2: 1,
        }
    }

    /// The quadrant of an ellipse with half axes `a` along x and `b` along y, both positive.
    pub fn ellipse(a: Coord, b: Coord) -> Self {
        let (a2, b2) = (i128::from(a).pow(2), i128::from(b).pow(2));
        QuadrantRows {
            x: 0,
            y: b.into(),
            err: -b2 * i128::from(a),
            a2,
            b2,
        }
    }
}

impl Iterator for QuadrantRows {
    type Item = (Coord, Coord, Coord);

    fn next(&mut self) -> Option<Self::Item> {
        if self.y < 0 {
            return None;
        }

        let start = self.x;
        while self.err < 0 {
            self.err += self.b2 * i128::from(2 * self.x + 1);
            self.x += 1;
        }
        self.err += self.a2 * i128::from(1 - 2 * self.y);

        let hi = self.x - 1;
        let row = (self.y as Coord, start.min(hi) as Coord, hi as Coord);
        self.y -= 1;
        Some(row)
    }
}

/// Draw the outline of a conic from its quadrant rows.
pub(crate) fn outline<P: Plot>(plot: &mut P, xc: Coord, yc: Coord, rows: QuadrantRows) {
    for (y, lo, hi) in rows {
        let (xc, yc, y, lo, hi) = widen(xc, yc, y, lo, hi);
        for y in mirrored(yc, y) {
            plot.hline(clamp(xc - hi), clamp(xc - lo), y);
            plot.hline(clamp(xc + lo), clamp(xc + hi), y);
        }
    }
}

/// Fill a conic from its quadrant rows.
pub(crate) fn fill<P: Plot>(plot: &mut P, xc: Coord, yc: Coord, rows: QuadrantRows) {
    for (y, _, hi) in rows {
        let (xc, yc, y, _, hi) = widen(xc, yc, y, 0, hi);
        for y in mirrored(yc, y) {
            plot.hline(clamp(xc - hi), clamp(xc + hi), y);
        }
    }
}

/// Draw the outline of the circle with center `(xc, yc)` and radius `r`.
///
/// A zero radius is a single point. Nothing is drawn for a negative one.
pub fn circle<P: Plot>(plot: &mut P, xc: Coord, yc: Coord, r: Coord) {
    if r < 0 {
        return;
    }

    if r == 0 {
        plot.plot(xc, yc);
        return;
    }

    outline(plot, xc, yc, QuadrantRows::circle(r));
}

/// Fill the circle with center `(xc, yc)` and radius `r`.
///
/// Covers exactly the outline of [`circle`] and its inside.
pub fn fill_circle<P: Plot>(plot: &mut P, xc: Coord, yc: Coord, r: Coord) {
    if r < 0 {
        return;
    }

    if r == 0 {
        plot.plot(xc, yc);
        return;
    }

    fill(plot, xc, yc, QuadrantRows::circle(r));
}

/// Draw the outlines of two concentric circles.
pub fn ring<P: Plot>(plot: &mut P, xc: Coord, yc: Coord, r1: Coord, r2: Coord) {
    circle(plot, xc, yc, r1);
    circle(plot, xc, yc, r2);
}

/// Fill the area between two concentric circles.
///
/// Both outlines belong to the ring, the radii may come in any order. With a negative inner
/// radius this is a filled circle.
pub fn fill_ring<P: Plot>(plot: &mut P, xc: Coord, yc: Coord, r1: Coord, r2: Coord) {
    let (inner, outer) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };

    if outer < 0 {
        return;
    }

    if inner < 0 {
        fill_circle(plot, xc, yc, outer);
        return;
    }

    if outer == 0 {
        plot.plot(xc, yc);
        return;
    }

    let mut inner_rows = QuadrantRows::circle(inner);
    for (y, _, ohi) in QuadrantRows::circle(outer) {
        // Rows of both circles meet from y = inner on down.
        let ilo = if y > inner {
            None
        } else {
            inner_rows.next().map(|(_, ilo, _)| ilo)
        };

        let (xc, yc, y, ilo, ohi) = widen(xc, yc, y, ilo.unwrap_or(0), ohi);
        for y in mirrored(yc, y) {
            if ilo <= 0 {
                plot.hline(clamp(xc - ohi), clamp(xc + ohi), y);
            } else {
                plot.hline(clamp(xc - ohi), clamp(xc - ilo), y);
                plot.hline(clamp(xc + ilo), clamp(xc + ohi), y);
            }
        }
    }
}

bitflags::bitflags! {
    /// Quadrants of a circle, counted counter clockwise from the upper right one.
    ///
    /// Pixels on the axes belong to both quadrants next to them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CircleSegments: u8 {
        /// Right of the center and above it.
        const UPPER_RIGHT = 0x01;
        const UPPER_LEFT = 0x02;
        const LOWER_LEFT = 0x04;
        const LOWER_RIGHT = 0x08;
    }
}

impl CircleSegments {
    /// Mirror signs of each quadrant, `(x, y)`, in storage direction.
    const SIGNS: [(CircleSegments, i64, i64); 4] = [
        (CircleSegments::UPPER_RIGHT, 1, -1),
        (CircleSegments::UPPER_LEFT, -1, -1),
        (CircleSegments::LOWER_LEFT, -1, 1),
        (CircleSegments::LOWER_RIGHT, 1, 1),
    ];
}

/// Plot the columns `lo..=hi` of row `y` of the upper right quadrant into each chosen quadrant.
fn segment_row<P: Plot>(
    plot: &mut P,
    (xc, yc): (i64, i64),
    y: i64,
    (lo, hi): (i64, i64),
    segments: CircleSegments,
) {
    for (segment, sx, sy) in CircleSegments::SIGNS {
        if !segments.contains(segment) {
            continue;
        }

        if let Ok(row) = Coord::try_from(yc + sy * y) {
            plot.hline(clamp(xc + sx * lo), clamp(xc + sx * hi), row);
        }
    }
}

/// Draw the quadrants `segments` of the outline of a circle.
///
/// The radius counts by its magnitude. All four segments draw the same pixels as [`circle`].
pub fn circle_seg<P: Plot>(
    plot: &mut P,
    xc: Coord,
    yc: Coord,
    r: Coord,
    segments: CircleSegments,
) {
    if segments.is_empty() {
        return;
    }

    let r = r.saturating_abs();
    if r == 0 {
        plot.plot(xc, yc);
        return;
    }

    for (y, lo, hi) in QuadrantRows::circle(r) {
        let (xc, yc, y, lo, hi) = widen(xc, yc, y, lo, hi);
        segment_row(plot, (xc, yc), y, (lo, hi), segments);
    }
}

/// Fill the quadrants `segments` of a circle.
pub fn fill_circle_seg<P: Plot>(
    plot: &mut P,
    xc: Coord,
    yc: Coord,
    r: Coord,
    segments: CircleSegments,
) {
    if segments.is_empty() {
        return;
    }

    let r = r.saturating_abs();
    if r == 0 {
        plot.plot(xc, yc);
        return;
    }

    for (y, _, hi) in QuadrantRows::circle(r) {
        let (xc, yc, y, _, hi) = widen(xc, yc, y, 0, hi);
        segment_row(plot, (xc, yc), y, (0, hi), segments);
    }
}

/// Draw the quadrants `segments` of two concentric circle outlines.
pub fn ring_seg<P: Plot>(
    plot: &mut P,
    xc: Coord,
    yc: Coord,
    r1: Coord,
    r2: Coord,
    segments: CircleSegments,
) {
    circle_seg(plot, xc, yc, r1, segments);
    circle_seg(plot, xc, yc, r2, segments);
}

/// Fill the quadrants `segments` of the area between two concentric circles.
///
/// Radii count by their magnitude and may come in any order. All four segments fill the same
/// pixels as [`fill_ring`].
pub fn fill_ring_seg<P: Plot>(
    plot: &mut P,
    xc: Coord,
    yc: Coord,
    r1: Coord,
    r2: Coord,
    segments: CircleSegments,
) {
    if segments.is_empty() {
        return;
    }

    let (r1, r2) = (r1.saturating_abs(), r2.saturating_abs());
    let (inner, outer) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };

    if outer == 0 {
        plot.plot(xc, yc);
        return;
    }

    let mut inner_rows = QuadrantRows::circle(inner);
    for (y, _, ohi) in QuadrantRows::circle(outer) {
        let ilo = if y > inner {
            None
        } else {
            inner_rows.next().map(|(_, ilo, _)| ilo)
        };

        let (xc, yc, y, ilo, ohi) = widen(xc, yc, y, ilo.unwrap_or(0), ohi);
        segment_row(plot, (xc, yc), y, (ilo.max(0), ohi), segments);
    }
}

fn widen(xc: Coord, yc: Coord, y: Coord, lo: Coord, hi: Coord) -> (i64, i64, i64, i64, i64) {
    (xc.into(), yc.into(), y.into(), lo.into(), hi.into())
}

/// The rows `yc - y` and `yc + y`, once when they coincide, skipping unrepresentable ones.
fn mirrored(yc: i64, y: i64) -> impl Iterator<Item = Coord> {
    let below = (y != 0).then_some(yc + y);
    core::iter::once(yc - y)
        .chain(below)
        .filter_map(|y| Coord::try_from(y).ok())
}

/// Columns outside of `Coord` are outside any plot, saturating keeps them there.
pub(crate) fn clamp(x: i64) -> Coord {
    x.clamp(Coord::MIN.into(), Coord::MAX.into()) as Coord
}
