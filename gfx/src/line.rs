//! Bresenham lines.
use gfxprim_pixmap::{line_outside, Coord};

use crate::raster::Plot;

/// Draw the line between two points, both inclusive.
///
/// The line is traced from both ends towards the middle with mirrored error terms, so swapping
/// the end points gives the same pixels. Where the middle column is an exact tie, both candidate
/// pixels are set.
///
/// Only the part within the plot is traced. Coordinates far outside of it cost no more than
/// those inside.
pub fn line<P: Plot>(plot: &mut P, x0: Coord, y0: Coord, x1: Coord, y1: Coord) {
    if x0 == x1 {
        if y0 == y1 {
            plot.plot(x0, y0);
        } else {
            plot.vline(x0, y0, y1);
        }
        return;
    }

    if y0 == y1 {
        plot.hline(x0, x1, y0);
        return;
    }

    let (width, height) = (plot.width(), plot.height());
    if width == 0 || height == 0 {
        return;
    }

    if line_outside(x0.into(), y0.into(), x1.into(), y1.into(), width, height) {
        return;
    }

    // Trace along the major axis u, the minor axis is v.
    let steep = y1.abs_diff(y0) >= x1.abs_diff(x0);
    let (a, b, extent) = if steep {
        ((y0, x0), (y1, x1), height)
    } else {
        ((x0, y0), (x1, y1), width)
    };
    let ((u0, v0), (u1, v1)) = if a.0 > b.0 { (b, a) } else { (a, b) };
    let (u0, v0, u1, v1) = (i64::from(u0), i64::from(v0), i64::from(u1), i64::from(v1));

    let du = u1 - u0;
    let dv = (v1 - v0).abs();
    let step = (v1 - v0).signum();
    let half = du / 2;
    let umax = i64::from(extent) - 1;

    let mut put = |u: i64, v: i64| {
        // Both stay between the end points, within `Coord`.
        let (u, v) = (u as Coord, v as Coord);
        if steep {
            plot.plot(v, u)
        } else {
            plot.plot(u, v)
        }
    };

    let walk = Walk { du, dv, err: half };

    walk.run(0.max(-u0), half.min(umax - u0), |i, k| {
        put(u0 + i, v0 + step * k)
    });

    walk.run(0.max(u1 - umax), half.min(u1), |i, k| {
        put(u1 - i, v1 - step * k)
    });
}

/// The error term of one half of a line.
#[derive(Clone, Copy)]
struct Walk {
    du: i64,
    dv: i64,
    err: i64,
}

impl Walk {
    /// Visit steps `from..=to`, with the minor axis offset of each.
    ///
    /// The state at `from` is computed directly rather than stepped to.
    fn run(self, from: i64, to: i64, mut visit: impl FnMut(i64, i64)) {
        if from > to {
            return;
        }

        let (du, dv) = (i128::from(self.du), i128::from(self.dv));
        let behind = i128::from(from) * dv - i128::from(self.err);
        // The smallest number of minor steps that keeps the error non-negative.
        let carries = -((-behind).div_euclid(du));
        let mut k = carries as i64;
        let mut err = (i128::from(self.err) - i128::from(from) * dv + carries * du) as i64;

        for i in from..=to {
            visit(i, k);
            err -= self.dv;
            if err < 0 {
                k += 1;
                err += self.du;
            }
        }
    }
}
