// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Clipping of spans, rectangles and lines against pixmap bounds.
use crate::transform::{Coord, Size};

/// An axis aligned rectangle, given by its top left corner and extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: Coord,
    pub y: Coord,
    pub w: Size,
    pub h: Size,
}

bitflags::bitflags! {
    /// On which sides of a rectangle a point lies outside of it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Outcode: u8 {
        const LEFT = 0x1;
        const RIGHT = 0x2;
        const TOP = 0x4;
        const BOTTOM = 0x8;
    }
}

impl Rect {
    pub const fn new(x: Coord, y: Coord, w: Size, h: Size) -> Self {
        Rect { x, y, w, h }
    }

    /// The rectangle spanned by two corners, both inclusive, in any order.
    pub fn from_corners(x0: Coord, y0: Coord, x1: Coord, y1: Coord) -> Self {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));

        Rect {
            x: x0,
            y: y0,
            w: x1.abs_diff(x0).saturating_add(1),
            h: y1.abs_diff(y0).saturating_add(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// One past the rightmost column.
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.w)
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.h)
    }

    /// The overlap of two rectangles, `None` if they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= i64::from(x) || bottom <= i64::from(y) {
            return None;
        }

        Some(Rect {
            x,
            y,
            w: (right - i64::from(x)) as Size,
            h: (bottom - i64::from(y)) as Size,
        })
    }

    /// The part of the rectangle within `0..width` and `0..height`.
    pub fn clip_to(&self, width: Size, height: Size) -> Option<Rect> {
        let (width, height) = (clamp_size(width), clamp_size(height));
        self.intersect(&Rect::new(0, 0, width, height))
    }
}

impl Outcode {
    /// Classify `(x, y)` against `0..width` and `0..height`.
    pub fn of(x: i64, y: i64, width: Size, height: Size) -> Self {
        let mut code = Outcode::empty();
        code.set(Outcode::LEFT, x < 0);
        code.set(Outcode::RIGHT, x >= i64::from(width));
        code.set(Outcode::TOP, y < 0);
        code.set(Outcode::BOTTOM, y >= i64::from(height));
        code
    }
}

/// Whether the segment between two points certainly misses `0..width` by `0..height`.
///
/// This is the trivial rejection test of outcode clipping. A `false` result does not mean the
/// segment is visible.
pub fn line_outside(x0: i64, y0: i64, x1: i64, y1: i64, width: Size, height: Size) -> bool {
    let a = Outcode::of(x0, y0, width, height);
    let b = Outcode::of(x1, y1, width, height);
    a.intersects(b)
}

/// Clip the inclusive span between `a` and `b`, in any order, to `0..len`.
///
/// Returns the ordered, clipped bounds or `None` if nothing of the span is left.
pub fn clip_span(a: Coord, b: Coord, len: Size) -> Option<(u32, u32)> {
    let (lo, hi) = (a.min(b), a.max(b));

    if len == 0 || hi < 0 || i64::from(lo) >= i64::from(len) {
        return None;
    }

    let lo = lo.max(0) as u32;
    let hi = (hi as u32).min(len - 1);
    Some((lo, hi))
}

fn clamp_size(size: Size) -> Size {
    size.min(Coord::MAX as Size)
}
