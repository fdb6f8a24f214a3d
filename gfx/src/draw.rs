//! Drawing into pixmaps.
//!
//! Every primitive comes twice. The `_raw` variant takes storage coordinates and ignores the
//! transform of the pixmap. The plain variant takes user coordinates, maps them through the
//! transform and draws the raw variant. Both clip.
//!
//! Shapes that are not symmetric under the transform, circle segments, arcs, symbols and glyphs,
//! are instead traced in user coordinates through a [`Transformed`] plot. They keep their look
//! relative to the user axes when the pixmap is rotated.
//!
//! Mapped coordinates saturate at the ends of [`Coord`], see
//! [`Transform::point`](gfxprim_pixmap::Transform::point).
use alloc::vec::Vec;

use gfxprim_pixmap::{Coord, Pixel, Pixmap, Size};

use crate::arc::ArcHalf;
use crate::circle::CircleSegments;
use crate::glyph::Glyph;
use crate::raster::{rasterize, Plot, RasterAction, Transformed};
use crate::symbol::Symbol;

/// Define raw entry points that bind an algorithm of plain arguments to a pixmap.
macro_rules! raw_primitives {
    ($(
        $(#[$attr:meta])*
        fn $name:ident => $algo:path { $($arg:ident: $ty:ty),* }
    )*) => {$(
        $(#[$attr])*
        pub fn $name<D>(pixmap: &mut Pixmap<D>, $($arg: $ty,)* pixel: Pixel)
        where
            D: AsRef<[u8]> + AsMut<[u8]>,
        {
            struct Action {
                $($arg: $ty,)*
            }

            impl RasterAction for Action {
                fn draw<P: Plot>(self, plot: &mut P) {
                    $algo(plot, $(self.$arg),*)
                }
            }

            rasterize(pixmap, pixel, Action { $($arg),* })
        }
    )*};
}

raw_primitives! {
    /// A horizontal line from `x0` to `x1` inclusive, in storage coordinates.
    fn hline_raw => Plot::hline { x0: Coord, x1: Coord, y: Coord }
    /// A vertical line from `y0` to `y1` inclusive, in storage coordinates.
    fn vline_raw => Plot::vline { x: Coord, y0: Coord, y1: Coord }
    fn line_raw => crate::line::line { x0: Coord, y0: Coord, x1: Coord, y1: Coord }
    fn line_th_raw => crate::line_th::line_th { x0: Coord, y0: Coord, x1: Coord, y1: Coord, r: Size }
    fn circle_raw => crate::circle::circle { xc: Coord, yc: Coord, r: Coord }
    fn fill_circle_raw => crate::circle::fill_circle { xc: Coord, yc: Coord, r: Coord }
    fn ring_raw => crate::circle::ring { xc: Coord, yc: Coord, r1: Coord, r2: Coord }
    fn fill_ring_raw => crate::circle::fill_ring { xc: Coord, yc: Coord, r1: Coord, r2: Coord }
    fn ellipse_raw => crate::ellipse::ellipse { xc: Coord, yc: Coord, a: Coord, b: Coord }
    fn fill_ellipse_raw => crate::ellipse::fill_ellipse { xc: Coord, yc: Coord, a: Coord, b: Coord }
    fn rect_raw => crate::rect::rect { x0: Coord, y0: Coord, x1: Coord, y1: Coord }
    fn fill_rect_raw => crate::rect::fill_rect { x0: Coord, y0: Coord, x1: Coord, y1: Coord }
    #[allow(clippy::too_many_arguments)]
    fn triangle_raw => crate::triangle::triangle {
        x0: Coord, y0: Coord, x1: Coord, y1: Coord, x2: Coord, y2: Coord
    }
    #[allow(clippy::too_many_arguments)]
    fn fill_triangle_raw => crate::triangle::fill_triangle {
        x0: Coord, y0: Coord, x1: Coord, y1: Coord, x2: Coord, y2: Coord
    }
    /// The outline of the `w` by `h` rectangle at `(x, y)`, in storage coordinates.
    fn rect_xywh_raw => crate::rect::rect_xywh { x: Coord, y: Coord, w: Size, h: Size }
    fn fill_rect_xywh_raw => crate::rect::fill_rect_xywh { x: Coord, y: Coord, w: Size, h: Size }
    /// The quadrants `segments` of a circle outline, in storage directions.
    fn circle_seg_raw => crate::circle::circle_seg {
        xc: Coord, yc: Coord, r: Coord, segments: CircleSegments
    }
    fn fill_circle_seg_raw => crate::circle::fill_circle_seg {
        xc: Coord, yc: Coord, r: Coord, segments: CircleSegments
    }
    fn ring_seg_raw => crate::circle::ring_seg {
        xc: Coord, yc: Coord, r1: Coord, r2: Coord, segments: CircleSegments
    }
    fn fill_ring_seg_raw => crate::circle::fill_ring_seg {
        xc: Coord, yc: Coord, r1: Coord, r2: Coord, segments: CircleSegments
    }
    #[allow(clippy::too_many_arguments)]
    fn arc_segment_raw => crate::arc::arc_segment {
        xc: Coord, yc: Coord, a: Coord, b: Coord, half: ArcHalf, start: f64, end: f64
    }
    fn symbol_raw => crate::symbol::symbol {
        kind: Symbol, x: Coord, y: Coord, w: Size, h: Size
    }
    fn fill_symbol_raw => crate::symbol::fill_symbol {
        kind: Symbol, x: Coord, y: Coord, w: Size, h: Size
    }
}

/// Define entry points that trace an algorithm in user coordinates.
///
/// The algorithm draws into a [`Transformed`] view of the pixmap, so every pixel is mapped on
/// its own.
macro_rules! transformed_primitives {
    ($(
        $(#[$attr:meta])*
        fn $name:ident => $algo:path { $($arg:ident: $ty:ty),* }
    )*) => {$(
        $(#[$attr])*
        pub fn $name<D>(pixmap: &mut Pixmap<D>, $($arg: $ty,)* pixel: Pixel)
        where
            D: AsRef<[u8]> + AsMut<[u8]>,
        {
            struct Action {
                transform: gfxprim_pixmap::Transform,
                $($arg: $ty,)*
            }

            impl RasterAction for Action {
                fn draw<P: Plot>(self, plot: &mut P) {
                    let mut view = Transformed::new(plot, self.transform);
                    $algo(&mut view, $(self.$arg),*)
                }
            }

            let transform = pixmap.transform();
            rasterize(pixmap, pixel, Action { transform, $($arg),* })
        }
    )*};
}

transformed_primitives! {
    /// The quadrants `segments` of a circle outline, named by their user directions.
    fn circle_seg => crate::circle::circle_seg {
        xc: Coord, yc: Coord, r: Coord, segments: CircleSegments
    }
    fn fill_circle_seg => crate::circle::fill_circle_seg {
        xc: Coord, yc: Coord, r: Coord, segments: CircleSegments
    }
    fn ring_seg => crate::circle::ring_seg {
        xc: Coord, yc: Coord, r1: Coord, r2: Coord, segments: CircleSegments
    }
    fn fill_ring_seg => crate::circle::fill_ring_seg {
        xc: Coord, yc: Coord, r1: Coord, r2: Coord, segments: CircleSegments
    }
    /// An arc of the ellipse with half axes `a` along user x and `b` along user y.
    #[allow(clippy::too_many_arguments)]
    fn arc_segment => crate::arc::arc_segment {
        xc: Coord, yc: Coord, a: Coord, b: Coord, half: ArcHalf, start: f64, end: f64
    }
    /// The outline of a symbol, pointing in its user direction.
    fn symbol => crate::symbol::symbol {
        kind: Symbol, x: Coord, y: Coord, w: Size, h: Size
    }
    fn fill_symbol => crate::symbol::fill_symbol {
        kind: Symbol, x: Coord, y: Coord, w: Size, h: Size
    }
}

/// A horizontal line of `w` pixels starting at `x`, in storage coordinates.
pub fn hline_xyw_raw<D>(pixmap: &mut Pixmap<D>, x: Coord, y: Coord, w: Size, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    if let Some(x1) = span_end(x, w) {
        hline_raw(pixmap, x, x1, y, pixel)
    }
}

/// A vertical line of `h` pixels starting at `y`, in storage coordinates.
pub fn vline_xyh_raw<D>(pixmap: &mut Pixmap<D>, x: Coord, y: Coord, h: Size, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    if let Some(y1) = span_end(y, h) {
        vline_raw(pixmap, x, y, y1, pixel)
    }
}

pub fn polygon_raw<D>(pixmap: &mut Pixmap<D>, points: &[(Coord, Coord)], pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    struct Action<'points> {
        points: &'points [(Coord, Coord)],
    }

    impl RasterAction for Action<'_> {
        fn draw<P: Plot>(self, plot: &mut P) {
            crate::polygon::polygon(plot, self.points)
        }
    }

    rasterize(pixmap, pixel, Action { points })
}

pub fn fill_polygon_raw<D>(pixmap: &mut Pixmap<D>, points: &[(Coord, Coord)], pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    struct Action<'points> {
        points: &'points [(Coord, Coord)],
    }

    impl RasterAction for Action<'_> {
        fn draw<P: Plot>(self, plot: &mut P) {
            crate::polygon::fill_polygon(plot, self.points)
        }
    }

    rasterize(pixmap, pixel, Action { points })
}

/// Blit a glyph with its top left corner at storage coordinates `(x, y)`.
pub fn glyph_raw<D>(pixmap: &mut Pixmap<D>, x: Coord, y: Coord, glyph: &Glyph, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    struct Action<'glyph, 'bits> {
        x: Coord,
        y: Coord,
        glyph: &'glyph Glyph<'bits>,
    }

    impl RasterAction for Action<'_, '_> {
        fn draw<P: Plot>(self, plot: &mut P) {
            crate::glyph::glyph(plot, self.x, self.y, self.glyph)
        }
    }

    rasterize(pixmap, pixel, Action { x, y, glyph })
}

pub fn hline<D>(pixmap: &mut Pixmap<D>, x0: Coord, x1: Coord, y: Coord, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (ax, ay) = pixmap.transform_point(x0, y);
    let (bx, by) = pixmap.transform_point(x1, y);

    if ay == by {
        hline_raw(pixmap, ax, bx, ay, pixel)
    } else {
        vline_raw(pixmap, ax, ay, by, pixel)
    }
}

pub fn hline_xyw<D>(pixmap: &mut Pixmap<D>, x: Coord, y: Coord, w: Size, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    if let Some(x1) = span_end(x, w) {
        hline(pixmap, x, x1, y, pixel)
    }
}

pub fn vline<D>(pixmap: &mut Pixmap<D>, x: Coord, y0: Coord, y1: Coord, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (ax, ay) = pixmap.transform_point(x, y0);
    let (bx, by) = pixmap.transform_point(x, y1);

    if ax == bx {
        vline_raw(pixmap, ax, ay, by, pixel)
    } else {
        hline_raw(pixmap, ax, bx, ay, pixel)
    }
}

pub fn vline_xyh<D>(pixmap: &mut Pixmap<D>, x: Coord, y: Coord, h: Size, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    if let Some(y1) = span_end(y, h) {
        vline(pixmap, x, y, y1, pixel)
    }
}

/// A line between two points, both inclusive.
///
/// Swapping the points draws the same pixels.
pub fn line<D>(pixmap: &mut Pixmap<D>, x0: Coord, y0: Coord, x1: Coord, y1: Coord, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (x0, y0) = pixmap.transform_point(x0, y0);
    let (x1, y1) = pixmap.transform_point(x1, y1);
    line_raw(pixmap, x0, y0, x1, y1, pixel)
}

/// A line of thickness `2r + 1`.
pub fn line_th<D>(
    pixmap: &mut Pixmap<D>,
    x0: Coord,
    y0: Coord,
    x1: Coord,
    y1: Coord,
    r: Size,
    pixel: Pixel,
) where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (x0, y0) = pixmap.transform_point(x0, y0);
    let (x1, y1) = pixmap.transform_point(x1, y1);
    line_th_raw(pixmap, x0, y0, x1, y1, r, pixel)
}

pub fn circle<D>(pixmap: &mut Pixmap<D>, xc: Coord, yc: Coord, r: Coord, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (xc, yc) = pixmap.transform_point(xc, yc);
    circle_raw(pixmap, xc, yc, r, pixel)
}

pub fn fill_circle<D>(pixmap: &mut Pixmap<D>, xc: Coord, yc: Coord, r: Coord, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (xc, yc) = pixmap.transform_point(xc, yc);
    fill_circle_raw(pixmap, xc, yc, r, pixel)
}

pub fn ring<D>(pixmap: &mut Pixmap<D>, xc: Coord, yc: Coord, r1: Coord, r2: Coord, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (xc, yc) = pixmap.transform_point(xc, yc);
    ring_raw(pixmap, xc, yc, r1, r2, pixel)
}

pub fn fill_ring<D>(
    pixmap: &mut Pixmap<D>,
    xc: Coord,
    yc: Coord,
    r1: Coord,
    r2: Coord,
    pixel: Pixel,
) where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (xc, yc) = pixmap.transform_point(xc, yc);
    fill_ring_raw(pixmap, xc, yc, r1, r2, pixel)
}

/// An ellipse with half axes `a` along x and `b` along y, in user coordinates.
pub fn ellipse<D>(pixmap: &mut Pixmap<D>, xc: Coord, yc: Coord, a: Coord, b: Coord, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (xc, yc) = pixmap.transform_point(xc, yc);
    let (a, b) = if pixmap.axes_swap() { (b, a) } else { (a, b) };
    ellipse_raw(pixmap, xc, yc, a, b, pixel)
}

pub fn fill_ellipse<D>(
    pixmap: &mut Pixmap<D>,
    xc: Coord,
    yc: Coord,
    a: Coord,
    b: Coord,
    pixel: Pixel,
) where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (xc, yc) = pixmap.transform_point(xc, yc);
    let (a, b) = if pixmap.axes_swap() { (b, a) } else { (a, b) };
    fill_ellipse_raw(pixmap, xc, yc, a, b, pixel)
}

pub fn rect<D>(pixmap: &mut Pixmap<D>, x0: Coord, y0: Coord, x1: Coord, y1: Coord, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (x0, y0) = pixmap.transform_point(x0, y0);
    let (x1, y1) = pixmap.transform_point(x1, y1);
    rect_raw(pixmap, x0, y0, x1, y1, pixel)
}

/// Fill the rectangle between two corners, both inclusive, in any order.
pub fn fill_rect<D>(
    pixmap: &mut Pixmap<D>,
    x0: Coord,
    y0: Coord,
    x1: Coord,
    y1: Coord,
    pixel: Pixel,
) where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (x0, y0) = pixmap.transform_point(x0, y0);
    let (x1, y1) = pixmap.transform_point(x1, y1);
    fill_rect_raw(pixmap, x0, y0, x1, y1, pixel)
}

/// The outline of the `w` by `h` rectangle with top left corner `(x, y)`.
pub fn rect_xywh<D>(pixmap: &mut Pixmap<D>, x: Coord, y: Coord, w: Size, h: Size, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    if let (Some(x1), Some(y1)) = (span_end(x, w), span_end(y, h)) {
        rect(pixmap, x, y, x1, y1, pixel)
    }
}

pub fn fill_rect_xywh<D>(
    pixmap: &mut Pixmap<D>,
    x: Coord,
    y: Coord,
    w: Size,
    h: Size,
    pixel: Pixel,
) where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    if let (Some(x1), Some(y1)) = (span_end(x, w), span_end(y, h)) {
        fill_rect(pixmap, x, y, x1, y1, pixel)
    }
}

#[allow(clippy::too_many_arguments)]
pub fn triangle<D>(
    pixmap: &mut Pixmap<D>,
    x0: Coord,
    y0: Coord,
    x1: Coord,
    y1: Coord,
    x2: Coord,
    y2: Coord,
    pixel: Pixel,
) where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (x0, y0) = pixmap.transform_point(x0, y0);
    let (x1, y1) = pixmap.transform_point(x1, y1);
    let (x2, y2) = pixmap.transform_point(x2, y2);
    triangle_raw(pixmap, x0, y0, x1, y1, x2, y2, pixel)
}

#[allow(clippy::too_many_arguments)]
pub fn fill_triangle<D>(
    pixmap: &mut Pixmap<D>,
    x0: Coord,
    y0: Coord,
    x1: Coord,
    y1: Coord,
    x2: Coord,
    y2: Coord,
    pixel: Pixel,
) where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let (x0, y0) = pixmap.transform_point(x0, y0);
    let (x1, y1) = pixmap.transform_point(x1, y1);
    let (x2, y2) = pixmap.transform_point(x2, y2);
    fill_triangle_raw(pixmap, x0, y0, x1, y1, x2, y2, pixel)
}

/// The outline of a polygon, closed from the last point back to the first.
pub fn polygon<D>(pixmap: &mut Pixmap<D>, points: &[(Coord, Coord)], pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let points = transform_points(pixmap, points);
    polygon_raw(pixmap, &points, pixel)
}

/// Fill a polygon, self intersections by the even-odd rule.
pub fn fill_polygon<D>(pixmap: &mut Pixmap<D>, points: &[(Coord, Coord)], pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let points = transform_points(pixmap, points);
    fill_polygon_raw(pixmap, &points, pixel)
}

/// Blit a glyph with its top left corner at `(x, y)`.
///
/// The glyph is drawn upright in user coordinates, so it turns along with the pixmap.
pub fn glyph<D>(pixmap: &mut Pixmap<D>, x: Coord, y: Coord, glyph: &Glyph, pixel: Pixel)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    struct Action<'glyph, 'bits> {
        x: Coord,
        y: Coord,
        glyph: &'glyph Glyph<'bits>,
        transform: gfxprim_pixmap::Transform,
    }

    impl RasterAction for Action<'_, '_> {
        fn draw<P: Plot>(self, plot: &mut P) {
            let mut view = Transformed::new(plot, self.transform);
            crate::glyph::glyph(&mut view, self.x, self.y, self.glyph)
        }
    }

    let transform = pixmap.transform();
    rasterize(
        pixmap,
        pixel,
        Action {
            x,
            y,
            glyph,
            transform,
        },
    )
}

/// The inclusive end of a span of `len` pixels, none when empty.
fn span_end(start: Coord, len: Size) -> Option<Coord> {
    let end = i64::from(start) + i64::from(len) - 1;
    (len > 0).then(|| end.min(Coord::MAX.into()) as Coord)
}

fn transform_points<D: AsRef<[u8]>>(
    pixmap: &Pixmap<D>,
    points: &[(Coord, Coord)],
) -> Vec<(Coord, Coord)> {
    points
        .iter()
        .map(|&(x, y)| pixmap.transform_point(x, y))
        .collect()
}
