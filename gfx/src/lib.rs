//! Raster primitives for gfxprim pixmaps.
//!
//! Lines, thick lines, circles and their quadrants, rings, ellipses and arcs, rectangles,
//! triangles, polygons, symbols and glyphs, drawn into a [`Pixmap`](gfxprim_pixmap::Pixmap) of
//! any pixel format. The results are bit exact: the same call always sets the same pixels,
//! independent of the format.
//!
//! Each algorithm is written once against the [`Plot`] trait, see [`generic`]. Drawing into a
//! pixmap picks the accessor of its storage class once per call, the algorithm then runs
//! monomorphized for that accessor.
//!
//! # Usage
//!
//! ```
//! use gfxprim_pixmap::{Pixmap, PixelType};
//!
//! let mut pixmap = Pixmap::new(16, 16, PixelType::G1_UB).unwrap();
//! gfxprim_gfx::fill_circle(&mut pixmap, 8, 8, 3, 1);
//! gfxprim_gfx::line(&mut pixmap, 0, 0, 15, 15, 1);
//!
//! assert_eq!(pixmap.get_pixel(8, 5), 1);
//! assert_eq!(pixmap.get_pixel(15, 15), 1);
//! assert_eq!(pixmap.get_pixel(15, 0), 0);
//! ```
//!
//! Coordinates are user coordinates, mapped through the transform of the pixmap. The `_raw`
//! variants take storage coordinates instead.
//!
//! ```
//! use gfxprim_pixmap::{Pixmap, PixelType};
//!
//! let mut pixmap = Pixmap::new(8, 4, PixelType::G8).unwrap();
//! pixmap.rotate_cw();
//! gfxprim_gfx::hline(&mut pixmap, 0, 3, 0, 0xff);
//!
//! // The first user row is the last storage column.
//! assert!((0..4).all(|y| pixmap.get_pixel_raw(7, y) == 0xff));
//! ```
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]
extern crate alloc;

mod arc;
mod circle;
mod draw;
mod ellipse;
mod glyph;
mod line;
mod line_th;
mod polygon;
mod raster;
mod rect;
mod symbol;
mod triangle;

pub use self::arc::ArcHalf;
pub use self::circle::CircleSegments;
pub use self::draw::*;
pub use self::glyph::Glyph;
pub use self::raster::{rasterize, Plot, Raster, RasterAction, Transformed};
pub use self::symbol::Symbol;

/// The algorithms, for any [`Plot`].
///
/// Coordinates are those of the plot, nothing is transformed.
pub mod generic {
    pub use crate::arc::arc_segment;
    pub use crate::circle::{
        circle, circle_seg, fill_circle, fill_circle_seg, fill_ring, fill_ring_seg, ring, ring_seg,
        QuadrantRows,
    };
    pub use crate::ellipse::{ellipse, fill_ellipse};
    pub use crate::glyph::glyph;
    pub use crate::line::line;
    pub use crate::line_th::line_th;
    pub use crate::polygon::{fill_polygon, polygon};
    pub use crate::rect::{fill_rect, fill_rect_xywh, rect, rect_xywh};
    pub use crate::symbol::{fill_symbol, symbol};
    pub use crate::triangle::{fill_triangle, triangle};
}
