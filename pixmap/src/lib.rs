// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! # Pixmap
//!
//! Pixel formats and pixel storage for 2D rasterization.
//!
//! A [`Pixmap`] is a grid of pixels in one of the formats of the [`PixelType`] table: packed RGB
//! and RGBA, CMYK, grayscale down to one bit per pixel, palette indices. Formats narrower than a
//! byte share bytes between neighbouring pixels, in one of two bit orders.
//!
//! Formats of equal width share one storage class, a [`PixelPack`]. Each class has an accessor
//! type implementing [`PixelAccess`], generated from a common template, and an entry of function
//! pointers in a static table, [`PixelOps`]. Generic code binds to an accessor once per call with
//! [`PixelPack::action`] and then runs without further dispatch.
//!
//! ## Usage
//!
//! ```
//! use gfxprim_pixmap::{Pixmap, PixelType};
//!
//! let mut pixmap = Pixmap::new(16, 8, PixelType::G1_UB).unwrap();
//! pixmap.put_pixel(0, 0, 1);
//! assert_eq!(pixmap.as_bytes()[0], 0x80);
//!
//! // Rotate the view, no pixel is moved.
//! pixmap.rotate_cw();
//! assert_eq!((pixmap.width(), pixmap.height()), (8, 16));
//! assert_eq!(pixmap.get_pixel(0, 15), 1);
//! ```
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]
extern crate alloc;

mod blit;
mod buf;
mod clip;
mod convert;
mod gamma;
mod layout;
mod ops;
mod pack;
mod pixel;
mod pixmap;
mod transform;

pub use self::blit::{blit, blit_raw};
pub use self::buf::{Buffer, MaxAligned};
pub use self::clip::{clip_span, line_outside, Outcode, Rect};
pub use self::convert::{convert_pixel, pixel_to_rgba, rgba_to_pixel, scale, Converter};
pub use self::gamma::{Correction, Gamma, GammaTable};
pub use self::layout::{PixmapError, PixmapLayout};
pub use self::ops::PixelOps;
pub use self::pack::{BitOrder, PackAction, PixelAccess, PixelAddr, PixelPack};
pub use self::pixel::{
    BitmapDisplay, Channel, Pixel, PixelDisplay, PixelFlags, PixelType, PixelTypeDesc,
};
pub use self::pixmap::Pixmap;
pub use self::transform::{Coord, Size, Symmetry, Transform};

/// The accessor types of every storage class.
///
/// Use them to instantiate code generic over [`PixelAccess`] directly, rather than through
/// [`PixelPack::action`].
pub mod access {
    pub use crate::pack::{Bpp16, Bpp1Db, Bpp1Ub, Bpp24, Bpp2Db, Bpp2Ub, Bpp32, Bpp4Db, Bpp4Ub, Bpp8};
}
