// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! The per-class dispatch table.
//!
//! Each entry bundles the accessor functions of one [`PixelPack`], instantiated from the generic
//! [`PixelAccess`] implementations. Look an entry up once per operation and call through it in the
//! inner loop; the lookup is a table index, there is no matching per pixel.
use crate::layout::PixmapLayout;
use crate::pack::{self, PixelAccess, PixelPack};
use crate::pixel::Pixel;

/// Function pointers serving one storage class.
///
/// Coordinates are storage coordinates and unchecked; the caller transforms and clips.
#[derive(Debug)]
pub struct PixelOps {
    pack: PixelPack,
    get: fn(&[u8], &PixmapLayout, u32, u32) -> Pixel,
    put: fn(&mut [u8], &PixmapLayout, u32, u32, Pixel),
    hline: fn(&mut [u8], &PixmapLayout, u32, u32, u32, Pixel),
    vline: fn(&mut [u8], &PixmapLayout, u32, u32, u32, Pixel),
    copy_row: CopyRow,
}

type CopyRow = fn(&[u8], &PixmapLayout, (u32, u32), &mut [u8], &PixmapLayout, (u32, u32), u32);

static PIXEL_OPS: [PixelOps; 10] = [
    PixelOps::entry::<pack::Bpp1Ub>(),
    PixelOps::entry::<pack::Bpp1Db>(),
    PixelOps::entry::<pack::Bpp2Ub>(),
    PixelOps::entry::<pack::Bpp2Db>(),
    PixelOps::entry::<pack::Bpp4Ub>(),
    PixelOps::entry::<pack::Bpp4Db>(),
    PixelOps::entry::<pack::Bpp8>(),
    PixelOps::entry::<pack::Bpp16>(),
    PixelOps::entry::<pack::Bpp24>(),
    PixelOps::entry::<pack::Bpp32>(),
];

impl PixelOps {
    /// The entry serving `pack`.
    pub fn of(pack: PixelPack) -> &'static PixelOps {
        let ops = &PIXEL_OPS[pack as usize];
        debug_assert_eq!(ops.pack, pack);
        ops
    }

    const fn entry<A: PixelAccess>() -> Self {
        PixelOps {
            pack: A::PACK,
            get: get::<A>,
            put: put::<A>,
            hline: hline::<A>,
            vline: vline::<A>,
            copy_row: copy_row::<A>,
        }
    }

    pub fn pack(&self) -> PixelPack {
        self.pack
    }

    /// Read pixel `(x, y)`.
    #[inline]
    pub fn get(&self, data: &[u8], layout: &PixmapLayout, x: u32, y: u32) -> Pixel {
        (self.get)(data, layout, x, y)
    }

    /// Write pixel `(x, y)`.
    #[inline]
    pub fn put(&self, data: &mut [u8], layout: &PixmapLayout, x: u32, y: u32, pixel: Pixel) {
        (self.put)(data, layout, x, y, pixel)
    }

    /// Write the pixels `x0..=x1` of row `y`.
    pub fn hline(&self, data: &mut [u8], layout: &PixmapLayout, x0: u32, x1: u32, y: u32, pixel: Pixel) {
        (self.hline)(data, layout, x0, x1, y, pixel)
    }

    /// Write the pixels `y0..=y1` of column `x`.
    pub fn vline(&self, data: &mut [u8], layout: &PixmapLayout, x: u32, y0: u32, y1: u32, pixel: Pixel) {
        (self.vline)(data, layout, x, y0, y1, pixel)
    }

    /// Copy `width` pixels starting at `src_at` to `dst_at`, both given as `(x, y)`.
    ///
    /// Both layouts must be of a type stored by this class.
    pub fn copy_row(
        &self,
        src: &[u8],
        src_layout: &PixmapLayout,
        src_at: (u32, u32),
        dst: &mut [u8],
        dst_layout: &PixmapLayout,
        dst_at: (u32, u32),
        width: u32,
    ) {
        (self.copy_row)(src, src_layout, src_at, dst, dst_layout, dst_at, width)
    }
}

fn get<A: PixelAccess>(data: &[u8], layout: &PixmapLayout, x: u32, y: u32) -> Pixel {
    A::get(layout.row(data, y), layout.offset(), x)
}

fn put<A: PixelAccess>(data: &mut [u8], layout: &PixmapLayout, x: u32, y: u32, pixel: Pixel) {
    A::put(layout.row_mut(data, y), layout.offset(), x, pixel)
}

fn hline<A: PixelAccess>(data: &mut [u8], layout: &PixmapLayout, x0: u32, x1: u32, y: u32, pixel: Pixel) {
    A::fill(layout.row_mut(data, y), layout.offset(), x0, x1, pixel)
}

fn vline<A: PixelAccess>(data: &mut [u8], layout: &PixmapLayout, x: u32, y0: u32, y1: u32, pixel: Pixel) {
    for y in y0..=y1 {
        A::put(layout.row_mut(data, y), layout.offset(), x, pixel);
    }
}

fn copy_row<A: PixelAccess>(
    src: &[u8],
    src_layout: &PixmapLayout,
    (sx, sy): (u32, u32),
    dst: &mut [u8],
    dst_layout: &PixmapLayout,
    (dx, dy): (u32, u32),
    width: u32,
) {
    let src_row = src_layout.row(src, sy);
    let dst_row = dst_layout.row_mut(dst, dy);
    A::copy(src_row, src_layout.offset(), sx, dst_row, dst_layout.offset(), dx, width)
}
