// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Copying rectangles of pixels between pixmaps.
use crate::clip::Rect;
use crate::convert::Converter;
use crate::layout::PixmapError;
use crate::pixmap::Pixmap;
use crate::transform::{Coord, Size};

/// Copy the storage rectangle `src_rect` of `src` to storage position `at` of `dst`.
///
/// Both are clipped: parts of the rectangle outside the source, or landing outside the
/// destination, are skipped. Rows are copied through the dispatch table, no pixel is converted
/// and no transform is applied.
///
/// # Panics
///
/// If the pixel types differ.
pub fn blit_raw<S, D>(src: &Pixmap<S>, src_rect: Rect, dst: &mut Pixmap<D>, at: (Coord, Coord))
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    assert_eq!(
        src.pixel_type(),
        dst.pixel_type(),
        "Blit between different pixel types"
    );

    let src_size = (src.layout().width(), src.layout().height());
    let dst_size = (dst.layout().width(), dst.layout().height());

    let Some((rect, (dx, dy))) = clip_blit(src_rect, src_size, at, dst_size) else {
        return;
    };

    log::trace!("Blit raw {:?} to {},{}", rect, dx, dy);

    let ops = src.ops();
    let (sx, sy) = (rect.x as u32, rect.y as u32);
    let src_layout = *src.layout();
    let (dst_bytes, dst_layout) = dst.raw_parts_mut();

    for row in 0..rect.h {
        ops.copy_row(
            src.as_bytes(),
            &src_layout,
            (sx, sy + row),
            dst_bytes,
            dst_layout,
            (dx, dy + row),
            rect.w,
        );
    }
}

/// Copy the user rectangle `src_rect` of `src` to user position `at` of `dst`.
///
/// Coordinates go through the transform of the respective pixmap and pixels are converted when
/// the types differ. Both sides are clipped. Fails if a conversion is impossible.
pub fn blit<S, D>(
    src: &Pixmap<S>,
    src_rect: Rect,
    dst: &mut Pixmap<D>,
    at: (Coord, Coord),
) -> Result<(), PixmapError>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    let converter = Converter::new(src.pixel_type(), dst.pixel_type())?;

    let src_size = (src.width(), src.height());
    let dst_size = (dst.width(), dst.height());

    let Some((rect, (dx, dy))) = clip_blit(src_rect, src_size, at, dst_size) else {
        return Ok(());
    };

    if src.pixel_type() == dst.pixel_type() && src.transform() == dst.transform() {
        // Equal transforms map the rectangle onto storage with the same orientation.
        let src_raw = src.transform_rect(rect);
        let dst_raw = dst.transform_rect(Rect::new(dx as Coord, dy as Coord, rect.w, rect.h));
        blit_raw(src, src_raw, dst, (dst_raw.x, dst_raw.y));
        return Ok(());
    }

    log::trace!("Blit converting {} to {}", src.pixel_type(), dst.pixel_type());

    for row in 0..rect.h as Coord {
        for col in 0..rect.w as Coord {
            let pixel = src.get_pixel(rect.x + col, rect.y + row);
            dst.put_pixel(dx as Coord + col, dy as Coord + row, converter.convert(pixel));
        }
    }

    Ok(())
}

/// Clip a source rectangle and its target position against both extents.
///
/// Returns the visible part of the source and where it lands.
fn clip_blit(
    src_rect: Rect,
    (sw, sh): (Size, Size),
    (x, y): (Coord, Coord),
    (dw, dh): (Size, Size),
) -> Option<(Rect, (u32, u32))> {
    let visible = src_rect.clip_to(sw, sh)?;
    let shift_x = i64::from(visible.x) - i64::from(src_rect.x);
    let shift_y = i64::from(visible.y) - i64::from(src_rect.y);

    let target = Rect::new(
        saturate(i64::from(x) + shift_x),
        saturate(i64::from(y) + shift_y),
        visible.w,
        visible.h,
    );
    let landed = target.clip_to(dw, dh)?;

    let rect = Rect::new(
        saturate(i64::from(visible.x) + i64::from(landed.x) - i64::from(target.x)),
        saturate(i64::from(visible.y) + i64::from(landed.y) - i64::from(target.y)),
        landed.w,
        landed.h,
    );

    Some((rect, (landed.x as u32, landed.y as u32)))
}

fn saturate(v: i64) -> Coord {
    v.clamp(i64::from(Coord::MIN), i64::from(Coord::MAX)) as Coord
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipping_both_sides() {
        let clipped = clip_blit(Rect::new(-2, 0, 6, 2), (10, 10), (5, -1), (6, 6));
        // The visible source columns land at column 7, right of the target.
        assert_eq!(clipped, None);

        let clipped = clip_blit(Rect::new(-2, 0, 6, 3), (10, 10), (0, -1), (6, 6));
        assert_eq!(clipped, Some((Rect::new(0, 1, 4, 2), (2, 0))));

        let clipped = clip_blit(Rect::new(8, 8, 4, 4), (10, 10), (3, 3), (4, 4));
        assert_eq!(clipped, Some((Rect::new(8, 8, 1, 1), (3, 3))));
    }
}
