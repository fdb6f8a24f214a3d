//! Binding drawing algorithms to pixel storage.
//!
//! Algorithms are written once against [`Plot`]. A [`Raster`] implements it for one accessor type,
//! and [`rasterize`] picks the accessor for a pixmap once and runs the algorithm monomorphized for
//! it.
use core::marker::PhantomData;

use gfxprim_pixmap::{
    clip_span, Coord, PackAction, Pixel, PixelAccess, Pixmap, PixmapLayout, Size, Transform,
};

/// A surface that pixels can be set on, in one color.
///
/// Coordinates outside of `0..width` and `0..height` must be ignored, never an error.
pub trait Plot {
    fn width(&self) -> Size;

    fn height(&self) -> Size;

    /// Set one pixel.
    fn plot(&mut self, x: Coord, y: Coord);

    /// Set the pixels between `x0` and `x1` inclusive, in any order, of row `y`.
    fn hline(&mut self, x0: Coord, x1: Coord, y: Coord) {
        if let Some((x0, x1)) = clip_span(x0, x1, self.width()) {
            for x in x0..=x1 {
                self.plot(x as Coord, y);
            }
        }
    }

    /// Set the pixels between `y0` and `y1` inclusive, in any order, of column `x`.
    fn vline(&mut self, x: Coord, y0: Coord, y1: Coord) {
        if let Some((y0, y1)) = clip_span(y0, y1, self.height()) {
            for y in y0..=y1 {
                self.plot(x, y as Coord);
            }
        }
    }
}

/// An algorithm to run against some [`Plot`], see [`rasterize`].
pub trait RasterAction {
    fn draw<P: Plot>(self, plot: &mut P);
}

/// Pixel storage of one storage class, drawn into with one pixel value.
///
/// Clips against the storage, applies no transform.
pub struct Raster<'data, A> {
    data: &'data mut [u8],
    layout: &'data PixmapLayout,
    pixel: Pixel,
    access: PhantomData<A>,
}

impl<'data, A: PixelAccess> Raster<'data, A> {
    /// # Panics
    ///
    /// If the layout is not of a type stored by `A`.
    pub fn new(data: &'data mut [u8], layout: &'data PixmapLayout, pixel: Pixel) -> Self {
        assert_eq!(
            layout.pack(),
            A::PACK,
            "Pixel type {} is not stored as {:?}",
            layout.pixel_type(),
            A::PACK
        );

        Raster {
            data,
            layout,
            pixel,
            access: PhantomData,
        }
    }

    fn row(&mut self, y: u32) -> &mut [u8] {
        self.layout.row_mut(self.data, y)
    }
}

impl<A: PixelAccess> Plot for Raster<'_, A> {
    fn width(&self) -> Size {
        self.layout.width()
    }

    fn height(&self) -> Size {
        self.layout.height()
    }

    #[inline]
    fn plot(&mut self, x: Coord, y: Coord) {
        if self.layout.contains(x.into(), y.into()) {
            let (offset, pixel) = (self.layout.offset(), self.pixel);
            A::put(self.row(y as u32), offset, x as u32, pixel);
        }
    }

    fn hline(&mut self, x0: Coord, x1: Coord, y: Coord) {
        if y < 0 || y as u32 >= self.layout.height() {
            return;
        }

        if let Some((x0, x1)) = clip_span(x0, x1, self.layout.width()) {
            let (offset, pixel) = (self.layout.offset(), self.pixel);
            A::fill(self.row(y as u32), offset, x0, x1, pixel);
        }
    }

    fn vline(&mut self, x: Coord, y0: Coord, y1: Coord) {
        if x < 0 || x as u32 >= self.layout.width() {
            return;
        }

        if let Some((y0, y1)) = clip_span(y0, y1, self.layout.height()) {
            let (offset, pixel) = (self.layout.offset(), self.pixel);
            for y in y0..=y1 {
                A::put(self.row(y), offset, x as u32, pixel);
            }
        }
    }
}

/// A plot seen through a coordinate transform.
///
/// Every pixel is mapped on its own. Spans are mapped by their end points, which stay a span under
/// any of the transforms.
pub struct Transformed<'plot, P> {
    inner: &'plot mut P,
    transform: Transform,
}

impl<'plot, P: Plot> Transformed<'plot, P> {
    pub fn new(inner: &'plot mut P, transform: Transform) -> Self {
        Transformed { inner, transform }
    }

    fn point(&self, x: Coord, y: Coord) -> (Coord, Coord) {
        self.transform
            .point(x, y, self.inner.width(), self.inner.height())
    }
}

impl<P: Plot> Plot for Transformed<'_, P> {
    fn width(&self) -> Size {
        self.transform
            .size(self.inner.width(), self.inner.height())
            .0
    }

    fn height(&self) -> Size {
        self.transform
            .size(self.inner.width(), self.inner.height())
            .1
    }

    fn plot(&mut self, x: Coord, y: Coord) {
        let (x, y) = self.point(x, y);
        self.inner.plot(x, y)
    }

    fn hline(&mut self, x0: Coord, x1: Coord, y: Coord) {
        let (ax, ay) = self.point(x0, y);
        let (bx, by) = self.point(x1, y);

        if ay == by {
            self.inner.hline(ax, bx, ay)
        } else {
            self.inner.vline(ax, ay, by)
        }
    }

    fn vline(&mut self, x: Coord, y0: Coord, y1: Coord) {
        let (ax, ay) = self.point(x, y0);
        let (bx, by) = self.point(x, y1);

        if ax == bx {
            self.inner.vline(ax, ay, by)
        } else {
            self.inner.hline(ax, bx, ay)
        }
    }
}

/// Run an algorithm on the storage of a pixmap, drawing with `pixel`.
///
/// The accessor is chosen here, once. The algorithm sees storage coordinates.
pub fn rasterize<D, R>(pixmap: &mut Pixmap<D>, pixel: Pixel, action: R)
where
    D: AsRef<[u8]> + AsMut<[u8]>,
    R: RasterAction,
{
    struct Bind<'data, R> {
        data: &'data mut [u8],
        layout: &'data PixmapLayout,
        pixel: Pixel,
        action: R,
    }

    impl<R: RasterAction> PackAction for Bind<'_, R> {
        fn run<A: PixelAccess>(self, _: A) {
            let mut raster = Raster::<A>::new(self.data, self.layout, self.pixel);
            self.action.draw(&mut raster)
        }
    }

    let pack = pixmap.layout().pack();
    log::trace!("Rasterizing into {} as {:?}", pixmap.pixel_type(), pack);

    let (data, layout) = pixmap.raw_parts_mut();
    pack.action(Bind {
        data,
        layout,
        pixel,
        action,
    })
}
