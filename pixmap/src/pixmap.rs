// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! The pixmap, a grid of pixels in one of the supported formats.
use core::fmt;

use alloc::sync::Arc;

use crate::buf::Buffer;
use crate::clip::Rect;
use crate::convert::Converter;
use crate::gamma::{Correction, Gamma};
use crate::layout::{PixmapError, PixmapLayout};
use crate::ops::PixelOps;
use crate::pixel::{Pixel, PixelType};
use crate::transform::{Coord, Size, Symmetry, Transform};

/// A rectangular grid of pixels over some bytes.
///
/// The bytes are owned when `D` is a [`Buffer`], borrowed when the pixmap wraps foreign memory or
/// is a view into a parent pixmap. Width and height as seen by users account for the coordinate
/// transform; the layout describes the storage.
///
/// Pixel coordinates come in three flavors. The `_raw` accessors take storage coordinates and
/// check nothing beyond slice bounds. The `_raw_clipped` accessors take storage coordinates and
/// ignore those outside the storage. The plain accessors take user coordinates, transform them,
/// and clip.
#[derive(Clone)]
pub struct Pixmap<D = Buffer> {
    data: D,
    layout: PixmapLayout,
    transform: Transform,
    gamma: Option<Arc<Gamma>>,
}

impl Pixmap {
    /// Allocate a zeroed pixmap of a tightly packed layout.
    pub fn new(width: Size, height: Size, pixel_type: PixelType) -> Result<Self, PixmapError> {
        let layout = PixmapLayout::new(pixel_type, width, height)?;
        Self::with_layout(layout)
    }

    /// Allocate a zeroed pixmap whose rows start `bytes_per_row` apart.
    pub fn with_stride(
        width: Size,
        height: Size,
        pixel_type: PixelType,
        bytes_per_row: usize,
    ) -> Result<Self, PixmapError> {
        let layout = PixmapLayout::with_stride(pixel_type, width, height, bytes_per_row)?;
        Self::with_layout(layout)
    }

    fn with_layout(layout: PixmapLayout) -> Result<Self, PixmapError> {
        log::debug!(
            "Allocating pixmap {}x{} - {}",
            layout.width(),
            layout.height(),
            layout.pixel_type()
        );

        let data = Buffer::try_new(layout.byte_len())?;

        Ok(Pixmap {
            data,
            layout,
            transform: Transform::IDENTITY,
            gamma: None,
        })
    }
}

impl<D: AsRef<[u8]>> Pixmap<D> {
    /// Describe existing memory as a pixmap.
    ///
    /// The first row starts at the first byte of `data`. Fails if the layout is invalid or
    /// `data` is too short for it.
    pub fn wrap(
        data: D,
        width: Size,
        height: Size,
        pixel_type: PixelType,
        bytes_per_row: usize,
    ) -> Result<Self, PixmapError> {
        let layout = PixmapLayout::with_stride(pixel_type, width, height, bytes_per_row)?;
        let available = data.as_ref().len();

        if available < layout.byte_len() {
            log::warn!(
                "Buffer of {} bytes too small for {}x{} {} pixmap with stride {}",
                available,
                width,
                height,
                pixel_type,
                bytes_per_row
            );
            return Err(PixmapError::too_small());
        }

        Ok(Pixmap {
            data,
            layout,
            transform: Transform::IDENTITY,
            gamma: None,
        })
    }

    pub fn layout(&self) -> &PixmapLayout {
        &self.layout
    }

    pub fn pixel_type(&self) -> PixelType {
        self.layout.pixel_type()
    }

    /// The dispatch table entry for the storage class of this pixmap.
    pub fn ops(&self) -> &'static PixelOps {
        self.layout.pack().ops()
    }

    /// The width as seen through the transform.
    pub fn width(&self) -> Size {
        self.transform.size(self.layout.width(), self.layout.height()).0
    }

    /// The height as seen through the transform.
    pub fn height(&self) -> Size {
        self.transform.size(self.layout.width(), self.layout.height()).1
    }

    pub fn bytes_per_row(&self) -> usize {
        self.layout.bytes_per_row()
    }

    /// The pixel bytes, starting at the first row.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_ref()
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn axes_swap(&self) -> bool {
        self.transform.axes_swap
    }

    pub fn x_swap(&self) -> bool {
        self.transform.x_swap
    }

    pub fn y_swap(&self) -> bool {
        self.transform.y_swap
    }

    pub fn gamma(&self) -> Option<&Arc<Gamma>> {
        self.gamma.as_ref()
    }

    /// Whether values are sRGB encoded, as opposed to linear or plain gamma.
    pub fn is_srgb(&self) -> bool {
        self.gamma
            .as_ref()
            .is_some_and(|gamma| gamma.correction() == Correction::Srgb)
    }

    /// Map user coordinates to storage coordinates.
    pub fn transform_point(&self, x: Coord, y: Coord) -> (Coord, Coord) {
        self.transform
            .point(x, y, self.layout.width(), self.layout.height())
    }

    /// Map a user rectangle to storage coordinates.
    pub fn transform_rect(&self, rect: Rect) -> Rect {
        let ((x, y), (w, h)) = self.transform.rect(
            (rect.x, rect.y),
            (rect.w, rect.h),
            self.layout.width(),
            self.layout.height(),
        );
        Rect::new(x, y, w, h)
    }

    /// Read a pixel at storage coordinates.
    pub fn get_pixel_raw(&self, x: u32, y: u32) -> Pixel {
        debug_assert!(self.layout.contains(x.into(), y.into()));
        self.ops().get(self.data.as_ref(), &self.layout, x, y)
    }

    /// Read a pixel at storage coordinates, zero outside the storage.
    pub fn get_pixel_raw_clipped(&self, x: Coord, y: Coord) -> Pixel {
        if !self.layout.contains(x.into(), y.into()) {
            return 0;
        }

        self.get_pixel_raw(x as u32, y as u32)
    }

    /// Read a pixel at user coordinates, zero outside the pixmap.
    pub fn get_pixel(&self, x: Coord, y: Coord) -> Pixel {
        let (x, y) = self.transform_point(x, y);
        self.get_pixel_raw_clipped(x, y)
    }

    /// A read-only view of a rectangle in user coordinates.
    ///
    /// The view inherits the transform and gamma of this pixmap, so that its coordinates are
    /// relative to the rectangle as the user sees it.
    ///
    /// # Panics
    ///
    /// If the rectangle does not lie within the pixmap.
    pub fn sub_pixmap_ref(&self, x: Size, y: Size, w: Size, h: Size) -> Pixmap<&[u8]> {
        let (start, layout) = self.sub_layout(x, y, w, h);
        let data = &self.data.as_ref()[start..][..layout.byte_len()];

        Pixmap {
            data,
            layout,
            transform: self.transform,
            gamma: self.gamma.clone(),
        }
    }

    fn sub_layout(&self, x: Size, y: Size, w: Size, h: Size) -> (usize, PixmapLayout) {
        let user = Rect::new(coord(x), coord(y), w, h);
        let rect = self.transform_rect(user);

        let sub = if rect.x >= 0 && rect.y >= 0 {
            self.layout
                .sub_layout(rect.x as u32, rect.y as u32, rect.w, rect.h)
        } else {
            None
        };

        match sub {
            Some((start, layout)) => {
                log::debug!(
                    "Sub pixmap {}x{} at {},{} of {}x{}",
                    w,
                    h,
                    x,
                    y,
                    self.width(),
                    self.height()
                );
                (start, layout)
            }
            None => panic!(
                "Sub pixmap {:?} out of pixmap {}x{}",
                user,
                self.width(),
                self.height()
            ),
        }
    }

    /// Copy the pixels, transform and gamma into a newly allocated pixmap.
    ///
    /// The copy is tightly packed. A sub-pixmap of a sub-byte format is realigned to start at
    /// the first bit of its rows.
    pub fn duplicate(&self) -> Result<Pixmap, PixmapError> {
        let mut copy = Pixmap::with_layout(PixmapLayout::new(
            self.pixel_type(),
            self.layout.width(),
            self.layout.height(),
        )?)?;

        let ops = self.ops();
        for y in 0..self.layout.height() {
            ops.copy_row(
                self.data.as_ref(),
                &self.layout,
                (0, y),
                copy.data.as_bytes_mut(),
                &copy.layout,
                (0, y),
                self.layout.width(),
            );
        }

        copy.transform = self.transform;
        copy.gamma = self.gamma.clone();
        Ok(copy)
    }

    /// Allocate a pixmap of another format with the converted pixels.
    ///
    /// The result has the transformed size of this pixmap and an identity transform, its storage
    /// holds the pixels as the user sees them.
    pub fn convert(&self, pixel_type: PixelType) -> Result<Pixmap, PixmapError> {
        let converter = Converter::new(self.pixel_type(), pixel_type)?;
        let mut converted = Pixmap::new(self.width(), self.height(), pixel_type)?;

        for y in 0..self.height() {
            for x in 0..self.width() {
                let pixel = converter.convert(self.get_pixel(coord(x), coord(y)));
                converted.put_pixel_raw(x, y, pixel);
            }
        }

        Ok(converted)
    }

    /// Compare pixel types, sizes and every pixel as seen through the transforms.
    pub fn eq_pixels<E: AsRef<[u8]>>(&self, other: &Pixmap<E>) -> bool {
        if self.pixel_type() != other.pixel_type()
            || self.width() != other.width()
            || self.height() != other.height()
        {
            return false;
        }

        (0..coord(self.height())).all(|y| {
            (0..coord(self.width())).all(|x| self.get_pixel(x, y) == other.get_pixel(x, y))
        })
    }
}

impl<D: AsRef<[u8]> + AsMut<[u8]>> Pixmap<D> {
    /// The pixel bytes, mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.data.as_mut()
    }

    /// Mutable bytes together with the layout describing them.
    pub fn raw_parts_mut(&mut self) -> (&mut [u8], &PixmapLayout) {
        (self.data.as_mut(), &self.layout)
    }

    /// Write a pixel at storage coordinates.
    pub fn put_pixel_raw(&mut self, x: u32, y: u32, pixel: Pixel) {
        debug_assert!(self.layout.contains(x.into(), y.into()));
        let ops = self.ops();
        ops.put(self.data.as_mut(), &self.layout, x, y, pixel)
    }

    /// Write a pixel at storage coordinates, ignoring those outside the storage.
    pub fn put_pixel_raw_clipped(&mut self, x: Coord, y: Coord, pixel: Pixel) {
        if self.layout.contains(x.into(), y.into()) {
            self.put_pixel_raw(x as u32, y as u32, pixel);
        }
    }

    /// Write a pixel at user coordinates, ignoring those outside the pixmap.
    pub fn put_pixel(&mut self, x: Coord, y: Coord, pixel: Pixel) {
        let (x, y) = self.transform_point(x, y);
        self.put_pixel_raw_clipped(x, y, pixel)
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        let ops = self.ops();
        let last = self.layout.width() - 1;

        for y in 0..self.layout.height() {
            ops.hline(self.data.as_mut(), &self.layout, 0, last, y, pixel);
        }
    }

    /// A mutable view of a rectangle in user coordinates.
    ///
    /// See [`Pixmap::sub_pixmap_ref`].
    ///
    /// # Panics
    ///
    /// If the rectangle does not lie within the pixmap.
    pub fn sub_pixmap(&mut self, x: Size, y: Size, w: Size, h: Size) -> Pixmap<&mut [u8]> {
        let (start, layout) = self.sub_layout(x, y, w, h);
        let data = &mut self.data.as_mut()[start..][..layout.byte_len()];

        Pixmap {
            data,
            layout,
            transform: self.transform,
            gamma: self.gamma.clone(),
        }
    }
}

impl<D> Pixmap<D> {
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn set_axes_swap(&mut self, axes_swap: bool) {
        self.transform.axes_swap = axes_swap;
    }

    pub fn set_x_swap(&mut self, x_swap: bool) {
        self.transform.x_swap = x_swap;
    }

    pub fn set_y_swap(&mut self, y_swap: bool) {
        self.transform.y_swap = y_swap;
    }

    /// Rotate the view clockwise by 90 degrees. No pixels move.
    pub fn rotate_cw(&mut self) {
        self.transform.rotate(Symmetry::Rotate90);
    }

    /// Rotate the view counter clockwise by 90 degrees. No pixels move.
    pub fn rotate_ccw(&mut self) {
        self.transform.rotate(Symmetry::Rotate270);
    }

    pub fn rotate(&mut self, symmetry: Symmetry) {
        self.transform.rotate(symmetry);
    }

    /// Attach or detach shared correction tables.
    ///
    /// # Panics
    ///
    /// If the tables were built for another pixel type.
    pub fn set_gamma(&mut self, gamma: Option<Arc<Gamma>>) {
        if let Some(gamma) = &gamma {
            assert_eq!(
                gamma.pixel_type(),
                self.layout.pixel_type(),
                "Gamma tables of another pixel type"
            );
        }

        self.gamma = gamma;
    }

    /// Build and attach correction tables for this pixmap.
    pub fn set_correction(&mut self, correction: Correction) {
        let gamma = Gamma::new(self.layout.pixel_type(), correction);
        self.gamma = Some(Arc::new(gamma));
    }

    /// The underlying data.
    pub fn into_inner(self) -> D {
        self.data
    }
}

impl<D> fmt::Debug for Pixmap<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = &self.layout;

        f.debug_struct("Pixmap")
            .field("width", &layout.width())
            .field("height", &layout.height())
            .field("bpp", &layout.pixel_type().bpp())
            .field("bytes_per_row", &layout.bytes_per_row())
            .field("pixel_type", &layout.pixel_type())
            .field("offset", &layout.offset())
            .field("axes_swap", &self.transform.axes_swap)
            .field("x_swap", &self.transform.x_swap)
            .field("y_swap", &self.transform.y_swap)
            .field("gamma", &self.gamma.as_ref().map(|gamma| gamma.correction()))
            .finish()
    }
}

/// Sizes are bounded by what coordinates can address.
fn coord(size: Size) -> Coord {
    Coord::try_from(size).unwrap_or(Coord::MAX)
}
