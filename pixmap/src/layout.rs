// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! The byte layout of a pixmap and the errors of constructing one.
use core::fmt;

use crate::pack::{PixelAddr, PixelPack};
use crate::pixel::PixelType;

/// Describes where the pixels of a pixmap live in its bytes.
///
/// Rows start `bytes_per_row` apart. Within a row, column zero starts `offset` bits into the
/// first byte, which is only ever non-zero for sub-pixmaps of formats narrower than a byte. The
/// dimensions here are those of the storage, before any coordinate transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixmapLayout {
    width: u32,
    height: u32,
    bytes_per_row: usize,
    offset: u8,
    pixel_type: PixelType,
}

/// The error of allocating, wrapping or converting a pixmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixmapError {
    kind: PixmapErrorKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PixmapErrorKind {
    InvalidPixelType,
    EmptyDimensions,
    Overflow,
    BadStride,
    TooSmall,
    OutOfMemory,
    Unconvertible,
}

impl PixmapLayout {
    /// A tightly packed layout, each row rounded up to whole bytes.
    pub fn new(pixel_type: PixelType, width: u32, height: u32) -> Result<Self, PixmapError> {
        Self::validate(pixel_type, width, height)?;
        let bytes_per_row = min_row_bytes(pixel_type.bpp(), width)?;
        Self::with_row_bytes(pixel_type, width, height, bytes_per_row)
    }

    /// A layout with an explicit distance between rows.
    ///
    /// Fails if a row of pixels does not fit into `bytes_per_row`.
    pub fn with_stride(
        pixel_type: PixelType,
        width: u32,
        height: u32,
        bytes_per_row: usize,
    ) -> Result<Self, PixmapError> {
        Self::validate(pixel_type, width, height)?;
        let min = min_row_bytes(pixel_type.bpp(), width)?;

        if bytes_per_row < min {
            log::warn!(
                "Stride {} is smaller than a row of {} {} pixels",
                bytes_per_row,
                width,
                pixel_type
            );
            return Err(PixmapErrorKind::BadStride.into());
        }

        Self::with_row_bytes(pixel_type, width, height, bytes_per_row)
    }

    fn validate(pixel_type: PixelType, width: u32, height: u32) -> Result<(), PixmapError> {
        if !pixel_type.is_valid() {
            log::warn!("Invalid pixel type {}", pixel_type);
            return Err(PixmapErrorKind::InvalidPixelType.into());
        }

        if width == 0 || height == 0 {
            log::warn!("Trying to allocate pixmap of size {}x{}", width, height);
            return Err(PixmapErrorKind::EmptyDimensions.into());
        }

        Ok(())
    }

    fn with_row_bytes(
        pixel_type: PixelType,
        width: u32,
        height: u32,
        bytes_per_row: usize,
    ) -> Result<Self, PixmapError> {
        let layout = PixmapLayout {
            width,
            height,
            bytes_per_row,
            offset: 0,
            pixel_type,
        };

        match layout.checked_byte_len() {
            Some(_) => Ok(layout),
            None => {
                log::warn!(
                    "Pixmap size {}x{} with stride {} overflows",
                    width,
                    height,
                    bytes_per_row
                );
                Err(PixmapErrorKind::Overflow.into())
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Distance between the starts of two consecutive rows, in bytes.
    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Bit offset of column zero within the first byte of each row.
    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    pub fn pack(&self) -> PixelPack {
        self.pixel_type.pack()
    }

    /// The bytes one row of pixels touches, counted from the start of the row.
    pub fn row_len(&self) -> usize {
        let bits = u64::from(self.offset) + u64::from(self.width) * u64::from(self.pixel_type.bpp());
        // Bounded by `bytes_per_row` for every constructed layout.
        bits.div_ceil(8) as usize
    }

    /// The number of bytes the pixels span, from the first byte of the first row to the last
    /// byte of the last row.
    pub fn byte_len(&self) -> usize {
        self.checked_byte_len().unwrap_or(usize::MAX)
    }

    fn checked_byte_len(&self) -> Option<usize> {
        if self.width == 0 || self.height == 0 {
            return Some(0);
        }

        let rows = usize::try_from(self.height - 1).ok()?;
        rows.checked_mul(self.bytes_per_row)?
            .checked_add(self.row_len())
    }

    /// The location of pixel `(x, y)` in storage coordinates.
    ///
    /// No bounds are checked.
    pub fn address(&self, x: u32, y: u32) -> PixelAddr {
        let mut addr = self.pack().locate(self.offset, x);
        addr.byte += y as usize * self.bytes_per_row;
        addr
    }

    /// The bytes of row `y`.
    pub fn row<'data>(&self, data: &'data [u8], y: u32) -> &'data [u8] {
        &data[y as usize * self.bytes_per_row..][..self.row_len()]
    }

    /// The bytes of row `y`, mutably.
    pub fn row_mut<'data>(&self, data: &'data mut [u8], y: u32) -> &'data mut [u8] {
        let len = self.row_len();
        &mut data[y as usize * self.bytes_per_row..][..len]
    }

    /// Whether `(x, y)` lies within the storage.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// The layout of a rectangle of this one, and the byte where it starts.
    ///
    /// Returns `None` if the rectangle does not lie within the storage.
    pub fn sub_layout(&self, x: u32, y: u32, width: u32, height: u32) -> Option<(usize, Self)> {
        let fits_x = x.checked_add(width).is_some_and(|right| right <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|bottom| bottom <= self.height);

        if !fits_x || !fits_y {
            return None;
        }

        let bit = usize::from(self.offset) + x as usize * usize::from(self.pixel_type.bpp());
        let start = y as usize * self.bytes_per_row + bit / 8;

        let layout = PixmapLayout {
            width,
            height,
            offset: (bit % 8) as u8,
            ..*self
        };

        Some((start, layout))
    }
}

fn min_row_bytes(bpp: u8, width: u32) -> Result<usize, PixmapError> {
    let bits = u64::from(bpp) * u64::from(width);
    usize::try_from(bits.div_ceil(8)).map_err(|_| {
        log::warn!("Pixmap row of {} pixels overflows", width);
        PixmapErrorKind::Overflow.into()
    })
}

impl PixmapError {
    pub(crate) fn too_small() -> Self {
        PixmapErrorKind::TooSmall.into()
    }

    pub(crate) fn out_of_memory() -> Self {
        PixmapErrorKind::OutOfMemory.into()
    }

    pub(crate) fn unconvertible() -> Self {
        PixmapErrorKind::Unconvertible.into()
    }

    /// Whether the failure was to allocate memory, as opposed to an invalid request.
    pub fn is_out_of_memory(&self) -> bool {
        self.kind == PixmapErrorKind::OutOfMemory
    }
}

impl From<PixmapErrorKind> for PixmapError {
    fn from(kind: PixmapErrorKind) -> Self {
        PixmapError { kind }
    }
}

impl fmt::Display for PixmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            PixmapErrorKind::InvalidPixelType => "invalid pixel type",
            PixmapErrorKind::EmptyDimensions => "pixmap width or height is zero",
            PixmapErrorKind::Overflow => "pixmap size overflows",
            PixmapErrorKind::BadStride => "stride is too small for a row of pixels",
            PixmapErrorKind::TooSmall => "buffer is too small for the pixmap",
            PixmapErrorKind::OutOfMemory => "out of memory",
            PixmapErrorKind::Unconvertible => "pixel type cannot be converted",
        };

        f.write_str(msg)
    }
}

impl core::error::Error for PixmapError {}
