// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Rotated and mirrored views of pixel storage.
//!
//! A pixmap carries three flags that remap user coordinates onto storage coordinates, applied in
//! a fixed order: swap the axes, then mirror x, then mirror y. Drawing through the public entry
//! points honors them; the `_raw` variants take storage coordinates directly.

/// A signed pixel coordinate.
pub type Coord = i32;

/// An unsigned pixel extent.
pub type Size = u32;

/// The three coordinate transform flags of a pixmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Transform {
    /// Exchange x and y before mirroring.
    pub axes_swap: bool,
    /// Mirror along the storage x axis.
    pub x_swap: bool,
    /// Mirror along the storage y axis.
    pub y_swap: bool,
}

/// A rotation or reflection applied to the transform of a pixmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Rotate clockwise by 90 degrees.
    Rotate90,
    Rotate180,
    /// Rotate clockwise by 270 degrees, that is counter clockwise by 90.
    Rotate270,
    /// Flip the image upside down.
    MirrorH,
    /// Flip the image left to right.
    MirrorV,
}

impl Transform {
    pub const IDENTITY: Self = Transform {
        axes_swap: false,
        x_swap: false,
        y_swap: false,
    };

    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Map a user coordinate to storage, for storage of `width` by `height` pixels.
    ///
    /// Mirroring a coordinate within `width` (or `height`) of `Coord::MIN` leaves the range of
    /// [`Coord`], the result saturates at `Coord::MAX`. Such points stay outside the storage but
    /// move by up to the size of the pixmap, so a line ending there keeps its direction only
    /// approximately.
    pub fn point(self, x: Coord, y: Coord, width: Size, height: Size) -> (Coord, Coord) {
        let (mut x, mut y) = if self.axes_swap { (y, x) } else { (x, y) };

        if self.x_swap {
            x = flip(x, width, 1);
        }

        if self.y_swap {
            y = flip(y, height, 1);
        }

        (x, y)
    }

    /// Map a storage coordinate back to the user coordinate it is drawn for.
    pub fn retransform_point(self, x: Coord, y: Coord, width: Size, height: Size) -> (Coord, Coord) {
        let x = if self.x_swap { flip(x, width, 1) } else { x };
        let y = if self.y_swap { flip(y, height, 1) } else { y };

        if self.axes_swap {
            (y, x)
        } else {
            (x, y)
        }
    }

    /// Map a user rectangle to storage, swapping its extents along with the axes.
    ///
    /// Used for rectangle fills and blit targets.
    pub fn rect(
        self,
        (x, y): (Coord, Coord),
        (w, h): (Size, Size),
        width: Size,
        height: Size,
    ) -> ((Coord, Coord), (Size, Size)) {
        let ((mut x, mut y), (w, h)) = if self.axes_swap {
            ((y, x), (h, w))
        } else {
            ((x, y), (w, h))
        };

        if self.x_swap {
            x = flip(x, width, w);
        }

        if self.y_swap {
            y = flip(y, height, h);
        }

        ((x, y), (w, h))
    }

    /// The user facing extent of storage of `width` by `height` pixels.
    pub fn size(self, width: Size, height: Size) -> (Size, Size) {
        if self.axes_swap {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Compose a rotation or reflection onto this transform.
    pub fn rotate(&mut self, symmetry: Symmetry) {
        match symmetry {
            Symmetry::Rotate90 => self.rotate_cw(),
            Symmetry::Rotate180 => {
                self.x_swap = !self.x_swap;
                self.y_swap = !self.y_swap;
            }
            Symmetry::Rotate270 => self.rotate_ccw(),
            Symmetry::MirrorH => self.y_swap = !self.y_swap,
            Symmetry::MirrorV => self.x_swap = !self.x_swap,
        }
    }

    fn rotate_cw(&mut self) {
        self.axes_swap = !self.axes_swap;

        // The mirror flags advance 00 -> 10 -> 11 -> 01 -> 00 as (x_swap, y_swap).
        let (x_swap, y_swap) = (self.x_swap, self.y_swap);
        self.x_swap = !y_swap;
        self.y_swap = x_swap;
    }

    fn rotate_ccw(&mut self) {
        self.axes_swap = !self.axes_swap;

        let (x_swap, y_swap) = (self.x_swap, self.y_swap);
        self.x_swap = y_swap;
        self.y_swap = !x_swap;
    }
}

/// Mirror a span of `extent` starting at `coord` within `size`.
fn flip(coord: Coord, size: Size, extent: Size) -> Coord {
    let flipped = i64::from(size) - i64::from(coord) - i64::from(extent);
    flipped.clamp(i64::from(Coord::MIN), i64::from(Coord::MAX)) as Coord
}
