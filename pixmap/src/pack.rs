// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Storage classes and the pixel accessors generated for each of them.
//!
//! Formats that share a bit width and, for sub-byte widths, a bit order, are stored identically.
//! Each such class gets one zero-sized accessor type implementing [`PixelAccess`]. Drawing code is
//! written generically over the accessor and resolved to a concrete one once per call, through
//! [`PixelPack::action`].
use crate::ops::PixelOps;
use crate::pixel::Pixel;

/// Position of the first pixel within a byte, for formats narrower than a byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitOrder {
    /// The first pixel occupies the most significant bits.
    UpFirst,
    /// The first pixel occupies the least significant bits.
    DownFirst,
}

/// A bits-per-pixel class.
///
/// The discriminant indexes the dispatch table returned by [`PixelPack::ops`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PixelPack {
    Bpp1Ub,
    Bpp1Db,
    Bpp2Ub,
    Bpp2Db,
    Bpp4Ub,
    Bpp4Db,
    Bpp8,
    Bpp16,
    Bpp24,
    Bpp32,
}

/// Byte and bit location of a pixel in a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelAddr {
    /// Index of the byte holding the pixel, or its lowest byte.
    pub byte: usize,
    /// Shift of the pixel bits within that byte. Zero for byte aligned formats.
    pub bit: u8,
}

/// An operation generic over the pixel accessor, see [`PixelPack::action`].
pub trait PackAction<R = ()> {
    fn run<A: PixelAccess>(self, access: A) -> R;
}

/// Reads and writes pixels of one storage class within a single row.
///
/// All methods take the row slice, the bit offset of column zero within the first byte (non-zero
/// only for sub-pixmaps of sub-byte formats), and pixel indices into the row. There is no bounds
/// checking beyond slice indexing; callers clip first.
pub trait PixelAccess: Copy + Default + 'static {
    /// The class this accessor serves.
    const PACK: PixelPack;

    /// Read pixel `x`.
    fn get(row: &[u8], offset: u8, x: u32) -> Pixel;

    /// Write pixel `x`, keeping neighbours sharing its bytes intact.
    ///
    /// Bits of `pixel` beyond the width of the class are dropped.
    fn put(row: &mut [u8], offset: u8, x: u32, pixel: Pixel);

    /// Write `pixel` to every pixel of `x0..=x1`.
    fn fill(row: &mut [u8], offset: u8, x0: u32, x1: u32, pixel: Pixel) {
        for x in x0..=x1 {
            Self::put(row, offset, x, pixel);
        }
    }

    /// Copy `count` pixels starting at `sx` of `src` to `dx` of `dst`.
    fn copy(src: &[u8], src_offset: u8, sx: u32, dst: &mut [u8], dst_offset: u8, dx: u32, count: u32) {
        for i in 0..count {
            let pixel = Self::get(src, src_offset, sx + i);
            Self::put(dst, dst_offset, dx + i, pixel);
        }
    }
}

impl PixelPack {
    /// Every class, in table order.
    pub const ALL: [PixelPack; 10] = [
        PixelPack::Bpp1Ub,
        PixelPack::Bpp1Db,
        PixelPack::Bpp2Ub,
        PixelPack::Bpp2Db,
        PixelPack::Bpp4Ub,
        PixelPack::Bpp4Db,
        PixelPack::Bpp8,
        PixelPack::Bpp16,
        PixelPack::Bpp24,
        PixelPack::Bpp32,
    ];

    /// Bits per pixel of the class.
    pub const fn bpp(self) -> u8 {
        use PixelPack::*;
        match self {
            Bpp1Ub | Bpp1Db => 1,
            Bpp2Ub | Bpp2Db => 2,
            Bpp4Ub | Bpp4Db => 4,
            Bpp8 => 8,
            Bpp16 => 16,
            Bpp24 => 24,
            Bpp32 => 32,
        }
    }

    /// The order of pixels within a byte, `None` for byte aligned classes.
    pub const fn bit_order(self) -> Option<BitOrder> {
        use PixelPack::*;
        match self {
            Bpp1Ub | Bpp2Ub | Bpp4Ub => Some(BitOrder::UpFirst),
            Bpp1Db | Bpp2Db | Bpp4Db => Some(BitOrder::DownFirst),
            Bpp8 | Bpp16 | Bpp24 | Bpp32 => None,
        }
    }

    /// Bytes per pixel, `None` for classes narrower than a byte.
    pub const fn bytes(self) -> Option<u8> {
        match self.bit_order() {
            Some(_) => None,
            None => Some(self.bpp() / 8),
        }
    }

    /// The dispatch table entry of this class.
    pub fn ops(self) -> &'static PixelOps {
        PixelOps::of(self)
    }

    /// Run a generic operation with the accessor of this class.
    ///
    /// This is the one point where the class is matched on. Everything inside the action is
    /// monomorphized for the accessor and does not dispatch per pixel.
    pub fn action<R>(self, action: impl PackAction<R>) -> R {
        match self {
            PixelPack::Bpp1Ub => action.run(Bpp1Ub),
            PixelPack::Bpp1Db => action.run(Bpp1Db),
            PixelPack::Bpp2Ub => action.run(Bpp2Ub),
            PixelPack::Bpp2Db => action.run(Bpp2Db),
            PixelPack::Bpp4Ub => action.run(Bpp4Ub),
            PixelPack::Bpp4Db => action.run(Bpp4Db),
            PixelPack::Bpp8 => action.run(Bpp8),
            PixelPack::Bpp16 => action.run(Bpp16),
            PixelPack::Bpp24 => action.run(Bpp24),
            PixelPack::Bpp32 => action.run(Bpp32),
        }
    }

    /// Locate pixel `x` of a row, relative to the start of the row.
    ///
    /// `offset` is the bit offset of column zero, see [`PixelAccess`].
    pub const fn locate(self, offset: u8, x: u32) -> PixelAddr {
        let bpp = self.bpp() as usize;
        let bits = offset as usize + x as usize * bpp;
        let byte = bits / 8;
        let in_byte = (bits % 8) as u8;

        let bit = match self.bit_order() {
            Some(BitOrder::UpFirst) => 8 - self.bpp() - in_byte,
            Some(BitOrder::DownFirst) => in_byte,
            None => 0,
        };

        PixelAddr { byte, bit }
    }
}

macro_rules! sub_byte_access {
    ($($(#[$attr:meta])* $name:ident = $bpp:literal;)*) => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl PixelAccess for $name {
                const PACK: PixelPack = PixelPack::$name;

                #[inline]
                fn get(row: &[u8], offset: u8, x: u32) -> Pixel {
                    let addr = Self::PACK.locate(offset, x);
                    Pixel::from(row[addr.byte] >> addr.bit) & Self::MASK
                }

                #[inline]
                fn put(row: &mut [u8], offset: u8, x: u32, pixel: Pixel) {
                    let addr = Self::PACK.locate(offset, x);
                    let mask = (Self::MASK as u8) << addr.bit;
                    let bits = ((pixel & Self::MASK) as u8) << addr.bit;
                    row[addr.byte] = (row[addr.byte] & !mask) | bits;
                }

                fn fill(row: &mut [u8], offset: u8, x0: u32, x1: u32, pixel: Pixel) {
                    const PER_BYTE: u32 = 8 / $bpp;
                    // Every pixel of the byte set to the same value.
                    let pattern = ((pixel & Self::MASK) as u8).wrapping_mul(0xff / Self::MASK as u8);

                    let mut x = x0;
                    while x <= x1 && (u32::from(offset) + x * $bpp) % 8 != 0 {
                        Self::put(row, offset, x, pixel);
                        x += 1;
                    }

                    while x <= x1 && x1 - x + 1 >= PER_BYTE {
                        row[Self::PACK.locate(offset, x).byte] = pattern;
                        x += PER_BYTE;
                    }

                    while x <= x1 {
                        Self::put(row, offset, x, pixel);
                        x += 1;
                    }
                }
            }

            impl $name {
                const MASK: Pixel = (1 << $bpp) - 1;
            }
        )*
    };
}

macro_rules! byte_access {
    ($($(#[$attr:meta])* $name:ident = $bytes:literal;)*) => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl PixelAccess for $name {
                const PACK: PixelPack = PixelPack::$name;

                #[inline]
                fn get(row: &[u8], _: u8, x: u32) -> Pixel {
                    let at = x as usize * $bytes;
                    let mut le = [0u8; 4];
                    le[..$bytes].copy_from_slice(&row[at..at + $bytes]);
                    Pixel::from_le_bytes(le)
                }

                #[inline]
                fn put(row: &mut [u8], _: u8, x: u32, pixel: Pixel) {
                    let at = x as usize * $bytes;
                    row[at..at + $bytes].copy_from_slice(&pixel.to_le_bytes()[..$bytes]);
                }

                fn fill(row: &mut [u8], _: u8, x0: u32, x1: u32, pixel: Pixel) {
                    let run = &mut row[x0 as usize * $bytes..(x1 as usize + 1) * $bytes];
                    fill_run::<$bytes>(run, pixel);
                }

                fn copy(src: &[u8], _: u8, sx: u32, dst: &mut [u8], _: u8, dx: u32, count: u32) {
                    let len = count as usize * $bytes;
                    let src = &src[sx as usize * $bytes..][..len];
                    dst[dx as usize * $bytes..][..len].copy_from_slice(src);
                }
            }
        )*
    };
}

sub_byte_access! {
    /// One bit per pixel, first pixel in the most significant bit.
    Bpp1Ub = 1;
    /// One bit per pixel, first pixel in the least significant bit.
    Bpp1Db = 1;
    Bpp2Ub = 2;
    Bpp2Db = 2;
    Bpp4Ub = 4;
    Bpp4Db = 4;
}

byte_access! {
    Bpp8 = 1;
    /// Two bytes per pixel, least significant byte first.
    Bpp16 = 2;
    /// Three bytes per pixel, least significant byte first.
    Bpp24 = 3;
    Bpp32 = 4;
}

/// Fill a run of whole pixels of `N` bytes each.
fn fill_run<const N: usize>(run: &mut [u8], pixel: Pixel) {
    let bytes = pixel.to_le_bytes();

    match N {
        1 => run.fill(bytes[0]),
        2 => match bytemuck::try_cast_slice_mut::<u8, u16>(run) {
            Ok(words) => words.fill(u16::from_ne_bytes([bytes[0], bytes[1]])),
            Err(_) => fill_chunks(run, &bytes[..2]),
        },
        4 => match bytemuck::try_cast_slice_mut::<u8, u32>(run) {
            Ok(words) => words.fill(u32::from_ne_bytes(bytes)),
            Err(_) => fill_chunks(run, &bytes),
        },
        _ => fill_chunks(run, &bytes[..N]),
    }
}

fn fill_chunks(run: &mut [u8], pixel: &[u8]) {
    for chunk in run.chunks_exact_mut(pixel.len()) {
        chunk.copy_from_slice(pixel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bpp;

    impl PackAction<u8> for Bpp {
        fn run<A: PixelAccess>(self, _: A) -> u8 {
            A::PACK.bpp()
        }
    }

    #[test]
    fn action_resolves_matching_accessor() {
        for pack in PixelPack::ALL {
            assert_eq!(pack.action(Bpp), pack.bpp());
        }
    }

    #[test]
    fn up_first_bit_order() {
        let mut row = [0u8; 1];
        Bpp1Ub::put(&mut row, 0, 0, 1);
        Bpp1Ub::put(&mut row, 0, 1, 0);
        assert_eq!(row[0] & 0x80, 0x80);
        assert_eq!(row[0] & 0x40, 0);

        Bpp1Ub::put(&mut row, 0, 7, 1);
        assert_eq!(row[0], 0x81);
        Bpp1Ub::put(&mut row, 0, 0, 0);
        assert_eq!(row[0], 0x01);
    }

    #[test]
    fn down_first_bit_order() {
        let mut row = [0u8; 2];
        Bpp2Db::put(&mut row, 0, 0, 3);
        Bpp2Db::put(&mut row, 0, 5, 2);
        assert_eq!(row, [0b0000_0011, 0b0000_1000]);
        assert_eq!(Bpp2Db::get(&row, 0, 5), 2);
        assert_eq!(Bpp2Db::get(&row, 0, 4), 0);

        let mut row = [0u8; 1];
        Bpp4Ub::put(&mut row, 0, 1, 0xa);
        assert_eq!(row[0], 0x0a);
        Bpp4Db::put(&mut row, 0, 1, 0xc);
        assert_eq!(row[0], 0xca);
    }

    #[test]
    fn write_preserves_neighbours() {
        let mut row = [0xff_u8; 2];
        Bpp1Ub::put(&mut row, 0, 9, 0);
        assert_eq!(row, [0xff, 0b1011_1111]);
        Bpp4Ub::put(&mut row, 0, 0, 0);
        assert_eq!(row, [0x0f, 0b1011_1111]);
    }

    #[test]
    fn offset_shifts_column_zero() {
        let mut row = [0u8; 2];
        Bpp1Ub::put(&mut row, 3, 0, 1);
        Bpp1Ub::put(&mut row, 3, 5, 1);
        assert_eq!(row, [0b0001_0000, 0b1000_0000]);
        assert_eq!(Bpp1Ub::get(&row, 3, 5), 1);

        let addr = PixelPack::Bpp2Db.locate(6, 1);
        assert_eq!(addr, PixelAddr { byte: 1, bit: 0 });
    }

    #[test]
    fn byte_aligned_little_endian() {
        let mut row = [0u8; 8];
        Bpp24::put(&mut row, 0, 1, 0x00ab_cdef);
        assert_eq!(row[3..6], [0xef, 0xcd, 0xab]);
        assert_eq!(Bpp24::get(&row, 0, 1), 0xab_cdef);

        Bpp16::put(&mut row, 0, 0, 0x1_2345);
        assert_eq!(row[..2], [0x45, 0x23]);
        assert_eq!(Bpp16::get(&row, 0, 0), 0x2345);
    }

    #[test]
    fn sub_byte_fill_spans_partial_bytes() {
        let mut row = [0u8; 3];
        Bpp1Ub::fill(&mut row, 0, 3, 20, 1);
        assert_eq!(row, [0b0001_1111, 0xff, 0b1111_1000]);

        let mut row = [0xffu8; 3];
        Bpp2Db::fill(&mut row, 2, 0, 5, 0);
        // Column zero starts at bit 2, six pixels cover bits 2..14.
        assert_eq!(row, [0b0000_0011, 0b1100_0000, 0xff]);
    }

    #[test]
    fn fill_words() {
        let mut row = [0u8; 16];
        Bpp32::fill(&mut row, 0, 1, 2, 0x0403_0201);
        assert_eq!(row[..12], [0, 0, 0, 0, 1, 2, 3, 4, 1, 2, 3, 4]);

        let mut row = [0u8; 9];
        Bpp24::fill(&mut row, 0, 0, 2, 0x03_0201);
        assert_eq!(row, [1, 2, 3, 1, 2, 3, 1, 2, 3]);
    }
}
