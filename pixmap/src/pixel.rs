// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! The pixel format descriptor table.
use core::fmt;

use crate::pack::PixelPack;

/// A pixel value, all channels packed as described by some [`PixelType`].
///
/// The value is not self-describing. Whoever holds one also knows the format it was encoded for,
/// usually because it came from, or is meant for, a specific pixmap.
pub type Pixel = u32;

bitflags::bitflags! {
    /// Properties of a pixel format.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PixelFlags: u8 {
        /// The format has an alpha channel.
        const ALPHA = 0x01;
        /// The format stores red, green and blue channels.
        const RGB = 0x02;
        /// The value is an index into a palette.
        const PALETTE = 0x04;
        const CMYK = 0x08;
        const GRAYSCALE = 0x10;
    }
}

/// One named bit-field within a packed pixel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Channel {
    name: &'static str,
    offset: u8,
    size: u8,
}

/// Static metadata of one pixel format.
///
/// All descriptors live in one process-wide table, see [`PixelType::desc`].
#[derive(Debug)]
pub struct PixelTypeDesc {
    pixel_type: PixelType,
    name: &'static str,
    bpp: u8,
    pack: Option<PixelPack>,
    flags: PixelFlags,
    channels: &'static [Channel],
}

macro_rules! pixel_types {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident = $id:literal, $name:literal, $bpp:literal, $pack:ident,
            [$($ch:literal $off:literal $size:literal),+], $($flag:ident)|+;
        )*
    ) => {
        /// The pixel formats known to the library.
        ///
        /// The discriminant is the format id. It indexes the descriptor table.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types)]
        #[repr(u8)]
        pub enum PixelType {
            /// The sentinel returned when no format matches a request.
            Unknown = 0,
            $($(#[$attr])* $variant = $id,)*
        }

        static PIXEL_TYPES: &[PixelTypeDesc] = &[
            PixelTypeDesc {
                pixel_type: PixelType::Unknown,
                name: "UNKNOWN",
                bpp: 0,
                pack: None,
                flags: PixelFlags::empty(),
                channels: &[],
            },
            $(
                PixelTypeDesc {
                    pixel_type: PixelType::$variant,
                    name: $name,
                    bpp: $bpp,
                    pack: Some(PixelPack::$pack),
                    flags: PixelFlags::empty()$(.union(PixelFlags::$flag))+,
                    channels: &[$(Channel { name: $ch, offset: $off, size: $size }),+],
                },
            )*
        ];

        impl PixelType {
            /// All valid formats, in id order. `Unknown` is not part of it.
            pub const ALL: &'static [PixelType] = &[$(PixelType::$variant),*];
        }
    };
}

pixel_types! {
    /// 32 bit RGB with 8 unused high bits.
    xRGB8888 = 1, "xRGB8888", 32, Bpp32, ["R" 16 8, "G" 8 8, "B" 0 8], RGB;
    RGBA8888 = 2, "RGBA8888", 32, Bpp32, ["R" 24 8, "G" 16 8, "B" 8 8, "A" 0 8], RGB | ALPHA;
    RGB888 = 3, "RGB888", 24, Bpp24, ["R" 16 8, "G" 8 8, "B" 0 8], RGB;
    BGR888 = 4, "BGR888", 24, Bpp24, ["B" 16 8, "G" 8 8, "R" 0 8], RGB;
    RGB555 = 5, "RGB555", 16, Bpp16, ["R" 10 5, "G" 5 5, "B" 0 5], RGB;
    RGB565 = 6, "RGB565", 16, Bpp16, ["R" 11 5, "G" 5 6, "B" 0 5], RGB;
    RGB332 = 7, "RGB332", 8, Bpp8, ["R" 5 3, "G" 2 3, "B" 0 2], RGB;
    CMYK8888 = 8, "CMYK8888", 32, Bpp32, ["K" 24 8, "Y" 16 8, "M" 8 8, "C" 0 8], CMYK;
    /// 2 bit palette index, first pixel in the high bits.
    P2 = 9, "P2", 2, Bpp2Ub, ["P" 0 2], PALETTE;
    P4 = 10, "P4", 4, Bpp4Ub, ["P" 0 4], PALETTE;
    P8 = 11, "P8", 8, Bpp8, ["P" 0 8], PALETTE;
    /// 1 bit grayscale, first pixel in the low bit.
    G1_DB = 12, "G1_DB", 1, Bpp1Db, ["V" 0 1], GRAYSCALE;
    G2_DB = 13, "G2_DB", 2, Bpp2Db, ["V" 0 2], GRAYSCALE;
    G4_DB = 14, "G4_DB", 4, Bpp4Db, ["V" 0 4], GRAYSCALE;
    /// 1 bit grayscale, first pixel in the high bit.
    G1_UB = 15, "G1_UB", 1, Bpp1Ub, ["V" 0 1], GRAYSCALE;
    G2_UB = 16, "G2_UB", 2, Bpp2Ub, ["V" 0 2], GRAYSCALE;
    G4_UB = 17, "G4_UB", 4, Bpp4Ub, ["V" 0 4], GRAYSCALE;
    G8 = 18, "G8", 8, Bpp8, ["V" 0 8], GRAYSCALE;
    GA88 = 19, "GA88", 16, Bpp16, ["V" 0 8, "A" 8 8], GRAYSCALE | ALPHA;
    G16 = 20, "G16", 16, Bpp16, ["V" 0 16], GRAYSCALE;
}

/// Names accepted by [`PixelType::by_name`] in addition to the canonical ones.
const ALIASES: &[(&str, PixelType)] = &[
    ("G1", PixelType::G1_UB),
    ("G2", PixelType::G2_UB),
    ("G4", PixelType::G4_UB),
];

impl PixelType {
    /// The descriptor of this format.
    pub fn desc(self) -> &'static PixelTypeDesc {
        &PIXEL_TYPES[self as usize]
    }

    /// Look up a format by its numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        PIXEL_TYPES.get(usize::from(id)).map(|desc| desc.pixel_type)
    }

    /// Look up a format by name, ignoring ASCII case.
    pub fn by_name(name: &str) -> Option<Self> {
        let canonical = PIXEL_TYPES
            .iter()
            .skip(1)
            .find(|desc| desc.name.eq_ignore_ascii_case(name))
            .map(|desc| desc.pixel_type);

        canonical.or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                .map(|&(_, pixel_type)| pixel_type)
        })
    }

    pub fn name(self) -> &'static str {
        self.desc().name
    }

    /// Bits per pixel.
    pub fn bpp(self) -> u8 {
        self.desc().bpp
    }

    /// The bits-per-pixel class that stores this format.
    ///
    /// # Panics
    ///
    /// For [`PixelType::Unknown`]. No pixmap can be constructed with it, so reaching this is a
    /// bug in the caller.
    pub fn pack(self) -> PixelPack {
        match self.desc().pack {
            Some(pack) => pack,
            None => panic!("Invalid pixel type {:?} has no storage class", self),
        }
    }

    pub fn is_valid(self) -> bool {
        self != PixelType::Unknown
    }

    /// Find an RGB format with exactly the given channel masks.
    ///
    /// This bridges a foreign description of a surface, as reported by a window system, onto the
    /// table. A zero mask requests that the channel is absent. Returns [`PixelType::Unknown`] if no
    /// format matches exactly, in which case the caller has to convert.
    pub fn rgb_match(rmask: Pixel, gmask: Pixel, bmask: Pixel, amask: Pixel, bpp: u8) -> Self {
        log::debug!(
            "Matching pixel R {:08x} G {:08x} B {:08x} A {:08x} size {}",
            rmask,
            gmask,
            bmask,
            amask,
            bpp
        );

        let found = PIXEL_TYPES.iter().find(|desc| {
            desc.flags.contains(PixelFlags::RGB)
                && desc.bpp == bpp
                && desc.mask_matches("R", rmask)
                && desc.mask_matches("G", gmask)
                && desc.mask_matches("B", bmask)
                && desc.mask_matches("A", amask)
        });

        match found {
            Some(desc) => {
                log::debug!("Pixel found type id {} name '{}'", desc.id(), desc.name);
                desc.pixel_type
            }
            None => {
                log::debug!("No pixel type matches the masks");
                PixelType::Unknown
            }
        }
    }

    /// Find an RGB format from channel sizes and offsets.
    ///
    /// Each of `r`, `g`, `b` and `a` is a `(size, offset)` pair in bits. A size of zero requests
    /// that the channel is absent.
    pub fn rgb_lookup(r: (u8, u8), g: (u8, u8), b: (u8, u8), a: (u8, u8), bpp: u8) -> Self {
        fn mask((size, offset): (u8, u8)) -> Pixel {
            match size {
                0 => 0,
                size => Channel::bits_mask(size).wrapping_shl(u32::from(offset)),
            }
        }

        Self::rgb_match(mask(r), mask(g), mask(b), mask(a), bpp)
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PixelTypeDesc {
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    pub fn id(&self) -> u8 {
        self.pixel_type as u8
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bpp(&self) -> u8 {
        self.bpp
    }

    /// The storage class, `None` only for the unknown sentinel.
    pub fn pack(&self) -> Option<PixelPack> {
        self.pack
    }

    pub fn flags(&self) -> PixelFlags {
        self.flags
    }

    /// Check that all of the given flags are set for this format.
    pub fn has_flags(&self, flags: PixelFlags) -> bool {
        self.flags.contains(flags)
    }

    pub fn channels(&self) -> &'static [Channel] {
        self.channels
    }

    /// Find a channel by its name, such as `"R"` or `"A"`.
    pub fn channel(&self, name: &str) -> Option<&'static Channel> {
        self.channels.iter().find(|channel| channel.name == name)
    }

    /// Bits of a value that belong to no channel.
    pub fn unused_mask(&self) -> Pixel {
        let used = self.channels.iter().fold(0, |acc, ch| acc | ch.mask());
        Channel::bits_mask(self.bpp) & !used
    }

    /// Display a pixel value of this format channel by channel.
    ///
    /// ```
    /// use gfxprim_pixmap::PixelType;
    ///
    /// let desc = PixelType::RGB565.desc();
    /// let text = format!("{}", desc.display(0xf800));
    /// assert_eq!(text, "<RGB565 0xf800> R=31 G=0 B=0");
    /// ```
    pub fn display(&self, pixel: Pixel) -> PixelDisplay {
        PixelDisplay { desc: self, pixel }
    }

    /// A picture of the bit layout, most significant bit first.
    ///
    /// Every bit is shown as the first letter of the channel that owns it, unused bits as `x`.
    pub fn bitmap(&self) -> BitmapDisplay {
        BitmapDisplay { desc: self }
    }

    fn mask_matches(&self, name: &str, mask: Pixel) -> bool {
        match self.channel(name) {
            Some(channel) => channel.mask() == mask,
            None => mask == 0,
        }
    }
}

impl Channel {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The offset of the lowest bit of the channel.
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// The width of the channel in bits.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// The largest value of the channel.
    pub fn max(&self) -> Pixel {
        Self::bits_mask(self.size)
    }

    /// The bits occupied by the channel within a pixel value.
    pub fn mask(&self) -> Pixel {
        self.max() << self.offset
    }

    /// Extract the channel value from a pixel, as the least significant bits of the result.
    pub fn extract(&self, pixel: Pixel) -> Pixel {
        (pixel >> self.offset) & self.max()
    }

    /// Replace the channel value of a pixel, dropping excess bits of `value`.
    pub fn insert(&self, pixel: Pixel, value: Pixel) -> Pixel {
        (pixel & !self.mask()) | ((value & self.max()) << self.offset)
    }

    pub(crate) fn bits_mask(bits: u8) -> Pixel {
        match bits {
            0 => 0,
            bits => Pixel::MAX >> (32 - u32::from(bits.min(32))),
        }
    }
}

/// Formats a pixel value with its channels, see [`PixelTypeDesc::display`].
pub struct PixelDisplay<'desc> {
    desc: &'desc PixelTypeDesc,
    pixel: Pixel,
}

impl fmt::Display for PixelDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = usize::from(self.desc.bpp).div_ceil(4);
        write!(f, "<{} 0x{:0digits$x}>", self.desc.name, self.pixel)?;

        for channel in self.desc.channels {
            write!(f, " {}={}", channel.name, channel.extract(self.pixel))?;
        }

        Ok(())
    }
}

/// Formats the bit layout of a format, see [`PixelTypeDesc::bitmap`].
pub struct BitmapDisplay<'desc> {
    desc: &'desc PixelTypeDesc,
}

impl fmt::Display for BitmapDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for bit in (0..self.desc.bpp).rev() {
            let owner = self
                .desc
                .channels
                .iter()
                .find(|ch| ch.offset <= bit && bit < ch.offset + ch.size);
            let letter = owner.and_then(|ch| ch.name.chars().next()).unwrap_or('x');
            f.write_char(letter)?;
        }

        Ok(())
    }
}
