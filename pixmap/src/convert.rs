// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Conversion of pixel values between formats.
//!
//! Channels are matched by name and rescaled between bit widths. Gray values are derived from RGB
//! as the average of the three channels, a missing alpha channel reads as opaque. CMYK goes through
//! an 8 bit RGBA intermediate. Palette formats carry no color by themselves and are rejected.
use alloc::vec::Vec;

use crate::layout::PixmapError;
use crate::pixel::{Channel, Pixel, PixelFlags, PixelType};

/// A conversion between two pixel types, planned once and applied to many values.
#[derive(Clone, Debug)]
pub struct Converter {
    from: PixelType,
    to: PixelType,
    plan: Plan,
}

#[derive(Clone, Debug)]
enum Plan {
    Identity,
    Channels(Vec<(Channel, Source)>),
    ViaRgba,
}

#[derive(Clone, Copy, Debug)]
enum Source {
    Scale(Channel),
    Average([Channel; 3]),
    Opaque,
}

impl Converter {
    /// Plan the conversion from `from` to `to`.
    ///
    /// Fails if either type is a palette type or unknown.
    pub fn new(from: PixelType, to: PixelType) -> Result<Self, PixmapError> {
        convertible(from)?;
        convertible(to)?;

        let plan = if from == to {
            Plan::Identity
        } else if is_cmyk(from) || is_cmyk(to) {
            Plan::ViaRgba
        } else {
            Plan::Channels(channel_plan(from, to))
        };

        log::trace!("Converting {} to {} with {:?}", from, to, plan);
        Ok(Converter { from, to, plan })
    }

    pub fn from(&self) -> PixelType {
        self.from
    }

    pub fn to(&self) -> PixelType {
        self.to
    }

    /// Convert one value.
    pub fn convert(&self, pixel: Pixel) -> Pixel {
        match &self.plan {
            Plan::Identity => pixel,
            Plan::Channels(channels) => channels.iter().fold(0, |acc, (dst, source)| {
                let value = match *source {
                    Source::Scale(src) => scale(src.extract(pixel), src.size(), dst.size()),
                    Source::Average(rgb) => {
                        let sum: Pixel = rgb
                            .iter()
                            .map(|src| scale(src.extract(pixel), src.size(), dst.size()))
                            .sum();
                        sum / 3
                    }
                    Source::Opaque => dst.max(),
                };
                dst.insert(acc, value)
            }),
            Plan::ViaRgba => encode_rgba(self.to, decode_rgba(self.from, pixel)),
        }
    }
}

/// Convert a value of `from` into a value of `to`.
pub fn convert_pixel(pixel: Pixel, from: PixelType, to: PixelType) -> Result<Pixel, PixmapError> {
    Ok(Converter::new(from, to)?.convert(pixel))
}

/// Encode 8 bit `[r, g, b, a]` as a value of `pixel_type`.
pub fn rgba_to_pixel(pixel_type: PixelType, rgba: [u8; 4]) -> Result<Pixel, PixmapError> {
    convertible(pixel_type)?;
    Ok(encode_rgba(pixel_type, rgba))
}

/// Decode a value of `pixel_type` to 8 bit `[r, g, b, a]`.
pub fn pixel_to_rgba(pixel_type: PixelType, pixel: Pixel) -> Result<[u8; 4], PixmapError> {
    convertible(pixel_type)?;
    Ok(decode_rgba(pixel_type, pixel))
}

fn convertible(pixel_type: PixelType) -> Result<(), PixmapError> {
    if !pixel_type.is_valid() || pixel_type.desc().has_flags(PixelFlags::PALETTE) {
        log::warn!("Cannot convert pixel type {}", pixel_type);
        return Err(PixmapError::unconvertible());
    }

    Ok(())
}

fn is_cmyk(pixel_type: PixelType) -> bool {
    pixel_type.desc().has_flags(PixelFlags::CMYK)
}

fn channel_plan(from: PixelType, to: PixelType) -> Vec<(Channel, Source)> {
    let src = from.desc();
    let rgb = match (src.channel("R"), src.channel("G"), src.channel("B")) {
        (Some(&r), Some(&g), Some(&b)) => Some([r, g, b]),
        _ => None,
    };
    let gray = src.channel("V").copied();

    to.desc()
        .channels()
        .iter()
        .map(|&dst| {
            let source = match (src.channel(dst.name()), dst.name()) {
                (Some(&same), _) => Source::Scale(same),
                (None, "A") => Source::Opaque,
                (None, "V") => rgb.map_or(Source::Opaque, Source::Average),
                (None, _) => gray.map_or(Source::Opaque, Source::Scale),
            };
            (dst, source)
        })
        .collect()
}

/// Rescale a channel value between bit widths.
///
/// Widening repeats the bit pattern so that the maximum maps to the maximum, narrowing keeps the
/// high bits.
pub fn scale(value: Pixel, from_bits: u8, to_bits: u8) -> Pixel {
    if from_bits >= to_bits {
        return value >> (from_bits - to_bits);
    }

    if from_bits == 0 {
        return 0;
    }

    let mut result: u64 = 0;
    let mut filled = 0;
    while filled < to_bits {
        result = (result << from_bits) | u64::from(value);
        filled += from_bits;
    }

    (result >> (filled - to_bits)) as Pixel
}

fn to8(value: Pixel, channel: &Channel) -> u8 {
    scale(value, channel.size(), 8) as u8
}

fn decode_rgba(pixel_type: PixelType, pixel: Pixel) -> [u8; 4] {
    let desc = pixel_type.desc();
    let get = |name: &str| desc.channel(name).map(|ch| to8(ch.extract(pixel), ch));
    let alpha = get("A").unwrap_or(0xff);

    if desc.has_flags(PixelFlags::CMYK) {
        let [c, m, y, k] = ["C", "M", "Y", "K"].map(|name| u32::from(get(name).unwrap_or(0)));
        let ink = |v: u32| ((255 - v) * (255 - k) / 255) as u8;
        return [ink(c), ink(m), ink(y), alpha];
    }

    match get("V") {
        Some(v) => [v, v, v, alpha],
        None => [
            get("R").unwrap_or(0),
            get("G").unwrap_or(0),
            get("B").unwrap_or(0),
            alpha,
        ],
    }
}

fn encode_rgba(pixel_type: PixelType, [r, g, b, a]: [u8; 4]) -> Pixel {
    let desc = pixel_type.desc();

    let values: [(&str, u8); 4] = if desc.has_flags(PixelFlags::CMYK) {
        let max = r.max(g).max(b);
        let k = 255 - max;
        let ink = |v: u8| match max {
            0 => 0,
            max => ((u32::from(max) - u32::from(v)) * 255 / u32::from(max)) as u8,
        };
        [("C", ink(r)), ("M", ink(g)), ("Y", ink(b)), ("K", k)]
    } else {
        let gray = ((u32::from(r) + u32::from(g) + u32::from(b)) / 3) as u8;
        if desc.channel("V").is_some() {
            [("V", gray), ("A", a), ("", 0), ("", 0)]
        } else {
            [("R", r), ("G", g), ("B", b), ("A", a)]
        }
    };

    values.iter().fold(0, |acc, &(name, value)| match desc.channel(name) {
        Some(ch) => ch.insert(acc, scale(Pixel::from(value), 8, ch.size())),
        None => acc,
    })
}
