// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Gamma and sRGB correction tables.
//!
//! A [`Gamma`] holds, for every channel of a pixel type, a table from the encoded value to a
//! linear value with two more bits of precision, and the table back. Pixmaps share one through an
//! `Arc`.
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::pixel::{Channel, PixelType};

/// The transfer curve between encoded and linear channel values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Correction {
    /// A plain power curve, linear = encoded ^ gamma.
    Gamma(f32),
    /// The piecewise sRGB transfer function.
    Srgb,
}

/// A lookup table between two bit depths.
#[derive(Debug)]
pub struct GammaTable {
    in_bits: u8,
    out_bits: u8,
    values: Vec<u32>,
}

/// Correction tables for each channel of one pixel type.
#[derive(Debug)]
pub struct Gamma {
    pixel_type: PixelType,
    correction: Correction,
    to_linear: Vec<Arc<GammaTable>>,
    from_linear: Vec<Arc<GammaTable>>,
}

#[derive(Clone, Copy)]
enum Direction {
    ToLinear,
    FromLinear,
}

impl Gamma {
    /// Build the tables for `pixel_type`.
    ///
    /// Channels of equal width share their tables.
    ///
    /// # Panics
    ///
    /// For [`PixelType::Unknown`].
    pub fn new(pixel_type: PixelType, correction: Correction) -> Self {
        assert!(pixel_type.is_valid(), "Invalid pixel type {}", pixel_type);
        log::debug!("Acquiring gamma tables {} {:?}", pixel_type, correction);

        let channels = pixel_type.desc().channels();
        let mut to_linear: Vec<Arc<GammaTable>> = Vec::with_capacity(channels.len());
        let mut from_linear: Vec<Arc<GammaTable>> = Vec::with_capacity(channels.len());

        for channel in channels {
            let bits = channel.size();
            let shared = to_linear
                .iter()
                .zip(&from_linear)
                .find(|(table, _)| table.in_bits == bits);

            let (to, from) = match shared {
                Some((to, from)) => (to.clone(), from.clone()),
                None => (
                    Arc::new(GammaTable::new(correction, Direction::ToLinear, bits, bits + 2)),
                    Arc::new(GammaTable::new(correction, Direction::FromLinear, bits + 2, bits)),
                ),
            };

            to_linear.push(to);
            from_linear.push(from);
        }

        Gamma {
            pixel_type,
            correction,
            to_linear,
            from_linear,
        }
    }

    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    pub fn correction(&self) -> Correction {
        self.correction
    }

    /// The encoded to linear table of channel `idx`, in descriptor order.
    pub fn to_linear_table(&self, idx: usize) -> &GammaTable {
        &self.to_linear[idx]
    }

    /// The linear to encoded table of channel `idx`, in descriptor order.
    pub fn from_linear_table(&self, idx: usize) -> &GammaTable {
        &self.from_linear[idx]
    }

    /// Linearize a value of channel `idx`.
    pub fn to_linear(&self, idx: usize, value: u32) -> u32 {
        self.to_linear[idx].get(value)
    }

    /// Encode a linear value of channel `idx`.
    pub fn from_linear(&self, idx: usize, value: u32) -> u32 {
        self.from_linear[idx].get(value)
    }
}

impl GammaTable {
    fn new(correction: Correction, direction: Direction, in_bits: u8, out_bits: u8) -> Self {
        log::debug!(
            "Creating gamma table {:?} in_bits {} out_bits {}",
            correction,
            in_bits,
            out_bits
        );

        let in_max = Channel::bits_mask(in_bits);
        let out_max = Channel::bits_mask(out_bits) as f32;

        let values = (0..=in_max)
            .map(|i| {
                let v = i as f32 / in_max as f32;
                let curved = match (correction, direction) {
                    (Correction::Gamma(gamma), Direction::ToLinear) => libm::powf(v, gamma),
                    (Correction::Gamma(gamma), Direction::FromLinear) => libm::powf(v, 1.0 / gamma),
                    (Correction::Srgb, Direction::ToLinear) => srgb_to_linear(v),
                    (Correction::Srgb, Direction::FromLinear) => linear_to_srgb(v),
                };
                (curved * out_max + 0.5) as u32
            })
            .collect();

        GammaTable {
            in_bits,
            out_bits,
            values,
        }
    }

    pub fn in_bits(&self) -> u8 {
        self.in_bits
    }

    pub fn out_bits(&self) -> u8 {
        self.out_bits
    }

    /// Look a value up. Bits above `in_bits` are ignored.
    pub fn get(&self, value: u32) -> u32 {
        self.values[(value & Channel::bits_mask(self.in_bits)) as usize]
    }
}

fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        libm::powf((v + 0.055) / 1.055, 2.4)
    }
}

fn linear_to_srgb(v: f32) -> f32 {
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * libm::powf(v, 1.0 / 2.4) - 0.055
    }
}
