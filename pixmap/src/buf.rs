// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
use core::ops;

use alloc::vec::Vec;

use crate::layout::PixmapError;

/// Allocates and manages raw pixel bytes.
///
/// The bytes are allocated in chunks of [`MaxAligned`], so any row starts at a well aligned
/// address when the stride is a multiple of the chunk size, and word sized fills take the fast
/// path. The logical length is kept separately from the chunk count.
#[derive(Clone, Default)]
pub struct Buffer {
    /// The backing memory.
    inner: Vec<MaxAligned>,
    /// The number of bytes requested.
    len: usize,
}

/// A byte-like type aligned to the largest alignment pixel rows benefit from.
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C, align(16))]
pub struct MaxAligned([u8; 16]);

const CHUNK: usize = core::mem::size_of::<MaxAligned>();

impl Buffer {
    /// Allocate zeroed bytes.
    ///
    /// # Panics
    ///
    /// If the allocation fails, like `Vec` does.
    pub fn new(length: usize) -> Self {
        let inner = alloc::vec![MaxAligned([0; CHUNK]); Self::alloc_len(length)];
        Buffer { inner, len: length }
    }

    /// Allocate zeroed bytes, reporting failure to allocate as an error.
    pub fn try_new(length: usize) -> Result<Self, PixmapError> {
        let chunks = Self::alloc_len(length);
        let mut inner = Vec::new();

        if inner.try_reserve_exact(chunks).is_err() {
            log::warn!("Failed to allocate {} bytes", length);
            return Err(PixmapError::out_of_memory());
        }

        inner.resize(chunks, MaxAligned([0; CHUNK]));
        Ok(Buffer { inner, len: length })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice(&self.inner)[..self.len]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut(&mut self.inner)[..self.len]
    }

    fn alloc_len(length: usize) -> usize {
        length / CHUNK + usize::from(length % CHUNK != 0)
    }
}

impl ops::Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ops::DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for Buffer {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl From<&'_ [u8]> for Buffer {
    fn from(bytes: &'_ [u8]) -> Self {
        let mut buffer = Buffer::new(bytes.len());
        buffer.as_bytes_mut().copy_from_slice(bytes);
        buffer
    }
}

impl core::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buffer").field("len", &self.len).finish()
    }
}
