// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The chunked overwrite loop.

use std::fs::File;

use super::chunk::ChunkMapping;
use super::error::WipeError;

/// Mapping window granularity in bytes.
///
/// Window offsets are always multiples of this, so every mapping is
/// page-aligned on systems whose page size divides it.
pub const PAGE_SIZE: u64 = 4096;

/// Iterator over the `(offset, length)` windows tiling `0..file_len`.
///
/// Offsets are strictly increasing and every window except possibly the
/// last is exactly [`PAGE_SIZE`] bytes. An empty file yields no windows.
#[derive(Debug, Clone)]
pub(crate) struct ChunkWindows {
    offset: u64,
    file_len: u64,
}

impl ChunkWindows {
    pub(crate) fn new(file_len: u64) -> Self {
        Self {
            offset: 0,
            file_len,
        }
    }
}

impl Iterator for ChunkWindows {
    type Item = (u64, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.file_len {
            return None;
        }

        // Subtract before min() so nothing overflows near u64::MAX.
        let len = (self.file_len - self.offset).min(PAGE_SIZE);
        let window = (self.offset, len as usize);
        self.offset += len;

        Some(window)
    }
}

/// Overwrites every byte of `file` with zero, one bounded mapping at a time.
///
/// `file_len` must come from a metadata query on the same handle immediately
/// before this call. Each window is mapped shared, zeroized, flushed with
/// `msync(MS_SYNC)`, and unmapped before the next window is mapped: no two
/// mappings of the file ever coexist, and no mapping exceeds [`PAGE_SIZE`]
/// bytes. An empty file succeeds without attempting any mapping.
///
/// The handle is borrowed and never closed here, on either path.
///
/// # Errors
///
/// The first failing phase aborts the whole overwrite with its
/// [`WipeError`] variant. The file is then partially zeroized up to the
/// last flushed window and the caller must NOT remove the directory entry.
///
/// Behavior is undefined if another process truncates or extends the file
/// between the metadata query and the mapping calls.
pub fn wipe_file(file: &File, file_len: u64) -> Result<(), WipeError> {
    for (offset, len) in ChunkWindows::new(file_len) {
        let mut mapping = ChunkMapping::map(file, offset, len)?;
        mapping.zeroize();
        // On flush failure the guard's Drop still releases the mapping.
        mapping.flush()?;
        mapping.unmap()?;
    }

    Ok(())
}
