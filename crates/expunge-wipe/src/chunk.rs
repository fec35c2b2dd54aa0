// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChunkMapping - one shared file-backed mapping with explicit lifecycle.
//!
//! Wraps a single `MAP_SHARED` mapping of a chunk window. Each syscall is
//! exposed separately so every phase can fail (and be tested) on its own.

use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};
use std::fs::File;
use std::os::unix::io::AsRawFd;

use super::error::WipeError;

/// A shared, writable mapping of one chunk window of a file.
///
/// Exclusively owned by the loop iteration that created it. Dropping the
/// guard releases the mapping best-effort; the success path goes through
/// [`ChunkMapping::unmap`], which surfaces the `munmap` result.
#[derive(Debug)]
pub(crate) struct ChunkMapping {
    ptr: *mut u8,
    len: usize,
}

impl ChunkMapping {
    /// Maps `len` bytes of `file` at `offset`, shared and read-write.
    ///
    /// Writes through the mapping land in the file's own pages, not a
    /// private copy. `offset` must be page-aligned.
    pub(crate) fn map(file: &File, offset: u64, len: usize) -> Result<Self, WipeError> {
        let ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                file.as_raw_fd(),
                offset as libc::off_t,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(WipeError::MapFailed);
        }

        Ok(Self {
            ptr: ptr as *mut u8,
            len,
        })
    }

    /// Overwrites every mapped byte with zero.
    pub(crate) fn zeroize(&mut self) {
        unsafe { ptr::write_bytes(self.ptr, 0, self.len) };
        compiler_fence(Ordering::SeqCst);
    }

    /// Flushes the mapped bytes to the backing device.
    ///
    /// Blocks until the write is durable (`MS_SYNC`), not merely scheduled.
    pub(crate) fn flush(&self) -> Result<(), WipeError> {
        let failed =
            unsafe { libc::msync(self.ptr as *mut libc::c_void, self.len, libc::MS_SYNC) } != 0;

        if failed {
            return Err(WipeError::FlushFailed);
        }

        Ok(())
    }

    /// Releases the mapping, surfacing a `munmap` failure.
    pub(crate) fn unmap(self) -> Result<(), WipeError> {
        let failed = unsafe { libc::munmap(self.ptr as *mut libc::c_void, self.len) } != 0;
        core::mem::forget(self);

        if failed {
            return Err(WipeError::UnmapFailed);
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl Drop for ChunkMapping {
    fn drop(&mut self) {
        // Error-path release only; unmap() forgets self on the success path.
        unsafe { libc::munmap(self.ptr as *mut libc::c_void, self.len) };
    }
}
