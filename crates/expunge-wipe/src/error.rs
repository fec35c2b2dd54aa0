// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for expunge-wipe.
use thiserror::Error;

/// Errors from the map/zeroize/flush/unmap cycle.
///
/// Each variant names the syscall phase that failed. No phase is retried;
/// the first failure aborts the whole overwrite and leaves the file
/// partially zeroized up to the last flushed window.
#[derive(Debug, Error)]
pub enum WipeError {
    /// `mmap` of a chunk window failed.
    #[error("failed to map file chunk")]
    MapFailed,

    /// `msync(MS_SYNC)` of a mapped chunk failed.
    #[error("failed to flush mapped chunk to storage")]
    FlushFailed,

    /// `munmap` of a flushed chunk failed.
    #[error("failed to unmap file chunk")]
    UnmapFailed,
}
