// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! expunge_wipe - Seek-free zero-overwrite of file contents via chunked mmap.
//!
//! Overwrites a file with zeros one page-sized window at a time: each window
//! is mapped shared, zeroized, flushed synchronously with `msync(MS_SYNC)`,
//! and unmapped before the next window is established. Peak mapping size is
//! bounded by [`PAGE_SIZE`] regardless of file size, and no positional seek
//! is ever issued against the file.
//!
//! This zeroizes the bytes addressable through the file's mapped region; it
//! makes no guarantee against wear-leveling or copy-on-write filesystems,
//! which may retain old blocks regardless of overwrite.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod chunk;
mod error;
mod wipe;

pub use error::WipeError;
pub use wipe::{PAGE_SIZE, wipe_file};
