// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! expunge - securely delete a file by zero-overwriting it before unlink.
//!
//! Overwrites every byte of the target with zeros through bounded shared
//! mappings (see `expunge-wipe`), then removes the directory entry. On any
//! failure the entry is left in place, so an incomplete overwrite never
//! silently discards the file.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;

use expunge_wipe::WipeError;

/// One variant per failing phase; each maps to a stderr diagnostic and
/// exit status 1.
#[derive(Debug, Error)]
enum CliError {
    #[error("usage: expunge 'filename'")]
    Usage,

    #[error("failed to open {path} read-write: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to query length of {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Wipe(#[from] WipeError),

    #[error("failed to unlink {path}: {source}")]
    Unlink {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn run(path: &Path) -> Result<(), CliError> {
    let file = File::options()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| CliError::Open {
            path: path.to_owned(),
            source,
        })?;

    // Length comes from metadata, never from a seek.
    let file_len = file
        .metadata()
        .map_err(|source| CliError::Metadata {
            path: path.to_owned(),
            source,
        })?
        .len();

    expunge_wipe::wipe_file(&file, file_len)?;
    drop(file);

    // Reached only after every chunk was flushed.
    fs::remove_file(path).map_err(|source| CliError::Unlink {
        path: path.to_owned(),
        source,
    })
}

fn main() -> ExitCode {
    let mut args = std::env::args_os();
    let _argv0 = args.next();

    let result = match (args.next(), args.next()) {
        (Some(path), None) => run(Path::new(&path)),
        _ => Err(CliError::Usage),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("expunge: {err}");
            ExitCode::FAILURE
        }
    }
}
