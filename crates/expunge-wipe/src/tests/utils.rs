// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seccomp helpers for syscall-failure injection.
//!
//! Filters are process-wide and irreversible, so tests that use them run
//! as ignored tests in a subprocess (see `run_test_as_subprocess`).

use libseccomp::{ScmpAction, ScmpFilterContext, ScmpSyscall};

/// Runs an ignored test as a subprocess and returns its exit code.
pub(crate) fn run_test_as_subprocess(test_name: &str) -> Option<i32> {
    let exe = std::env::current_exe().expect("Failed to get current exe");
    let status = std::process::Command::new(exe)
        .args([
            "--exact",
            test_name,
            "--ignored",
            "--test-threads=1",
            "--nocapture",
        ])
        .status()
        .expect("Failed to run subprocess");
    status.code()
}

/// Makes the named syscall fail with EPERM for the rest of the process.
fn block_syscall(name: &str) {
    let mut filter = ScmpFilterContext::new(ScmpAction::Allow).expect("Failed to create filter");
    filter
        .add_rule(
            ScmpAction::Errno(libc::EPERM),
            ScmpSyscall::from_name(name).expect("Failed to from_name(..)"),
        )
        .expect("Failed to add rule");
    filter.load().expect("Failed to load filter");
}

pub(crate) fn block_msync() {
    block_syscall("msync");
}

pub(crate) fn block_munmap() {
    block_syscall("munmap");
}
