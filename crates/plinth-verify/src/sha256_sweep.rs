// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use plinth_sha256::Digest;
use plinth_util::fill_bytes_with_pattern;
use sha2::Digest as _;
use tracing::{debug, error, info};

use crate::config::Sha256SweepConfig;
use crate::error::VerifyError;

/// Lengths between two progress lines
const MILESTONE: usize = 1 << 10;

/// Outcome of a passing SHA-256 sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sha256Report {
    /// Number of distinct message lengths hashed
    pub lengths_checked: usize,
    /// Sum of all message lengths
    pub bytes_hashed: u64,
}

/// Hashes every configured length with `plinth-sha256` and `sha2`.
pub fn run_sha256_sweep(config: &Sha256SweepConfig) -> Result<Sha256Report, VerifyError> {
    run_sha256_sweep_with(config, plinth_sha256::sha256)
}

/// Same sweep as [`run_sha256_sweep`] with the hash under test supplied by
/// the caller.
pub fn run_sha256_sweep_with<F>(
    config: &Sha256SweepConfig,
    hash: F,
) -> Result<Sha256Report, VerifyError>
where
    F: Fn(&[u8]) -> Digest,
{
    config.validate()?;

    info!(
        max_len = config.max_len,
        extra_len = ?config.extra_len,
        fill = config.fill,
        "starting sha256 sweep"
    );

    // One buffer serves every length as a prefix
    let mut buffer = vec![0u8; config.buffer_len()];
    fill_bytes_with_pattern(&mut buffer, config.fill);

    let mut report = Sha256Report {
        lengths_checked: 0,
        bytes_hashed: 0,
    };

    let lengths = (0..config.max_len).chain(config.extra_len);
    for len in lengths {
        let message = &buffer[..len];

        let expected = Digest::from_bytes(sha2::Sha256::digest(message).into());
        let actual = hash(message);

        if actual != expected {
            error!(len, %expected, %actual, "sha256 digest mismatch");
            return Err(VerifyError::DigestMismatch {
                len,
                expected,
                actual,
            });
        }

        report.lengths_checked += 1;
        report.bytes_hashed += len as u64;

        if len > 0 && len % MILESTONE == 0 {
            debug!(len, "sha256 lengths verified");
        }
    }

    info!(
        lengths = report.lengths_checked,
        bytes = report.bytes_hashed,
        "sha256 sweep passed"
    );

    Ok(report)
}
