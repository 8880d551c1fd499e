// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use plinth_sha256::{Digest, sha256};

use crate::{
    ConfigError, MAX_SWEEP_LEN, Sha256SweepConfig, VerifyError, run_sha256_sweep,
    run_sha256_sweep_with,
};

fn small_config() -> Sha256SweepConfig {
    Sha256SweepConfig {
        max_len: 300,
        extra_len: Some(5000),
        fill: b'a',
    }
}

#[test]
fn test_small_sweep_passes() {
    let report = run_sha256_sweep(&small_config()).expect("plinth-sha256 disagrees with sha2");

    assert_eq!(report.lengths_checked, 301);
    assert_eq!(report.bytes_hashed, (0..300u64).sum::<u64>() + 5000);
}

#[test]
fn test_sweep_with_other_fill_bytes() {
    for fill in [0x00, 0x80, 0xff] {
        let config = Sha256SweepConfig {
            max_len: 140,
            extra_len: None,
            fill,
        };

        let report = run_sha256_sweep(&config).expect("plinth-sha256 disagrees with sha2");
        assert_eq!(report.lengths_checked, 140);
    }
}

#[test]
fn test_empty_sweep() {
    let config = Sha256SweepConfig {
        max_len: 0,
        extra_len: None,
        fill: b'a',
    };

    let report = run_sha256_sweep(&config).expect("empty sweep cannot fail");
    assert_eq!(report.lengths_checked, 0);
    assert_eq!(report.bytes_hashed, 0);
}

#[test]
fn test_mismatch_reports_length() {
    // Corrupts digests of messages longer than one block
    let faulty = |message: &[u8]| {
        let mut bytes = sha256(message).into_bytes();
        if message.len() > 64 {
            bytes[31] ^= 1;
        }
        Digest::from_bytes(bytes)
    };

    let err =
        run_sha256_sweep_with(&small_config(), faulty).expect_err("corruption went unnoticed");

    match err {
        VerifyError::DigestMismatch {
            len,
            expected,
            actual,
        } => {
            assert_eq!(len, 65);
            assert_eq!(expected, sha256(&[b'a'; 65]));
            assert_ne!(expected, actual);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_mismatch_on_extra_length() {
    let faulty = |message: &[u8]| {
        if message.len() == 5000 {
            Digest::from_bytes([0u8; 32])
        } else {
            sha256(message)
        }
    };

    let err =
        run_sha256_sweep_with(&small_config(), faulty).expect_err("corruption went unnoticed");
    assert!(matches!(err, VerifyError::DigestMismatch { len: 5000, .. }));
    assert!(err.to_string().starts_with("digest mismatch at length 5000: oracle "));
}

#[test]
fn test_invalid_config_is_rejected_before_hashing() {
    let config = Sha256SweepConfig {
        extra_len: Some(MAX_SWEEP_LEN * 2),
        ..small_config()
    };

    let err = run_sha256_sweep_with(&config, |_| unreachable!("hashed despite invalid config"))
        .expect_err("invalid config accepted");

    assert_eq!(
        err,
        VerifyError::InvalidConfig(ConfigError::LengthTooLarge {
            len: MAX_SWEEP_LEN * 2,
            max: MAX_SWEEP_LEN,
        })
    );
}
