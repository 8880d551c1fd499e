// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use plinth::sha256::{Digest, HASH_LEN, sha256};
use plinth::trig::{SIN_TOLERANCE, reduce, sin};
use sha2::Digest as _;

#[test]
fn test_sha256_reexport_matches_oracle() {
    let message = b"The quick brown fox jumps over the lazy dog";
    let expected: [u8; HASH_LEN] = sha2::Sha256::digest(message).into();

    assert_eq!(sha256(message), Digest::from_bytes(expected));
    assert_eq!(sha256(message).to_hex(), hex::encode(expected));
}

#[test]
fn test_trig_reexport() {
    assert!((sin(0.5) - 0.5f64.sin()).abs() < SIN_TOLERANCE);
    assert_eq!(reduce(0.5).quadrant, 0);
}
