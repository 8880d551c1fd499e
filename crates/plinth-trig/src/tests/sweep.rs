// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Sweep against the platform math library over [-10, 10]
//
// The step is accumulated by repeated addition, so sample points pick up
// rounding drift exactly like a hand-written C loop would.

use crate::{COS_TOLERANCE, SIN_TOLERANCE, cos, sin, sin_cos};

#[test]
fn test_sin_within_tolerance_of_std() {
    let mut x = -10.0f64;
    let mut samples = 0usize;

    while x <= 10.0 {
        let diff = (sin(x) - x.sin()).abs();
        assert!(diff < SIN_TOLERANCE, "sin({x}) off by {diff:e}");
        x += 1e-4;
        samples += 1;
    }

    assert_eq!(samples, 200_001);
}

#[test]
fn test_cos_within_tolerance_of_std() {
    let mut x = -10.0f64;

    while x <= 10.0 {
        let diff = (cos(x) - x.cos()).abs();
        assert!(diff < COS_TOLERANCE, "cos({x}) off by {diff:e}");
        x += 1e-4;
    }
}

#[test]
fn test_sin_cos_bitwise_matches_separate_calls() {
    let mut x = -10.0f64;

    while x <= 10.0 {
        let (s, c) = sin_cos(x);
        assert_eq!(s.to_bits(), sin(x).to_bits(), "sin_cos({x}).0");
        assert_eq!(c.to_bits(), cos(x).to_bits(), "sin_cos({x}).1");
        x += 1.7e-3;
    }
}

#[test]
fn test_tolerance_constants() {
    assert_eq!(SIN_TOLERANCE, 7e-16);
    assert_eq!(COS_TOLERANCE, 2.0 * SIN_TOLERANCE);
}
