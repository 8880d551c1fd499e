// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Minimax kernels on [-π/4, π/4]
//!
//! Inputs are a reduced argument `x + y` where `y` is the tail of a
//! double-double. Both kernels stay below one ulp on the interval.

// sin(x) ≈ x + S1·x³ + ... + S6·x¹³, |error| < 2^-58
const S1: f64 = -1.66666666666666324348e-01;
const S2: f64 = 8.33333333332248946124e-03;
const S3: f64 = -1.98412698298579493134e-04;
const S4: f64 = 2.75573137070700676789e-06;
const S5: f64 = -2.50507602534068634195e-08;
const S6: f64 = 1.58969099521155010221e-10;

// cos(x) ≈ 1 - x²/2 + C1·x⁴ + ... + C6·x¹⁴, |error| < 2^-58
const C1: f64 = 4.16666666666666019037e-02;
const C2: f64 = -1.38888888888741095749e-03;
const C3: f64 = 2.48015872894767294178e-05;
const C4: f64 = -2.75573143513906633035e-07;
const C5: f64 = 2.08757232129817482790e-09;
const C6: f64 = -1.13596475577881948265e-11;

/// Sine of `x + y` for |x| ≤ π/4.
///
/// With `has_tail == false`, `y` is assumed zero and skipped.
#[inline]
pub(crate) fn k_sin(x: f64, y: f64, has_tail: bool) -> f64 {
    let z = x * x;
    let w = z * z;
    let r = S2 + z * (S3 + z * S4) + z * w * (S5 + z * S6);
    let v = z * x;

    if has_tail {
        x - ((z * (0.5 * y - v * r) - y) - v * S1)
    } else {
        x + v * (S1 + z * r)
    }
}

/// Cosine of `x + y` for |x| ≤ π/4.
///
/// 1 - x²/2 is evaluated as `w + ((1 - w) - x²/2)` to recover the bits lost
/// when w = 1 - x²/2 rounds.
#[inline]
pub(crate) fn k_cos(x: f64, y: f64) -> f64 {
    let z = x * x;
    let w = z * z;
    let r = z * (C1 + z * (C2 + z * C3)) + w * w * (C4 + z * (C5 + z * C6));
    let hz = 0.5 * z;
    let w = 1.0 - hz;

    w + (((1.0 - w) - hz) + (z * r - x * y))
}
