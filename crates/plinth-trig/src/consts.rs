// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Published absolute error bound for [`sin`](crate::sin)
pub const SIN_TOLERANCE: f64 = 7e-16;

/// Published absolute error bound for [`cos`](crate::cos)
pub const COS_TOLERANCE: f64 = 2.0 * SIN_TOLERANCE;

/// Upper 32 bits of |x| at or below which |x| ≤ π/4 (no reduction needed)
pub(crate) const PIO4_HIGH_WORD: u32 = 0x3fe921fb;

/// Upper 32 bits of 2^20·π/2: below this the Cody-Waite path is exact enough
pub(crate) const MEDIUM_LIMIT_HIGH_WORD: u32 = 0x413921fb;

/// Upper 32 bits of +∞; anything at or above is ∞ or NaN
pub(crate) const NON_FINITE_HIGH_WORD: u32 = 0x7ff00000;

/// |x| < 2^-26: sin(x) rounds to x
pub(crate) const SIN_TINY_HIGH_WORD: u32 = 0x3e500000;

/// |x| < 2^-27·√2: cos(x) rounds to 1
pub(crate) const COS_TINY_HIGH_WORD: u32 = 0x3e46a09e;

/// 2/π
pub(crate) const INV_PIO2: f64 = 6.36619772367581382433e-01;

/// π/4
pub(crate) const PIO4: f64 = 7.85398163397448309616e-01;

/// 1.5 / ε: adding and subtracting rounds to the nearest integer
pub(crate) const TO_INT: f64 = 1.5 / f64::EPSILON;

// π/2 split into three 33-bit pieces, each with the tail that follows it

/// First 33 bits of π/2
pub(crate) const PIO2_1: f64 = 1.57079632673412561417e+00;
/// π/2 - PIO2_1
pub(crate) const PIO2_1T: f64 = 6.07710050650619224932e-11;
/// Second 33 bits of π/2
pub(crate) const PIO2_2: f64 = 6.07710050630396597660e-11;
/// π/2 - (PIO2_1 + PIO2_2)
pub(crate) const PIO2_2T: f64 = 2.02226624879595063154e-21;
/// Third 33 bits of π/2
pub(crate) const PIO2_3: f64 = 2.02226624871116645580e-21;
/// π/2 - (PIO2_1 + PIO2_2 + PIO2_3)
pub(crate) const PIO2_3T: f64 = 8.47842766036889956997e-32;

/// π/2 as a double-double
pub(crate) const PIO2_HI: f64 = 1.57079632679489655800e+00;
pub(crate) const PIO2_LO: f64 = 6.12323399573676603587e-17;

/// Binary expansion of 2/π, 64 bits per word, most significant first.
///
/// Word `k` holds fraction bits `64k + 1 ..= 64k + 64`. 1408 bits cover the
/// 256-bit reduction window for every finite exponent.
pub(crate) const TWO_OVER_PI: [u64; 22] = [
    0xa2f9836e4e441529,
    0xfc2757d1f534ddc0,
    0xdb6295993c439041,
    0xfe5163abdebbc561,
    0xb7246e3a424dd2e0,
    0x06492eea09d1921c,
    0xfe1deb1cb129a73e,
    0xe88235f52ebb4484,
    0xe99c7026b45f7e41,
    0x3991d639835339f4,
    0x9c845f8bbdf9283b,
    0x1ff897ffde05980f,
    0xef2f118b5a0a6d1f,
    0x6d367ecf27cb09b7,
    0x4f463f669e5fea2d,
    0x7527bac7ebe5f17b,
    0x3d0739f78a5292ea,
    0x6bfb5fb11f8d5d08,
    0x56033046fc7b6bab,
    0xf0cfbc209af4361d,
    0xa9e391615ee61b08,
    0x6599855f14a06840,
];
