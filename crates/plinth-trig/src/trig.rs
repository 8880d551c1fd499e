// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{COS_TINY_HIGH_WORD, NON_FINITE_HIGH_WORD, PIO4_HIGH_WORD, SIN_TINY_HIGH_WORD};
use crate::kernel::{k_cos, k_sin};
use crate::reduce::{high_word, reduce};

/// Sine of `x` (radians).
///
/// Returns NaN for NaN and ±∞. Preserves the sign of zero.
pub fn sin(x: f64) -> f64 {
    let ix = high_word(x);

    if ix <= PIO4_HIGH_WORD {
        if ix < SIN_TINY_HIGH_WORD {
            return x;
        }
        return k_sin(x, 0.0, false);
    }

    if ix >= NON_FINITE_HIGH_WORD {
        return x - x;
    }

    let r = reduce(x);
    match r.quadrant {
        0 => k_sin(r.hi, r.lo, true),
        1 => k_cos(r.hi, r.lo),
        2 => -k_sin(r.hi, r.lo, true),
        _ => -k_cos(r.hi, r.lo),
    }
}

/// Cosine of `x` (radians).
///
/// Returns NaN for NaN and ±∞.
pub fn cos(x: f64) -> f64 {
    let ix = high_word(x);

    if ix <= PIO4_HIGH_WORD {
        if ix < COS_TINY_HIGH_WORD {
            return 1.0;
        }
        return k_cos(x, 0.0);
    }

    if ix >= NON_FINITE_HIGH_WORD {
        return x - x;
    }

    let r = reduce(x);
    match r.quadrant {
        0 => k_cos(r.hi, r.lo),
        1 => -k_sin(r.hi, r.lo, true),
        2 => -k_cos(r.hi, r.lo),
        _ => k_sin(r.hi, r.lo, true),
    }
}

/// Sine and cosine of `x` from a single reduction.
///
/// Bitwise identical to `(sin(x), cos(x))`.
pub fn sin_cos(x: f64) -> (f64, f64) {
    let ix = high_word(x);

    if ix <= PIO4_HIGH_WORD {
        let s = if ix < SIN_TINY_HIGH_WORD {
            x
        } else {
            k_sin(x, 0.0, false)
        };
        let c = if ix < COS_TINY_HIGH_WORD {
            1.0
        } else {
            k_cos(x, 0.0)
        };
        return (s, c);
    }

    if ix >= NON_FINITE_HIGH_WORD {
        let nan = x - x;
        return (nan, nan);
    }

    let r = reduce(x);
    let s = k_sin(r.hi, r.lo, true);
    let c = k_cos(r.hi, r.lo);

    match r.quadrant {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}
