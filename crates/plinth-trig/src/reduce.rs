// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Argument reduction modulo π/2

use crate::consts::{
    INV_PIO2, MEDIUM_LIMIT_HIGH_WORD, NON_FINITE_HIGH_WORD, PIO2_1, PIO2_1T, PIO2_2, PIO2_2T,
    PIO2_3, PIO2_3T, PIO2_HI, PIO2_LO, PIO4, PIO4_HIGH_WORD, TO_INT, TWO_OVER_PI,
};

/// An angle folded into [-π/4, π/4].
///
/// `x ≈ n·π/2 + (hi + lo)` with `quadrant = n mod 4`. `hi + lo` is a
/// double-double carrying the remainder to well beyond `f64` precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    /// `n mod 4`
    pub quadrant: u32,
    /// Leading part of the remainder
    pub hi: f64,
    /// Trailing correction, |lo| ≤ ulp(hi) / 2
    pub lo: f64,
}

/// Upper 32 bits of |x|
#[inline(always)]
pub(crate) fn high_word(x: f64) -> u32 {
    ((x.to_bits() >> 32) as u32) & 0x7fff_ffff
}

/// Reduce `x` modulo π/2.
///
/// Arguments already in [-π/4, π/4] come back unchanged in quadrant 0.
/// NaN and ±∞ come back as a NaN remainder in quadrant 0.
///
/// # Example
///
/// ```
/// use plinth_trig::reduce;
///
/// let r = reduce(10.0);
/// assert_eq!(r.quadrant, 2);
/// assert!((r.hi - (10.0 - 3.0 * core::f64::consts::PI)).abs() < 1e-15);
/// ```
pub fn reduce(x: f64) -> Reduction {
    let ix = high_word(x);

    if ix <= PIO4_HIGH_WORD {
        return Reduction {
            quadrant: 0,
            hi: x,
            lo: 0.0,
        };
    }

    if ix >= NON_FINITE_HIGH_WORD {
        let nan = x - x;
        return Reduction {
            quadrant: 0,
            hi: nan,
            lo: nan,
        };
    }

    if ix < MEDIUM_LIMIT_HIGH_WORD {
        reduce_medium(x)
    } else {
        reduce_large(x)
    }
}

/// Cody-Waite reduction for |x| < 2^20·π/2.
///
/// Subtracts n·π/2 in up to three 33-bit stages. Each later stage only runs
/// when the previous result lost enough leading bits to cancellation; the
/// third stage carries 151 bits of π/2, which covers every double in range.
pub(crate) fn reduce_medium(x: f64) -> Reduction {
    let ix = high_word(x);

    // Round x·2/π to the nearest integer
    let mut fnn = (x * INV_PIO2 + TO_INT) - TO_INT;
    let mut n = fnn as i32;
    let mut r = x - fnn * PIO2_1;
    let mut w = fnn * PIO2_1T;

    // Keep |r| ≤ π/4 when the rounding above lands on the wrong side
    if r - w < -PIO4 {
        n -= 1;
        fnn -= 1.0;
        r = x - fnn * PIO2_1;
        w = fnn * PIO2_1T;
    } else if r - w > PIO4 {
        n += 1;
        fnn += 1.0;
        r = x - fnn * PIO2_1;
        w = fnn * PIO2_1T;
    }

    let mut y0 = r - w;

    let ex = ix >> 20;
    let exponent_of = |v: f64| ((v.to_bits() >> 52) & 0x7ff) as u32;

    // Second stage, good to 118 bits
    if ex.saturating_sub(exponent_of(y0)) > 16 {
        let t = r;
        w = fnn * PIO2_2;
        r = t - w;
        w = fnn * PIO2_2T - ((t - r) - w);
        y0 = r - w;

        // Third stage, good to 151 bits
        if ex.saturating_sub(exponent_of(y0)) > 49 {
            let t = r;
            w = fnn * PIO2_3;
            r = t - w;
            w = fnn * PIO2_3T - ((t - r) - w);
            y0 = r - w;
        }
    }

    let y1 = (r - y0) - w;

    Reduction {
        quadrant: (n & 3) as u32,
        hi: y0,
        lo: y1,
    }
}

/// 64 bits of 2/π starting at fraction bit `pos` (1-based).
///
/// Positions before the binary point read as zero, positions past the end
/// of the table as zero.
fn two_over_pi_bits(pos: i32) -> u64 {
    let word = |i: i32| -> u64 {
        usize::try_from(i)
            .ok()
            .and_then(|i| TWO_OVER_PI.get(i).copied())
            .unwrap_or(0)
    };

    let idx = pos - 1;
    if idx < 0 {
        let shift = -idx;
        return if shift >= 64 { 0 } else { word(0) >> shift };
    }

    let (w, b) = (idx / 64, (idx % 64) as u32);
    if b == 0 {
        word(w)
    } else {
        (word(w) << b) | (word(w + 1) >> (64 - b))
    }
}

/// 2^e for e in the normal exponent range
#[inline(always)]
fn pow2(e: i32) -> f64 {
    f64::from_bits(((e + 1023) as u64) << 52)
}

/// Exact product of two doubles as `p + e` (Dekker / Veltkamp).
#[inline(always)]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    const SPLITTER: f64 = 134_217_729.0; // 2^27 + 1

    let split = |v: f64| {
        let t = SPLITTER * v;
        let hi = t - (t - v);
        (hi, v - hi)
    };

    let p = a * b;
    let (ah, al) = split(a);
    let (bh, bl) = split(b);
    let e = ((ah * bh - p) + ah * bl + al * bh) + al * bl;

    (p, e)
}

/// Two's complement negation of a big-endian 256-bit integer
fn negate_256(v: &mut [u64; 4]) {
    let mut carry = true;
    for limb in v.iter_mut().rev() {
        let (sum, overflow) = (!*limb).overflowing_add(carry as u64);
        *limb = sum;
        carry = overflow;
    }
}

/// Payne-Hanek style reduction for large |x|.
///
/// Writes |x| = m·2^e with a 53-bit integer m. Bits of 2/π before position
/// e - 1 contribute only multiples of 4 to x·2/π and are skipped. The next
/// 256 bits are multiplied by m modulo 2^256, which yields the quadrant in
/// the top two bits and the fraction below, exact to ~2^-200.
pub(crate) fn reduce_large(x: f64) -> Reduction {
    let bits = x.to_bits();
    let negative = bits >> 63 != 0;
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);

    // x·2/π mod 4 = m·window / 2^254
    let start = exponent - 1;
    let window = [
        two_over_pi_bits(start),
        two_over_pi_bits(start + 64),
        two_over_pi_bits(start + 128),
        two_over_pi_bits(start + 192),
    ];

    // Little-endian product limbs, mod 2^256
    let mut product = [0u64; 4];
    let mut carry: u128 = 0;
    for (limb, word) in product.iter_mut().zip(window.iter().rev()) {
        let t = (mantissa as u128) * (*word as u128) + carry;
        *limb = t as u64;
        carry = t >> 64;
    }

    let mut quadrant = (product[3] >> 62) as u32;

    // Fraction bits 0..=253, left aligned, big-endian
    let mut frac = [
        (product[3] << 2) | (product[2] >> 62),
        (product[2] << 2) | (product[1] >> 62),
        (product[1] << 2) | (product[0] >> 62),
        product[0] << 2,
    ];

    // Round to the nearest quadrant: fraction ≥ 1/2 becomes fraction - 1
    let rounded_up = frac[0] >> 63 != 0;
    if rounded_up {
        negate_256(&mut frac);
        quadrant = quadrant.wrapping_add(1);
    }

    let leading_zeros = {
        let mut lz = 0u32;
        for limb in &frac {
            lz += limb.leading_zeros();
            if *limb != 0 {
                break;
            }
        }
        lz
    };

    let (mut hi, mut lo) = if leading_zeros >= 256 {
        (0.0, 0.0)
    } else {
        // Top 128 significant bits of the fraction
        let word = (leading_zeros / 64) as usize;
        let shift = leading_zeros % 64;
        let at = |i: usize| frac.get(i).copied().unwrap_or(0);
        let (top, next) = if shift == 0 {
            (at(word), at(word + 1))
        } else {
            (
                (at(word) << shift) | (at(word + 1) >> (64 - shift)),
                (at(word + 1) << shift) | (at(word + 2) >> (64 - shift)),
            )
        };

        // fraction ≈ (top·2^64 + next)·2^-(128 + lz), split into a
        // 53-bit head and the remaining bits
        let lz = leading_zeros as i32;
        let head = ((top >> 11) << 11) as f64 * pow2(-(64 + lz));
        let tail = ((((top & 0x7ff) as u128) << 64) | next as u128) as f64 * pow2(-(128 + lz));

        // (head + tail)·π/2 as a double-double
        let (p, e) = two_prod(head, PIO2_HI);
        let e = e + (head * PIO2_LO + tail * PIO2_HI);
        let y0 = p + e;
        (y0, e - (y0 - p))
    };

    if rounded_up {
        hi = -hi;
        lo = -lo;
    }

    if negative {
        hi = -hi;
        lo = -lo;
        quadrant = quadrant.wrapping_neg();
    }

    Reduction {
        quadrant: quadrant & 3,
        hi,
        lo,
    }
}
