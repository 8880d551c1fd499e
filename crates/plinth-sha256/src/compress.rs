// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 block compression per RFC 6234 Section 6.2.2

use plinth_util::{fast_zeroize_slice, u32_from_be};

use crate::consts::{BLOCK_LEN, K256};

/// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z) per RFC 6234 Section 5.1
#[inline(always)]
const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z) per RFC 6234 Section 5.1
#[inline(always)]
const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0(x) = ROTR^2(x) ⊕ ROTR^13(x) ⊕ ROTR^22(x)
#[inline(always)]
const fn bsig0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1(x) = ROTR^6(x) ⊕ ROTR^11(x) ⊕ ROTR^25(x)
#[inline(always)]
const fn bsig1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// σ0(x) = ROTR^7(x) ⊕ ROTR^18(x) ⊕ SHR^3(x)
#[inline(always)]
const fn ssig0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1(x) = ROTR^17(x) ⊕ ROTR^19(x) ⊕ SHR^10(x)
#[inline(always)]
const fn ssig1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// SHA-256 compression function (single block)
///
/// Updates the chaining value `h` with one 512-bit message block.
///
/// # Arguments
/// * `h` - Hash state H(i-1) on input, H(i) on output
/// * `block` - Message block (64 bytes)
///
/// # Example
///
/// ```
/// use plinth_sha256::{compress_block, H0};
///
/// let mut h = H0;
/// compress_block(&mut h, &[0u8; 64]);
/// assert_ne!(h, H0);
/// ```
pub fn compress_block(h: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    compress(h, block);
}

/// Compress one block read from a slice of exactly `BLOCK_LEN` bytes.
///
/// Lets `update` feed blocks straight from the caller's buffer without an
/// intermediate copy.
pub(crate) fn compress(h: &mut [u32; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN, "compress() requires a full block");

    let mut w = [0u32; 64];
    let mut tmp_word = [0u8; 4];

    // W[0..15] from block (big-endian)
    for (wt, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        tmp_word.copy_from_slice(bytes);
        u32_from_be(wt, &mut tmp_word);
    }

    // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
    for t in 16..64 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let mut a = h[0];
    let mut b = h[1];
    let mut c = h[2];
    let mut d = h[3];
    let mut e = h[4];
    let mut f = h[5];
    let mut g = h[6];
    let mut hh = h[7];

    for (k, wt) in K256.iter().zip(w.iter()) {
        let t1 = hh
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*wt);
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        hh = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    h[0] = h[0].wrapping_add(a);
    h[1] = h[1].wrapping_add(b);
    h[2] = h[2].wrapping_add(c);
    h[3] = h[3].wrapping_add(d);
    h[4] = h[4].wrapping_add(e);
    h[5] = h[5].wrapping_add(f);
    h[6] = h[6].wrapping_add(g);
    h[7] = h[7].wrapping_add(hh);

    fast_zeroize_slice(&mut w);
}
