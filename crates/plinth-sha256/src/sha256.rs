// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 hashing session per RFC 6234 Section 6.2

use core::fmt;

use plinth_util::{fast_zeroize_slice, u32_to_be, u64_to_be, zeroize_primitive};

use crate::compress::compress;
use crate::consts::{BLOCK_LEN, H0, HASH_LEN, LENGTH_FIELD_LEN};
use crate::digest::Digest;

/// Incremental SHA-256 session.
///
/// Feed data with [`update`](Sha256::update) in chunks of any size, then
/// consume the session with [`finalize`](Sha256::finalize). Any chunking of
/// the same message produces the same digest as [`sha256`].
///
/// A session is exclusively owned by its caller. `finalize` takes `self`, so
/// a session cannot be finalized twice or updated afterwards. Chaining
/// values and buffered input are zeroized on drop.
pub struct Sha256 {
    // Hash state H(i)
    h: [u32; 8],

    // Partial block not yet compressed
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,

    // Message length in bytes, modulo 2^64
    total_len: u64,
}

impl Sha256 {
    /// Create a new session initialized with H(0)
    pub const fn new() -> Self {
        Self {
            h: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Number of message bytes absorbed so far
    pub const fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Absorb `data` into the session.
    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            data = &data[copy_len..];

            if self.buffer_len < BLOCK_LEN {
                return;
            }

            compress(&mut self.h, &self.buffer);
            fast_zeroize_slice(&mut self.buffer);
            self.buffer_len = 0;
        }

        // Full blocks straight from the input
        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            compress(&mut self.h, block);
        }

        // Buffer the tail
        let remainder = blocks.remainder();
        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffer_len = remainder.len();
    }

    /// Pad, compress the final block(s) and output the digest.
    pub fn finalize(mut self) -> Digest {
        self.pad(compress);

        // Output H(N) big-endian; u32_to_be clears each word as it goes
        let mut out = [0u8; HASH_LEN];
        let mut tmp_word = [0u8; 4];
        for (word, bytes) in self.h.iter_mut().zip(out.chunks_exact_mut(4)) {
            u32_to_be(word, &mut tmp_word);
            bytes.copy_from_slice(&tmp_word);
        }
        fast_zeroize_slice(&mut tmp_word);

        Digest::from_bytes(out)
    }

    /// Append the padding per RFC 6234 Section 4.1 and hand each of the
    /// `padding_blocks(total_len)` final blocks to `emit`.
    fn pad<F>(&mut self, mut emit: F)
    where
        F: FnMut(&mut [u32; 8], &[u8]),
    {
        let spill = padding_blocks(self.total_len) == 2;
        let mut bit_len = self.total_len.wrapping_mul(8);

        // Append 0x80 (1 bit followed by zeros)
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room left for the length field: pad out and compress
        if spill {
            self.buffer[self.buffer_len..].fill(0);
            emit(&mut self.h, &self.buffer);
            self.buffer_len = 0;
        }

        // Zeros up to the length field
        self.buffer[self.buffer_len..BLOCK_LEN - LENGTH_FIELD_LEN].fill(0);

        // 64-bit message length in bits, big-endian
        let mut len_bytes = [0u8; LENGTH_FIELD_LEN];
        u64_to_be(&mut bit_len, &mut len_bytes);
        self.buffer[BLOCK_LEN - LENGTH_FIELD_LEN..].copy_from_slice(&len_bytes);

        emit(&mut self.h, &self.buffer);
    }

    /// Final blocks exactly as `finalize` compresses them
    #[cfg(test)]
    pub(crate) fn final_blocks(mut self) -> alloc::vec::Vec<[u8; BLOCK_LEN]> {
        let mut blocks = alloc::vec::Vec::new();
        self.pad(|h, block| {
            let mut copy = [0u8; BLOCK_LEN];
            copy.copy_from_slice(block);
            blocks.push(copy);
            compress(h, block);
        });
        blocks
    }

    /// Discard absorbed input and return to H(0) for reuse
    pub fn reset(&mut self) {
        self.scrub();
        self.h = H0;
    }

    fn scrub(&mut self) {
        fast_zeroize_slice(&mut self.h);
        fast_zeroize_slice(&mut self.buffer);
        zeroize_primitive(&mut self.buffer_len);
        zeroize_primitive(&mut self.total_len);
    }

    #[cfg(test)]
    pub(crate) fn is_scrubbed(&self) -> bool {
        self.h == [0u32; 8]
            && plinth_util::is_slice_zeroized(&self.buffer)
            && self.buffer_len == 0
            && self.total_len == 0
    }

    #[cfg(test)]
    pub(crate) fn buffer_is_zeroized(&self) -> bool {
        plinth_util::is_slice_zeroized(&self.buffer) && self.buffer_len == 0
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.scrub();
    }
}

impl fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256")
            .field("total_len", &self.total_len)
            .finish_non_exhaustive()
    }
}

/// One-shot SHA-256
///
/// # Example
///
/// ```
/// use plinth_sha256::sha256;
///
/// assert_eq!(
///     sha256(b"").to_hex(),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn sha256(data: &[u8]) -> Digest {
    let mut state = Sha256::new();
    state.update(data);
    state.finalize()
}

/// Number of blocks `finalize` compresses after the last full message block.
///
/// One when the `0x80` marker and the length field fit behind the tail,
/// two when the tail is 56..=63 bytes long.
const fn padding_blocks(message_len: u64) -> u64 {
    let tail = message_len % BLOCK_LEN as u64;
    if tail < (BLOCK_LEN - LENGTH_FIELD_LEN) as u64 { 1 } else { 2 }
}

/// Length in bytes of the padded message for a `message_len`-byte input.
///
/// Always a multiple of `BLOCK_LEN`: the message, one `0x80` byte, zero
/// bytes, and the 8-byte length field. Inputs with `message_len % 64` in
/// `56..=63` spill into an extra block.
pub const fn padded_len(message_len: u64) -> u64 {
    let blocks = message_len / BLOCK_LEN as u64 + padding_blocks(message_len);

    blocks.wrapping_mul(BLOCK_LEN as u64)
}
