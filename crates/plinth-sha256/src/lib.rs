// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 digest engine
//!
//! Implementation per FIPS 180-4 and RFC 6234. Constants live in `const`
//! tables, so there is no module initialization step. Working state is
//! zeroized after finalization and when a session is dropped.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//!
//! # Example
//!
//! ```
//! use plinth_sha256::{sha256, Sha256};
//!
//! let one_shot = sha256(b"abc");
//!
//! let mut session = Sha256::new();
//! session.update(b"a");
//! session.update(b"bc");
//! assert_eq!(session.finalize(), one_shot);
//!
//! assert_eq!(
//!     one_shot.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod digest;
mod error;
mod sha256;

pub use compress::compress_block;
pub use consts::{BLOCK_LEN, H0, HASH_LEN, K256, LENGTH_FIELD_LEN};
pub use digest::Digest;
pub use error::DigestError;
pub use sha256::{Sha256, padded_len, sha256};
