// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use core::fmt;

use subtle::{Choice, ConstantTimeEq};

use crate::consts::HASH_LEN;
use crate::error::DigestError;

/// A 32-byte SHA-256 digest.
///
/// Equality is constant-time.
#[derive(Clone, Copy)]
pub struct Digest([u8; HASH_LEN]);

impl Digest {
    /// Wrap raw digest bytes
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the digest bytes
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Unwrap into the digest bytes
    pub const fn into_bytes(self) -> [u8; HASH_LEN] {
        self.0
    }

    /// Parse a digest from 64 hex characters (either case).
    ///
    /// # Errors
    /// - [`DigestError::InvalidLength`] if `hex` is not exactly 64 characters
    /// - [`DigestError::InvalidHex`] on a non-hex character
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        if hex.len() != 2 * HASH_LEN {
            return Err(DigestError::InvalidLength {
                expected: 2 * HASH_LEN,
                actual: hex.len(),
            });
        }

        let mut out = [0u8; HASH_LEN];
        hex::decode_to_slice(hex, &mut out).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { index, .. } => {
                DigestError::InvalidHex { position: index }
            }
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                DigestError::InvalidLength {
                    expected: 2 * HASH_LEN,
                    actual: hex.len(),
                }
            }
        })?;

        Ok(Self(out))
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        alloc::format!("{self:x}")
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Digest {}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_LEN]> for Digest {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; HASH_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 2 * HASH_LEN];
        hex::encode_to_slice(self.0, &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}
