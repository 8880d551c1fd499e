// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Error parsing a textual digest
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// Input does not have exactly `2 * HASH_LEN` hex characters
    #[error("expected {expected} hex characters, got {actual}")]
    InvalidLength {
        /// Required number of characters
        expected: usize,
        /// Number of characters supplied
        actual: usize,
    },

    /// Input contains a character outside `[0-9a-fA-F]`
    #[error("invalid hex character at position {position}")]
    InvalidHex {
        /// Byte offset of the offending character
        position: usize,
    },
}
