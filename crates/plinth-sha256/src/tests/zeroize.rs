// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::ManuallyDrop;

use crate::Sha256;

#[test]
fn test_drop_scrubs_session() {
    let mut state = ManuallyDrop::new(Sha256::new());
    state.update(&[0xA5u8; 100]);
    assert!(!state.is_scrubbed());

    // SAFETY: the value is not used as a live session after this, only its
    // plain-old-data fields are inspected.
    unsafe { ManuallyDrop::drop(&mut state) };

    assert!(state.is_scrubbed());
}

#[test]
fn test_reset_scrubs_buffer() {
    let mut state = Sha256::new();
    state.update(&[0xA5u8; 10]);
    assert!(!state.buffer_is_zeroized());

    state.reset();

    assert!(state.buffer_is_zeroized());
    assert_eq!(state.total_len(), 0);
}

#[test]
fn test_full_blocks_leave_no_buffered_bytes() {
    let mut state = Sha256::new();
    state.update(&[0xA5u8; 128]);

    assert!(state.buffer_is_zeroized());
}
